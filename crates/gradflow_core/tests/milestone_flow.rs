use gradflow_core::{
    MilestoneDraft, MilestoneStatus, ProjectDraft, ProjectId, ProjectStore, StoreError,
    SubmissionDraft, User, UserId, UserRole,
};
use uuid::Uuid;

fn store_with_project() -> (ProjectStore, ProjectId, UserId) {
    let mut store = ProjectStore::new();
    let leader = User::new("Ada Lin", "ada@uni.edu", UserRole::Leader, "#16a34a");
    let leader_id = leader.id;
    let project_id = store
        .create_project(leader, ProjectDraft::new("UX Research", "eye-tracking study"))
        .unwrap();
    (store, project_id, leader_id)
}

#[test]
fn create_milestone_starts_upcoming_and_links_to_project() {
    let (mut store, project_id, _leader) = store_with_project();

    let milestone_id = store
        .create_milestone(
            project_id,
            MilestoneDraft::new("Proposal", "first checkpoint", 1_790_000_000_000),
        )
        .unwrap();

    let milestone = store.milestone(milestone_id).unwrap();
    assert_eq!(milestone.status, MilestoneStatus::Upcoming);
    assert_eq!(milestone.latest_submission_id, None);
    assert!(store
        .project(project_id)
        .unwrap()
        .milestone_ids
        .contains(&milestone_id));
}

#[test]
fn submit_milestone_links_submission_and_moves_to_submitted() {
    let (mut store, project_id, leader) = store_with_project();
    let milestone_id = store
        .create_milestone(project_id, MilestoneDraft::new("Proposal", "", 1_790))
        .unwrap();

    let draft = SubmissionDraft {
        assets: vec!["https://files.gradflow.dev/proposal-v1.pdf".to_string()],
        ..SubmissionDraft::new(leader, "First proposal draft")
    };
    let submission_id = store.submit_milestone(milestone_id, draft).unwrap();

    let milestone = store.milestone(milestone_id).unwrap();
    assert_eq!(milestone.status, MilestoneStatus::Submitted);
    assert_eq!(milestone.latest_submission_id, Some(submission_id));

    let submission = store.submission(submission_id).unwrap();
    assert_eq!(submission.milestone_id, milestone_id);
    assert_eq!(submission.project_id, project_id);
    assert_eq!(submission.status, MilestoneStatus::Submitted);
    assert_eq!(submission.grade, None);
}

#[test]
fn submit_milestone_rejects_states_outside_the_retry_loop() {
    let (mut store, project_id, leader) = store_with_project();
    let milestone_id = store
        .create_milestone(project_id, MilestoneDraft::new("Proposal", "", 1_790))
        .unwrap();

    store
        .submit_milestone(milestone_id, SubmissionDraft::new(leader, "v1"))
        .unwrap();

    // Already submitted: a second hand-in is blocked until review feedback.
    let err = store
        .submit_milestone(milestone_id, SubmissionDraft::new(leader, "v2"))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::MilestoneNotSubmittable {
            status: MilestoneStatus::Submitted,
            ..
        }
    ));

    for terminal in [MilestoneStatus::Approved, MilestoneStatus::Graded] {
        store.set_milestone_status(milestone_id, terminal).unwrap();
        assert!(store
            .submit_milestone(milestone_id, SubmissionDraft::new(leader, "late"))
            .is_err());
    }
}

#[test]
fn changes_requested_reopens_the_submission_loop() {
    let (mut store, project_id, leader) = store_with_project();
    let milestone_id = store
        .create_milestone(project_id, MilestoneDraft::new("Proposal", "", 1_790))
        .unwrap();

    let first = store
        .submit_milestone(milestone_id, SubmissionDraft::new(leader, "v1"))
        .unwrap();
    store
        .set_milestone_status(milestone_id, MilestoneStatus::ChangesRequested)
        .unwrap();

    let second = store
        .submit_milestone(milestone_id, SubmissionDraft::new(leader, "v2"))
        .unwrap();

    assert_ne!(first, second);
    let milestone = store.milestone(milestone_id).unwrap();
    assert_eq!(milestone.status, MilestoneStatus::Submitted);
    assert_eq!(milestone.latest_submission_id, Some(second));
    // The superseded submission record survives for history.
    assert!(store.submission(first).is_some());
}

#[test]
fn set_milestone_status_mirrors_latest_submission() {
    let (mut store, project_id, leader) = store_with_project();
    let milestone_id = store
        .create_milestone(project_id, MilestoneDraft::new("Proposal", "", 1_790))
        .unwrap();
    let submission_id = store
        .submit_milestone(milestone_id, SubmissionDraft::new(leader, "v1"))
        .unwrap();

    store
        .set_milestone_status(milestone_id, MilestoneStatus::UnderReview)
        .unwrap();

    assert_eq!(
        store.milestone(milestone_id).unwrap().status,
        MilestoneStatus::UnderReview
    );
    assert_eq!(
        store.submission(submission_id).unwrap().status,
        MilestoneStatus::UnderReview
    );
}

#[test]
fn milestone_mutations_surface_missing_ids() {
    let (mut store, _project_id, leader) = store_with_project();
    let missing = Uuid::new_v4();
    let before = store.revision();

    assert!(matches!(
        store.create_milestone(missing, MilestoneDraft::new("m", "", 1)),
        Err(StoreError::ProjectNotFound(id)) if id == missing
    ));
    assert!(matches!(
        store.submit_milestone(missing, SubmissionDraft::new(leader, "v1")),
        Err(StoreError::MilestoneNotFound(id)) if id == missing
    ));
    assert!(matches!(
        store.set_milestone_status(missing, MilestoneStatus::Approved),
        Err(StoreError::MilestoneNotFound(id)) if id == missing
    ));
    assert_eq!(store.revision(), before);
}
