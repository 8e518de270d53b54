use gradflow_core::{
    AssignmentError, AssignmentForm, DirectoryError, DirectoryResult, MemberDirectory,
    ProjectDraft, ProjectId, ProjectStore, SubmitBlockReason, TaskDraft, TaskId, User, UserId,
    UserRole,
};
use uuid::Uuid;

/// Directory stub standing in for the REST accounts service.
struct FixedDirectory {
    members: Vec<User>,
}

impl MemberDirectory for FixedDirectory {
    fn project_members(&self, _project_id: ProjectId) -> DirectoryResult<Vec<User>> {
        Ok(self.members.clone())
    }
}

struct OfflineDirectory;

impl MemberDirectory for OfflineDirectory {
    fn project_members(&self, _project_id: ProjectId) -> DirectoryResult<Vec<User>> {
        Err(DirectoryError::Unavailable("503 from accounts".to_string()))
    }
}

fn fixture() -> (ProjectStore, TaskId, FixedDirectory, UserId) {
    let mut store = ProjectStore::new();
    let leader = User::new("Ada Lin", "ada@uni.edu", UserRole::Leader, "#16a34a");
    let leader_clone = leader.clone();
    let project_id = store
        .create_project(leader, ProjectDraft::new("UX Research", "eye-tracking study"))
        .unwrap();

    let mina = User::new("Mina Park", "mina@uni.edu", UserRole::Member, "#2563eb");
    let mina_id = mina.id;
    store.invite_member(project_id, mina.clone()).unwrap();

    let task_id = store
        .create_task(project_id, TaskDraft::new("Transcribe interviews"))
        .unwrap();

    let directory = FixedDirectory {
        members: vec![leader_clone, mina],
    };
    (store, task_id, directory, mina_id)
}

#[test]
fn open_loads_member_options_for_the_tasks_project() {
    let (store, task_id, directory, _mina) = fixture();

    let form = AssignmentForm::open(&store, &directory, task_id).unwrap();
    assert_eq!(form.options().len(), 2);
    assert_eq!(form.selected(), None);
    assert!(!form.can_submit());
}

#[test]
fn open_surfaces_missing_task_and_directory_failures() {
    let (store, task_id, _directory, _mina) = fixture();

    let missing = Uuid::new_v4();
    let stub = FixedDirectory { members: vec![] };
    assert!(matches!(
        AssignmentForm::open(&store, &stub, missing),
        Err(AssignmentError::Store(_))
    ));

    assert!(matches!(
        AssignmentForm::open(&store, &OfflineDirectory, task_id),
        Err(AssignmentError::Directory(_))
    ));
}

#[test]
fn submit_guards_cover_no_selection_unchanged_and_in_flight() {
    let (mut store, task_id, directory, mina_id) = fixture();

    let mut form = AssignmentForm::open(&store, &directory, task_id).unwrap();
    assert!(matches!(
        form.begin_submit(),
        Err(AssignmentError::SubmitBlocked(SubmitBlockReason::NoSelection))
    ));

    form.select(Some(mina_id)).unwrap();
    assert!(form.can_submit());
    let assignee = form.begin_submit().unwrap();
    assert_eq!(assignee, mina_id);

    // Second click while the request is in flight stays disabled.
    assert!(matches!(
        form.begin_submit(),
        Err(AssignmentError::SubmitBlocked(
            SubmitBlockReason::RequestInFlight
        ))
    ));

    form.commit(&mut store).unwrap();
    assert_eq!(store.task(task_id).unwrap().assignee_id, Some(mina_id));

    // Same assignee again: unchanged selection blocks submission.
    assert!(!form.can_submit());
    assert!(matches!(
        form.begin_submit(),
        Err(AssignmentError::SubmitBlocked(
            SubmitBlockReason::UnchangedAssignee
        ))
    ));
}

#[test]
fn selecting_a_non_member_is_rejected() {
    let (store, task_id, directory, _mina) = fixture();
    let mut form = AssignmentForm::open(&store, &directory, task_id).unwrap();

    let outsider = Uuid::new_v4();
    assert!(matches!(
        form.select(Some(outsider)),
        Err(AssignmentError::NotAProjectMember(id)) if id == outsider
    ));
    assert_eq!(form.selected(), None);
}

#[test]
fn abort_clears_in_flight_without_touching_the_store() {
    let (mut store, task_id, directory, mina_id) = fixture();
    let mut form = AssignmentForm::open(&store, &directory, task_id).unwrap();
    form.select(Some(mina_id)).unwrap();
    form.begin_submit().unwrap();

    let revision = store.revision();
    form.abort();

    assert_eq!(store.revision(), revision);
    assert_eq!(store.task(task_id).unwrap().assignee_id, None);
    // The form is usable again after the failed request.
    assert!(form.can_submit());
    form.begin_submit().unwrap();
    form.commit(&mut store).unwrap();
    assert_eq!(store.task(task_id).unwrap().assignee_id, Some(mina_id));
}
