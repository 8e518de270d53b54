use gradflow_core::{
    MilestoneStatus, Project, ProjectDraft, ProjectStatus, ProjectStore, Sentiment, TaskDraft,
    TaskStatus, User, UserRole,
};
use uuid::Uuid;

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let leader_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::new("UX Research", "eye-tracking study", leader_id);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], project.id.to_string());
    assert_eq!(json["name"], "UX Research");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["leader_id"], leader_id.to_string());
    assert_eq!(json["member_ids"][0], leader_id.to_string());
    assert_eq!(json["columns"][1]["status"], "in_progress");
    assert_eq!(json["columns"][1]["title"], "In Progress");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn task_serialization_keeps_enum_values_snake_case() {
    let mut store = ProjectStore::new();
    let leader = User::new("Ada Lin", "ada@uni.edu", UserRole::Leader, "#16a34a");
    let project_id = store
        .create_project(leader, ProjectDraft::new("UX Research", "eye-tracking study"))
        .unwrap();
    let task_id = store
        .create_task(
            project_id,
            TaskDraft {
                status: Some(TaskStatus::Review),
                tags: vec!["Fieldwork".to_string()],
                ..TaskDraft::new("Pilot study")
            },
        )
        .unwrap();

    let json = serde_json::to_value(store.task(task_id).unwrap()).unwrap();
    assert_eq!(json["status"], "review");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["tags"][0], "fieldwork");
    assert_eq!(json["assignee_id"], serde_json::Value::Null);
}

#[test]
fn status_enums_cover_expected_wire_values() {
    for (status, wire) in [
        (MilestoneStatus::Upcoming, "upcoming"),
        (MilestoneStatus::Submitted, "submitted"),
        (MilestoneStatus::UnderReview, "under_review"),
        (MilestoneStatus::ChangesRequested, "changes_requested"),
        (MilestoneStatus::Approved, "approved"),
        (MilestoneStatus::Graded, "graded"),
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), wire);
    }

    assert_eq!(
        serde_json::to_value(ProjectStatus::Archived).unwrap(),
        "archived"
    );
    assert_eq!(
        serde_json::to_value(Sentiment::Negative).unwrap(),
        "negative"
    );
}

#[test]
fn user_roles_round_trip() {
    let teacher = User::new("Dr. Osei", "osei@uni.edu", UserRole::Teacher, "#dc2626");
    let json = serde_json::to_value(&teacher).unwrap();
    assert_eq!(json["role"], "teacher");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, teacher);
}
