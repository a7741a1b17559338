use crate::resources::{Invites, Tasks, Teams};
use crate::{Mutation, QueryKey};

use tz_core::TaskFilters;

fn hits(mutation: &Mutation, key: &QueryKey) -> bool {
    mutation
        .invalidates()
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

#[test]
fn test_task_created_invalidates_my_tasks_and_its_team_only() {
    let mutation = Mutation::TaskCreated {
        team_id: "T1".to_string(),
    };
    let filters = TaskFilters::default();

    assert!(hits(&mutation, &Tasks::my_tasks_key(&filters)));
    assert!(hits(&mutation, &Tasks::team_tasks_key("T1", &filters)));
    assert!(hits(&mutation, &Tasks::statistics_key("T1")));

    // No other team's queries are touched.
    assert!(!hits(&mutation, &Tasks::team_tasks_key("T2", &filters)));
    assert!(!hits(&mutation, &Tasks::statistics_key("T2")));
    assert!(!hits(&mutation, &Teams::list_key()));
    assert!(!hits(&mutation, &Invites::pending_key()));
}

#[test]
fn test_task_updated_also_invalidates_the_detail() {
    let mutation = Mutation::TaskUpdated {
        task_id: "TASK9".to_string(),
        team_id: "T1".to_string(),
    };

    assert!(hits(&mutation, &Tasks::detail_key("TASK9")));
    assert!(!hits(&mutation, &Tasks::detail_key("TASK8")));
}

#[test]
fn test_team_mutations_cover_list_and_detail() {
    assert!(hits(&Mutation::TeamCreated, &Teams::list_key()));
    assert!(hits(&Mutation::TeamUpdated, &Teams::detail_key("T1")));
    assert!(!hits(
        &Mutation::TeamCreated,
        &Tasks::my_tasks_key(&TaskFilters::default())
    ));
}

#[test]
fn test_team_deleted_takes_its_tasks_and_invites_along() {
    let mutation = Mutation::TeamDeleted {
        team_id: "T1".to_string(),
    };
    let filters = TaskFilters::default();

    assert!(hits(&mutation, &Teams::list_key()));
    assert!(hits(&mutation, &Tasks::team_tasks_key("T1", &filters)));
    assert!(hits(&mutation, &Tasks::statistics_key("T1")));
    assert!(hits(&mutation, &Invites::team_key("T1")));
    assert!(!hits(&mutation, &Tasks::team_tasks_key("T2", &filters)));
}

#[test]
fn test_accepting_an_invite_refreshes_membership() {
    let mutation = Mutation::InvitationAccepted;

    assert!(hits(&mutation, &Invites::pending_key()));
    assert!(hits(&mutation, &Invites::team_key("T1")));
    assert!(hits(&mutation, &Teams::list_key()));
    assert!(!hits(
        &mutation,
        &Tasks::my_tasks_key(&TaskFilters::default())
    ));
}

#[test]
fn test_sending_and_revoking_stay_team_local() {
    let sent = Mutation::InvitationsSent {
        team_id: "T1".to_string(),
    };
    assert!(hits(&sent, &Invites::team_key("T1")));
    assert!(!hits(&sent, &Invites::team_key("T2")));
    assert!(!hits(&sent, &Invites::pending_key()));

    let revoked = Mutation::InvitationRevoked {
        team_id: "T1".to_string(),
    };
    assert!(hits(&revoked, &Invites::team_key("T1")));
    assert!(!hits(&revoked, &Teams::list_key()));
}

#[test]
fn test_declining_only_touches_the_pending_list() {
    let mutation = Mutation::InvitationDeclined;
    assert!(hits(&mutation, &Invites::pending_key()));
    assert!(!hits(&mutation, &Invites::team_key("T1")));
    assert!(!hits(&mutation, &Teams::list_key()));
}

#[test]
fn test_success_messages_are_fixed_strings() {
    assert_eq!(
        Mutation::TeamCreated.success_message(),
        "Team created successfully!"
    );
    assert_eq!(
        Mutation::TaskStatusChanged {
            task_id: "t".to_string(),
            team_id: "T1".to_string()
        }
        .success_message(),
        "Task status updated!"
    );
    assert_eq!(
        Mutation::InvitationAccepted.success_message(),
        "Invitation accepted! Welcome to the team!"
    );
    assert_eq!(
        Mutation::InvitationDeclined.success_message(),
        "Invitation declined"
    );
}
