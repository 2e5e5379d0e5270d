use chrono::Utc;
use facility_desk::clients::ActivityClient;
use facility_desk::maintenance_actor::{self, TicketError};
use facility_desk::model::{
    ActivityId, ActivityItem, TicketCreate, TicketId, TicketStatus, TicketUpdate,
};
use resource_actor::mock::MockClient;
use resource_actor::{ActorClient, FrameworkError};

fn feed_item(description: &str) -> ActivityItem {
    ActivityItem {
        id: ActivityId::from(1),
        description: description.to_string(),
        timestamp: Utc::now(),
    }
}

/// Real maintenance actor with a mocked activity feed.
///
/// - Real actor (validation, ID assignment, merge semantics)
/// - Mocked `ActivityClient` (isolates the feed)
#[tokio::test]
async fn test_ticket_actor_with_mocked_activity() {
    let mut activity_mock = MockClient::<ActivityItem>::new();
    activity_mock
        .expect_create()
        .return_ok(feed_item("Maintenance request submitted: Leaky faucet"));

    let (ticket_actor, ticket_client) = maintenance_actor::new(8);
    let actor_handle = tokio::spawn(ticket_actor.run(ActivityClient::new(activity_mock.client())));

    let created = ticket_client
        .create_ticket(TicketCreate::new("Leaky faucet"))
        .await
        .unwrap();
    assert_eq!(created.id, TicketId::from(1));
    assert_eq!(created.status, TicketStatus::Open);

    let updated = ticket_client
        .update_ticket(created.id.clone(), TicketUpdate::status(TicketStatus::Resolved))
        .await
        .unwrap();
    assert_eq!(updated.status, TicketStatus::Resolved);
    assert_eq!(updated.description, "Leaky faucet");
    assert_eq!(updated.created_at, created.created_at);

    // The update must not have touched the feed
    activity_mock.verify();

    drop(ticket_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_feed_failure_does_not_block_ticket() {
    let mut activity_mock = MockClient::<ActivityItem>::new();
    activity_mock
        .expect_create()
        .return_err(FrameworkError::ActorClosed);

    let (ticket_actor, ticket_client) = maintenance_actor::new(8);
    tokio::spawn(ticket_actor.run(ActivityClient::new(activity_mock.client())));

    let created = ticket_client
        .create_ticket(TicketCreate::new("Door buzzer dead"))
        .await
        .unwrap();
    assert_eq!(ticket_client.list().await.unwrap(), vec![created]);
    activity_mock.verify();
}

#[tokio::test]
async fn test_update_unknown_ticket_is_not_found() {
    let activity_mock = MockClient::<ActivityItem>::new();
    let (ticket_actor, ticket_client) = maintenance_actor::new(8);
    tokio::spawn(ticket_actor.run(ActivityClient::new(activity_mock.client())));

    let err = ticket_client
        .update_ticket(
            TicketId::from("nonexistent"),
            TicketUpdate::status(TicketStatus::Open),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TicketError::NotFound(id) if id == "nonexistent"));
    assert!(ticket_client.list().await.unwrap().is_empty());
    activity_mock.verify();
}

#[tokio::test]
async fn test_blank_description_update_is_rejected_without_partial_write() {
    let mut activity_mock = MockClient::<ActivityItem>::new();
    activity_mock.expect_create().return_ok(feed_item("ok"));

    let (ticket_actor, ticket_client) = maintenance_actor::new(8);
    tokio::spawn(ticket_actor.run(ActivityClient::new(activity_mock.client())));

    let created = ticket_client
        .create_ticket(TicketCreate::new("Radiator banging"))
        .await
        .unwrap();

    let update = TicketUpdate {
        status: Some(TicketStatus::InProgress),
        description: Some("   ".into()),
        ..Default::default()
    };
    let err = ticket_client
        .update_ticket(created.id.clone(), update)
        .await
        .unwrap_err();
    assert!(matches!(err, TicketError::ValidationError(_)));

    let stored = ticket_client.get(created.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored, created);
}
