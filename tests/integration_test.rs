use chrono::{Duration, NaiveDate, TimeZone, Utc};
use facility_desk::booking_actor::BookingError;
use facility_desk::lifecycle::FacilitySystem;
use facility_desk::model::{
    BookingCreate, BookingId, BookingStatus, BookingUpdate, MoveKind, MoveRequestCreate,
    MoveRequestId, MoveRequestUpdate, MoveStatus, TicketCreate, TicketId, TicketPriority,
    TicketStatus, TicketUpdate,
};
use facility_desk::move_actor::MoveRequestError;
use resource_actor::ActorClient;

/// Full end-to-end integration test with all real actors.
#[tokio::test]
async fn test_full_facility_system_integration() {
    let system = FacilitySystem::new(16);

    // Each create grows its collection by exactly one
    for (n, description) in ["Leaky faucet", "Broken intercom"].into_iter().enumerate() {
        let before = system.ticket_client.list().await.unwrap().len();
        let ticket = system
            .ticket_client
            .create_ticket(TicketCreate::new(description))
            .await
            .expect("Failed to create ticket");
        assert_eq!(ticket.id, TicketId::from(n as u32 + 1));
        assert_eq!(system.ticket_client.list().await.unwrap().len(), before + 1);
    }

    // Partial update only touches the named fields
    let update = TicketUpdate {
        priority: Some(TicketPriority::High),
        ..Default::default()
    };
    let updated = system
        .ticket_client
        .update_ticket(TicketId::from(2), update)
        .await
        .expect("Failed to update ticket");
    assert_eq!(updated.priority, TicketPriority::High);
    assert_eq!(updated.status, TicketStatus::Open);
    assert_eq!(updated.description, "Broken intercom");

    // Unknown ids leave the collection untouched
    let before = system.ticket_client.list().await.unwrap();
    let result = system
        .ticket_client
        .update_ticket(
            TicketId::from("ticket_404"),
            TicketUpdate::status(TicketStatus::Resolved),
        )
        .await;
    assert!(result.is_err());
    assert_eq!(system.ticket_client.list().await.unwrap(), before);

    // Insertion order is preserved
    let descriptions: Vec<String> = before.into_iter().map(|t| t.description).collect();
    assert_eq!(descriptions, vec!["Leaky faucet", "Broken intercom"]);

    let feed = system.activity_client.list().await.unwrap();
    assert_eq!(feed.len(), 2);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_booking_flow() {
    let system = FacilitySystem::new(16);
    let starts_at = Utc.with_ymd_and_hms(2026, 11, 7, 9, 30, 0).unwrap();

    let booking = system
        .booking_client
        .create_booking(BookingCreate {
            facility: "Gym".into(),
            starts_at,
            ends_at: starts_at + Duration::hours(1),
            requester: "Unit 2A".into(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(booking.id, BookingId::from(1));
    assert_eq!(booking.status, BookingStatus::Pending);

    let confirmed = system
        .booking_client
        .update_booking(
            booking.id.clone(),
            BookingUpdate {
                status: Some(BookingStatus::Confirmed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    // Moving the end before the start is rejected and nothing changes
    let err = system
        .booking_client
        .update_booking(
            booking.id.clone(),
            BookingUpdate {
                ends_at: Some(starts_at - Duration::minutes(30)),
                status: Some(BookingStatus::Cancelled),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::ValidationError(_)));
    assert_eq!(
        system.booking_client.get(booking.id.clone()).await.unwrap(),
        Some(confirmed)
    );

    let err = system
        .booking_client
        .create_booking(BookingCreate {
            facility: "Gym".into(),
            starts_at,
            ends_at: starts_at,
            requester: "Unit 2A".into(),
            status: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::ValidationError(msg) if msg.starts_with("endsAt")));

    // The failed create still used up an id
    let next = system
        .booking_client
        .create_booking(BookingCreate {
            facility: "Guest Suite".into(),
            starts_at,
            ends_at: starts_at + Duration::days(1),
            requester: "Unit 9F".into(),
            status: Some(BookingStatus::Confirmed),
        })
        .await
        .unwrap();
    assert_eq!(next.id, BookingId::from(3));
    assert_eq!(system.booking_client.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_move_request_flow() {
    let system = FacilitySystem::new(16);

    let request = system
        .move_client
        .create_move_request(MoveRequestCreate {
            kind: MoveKind::MoveIn,
            scheduled_date: NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
            requester: "Unit 3D".into(),
            status: None,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(request.id, MoveRequestId::from(1));

    let approved = system
        .move_client
        .update_move_request(
            request.id.clone(),
            MoveRequestUpdate {
                status: Some(MoveStatus::Approved),
                notes: Some("Dock reserved 8-12".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(approved.status, MoveStatus::Approved);
    assert_eq!(approved.notes.as_deref(), Some("Dock reserved 8-12"));
    assert_eq!(approved.scheduled_date, request.scheduled_date);

    let err = system
        .move_client
        .update_move_request(MoveRequestId::from(42), MoveRequestUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, MoveRequestError::NotFound("move_42".to_string()));

    let err = system
        .move_client
        .create_move_request(MoveRequestCreate {
            requester: " ".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, MoveRequestError::ValidationError(_)));

    let feed = system.activity_client.list().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(
        feed[0].description,
        "Move-in scheduled for 2026-11-20 by Unit 3D"
    );

    system.shutdown().await.unwrap();
}
