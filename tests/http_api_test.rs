use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use facility_desk::api_client::{ApiClientError, FacilityApi};
use facility_desk::http::{router, AppState};
use facility_desk::lifecycle::FacilitySystem;
use facility_desk::model::{
    BookingCreate, MoveKind, MoveRequestCreate, MoveStatus, ResidentCreate, TicketCreate,
    TicketId, TicketPriority, TicketStatus, TicketUpdate,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves a fresh store on an ephemeral port. The system is returned so tests can seed it
/// directly.
async fn spawn_app() -> (String, FacilitySystem) {
    let system = FacilitySystem::new(16);
    let app = router(AppState::from_system(&system), Duration::from_secs(60));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{address}"), system)
}

async fn error_of(response: reqwest::Response) -> (StatusCode, String) {
    let status = response.status();
    let body: Value = response.json().await.unwrap();
    (status, body["error"].as_str().unwrap_or_default().to_string())
}

#[tokio::test]
async fn test_ticket_lifecycle() {
    let (base, _system) = spawn_app().await;
    let http = reqwest::Client::new();
    let url = format!("{base}/api/maintenance");

    let response = http
        .post(&url)
        .json(&json!({ "description": "Leaky faucet in kitchen", "priority": "high" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], "ticket_1");
    assert_eq!(created["status"], "open");
    assert_eq!(created["priority"], "high");
    assert!(created["createdAt"].is_string());

    let response = http
        .patch(&url)
        .json(&json!({ "id": "ticket_1", "status": "resolved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let resolved: Value = response.json().await.unwrap();
    assert_eq!(resolved["status"], "resolved");
    assert_eq!(resolved["description"], "Leaky faucet in kitchen");
    assert_eq!(resolved["createdAt"], created["createdAt"]);

    // Same patch again lands on the same record
    let again: Value = http
        .patch(&url)
        .json(&json!({ "id": "ticket_1", "status": "resolved" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again, resolved);

    let list: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(list["tickets"].as_array().unwrap().len(), 1);
    assert_eq!(list["tickets"][0], resolved);
}

#[tokio::test]
async fn test_patch_errors() {
    let (base, _system) = spawn_app().await;
    let http = reqwest::Client::new();
    let url = format!("{base}/api/maintenance");

    let response = http
        .patch(&url)
        .json(&json!({ "id": "nonexistent", "status": "resolved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(
        error_of(response).await,
        (StatusCode::NOT_FOUND, "Ticket not found".to_string())
    );

    let response = http
        .patch(&url)
        .json(&json!({ "status": "resolved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(
        error_of(response).await,
        (StatusCode::BAD_REQUEST, "Ticket ID required".to_string())
    );

    let list: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(list, json!({ "tickets": [] }));
}

#[tokio::test]
async fn test_patch_missing_id_wins_over_bad_fields() {
    let (base, _system) = spawn_app().await;
    let http = reqwest::Client::new();
    let url = format!("{base}/api/maintenance");

    for body in [
        json!({ "status": "bogus" }),
        json!({ "status": "open", "note": "x" }),
        json!({ "id": null, "status": "open" }),
    ] {
        let response = http.patch(&url).json(&body).send().await.unwrap();
        assert_eq!(
            error_of(response).await,
            (StatusCode::BAD_REQUEST, "Ticket ID required".to_string()),
            "{body}"
        );
    }

    // No content type at all
    let response = http
        .patch(&url)
        .body(r#"{"status":"open"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Numeric ids are looked up like any other unknown id
    let response = http.patch(&url).json(&json!({ "id": 5 })).send().await.unwrap();
    assert_eq!(
        error_of(response).await,
        (StatusCode::NOT_FOUND, "Ticket not found".to_string())
    );

    // With an id present, bad fields are still a server error
    let response = http
        .patch(&url)
        .json(&json!({ "id": "ticket_1", "status": "bogus" }))
        .send()
        .await
        .unwrap();
    assert_eq!(
        error_of(response).await,
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update ticket".to_string()
        )
    );
}

#[tokio::test]
async fn test_bad_create_bodies_are_server_errors() {
    let (base, _system) = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/api/maintenance"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(
        error_of(response).await,
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create ticket".to_string()
        )
    );

    let response = http
        .post(format!("{base}/api/maintenance"))
        .json(&json!({ "description": "Broken blind", "colour": "blue" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = http
        .post(format!("{base}/api/bookings"))
        .json(&json!({ "facility": "Gym" }))
        .send()
        .await
        .unwrap();
    assert_eq!(
        error_of(response).await,
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create booking".to_string()
        )
    );

    // Nothing was stored, and the failed attempts logged nothing
    let activity: Value = http
        .get(format!("{base}/api/activity"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(activity, json!([]));
}

#[tokio::test]
async fn test_resident_defaults_until_configured() {
    let (base, system) = spawn_app().await;
    let api = FacilityApi::new(&base);

    let resident = api.resident().await.unwrap();
    assert_eq!(resident.name, "Resident");

    let body: Value = reqwest::get(format!("{base}/api/resident"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body.get("id").is_none());

    system
        .resident_client
        .create_resident(ResidentCreate {
            name: "Dana Okafor".into(),
            unit: "4B".into(),
            initials: None,
        })
        .await
        .unwrap();

    let resident = api.resident().await.unwrap();
    assert_eq!(resident.name, "Dana Okafor");
    assert_eq!(resident.unit, "4B");
    assert_eq!(resident.initials, "DO");
}

#[tokio::test]
async fn test_api_client_round_trip() {
    let (base, _system) = spawn_app().await;
    let api = FacilityApi::new(format!("{base}/"));

    let ticket = api
        .create_ticket(&TicketCreate::new("Hallway light out"))
        .await
        .unwrap();
    assert_eq!(ticket.priority, TicketPriority::Medium);

    let updated = api
        .update_ticket(&ticket.id, TicketUpdate::status(TicketStatus::InProgress))
        .await
        .unwrap();
    assert_eq!(updated.status, TicketStatus::InProgress);
    assert_eq!(api.tickets().await.unwrap(), vec![updated]);

    let err = api
        .update_ticket(&TicketId::from("ticket_99"), TicketUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(matches!(err, ApiClientError::Status { message, .. } if message == "Ticket not found"));

    let starts_at = Utc.with_ymd_and_hms(2026, 11, 3, 18, 0, 0).unwrap();
    let booking = api
        .create_booking(&BookingCreate {
            facility: "Party Room".into(),
            starts_at,
            ends_at: starts_at + chrono::Duration::hours(2),
            requester: "Unit 4B".into(),
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(api.bookings().await.unwrap(), vec![booking]);

    let move_request = api
        .create_move_request(&MoveRequestCreate {
            kind: MoveKind::MoveOut,
            scheduled_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            requester: "Unit 4B".into(),
            status: None,
            notes: Some("Need the freight elevator".into()),
        })
        .await
        .unwrap();
    assert_eq!(move_request.status, MoveStatus::Pending);
    assert_eq!(api.move_requests().await.unwrap(), vec![move_request]);

    let feed = api.activity().await.unwrap();
    let lines: Vec<&str> = feed.iter().map(|item| item.description.as_str()).collect();
    assert_eq!(
        lines,
        vec![
            "Maintenance request submitted: Hallway light out",
            "Party Room booked by Unit 4B for Nov 3, 18:00",
            "Move-out scheduled for 2026-12-01 by Unit 4B",
        ]
    );
}

#[tokio::test]
async fn test_move_request_wire_shape() {
    let (base, _system) = spawn_app().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base}/api/move-requests"))
        .json(&json!({
            "type": "move-in",
            "scheduledDate": "2026-11-15",
            "requester": "Unit 7C"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["id"], "move_1");
    assert_eq!(created["type"], "move-in");
    assert_eq!(created["scheduledDate"], "2026-11-15");
    assert_eq!(created["status"], "pending");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (base, _system) = spawn_app().await;
    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/maintenance"))
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PATCH")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(allowed.contains("PATCH"));
    assert_eq!(
        response
            .headers()
            .get("access-control-max-age")
            .and_then(|v| v.to_str().ok()),
        Some("60")
    );
}
