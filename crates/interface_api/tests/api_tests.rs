//! In-process HTTP tests over the in-memory store

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use domain_registry::RegistryStore;
use interface_api::create_router;
use test_utils::{seeded_registry, SeededRegistry, OWNER1_NAME, VIN1, VIN2};

fn server(seeded: &SeededRegistry) -> TestServer {
    let app = create_router(seeded.store.clone() as Arc<dyn RegistryStore>);
    TestServer::new(app).expect("test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn health_endpoints_respond() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");

        let response = server.get("/health/ready").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ready");
    }
}

mod listing {
    use super::*;

    #[tokio::test]
    async fn lists_cars_with_owner_details() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server.get("/api/cars").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        let cars = body.as_array().expect("array body");
        assert_eq!(cars.len(), 2);

        let car1 = cars
            .iter()
            .find(|c| c["vin"] == VIN1)
            .expect("seeded car present");
        assert_eq!(car1["owner_name"], OWNER1_NAME);
        assert_eq!(car1["make"], "Chevrolet");
        assert!(cars.iter().any(|c| c["vin"] == VIN2));
    }
}

mod insurance_validity {
    use super::*;

    #[tokio::test]
    async fn reports_covered_and_uncovered_dates() {
        let seeded = seeded_registry();
        let server = server(&seeded);
        let path = format!("/api/cars/{}/insurance-valid", seeded.car1.as_uuid());

        let response = server.get(&path).add_query_param("date", "2024-06-15").await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["valid"], true);
        assert_eq!(body["date"], "2024-06-15");

        let response = server.get(&path).add_query_param("date", "2026-06-15").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["valid"], false);
    }

    #[tokio::test]
    async fn malformed_date_is_bad_request() {
        let seeded = seeded_registry();
        let server = server(&seeded);
        let path = format!("/api/cars/{}/insurance-valid", seeded.car1.as_uuid());

        let response = server.get(&path).add_query_param("date", "15-06-2024").await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_car_is_not_found() {
        let seeded = seeded_registry();
        let server = server(&seeded);
        let path = format!("/api/cars/{}/insurance-valid", uuid::Uuid::new_v4());

        let response = server.get(&path).add_query_param("date", "2024-06-15").await;
        response.assert_status_not_found();
    }
}

mod car_creation {
    use super::*;

    #[tokio::test]
    async fn creates_car_with_location_header() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post("/api/cars")
            .json(&json!({
                "vin": "VIN33333",
                "make": "Dacia",
                "model": "Logan",
                "year_of_manufacture": 2021,
                "owner_id": seeded.owner1.as_uuid(),
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body = response.json::<Value>();
        let id = body["id"].as_str().expect("id in body");
        let location = response.header("location");
        assert_eq!(
            location.to_str().expect("header value"),
            format!("/api/cars/{id}")
        );
    }

    #[tokio::test]
    async fn duplicate_vin_conflicts() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post("/api/cars")
            .json(&json!({
                "vin": VIN1,
                "year_of_manufacture": 2021,
                "owner_id": seeded.owner1.as_uuid(),
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn blank_vin_is_bad_request() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post("/api/cars")
            .json(&json!({
                "vin": "   ",
                "year_of_manufacture": 2021,
                "owner_id": seeded.owner1.as_uuid(),
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_owner_is_not_found() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post("/api/cars")
            .json(&json!({
                "vin": "VIN44444",
                "year_of_manufacture": 2021,
                "owner_id": uuid::Uuid::new_v4(),
            }))
            .await;
        response.assert_status_not_found();
    }
}

mod policy_creation {
    use super::*;

    #[tokio::test]
    async fn creates_adjacent_policy() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        // Car 1 is covered through 2024-12-31; the next range starts the day after
        let response = server
            .post(&format!("/api/cars/{}/policies", seeded.car1.as_uuid()))
            .json(&json!({
                "start_date": "2025-01-01",
                "end_date": "2025-12-31",
                "provider": "Groupama",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        assert!(response.json::<Value>()["id"].is_string());
    }

    #[tokio::test]
    async fn overlapping_policy_conflicts() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post(&format!("/api/cars/{}/policies", seeded.car1.as_uuid()))
            .json(&json!({
                "start_date": "2024-12-31",
                "end_date": "2025-06-30",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn inverted_range_is_bad_request() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post(&format!("/api/cars/{}/policies", seeded.car1.as_uuid()))
            .json(&json!({
                "start_date": "2025-06-30",
                "end_date": "2025-01-01",
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_car_is_not_found() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post(&format!("/api/cars/{}/policies", uuid::Uuid::new_v4()))
            .json(&json!({
                "start_date": "2025-01-01",
                "end_date": "2025-12-31",
            }))
            .await;
        response.assert_status_not_found();
    }
}

mod claim_creation {
    use super::*;

    #[tokio::test]
    async fn creates_claim() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post(&format!("/api/cars/{}/claims", seeded.car1.as_uuid()))
            .json(&json!({
                "claim_date": "2024-03-15",
                "description": "Windshield crack",
                "amount": "450.00",
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        assert!(response.json::<Value>()["id"].is_string());
    }

    #[tokio::test]
    async fn rejected_payload_is_bad_request() {
        let seeded = seeded_registry();
        let server = server(&seeded);
        let path = format!("/api/cars/{}/claims", seeded.car1.as_uuid());

        // Unparsable claim date
        let response = server
            .post(&path)
            .json(&json!({
                "claim_date": "15/03/2024",
                "description": "Windshield crack",
                "amount": "450.00",
            }))
            .await;
        response.assert_status_bad_request();

        // Blank description
        let response = server
            .post(&path)
            .json(&json!({
                "claim_date": "2024-03-15",
                "description": "  ",
                "amount": "450.00",
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn unknown_car_wins_over_bad_payload() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .post(&format!("/api/cars/{}/claims", uuid::Uuid::new_v4()))
            .json(&json!({
                "claim_date": "not-a-date",
                "description": "",
                "amount": "0",
            }))
            .await;
        response.assert_status_not_found();
    }
}

mod history {
    use super::*;

    #[tokio::test]
    async fn returns_merged_history_ascending() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .get(&format!("/api/cars/{}/history", seeded.car1.as_uuid()))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["type"], "policy");
        assert_eq!(entries[0]["start_date"], "2023-01-01");
        assert_eq!(entries[1]["type"], "claim");
        assert_eq!(entries[1]["claim_date"], "2023-02-10");
    }

    #[tokio::test]
    async fn unknown_car_is_not_found() {
        let seeded = seeded_registry();
        let server = server(&seeded);

        let response = server
            .get(&format!("/api/cars/{}/history", uuid::Uuid::new_v4()))
            .await;
        response.assert_status_not_found();
    }
}
