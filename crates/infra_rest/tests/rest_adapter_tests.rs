//! REST Policy Adapter Tests
//!
//! Exercises the adapter against an `httpmock` server standing in for the
//! backend's policy resource.
//!
//! # Test Organization
//!
//! - `list_tests` - Collection fetch, decoding and failures
//! - `write_tests` - Create, update and delete requests
//! - `health_tests` - Reachability reporting

use std::time::Duration;

use core_kernel::{AdapterHealth, HealthCheckable, NetworkError, PolicyId};
use domain_policy::PolicyPort;
use httpmock::prelude::*;
use infra_rest::{RestClientConfig, RestPolicyAdapter};
use serde_json::json;
use test_utils::{PolicyFixtures, TestPolicyBuilder, WireFixtures};

fn adapter_for(server: &MockServer) -> RestPolicyAdapter {
    let config = RestClientConfig::new(&server.url("/api/Policy"))
        .unwrap()
        .timeout(Duration::from_secs(2));
    RestPolicyAdapter::new(config).unwrap()
}

// ============================================================================
// LIST TESTS
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_decodes_backend_records() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(WireFixtures::two_record_body());
        });

        let records = adapter_for(&server).list().await.unwrap();

        mock.assert();
        assert_eq!(records, PolicyFixtures::two_records());
    }

    #[tokio::test]
    async fn test_list_keeps_records_with_blank_dates() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(200).json_body(json!([
                { "id": "LIVE-1", "beneficiaryName": "A", "startDate": "", "policyStartDate": "2024-01-01" },
                { "id": "LIVE-2", "beneficiaryName": "B", "startDate": "2024-02-01", "policyStartDate": "2024-03-01" }
            ]));
        });

        let records = adapter_for(&server).list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start_date.map(|d| d.to_string()).as_deref(), Some("2024-01-01"));
        assert_eq!(records[1].start_date.map(|d| d.to_string()).as_deref(), Some("2024-02-01"));
    }

    #[tokio::test]
    async fn test_list_server_error_is_status_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(500);
        });

        let err = adapter_for(&server).list().await.unwrap_err();

        assert_eq!(err.http_status(), Some(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_list_client_error_is_status_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(404);
        });

        let err = adapter_for(&server).list().await.unwrap_err();
        assert_eq!(err.http_status(), Some(404));
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_decode_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "unexpected": "object" }));
        });

        let err = adapter_for(&server).list().await.unwrap_err();
        assert!(matches!(err, NetworkError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(200).json_body(json!([])).delay(Duration::from_millis(500));
        });
        let config = RestClientConfig::new(&server.url("/api/Policy"))
            .unwrap()
            .timeout(Duration::from_millis(50));
        let adapter = RestPolicyAdapter::new(config).unwrap();

        let err = adapter.list().await.unwrap_err();
        assert!(matches!(err, NetworkError::Transport { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_failure() {
        let config = RestClientConfig::new("http://127.0.0.1:9/api/Policy").unwrap();
        let adapter = RestPolicyAdapter::new(config).unwrap();

        let err = adapter.list().await.unwrap_err();
        assert!(err.http_status().is_none());
    }
}

// ============================================================================
// WRITE TESTS
// ============================================================================

mod write_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_posts_payload_with_premium() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/Policy")
                .header("content-type", "application/json")
                .json_body(json!({
                    "beneficiaryName": "John Doe",
                    "carBrand": "Toyota",
                    "carType": "Camry",
                    "tsi": 25000.0,
                    "premiumRate": 5.0,
                    "premiumAmount": 1250.0,
                    "startDate": "2024-01-01",
                    "endDate": "2024-12-31"
                }));
            then.status(201);
        });

        adapter_for(&server)
            .create(&TestPolicyBuilder::unsaved().build())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_create_never_sends_an_id() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/Policy").json_body(json!({
                "policyNumber": "PN-2024-0001",
                "beneficiaryName": "John Doe",
                "carBrand": "Toyota",
                "carType": "Camry",
                "tsi": 25000.0,
                "premiumRate": 5.0,
                "premiumAmount": 1250.0,
                "startDate": "2024-01-01",
                "endDate": "2024-12-31"
            }));
            then.status(201);
        });

        adapter_for(&server)
            .create(&PolicyFixtures::john_doe())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_create_rejected_is_status_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/Policy");
            then.status(400);
        });

        let err = adapter_for(&server)
            .create(&TestPolicyBuilder::unsaved().build())
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), Some(400));
    }

    #[tokio::test]
    async fn test_update_puts_to_record_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/Policy/POL-002")
                .header("content-type", "application/json");
            then.status(204);
        });

        adapter_for(&server)
            .update(&PolicyId::new("POL-002"), &PolicyFixtures::jane_smith())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_delete_targets_record_path() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/Policy/POL-001");
            then.status(200);
        });

        adapter_for(&server)
            .delete(&PolicyId::new("POL-001"))
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_delete_missing_record_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/Policy/POL-404");
            then.status(404);
        });

        let err = adapter_for(&server)
            .delete(&PolicyId::new("POL-404"))
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), Some(404));
    }
}

// ============================================================================
// HEALTH TESTS
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_reachable_backend_is_healthy() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(200).json_body(json!([]));
        });

        let result = adapter_for(&server).health_check().await;

        assert_eq!(result.status, AdapterHealth::Healthy);
        assert_eq!(result.adapter_id, "rest-policy-adapter");
    }

    #[tokio::test]
    async fn test_failing_backend_is_unhealthy() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/Policy");
            then.status(503);
        });

        let result = adapter_for(&server).health_check().await;

        assert_eq!(result.status, AdapterHealth::Unhealthy);
        assert_eq!(result.message.as_deref(), Some("HTTP error! status: 503"));
    }
}
