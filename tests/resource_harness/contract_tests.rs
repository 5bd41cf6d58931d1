//! Macro-generated test suite for the generic resource CRUD contract
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod resource_harness;
//! use resource_harness::*;
//!
//! resource_contract_tests!(customer, Customer, mock_customer, StoreFactory::InMemory);
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_add_returns_stored_record`: POST 201, id assigned, fields kept
//! - `test_add_ignores_client_id`
//! - `test_get_by_id_round_trip`
//! - `test_get_all_lists_in_insertion_order`
//! - `test_update_unchanged_record`
//! - `test_delete_then_get_is_not_found`
//!
//! ## Absence
//! - `test_get_unknown_id_is_not_found`: 404 with an empty body
//! - `test_update_unknown_id_is_not_found`
//! - `test_update_without_id_is_rejected`
//! - `test_delete_unknown_id_is_not_found`
//!
//! ## Constraints (driven by `SCHEMA`)
//! - `test_not_blank_fields_reject_blank_values`
//! - `test_not_blank_fields_reject_blank_values_on_update`
//! - `test_unique_fields_reject_duplicates_on_add`
//! - `test_unique_fields_reject_duplicates_on_update`
//! - `test_natural_ids_are_immutable`
//!
//! ## Transport
//! - `test_body_without_json_content_type_is_rejected`
//! - `test_body_with_wrong_shape_is_rejected`

/// Generate the CRUD contract suite for one resource.
///
/// - `$name`: module name for the generated tests
/// - `$type`: the resource type
/// - `$mock`: `fn(&str) -> $type`; different seeds must give different
///   values for every unique field
/// - `$stores`: expression producing a `StoreFactory`, re-evaluated per server
#[macro_export]
macro_rules! resource_contract_tests {
    ($name:ident, $type:ty, $mock:path, $stores:expr) => {
        mod $name {
            use super::*;
            use axum::http::StatusCode;
            use ba::core::Resource;
            use serde_json::{Value, json};

            const ROUTE: &str = <$type as Resource>::SCHEMA.route;

            async fn server() -> axum_test::TestServer {
                make_server($stores)
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_add_returns_stored_record() {
                let server = server().await;
                let candidate: $type = $mock("add");

                let response = add(&server, ROUTE, &to_json(&candidate)).await;
                response.assert_status(StatusCode::CREATED);

                let stored: $type = response.json();
                assert!(stored.id().is_some(), "stored record must carry an id");
                assert_eq!(stored, candidate);
                assert_eq!(count(&server, ROUTE).await, 1);
            }

            #[tokio::test]
            async fn test_add_ignores_client_id() {
                let server = server().await;
                let mut candidate: $type = $mock("client_id");
                candidate.set_id(424242);

                let stored = add_ok(&server, &candidate).await;
                let id = stored.id().unwrap();
                assert_ne!(id, 424242);
                get_by_id(&server, ROUTE, 424242).await.assert_status_not_found();
            }

            #[tokio::test]
            async fn test_get_by_id_round_trip() {
                let server = server().await;
                let stored = add_ok(&server, &$mock("round_trip")).await;

                let response = get_by_id(&server, ROUTE, stored.id().unwrap()).await;
                response.assert_status_ok();

                let loaded: $type = response.json();
                assert_eq!(loaded.id(), stored.id());
                assert_eq!(loaded, stored);
                assert_eq!(to_json(&loaded), to_json(&stored));
            }

            #[tokio::test]
            async fn test_get_all_lists_in_insertion_order() {
                let server = server().await;
                let mut expected = Vec::new();
                for seed in ["first", "second", "third"] {
                    expected.push(add_ok(&server, &$mock(seed)).await);
                }

                let all: Vec<$type> = server
                    .get(&format!("{}/get/all", ROUTE))
                    .await
                    .json();
                let ids: Vec<_> = all.iter().map(|r| r.id()).collect();
                let expected_ids: Vec<_> = expected.iter().map(|r| r.id()).collect();
                assert_eq!(ids, expected_ids);
                assert_eq!(all, expected);
            }

            #[tokio::test]
            async fn test_update_unchanged_record() {
                let server = server().await;
                let stored = add_ok(&server, &$mock("unchanged")).await;

                let response = update(&server, ROUTE, &to_json(&stored)).await;
                response.assert_status_ok();

                let updated: $type = response.json();
                assert_eq!(updated.id(), stored.id());
                assert_eq!(updated, stored);
                assert_eq!(count(&server, ROUTE).await, 1);
            }

            #[tokio::test]
            async fn test_delete_then_get_is_not_found() {
                let server = server().await;
                let stored = add_ok(&server, &$mock("delete")).await;
                let id = stored.id().unwrap();

                let response = delete_by_id(&server, ROUTE, id).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.text().is_empty());

                get_by_id(&server, ROUTE, id).await.assert_status_not_found();
                delete_by_id(&server, ROUTE, id).await.assert_status_not_found();
                assert_eq!(count(&server, ROUTE).await, 0);
            }

            // ==============================================================
            // Absence
            // ==============================================================

            #[tokio::test]
            async fn test_get_unknown_id_is_not_found() {
                let server = server().await;
                let response = get_by_id(&server, ROUTE, 987654).await;
                response.assert_status_not_found();
                assert!(response.text().is_empty());
            }

            #[tokio::test]
            async fn test_update_unknown_id_is_not_found() {
                let server = server().await;
                let mut ghost: $type = $mock("ghost");
                ghost.set_id(987654);

                let response = update(&server, ROUTE, &to_json(&ghost)).await;
                response.assert_status_not_found();
                assert_eq!(count(&server, ROUTE).await, 0);
            }

            #[tokio::test]
            async fn test_update_without_id_is_rejected() {
                let server = server().await;
                add_ok(&server, &$mock("no_id")).await;

                let response = update(&server, ROUTE, &to_json(&$mock("no_id"))).await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(error_code(&response), "MISSING_ID");
            }

            #[tokio::test]
            async fn test_delete_unknown_id_is_not_found() {
                let server = server().await;
                let response = delete_by_id(&server, ROUTE, 987654).await;
                response.assert_status_not_found();
                assert!(response.text().is_empty());
            }

            // ==============================================================
            // Constraints
            // ==============================================================

            #[tokio::test]
            async fn test_not_blank_fields_reject_blank_values() {
                let server = server().await;
                for field in <$type as Resource>::SCHEMA.not_blank {
                    for blank in blank_values() {
                        let mut body = to_json(&$mock("blank"));
                        body[*field] = blank.clone();

                        let response = add(&server, ROUTE, &body).await;
                        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                        assert_eq!(
                            error_code(&response),
                            "VALIDATION_FAILED",
                            "{} = {:?} should be rejected",
                            field,
                            blank
                        );
                    }
                }
                assert_eq!(count(&server, ROUTE).await, 0);
            }

            #[tokio::test]
            async fn test_not_blank_fields_reject_blank_values_on_update() {
                let server = server().await;
                let stored = to_json(&add_ok(&server, &$mock("blank_update")).await);
                let id = stored["id"].as_i64().unwrap();

                for field in <$type as Resource>::SCHEMA.not_blank {
                    for blank in blank_values() {
                        let mut body = stored.clone();
                        body[*field] = blank;

                        let response = update(&server, ROUTE, &body).await;
                        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    }
                    let unchanged: Value = get_by_id(&server, ROUTE, id).await.json();
                    assert_eq!(unchanged[*field], stored[*field]);
                }
            }

            #[tokio::test]
            async fn test_unique_fields_reject_duplicates_on_add() {
                for field in <$type as Resource>::SCHEMA.unique {
                    let server = server().await;
                    let first = to_json(&add_ok(&server, &$mock("unique_first")).await);

                    let mut body = to_json(&$mock("unique_second"));
                    body[*field] = first[*field].clone();

                    let response = add(&server, ROUTE, &body).await;
                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    assert_eq!(error_code(&response), "UNIQUE_VIOLATION", "field {}", field);
                    assert_eq!(count(&server, ROUTE).await, 1);
                }
            }

            #[tokio::test]
            async fn test_unique_fields_reject_duplicates_on_update() {
                for field in <$type as Resource>::SCHEMA.unique {
                    let server = server().await;
                    let first = to_json(&add_ok(&server, &$mock("taken")).await);
                    let second = to_json(&add_ok(&server, &$mock("other")).await);
                    let id = second["id"].as_i64().unwrap();

                    let mut body = second.clone();
                    body[*field] = first[*field].clone();

                    let response = update(&server, ROUTE, &body).await;
                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

                    let unchanged: Value = get_by_id(&server, ROUTE, id).await.json();
                    assert_eq!(unchanged[*field], second[*field], "field {}", field);
                }
            }

            #[tokio::test]
            async fn test_natural_ids_are_immutable() {
                let server = server().await;
                let stored = to_json(&add_ok(&server, &$mock("natural")).await);
                let id = stored["id"].as_i64().unwrap();

                for field in <$type as Resource>::SCHEMA.natural_ids {
                    let mut body = stored.clone();
                    body[*field] = json!(format!("CHANGED_{}", field));

                    let response = update(&server, ROUTE, &body).await;
                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    assert_eq!(error_code(&response), "IMMUTABLE_FIELD");

                    let unchanged: Value = get_by_id(&server, ROUTE, id).await.json();
                    assert_eq!(unchanged[*field], stored[*field]);
                }
            }

            // ==============================================================
            // Transport
            // ==============================================================

            #[tokio::test]
            async fn test_body_without_json_content_type_is_rejected() {
                let server = server().await;
                let response = server
                    .post(&format!("{}/add", ROUTE))
                    .text("not json")
                    .await;
                response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
                assert_eq!(error_code(&response), "INVALID_REQUEST_BODY");
                assert_eq!(count(&server, ROUTE).await, 0);
            }

            #[tokio::test]
            async fn test_body_with_wrong_shape_is_rejected() {
                let server = server().await;
                let response = add(&server, ROUTE, &json!("not an object")).await;
                assert!(response.status_code().is_client_error());
                assert_eq!(error_code(&response), "INVALID_REQUEST_BODY");
                assert_eq!(count(&server, ROUTE).await, 0);
            }
        }
    };
}
