//! Shared test harness for the REST resources
//!
//! Provides mock builders for every resource, a `TestServer` factory over
//! any `StoreFactory`, and the `resource_contract_tests!` macro that checks
//! a resource against the generic CRUD contract.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod resource_harness;
//! use resource_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod contract_tests;

use axum_test::{TestResponse, TestServer};
use ba::prelude::*;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

pub const TEST_CUSTOMER_PREFIX: &str = "TEST_CUSTOMER_";
pub const TEST_OPERATOR_PREFIX: &str = "TEST_OPERATOR_";
pub const CATEGORY_PREFIX: &str = "CATEGORY_IS_";
pub const TEST_STAGE_NAME_PREFIX: &str = "TEST_STAGE_NAME_PREFIX_";
pub const TEST_ROLE_PREFIX: &str = "TEST_ROLE_";
pub const TEST_CUSTOMER_REQUEST_TYPE_PREFIX: &str = "TEST_CUSTOMER_REQUEST_TYPE_";

/// Values every not-blank field must reject
pub fn blank_values() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(""),
        Value::from(" "),
        Value::from("\t"),
        Value::from("\n"),
    ]
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// Serve every resource from the given stores
pub fn make_server(stores: StoreFactory) -> TestServer {
    let router = ServerBuilder::new()
        .with_stores(stores)
        .register_module(BaModule)
        .expect("module should register")
        .build()
        .expect("router should build");
    TestServer::new(router)
}

pub async fn add(server: &TestServer, route: &str, body: &Value) -> TestResponse {
    server.post(&format!("{}/add", route)).json(body).await
}

pub async fn update(server: &TestServer, route: &str, body: &Value) -> TestResponse {
    server.put(&format!("{}/update", route)).json(body).await
}

pub async fn get_by_id(server: &TestServer, route: &str, id: i64) -> TestResponse {
    server.get(&format!("{}/get/{}", route, id)).await
}

pub async fn delete_by_id(server: &TestServer, route: &str, id: i64) -> TestResponse {
    server.delete(&format!("{}/delete/{}", route, id)).await
}

pub async fn get_all(server: &TestServer, route: &str) -> Vec<Value> {
    let response = server.get(&format!("{}/get/all", route)).await;
    response.assert_status_ok();
    response.json()
}

pub async fn count(server: &TestServer, route: &str) -> usize {
    get_all(server, route).await.len()
}

/// Add a resource and return the stored record
pub async fn add_ok<T: Resource>(server: &TestServer, candidate: &T) -> T {
    let response = add(server, T::SCHEMA.route, &to_json(candidate)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

pub fn to_json<T: Resource>(resource: &T) -> Value {
    serde_json::to_value(resource).unwrap()
}

/// Error code of a JSON error body
pub fn error_code(response: &TestResponse) -> String {
    response.json::<ErrorResponse>().code
}

// ---------------------------------------------------------------------------
// Mock builders
// ---------------------------------------------------------------------------

pub fn mock_person(seed: &str) -> PersonInformation {
    PersonInformation {
        full_name: Some(format!("Full Name {}", seed)),
        birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
        country: Some("Russia".to_string()),
        city: Some("Saint Petersburg".to_string()),
        about: Some(format!("about {}", seed)),
    }
}

pub fn mock_customer(seed: &str) -> Customer {
    Customer {
        login: Some(format!("{}{}", TEST_CUSTOMER_PREFIX, seed)),
        password: Some(format!("password_{}", seed)),
        email: Some(format!("{}{}@mail.ru", TEST_CUSTOMER_PREFIX, seed)),
        customer_information: Some(mock_person(seed)),
        ..Default::default()
    }
}

pub fn mock_operator(seed: &str) -> Operator {
    Operator {
        login: Some(format!("{}{}", TEST_OPERATOR_PREFIX, seed)),
        password: Some(format!("password_{}", seed)),
        email: Some(format!("{}{}@mail.ru", TEST_OPERATOR_PREFIX, seed)),
        operator_information: Some(mock_person(seed)),
        ..Default::default()
    }
}

pub fn mock_category(seed: &str) -> Category {
    Category::named(format!("{}{}", CATEGORY_PREFIX, seed))
}

pub fn mock_point_of_interest(seed: &str) -> PointOfInterest {
    PointOfInterest {
        name: Some(format!("OOO \"CALAMBUR\" {}", seed)),
        category: "SuperMarket".to_string(),
        start_work: NaiveTime::from_hms_opt(9, 30, 0),
        work_time: Some(540),
        address: Some(PoiAddress {
            region: Some("Leningrad Oblast".to_string()),
            city: Some("Saint Petersburg".to_string()),
            street: Some("Nevsky prospekt".to_string()),
            postcode: Some("191025".to_string()),
            build: Some("28".to_string()),
            room: Some(seed.to_string()),
            latitude: Some(59.9358),
            longitude: Some(30.3259),
        }),
        ..Default::default()
    }
}

pub fn mock_customer_request(_seed: &str) -> CustomerRequest {
    CustomerRequest::default()
}

pub fn mock_customer_request_stage(seed: &str) -> CustomerRequestStage {
    CustomerRequestStage {
        comment: Some(format!("stage comment {}", seed)),
        ..Default::default()
    }
}

pub fn mock_customer_request_stage_name(seed: &str) -> CustomerRequestStageName {
    CustomerRequestStageName {
        name: Some(format!("{}{}", TEST_STAGE_NAME_PREFIX, seed)),
        description: Some(format!("stage name {}", seed)),
        ..Default::default()
    }
}

pub fn mock_customer_request_type(seed: &str) -> CustomerRequestType {
    CustomerRequestType {
        name: Some(format!("{}{}", TEST_CUSTOMER_REQUEST_TYPE_PREFIX, seed)),
        description: Some(format!("request type {}", seed)),
        customer_request_category: Some(CustomerRequestCategory::HomeService),
        ..Default::default()
    }
}

pub fn mock_operator_role(seed: &str) -> OperatorRole {
    OperatorRole {
        name: Some(format!("{}{}", TEST_ROLE_PREFIX, seed)),
        description: Some(format!("role {}", seed)),
        ..Default::default()
    }
}

pub fn mock_address(seed: &str) -> Address {
    Address {
        region: Some("Moscow Oblast".to_string()),
        city: Some("Moscow".to_string()),
        street: Some(format!("Tverskaya {}", seed)),
        postcode: 125009,
        hause: Some("7".to_string()),
        office: Some(seed.to_string()),
        latitude: 55.7602,
        longitude: 37.6085,
        ..Default::default()
    }
}
