//! API exposure
//!
//! Each exposure consumes a `ServerHost` and produces a Router for its
//! protocol. REST is the only one served.

pub mod rest;

pub use rest::RestExposure;
