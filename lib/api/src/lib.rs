//! # Stylist API
//!
//! REST surface for the Stylist outfit suggestion service.

mod rest;

pub use rest::{AppState, RestApi};
