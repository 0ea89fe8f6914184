//! Clinic administration core
//!
//! Headless state behind the clinic dashboard: list paging and bulk
//! selection, the registration form with its validation, the authentication
//! API client, and the auth flags store.

pub mod auth;
pub mod error;
pub mod form;
pub mod list;
pub mod store;
pub mod validation;

mod client;

pub use client::*;
