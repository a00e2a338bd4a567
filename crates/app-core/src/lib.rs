//! Core application logic for GoodSeva
//!
//! This crate contains the logistics domain model, the mocked data provider,
//! and the form flows behind the onboarding, auth, fleet and profile screens.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod domain;
pub mod fixtures;
pub mod fleet;
pub mod logistics;
pub mod onboarding;
pub mod profile;
