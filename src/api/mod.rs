//! Backend API integration module.
//!
//! This module provides the HTTP client for the facial-recognition server:
//! a connectivity probe, a generic JSON POST helper that pre-checks
//! reachability, and typed wrappers for the backend endpoints.

mod client;
mod models;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL, PEOPLE_ENDPOINT};
pub use models::{Face, FaceLocation, FacesResponse, PeopleResponse, RegisterResponse};
