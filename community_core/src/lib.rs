//! Core building blocks for talking to the GHL communities API.
//!
//! This crate holds the process configuration, the resolution of the
//! location and group identifiers every call is scoped to, and the REST
//! gateway that turns a [`Request`] into a single HTTP round trip.

pub mod config;
pub mod errors;
pub mod gateway;
pub mod ids;
pub mod request;

pub use config::{Config, DEFAULT_BASE_URL};
pub use errors::{CommunityError, Identifier};
pub use gateway::{Gateway, RestGateway};
pub use ids::{CallContext, resolve};
pub use request::{Method, Query, Request};
