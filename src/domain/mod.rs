//! Domain layer containing business entities and rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`availability`] - Weekly availability profile and its summary phrase
//! - [`scheduling`] - Show admissibility check and the injected clock
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in
//! [`crate::infrastructure::persistence`].

pub mod availability;
pub mod entities;
pub mod repositories;
pub mod scheduling;
