//! Server-rendered HTML pages.
//!
//! Pages are rendered with Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`error`] - 404/500 pages
//! - [`forms`] - Form parsing and validation
//! - [`handlers`] - Page handlers
//! - [`notice`] - Post-redirect status messages
//! - [`routes`] - Page route configuration
//! - [`views`] - Display models for templates

pub mod error;
pub mod forms;
pub mod handlers;
pub mod notice;
pub mod routes;
pub mod views;
