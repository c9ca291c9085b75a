//! Terminal client for the Help Center topics API.
//!
//! Three views (topic list, topic detail, create form) plus a home screen,
//! each fetching from `/api/topics` when it is entered.

pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod ui;
pub mod utils;
