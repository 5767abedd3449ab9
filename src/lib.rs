//! Codeforces practice recommendations.
//!
//! Given a handle, the service fetches the user's submissions, computes
//! per-tag solve accuracy, splits tags into strengths and weaknesses, and
//! suggests catalog problems around the user's usual difficulty.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
