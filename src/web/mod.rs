//! Web rendering host for the dashboard
//!
//! Serves the dashboard descriptors as JSON together with an embedded page
//! that draws them:
//! - Class distribution (pie)
//! - Top feature importances (horizontal bar)
//! - Confusion matrix (annotated heatmap)
//! - Model metrics (cards)

pub mod routes;
pub mod server;

pub use server::{ServerConfig, start_server};
