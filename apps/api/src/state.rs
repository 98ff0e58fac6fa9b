use std::sync::Arc;

use crate::benchmark::reference::ReferenceData;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that grow config knobs later; only main reads it today.
    #[allow(dead_code)]
    pub config: Config,
    /// Static market reference tables, built once at startup. Read-only —
    /// handlers share it, never mutate it. Tests inject alternate tables
    /// through the same constructor.
    pub reference: Arc<ReferenceData>,
}
