pub mod health;
pub mod translate;

use std::sync::Arc;

use axum::Router;
use bizspec_service::Translator;

pub struct InnerAppState {
    /// `None` when no API key was configured at startup.
    pub translator: Option<Translator>,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(translate::routes())
        .with_state(state)
}
