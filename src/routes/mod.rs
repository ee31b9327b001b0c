use axum::{
    routing::get,
    Router,
};

use crate::service::TeamService;

pub mod health;
pub mod teams;

/// Shared handler state, composed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: TeamService,
}

/// Builds the full router. Kept separate from `main` so tests can drive the
/// real stack with `tower::ServiceExt::oneshot`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Team endpoints: literal /buscar wins over the {id} capture
        .route(
            "/equipos",
            get(teams::list_teams).post(teams::create_team),
        )
        .route("/equipos/buscar", get(teams::search_teams))
        .route(
            "/equipos/{id}",
            get(teams::get_team_by_id)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .with_state(state)
}
