//! Application setup and router configuration.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    check_joined_handler, create_event_handler, delete_event_handler, get_event_handler,
    join_event_handler, joined_events_handler, leave_event_handler, list_events_handler,
    root_handler, update_event_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
}

/// Build the Axum application router.
///
/// Static membership paths are registered alongside `/events/:id`; the router
/// gives static segments priority, so `/events/join` never captures as an id.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState { deps };

    Router::new()
        .route("/", get(root_handler))
        .route("/events", post(create_event_handler).get(list_events_handler))
        .route("/events/join", post(join_event_handler))
        .route("/events/join/check", get(check_joined_handler))
        .route("/events/joined/:email", get(joined_events_handler))
        // POST rather than DELETE: request bodies on DELETE are unreliable
        // across HTTP clients.
        .route("/events/leave", post(leave_event_handler))
        .route(
            "/events/:id",
            get(get_event_handler)
                .put(update_event_handler)
                .delete(delete_event_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
