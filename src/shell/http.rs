use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::adapters::inbound::http as events_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/events",
            get(events_http::list_all).post(events_http::create),
        )
        .route(
            "/events/{id}",
            get(events_http::get_by_id)
                .patch(events_http::update)
                .delete(events_http::delete),
        )
        .route("/events/{id}/end", post(events_http::end))
        .route("/owners/{owner_id}/events", get(events_http::list_by_owner))
        .route("/statuses/{status}/events", get(events_http::list_by_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
