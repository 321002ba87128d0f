//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        // Closed set of patchable fields, one route each. The legacy
        // free-form field patch is intentionally gone.
        .route("/{id}/processed", patch(handler::mark_processed))
        .route("/{id}/total-price", patch(handler::set_total_price))
}
