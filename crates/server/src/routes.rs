pub mod records;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use models::{Message, Task};

use crate::state::ServerState;

const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Permissive cross-origin policy. The layer answers every OPTIONS request
/// itself with 200 and no body, before routing.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application router: `/tasks`, `/messages`, `/health`.
///
/// HEAD gets its own endpoint on the resource paths; axum would otherwise
/// answer it with the GET handler.
pub fn build_router(state: ServerState) -> Router {
    let tasks: Router = Router::new()
        .route(
            "/tasks",
            get(records::list::<Task>)
                .head(records::method_not_allowed)
                .post(records::create::<Task>)
                .fallback(records::method_not_allowed),
        )
        .with_state(state.tasks);

    let messages: Router = Router::new()
        .route(
            "/messages",
            get(records::list::<Message>)
                .head(records::method_not_allowed)
                .post(records::create::<Message>)
                .delete(records::delete::<Message>)
                .fallback(records::method_not_allowed),
        )
        .with_state(state.messages);

    Router::new()
        .route("/health", get(health))
        .merge(tasks)
        .merge(messages)
        .layer(build_cors())
        // CorsLayer only sends the method/header lists on pre-flight; clients
        // expect them on every response, errors included
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
