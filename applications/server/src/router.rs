/// Router assembly
use crate::{api, middleware, state::AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Router,
};
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
///
/// `uploads_dir` is served at `/uploads`; `web_dir` holds the built web
/// client and falls back to its index.html for client-side routes.
pub fn create_router(app_state: AppState, uploads_dir: PathBuf, web_dir: PathBuf) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/:slug", get(api::artists::get_artist))
        .route("/about", get(api::about::get_about))
        .route("/book", post(api::bookings::create_booking))
        .route("/chat", post(api::chat::chat))
        .route("/login", post(api::auth::login))
        .route("/logout", post(api::auth::logout))
        .route("/user", get(api::auth::current_user));

    // Admin routes (admin session required)
    let admin_routes = Router::new()
        .route("/artists/:id", patch(api::admin::update_artist))
        .route(
            "/artists/:id/profile-image",
            post(api::admin::upload_profile_image),
        )
        .route(
            "/artists/:id/portfolio",
            post(api::admin::upload_portfolio_images),
        )
        .route("/portfolio/:id", delete(api::admin::delete_portfolio_item))
        .route("/about", patch(api::admin::update_about))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            middleware::require_admin,
        ));

    // Static file serving for the web client (SPA with fallback to index.html)
    let spa_fallback = move |req: Request<Body>| {
        let web_dir = web_dir.clone();
        async move {
            let path = req.uri().path().trim_start_matches('/');
            let file_path = web_dir.join(path);

            if file_path.exists() && file_path.is_file() {
                match ServeDir::new(&web_dir).oneshot(req).await {
                    Ok(res) => res.into_response(),
                    Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                }
            } else {
                // SPA fallback: serve index.html
                let index_path = web_dir.join("index.html");
                if index_path.exists() {
                    match tokio::fs::read(&index_path).await {
                        Ok(contents) => (
                            StatusCode::OK,
                            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                            contents,
                        )
                            .into_response(),
                        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                    }
                } else {
                    // No web client available
                    StatusCode::NOT_FOUND.into_response()
                }
            }
        }
    };

    Router::new()
        .nest("/api", public_routes.nest("/admin", admin_routes))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(spa_fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
