use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fxvlr_app::AppContext;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };
    let addr = app_context.config.bind_addr;

    let app = router(app_context);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/api/preview/{*path}", get(preview_json))
        .route("/", get(preview_page))
        .route("/{*path}", get(preview_page))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn preview_page(State(ctx): State<AppContext>, uri: Uri) -> Response {
    match ctx.generate_preview.execute(uri.path()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("No preview for {}: {}", uri.path(), e);
            e.into_response()
        }
    }
}

async fn preview_json(State(ctx): State<AppContext>, Path(path): Path<String>) -> Response {
    match ctx.generate_preview.preview(&path).await {
        Ok(preview) => Json(preview).into_response(),
        Err(e) => {
            tracing::warn!("No preview for /{}: {}", path, e);
            e.into_json_response()
        }
    }
}
