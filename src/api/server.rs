use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::api::routes::{self, AppState};
use crate::data::dataset::DatasetHandle;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(routes::get_data))
        .route("/api/categories", get(routes::get_categories))
        .route("/api/regions", get(routes::get_regions))
        .route("/api/optimize", post(routes::optimize))
        .route("/api/debug/data_info", get(routes::data_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the siting API until the process is stopped.
pub async fn serve(dataset: DatasetHandle, port: u16) -> Result<()> {
    let app = router(AppState { dataset });
    let addr = format!("0.0.0.0:{}", port);
    info!("h2atlas API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
