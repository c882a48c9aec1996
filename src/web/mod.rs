pub mod handlers;
pub mod pages;

use crate::record_service::RecordService;
use axum::{
    Router,
    routing::{get, post},
};
use handlers::{
    add_record_handler, add_student_form_handler, add_student_handler, index_handler,
    search_handler,
};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RecordService>,
}

pub fn router(service: Arc<RecordService>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/search", post(search_handler))
        .route("/add_record", get(add_record_handler))
        .route(
            "/add_student",
            get(add_student_form_handler).post(add_student_handler),
        )
        .with_state(AppState { service })
}

/// Serves the tracker on `address` until Ctrl+C or SIGTERM
pub async fn serve(service: Arc<RecordService>, address: &str) -> std::io::Result<()> {
    let app = router(service);

    info!("Binding to {}", address);
    let listener = TcpListener::bind(address).await?;
    info!("Server running! Open http://{} in your browser", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
