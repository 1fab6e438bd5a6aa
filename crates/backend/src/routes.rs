use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // REFERENCE DATA
        // ========================================
        .route("/api/consultants", get(handlers::a001_consultant::list_all))
        .route(
            "/api/consultants/:id",
            get(handlers::a001_consultant::get_by_id),
        )
        .route("/api/clients", get(handlers::a002_client::list_all))
        .route("/api/clients/:id", get(handlers::a002_client::get_by_id))
        .route(
            "/api/invoices",
            get(handlers::a003_invoice::list_by_period),
        )
        // ========================================
        // D400 PERFORMANCE DASHBOARD
        // ========================================
        .route(
            "/api/d400/performance",
            post(handlers::d400_performance::get_performance),
        )
        .route(
            "/api/d400/performance/export",
            post(handlers::d400_performance::export_performance),
        )
        .route(
            "/api/d400/periods",
            get(handlers::d400_performance::get_available_periods),
        )
        // ========================================
        // TASKS
        // ========================================
        .route(
            "/api/tasks",
            get(handlers::a004_task::list_all).post(handlers::a004_task::create),
        )
        .route(
            "/api/tasks/suggest-keywords",
            post(handlers::a004_task::suggest_keywords),
        )
        .route("/api/tasks/:id", get(handlers::a004_task::get_by_id))
        .route("/api/tasks/:id/toggle", post(handlers::a004_task::toggle))
        .route("/api/keywords", get(handlers::a004_task::list_keywords))
        // ========================================
        // REGISTRATION (simulated)
        // ========================================
        .route("/api/registration", post(handlers::registration::register))
        .route(
            "/api/registration/verify",
            post(handlers::registration::verify),
        )
}
