use crate::shared::api_utils::{get_json, post_json, post_json_raw};
use contracts::dashboards::d400_performance::dto::{
    ErrorResponse, PerformanceRequest, PerformanceResponse,
};
use contracts::domain::a001_consultant::aggregate::Consultant;
use contracts::domain::a002_client::aggregate::Client;

const API_BASE: &str = "/api/d400";

pub async fn get_consultants() -> Result<Vec<Consultant>, String> {
    get_json("/api/consultants").await
}

pub async fn get_clients() -> Result<Vec<Client>, String> {
    get_json("/api/clients").await
}

/// Months (YYYY-MM) that have invoices
pub async fn get_available_periods() -> Result<Vec<String>, String> {
    get_json(&format!("{}/periods", API_BASE)).await
}

pub async fn get_performance(request: &PerformanceRequest) -> Result<PerformanceResponse, String> {
    post_json(&format!("{}/performance", API_BASE), request).await
}

/// CSV bytes of the same report
pub async fn export_performance(request: &PerformanceRequest) -> Result<Vec<u8>, String> {
    let response = post_json_raw(&format!("{}/performance/export", API_BASE), request).await?;

    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP error: {}", status),
        });
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read export: {}", e))
}
