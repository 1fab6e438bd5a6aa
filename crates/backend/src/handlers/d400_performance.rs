use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d400_performance::{
    ErrorResponse, PerformanceRequest, PerformanceResponse,
};

use crate::dashboards::d400_performance::{export, service, service::ReportError};
use crate::shared::data::db::get_connection;

fn report_error_response(e: ReportError) -> Response {
    if e.is_client_error() {
        tracing::warn!("D400 Dashboard: rejected request: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response()
    } else {
        tracing::error!("D400 Dashboard: failed to build report: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// POST /api/d400/performance
pub async fn get_performance(
    Json(request): Json<PerformanceRequest>,
) -> Result<Json<PerformanceResponse>, Response> {
    service::get_performance(get_connection(), &request)
        .await
        .map(Json)
        .map_err(report_error_response)
}

/// POST /api/d400/performance/export
pub async fn export_performance(Json(request): Json<PerformanceRequest>) -> Response {
    let report = match service::get_performance(get_connection(), &request).await {
        Ok(r) => r,
        Err(e) => return report_error_response(e),
    };
    match export::to_csv(&report) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export::file_name(&report)),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("D400 Dashboard: CSV export failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /api/d400/periods
pub async fn get_available_periods() -> Result<Json<Vec<String>>, StatusCode> {
    match service::list_periods(get_connection()).await {
        Ok(periods) => {
            tracing::info!(
                "D400 Dashboard: Returning {} available periods",
                periods.len()
            );
            Ok(Json(periods))
        }
        Err(e) => {
            tracing::error!("D400 Dashboard: Failed to get periods: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn error_body(resp: Response) -> ErrorResponse {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_selection_maps_to_400_with_message() {
        let resp = report_error_response(ReportError::EmptySelection);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(resp).await.error, "selection is empty");
    }

    #[tokio::test]
    async fn test_invalid_range_maps_to_400_with_message() {
        let resp = report_error_response(ReportError::InvalidRange {
            from: "2007-02-01".into(),
            to: "2007-01-01".into(),
        });
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(error_body(resp)
            .await
            .error
            .starts_with("invalid date range"));
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_500() {
        let resp = report_error_response(ReportError::Storage(anyhow::anyhow!("disk gone")));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
