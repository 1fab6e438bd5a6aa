use axum::{extract::Query, http::StatusCode, Json};
use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceListQuery};

use crate::domain::a003_invoice;
use crate::shared::data::db::get_connection;

/// GET /api/invoices?date_from=2007-01-01&date_to=2007-01-31
pub async fn list_by_period(
    Query(query): Query<InvoiceListQuery>,
) -> Result<Json<Vec<Invoice>>, StatusCode> {
    if query.date_from > query.date_to {
        return Err(StatusCode::BAD_REQUEST);
    }
    match a003_invoice::service::list_by_period(get_connection(), query.date_from, query.date_to)
        .await
    {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list invoices: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
