use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Issued,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "paid" => InvoiceStatus::Paid,
            _ => InvoiceStatus::Issued,
        }
    }
}

// ============================================================================
// Amount derivation
// ============================================================================

fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() {
        0.0
    } else {
        pct.clamp(0.0, 100.0)
    }
}

/// Net amount after the included taxes: `gross - gross * tax_pct / 100`
pub fn net_amount(gross: f64, tax_pct: f64) -> f64 {
    gross - gross * clamp_pct(tax_pct) / 100.0
}

/// Consultant commission on the net amount: `net * commission_pct / 100`
pub fn commission_amount(net: f64, commission_pct: f64) -> f64 {
    net * clamp_pct(commission_pct) / 100.0
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Invoice (nota fiscal) issued to a client for a consultant's service order.
///
/// `base.code` is the invoice number, `base.description` the billed system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(flatten)]
    pub base: BaseAggregate<InvoiceId>,

    #[serde(rename = "consultantRef")]
    pub consultant_ref: String,
    #[serde(rename = "clientRef")]
    pub client_ref: String,
    #[serde(rename = "serviceOrder")]
    pub service_order: String,
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,
    /// Gross amount, taxes included
    #[serde(rename = "grossAmount")]
    pub gross_amount: f64,
    /// Percentage of the gross amount that is tax
    #[serde(rename = "taxPct")]
    pub tax_pct: f64,
    /// Consultant commission, percent of the net amount
    #[serde(rename = "commissionPct")]
    pub commission_pct: f64,
    pub status: InvoiceStatus,
}

impl Invoice {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        invoice_number: String,
        system_name: String,
        consultant_ref: String,
        client_ref: String,
        service_order: String,
        issue_date: NaiveDate,
        gross_amount: f64,
        tax_pct: f64,
        commission_pct: f64,
        status: InvoiceStatus,
    ) -> Self {
        Self {
            base: BaseAggregate::new(InvoiceId::new_v4(), invoice_number, system_name),
            consultant_ref,
            client_ref,
            service_order,
            issue_date,
            gross_amount,
            tax_pct,
            commission_pct,
            status,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn net_amount(&self) -> f64 {
        net_amount(self.gross_amount, self.tax_pct)
    }

    pub fn commission_amount(&self) -> f64 {
        commission_amount(self.net_amount(), self.commission_pct)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Invoice number must not be empty".into());
        }
        if self.consultant_ref.trim().is_empty() || self.client_ref.trim().is_empty() {
            return Err("Invoice must reference a consultant and a client".into());
        }
        if !self.gross_amount.is_finite() || self.gross_amount < 0.0 {
            return Err("Gross amount must be a non-negative amount".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }
}

/// Query parameters for `GET /api/invoices`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListQuery {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(gross: f64, tax: f64, commission: f64) -> Invoice {
        Invoice::new_for_insert(
            "NF-1".into(),
            "Web".into(),
            "c".into(),
            "k".into(),
            "OS-1".into(),
            NaiveDate::from_ymd_opt(2007, 1, 10).unwrap(),
            gross,
            tax,
            commission,
            InvoiceStatus::Paid,
        )
    }

    #[test]
    fn test_net_and_commission() {
        let inv = invoice(1000.0, 10.0, 5.0);
        assert!((inv.net_amount() - 900.0).abs() < 1e-9);
        assert!((inv.commission_amount() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_are_clamped() {
        assert_eq!(net_amount(100.0, 150.0), 0.0);
        assert_eq!(net_amount(100.0, -5.0), 100.0);
        assert_eq!(commission_amount(100.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_status_roundtrip_via_str() {
        for status in [InvoiceStatus::Issued, InvoiceStatus::Paid] {
            assert_eq!(InvoiceStatus::from_str_lossy(status.as_str()), status);
        }
        assert_eq!(InvoiceStatus::from_str_lossy("???"), InvoiceStatus::Issued);
    }
}
