//! Pure report building over invoice facts.
//!
//! Per invoice: `net = gross - gross * tax / 100`, `commission = net * pct / 100`.
//! Groups sum net and commission; a consultant's fixed cost is charged once
//! for every month the consultant has a matching invoice.

use chrono::NaiveDate;
use contracts::dashboards::d400_performance::{
    GroupBy, InvoiceLine, PerformanceRequest, PerformanceResponse, PerformanceRow,
    PerformanceTotals, PeriodRow,
};
use contracts::domain::a003_invoice::aggregate::{commission_amount, net_amount, InvoiceStatus};
use std::collections::{BTreeMap, HashSet};

use super::repository::InvoiceFact;

#[derive(Default)]
struct GroupAcc {
    name: String,
    monthly_fixed_cost: Option<f64>,
    /// period -> (net, commission)
    periods: BTreeMap<String, (f64, f64)>,
}

fn group_key(fact: &InvoiceFact, group_by: GroupBy) -> &str {
    match group_by {
        GroupBy::Consultant => &fact.consultant_ref,
        GroupBy::Client => &fact.client_ref,
    }
}

fn display_name(name: &Option<String>, fallback: &str) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.clone(),
        _ => fallback.to_string(),
    }
}

fn profit(net: f64, commission: f64, fixed_cost: Option<f64>) -> Option<f64> {
    fixed_cost.map(|fixed| net - (fixed + commission))
}

/// Build the report for `request` from invoice facts. Facts outside the date
/// range or not in the selection are skipped; unknown selected ids yield no row.
pub fn build_report(request: &PerformanceRequest, facts: &[InvoiceFact]) -> PerformanceResponse {
    let group_by = request.group_by;
    let selected: HashSet<&str> = request.selected_refs.iter().map(|s| s.as_str()).collect();

    let mut groups: BTreeMap<String, GroupAcc> = BTreeMap::new();
    let mut details = Vec::new();
    let mut totals = PerformanceTotals::default();

    for fact in facts {
        let Ok(issue_date) = NaiveDate::parse_from_str(&fact.issue_date, "%Y-%m-%d") else {
            tracing::warn!(
                "Skipping invoice {} with malformed issue date '{}'",
                fact.invoice_ref,
                fact.issue_date
            );
            continue;
        };
        if issue_date < request.date_from || issue_date > request.date_to {
            continue;
        }
        let key = group_key(fact, group_by);
        if !selected.contains(key) {
            continue;
        }

        let net = net_amount(fact.gross_amount, fact.tax_pct);
        let commission = commission_amount(net, fact.commission_pct);
        let period = issue_date.format("%Y-%m").to_string();

        let acc = groups.entry(key.to_string()).or_insert_with(|| GroupAcc {
            name: match group_by {
                GroupBy::Consultant => display_name(&fact.consultant_name, key),
                GroupBy::Client => display_name(&fact.client_name, key),
            },
            monthly_fixed_cost: match group_by {
                GroupBy::Consultant => fact.consultant_fixed_cost,
                GroupBy::Client => None,
            },
            periods: BTreeMap::new(),
        });
        let entry = acc.periods.entry(period).or_insert((0.0, 0.0));
        entry.0 += net;
        entry.1 += commission;

        totals.gross += fact.gross_amount;
        totals.net_revenue += net;
        totals.commission += commission;

        details.push(InvoiceLine {
            invoice_ref: fact.invoice_ref.clone(),
            consultant_ref: fact.consultant_ref.clone(),
            consultant_name: display_name(&fact.consultant_name, &fact.consultant_ref),
            client_ref: fact.client_ref.clone(),
            client_name: display_name(&fact.client_name, &fact.client_ref),
            system_name: fact.system_name.clone(),
            service_order: fact.service_order.clone(),
            invoice_number: fact.invoice_number.clone(),
            issue_date,
            gross: fact.gross_amount,
            net,
            commission,
            status: InvoiceStatus::from_str_lossy(&fact.status),
        });
    }

    let mut rows: Vec<PerformanceRow> = groups
        .into_iter()
        .map(|(key, acc)| {
            let periods: Vec<PeriodRow> = acc
                .periods
                .into_iter()
                .map(|(period, (net, commission))| PeriodRow {
                    period,
                    net_revenue: net,
                    commission,
                    fixed_cost: acc.monthly_fixed_cost,
                    profit: profit(net, commission, acc.monthly_fixed_cost),
                })
                .collect();
            let net_revenue: f64 = periods.iter().map(|p| p.net_revenue).sum();
            let commission: f64 = periods.iter().map(|p| p.commission).sum();
            let fixed_cost = acc
                .monthly_fixed_cost
                .map(|monthly| monthly * periods.len() as f64);
            let revenue_share_pct = if totals.net_revenue != 0.0 {
                net_revenue / totals.net_revenue * 100.0
            } else {
                0.0
            };

            PerformanceRow {
                key,
                name: acc.name,
                net_revenue,
                commission,
                fixed_cost,
                profit: profit(net_revenue, commission, fixed_cost),
                revenue_share_pct,
                periods,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.key.cmp(&b.key))
    });

    let fixed_costs: Vec<f64> = rows.iter().filter_map(|r| r.fixed_cost).collect();
    if !fixed_costs.is_empty() {
        totals.fixed_cost = Some(fixed_costs.iter().sum());
        totals.profit = Some(rows.iter().filter_map(|r| r.profit).sum());
    }
    let average_fixed_cost = if fixed_costs.is_empty() {
        0.0
    } else {
        fixed_costs.iter().sum::<f64>() / fixed_costs.len() as f64
    };

    details.sort_by(|a, b| {
        a.client_name
            .to_lowercase()
            .cmp(&b.client_name.to_lowercase())
            .then_with(|| a.issue_date.cmp(&b.issue_date))
            .then_with(|| a.invoice_number.cmp(&b.invoice_number))
    });

    PerformanceResponse {
        group_by,
        date_from: request.date_from,
        date_to: request.date_to,
        rows,
        details,
        totals,
        average_fixed_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[allow(clippy::too_many_arguments)]
    fn fact(
        number: &str,
        consultant: (&str, &str, Option<f64>),
        client: (&str, &str),
        issue_date: &str,
        gross: f64,
        tax: f64,
        pct: f64,
    ) -> InvoiceFact {
        InvoiceFact {
            invoice_ref: format!("ref-{}", number),
            invoice_number: number.into(),
            system_name: "Portal".into(),
            service_order: "OS-1".into(),
            issue_date: issue_date.into(),
            gross_amount: gross,
            tax_pct: tax,
            commission_pct: pct,
            status: "paid".into(),
            consultant_ref: consultant.0.into(),
            consultant_name: Some(consultant.1.into()),
            consultant_fixed_cost: consultant.2,
            client_ref: client.0.into(),
            client_name: Some(client.1.into()),
        }
    }

    const ANA: (&str, &str, Option<f64>) = ("c1", "Ana", Some(1000.0));
    const BRUNO: (&str, &str, Option<f64>) = ("c2", "bruno", Some(3000.0));
    const ACME: (&str, &str) = ("k1", "Acme");
    const ZETA: (&str, &str) = ("k2", "Zeta");

    fn facts() -> Vec<InvoiceFact> {
        vec![
            fact("1", ANA, ZETA, "2007-01-01", 1000.0, 10.0, 5.0),
            fact("2", ANA, ACME, "2007-01-31", 2000.0, 0.0, 10.0),
            fact("3", BRUNO, ACME, "2007-01-15", 500.0, 20.0, 0.0),
            fact("4", ANA, ACME, "2007-02-01", 4000.0, 0.0, 0.0),
            fact("5", BRUNO, ZETA, "2006-12-31", 9999.0, 0.0, 0.0),
        ]
    }

    fn request(group_by: GroupBy, refs: &[&str], from: NaiveDate, to: NaiveDate) -> PerformanceRequest {
        PerformanceRequest {
            group_by,
            selected_refs: refs.iter().map(|s| s.to_string()).collect(),
            date_from: from,
            date_to: to,
        }
    }

    #[test]
    fn test_consultant_grouping_within_bounds() {
        let req = request(
            GroupBy::Consultant,
            &["c1", "c2", "unknown"],
            date(2007, 1, 1),
            date(2007, 1, 31),
        );
        let report = build_report(&req, &facts());

        assert_eq!(report.rows.len(), 2);
        let ana = &report.rows[0];
        assert_eq!(ana.name, "Ana");
        // 900 + 2000 net, 45 + 200 commission
        assert!((ana.net_revenue - 2900.0).abs() < 1e-9);
        assert!((ana.commission - 245.0).abs() < 1e-9);
        assert_eq!(ana.fixed_cost, Some(1000.0));
        assert!((ana.profit.unwrap() - (2900.0 - 1245.0)).abs() < 1e-9);
        assert_eq!(ana.periods.len(), 1);
        assert_eq!(ana.periods[0].period, "2007-01");

        let bruno = &report.rows[1];
        assert_eq!(bruno.name, "bruno");
        assert!((bruno.net_revenue - 400.0).abs() < 1e-9);
        assert_eq!(bruno.commission, 0.0);
        assert_eq!(bruno.profit, Some(400.0 - 3000.0));

        assert!((report.totals.gross - 3500.0).abs() < 1e-9);
        assert!((report.totals.net_revenue - 3300.0).abs() < 1e-9);
        assert_eq!(report.totals.fixed_cost, Some(4000.0));
        assert!((report.average_fixed_cost - 2000.0).abs() < 1e-9);
        assert!((ana.revenue_share_pct + bruno.revenue_share_pct - 100.0).abs() < 1e-9);
        assert_eq!(report.details.len(), 3);
    }

    #[test]
    fn test_fixed_cost_charged_per_active_month() {
        let req = request(GroupBy::Consultant, &["c1"], date(2007, 1, 1), date(2007, 2, 28));
        let report = build_report(&req, &facts());

        let ana = &report.rows[0];
        assert_eq!(ana.periods.len(), 2);
        assert_eq!(ana.periods[1].period, "2007-02");
        assert_eq!(ana.periods[1].fixed_cost, Some(1000.0));
        assert_eq!(ana.periods[1].profit, Some(3000.0));
        assert_eq!(ana.fixed_cost, Some(2000.0));
        assert_eq!(report.average_fixed_cost, 2000.0);
    }

    #[test]
    fn test_client_grouping_has_no_fixed_cost() {
        let req = request(GroupBy::Client, &["k1"], date(2007, 1, 1), date(2007, 1, 31));
        let report = build_report(&req, &facts());

        assert_eq!(report.rows.len(), 1);
        let acme = &report.rows[0];
        assert_eq!(acme.name, "Acme");
        assert!((acme.net_revenue - 2400.0).abs() < 1e-9);
        assert_eq!(acme.fixed_cost, None);
        assert_eq!(acme.profit, None);
        assert_eq!(acme.revenue_share_pct, 100.0);
        assert_eq!(report.totals.fixed_cost, None);
        assert_eq!(report.average_fixed_cost, 0.0);
    }

    #[test]
    fn test_details_ordered_by_client_then_date() {
        let req = request(GroupBy::Consultant, &["c1", "c2"], date(2007, 1, 1), date(2007, 1, 31));
        let report = build_report(&req, &facts());

        let numbers: Vec<&str> = report
            .details
            .iter()
            .map(|d| d.invoice_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["3", "2", "1"]);
        assert_eq!(report.details[0].status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_out_of_range_percentages_are_clamped() {
        let data = vec![fact("9", ANA, ACME, "2007-01-10", 100.0, 150.0, -5.0)];
        let req = request(GroupBy::Consultant, &["c1"], date(2007, 1, 1), date(2007, 1, 31));
        let report = build_report(&req, &data);

        assert_eq!(report.rows[0].net_revenue, 0.0);
        assert_eq!(report.rows[0].commission, 0.0);
        // Zero total net revenue gives a zero share instead of NaN
        assert_eq!(report.totals.net_revenue, 0.0);
        assert_eq!(report.rows[0].revenue_share_pct, 0.0);
    }

    #[test]
    fn test_nothing_matches() {
        let req = request(GroupBy::Consultant, &["c1"], date(2008, 1, 1), date(2008, 12, 31));
        let report = build_report(&req, &facts());

        assert!(report.is_empty());
        assert!(report.details.is_empty());
        assert_eq!(report.totals, PerformanceTotals::default());
        assert_eq!(report.average_fixed_cost, 0.0);
    }

    #[test]
    fn test_missing_consultant_record_falls_back_to_id() {
        let orphan = ("c9", "", None);
        let data = vec![fact("7", orphan, ACME, "2007-01-05", 100.0, 0.0, 0.0)];
        let req = request(GroupBy::Consultant, &["c9"], date(2007, 1, 1), date(2007, 1, 31));
        let report = build_report(&req, &data);

        assert_eq!(report.rows[0].name, "c9");
        assert_eq!(report.rows[0].fixed_cost, None);
        assert_eq!(report.average_fixed_cost, 0.0);
    }
}
