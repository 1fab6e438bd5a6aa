use anyhow::Result;
use contracts::dashboards::d400_performance::PerformanceResponse;
use serde::Serialize;

use crate::shared::format::round2;

/// One CSV line: a month of a group, or the group's total (`period = "total"`)
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    group: &'a str,
    name: &'a str,
    period: &'a str,
    net_revenue: f64,
    commission: f64,
    fixed_cost: Option<f64>,
    profit: Option<f64>,
    revenue_share_pct: Option<f64>,
}

/// Render the report summary as CSV
pub fn to_csv(report: &PerformanceResponse) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let group = report.group_by.as_str();

    for row in &report.rows {
        for period in &row.periods {
            writer.serialize(CsvRecord {
                group,
                name: &row.name,
                period: &period.period,
                net_revenue: round2(period.net_revenue),
                commission: round2(period.commission),
                fixed_cost: period.fixed_cost.map(round2),
                profit: period.profit.map(round2),
                revenue_share_pct: None,
            })?;
        }
        writer.serialize(CsvRecord {
            group,
            name: &row.name,
            period: "total",
            net_revenue: round2(row.net_revenue),
            commission: round2(row.commission),
            fixed_cost: row.fixed_cost.map(round2),
            profit: row.profit.map(round2),
            revenue_share_pct: Some(round2(row.revenue_share_pct)),
        })?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish CSV: {}", e))
}

/// Download file name for a report
pub fn file_name(report: &PerformanceResponse) -> String {
    format!(
        "performance_{}_{}_{}.csv",
        report.group_by.as_str(),
        report.date_from.format("%Y%m%d"),
        report.date_to.format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::dashboards::d400_performance::{
        GroupBy, PerformanceRow, PerformanceTotals, PeriodRow,
    };

    fn report(group_by: GroupBy, fixed: Option<f64>) -> PerformanceResponse {
        PerformanceResponse {
            group_by,
            date_from: NaiveDate::from_ymd_opt(2007, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2007, 1, 31).unwrap(),
            rows: vec![PerformanceRow {
                key: "c1".into(),
                name: "Silva, Ana".into(),
                net_revenue: 1234.567,
                commission: 10.0,
                fixed_cost: fixed,
                profit: fixed.map(|f| 1234.567 - 10.0 - f),
                revenue_share_pct: 100.0,
                periods: vec![PeriodRow {
                    period: "2007-01".into(),
                    net_revenue: 1234.567,
                    commission: 10.0,
                    fixed_cost: fixed,
                    profit: fixed.map(|f| 1234.567 - 10.0 - f),
                }],
            }],
            details: vec![],
            totals: PerformanceTotals::default(),
            average_fixed_cost: fixed.unwrap_or(0.0),
        }
    }

    #[test]
    fn test_csv_has_header_period_and_total_lines() {
        let bytes = to_csv(&report(GroupBy::Consultant, Some(1000.0))).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "group,name,period,net_revenue,commission,fixed_cost,profit,revenue_share_pct"
        );
        assert_eq!(
            lines[1],
            "consultant,\"Silva, Ana\",2007-01,1234.57,10.0,1000.0,224.57,"
        );
        assert!(lines[2].contains(",total,"));
        assert!(lines[2].ends_with(",100.0"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_leaves_fixed_cost_blank_for_clients() {
        let bytes = to_csv(&report(GroupBy::Client, None)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("client,"));
        assert!(text.lines().nth(1).unwrap().ends_with("10.0,,,"));
    }

    #[test]
    fn test_file_name() {
        let name = file_name(&report(GroupBy::Client, None));
        assert_eq!(name, "performance_client_20070101_20070131.csv");
    }
}
