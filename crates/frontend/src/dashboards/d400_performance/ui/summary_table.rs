use crate::shared::i18n::PerformanceTexts;
use crate::shared::number_format::{format_brl, format_pct};
use contracts::dashboards::d400_performance::dto::{GroupBy, PerformanceRow};
use leptos::prelude::*;

/// "2007-01" -> "01/2007"
pub fn format_period(period: &str) -> String {
    match period.split_once('-') {
        Some((year, month)) => format!("{}/{}", month, year),
        None => period.to_string(),
    }
}

fn optional_brl(value: Option<f64>) -> String {
    value.map(format_brl).unwrap_or_else(|| "-".to_string())
}

/// One block per group: monthly rows, then the group total
#[component]
pub fn SummaryTable(
    rows: Vec<PerformanceRow>,
    group_by: GroupBy,
    t: &'static PerformanceTexts,
) -> impl IntoView {
    let name_header = match group_by {
        GroupBy::Consultant => t.consultant,
        GroupBy::Client => t.client,
    };

    let blocks = rows
        .into_iter()
        .map(|row| {
            let periods = row
                .periods
                .into_iter()
                .map(|p| {
                    view! {
                        <tr>
                            <td>{format_period(&p.period)}</td>
                            <td class="num">{format_brl(p.net_revenue)}</td>
                            <td class="num">{optional_brl(p.fixed_cost)}</td>
                            <td class="num">{format_brl(p.commission)}</td>
                            <td class="num" class:num--negative={p.profit.unwrap_or(0.0) < 0.0}>
                                {optional_brl(p.profit)}
                            </td>
                        </tr>
                    }
                })
                .collect_view();
            let negative = row.profit.unwrap_or(0.0) < 0.0;
            view! {
                <tbody class="table__block">
                    <tr class="table__group-header">
                        <td colspan="4">{row.name}</td>
                        <td class="num">{format_pct(row.revenue_share_pct)}</td>
                    </tr>
                    {periods}
                    <tr class="table__subtotal">
                        <td>{t.total}</td>
                        <td class="num">{format_brl(row.net_revenue)}</td>
                        <td class="num">{optional_brl(row.fixed_cost)}</td>
                        <td class="num">{format_brl(row.commission)}</td>
                        <td class="num" class:num--negative=negative>{optional_brl(row.profit)}</td>
                    </tr>
                </tbody>
            }
        })
        .collect_view();

    view! {
        <table class="table table--summary">
            <thead>
                <tr>
                    <th>{format!("{} / {}", name_header, t.period)}</th>
                    <th class="num">{t.net_revenue}</th>
                    <th class="num">{t.fixed_cost}</th>
                    <th class="num">{t.commission}</th>
                    <th class="num">{t.profit}</th>
                </tr>
            </thead>
            {blocks}
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2007-01"), "01/2007");
        assert_eq!(format_period("total"), "total");
    }

    #[test]
    fn test_optional_brl_dash_when_absent() {
        assert_eq!(optional_brl(None), "-");
        assert_eq!(optional_brl(Some(10.0)), "R$ 10,00");
    }
}
