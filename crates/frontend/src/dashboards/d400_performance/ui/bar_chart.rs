use crate::shared::number_format::{format_brl, format_decimal_br};
use contracts::dashboards::d400_performance::dto::PerformanceRow;
use leptos::prelude::*;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::{
    ChartBuilder, Color, IntoDrawingArea, IntoFont, LineSeries, PathElement, RGBColor, Rectangle,
    SVGBackend, SeriesLabelPosition, BLACK, WHITE,
};

const WIDTH: u32 = 760;
const HEIGHT: u32 = 400;
/// Width of one bar in x units; each row is centered on its index
const BAR_WIDTH: f64 = 0.25;

pub const NET_REVENUE_COLOR: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
pub const FIXED_COST_COLOR: RGBColor = RGBColor(0xf5, 0x9e, 0x0b);
pub const COMMISSION_COLOR: RGBColor = RGBColor(0x10, 0xb9, 0x81);
pub const AVERAGE_COLOR: RGBColor = RGBColor(0xef, 0x44, 0x44);

/// Series drawn per row, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSeries {
    NetRevenue,
    FixedCost,
    Commission,
}

impl BarSeries {
    const ALL: [BarSeries; 3] = [
        BarSeries::NetRevenue,
        BarSeries::FixedCost,
        BarSeries::Commission,
    ];

    fn value(&self, row: &PerformanceRow) -> f64 {
        match self {
            BarSeries::NetRevenue => row.net_revenue,
            BarSeries::FixedCost => row.fixed_cost.unwrap_or(0.0),
            BarSeries::Commission => row.commission,
        }
    }

    fn color(&self) -> RGBColor {
        match self {
            BarSeries::NetRevenue => NET_REVENUE_COLOR,
            BarSeries::FixedCost => FIXED_COST_COLOR,
            BarSeries::Commission => COMMISSION_COLOR,
        }
    }

    /// Offset of the bar's left edge from the row center
    fn offset(&self) -> f64 {
        match self {
            BarSeries::NetRevenue => -1.5 * BAR_WIDTH,
            BarSeries::FixedCost => -0.5 * BAR_WIDTH,
            BarSeries::Commission => 0.5 * BAR_WIDTH,
        }
    }
}

/// Legend captions for the bar chart
#[derive(Debug, Clone, Copy)]
pub struct BarLabels {
    pub title: &'static str,
    pub net_revenue: &'static str,
    pub fixed_cost: &'static str,
    pub commission: &'static str,
    pub average: &'static str,
}

impl BarLabels {
    fn series(&self, series: BarSeries) -> &'static str {
        match series {
            BarSeries::NetRevenue => self.net_revenue,
            BarSeries::FixedCost => self.fixed_cost,
            BarSeries::Commission => self.commission,
        }
    }
}

/// Top of the value axis: highest bar or average plus headroom
pub fn value_axis_max(rows: &[PerformanceRow], average_fixed_cost: f64) -> f64 {
    let highest = rows
        .iter()
        .flat_map(|r| BarSeries::ALL.map(|s| s.value(r)))
        .chain(std::iter::once(average_fixed_cost))
        .fold(0.0_f64, f64::max);
    if highest > 0.0 {
        highest * 1.1
    } else {
        1.0
    }
}

/// Render the grouped bar chart as an SVG document
pub fn render_bar_chart(
    rows: &[PerformanceRow],
    average_fixed_cost: f64,
    labels: &BarLabels,
) -> Result<String, String> {
    let err = |e: DrawingAreaErrorKind<std::io::Error>| e.to_string();
    let x_max = rows.len() as f64 - 0.5;
    let y_max = value_axis_max(rows, average_fixed_cost);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(labels.title, ("sans-serif", 20).into_font())
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5_f64..x_max, 0.0_f64..y_max)
            .map_err(err)?;

        let row_name = |x: &f64| {
            let index = x.round();
            if (x - index).abs() > 1e-6 || index < 0.0 {
                return String::new();
            }
            rows.get(index as usize)
                .map(|r| r.name.clone())
                .unwrap_or_default()
        };
        let amount = |y: &f64| format_decimal_br(*y, 0);

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(rows.len() + 1)
            .x_label_formatter(&row_name)
            .y_label_formatter(&amount)
            .draw()
            .map_err(err)?;

        for series in BarSeries::ALL {
            let color = series.color();
            chart
                .draw_series(rows.iter().enumerate().map(|(i, row)| {
                    let left = i as f64 + series.offset();
                    Rectangle::new(
                        [(left, 0.0), (left + BAR_WIDTH, series.value(row))],
                        color.filled(),
                    )
                }))
                .map_err(err)?
                .label(labels.series(series))
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }

        if average_fixed_cost > 0.0 {
            chart
                .draw_series(LineSeries::new(
                    vec![(-0.5, average_fixed_cost), (x_max, average_fixed_cost)],
                    AVERAGE_COLOR.stroke_width(2),
                ))
                .map_err(err)?
                .label(labels.average)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], AVERAGE_COLOR));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(err)?;

        root.present().map_err(err)?;
    }
    Ok(svg)
}

#[component]
pub fn BarChart(rows: Vec<PerformanceRow>, average_fixed_cost: f64, labels: BarLabels) -> impl IntoView {
    let body = match render_bar_chart(&rows, average_fixed_cost, &labels) {
        Ok(svg) => view! { <div class="chart__canvas" inner_html=svg></div> }.into_any(),
        Err(e) => {
            log::error!("Bar chart rendering failed: {}", e);
            view! { <div class="alert alert--warning">{e}</div> }.into_any()
        }
    };

    view! {
        <div class="chart chart--bar">
            {body}
            <div class="chart__legend">
                <span class="chart__legend-item">
                    {labels.average}
                    ": "
                    <span class="chart__legend-value">{format_brl(average_fixed_cost)}</span>
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: BarLabels = BarLabels {
        title: "Performance",
        net_revenue: "Receita",
        fixed_cost: "Custo fixo",
        commission: "Comissao",
        average: "Custo fixo medio",
    };

    fn row(name: &str, net: f64, fixed: Option<f64>, commission: f64) -> PerformanceRow {
        PerformanceRow {
            key: name.to_lowercase(),
            name: name.to_string(),
            net_revenue: net,
            commission,
            fixed_cost: fixed,
            profit: None,
            revenue_share_pct: 0.0,
            periods: vec![],
        }
    }

    #[test]
    fn test_value_axis_max() {
        assert_eq!(value_axis_max(&[], 0.0), 1.0);
        let rows = vec![row("Ana", 1000.0, Some(2500.0), 50.0)];
        assert!((value_axis_max(&rows, 0.0) - 2750.0).abs() < 1e-9);
        assert!((value_axis_max(&rows, 5000.0) - 5500.0).abs() < 1e-9);
    }

    #[test]
    fn test_bars_sit_side_by_side() {
        let offsets: Vec<f64> = BarSeries::ALL.iter().map(|s| s.offset()).collect();
        assert!(offsets[0] < offsets[1] && offsets[1] < offsets[2]);
        assert!((offsets[2] + BAR_WIDTH - 1.5 * BAR_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_render_contains_rows_and_legend() {
        let rows = vec![
            row("Ana", 10000.0, Some(2500.0), 500.0),
            row("Bia", 4000.0, Some(1500.0), 200.0),
        ];
        let svg = render_bar_chart(&rows, 2000.0, &LABELS).expect("svg");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Ana"));
        assert!(svg.contains("Bia"));
        assert!(svg.contains("Custo fixo medio"));
        assert!(svg.matches("<rect").count() >= rows.len() * 3);
    }

    #[test]
    fn test_render_without_fixed_cost_skips_average() {
        let rows = vec![row("Acme", 100.0, None, 5.0)];
        let svg = render_bar_chart(&rows, 0.0, &LABELS).expect("svg");
        assert!(svg.contains("Acme"));
        assert!(!svg.contains("Custo fixo medio"));
    }
}
