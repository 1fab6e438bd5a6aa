use crate::shared::number_format::{format_brl, format_pct};
use contracts::dashboards::d400_performance::dto::PerformanceRow;
use leptos::prelude::*;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::Pie;
use plotters::prelude::{IntoDrawingArea, IntoFont, RGBColor, SVGBackend, BLACK, WHITE};

const WIDTH: u32 = 420;
const HEIGHT: u32 = 380;
const RADIUS: f64 = 130.0;

const PALETTE: [RGBColor; 8] = [
    RGBColor(0x3b, 0x82, 0xf6),
    RGBColor(0xf5, 0x9e, 0x0b),
    RGBColor(0x10, 0xb9, 0x81),
    RGBColor(0xef, 0x44, 0x44),
    RGBColor(0x8b, 0x5c, 0xf6),
    RGBColor(0xec, 0x48, 0x99),
    RGBColor(0x14, 0xb8, 0xa6),
    RGBColor(0x84, 0xcc, 0x16),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PieShare {
    pub label: String,
    pub value: f64,
    /// Share of the total, percent
    pub pct: f64,
    pub color: RGBColor,
}

impl PieShare {
    fn css_color(&self) -> String {
        let RGBColor(r, g, b) = self.color;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Net revenue shares; rows without net revenue are skipped
pub fn pie_shares(rows: &[PerformanceRow]) -> Vec<PieShare> {
    let total: f64 = rows.iter().map(|r| r.net_revenue.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    rows.iter()
        .filter(|r| r.net_revenue > 0.0)
        .enumerate()
        .map(|(i, row)| PieShare {
            label: row.name.clone(),
            value: row.net_revenue,
            pct: row.net_revenue / total * 100.0,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

/// Render the revenue share pie as an SVG document
pub fn render_pie_chart(shares: &[PieShare], title: &str) -> Result<String, String> {
    let err = |e: DrawingAreaErrorKind<std::io::Error>| e.to_string();
    let center = (WIDTH as i32 / 2, (HEIGHT as i32 - 30) / 2);
    let sizes: Vec<f64> = shares.iter().map(|s| s.value).collect();
    let colors: Vec<RGBColor> = shares.iter().map(|s| s.color).collect();
    let labels: Vec<String> = shares.iter().map(|s| s.label.clone()).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(err)?;
        let plot = root
            .titled(title, ("sans-serif", 18).into_font())
            .map_err(err)?;

        if !shares.is_empty() {
            let mut pie = Pie::new(&center, &RADIUS, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 13).into_font().color(&BLACK));
            pie.percentages(("sans-serif", 12).into_font().color(&WHITE));
            plot.draw(&pie).map_err(err)?;
        }

        root.present().map_err(err)?;
    }
    Ok(svg)
}

#[component]
pub fn PieChart(rows: Vec<PerformanceRow>, title: &'static str) -> impl IntoView {
    let shares = pie_shares(&rows);
    let body = match render_pie_chart(&shares, title) {
        Ok(svg) => view! { <div class="chart__canvas" inner_html=svg></div> }.into_any(),
        Err(e) => {
            log::error!("Pie chart rendering failed: {}", e);
            view! { <div class="alert alert--warning">{e}</div> }.into_any()
        }
    };

    let legend = shares
        .into_iter()
        .map(|share| {
            view! {
                <div class="chart__legend-item">
                    <span class="chart__swatch" style=format!("background: {};", share.css_color())></span>
                    <span class="chart__legend-label">{share.label}</span>
                    <span class="chart__legend-value">
                        {format!("{} ({})", format_pct(share.pct), format_brl(share.value))}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--pie">
            <div class="chart__body">
                {body}
                <div class="chart__legend chart__legend--vertical">{legend}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, net: f64) -> PerformanceRow {
        PerformanceRow {
            key: name.to_lowercase(),
            name: name.to_string(),
            net_revenue: net,
            commission: 0.0,
            fixed_cost: None,
            profit: None,
            revenue_share_pct: 0.0,
            periods: vec![],
        }
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let shares = pie_shares(&[row("Ana", 300.0), row("Bia", 100.0), row("Caio", 0.0)]);
        assert_eq!(shares.len(), 2);
        assert!((shares[0].pct - 75.0).abs() < 1e-9);
        assert!((shares[1].pct - 25.0).abs() < 1e-9);
        assert_ne!(shares[0].color, shares[1].color);
        assert_eq!(shares[0].css_color(), "#3b82f6");
    }

    #[test]
    fn test_no_revenue_yields_no_shares() {
        assert!(pie_shares(&[row("Ana", 0.0)]).is_empty());
        assert!(pie_shares(&[]).is_empty());
    }

    #[test]
    fn test_render_labels_each_slice() {
        let shares = pie_shares(&[row("Ana", 300.0), row("Bia", 100.0)]);
        let svg = render_pie_chart(&shares, "Receita").expect("svg");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Ana"));
        assert!(svg.contains("Bia"));
        assert!(svg.contains("Receita"));
    }
}
