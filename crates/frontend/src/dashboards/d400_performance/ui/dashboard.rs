use super::bar_chart::{BarChart, BarLabels};
use super::detail_table::DetailTable;
use super::pie_chart::PieChart;
use super::summary_table::{format_period, SummaryTable};
use crate::dashboards::d400_performance::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::date_range_input::DateRangeInput;
use crate::shared::export::download_bytes;
use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use chrono::{Months, NaiveDate};
use contracts::dashboards::d400_performance::dto::{GroupBy, PerformanceRequest, PerformanceResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

pub const DEFAULT_DATE_FROM: &str = "2007-01-01";
pub const DEFAULT_DATE_TO: &str = "2007-01-31";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Welcome,
    Report,
    Bar,
    Pie,
}

/// Selectable consultant or client
#[derive(Debug, Clone, PartialEq)]
struct Entity {
    id: String,
    name: String,
}

/// Request from the form state; None when nothing is selected or a date is missing
pub fn build_request(
    group_by: GroupBy,
    selected: &HashSet<String>,
    date_from: &str,
    date_to: &str,
) -> Option<PerformanceRequest> {
    if selected.is_empty() {
        return None;
    }
    let date_from = NaiveDate::parse_from_str(date_from, "%Y-%m-%d").ok()?;
    let date_to = NaiveDate::parse_from_str(date_to, "%Y-%m-%d").ok()?;
    let mut selected_refs: Vec<String> = selected.iter().cloned().collect();
    selected_refs.sort();
    Some(PerformanceRequest {
        group_by,
        selected_refs,
        date_from,
        date_to,
    })
}

/// Chart buttons toggle their chart off when it is already shown
fn next_mode(current: ViewMode, target: ViewMode) -> ViewMode {
    if current == target {
        ViewMode::Report
    } else {
        target
    }
}

/// First and last day of a "YYYY-MM" month, as input values
pub fn month_bounds(period: &str) -> Option<(String, String)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", period), "%Y-%m-%d").ok()?;
    let next = first.checked_add_months(Months::new(1))?;
    let last = next.pred_opt()?;
    Some((
        first.format("%Y-%m-%d").to_string(),
        last.format("%Y-%m-%d").to_string(),
    ))
}

async fn load_entities(group_by: GroupBy) -> Result<Vec<Entity>, String> {
    match group_by {
        GroupBy::Consultant => Ok(api::get_consultants()
            .await?
            .into_iter()
            .map(|c| Entity {
                id: c.to_string_id(),
                name: c.base.description,
            })
            .collect()),
        GroupBy::Client => Ok(api::get_clients()
            .await?
            .into_iter()
            .map(|c| Entity {
                id: c.to_string_id(),
                name: c.base.description,
            })
            .collect()),
    }
}

#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).performance;

    let date_from = RwSignal::new(DEFAULT_DATE_FROM.to_string());
    let date_to = RwSignal::new(DEFAULT_DATE_TO.to_string());
    let by_client = RwSignal::new(false);
    let entities = RwSignal::new(Vec::<Entity>::new());
    let selected = RwSignal::new(HashSet::<String>::new());
    let available_periods = RwSignal::new(Vec::<String>::new());

    let report = RwSignal::new(None::<PerformanceResponse>);
    let mode = RwSignal::new(ViewMode::Welcome);
    let loading = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let group_by = move || {
        if by_client.get() {
            GroupBy::Client
        } else {
            GroupBy::Consultant
        }
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_available_periods().await {
                Ok(periods) => available_periods.set(periods),
                Err(e) => log::error!("Failed to load D400 periods: {}", e),
            }
        });
    });

    // Reload the selectable list whenever the grouping changes
    Effect::new(move |_| {
        let dimension = group_by();
        selected.set(HashSet::new());
        report.set(None);
        mode.set(ViewMode::Welcome);
        spawn_local(async move {
            match load_entities(dimension).await {
                Ok(list) => entities.set(list),
                Err(e) => {
                    log::error!("Failed to load {} list: {}", dimension.as_str(), e);
                    message.set(Some(e));
                }
            }
        });
    });

    let current_request = move || {
        build_request(
            group_by(),
            &selected.get_untracked(),
            &date_from.get_untracked(),
            &date_to.get_untracked(),
        )
    };

    let run_report = move || {
        let Some(request) = current_request() else {
            message.set(Some(t().selection_required.to_string()));
            return;
        };
        message.set(None);
        loading.set(true);
        spawn_local(async move {
            match api::get_performance(&request).await {
                Ok(response) => {
                    if response.is_empty() {
                        message.set(Some(t().no_data_message.to_string()));
                    }
                    report.set(Some(response));
                    mode.set(ViewMode::Report);
                }
                Err(e) => {
                    log::error!("Failed to load performance report: {}", e);
                    message.set(Some(format!("{} ({})", t().fetch_error, e)));
                }
            }
            loading.set(false);
        });
    };

    let show_chart = move |target: ViewMode| {
        let has_data = report.with_untracked(|r| r.as_ref().map(|r| !r.is_empty()).unwrap_or(false));
        if has_data {
            message.set(None);
            mode.set(next_mode(mode.get_untracked(), target));
        } else {
            message.set(Some(t().action_required.to_string()));
        }
    };

    let run_export = move || {
        let Some(request) = current_request() else {
            message.set(Some(t().selection_required.to_string()));
            return;
        };
        let filename = format!(
            "performance_{}_{}_{}.csv",
            request.group_by.as_str(),
            request.date_from.format("%Y%m%d"),
            request.date_to.format("%Y%m%d")
        );
        spawn_local(async move {
            let result = api::export_performance(&request)
                .await
                .and_then(|bytes| download_bytes(&bytes, &filename, "text/csv"));
            if let Err(e) = result {
                log::error!("Export failed: {}", e);
                message.set(Some(e));
            }
        });
    };

    let content = move || {
        if loading.get() {
            return view! {
                <div class="d400-loading">
                    <Spinner />
                    <span>{t().loading_data}</span>
                </div>
            }
            .into_any();
        }
        let current = report.get();
        match (mode.get(), current) {
            (ViewMode::Welcome, _) | (_, None) => {
                view! { <p class="d400-welcome">{t().welcome_message}</p> }.into_any()
            }
            (_, Some(data)) if data.is_empty() => {
                view! { <p class="d400-empty">{t().no_data_message}</p> }.into_any()
            }
            (ViewMode::Report, Some(data)) => view! {
                <div class="d400-report">
                    <SummaryTable rows=data.rows group_by=data.group_by t=t() />
                    <DetailTable lines=data.details t=t() />
                </div>
            }
            .into_any(),
            (ViewMode::Bar, Some(data)) => {
                let texts = t();
                let labels = BarLabels {
                    title: texts.bar_chart_title,
                    net_revenue: texts.net_revenue,
                    fixed_cost: texts.fixed_cost,
                    commission: texts.commission,
                    average: texts.average_fixed_cost,
                };
                view! { <BarChart rows=data.rows average_fixed_cost=data.average_fixed_cost labels=labels /> }
                .into_any()
            }
            (ViewMode::Pie, Some(data)) => {
                view! { <PieChart rows=data.rows title=t().pie_chart_title /> }.into_any()
            }
        }
    };

    view! {
        <PageFrame page_id="d400_performance--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>{move || t().title}</h2>
            </div>

            <div class="d400-filters">
                <DateRangeInput
                    label=Signal::derive(move || t().period_label.to_string())
                    date_from=date_from
                    date_to=date_to
                />
                <div class="d400-filters__periods">
                    <For
                        each=move || available_periods.get()
                        key=|period| period.clone()
                        children=move |period: String| {
                            let label = format_period(&period);
                            view! {
                                <button
                                    class="button button--ghost button--small"
                                    on:click=move |_| {
                                        if let Some((from, to)) = month_bounds(&period) {
                                            date_from.set(from);
                                            date_to.set(to);
                                        }
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>

                <Switch checked=by_client label=Signal::derive(move || t().group_by_client.to_string()) />

                <div class="d400-filters__entities">
                    <Label>
                        {move || if by_client.get() { t().clients_label } else { t().consultants_label }}
                    </Label>
                    <div class="d400-filters__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                let all: HashSet<String> = entities.with(|list| list.iter().map(|e| e.id.clone()).collect());
                                selected.set(all);
                            }
                        >
                            {move || t().select_all}
                        </Button>
                    </div>
                    <CheckboxGroup value=selected>
                        <div class="d400-filters__list">
                            <For
                                each=move || entities.get()
                                key=|entity| entity.id.clone()
                                children=move |entity: Entity| {
                                    view! { <Checkbox label=entity.name value=entity.id /> }
                                }
                            />
                        </div>
                    </CheckboxGroup>
                </div>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| run_report()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("table")}
                        {move || if loading.get() { t().loading_button } else { t().report_button }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_chart(ViewMode::Bar)>
                        {icon("chart")}
                        {move || t().chart_button}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_chart(ViewMode::Pie)>
                        {icon("pie")}
                        {move || t().pie_button}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| run_export()>
                        {icon("download")}
                        {move || t().export_button}
                    </Button>
                </Flex>
            </div>

            {move || message.get().map(|m| view! { <div class="alert alert--warning">{m}</div> })}

            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_requires_selection() {
        assert!(build_request(GroupBy::Consultant, &HashSet::new(), DEFAULT_DATE_FROM, DEFAULT_DATE_TO).is_none());
    }

    #[test]
    fn test_build_request_requires_dates() {
        let selected = HashSet::from(["a".to_string()]);
        assert!(build_request(GroupBy::Consultant, &selected, "", DEFAULT_DATE_TO).is_none());
    }

    #[test]
    fn test_chart_buttons_toggle_back_to_report() {
        assert_eq!(next_mode(ViewMode::Report, ViewMode::Bar), ViewMode::Bar);
        assert_eq!(next_mode(ViewMode::Bar, ViewMode::Bar), ViewMode::Report);
        assert_eq!(next_mode(ViewMode::Bar, ViewMode::Pie), ViewMode::Pie);
        assert_eq!(next_mode(ViewMode::Pie, ViewMode::Pie), ViewMode::Report);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds("2007-02"),
            Some(("2007-02-01".to_string(), "2007-02-28".to_string()))
        );
        assert_eq!(
            month_bounds("2007-12"),
            Some(("2007-12-01".to_string(), "2007-12-31".to_string()))
        );
        assert_eq!(month_bounds("bad"), None);
    }

    #[test]
    fn test_build_request_sorts_refs() {
        let selected = HashSet::from(["b".to_string(), "a".to_string()]);
        let request = build_request(GroupBy::Client, &selected, DEFAULT_DATE_FROM, DEFAULT_DATE_TO)
            .expect("request");
        assert_eq!(request.selected_refs, vec!["a", "b"]);
        assert_eq!(request.group_by, GroupBy::Client);
        assert_eq!(request.date_to, NaiveDate::from_ymd_opt(2007, 1, 31).unwrap());
    }
}
