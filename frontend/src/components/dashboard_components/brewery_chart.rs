//! Bar chart of brewery counts for the active group-by dimension.

use common::projection::{ChartBucket, GroupDimension};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertChart};

use crate::data_definitions::dashboard_context::DashboardContext;

const CHART_HEIGHT_PX: u64 = 240;

fn bar_color(dimension: GroupDimension) -> &'static str {
    match dimension {
        GroupDimension::BreweryType => "#82ca9d",
        GroupDimension::State => "#8884d8",
        GroupDimension::Country => "#ff7300",
    }
}

/// Bar height in pixels; non-empty buckets always get a visible sliver.
fn bar_height_px(count: u64, max_count: u64) -> u64 {
    if count == 0 || max_count == 0 {
        return 0;
    }
    (count * CHART_HEIGHT_PX / max_count).max(2)
}

#[component]
pub fn BreweryChartPanel() -> Element {
    let mut dashboard = use_context::<DashboardContext>().dashboard;
    let dimension = dashboard.read().group_dimension();
    let series = dashboard.read().active_chart_series();
    let toggle_label = dimension.toggle_label();

    rsx! {
        div {
            id: "x-brewery-chart-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                padding: 16px 20px;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h2 { style: "font-size: 24px; font-weight: 400; margin: 0;", "Brewery Visualization" }
                div { style: "flex-grow: 1;" }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 1000px;
                        background: white;
                        padding: 6px 14px;
                        font-size: 15px;
                    ",
                    onclick: move |_| {
                        dashboard.write().cycle_group_dimension();
                    },
                    Icon { icon: MdInsertChart, style: "width: 20px; height: 20px;" }
                    "{toggle_label}"
                }
            }
            BarChart { series, dimension }
        }
    }
}

#[component]
fn BarChart(series: Vec<ChartBucket>, dimension: GroupDimension) -> Element {
    if series.is_empty() {
        return rsx! {
            div { style: "color: rgba(0,0,0,0.5); padding: 20px;", "No breweries loaded yet." }
        };
    }
    let max_count = series.iter().map(|bucket| bucket.count).max().unwrap_or(0);
    let color = bar_color(dimension);
    let axis_label = dimension.axis_label();
    let bars = series
        .iter()
        .map(|bucket| (bucket.key.to_string(), bucket.count, bar_height_px(bucket.count, max_count)))
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: flex-end;
                gap: 6px;
                overflow-x: auto;
                padding-bottom: 8px;
            ",
            for (label, count, height) in bars {
                div {
                    key: "{label}",
                    title: "{label}: {count}",
                    style: "display: flex; flex-direction: column; align-items: center; min-width: 28px;",
                    span { style: "font-size: 12px; color: rgba(0,0,0,0.7);", "{count}" }
                    div { style: "width: 20px; height: {height}px; background: {color}; border-radius: 2px 2px 0 0;" }
                    span {
                        style: "font-size: 12px; writing-mode: vertical-rl; transform: rotate(180deg); max-height: 120px; overflow: hidden; margin-top: 4px;",
                        "{label}"
                    }
                }
            }
        }
        div { style: "font-size: 13px; color: rgba(0,0,0,0.5); text-align: center;", "count by {axis_label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_chart() {
        assert_eq!(bar_height_px(10, 10), CHART_HEIGHT_PX);
        assert_eq!(bar_height_px(5, 10), CHART_HEIGHT_PX / 2);
    }

    #[test]
    fn small_counts_stay_visible() {
        assert_eq!(bar_height_px(1, 10_000), 2);
        assert_eq!(bar_height_px(0, 10), 0);
    }
}
