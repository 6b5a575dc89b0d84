//! Landing screen after login: headline figures and a sales chart.
//!
//! The figures are static placeholders until the backend exposes an
//! aggregate endpoint.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

const SUMMARY_CARDS: [(&str, &str); 4] = [
    ("Total Users", "567,899"),
    ("Total Revenue", "$3,465 M"),
    ("Total Videos", "1,136 M"),
    ("Total Withdrawal", "1,789"),
];

/// One day of the product sales chart.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SalesDay {
    date: &'static str,
    revenue: u32,
    margin: u32,
}

const PRODUCT_SALES: [SalesDay; 6] = [
    SalesDay { date: "1 Jul", revenue: 40_000, margin: 25_000 },
    SalesDay { date: "2 Jul", revenue: 48_000, margin: 28_000 },
    SalesDay { date: "3 Jul", revenue: 60_000, margin: 30_000 },
    SalesDay { date: "4 Jul", revenue: 55_000, margin: 32_000 },
    SalesDay { date: "5 Jul", revenue: 49_000, margin: 35_000 },
    SalesDay { date: "6 Jul", revenue: 60_000, margin: 52_187 },
];

/// Largest value on the chart, used as the 100% bar height.
fn chart_peak(days: &[SalesDay]) -> u32 {
    days.iter().map(|d| d.revenue.max(d.margin)).max().unwrap_or(0)
}

/// Bar height as a CSS percentage of `peak`.
fn bar_height(value: u32, peak: u32) -> String {
    if peak == 0 {
        return "0%".to_owned();
    }
    format!("{:.1}%", f64::from(value) * 100.0 / f64::from(peak))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let peak = chart_peak(&PRODUCT_SALES);
    view! {
        <div class="page">
            <h1 class="page__heading">"Dashboard"</h1>
            <div class="cards">
                {SUMMARY_CARDS
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="card">
                                <div>{label}</div>
                                <div class="card__value">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chart">
                <h2>"Product Sales"</h2>
                <div class="chart__bars">
                    {PRODUCT_SALES
                        .into_iter()
                        .map(|day| {
                            view! {
                                <div class="chart__day">
                                    <div class="chart__pair">
                                        <div
                                            class="chart__bar chart__bar--margin"
                                            style:height=bar_height(day.margin, peak)
                                            title=format!("margin: {}", day.margin)
                                        ></div>
                                        <div
                                            class="chart__bar chart__bar--revenue"
                                            style:height=bar_height(day.revenue, peak)
                                            title=format!("revenue: {}", day.revenue)
                                        ></div>
                                    </div>
                                    <span class="chart__label">{day.date}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
