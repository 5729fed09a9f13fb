//! Chart Components
//!
//! Donut and bar charts drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::format::{first_name, format_cfa};
use crate::state::global::{DashboardState, Rotarian, Stats};

/// Collected slice / bar color
const COLOR_COLLECTED: &str = "#22c55e";
/// Remaining slice / target bar color
const COLOR_TARGET: &str = "#e5e7eb";
/// Card background
const COLOR_BACKGROUND: &str = "#ffffff";
/// Grid lines
const COLOR_GRID: &str = "#e5e7eb";
/// Axis labels
const COLOR_LABEL: &str = "#6b7280";

/// One bar-chart row per Rotarian
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    /// First name token only; two Rotarians sharing a first name collide
    pub label: String,
    pub collected: f64,
    pub target: f64,
}

/// Derive bar-chart rows from the Rotarian list
pub fn rotarian_chart_rows(rotarians: &[Rotarian]) -> Vec<ChartRow> {
    rotarians
        .iter()
        .map(|r| ChartRow {
            label: first_name(&r.name).to_string(),
            collected: r.current_amount,
            target: r.target_amount,
        })
        .collect()
}

/// Donut breakdown: (collected, remaining). The remaining slice is floored
/// at zero so collections above target never produce a negative slice.
pub fn donut_slices(stats: &Stats) -> (f64, f64) {
    let collected = stats.total_donations;
    let remaining = (stats.total_target - stats.total_donations).max(0.0);
    (collected, remaining)
}

/// Donut chart of campaign-wide progress vs target
#[component]
pub fn DonutChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats_signal = state.stats;
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the stats slice changes
    create_effect(move |_| {
        let stats = stats_signal.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &stats);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full h-72"
            />

            // Legend with formatted amounts
            <div class="flex justify-center gap-6 mt-4 text-sm">
                <LegendEntry color=COLOR_COLLECTED label="Collecté" value=Signal::derive(move || {
                    format_cfa(donut_slices(&stats_signal.get()).0)
                }) />
                <LegendEntry color=COLOR_TARGET label="Restant" value=Signal::derive(move || {
                    format_cfa(donut_slices(&stats_signal.get()).1)
                }) />
            </div>
        </div>
    }
}

#[component]
fn LegendEntry(
    color: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <span
                class="w-3 h-3 rounded-full inline-block border border-gray-300"
                style=format!("background-color: {}", color)
            />
            <span class="text-gray-600">{label}": "{move || value.get()}</span>
        </div>
    }
}

/// Bar chart comparing each Rotarian's collection to their target
#[component]
pub fn RotarianBarChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let rotarians_signal = state.rotarians;
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let rows = rotarian_chart_rows(&rotarians_signal.get());
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &rows);
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="500"
                height="300"
                class="w-full h-72"
            />

            <div class="flex justify-center gap-6 mt-4 text-sm">
                <div class="flex items-center gap-2">
                    <span
                        class="w-3 h-3 rounded-sm inline-block"
                        style=format!("background-color: {}", COLOR_COLLECTED)
                    />
                    <span class="text-gray-600">"Collecté"</span>
                </div>
                <div class="flex items-center gap-2">
                    <span
                        class="w-3 h-3 rounded-sm inline-block border border-gray-300"
                        style=format!("background-color: {}", COLOR_TARGET)
                    />
                    <span class="text-gray-600">"Objectif"</span>
                </div>
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the two-slice progress donut
fn draw_donut(canvas: &HtmlCanvasElement, stats: &Stats) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&COLOR_BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = width.min(height) / 2.0 - 10.0;
    let inner = outer * 0.6;

    let (collected, remaining) = donut_slices(stats);
    let total = collected + remaining;

    // Empty campaign: draw the hollow ring instead of dividing by zero
    if total <= 0.0 {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, 0.0, std::f64::consts::TAU);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, std::f64::consts::TAU, 0.0, true);
        ctx.close_path();
        ctx.set_fill_style(&COLOR_TARGET.into());
        ctx.fill();
        return;
    }

    // Start at twelve o'clock
    let mut start = -std::f64::consts::FRAC_PI_2;

    for (value, color) in [(collected, COLOR_COLLECTED), (remaining, COLOR_TARGET)] {
        if value <= 0.0 {
            continue;
        }

        let sweep = value / total * std::f64::consts::TAU;
        let end = start + sweep;

        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.set_fill_style(&color.into());
        ctx.fill();

        start = end;
    }
}

/// Draw the grouped collected-vs-target bar chart
fn draw_bars(canvas: &HtmlCanvasElement, rows: &[ChartRow]) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&COLOR_BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_value = rows
        .iter()
        .map(|r| r.collected.max(r.target))
        .fold(0.0, f64::max);

    if rows.is_empty() || max_value <= 0.0 {
        ctx.set_fill_style(&COLOR_LABEL.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Aucune donnée", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    // Horizontal grid lines with "Nk" tick labels
    ctx.set_stroke_style(&COLOR_GRID.into());
    ctx.set_line_width(1.0);

    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let tick = max_value * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&COLOR_LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}k", tick / 1000.0), 5.0, y + 4.0);
    }

    // One group per Rotarian, two bars per group
    let group_width = chart_width / rows.len() as f64;
    let bar_width = group_width * 0.3;

    for (i, row) in rows.iter().enumerate() {
        let group_left = margin_left + i as f64 * group_width;
        let center = group_left + group_width / 2.0;

        for (j, (value, color)) in [(row.collected, COLOR_COLLECTED), (row.target, COLOR_TARGET)]
            .into_iter()
            .enumerate()
        {
            let bar_height = value / max_value * chart_height;
            let x = center - bar_width + j as f64 * bar_width;
            let y = margin_top + chart_height - bar_height;

            ctx.set_fill_style(&color.into());
            ctx.fill_rect(x, y, bar_width - 2.0, bar_height);
        }

        // First-name label under the group
        ctx.set_fill_style(&COLOR_LABEL.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(
            &row.label,
            center - row.label.len() as f64 * 3.0,
            height - 15.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total_donations: f64, total_target: f64) -> Stats {
        Stats {
            total_donations,
            total_target,
            ..Stats::default()
        }
    }

    #[test]
    fn test_donut_slices_halfway() {
        assert_eq!(donut_slices(&stats(250000.0, 500000.0)), (250000.0, 250000.0));
    }

    #[test]
    fn test_donut_slices_remaining_floors_at_zero() {
        // Collections above target never produce a negative remaining slice
        assert_eq!(donut_slices(&stats(600000.0, 500000.0)), (600000.0, 0.0));
    }

    #[test]
    fn test_donut_slices_zero_target() {
        let (collected, remaining) = donut_slices(&stats(0.0, 0.0));
        assert_eq!(collected, 0.0);
        assert_eq!(remaining, 0.0);

        let (collected, remaining) = donut_slices(&stats(10000.0, 0.0));
        assert_eq!(collected, 10000.0);
        assert_eq!(remaining, 0.0);
    }

    #[test]
    fn test_chart_rows_use_first_name_only() {
        let rotarians = vec![Rotarian {
            name: "Jean Dupont".to_string(),
            current_amount: 120000.0,
            target_amount: 500000.0,
            ..Rotarian::default()
        }];

        let rows = rotarian_chart_rows(&rotarians);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Jean");
        assert_eq!(rows[0].collected, 120000.0);
        assert_eq!(rows[0].target, 500000.0);
    }

    #[test]
    fn test_chart_rows_first_name_collision() {
        let rotarians = vec![
            Rotarian {
                name: "Jean Dupont".to_string(),
                ..Rotarian::default()
            },
            Rotarian {
                name: "Jean Martin".to_string(),
                ..Rotarian::default()
            },
        ];

        // The collision is reproduced, not deduplicated
        let rows = rotarian_chart_rows(&rotarians);
        assert_eq!(rows[0].label, "Jean");
        assert_eq!(rows[1].label, "Jean");
    }

    #[test]
    fn test_chart_rows_empty() {
        assert!(rotarian_chart_rows(&[]).is_empty());
    }
}
