//! Chart Component
//!
//! Multi-series line chart on HTML5 Canvas. Draws whatever figure the API
//! last returned; an empty figure clears the chart region entirely (no
//! axes, no error).

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{Figure, GlobalState};

/// Line chart component bound to the current figure signal
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the figure changes
    create_effect(move |_| {
        let figure = state.figure.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_figure(&canvas, &figure);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="900"
                height="450"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend mapped from the figure's series
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let figure = state.figure;

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                let figure = figure.get();
                if figure.is_empty() {
                    return Vec::new();
                }

                let mut entries = vec![view! {
                    <span class="text-sm font-semibold text-gray-300">
                        {figure.legend_title.clone().unwrap_or_default()}
                    </span>
                }
                .into_view()];

                entries.extend(figure.series.iter().map(|series| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", series.color)
                            />
                            <span class="text-sm text-gray-300">{series.label.clone()}</span>
                        </div>
                    }
                    .into_view()
                }));

                entries
            }}
        </div>
    }
}

/// Map a value onto the y-axis scale, logarithmic when the figure asks
/// for it. Values below 1 clamp to 1 so the log stays finite.
fn y_transform(value: f64, log_y: bool) -> f64 {
    if log_y {
        value.max(1.0).log10()
    } else {
        value
    }
}

/// Draw the figure on canvas
fn draw_figure(canvas: &HtmlCanvasElement, figure: &Figure) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Empty artifact: leave the region cleared
    if figure.is_empty() {
        return;
    }

    // Margins
    let margin_left = 70.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Date and value extents across all series
    let mut min_date = None;
    let mut max_date = None;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for series in &figure.series {
        for point in &series.points {
            min_date = Some(min_date.map_or(point.date, |d: chrono::NaiveDate| d.min(point.date)));
            max_date = Some(max_date.map_or(point.date, |d: chrono::NaiveDate| d.max(point.date)));
            let y = y_transform(point.value as f64, figure.log_y);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    let (min_date, max_date) = match (min_date, max_date) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            // Series exist but carry no points
            ctx.set_fill_style(&"#6b7280".into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data for selection", width / 2.0 - 80.0, height / 2.0);
            return;
        }
    };

    let date_span = (max_date - min_date).num_days().max(1) as f64;

    // Pad the value range
    let y_range = max_y - min_y;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    let min_y = min_y - y_padding;
    let max_y = max_y + y_padding;

    let x_of = |date: chrono::NaiveDate| {
        margin_left + ((date - min_date).num_days() as f64 / date_span) * chart_width
    };
    let y_of =
        |value: f64| margin_top + ((max_y - value) / (max_y - min_y)) * chart_height;

    // Horizontal grid lines and y-axis tick labels
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let scale_value = max_y - (i as f64 / 5.0) * (max_y - min_y);
        let label = if figure.log_y {
            // Tick labels in data space, not log space
            format_tick(10f64.powf(scale_value))
        } else {
            format_tick(scale_value)
        };
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&label, 5.0, y + 4.0);
    }

    // Each series: polyline plus point markers
    for series in &figure.series {
        if series.points.is_empty() {
            continue;
        }

        ctx.set_stroke_style(&series.color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, point) in series.points.iter().enumerate() {
            let x = x_of(point.date);
            let y = y_of(y_transform(point.value as f64, figure.log_y));
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&series.color.as_str().into());
        for point in &series.points {
            let x = x_of(point.date);
            let y = y_of(y_transform(point.value as f64, figure.log_y));
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // X-axis tick labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let num_labels = 5;
    for i in 0..=num_labels {
        let date = min_date + chrono::Duration::days((date_span * i as f64 / num_labels as f64) as i64);
        let x = margin_left + (i as f64 / num_labels as f64) * chart_width;
        let _ = ctx.fill_text(&date.format("%d/%m").to_string(), x - 15.0, height - 28.0);
    }

    // Axis labels
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    if let Some(x_label) = &figure.x_label {
        let _ = ctx.fill_text(x_label, margin_left + chart_width / 2.0 - 15.0, height - 8.0);
    }
    if let Some(y_label) = &figure.y_label {
        let _ = ctx.fill_text(y_label, 5.0, margin_top - 6.0);
    }
}

/// Compact tick label: 1.2M / 45k / 120
fn format_tick(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 10_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}
