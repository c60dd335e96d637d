//! Timeline Chart Component
//!
//! Start/end presence intervals per weekday, rendered as horizontal bars on
//! an HTML5 canvas. The x-axis is time of day, titled "Hours", with
//! `HH:mm:ss` tick labels.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{seconds_since_midnight, PresenceRow};

const BAR_COLOR: &str = "#FF9800"; // Orange (primary)
const SECONDS_PER_DAY: u32 = 24 * 3600;

/// Timeline chart component
#[component]
pub fn TimelineChart(
    #[prop(into)]
    rows: Signal<Vec<PresenceRow>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the rows change
    create_effect(move |_| {
        let rows = rows.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_timeline(&canvas, &rows);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="400"
            class="w-full h-64 md:h-96 rounded-lg"
        />
    }
}

/// Visible time-of-day window in seconds since midnight, padded by half an
/// hour on each side and clamped to the day. Empty data shows the full day.
pub fn time_window(rows: &[PresenceRow]) -> (u32, u32) {
    let mut min = u32::MAX;
    let mut max = 0;

    for row in rows {
        min = min.min(seconds_since_midnight(&row.start));
        max = max.max(seconds_since_midnight(&row.end));
    }

    if min > max {
        return (0, SECONDS_PER_DAY);
    }

    let min = min.saturating_sub(1800);
    let max = (max + 1800).min(SECONDS_PER_DAY);
    if min == max {
        (0, SECONDS_PER_DAY)
    } else {
        (min, max)
    }
}

/// Horizontal position of a moment within the chart area.
pub fn x_position(secs: u32, window: (u32, u32), chart_width: f64) -> f64 {
    let (start, end) = window;
    let span = (end - start) as f64;
    let offset = secs.saturating_sub(start) as f64;
    (offset / span * chart_width).min(chart_width)
}

/// `HH:MM:SS` label for an axis tick.
pub fn format_tick(secs: u32) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Draw the timeline on canvas
fn draw_timeline(canvas: &HtmlCanvasElement, rows: &[PresenceRow]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 50.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let window = time_window(rows);

    // Vertical grid lines with HH:MM:SS tick labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    let num_ticks = 6;
    for i in 0..=num_ticks {
        let secs = window.0 + (window.1 - window.0) * i / num_ticks;
        let x = margin_left + x_position(secs, window, chart_width);

        ctx.begin_path();
        ctx.move_to(x, margin_top);
        ctx.line_to(x, margin_top + chart_height);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format_tick(secs), x - 25.0, height - 28.0);
    }

    // Axis title
    ctx.set_fill_style(&"#9ca3af".into());
    let _ = ctx.fill_text("Hours", margin_left + chart_width / 2.0 - 18.0, height - 8.0);

    if rows.is_empty() {
        return;
    }

    // One horizontal lane per row
    let lane_height = chart_height / rows.len() as f64;
    let bar_height = (lane_height * 0.6).min(28.0);

    for (i, row) in rows.iter().enumerate() {
        let lane_top = margin_top + i as f64 * lane_height;
        let bar_top = lane_top + (lane_height - bar_height) / 2.0;

        let x0 = margin_left + x_position(seconds_since_midnight(&row.start), window, chart_width);
        let x1 = margin_left + x_position(seconds_since_midnight(&row.end), window, chart_width);

        // Weekday label
        ctx.set_fill_style(&"#d1d5db".into()); // gray-300
        let _ = ctx.fill_text(&row.weekday, 12.0, lane_top + lane_height / 2.0 + 4.0);

        // Interval bar
        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x0, bar_top, (x1 - x0).max(2.0), bar_height);

        // Start/end labels at the bar ends
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&row.start_label(), x0, bar_top - 4.0);
        let _ = ctx.fill_text(&row.end_label(), x1 - 50.0, bar_top + bar_height + 14.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::TimestampTuple;

    fn row(weekday: &str, start: [u32; 3], end: [u32; 3]) -> PresenceRow {
        PresenceRow {
            weekday: weekday.to_string(),
            start: TimestampTuple(2024, 0, 1, start[0], start[1], start[2])
                .to_datetime()
                .unwrap(),
            end: TimestampTuple(2024, 0, 1, end[0], end[1], end[2])
                .to_datetime()
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_rows_show_the_full_day() {
        assert_eq!(time_window(&[]), (0, SECONDS_PER_DAY));
    }

    #[test]
    fn test_window_pads_by_half_an_hour() {
        let rows = vec![row("Mon", [9, 0, 0], [17, 0, 0])];
        assert_eq!(time_window(&rows), (9 * 3600 - 1800, 17 * 3600 + 1800));
    }

    #[test]
    fn test_window_clamps_to_the_day() {
        let rows = vec![row("Mon", [0, 10, 0], [23, 55, 0])];
        let (start, end) = time_window(&rows);
        assert_eq!(start, 0);
        assert_eq!(end, SECONDS_PER_DAY);
    }

    #[test]
    fn test_x_position_scales_linearly() {
        let window = (0, 86400);
        assert_eq!(x_position(0, window, 800.0), 0.0);
        assert_eq!(x_position(43200, window, 800.0), 400.0);
        assert_eq!(x_position(86400, window, 800.0), 800.0);
    }

    #[test]
    fn test_x_position_saturates_below_window() {
        assert_eq!(x_position(100, (1800, 3600), 800.0), 0.0);
    }

    #[test]
    fn test_tick_formats_as_time_of_day() {
        assert_eq!(format_tick(9 * 3600), "09:00:00");
        assert_eq!(format_tick(17 * 3600 + 30 * 60 + 5), "17:30:05");
        assert_eq!(format_tick(0), "00:00:00");
    }
}
