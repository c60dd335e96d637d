//! Weekday Bar Chart Component
//!
//! Vertical bars per weekday, used for both the mean-time and the
//! total-presence pages. Values arrive in seconds and are labeled in hours.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BAR_COLOR: &str = "#FF9800"; // Orange (primary)

/// One bar of the chart: weekday label and value in seconds
pub type WeekdayBar = (String, f64);

/// Weekday bar chart component
#[component]
pub fn WeekdayBarChart(
    #[prop(into)]
    bars: Signal<Vec<WeekdayBar>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let bars = bars.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &bars);
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

/// Bar height as a fraction of the chart area, against the series maximum.
pub fn bar_fraction(value: f64, max_value: f64) -> f64 {
    if max_value <= 0.0 {
        return 0.0;
    }
    (value / max_value).clamp(0.0, 1.0)
}

/// Hour label for a value in seconds, e.g. `8.5 h`.
pub fn hours_label(seconds: f64) -> String {
    format!("{:.1} h", seconds / 3600.0)
}

/// Draw the bar chart on canvas
fn draw_bars(canvas: &HtmlCanvasElement, bars: &[WeekdayBar]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let max_value = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

    // Horizontal grid lines with hour labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max_value * (1.0 - i as f64 / 5.0);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&hours_label(value), 5.0, y + 4.0);
    }

    if bars.is_empty() {
        return;
    }

    let slot_width = chart_width / bars.len() as f64;
    let bar_width = slot_width * 0.6;

    for (i, (weekday, value)) in bars.iter().enumerate() {
        let bar_height = bar_fraction(*value, max_value) * chart_height;
        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Weekday label under the bar
        ctx.set_fill_style(&"#d1d5db".into()); // gray-300
        let _ = ctx.fill_text(weekday, x + bar_width / 2.0 - 12.0, height - 12.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fraction_scales_against_max() {
        assert_eq!(bar_fraction(4.0, 8.0), 0.5);
        assert_eq!(bar_fraction(8.0, 8.0), 1.0);
        assert_eq!(bar_fraction(0.0, 8.0), 0.0);
    }

    #[test]
    fn test_bar_fraction_handles_degenerate_max() {
        assert_eq!(bar_fraction(5.0, 0.0), 0.0);
        assert_eq!(bar_fraction(5.0, -1.0), 0.0);
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(hours_label(30600.0), "8.5 h");
        assert_eq!(hours_label(0.0), "0.0 h");
    }
}
