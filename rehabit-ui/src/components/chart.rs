//! Chart Components
//!
//! Area and bar charts drawn on an HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use rehabit::format::format_hour_label;
use rehabit::HourlyPrediction;

/// Upper bound of the productivity axis
pub const SCORE_AXIS_MAX: f64 = 10.0;

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const GRID_LINES: usize = 5;

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Area,
    Bar,
}

/// Plot area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y for `value` on a 0..=`y_max` axis (clamped)
    pub fn y_for(&self, value: f64, y_max: f64) -> f64 {
        let ratio = if y_max > 0.0 {
            (value / y_max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.bottom() - ratio * self.height
    }
}

/// Top of the value axis: the fixed bound, or the data maximum with headroom
pub fn axis_max(values: &[f64], fixed: Option<f64>) -> f64 {
    if let Some(max) = fixed {
        return max;
    }
    let peak = values.iter().copied().fold(0.0, f64::max);
    if peak > 0.0 {
        (peak + peak / 10.0).ceil()
    } else {
        1.0
    }
}

/// Line vertices for an area chart, spread edge to edge
pub fn line_points(values: &[f64], y_max: f64, area: PlotArea) -> Vec<(f64, f64)> {
    let steps = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 {
                area.left + area.width / 2.0
            } else {
                area.left + (i as f64 / steps) * area.width
            };
            (x, area.y_for(*value, y_max))
        })
        .collect()
}

/// Bars as `(x, y, width, height)`, one slot per value
pub fn bar_rects(values: &[f64], y_max: f64, area: PlotArea) -> Vec<(f64, f64, f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = area.width / values.len() as f64;
    let width = slot * 0.6;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let y = area.y_for(*value, y_max);
            let x = area.left + i as f64 * slot + (slot - width) / 2.0;
            (x, y, width, area.bottom() - y)
        })
        .collect()
}

/// Canvas chart of one labelled series
#[component]
pub fn Chart(
    kind: ChartKind,
    labels: Vec<String>,
    values: Vec<f64>,
    /// Fixed top of the value axis; derived from the data when absent
    #[prop(optional)]
    y_max: Option<f64>,
    #[prop(default = "#6366f1")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, kind, &labels, &values, y_max, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Hourly productivity forecast on a fixed 0-10 axis
#[component]
pub fn ProductivityChart(predictions: Vec<HourlyPrediction>) -> impl IntoView {
    if predictions.is_empty() {
        return view! {
            <div class="h-64 flex items-center justify-center text-gray-500">
                "No predictions available yet"
            </div>
        }
        .into_view();
    }

    let labels = predictions
        .iter()
        .map(|p| format_hour_label(p.hour as u32))
        .collect();
    let values = predictions.iter().map(|p| p.score).collect();

    view! {
        <Chart
            kind=ChartKind::Area
            labels=labels
            values=values
            y_max=SCORE_AXIS_MAX
            color="#6366f1"
        />
    }
    .into_view()
}

fn draw_chart(
    canvas: &HtmlCanvasElement,
    kind: ChartKind,
    labels: &[String],
    values: &[f64],
    fixed_max: Option<f64>,
    color: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);
    let y_max = axis_max(values, fixed_max);

    ctx.clear_rect(0.0, 0.0, width, height);

    // Grid and y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into()); // gray-200
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#6b7280".into()); // gray-500
    ctx.set_font("12px sans-serif");
    for i in 0..=GRID_LINES {
        let value = y_max * i as f64 / GRID_LINES as f64;
        let y = area.y_for(value, y_max);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{}", value.round()), 5.0, y + 4.0);
    }

    match kind {
        ChartKind::Area => {
            let points = line_points(values, y_max, area);
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                // Fill under the line
                ctx.set_global_alpha(0.3);
                ctx.set_fill_style(&color.into());
                ctx.begin_path();
                ctx.move_to(first.0, area.bottom());
                for (x, y) in &points {
                    ctx.line_to(*x, *y);
                }
                ctx.line_to(last.0, area.bottom());
                ctx.close_path();
                ctx.fill();
                ctx.set_global_alpha(1.0);

                ctx.set_stroke_style(&color.into());
                ctx.set_line_width(2.0);
                ctx.begin_path();
                ctx.move_to(first.0, first.1);
                for (x, y) in points.iter().skip(1) {
                    ctx.line_to(*x, *y);
                }
                ctx.stroke();
            }

            draw_x_labels(&ctx, labels, &points.iter().map(|p| p.0).collect::<Vec<_>>(), height);
        }
        ChartKind::Bar => {
            let bars = bar_rects(values, y_max, area);
            ctx.set_fill_style(&color.into());
            for (x, y, w, h) in &bars {
                ctx.fill_rect(*x, *y, *w, *h);
            }

            let centers: Vec<f64> = bars.iter().map(|(x, _, w, _)| x + w / 2.0).collect();
            draw_x_labels(&ctx, labels, &centers, height);
        }
    }

    if values.is_empty() {
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
    }
}

fn draw_x_labels(ctx: &CanvasRenderingContext2d, labels: &[String], xs: &[f64], height: f64) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (label, x) in labels.iter().zip(xs) {
        let _ = ctx.fill_text(label, *x, height - 10.0);
    }
    ctx.set_text_align("start");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea::for_canvas(800.0, 300.0)
    }

    #[test]
    fn test_plot_area_margins() {
        let area = area();
        assert_eq!(area.width, 740.0);
        assert_eq!(area.height, 250.0);
        assert_eq!(area.bottom(), 270.0);
    }

    #[test]
    fn test_y_for_clamps_to_axis() {
        let area = area();
        assert_eq!(area.y_for(0.0, 10.0), 270.0);
        assert_eq!(area.y_for(10.0, 10.0), 20.0);
        assert_eq!(area.y_for(15.0, 10.0), 20.0);
        assert_eq!(area.y_for(5.0, 10.0), 145.0);
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(&[3.0, 8.0], Some(10.0)), 10.0);
        assert_eq!(axis_max(&[90.0, 120.0], None), 132.0);
        assert_eq!(axis_max(&[], None), 1.0);
    }

    #[test]
    fn test_line_points_span_width() {
        let area = area();
        let points = line_points(&[7.5, 8.0, 6.5], 10.0, area);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].0, area.left);
        assert_eq!(points[2].0, area.left + area.width);
        assert!(points[1].1 < points[2].1);
    }

    #[test]
    fn test_single_point_is_centered() {
        let area = area();
        let points = line_points(&[5.0], 10.0, area);
        assert_eq!(points[0].0, area.left + area.width / 2.0);
    }

    #[test]
    fn test_bar_rects_sit_on_baseline() {
        let area = area();
        let bars = bar_rects(&[60.0, 120.0], 120.0, area);
        assert_eq!(bars.len(), 2);
        for (_, y, _, h) in &bars {
            assert_eq!(y + h, area.bottom());
        }
        assert_eq!(bars[1].3, area.height);
        assert!(bar_rects(&[], 10.0, area).is_empty());
    }
}
