use crate::domain::{
    chart::{ChartRenderer, Dataset, LineChart},
    errors::RenderingError,
    logging::{LogComponent, get_logger},
};
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "#ffffff";
const GRID_COLOR: &str = "rgba(0,0,0,0.05)";
const TEXT_COLOR: &str = "#666666";
const FONT: &str = "12px Arial";
const POINT_RADIUS: f64 = 3.0;
const Y_TICKS: usize = 5;

/// Scaling parameters for one draw, computed once per chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub points: usize,
}

impl PlotArea {
    const PADDING: f64 = 40.0;
    const AXIS_SPACE: f64 = 60.0;

    pub fn new(canvas_width: u32, canvas_height: u32, chart: &LineChart) -> Self {
        let (min, max) = chart.value_range().unwrap_or((0.0, 1.0));
        // Line charts of counts read best anchored at zero.
        let min_value = min.min(0.0);
        let max_value = if max > min_value { max } else { min_value + 1.0 };

        Self {
            left: Self::PADDING + Self::AXIS_SPACE,
            top: Self::PADDING,
            width: (canvas_width as f64 - Self::PADDING * 2.0 - Self::AXIS_SPACE).max(1.0),
            height: (canvas_height as f64 - Self::PADDING * 2.0).max(1.0),
            min_value,
            max_value,
            points: chart.len(),
        }
    }

    pub fn x(&self, index: usize) -> f64 {
        if self.points <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + index as f64 * self.width / (self.points - 1) as f64
    }

    /// Y grows downward on the canvas.
    pub fn y(&self, value: f64) -> f64 {
        let ratio = (value - self.min_value) / (self.max_value - self.min_value);
        self.top + self.height - ratio * self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Canvas 2D implementation of the chart collaborator
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height, context: None }
    }

    pub fn is_attached(&self) -> bool {
        self.context.is_some()
    }

    fn acquire_context(&self) -> Result<CanvasRenderingContext2d, RenderingError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| RenderingError::ContextUnavailable("no document".to_string()))?;

        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| RenderingError::CanvasNotFound(self.canvas_id.clone()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderingError::CanvasNotFound(self.canvas_id.clone()))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|e| RenderingError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| RenderingError::ContextUnavailable("getContext returned null".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderingError::ContextUnavailable("not a 2D context".to_string()))
    }

    fn draw(&self, context: &CanvasRenderingContext2d, chart: &LineChart) -> Result<(), RenderingError> {
        let area = PlotArea::new(self.width, self.height, chart);

        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(BACKGROUND));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        self.draw_grid(context, &area, chart).map_err(draw_failed)?;
        for dataset in chart.datasets() {
            self.draw_dataset(context, &area, dataset).map_err(draw_failed)?;
        }
        self.draw_legend(context, chart).map_err(draw_failed)?;

        crate::log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Drew {} points x {} series",
            chart.len(),
            chart.datasets().len()
        );
        Ok(())
    }

    fn draw_grid(&self, context: &CanvasRenderingContext2d, area: &PlotArea, chart: &LineChart) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from(GRID_COLOR));
        context.set_fill_style(&JsValue::from(TEXT_COLOR));
        context.set_line_width(1.0);
        context.set_font(FONT);

        for tick in 0..=Y_TICKS {
            let value = area.min_value + (area.max_value - area.min_value) * tick as f64 / Y_TICKS as f64;
            let y = area.y(value);
            context.begin_path();
            context.move_to(area.left, y);
            context.line_to(area.left + area.width, y);
            context.stroke();
            context.fill_text(&format_tick(value), 10.0, y + 4.0)?;
        }

        for (index, label) in chart.labels().iter().enumerate() {
            let x = area.x(index);
            context.begin_path();
            context.move_to(x, area.top);
            context.line_to(x, area.bottom());
            context.stroke();
            context.fill_text(&label.to_string(), x - 4.0, area.bottom() + 16.0)?;
        }

        Ok(())
    }

    fn draw_dataset(&self, context: &CanvasRenderingContext2d, area: &PlotArea, dataset: &Dataset) -> Result<(), JsValue> {
        let style = dataset.style;

        // Each run of consecutive present values is its own segment.
        let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current = Vec::new();
        for (index, value) in dataset.data.iter().enumerate() {
            match value {
                Some(v) => current.push((area.x(index), area.y(*v))),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        for segment in &segments {
            let (first_x, first_y) = segment[0];
            let (last_x, _) = segment[segment.len() - 1];

            context.set_fill_style(&JsValue::from(style.fill_color));
            context.begin_path();
            context.move_to(first_x, area.bottom());
            for &(x, y) in segment {
                context.line_to(x, y);
            }
            context.line_to(last_x, area.bottom());
            context.close_path();
            context.fill();

            context.set_stroke_style(&JsValue::from(style.stroke_color));
            context.set_line_width(2.0);
            context.begin_path();
            context.move_to(first_x, first_y);
            for &(x, y) in segment.iter().skip(1) {
                context.line_to(x, y);
            }
            context.stroke();

            for &(x, y) in segment {
                context.set_fill_style(&JsValue::from(style.point_color));
                context.set_stroke_style(&JsValue::from(style.point_stroke_color));
                context.set_line_width(1.0);
                context.begin_path();
                context.arc(x, y, POINT_RADIUS, 0.0, 2.0 * PI)?;
                context.fill();
                context.stroke();
            }
        }

        Ok(())
    }

    fn draw_legend(&self, context: &CanvasRenderingContext2d, chart: &LineChart) -> Result<(), JsValue> {
        context.set_font(FONT);
        let mut x = self.width as f64 - 160.0;
        for dataset in chart.datasets() {
            context.set_fill_style(&JsValue::from(dataset.style.stroke_color));
            context.fill_rect(x, 12.0, 12.0, 12.0);
            context.set_fill_style(&JsValue::from(TEXT_COLOR));
            context.fill_text(&dataset.label, x + 18.0, 22.0)?;
            x += 80.0;
        }
        Ok(())
    }
}

impl ChartRenderer for CanvasRenderer {
    fn create(&mut self, chart: &LineChart) -> Result<(), RenderingError> {
        let context = self.acquire_context()?;
        self.draw(&context, chart)?;
        self.context = Some(context);

        get_logger().info(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("📊 Chart created on #{} ({} days)", self.canvas_id, chart.len()),
        );
        Ok(())
    }

    fn redraw(&mut self, chart: &LineChart) -> Result<(), RenderingError> {
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| RenderingError::ContextUnavailable("redraw before create".to_string()))?;
        self.draw(context, chart)
    }
}

fn draw_failed(error: JsValue) -> RenderingError {
    RenderingError::DrawFailed(format!("{error:?}"))
}

/// Axis label: integers stay plain, large values get a `k` suffix.
pub fn format_tick(value: f64) -> String {
    if value.abs() >= 10_000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
