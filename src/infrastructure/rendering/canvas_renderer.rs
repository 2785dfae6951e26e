use super::geometry::{PlotLayout, Point, smooth_segments, visible_label_indices};
use crate::domain::{
    chart::{ChartBackend, ChartInstance, LineChartConfig},
    errors::{RenderError, RenderResult},
    logging::{LogComponent, get_logger},
};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const GRID_COLOR: &str = "rgba(224, 231, 255, 0.12)";
const FONT: &str = "12px 'SF Pro Display', -apple-system, sans-serif";
const TITLE_FONT: &str = "bold 13px 'SF Pro Display', -apple-system, sans-serif";

/// Tooltip content for the sample under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipData {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub text: String,
}

/// Canvas 2D charting backend bound to one canvas element
#[derive(Debug, Clone)]
pub struct CanvasChartBackend {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasChartBackend {
    pub fn new(canvas_id: &str, width: u32, height: u32) -> Self {
        Self { canvas_id: canvas_id.to_string(), width, height }
    }

    fn get_canvas_context(&self) -> RenderResult<(HtmlCanvasElement, CanvasRenderingContext2d)> {
        let canvas = gloo::utils::document()
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| RenderError::ElementNotFound(self.canvas_id.clone()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::Canvas(format!("#{} is not a canvas", self.canvas_id)))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| RenderError::Canvas("Failed to get 2D context".to_string()))?
            .ok_or_else(|| RenderError::Canvas("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Canvas("Failed to cast to 2D context".to_string()))?;

        Ok((canvas, context))
    }
}

impl ChartBackend for CanvasChartBackend {
    type Instance = CanvasLineChart;

    fn construct(&self, config: &LineChartConfig) -> RenderResult<CanvasLineChart> {
        let (canvas, context) = self.get_canvas_context()?;
        let layout = PlotLayout::new(self.width as f64, self.height as f64, config.values())
            .ok_or_else(|| RenderError::Canvas(format!("Canvas {}x{} too small", self.width, self.height)))?;

        let chart = CanvasLineChart { canvas, context, config: config.clone(), layout };
        chart.draw()?;
        Ok(chart)
    }
}

/// A line chart drawn on a canvas. Lives until destroyed by the chart slot.
#[derive(Debug)]
pub struct CanvasLineChart {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    config: LineChartConfig,
    layout: PlotLayout,
}

impl CanvasLineChart {
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Tooltip for the sample nearest to canvas column `offset_x`
    pub fn tooltip_at(&self, offset_x: f64) -> Option<TooltipData> {
        let count = self.config.point_count();
        let index = self.layout.nearest_index(offset_x, count)?;
        let value = *self.config.values().get(index)?;
        Some(TooltipData {
            x: self.layout.x_at(index, count),
            y: self.layout.y_for(value),
            label: self.config.labels().get(index).cloned().unwrap_or_default(),
            text: self.config.tooltip_text(index)?,
        })
    }

    fn draw(&self) -> RenderResult<()> {
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);

        self.draw_grid_and_y_ticks()?;
        self.draw_x_labels()?;

        let points = self.layout.project(self.config.values());
        if let Some(dataset) = self.config.data.datasets.first() {
            if dataset.fill {
                self.trace_curve(&points, dataset.tension);
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    ctx.line_to(last.x, self.layout.bottom());
                    ctx.line_to(first.x, self.layout.bottom());
                    ctx.close_path();
                    ctx.set_fill_style_str(&dataset.background_color);
                    ctx.fill();
                }
            }

            self.trace_curve(&points, dataset.tension);
            ctx.set_stroke_style_str(&dataset.border_color);
            ctx.set_line_width(2.0);
            ctx.stroke();
        }

        self.draw_axis_titles()?;

        crate::log_debug!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Line chart drawn with {} points",
            points.len()
        );
        Ok(())
    }

    fn trace_curve(&self, points: &[Point], tension: f64) {
        let ctx = &self.context;
        ctx.begin_path();
        let Some(first) = points.first() else {
            return;
        };
        ctx.move_to(first.x, first.y);
        for segment in smooth_segments(points, tension) {
            ctx.bezier_curve_to(
                segment.cp1.x,
                segment.cp1.y,
                segment.cp2.x,
                segment.cp2.y,
                segment.to.x,
                segment.to.y,
            );
        }
    }

    fn draw_grid_and_y_ticks(&self) -> RenderResult<()> {
        let ctx = &self.context;
        let y_axis = &self.config.options.scales.y;
        ctx.set_font(FONT);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(1.0);

        for tick in self.layout.y_ticks() {
            let y = self.layout.y_for(tick);
            ctx.set_stroke_style_str(GRID_COLOR);
            ctx.begin_path();
            ctx.move_to(self.layout.left, y);
            ctx.line_to(self.layout.right(), y);
            ctx.stroke();

            if y_axis.display {
                ctx.set_fill_style_str(&y_axis.ticks.color);
                ctx.fill_text(&y_axis.ticks.label(tick), self.layout.left - 8.0, y)
                    .map_err(|e| RenderError::Canvas(format!("{e:?}")))?;
            }
        }
        Ok(())
    }

    fn draw_x_labels(&self) -> RenderResult<()> {
        let x_axis = &self.config.options.scales.x;
        if !x_axis.display {
            return Ok(());
        }
        let ctx = &self.context;
        let labels = self.config.labels();
        ctx.set_font(FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(&x_axis.ticks.color);

        for index in visible_label_indices(labels, &self.layout) {
            let x = self.layout.x_at(index, labels.len());
            ctx.fill_text(&labels[index], x, self.layout.bottom() + 8.0)
                .map_err(|e| RenderError::Canvas(format!("{e:?}")))?;
        }
        Ok(())
    }

    fn draw_axis_titles(&self) -> RenderResult<()> {
        let ctx = &self.context;
        let scales = &self.config.options.scales;
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");

        if scales.x.title.display {
            ctx.set_fill_style_str(&scales.x.title.color);
            let x = self.layout.left + self.layout.width / 2.0;
            ctx.fill_text(&scales.x.title.text, x, self.canvas.height() as f64 - 6.0)
                .map_err(|e| RenderError::Canvas(format!("{e:?}")))?;
        }

        if scales.y.title.display {
            ctx.save();
            ctx.set_fill_style_str(&scales.y.title.color);
            ctx.set_text_baseline("top");
            let y = self.layout.top + self.layout.height / 2.0;
            let rotated = ctx
                .translate(6.0, y)
                .and_then(|_| ctx.rotate(-std::f64::consts::FRAC_PI_2))
                .and_then(|_| ctx.fill_text(&scales.y.title.text, 0.0, 0.0));
            ctx.restore();
            rotated.map_err(|e| RenderError::Canvas(format!("{e:?}")))?;
        }
        Ok(())
    }
}

impl ChartInstance for CanvasLineChart {
    fn destroy(self) {
        self.context.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            "Chart destroyed, canvas cleared",
        );
    }
}
