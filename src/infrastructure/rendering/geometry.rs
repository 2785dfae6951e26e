//! Pixel geometry of the line chart. Pure math, no canvas access.

/// Space reserved around the plot for tick labels and axis titles
pub const PADDING_LEFT: f64 = 78.0;
pub const PADDING_RIGHT: f64 = 20.0;
pub const PADDING_TOP: f64 = 20.0;
pub const PADDING_BOTTOM: f64 = 56.0;
/// Number of horizontal grid lines / y ticks
pub const Y_TICKS: usize = 5;
/// Minimum horizontal distance between two x labels
pub const MIN_LABEL_SPACING: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bezier control points of one curve segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub cp1: Point,
    pub cp2: Point,
    pub to: Point,
}

/// Plot area inside the canvas plus the value range mapped onto it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub min_value: f64,
    pub max_value: f64,
}

impl PlotLayout {
    /// `None` when the canvas is too small to hold a plot
    pub fn new(canvas_width: f64, canvas_height: f64, values: &[f64]) -> Option<Self> {
        let width = canvas_width - PADDING_LEFT - PADDING_RIGHT;
        let height = canvas_height - PADDING_TOP - PADDING_BOTTOM;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let (min_value, max_value) = padded_range(values);
        Some(Self { left: PADDING_LEFT, top: PADDING_TOP, width, height, min_value, max_value })
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal position of sample `index` out of `count`
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    pub fn y_for(&self, value: f64) -> f64 {
        let range = self.max_value - self.min_value;
        self.bottom() - (value - self.min_value) / range * self.height
    }

    pub fn project(&self, values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point { x: self.x_at(i, values.len()), y: self.y_for(v) })
            .collect()
    }

    /// Evenly spaced tick values from bottom to top
    pub fn y_ticks(&self) -> Vec<f64> {
        let step = (self.max_value - self.min_value) / (Y_TICKS - 1) as f64;
        (0..Y_TICKS).map(|i| self.min_value + step * i as f64).collect()
    }

    /// Index of the sample nearest to pixel column `x`
    pub fn nearest_index(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.left - 1.0 || x > self.right() + 1.0 {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let step = self.width / (count - 1) as f64;
        let index = ((x - self.left) / step).round().max(0.0) as usize;
        Some(index.min(count - 1))
    }
}

/// Value range with 5% headroom; a flat series gets a small band around it.
pub fn padded_range(values: &[f64]) -> (f64, f64) {
    let Some(&first) = values.first() else {
        return (0.0, 1.0);
    };
    let (lo, hi) = values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let span = hi - lo;
    if span <= f64::EPSILON {
        let pad = (lo.abs() * 0.01).max(0.01);
        return (lo - pad, hi + pad);
    }
    (lo - span * 0.05, hi + span * 0.05)
}

/// Cardinal-spline control points; `tension` 0 gives straight segments.
pub fn smooth_segments(points: &[Point], tension: f64) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let last = points.len() - 1;
    (0..last)
        .map(|i| {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];
            Segment {
                cp1: Point { x: p1.x + (p2.x - p0.x) * tension / 2.0, y: p1.y + (p2.y - p0.y) * tension / 2.0 },
                cp2: Point { x: p2.x - (p3.x - p1.x) * tension / 2.0, y: p2.y - (p3.y - p1.y) * tension / 2.0 },
                to: p2,
            }
        })
        .collect()
}

/// Indices of the x labels to draw: the first of every run of equal labels,
/// skipping any that would crowd the previous one.
pub fn visible_label_indices(labels: &[String], layout: &PlotLayout) -> Vec<usize> {
    let mut shown: Vec<usize> = Vec::new();
    let mut last_x = f64::NEG_INFINITY;
    for (i, label) in labels.iter().enumerate() {
        if i > 0 && labels[i - 1] == *label {
            continue;
        }
        let x = layout.x_at(i, labels.len());
        if x - last_x >= MIN_LABEL_SPACING {
            shown.push(i);
            last_x = x;
        }
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(values: &[f64]) -> PlotLayout {
        PlotLayout::new(800.0, 400.0, values).unwrap()
    }

    #[test]
    fn extremes_land_inside_the_plot() {
        let l = layout(&[5.0, 5.1]);
        let pts = l.project(&[5.0, 5.1]);
        assert_eq!(pts[0].x, l.left);
        assert_eq!(pts[1].x, l.right());
        assert!(pts[0].y < l.bottom() && pts[0].y > pts[1].y && pts[1].y > l.top);
    }

    #[test]
    fn flat_series_gets_a_band() {
        let (lo, hi) = padded_range(&[5.0, 5.0]);
        assert!(lo < 5.0 && hi > 5.0);
    }

    #[test]
    fn zero_tension_is_straight() {
        let pts = [Point { x: 0.0, y: 0.0 }, Point { x: 10.0, y: 10.0 }, Point { x: 20.0, y: 0.0 }];
        let segs = smooth_segments(&pts, 0.0);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].cp1, pts[0]);
        assert_eq!(segs[0].cp2, pts[1]);
    }

    #[test]
    fn nearest_index_clamps() {
        let l = layout(&[1.0, 2.0, 3.0]);
        assert_eq!(l.nearest_index(l.left, 3), Some(0));
        assert_eq!(l.nearest_index(l.right(), 3), Some(2));
        assert_eq!(l.nearest_index(l.left + l.width * 0.6, 3), Some(1));
        assert_eq!(l.nearest_index(0.0, 3), None);
    }

    #[test]
    fn repeated_day_labels_are_drawn_once() {
        let labels: Vec<String> = ["01/03", "01/03", "02/03", "02/03"].iter().map(|s| s.to_string()).collect();
        assert_eq!(visible_label_indices(&labels, &layout(&[1.0; 4])), vec![0, 2]);
    }

    #[test]
    fn tiny_canvas_has_no_layout() {
        assert!(PlotLayout::new(50.0, 50.0, &[1.0]).is_none());
    }
}
