//! Geometry of the wheel cross-section, in canvas pixels.
//!
//! Only the upper half of the section is laid out: the axle sits on the
//! bottom edge, the outboard side of the wheel is on the left and the wheel
//! centreline is at x = 0 mm. A positive offset moves the mounting face
//! outboard, i.e. to the left.

#[cfg(test)]
#[path = "schematic_test.rs"]
mod schematic_test;

use crate::config::{CANVAS_PADDING_PX, MIN_SPAN_MM, MM_PER_INCH, RIM_BARREL_MM};
use crate::utils::parse_bolt_pattern;
use crate::{InputSet, ResultSet};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Rect {
            x: x0.min(x1),
            y: y0.min(y1),
            w: (x1 - x0).abs(),
            h: (y1 - y0).abs(),
        }
    }
}

/// Pixel-space layout consumed by the canvas renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    /// Pixels per millimetre.
    pub scale: f64,
    pub axle_y: f64,
    pub centerline_x: f64,
    pub tire: Rect,
    pub rim: Rect,
    pub mount_x: f64,
    pub hub_top_y: f64,
    pub outer_lip_x: f64,
    pub inner_lip_x: f64,
    pub marker_x: f64,
    /// Height of the upper wheel stud, when the PCD text parses.
    pub stud_y: Option<f64>,
}

struct Projection {
    min_x: f64,
    scale: f64,
    left: f64,
    bottom: f64,
}

impl Projection {
    fn x(&self, mm: f64) -> f64 {
        self.left + (mm - self.min_x) * self.scale
    }

    fn y(&self, mm: f64) -> f64 {
        self.bottom - mm * self.scale
    }
}

impl Schematic {
    /// Lay out the section so everything fits inside `width` x `height` pixels.
    ///
    /// `marker_offset` is the animated offset in millimetres; it converges on
    /// `results.final_offset`.
    pub fn layout(
        inputs: &InputSet,
        results: &ResultSet,
        marker_offset: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let rim_half = inputs.width.abs() * MM_PER_INCH / 2.0;
        let tire_half = inputs.sec_width.abs() / 2.0;
        let rim_radius = inputs.diameter.abs() * MM_PER_INCH / 2.0;
        let tire_top = rim_radius + inputs.sidewall_mm().abs();

        let mount = -results.final_offset;
        let outer_lip = mount - inputs.outer_rim * MM_PER_INCH;
        let inner_lip = mount + inputs.inner_rim * MM_PER_INCH;
        let marker = -marker_offset;

        let xs = [
            -rim_half, rim_half, -tire_half, tire_half, mount, outer_lip, inner_lip, marker,
        ];
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let h_span = (max_x - min_x).max(MIN_SPAN_MM);
        let v_span = tire_top.max(MIN_SPAN_MM);

        let inner_w = (width - 2.0 * CANVAS_PADDING_PX).max(1.0);
        let inner_h = (height - 2.0 * CANVAS_PADDING_PX).max(1.0);
        let scale = (inner_w / h_span).min(inner_h / v_span);

        let proj = Projection {
            min_x,
            scale,
            left: CANVAS_PADDING_PX + (inner_w - h_span * scale) / 2.0,
            bottom: height - CANVAS_PADDING_PX,
        };

        let barrel_bottom = (rim_radius - RIM_BARREL_MM).max(0.0);
        let stud_y = parse_bolt_pattern(&inputs.pcd)
            .ok()
            .map(|pattern| proj.y(pattern.pcd_mm / 2.0));

        Schematic {
            scale,
            axle_y: proj.y(0.0),
            centerline_x: proj.x(0.0),
            tire: Rect::from_corners(
                proj.x(-tire_half),
                proj.y(tire_top),
                proj.x(tire_half),
                proj.y(rim_radius),
            ),
            rim: Rect::from_corners(
                proj.x(-rim_half),
                proj.y(rim_radius),
                proj.x(rim_half),
                proj.y(barrel_bottom),
            ),
            mount_x: proj.x(mount),
            hub_top_y: proj.y(barrel_bottom),
            outer_lip_x: proj.x(outer_lip),
            inner_lip_x: proj.x(inner_lip),
            marker_x: proj.x(marker),
            stud_y,
        }
    }
}
