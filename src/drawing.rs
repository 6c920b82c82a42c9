//! Canvas rendering of the wheel cross-section.
//!
//! Receives a precomputed [`Schematic`] and only produces pixels. All fallible
//! canvas calls propagate `JsValue` errors to the caller.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wheel_offset::schematic::{Rect, Schematic};
use wheel_offset::{format_mm, Mode};

const TIRE_FILL: &str = "#2b2b2b";
const RIM_FILL: &str = "#9aa4ad";
const HUB_STROKE: &str = "#1f6feb";
const MARKER_STROKE: &str = "#e5534b";
const GUIDE_STROKE: &str = "#8b949e";
const LABEL_FILL: &str = "#24292f";
const LABEL_FONT: &str = "12px sans-serif";
const STUD_RADIUS_PX: f64 = 3.0;

/// Fetch the 2D context of a canvas element.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Draw the full cross-section: tire, rim, hub face, lip guides and the offset marker.
pub fn draw_cross_section(
    ctx: &CanvasRenderingContext2d,
    schematic: &Schematic,
    mode: Mode,
    marker_offset: f64,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);

    fill_rect(ctx, &schematic.tire, TIRE_FILL);
    fill_rect(ctx, &schematic.rim, RIM_FILL);

    // Wheel centreline
    ctx.save();
    ctx.set_line_dash(&dash(&[6.0, 4.0]))?;
    stroke_vertical(ctx, schematic.centerline_x, 0.0, height, GUIDE_STROKE, 1.0);
    ctx.restore();

    // Rim lip guides measured from the mounting face
    stroke_vertical(
        ctx,
        schematic.outer_lip_x,
        schematic.rim.y,
        schematic.axle_y,
        GUIDE_STROKE,
        1.0,
    );
    stroke_vertical(
        ctx,
        schematic.inner_lip_x,
        schematic.rim.y,
        schematic.axle_y,
        GUIDE_STROKE,
        1.0,
    );

    // Hub mounting face
    stroke_vertical(
        ctx,
        schematic.mount_x,
        schematic.hub_top_y,
        schematic.axle_y,
        HUB_STROKE,
        3.0,
    );
    if let Some(stud_y) = schematic.stud_y {
        ctx.set_fill_style_str(HUB_STROKE);
        ctx.begin_path();
        ctx.arc(schematic.mount_x, stud_y, STUD_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.fill();
    }

    // Animated offset marker
    stroke_vertical(
        ctx,
        schematic.marker_x,
        schematic.tire.y,
        schematic.axle_y,
        MARKER_STROKE,
        2.0,
    );

    ctx.set_fill_style_str(LABEL_FILL);
    ctx.set_font(LABEL_FONT);
    ctx.fill_text(mode.label(), 8.0, 16.0)?;
    ctx.fill_text(
        &format!("Offset {}", format_mm(marker_offset)),
        schematic.marker_x + 4.0,
        schematic.tire.y + 14.0,
    )?;

    Ok(())
}

fn fill_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

fn stroke_vertical(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y0: f64,
    y1: f64,
    color: &str,
    line_width: f64,
) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(line_width);
    ctx.begin_path();
    ctx.move_to(x, y0);
    ctx.line_to(x, y1);
    ctx.stroke();
}

fn dash(segments: &[f64]) -> js_sys::Array {
    segments.iter().map(|&s| JsValue::from_f64(s)).collect()
}
