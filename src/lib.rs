//! Offset engine for the wheel offset calculator.
//!
//! Converts tire and wheel measurements into rolling diameter, overall height
//! and the final mounting offset. Everything in this crate's library target is
//! free of browser calls; the Yew front end lives in the binary.


use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod form;
pub mod report;
pub mod schematic;
pub mod utils;

use config::{
    Preset, BACK_MOUNT_PRESET, BACK_MOUNT_SETBACK_MM, MM_PER_INCH, MOUNT_FACE_CORRECTION_MM,
    PI_APPROX, RIM_FLANGE_ALLOWANCE_MM, SIDEWALL_DIVISOR, TOP_MOUNT_PRESET,
};

/// How the wheel sits against the hub pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    TopMount,
    BackMount,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::TopMount, Mode::BackMount];

    /// Stable identifier, also used in export file names.
    pub fn id(self) -> &'static str {
        match self {
            Mode::TopMount => "topMount",
            Mode::BackMount => "backMount",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::TopMount => "Top Mount",
            Mode::BackMount => "Back Mount",
        }
    }

    /// Values the seven numeric inputs are reset to when this mode is selected.
    pub fn preset(self) -> &'static Preset {
        match self {
            Mode::TopMount => &TOP_MOUNT_PRESET,
            Mode::BackMount => &BACK_MOUNT_PRESET,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParseError(pub String);

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown mount mode '{}', expected topMount or backMount",
            self.0
        )
    }
}

impl std::error::Error for ModeParseError {}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModeParseError(s.to_string()))
    }
}

/// Measurements entered on the form.
///
/// Units: `sec_width` and `pad_height` in millimetres, `profile` in percent,
/// every other dimension in inches. `pcd` is display-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputSet {
    pub sec_width: f64,
    pub profile: f64,
    pub diameter: f64,
    pub width: f64,
    pub pcd: String,
    pub pad_height: f64,
    pub outer_rim: f64,
    pub inner_rim: f64,
}

impl InputSet {
    /// Replace NaN and infinities with 0 so callers outside the form get the same fallback.
    fn sanitized(&self) -> InputSet {
        let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
        InputSet {
            sec_width: clean(self.sec_width),
            profile: clean(self.profile),
            diameter: clean(self.diameter),
            width: clean(self.width),
            pcd: self.pcd.clone(),
            pad_height: clean(self.pad_height),
            outer_rim: clean(self.outer_rim),
            inner_rim: clean(self.inner_rim),
        }
    }

    /// Sidewall height of the tire in millimetres.
    pub fn sidewall_mm(&self) -> f64 {
        self.sec_width * (self.profile / 100.0)
    }
}

/// Derived quantities shown in the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Millimetres.
    pub rolling_diameter: f64,
    /// Inches.
    pub overall_height: f64,
    /// Millimetres.
    pub final_offset: f64,
}

impl ResultSet {
    pub fn rolling_diameter_text(&self) -> String {
        format_mm(self.rolling_diameter)
    }

    pub fn overall_height_text(&self) -> String {
        format_inches(self.overall_height)
    }

    pub fn final_offset_text(&self) -> String {
        format_mm(self.final_offset)
    }
}

/// Compute all three results for the given inputs and mount mode.
pub fn compute(inputs: &InputSet, mode: Mode) -> ResultSet {
    let inputs = inputs.sanitized();

    let overall_height = inputs.sidewall_mm() / SIDEWALL_DIVISOR + inputs.diameter;
    let rolling_diameter = (overall_height * PI_APPROX) * MM_PER_INCH;

    let mut final_offset = (MM_PER_INCH * inputs.width / 2.0)
        - inputs.pad_height
        - (inputs.outer_rim * MM_PER_INCH + RIM_FLANGE_ALLOWANCE_MM)
        + MOUNT_FACE_CORRECTION_MM;
    if mode == Mode::BackMount {
        final_offset -= BACK_MOUNT_SETBACK_MM;
    }

    debug!(
        "{}: rolling {:.2} mm, height {:.2} in, offset {:.2} mm",
        mode.id(),
        rolling_diameter,
        overall_height,
        final_offset
    );

    ResultSet {
        rolling_diameter,
        overall_height,
        final_offset,
    }
}

/// Two decimals, ties rounded away from zero and never shown as `-0.00`.
pub(crate) fn fixed_2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Adding 0.0 turns -0.0 into 0.0
    format!("{:.2}", rounded + 0.0)
}

pub fn format_mm(value: f64) -> String {
    format!("{} mm", fixed_2(value))
}

pub fn format_inches(value: f64) -> String {
    format!("{} inches", fixed_2(value))
}

/// Entry point for plain JavaScript callers.
///
/// # Arguments
/// * `inputs_js` - An object with camelCase `InputSet` keys; missing keys count as 0
/// * `mode` - `"topMount"` or `"backMount"`
///
/// # Returns
/// Serialized `ResultSet`, or an error message string
#[wasm_bindgen]
pub fn compute_offsets(inputs_js: JsValue, mode: &str) -> JsValue {
    let inputs: InputSet = match serde_wasm_bindgen::from_value(inputs_js) {
        Ok(i) => i,
        Err(e) => {
            return serde_wasm_bindgen::to_value(&format!("Failed to deserialize inputs: {}", e))
                .unwrap_or(JsValue::NULL);
        }
    };

    let mode = match mode.parse::<Mode>() {
        Ok(m) => m,
        Err(e) => return serde_wasm_bindgen::to_value(&e.to_string()).unwrap_or(JsValue::NULL),
    };

    serde_wasm_bindgen::to_value(&compute(&inputs, mode)).unwrap_or(JsValue::NULL)
}
