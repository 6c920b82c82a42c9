//! Application-level configuration constants.

use crate::InputSet;

// Offset formula constants
pub const MM_PER_INCH: f64 = 25.4;
pub const PI_APPROX: f64 = 3.14;
/// Sidewall height (mm) to overall-height contribution (in): two sidewalls per diameter.
pub const SIDEWALL_DIVISOR: f64 = 12.7;
pub const RIM_FLANGE_ALLOWANCE_MM: f64 = 3.6;
pub const MOUNT_FACE_CORRECTION_MM: f64 = 9.75;
pub const BACK_MOUNT_SETBACK_MM: f64 = 24.7;

// Default values for input fields
pub const DEFAULT_PCD: &str = "5x112";

pub const TOP_MOUNT_PRESET: Preset = Preset {
    sec_width: 255.0,
    profile: 35.0,
    diameter: 20.0,
    width: 10.5,
    pad_height: -2.0,
    outer_rim: 3.5,
    inner_rim: 6.5,
};

pub const BACK_MOUNT_PRESET: Preset = Preset {
    sec_width: 245.0,
    profile: 35.0,
    diameter: 19.0,
    width: 13.0,
    pad_height: 26.0,
    outer_rim: 3.0,
    inner_rim: 8.5,
};

// Schematic canvas
pub const CANVAS_WIDTH_PX: f64 = 640.0;
pub const CANVAS_HEIGHT_PX: f64 = 360.0;
pub const CANVAS_PADDING_PX: f64 = 32.0;
/// Smallest span (mm) used when scaling, keeps the scale finite for all-zero inputs.
pub const MIN_SPAN_MM: f64 = 1.0;
pub const RIM_BARREL_MM: f64 = 12.0;

// Offset marker animation
pub const MARKER_EASING: f64 = 0.15;
pub const MARKER_SETTLE_MM: f64 = 0.05;
pub const MARKER_START_MM: f64 = 0.0;

// Export
pub const EXPORT_FILE_PREFIX: &str = "wheel-offset";

pub const LOG_LEVEL: log::Level = log::Level::Debug;

/// The seven numeric inputs a mode switch resets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub sec_width: f64,
    pub profile: f64,
    pub diameter: f64,
    pub width: f64,
    pub pad_height: f64,
    pub outer_rim: f64,
    pub inner_rim: f64,
}

impl Preset {
    /// Build a full input set, carrying over the cosmetic PCD text.
    pub fn with_pcd(&self, pcd: impl Into<String>) -> InputSet {
        InputSet {
            sec_width: self.sec_width,
            profile: self.profile,
            diameter: self.diameter,
            width: self.width,
            pcd: pcd.into(),
            pad_height: self.pad_height,
            outer_rim: self.outer_rim,
            inner_rim: self.inner_rim,
        }
    }
}
