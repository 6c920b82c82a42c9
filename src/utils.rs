//! Lenient parsing of form text.

#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for measurement and bolt pattern parsing
static LEADING_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());
static BOLT_PATTERN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*[xX×/]\s*(\d+(?:\.\d+)?)\s*(?:mm)?$").unwrap());

/// Parse a measurement the way the browser's `parseFloat(text) || 0` would.
///
/// Leading whitespace is skipped and the longest decimal prefix is used, so
/// `"10.5in"` reads as `10.5`. Anything unparseable, NaN or infinite is `0`.
///
/// # Examples
/// ```
/// use wheel_offset::utils::parse_measurement;
/// assert_eq!(parse_measurement("255"), 255.0);
/// assert_eq!(parse_measurement(" -2 mm"), -2.0);
/// assert_eq!(parse_measurement("abc"), 0.0);
/// assert_eq!(parse_measurement(""), 0.0);
/// ```
pub fn parse_measurement(input: &str) -> f64 {
    let trimmed = input.trim_start();
    LEADING_NUMBER_REGEX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Bolt count and pitch circle diameter read from the PCD field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltPattern {
    pub holes: u32,
    pub pcd_mm: f64,
}

impl std::fmt::Display for BoltPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} holes on {} mm PCD", self.holes, self.pcd_mm)
    }
}

/// Bolt pattern parsing error types
#[derive(Debug, Clone, PartialEq)]
pub enum BoltPatternError {
    Empty,
    InvalidFormat(String),
    ZeroHoles,
    InvalidDiameter,
}

impl std::fmt::Display for BoltPatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoltPatternError::Empty => write!(f, "PCD cannot be empty"),
            BoltPatternError::InvalidFormat(s) => {
                write!(f, "Invalid PCD '{}'. Use holes x diameter, e.g. 5x112", s)
            }
            BoltPatternError::ZeroHoles => write!(f, "PCD must have at least one hole"),
            BoltPatternError::InvalidDiameter => write!(f, "PCD diameter must be positive"),
        }
    }
}

impl std::error::Error for BoltPatternError {}

/// Parse a PCD string such as `"5x112"`, `"5 x 114.3"` or `"6/139.7"`.
pub fn parse_bolt_pattern(input: &str) -> Result<BoltPattern, BoltPatternError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BoltPatternError::Empty);
    }

    let captures = BOLT_PATTERN_REGEX
        .captures(trimmed)
        .ok_or_else(|| BoltPatternError::InvalidFormat(trimmed.to_string()))?;

    let holes: u32 = captures[1]
        .parse()
        .map_err(|_| BoltPatternError::InvalidFormat(trimmed.to_string()))?;
    if holes == 0 {
        return Err(BoltPatternError::ZeroHoles);
    }

    let pcd_mm: f64 = captures[2]
        .parse()
        .map_err(|_| BoltPatternError::InvalidFormat(trimmed.to_string()))?;
    if pcd_mm <= 0.0 {
        return Err(BoltPatternError::InvalidDiameter);
    }

    Ok(BoltPattern { holes, pcd_mm })
}
