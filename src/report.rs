//! Downloadable summaries of the current inputs and results.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::config::EXPORT_FILE_PREFIX;
use crate::form::Field;
use crate::utils::parse_bolt_pattern;
use crate::{fixed_2, InputSet, Mode, ResultSet};
use log::warn;
use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    Csv(csv::Error),
    Encoding(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Csv(e) => write!(f, "Failed to write CSV report: {}", e),
            ReportError::Encoding(e) => write!(f, "CSV report is not valid UTF-8: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<csv::Error> for ReportError {
    fn from(e: csv::Error) -> Self {
        ReportError::Csv(e)
    }
}

/// Export flavours offered by the download buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Csv => "text/csv",
        }
    }

    /// e.g. `wheel-offset-topMount.txt`
    pub fn file_name(self, mode: Mode) -> String {
        format!("{}-{}.{}", EXPORT_FILE_PREFIX, mode.id(), self.extension())
    }

    pub fn render(
        self,
        inputs: &InputSet,
        results: &ResultSet,
        mode: Mode,
    ) -> Result<String, ReportError> {
        match self {
            ReportFormat::Text => Ok(text_summary(inputs, results, mode)),
            ReportFormat::Csv => csv_summary(inputs, results, mode),
        }
    }
}

fn bolt_pattern_note(pcd: &str) -> Option<String> {
    match parse_bolt_pattern(pcd) {
        Ok(pattern) => Some(pattern.to_string()),
        Err(e) => {
            warn!("Leaving bolt pattern out of the report: {}", e);
            None
        }
    }
}

/// Plain-text summary for the download button.
pub fn text_summary(inputs: &InputSet, results: &ResultSet, mode: Mode) -> String {
    let mut lines = vec![
        "Wheel Offset Calculation".to_string(),
        "========================".to_string(),
        format!("Mode: {}", mode.label()),
        String::new(),
        "Inputs".to_string(),
        "------".to_string(),
    ];

    for field in Field::ALL {
        match field.value_of(inputs) {
            Some(value) => lines.push(format!(
                "{}: {} {}",
                field.label(),
                value,
                field.unit().unwrap_or_default()
            )),
            None => {
                lines.push(format!("{}: {}", field.label(), inputs.pcd));
                if let Some(note) = bolt_pattern_note(&inputs.pcd) {
                    lines.push(format!("  ({})", note));
                }
            }
        }
    }

    lines.extend([
        String::new(),
        "Results".to_string(),
        "-------".to_string(),
        format!("Rolling Diameter: {}", results.rolling_diameter_text()),
        format!("Overall Height: {}", results.overall_height_text()),
        format!("Final Offset: {}", results.final_offset_text()),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// `field,value,unit` rows covering mode, inputs and results.
pub fn csv_summary(
    inputs: &InputSet,
    results: &ResultSet,
    mode: Mode,
) -> Result<String, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["field", "value", "unit"])?;
    writer.write_record(["mode", mode.id(), ""])?;

    for field in Field::ALL {
        let value = field
            .value_of(inputs)
            .map(|v| v.to_string())
            .unwrap_or_else(|| inputs.pcd.clone());
        writer.write_record([field.id(), value.as_str(), field.unit().unwrap_or("")])?;
    }

    let derived = [
        ("rollingDiameter", results.rolling_diameter, "mm"),
        ("overallHeight", results.overall_height, "in"),
        ("finalOffset", results.final_offset, "mm"),
    ];
    for (name, value, unit) in derived {
        writer.write_record([name, fixed_2(value).as_str(), unit])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Encoding(e.to_string()))
}
