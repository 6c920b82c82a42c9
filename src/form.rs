//! Form fields and the in-memory form state.
//!
//! `FormState` keeps the raw text of every field exactly as typed together
//! with the selected mode. Numbers are only derived on demand, so a half-typed
//! value like `"-"` stays in the input while the results treat it as 0.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::DEFAULT_PCD;
use crate::utils::parse_measurement;
use crate::{compute, InputSet, Mode, ResultSet};
use log::info;

/// One input on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SecWidth,
    Profile,
    Diameter,
    Width,
    Pcd,
    PadHeight,
    OuterRim,
    InnerRim,
}

impl Field {
    pub const COUNT: usize = 8;

    pub const ALL: [Field; Field::COUNT] = [
        Field::SecWidth,
        Field::Profile,
        Field::Diameter,
        Field::Width,
        Field::Pcd,
        Field::PadHeight,
        Field::OuterRim,
        Field::InnerRim,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the input element.
    pub fn id(self) -> &'static str {
        match self {
            Field::SecWidth => "secWidth",
            Field::Profile => "profile",
            Field::Diameter => "diameter",
            Field::Width => "width",
            Field::Pcd => "pcd",
            Field::PadHeight => "padHeight",
            Field::OuterRim => "outerRim",
            Field::InnerRim => "innerRim",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::SecWidth => "Section Width",
            Field::Profile => "Profile",
            Field::Diameter => "Rim Diameter",
            Field::Width => "Wheel Width",
            Field::Pcd => "PCD / Holes",
            Field::PadHeight => "Pad Height",
            Field::OuterRim => "Outer Rim Width",
            Field::InnerRim => "Inner Rim Width",
        }
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Field::SecWidth | Field::PadHeight => Some("mm"),
            Field::Profile => Some("%"),
            Field::Diameter | Field::Width | Field::OuterRim | Field::InnerRim => Some("in"),
            Field::Pcd => None,
        }
    }

    /// Everything except the PCD text feeds the calculation.
    pub fn is_numeric(self) -> bool {
        self != Field::Pcd
    }

    /// Read this field's number out of an input set.
    pub fn value_of(self, inputs: &InputSet) -> Option<f64> {
        match self {
            Field::SecWidth => Some(inputs.sec_width),
            Field::Profile => Some(inputs.profile),
            Field::Diameter => Some(inputs.diameter),
            Field::Width => Some(inputs.width),
            Field::Pcd => None,
            Field::PadHeight => Some(inputs.pad_height),
            Field::OuterRim => Some(inputs.outer_rim),
            Field::InnerRim => Some(inputs.inner_rim),
        }
    }
}

/// Current mode plus the raw text of every field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    mode: Mode,
    texts: [String; Field::COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new(Mode::default())
    }
}

impl FormState {
    /// A form filled with the preset of `mode` and the default PCD.
    pub fn new(mode: Mode) -> Self {
        let mut state = FormState {
            mode,
            texts: Default::default(),
        };
        state.texts[Field::Pcd.index()] = DEFAULT_PCD.to_string();
        state.apply_preset();
        state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn text(&self, field: Field) -> &str {
        &self.texts[field.index()]
    }

    /// Store the text as typed. No validation happens here.
    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        self.texts[field.index()] = text.into();
    }

    /// Select `mode` and reset the seven numeric fields to its preset.
    ///
    /// The reset happens even when `mode` is already selected; the PCD text is kept.
    pub fn switch_mode(&mut self, mode: Mode) {
        info!("Switching to {} and loading its preset", mode.label());
        self.mode = mode;
        self.apply_preset();
    }

    fn apply_preset(&mut self) {
        let preset = self.mode.preset().with_pcd(self.text(Field::Pcd));
        for field in Field::ALL {
            if let Some(value) = field.value_of(&preset) {
                self.texts[field.index()] = value.to_string();
            }
        }
    }

    /// Parse every numeric field, falling back to 0 for anything unreadable.
    pub fn inputs(&self) -> InputSet {
        let num = |field: Field| parse_measurement(self.text(field));
        InputSet {
            sec_width: num(Field::SecWidth),
            profile: num(Field::Profile),
            diameter: num(Field::Diameter),
            width: num(Field::Width),
            pcd: self.text(Field::Pcd).to_string(),
            pad_height: num(Field::PadHeight),
            outer_rim: num(Field::OuterRim),
            inner_rim: num(Field::InnerRim),
        }
    }

    pub fn results(&self) -> ResultSet {
        compute(&self.inputs(), self.mode)
    }
}
