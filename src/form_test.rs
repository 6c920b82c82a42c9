use super::*;
use crate::config::{BACK_MOUNT_PRESET, TOP_MOUNT_PRESET};

#[test]
fn field_ids_are_unique() {
    let mut ids: Vec<&str> = Field::ALL.iter().map(|f| f.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), Field::COUNT);
}

#[test]
fn only_pcd_is_not_numeric() {
    let non_numeric: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.is_numeric()).collect();
    assert_eq!(non_numeric, vec![Field::Pcd]);
    assert_eq!(Field::Pcd.unit(), None);
}

#[test]
fn new_form_shows_top_mount_preset_text() {
    let form = FormState::default();
    assert_eq!(form.mode(), Mode::TopMount);
    assert_eq!(form.text(Field::SecWidth), "255");
    assert_eq!(form.text(Field::Width), "10.5");
    assert_eq!(form.text(Field::PadHeight), "-2");
    assert_eq!(form.text(Field::Pcd), DEFAULT_PCD);
}

#[test]
fn new_form_inputs_match_preset() {
    let form = FormState::new(Mode::BackMount);
    assert_eq!(form.inputs(), BACK_MOUNT_PRESET.with_pcd(DEFAULT_PCD));
}

#[test]
fn switch_mode_resets_every_numeric_field() {
    let mut form = FormState::default();
    for field in Field::ALL.into_iter().filter(|f| f.is_numeric()) {
        form.set_text(field, "999");
    }
    form.switch_mode(Mode::BackMount);
    assert_eq!(form.mode(), Mode::BackMount);
    assert_eq!(form.inputs(), BACK_MOUNT_PRESET.with_pcd(DEFAULT_PCD));
}

#[test]
fn switch_mode_keeps_pcd_text() {
    let mut form = FormState::default();
    form.set_text(Field::Pcd, "6x139.7");
    form.switch_mode(Mode::BackMount);
    form.switch_mode(Mode::TopMount);
    assert_eq!(form.text(Field::Pcd), "6x139.7");
    assert_eq!(form.inputs(), TOP_MOUNT_PRESET.with_pcd("6x139.7"));
}

#[test]
fn reselecting_current_mode_still_resets() {
    let mut form = FormState::default();
    form.set_text(Field::Profile, "55");
    form.switch_mode(Mode::TopMount);
    assert_eq!(form.text(Field::Profile), "35");
}

#[test]
fn edits_keep_raw_text_and_parse_leniently() {
    let mut form = FormState::default();
    form.set_text(Field::Diameter, "19in");
    form.set_text(Field::Profile, "");
    assert_eq!(form.text(Field::Diameter), "19in");
    let inputs = form.inputs();
    assert_eq!(inputs.diameter, 19.0);
    assert_eq!(inputs.profile, 0.0);
}

#[test]
fn results_recompute_after_edit() {
    let mut form = FormState::default();
    let before = form.results();
    form.set_text(Field::PadHeight, "8");
    let after = form.results();
    assert!((before.final_offset - after.final_offset - 10.0).abs() < 1e-9);
    assert_eq!(before.rolling_diameter, after.rolling_diameter);
}

#[test]
fn results_use_current_mode() {
    let mut form = FormState::default();
    form.switch_mode(Mode::BackMount);
    assert_eq!(
        form.results(),
        compute(&BACK_MOUNT_PRESET.with_pcd(DEFAULT_PCD), Mode::BackMount)
    );
}
