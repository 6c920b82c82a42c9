use super::*;
use crate::form::FormState;

fn preset_report(mode: Mode, format: ReportFormat) -> String {
    let form = FormState::new(mode);
    format
        .render(&form.inputs(), &form.results(), mode)
        .expect("report renders")
}

#[test]
fn file_names_carry_mode_and_extension() {
    assert_eq!(
        ReportFormat::Text.file_name(Mode::TopMount),
        "wheel-offset-topMount.txt"
    );
    assert_eq!(
        ReportFormat::Csv.file_name(Mode::BackMount),
        "wheel-offset-backMount.csv"
    );
}

#[test]
fn text_summary_lists_mode_inputs_and_results() {
    let text = preset_report(Mode::TopMount, ReportFormat::Text);
    assert!(text.contains("Mode: Top Mount"));
    assert!(text.contains("Section Width: 255 mm"));
    assert!(text.contains("Wheel Width: 10.5 in"));
    assert!(text.contains("Pad Height: -2 mm"));
    assert!(text.contains("Rolling Diameter: 2155.61 mm"));
    assert!(text.contains("Overall Height: 27.03 inches"));
    assert!(text.contains("Final Offset: 52.60 mm"));
}

#[test]
fn text_summary_explains_parseable_pcd() {
    let text = preset_report(Mode::TopMount, ReportFormat::Text);
    assert!(text.contains("PCD / Holes: 5x112"));
    assert!(text.contains("(5 holes on 112 mm PCD)"));
}

#[test]
fn text_summary_keeps_unparseable_pcd_verbatim() {
    let mut form = FormState::default();
    form.set_text(crate::form::Field::Pcd, "ask the shop");
    let text = text_summary(&form.inputs(), &form.results(), form.mode());
    assert!(text.contains("PCD / Holes: ask the shop"));
    assert!(!text.contains("holes on"));
}

#[test]
fn csv_summary_has_header_and_one_row_per_value() {
    let csv_text = preset_report(Mode::BackMount, ReportFormat::Csv);
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines[0], "field,value,unit");
    assert_eq!(lines[1], "mode,backMount,");
    // header + mode + 8 fields + 3 results
    assert_eq!(lines.len(), 13);
    assert!(lines.contains(&"secWidth,245,mm"));
    assert!(lines.contains(&"pcd,5x112,"));
    assert!(lines.contains(&"finalOffset,44.35,mm"));
}

#[test]
fn csv_summary_quotes_commas_in_pcd() {
    let mut form = FormState::default();
    form.set_text(crate::form::Field::Pcd, "5x112, hubcentric");
    let csv_text = csv_summary(&form.inputs(), &form.results(), form.mode()).unwrap();
    assert!(csv_text.contains("pcd,\"5x112, hubcentric\","));
}

#[test]
fn text_summary_prints_every_numeric_field_with_its_unit() {
    let form = FormState::default();
    let inputs = form.inputs();
    let text = text_summary(&inputs, &form.results(), form.mode());
    for field in Field::ALL.into_iter().filter(|f| f.is_numeric()) {
        let value = field.value_of(&inputs).unwrap();
        let unit = field.unit().unwrap();
        let line = format!("{}: {} {}", field.label(), value, unit);
        assert!(text.lines().any(|l| l == line), "missing line {:?}", line);
    }
    assert!(text.ends_with("Final Offset: 52.60 mm\n"));
}

#[test]
fn csv_results_round_ties_like_the_form() {
    let mut form = FormState::default();
    form.set_text(Field::Profile, "0");
    form.set_text(Field::Diameter, "17.125");
    let csv_text = csv_summary(&form.inputs(), &form.results(), form.mode()).unwrap();
    assert!(csv_text.lines().any(|l| l == "overallHeight,17.13,in"));
}
