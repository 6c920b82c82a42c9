//! Pure Yew view components for the wheel offset form.
//!
//! Components render from props and report user actions through callbacks;
//! all state lives in the `Main` component.

use web_sys::HtmlInputElement;
use wheel_offset::form::Field;
use wheel_offset::report::ReportFormat;
use wheel_offset::{Mode, ResultSet};
use yew::prelude::*;

/// Two buttons selecting the mount mode. Clicking a mode reloads its preset.
#[derive(Properties, PartialEq)]
pub struct ModeToggleProps {
    pub mode: Mode,
    pub onselect: Callback<Mode>,
}

#[function_component(ModeToggle)]
pub fn mode_toggle(props: &ModeToggleProps) -> Html {
    html! {
        <div class="mode-toggle">
            { Mode::ALL.into_iter().map(|mode| {
                let onselect = props.onselect.clone();
                html! {
                    <button
                        id={mode.id()}
                        class={classes!("mode-btn", (mode == props.mode).then_some("active"))}
                        onclick={Callback::from(move |_| onselect.emit(mode))}
                    >
                        { mode.label() }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// A single labelled input bound to one form field.
#[derive(Properties, PartialEq)]
pub struct MeasurementFieldProps {
    pub field: Field,
    pub text: AttrValue,
    pub oninput: Callback<(Field, String)>,
}

#[function_component(MeasurementField)]
pub fn measurement_field(props: &MeasurementFieldProps) -> Html {
    let field = props.field;
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={field.id()}>{ field.label() }</label>
            <div class="input-with-unit">
                <input
                    type={if field.is_numeric() { "number" } else { "text" }}
                    step="any"
                    id={field.id()}
                    value={props.text.clone()}
                    {oninput}
                />
                if let Some(unit) = field.unit() {
                    <span class="unit">{ unit }</span>
                }
            </div>
        </div>
    }
}

/// The three computed values.
#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub results: ResultSet,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let rows = [
        ("rollingDiameter", "Rolling Diameter", props.results.rolling_diameter_text()),
        ("overallHeight", "Overall Height", props.results.overall_height_text()),
        ("finalOffset", "Final Offset", props.results.final_offset_text()),
    ];

    html! {
        <div class="results">
            { rows.into_iter().map(|(id, label, value)| html! {
                <div class="result-row">
                    <span class="result-label">{ label }</span>
                    <span class="result-value" id={id}>{ value }</span>
                </div>
            }).collect::<Html>() }
        </div>
    }
}

/// Download buttons for the text and CSV summaries.
#[derive(Properties, PartialEq)]
pub struct ExportButtonsProps {
    pub onexport: Callback<ReportFormat>,
}

#[function_component(ExportButtons)]
pub fn export_buttons(props: &ExportButtonsProps) -> Html {
    let button = |format: ReportFormat, label: &'static str| {
        let onexport = props.onexport.clone();
        html! {
            <button class="btn-secondary"
                onclick={Callback::from(move |_| onexport.emit(format))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="export-buttons">
            { button(ReportFormat::Text, "Download Summary") }
            { button(ReportFormat::Csv, "Download CSV") }
        </div>
    }
}
