//! Main module for the wheel offset calculator using Yew.
//! Wires form state, the canvas schematic and the export buttons.

use log::{debug, error, warn};
use web_sys::HtmlCanvasElement;
use wheel_offset::config::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, LOG_LEVEL};
use wheel_offset::form::{Field, FormState};
use wheel_offset::report::ReportFormat;
use wheel_offset::schematic::Schematic;
use wheel_offset::Mode;
use yew::prelude::*;

mod components;
mod drawing;
mod export;
mod hooks;

use components::{ExportButtons, MeasurementField, ModeToggle, ResultsPanel};
use drawing::{context_2d, draw_cross_section};
use export::download_report;
use hooks::use_offset_animation;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let form = use_state(FormState::default);
    let canvas_ref = use_node_ref();

    // Derived on every render; nothing else is stored
    let inputs = form.inputs();
    let results = form.results();
    let mode = form.mode();
    let marker_offset = use_offset_animation(results.final_offset);

    let on_field_input = {
        let form = form.clone();
        Callback::from(move |(field, text): (Field, String)| {
            let mut next = (*form).clone();
            next.set_text(field, text);
            form.set(next);
        })
    };

    let on_mode_select = {
        let form = form.clone();
        Callback::from(move |mode: Mode| {
            let mut next = (*form).clone();
            next.switch_mode(mode);
            form.set(next);
        })
    };

    let on_export = {
        let form = form.clone();
        Callback::from(move |format: ReportFormat| {
            if let Err(e) = download_report(format, &form.inputs(), &form.results(), form.mode()) {
                error!("Export failed: {:?}", e);
            }
        })
    };

    // Redraw whenever the inputs or the animated marker change
    {
        let canvas_ref = canvas_ref.clone();
        let schematic = Schematic::layout(
            &inputs,
            &results,
            marker_offset,
            CANVAS_WIDTH_PX,
            CANVAS_HEIGHT_PX,
        );
        use_effect_with((schematic, mode, marker_offset), move |(schematic, mode, marker)| {
            match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => {
                    let drawn = context_2d(&canvas).and_then(|ctx| {
                        draw_cross_section(
                            &ctx,
                            schematic,
                            *mode,
                            *marker,
                            CANVAS_WIDTH_PX,
                            CANVAS_HEIGHT_PX,
                        )
                    });
                    if let Err(e) = drawn {
                        warn!("Failed to draw cross-section: {:?}", e);
                    }
                }
                None => debug!("Canvas not mounted yet, skipping draw"),
            }
            || ()
        });
    }

    html! {
        <div class="container">
            <h1>{ "Wheel Offset Calculator" }</h1>

            <ModeToggle {mode} onselect={on_mode_select} />

            <div class="form-grid">
                { Field::ALL.into_iter().map(|field| html! {
                    <MeasurementField
                        key={field.id()}
                        {field}
                        text={AttrValue::from(form.text(field).to_string())}
                        oninput={on_field_input.clone()}
                    />
                }).collect::<Html>() }
            </div>

            <ResultsPanel {results} />

            <div class="schematic-section">
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_WIDTH_PX.to_string()}
                    height={CANVAS_HEIGHT_PX.to_string()}
                />
            </div>

            <ExportButtons onexport={on_export} />
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the app.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", e).into());
    }
    yew::Renderer::<Main>::new().render();
}
