use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;
use wheel_offset::animation::{needs_frame, step_marker};
use wheel_offset::config::MARKER_START_MM;
use yew::prelude::*;

/// Animated position of the offset marker, easing toward `target` one frame at a time.
///
/// Each render with an unsettled marker schedules exactly one animation frame;
/// the frame updates the position state, which re-renders and schedules the
/// next. Once the marker settles no frame is requested. A pending frame is
/// cancelled when the hook's inputs change or the component unmounts.
#[hook]
pub fn use_offset_animation(target: f64) -> f64 {
    let position = use_state(|| MARKER_START_MM);
    let pending: Rc<RefCell<Option<AnimationFrame>>> = use_mut_ref(|| None);

    {
        let position = position.clone();
        use_effect_with((target, *position), move |&(target, current)| {
            if needs_frame(current, target) {
                let handle = request_animation_frame(move |_timestamp| {
                    position.set(step_marker(current, target).position());
                });
                *pending.borrow_mut() = Some(handle);
            }

            // Dropping the handle cancels a frame that has not fired yet
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    *position
}
