use egui::PointerButton;

use crate::state::EditorContext;

use super::{InputEvent, action_for_key};

/// Whether the event loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes one input event to the session: key presses become tool state
/// transitions, primary-button pointer events become drawing.
///
/// Unrecognized keys and non-primary buttons are ignored.
pub fn route_event(event: &InputEvent, context: &mut EditorContext) -> Flow {
    log::trace!("Routing {event:?}");
    match event {
        InputEvent::KeyDown { key, modifiers } => {
            if let Some(action) = action_for_key(*key, *modifiers) {
                context.apply(action);
            }
        }
        InputEvent::PointerDown { pos, button: PointerButton::Primary } => {
            context.pointer_down(*pos);
        }
        InputEvent::PointerMove { pos } => context.pointer_move(*pos),
        InputEvent::PointerUp { pos, button: PointerButton::Primary } => {
            context.pointer_up(*pos);
        }
        InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {}
        InputEvent::CloseRequested => {
            log::info!("Quit requested");
            return Flow::Quit;
        }
    }
    Flow::Continue
}
