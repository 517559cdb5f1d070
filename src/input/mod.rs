use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::geometry::PixelPos;

mod router;
mod shortcuts;
pub use router::{Flow, route_event};
pub use shortcuts::{Action, INSTRUCTIONS, action_for_key};

/// Represents the input events the editor reacts to, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        pos: PixelPos,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        pos: PixelPos,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        pos: PixelPos,
    },
    /// Key was pressed
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    /// The window was asked to close
    CloseRequested,
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    canvas_rect: Rect,
    canvas_size: [u32; 2],
}

impl InputHandler {
    pub fn new(canvas_rect: Rect, canvas_size: [u32; 2]) -> Self {
        Self {
            canvas_rect,
            canvas_size,
        }
    }

    /// Update the canvas rectangle (e.g. if the window scale changed)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Maps a screen position to the canvas pixel under it.
    pub fn to_canvas(&self, pos: Pos2) -> PixelPos {
        let rect = self.canvas_rect;
        let scale_x = self.canvas_size[0] as f32 / rect.width().max(1.0);
        let scale_y = self.canvas_size[1] as f32 / rect.height().max(1.0);
        PixelPos::new(
            ((pos.x - rect.min.x) * scale_x).floor() as i32,
            ((pos.y - rect.min.y) * scale_y).floor() as i32,
        )
    }

    /// Process raw egui input and generate our InputEvents, in arrival order
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            let mut events = self.translate(&input.raw.events);
            if input.viewport().close_requested() {
                events.push(InputEvent::CloseRequested);
            }
            events
        })
    }

    /// Translates raw events. Key repeats and releases are dropped.
    pub fn translate(&self, raw: &[egui::Event]) -> Vec<InputEvent> {
        raw.iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                    pos: self.to_canvas(*pos),
                }),
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let pos = self.to_canvas(*pos);
                    Some(if *pressed {
                        InputEvent::PointerDown { pos, button: *button }
                    } else {
                        InputEvent::PointerUp { pos, button: *button }
                    })
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => Some(InputEvent::KeyDown {
                    key: *key,
                    modifiers: *modifiers,
                }),
                _ => None,
            })
            .collect()
    }
}
