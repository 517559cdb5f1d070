#![allow(dead_code)]

use egui::{Key, Modifiers, PointerButton};
use quick_draw::{EditorContext, InputEvent, PaintConfig, PixelPos, route_event};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn session() -> EditorContext {
    EditorContext::with_rng(&PaintConfig::default(), StdRng::seed_from_u64(0x5eed))
}

pub fn session_with(config: PaintConfig) -> EditorContext {
    EditorContext::with_rng(&config, StdRng::seed_from_u64(0x5eed))
}

pub fn press(context: &mut EditorContext, key: Key) {
    route_event(&InputEvent::KeyDown { key, modifiers: Modifiers::NONE }, context);
}

pub fn undo(context: &mut EditorContext) {
    route_event(&InputEvent::KeyDown { key: Key::Z, modifiers: Modifiers::CTRL }, context);
}

/// Primary-button drag through `points`, pressing at the first and
/// releasing at the last.
pub fn drag(context: &mut EditorContext, points: &[(i32, i32)]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    let primary = PointerButton::Primary;
    route_event(&InputEvent::PointerDown { pos: (*first).into(), button: primary }, context);
    for p in rest {
        route_event(&InputEvent::PointerMove { pos: (*p).into() }, context);
    }
    let last = rest.last().unwrap_or(first);
    route_event(&InputEvent::PointerUp { pos: (*last).into(), button: primary }, context);
}

pub fn all_pixels(context: &EditorContext) -> impl Iterator<Item = PixelPos> + '_ {
    context.canvas.bounds().pixels()
}
