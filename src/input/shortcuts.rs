use egui::{Color32, Key, Modifiers};

use crate::tools::Tool;
use crate::tools::palette;

/// A keyboard-triggered change to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectColor(Color32),
    GrowBrush,
    ShrinkBrush,
    SelectTool(Tool),
    ToggleFill,
    /// Clear to white and record the blank canvas for undo
    NewCanvas,
    Undo,
}

/// Maps a key press to its action.
///
/// Modifiers only matter for `Z`, which needs Ctrl (or the platform command
/// key). Unknown keys map to `None`.
pub fn action_for_key(key: Key, modifiers: Modifiers) -> Option<Action> {
    let action = match key {
        Key::Z if modifiers.ctrl || modifiers.command => Action::Undo,
        Key::C => Action::SelectTool(Tool::Pen),
        Key::E => Action::SelectTool(Tool::Eraser),
        Key::S => Action::SelectTool(Tool::Spray),
        Key::R => Action::SelectTool(Tool::Rectangle),
        Key::O => Action::SelectTool(Tool::Circle),
        Key::F => Action::ToggleFill,
        Key::Plus | Key::Equals => Action::GrowBrush,
        Key::Minus => Action::ShrinkBrush,
        Key::N => Action::NewCanvas,
        other => Action::SelectColor(palette::color_for_digit(digit(other)?)?),
    };
    Some(action)
}

fn digit(key: Key) -> Option<u8> {
    let digit = match key {
        Key::Num0 => 0,
        Key::Num1 => 1,
        Key::Num2 => 2,
        Key::Num3 => 3,
        Key::Num4 => 4,
        Key::Num5 => 5,
        Key::Num6 => 6,
        Key::Num7 => 7,
        Key::Num8 => 8,
        Key::Num9 => 9,
        _ => return None,
    };
    Some(digit)
}

/// The help line painted at the bottom of the window.
pub const INSTRUCTIONS: &str = "1-9: Colors | 0: Black | +/-: Size | C: Pen | E: Eraser | S: Spray | R: Rectangle | O: Circle | F: Toggle Fill | N: New | Ctrl+Z: Undo";
