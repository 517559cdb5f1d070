use egui::Color32;

/// Colors bound to the number keys 1 through 9, in key order.
pub const PALETTE: [Color32; 9] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 255, 0),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(128, 0, 0),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(0, 0, 128),
];

/// Key 0.
pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);

/// Color for a digit key: 1-9 pick palette entries, 0 picks black.
pub fn color_for_digit(digit: u8) -> Option<Color32> {
    match digit {
        0 => Some(BLACK),
        1..=9 => PALETTE.get(usize::from(digit - 1)).copied(),
        _ => None,
    }
}

/// Formats a color the way the status bar shows it, e.g. `(255, 0, 0)`.
pub fn describe(color: Color32) -> String {
    format!("({}, {}, {})", color.r(), color.g(), color.b())
}
