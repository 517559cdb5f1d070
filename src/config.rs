use std::time::Duration;

/// Static settings for a drawing session.
///
/// There is no config file; everything the app needs at startup lives here
/// and `Default` carries the values the window is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    /// Window title
    pub title: String,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// How many snapshots the undo history keeps
    pub history_capacity: usize,
    /// Target frames per second
    pub frame_rate: u32,
    /// Brush size a new session starts with
    pub initial_brush_size: u32,
    /// Height of the status bar painted across the top
    pub status_bar_height: f32,
    /// Distance of the instruction line's top from the bottom edge
    pub instructions_offset: f32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Quick Draw - GitHub Achievement Project".to_owned(),
            canvas_width: 800,
            canvas_height: 600,
            history_capacity: 20,
            frame_rate: 60,
            initial_brush_size: 5,
            status_bar_height: 30.0,
            instructions_offset: 20.0,
        }
    }
}

impl PaintConfig {
    /// Time budget of a single frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Window size in logical points, matching the canvas one-to-one.
    pub fn window_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let config = PaintConfig::default();
        assert_eq!(config.window_size(), egui::vec2(800.0, 600.0));
        assert_eq!(config.history_capacity, 20);
    }

    #[test]
    fn test_frame_interval() {
        let config = PaintConfig::default();
        let interval = config.frame_interval();
        assert!(interval > Duration::from_millis(16));
        assert!(interval < Duration::from_millis(17));

        let stalled = PaintConfig { frame_rate: 0, ..PaintConfig::default() };
        assert_eq!(stalled.frame_interval(), Duration::from_secs(1));
    }
}
