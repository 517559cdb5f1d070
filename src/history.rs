use std::collections::VecDeque;

use crate::canvas::{Canvas, Snapshot};

/// Bounded undo history of full-canvas snapshots.
///
/// Undo consumes the newest entry; when full, a push evicts the oldest.
/// There is no redo: a popped snapshot is gone.
#[derive(Debug)]
pub struct History {
    /// Oldest snapshot at the front
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a snapshot, evicting the oldest one if the history is full
    pub fn push(&mut self, snapshot: Snapshot) {
        while self.snapshots.len() >= self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Takes the most recently pushed snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Restores the most recent snapshot onto `canvas`.
    ///
    /// Returns `false` when there was nothing to undo or the snapshot did not
    /// fit the canvas; the canvas is left untouched in both cases.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        let Some(snapshot) = self.pop() else {
            return false;
        };
        match canvas.restore(&snapshot) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Dropping snapshot on undo: {err}");
                false
            }
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelPos;
    use egui::Color32;

    /// A 1x1 snapshot whose only pixel encodes `n`.
    fn tagged(n: u8) -> Snapshot {
        let mut canvas = Canvas::new(1, 1);
        canvas.draw_point(PixelPos::new(0, 0), Color32::from_rgb(n, 0, 0));
        canvas.snapshot()
    }

    fn tag(snapshot: &Snapshot) -> u8 {
        snapshot.pixel(PixelPos::new(0, 0)).map(|c| c.r()).unwrap_or_default()
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut history = History::new(5);
        history.push(tagged(1));
        history.push(tagged(2));
        assert_eq!(history.pop().map(|s| tag(&s)), Some(2));
        assert_eq!(history.pop().map(|s| tag(&s)), Some(1));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let capacity = 4;
        let extra = 3;
        let mut history = History::new(capacity);
        for n in 1..=(capacity + extra) as u8 {
            history.push(tagged(n));
        }
        assert_eq!(history.len(), capacity);
        let oldest = history.iter().next().map(tag);
        assert_eq!(oldest, Some(extra as u8 + 1));
        let newest = history.iter().last().map(tag);
        assert_eq!(newest, Some((capacity + extra) as u8));
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new(3);
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_point(PixelPos::new(0, 0), Color32::RED);
        let version = canvas.version();

        assert!(!history.undo(&mut canvas));
        assert_eq!(canvas.version(), version);
        assert_eq!(canvas.pixel(PixelPos::new(0, 0)), Some(Color32::RED));
    }

    #[test]
    fn test_undo_restores_snapshot() {
        let mut history = History::new(3);
        let mut canvas = Canvas::new(2, 2);
        history.push(canvas.snapshot());
        canvas.draw_point(PixelPos::new(1, 1), Color32::BLUE);

        assert!(history.undo(&mut canvas));
        assert_eq!(canvas.pixel(PixelPos::new(1, 1)), Some(Color32::WHITE));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_mismatched_snapshot_is_dropped() {
        let mut history = History::new(3);
        history.push(Canvas::new(3, 3).snapshot());
        let mut canvas = Canvas::new(2, 2);
        assert!(!history.undo(&mut canvas));
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut history = History::new(0);
        history.push(tagged(1));
        history.push(tagged(2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
    }
}
