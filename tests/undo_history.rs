mod common;

use common::{drag, press, session, session_with, undo};
use egui::{Color32, Key};
use quick_draw::{PaintConfig, Snapshot};

/// A short horizontal stroke on row `n`, distinct for every `n`.
fn stroke(context: &mut quick_draw::EditorContext, n: i32) {
    let y = 40 + n * 15;
    drag(context, &[(20, y), (200, y)]);
}

#[test]
fn test_undo_steps_back_one_operation_at_a_time() {
    let mut context = session();
    let mut before: Vec<Snapshot> = Vec::new();
    for n in 0..6 {
        before.push(context.canvas.snapshot());
        stroke(&mut context, n);
    }

    for expected in before.iter().rev().take(4) {
        undo(&mut context);
        assert_eq!(&context.canvas.snapshot(), expected);
    }
}

#[test]
fn test_undo_beyond_history_is_noop() {
    let mut context = session();
    stroke(&mut context, 0);
    undo(&mut context);
    undo(&mut context);
    let blank = context.canvas.snapshot();
    for _ in 0..5 {
        undo(&mut context);
    }
    assert_eq!(context.canvas.snapshot(), blank);
    assert!(context.history.is_empty());
}

#[test]
fn test_rectangle_takes_two_undo_steps() {
    let mut context = session();
    stroke(&mut context, 0);
    let before = context.canvas.snapshot();
    let entries = context.history.len();
    press(&mut context, Key::R);
    press(&mut context, Key::F);
    drag(&mut context, &[(100, 100), (200, 150)]);
    let committed = context.canvas.snapshot();
    assert_ne!(committed, before);
    assert_eq!(context.history.len(), entries + 2);
    assert_eq!(context.history.iter().last(), Some(&committed));

    // the first undo lands on the committed shape, the second removes it
    undo(&mut context);
    assert_eq!(context.canvas.snapshot(), committed);
    undo(&mut context);
    assert_eq!(context.canvas.snapshot(), before);
}

#[test]
fn test_new_canvas_is_undo_baseline() {
    let mut context = session();
    stroke(&mut context, 0);
    stroke(&mut context, 1);
    press(&mut context, Key::N);
    assert!(common::all_pixels(&context).all(|p| context.canvas.pixel(p) == Some(Color32::WHITE)));

    undo(&mut context);
    assert!(common::all_pixels(&context).all(|p| context.canvas.pixel(p) == Some(Color32::WHITE)));
}

#[test]
fn test_plain_z_does_not_undo() {
    let mut context = session();
    stroke(&mut context, 0);
    let drawn = context.canvas.snapshot();
    press(&mut context, Key::Z);
    assert_eq!(context.canvas.snapshot(), drawn);
}

#[test]
fn test_history_capacity_bound() {
    let capacity = 20;
    let mut context = session_with(PaintConfig {
        history_capacity: capacity,
        ..PaintConfig::default()
    });
    let mut pushed: Vec<Snapshot> = vec![context.canvas.snapshot()];
    for n in 0..25 {
        pushed.push(context.canvas.snapshot());
        stroke(&mut context, n);
    }
    // 1 baseline + 25 strokes
    let extra = pushed.len() - capacity;
    assert_eq!(context.history.len(), capacity);
    assert_eq!(context.history.iter().next(), Some(&pushed[extra]));

    for _ in 0..capacity {
        undo(&mut context);
    }
    assert_eq!(context.canvas.snapshot(), pushed[extra]);
    undo(&mut context);
    assert_eq!(context.canvas.snapshot(), pushed[extra]);
}
