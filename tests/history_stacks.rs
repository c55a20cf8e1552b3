use aquasketch::{Drawable, History};
use egui::{Color32, Pos2};

// Helper to commit a finished two-point stroke
fn commit_stroke(history: &mut History, offset: f32) {
    let id = history.begin_stroke(Pos2::new(offset, offset), 2.0, Color32::RED);
    history.extend(id, Pos2::new(offset + 5.0, offset + 5.0));
    history.end_gesture();
}

fn history_with(n: usize) -> History {
    let mut history = History::new();
    for i in 0..n {
        commit_stroke(&mut history, i as f32);
    }
    history
}

#[test]
fn test_n_commits_m_undos() {
    for n in 0..6 {
        for m in 0..=n {
            let mut history = history_with(n);
            for _ in 0..m {
                assert!(history.undo());
            }
            assert_eq!(history.committed().len(), n - m);
            assert_eq!(history.redo_stack().len(), m);
        }
    }
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut history = history_with(4);
    let before: Vec<Drawable> = history.committed().to_vec();

    history.undo();
    history.redo();

    assert_eq!(history.committed(), before.as_slice());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_commit_after_undo_clears_redo() {
    let mut history = history_with(3);
    history.undo();
    history.undo();
    assert_eq!(history.redo_stack().len(), 2);

    commit_stroke(&mut history, 50.0);

    assert!(history.redo_stack().is_empty());
    assert_eq!(history.committed().len(), 2);
}

#[test]
fn test_empty_undo_and_redo_are_noops() {
    let mut history = History::new();
    let snapshot = history.clone();
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(history, snapshot);

    let mut history = history_with(2);
    let snapshot = history.clone();
    assert!(!history.redo());
    assert_eq!(history, snapshot);
}

#[test]
fn test_stroke_scenario() {
    let mut history = History::new();
    let id = history.begin_stroke(Pos2::new(0.0, 0.0), 2.0, Color32::RED);
    history.extend(id, Pos2::new(5.0, 5.0));
    history.end_gesture();

    assert_eq!(history.committed().len(), 1);
    let stroke = history.committed()[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points(), &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)]);
    assert_eq!(stroke.width(), 2.0);
    assert_eq!(stroke.color(), Color32::RED);
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_three_strokes_two_undos_one_redo() {
    let mut history = history_with(3);
    history.undo();
    history.undo();
    assert_eq!(history.committed().len(), 1);
    assert_eq!(history.redo_stack().len(), 2);

    history.redo();
    assert_eq!(history.committed().len(), 2);
    assert_eq!(history.redo_stack().len(), 1);
}

#[test]
fn test_clear_empties_both_stacks() {
    let mut history = history_with(5);
    history.undo();
    history.undo();

    assert!(history.clear());
    assert!(history.committed().is_empty());
    assert!(history.redo_stack().is_empty());
    assert!(!history.clear());
}

#[test]
fn test_sticker_drag_keeps_latest_anchor() {
    let mut history = History::new();
    let id = history.begin_sticker(Pos2::new(1.0, 1.0), "🐟", 24.0, Color32::BLACK);
    history.extend(id, Pos2::new(10.0, 10.0));
    history.extend(id, Pos2::new(20.0, 5.0));
    history.end_gesture();

    // Frozen after the gesture
    assert!(!history.extend(id, Pos2::new(99.0, 99.0)));

    let sticker = history.committed()[0].as_sticker().expect("sticker");
    assert_eq!(sticker.anchor(), Pos2::new(20.0, 5.0));
    assert_eq!(sticker.size(), 24.0);
}
