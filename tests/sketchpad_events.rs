use aquasketch::{DrawOp, InputEvent, SketchConfig, Sketchpad, Tool, ToolKind};
use egui::{Color32, Pos2};

fn drag(pad: &mut Sketchpad, points: &[Pos2]) {
    let (first, rest) = points.split_first().expect("at least one point");
    pad.on_pointer_down(*first);
    for point in rest {
        pad.on_pointer_move(*point);
    }
    pad.on_pointer_up(*points.last().expect("at least one point"));
}

#[test]
fn test_hover_creates_preview_without_touching_history() {
    let mut pad = Sketchpad::default();
    pad.on_pointer_enter(Pos2::new(10.0, 10.0));
    pad.on_pointer_move(Pos2::new(12.0, 14.0));

    let preview = pad.preview().expect("preview while hovering");
    assert_eq!(preview.at(), Pos2::new(12.0, 14.0));
    assert!(pad.history().committed().is_empty());
    assert!(pad.cursor_hidden());
}

#[test]
fn test_gesture_discards_preview() {
    let mut pad = Sketchpad::default();
    pad.on_pointer_move(Pos2::new(10.0, 10.0));
    assert!(pad.preview().is_some());

    pad.on_pointer_down(Pos2::new(10.0, 10.0));
    assert!(pad.preview().is_none());
    pad.on_pointer_move(Pos2::new(20.0, 20.0));
    assert!(pad.preview().is_none());
    assert!(pad.is_drawing());

    pad.on_pointer_up(Pos2::new(20.0, 20.0));
    assert!(pad.preview().is_some());
    assert!(!pad.is_drawing());
}

#[test]
fn test_leave_hides_preview_and_ends_gesture() {
    let mut pad = Sketchpad::default();
    pad.on_pointer_down(Pos2::new(1.0, 1.0));
    pad.on_pointer_move(Pos2::new(2.0, 2.0));
    pad.on_pointer_leave();

    assert!(pad.preview().is_none());
    assert!(!pad.cursor_hidden());
    assert!(pad.history().in_progress().is_none());
    // The stroke drawn before leaving stays
    assert_eq!(pad.history().committed().len(), 1);

    // Moves after leaving do not extend the old stroke
    pad.on_pointer_move(Pos2::new(30.0, 30.0));
    let stroke = pad.history().committed()[0].as_stroke().expect("stroke");
    assert_eq!(stroke.points().len(), 2);
}

#[test]
fn test_settings_are_captured_at_creation() {
    let mut pad = Sketchpad::default();
    pad.set_tool_stroke(3.0);
    pad.set_color(Color32::RED);
    drag(&mut pad, &[Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0)]);

    pad.set_tool_stroke(12.0);
    pad.set_color(Color32::BLUE);

    let stroke = pad.history().committed()[0].as_stroke().expect("stroke");
    assert_eq!(stroke.width(), 3.0);
    assert_eq!(stroke.color(), Color32::RED);
}

#[test]
fn test_setting_change_refreshes_preview() {
    let mut pad = Sketchpad::default();
    pad.on_pointer_enter(Pos2::new(40.0, 40.0));

    pad.set_tool_sticker("🐚");
    pad.set_sticker_size(48.0);

    let preview = pad.preview().expect("preview");
    assert_eq!(preview.at(), Pos2::new(40.0, 40.0));
    match preview.tool() {
        Tool::Sticker { glyph, size, .. } => {
            assert_eq!(glyph, "🐚");
            assert_eq!(*size, 48.0);
        }
        other => panic!("expected sticker tool, got {other:?}"),
    }
    assert_eq!(pad.settings().kind, ToolKind::Sticker);
}

#[test]
fn test_every_mutation_repaints() {
    let mut pad = Sketchpad::default();
    let mut passes = pad.render_passes();

    for event in [
        InputEvent::PointerEnter { position: Pos2::new(1.0, 1.0) },
        InputEvent::PointerMove { position: Pos2::new(2.0, 2.0) },
        InputEvent::PointerDown { position: Pos2::new(2.0, 2.0) },
        InputEvent::PointerMove { position: Pos2::new(3.0, 3.0) },
        InputEvent::PointerMove { position: Pos2::new(4.0, 4.0) },
        InputEvent::PointerUp { position: Pos2::new(4.0, 4.0) },
        InputEvent::PointerLeave,
    ] {
        pad.handle(event);
        assert_eq!(pad.render_passes(), passes + 1, "no repaint after {event:?}");
        passes = pad.render_passes();
    }

    pad.undo();
    assert_eq!(pad.render_passes(), passes + 1);
}

#[test]
fn test_frame_tracks_latest_state() {
    let mut pad = Sketchpad::default();
    drag(&mut pad, &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), Pos2::new(9.0, 2.0)]);
    pad.on_pointer_leave();
    assert_eq!(pad.frame().segment_count(), 2);

    pad.undo();
    assert_eq!(pad.frame().segment_count(), 0);

    pad.redo();
    assert_eq!(pad.frame().segment_count(), 2);

    pad.clear();
    assert!(pad.frame().ops().is_empty());
    assert!(pad.history().committed().is_empty());
    assert!(pad.history().redo_stack().is_empty());
}

#[test]
fn test_preview_paints_on_top() {
    let mut pad = Sketchpad::default();
    drag(&mut pad, &[Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0)]);

    let ops = pad.frame().ops();
    assert!(matches!(ops.first(), Some(DrawOp::Segment { .. })));
    assert!(matches!(ops.last(), Some(DrawOp::Dot { .. })));
}

#[test]
fn test_undo_mid_gesture_stops_drawing() {
    let mut pad = Sketchpad::default();
    pad.on_pointer_down(Pos2::new(0.0, 0.0));
    pad.on_pointer_move(Pos2::new(5.0, 5.0));
    pad.undo();

    pad.on_pointer_move(Pos2::new(8.0, 8.0));
    assert!(pad.history().committed().is_empty());
    assert_eq!(pad.history().redo_stack().len(), 1);
    assert!(pad.history().redo_stack()[0].as_stroke().is_some());
}

#[test]
fn test_config_seeds_palette() {
    let config = SketchConfig::from_json(r#"{ "stickers": ["⭐", "🦀"], "sticker_size": 20.0 }"#)
        .expect("config");
    let pad = Sketchpad::new(&config);

    assert_eq!(pad.stickers(), &["⭐".to_owned(), "🦀".to_owned()]);
    assert_eq!(pad.settings().sticker_glyph, "⭐");
    assert_eq!(pad.settings().sticker_size, 20.0);
}
