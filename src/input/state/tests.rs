use super::*;
use crate::draw::{BLACK, DrawingSurface, Raster, SurfaceOffset, WHITE, YELLOW};
use crate::input::{Palette, PointerEvent, ToolState};
use crate::util::Rect;

fn create_test_sketchpad() -> Sketchpad {
    let surface = DrawingSurface::new(100, 100, WHITE).unwrap();
    let tool = ToolState::new(BLACK, 10, WHITE);
    Sketchpad::new(surface, tool, Palette::default())
}

fn snapshot(pad: &mut Sketchpad) -> Raster {
    pad.surface.snapshot().unwrap()
}

fn is_ink(raster: &Raster, x: i32, y: i32) -> bool {
    raster
        .pixel(x, y)
        .is_some_and(|[r, g, b, _]| r < 40 && g < 40 && b < 40)
}

fn pixel_is(raster: &Raster, x: i32, y: i32, expected: [u8; 3]) -> bool {
    raster
        .pixel(x, y)
        .is_some_and(|[r, g, b, a]| [r, g, b] == expected && a == 255)
}

#[test]
fn stroke_is_continuous_through_samples() {
    let mut pad = create_test_sketchpad();

    pad.on_pointer(PointerEvent::Down { x: 10, y: 10 }).unwrap();
    pad.on_pointer(PointerEvent::Move { x: 50, y: 10 }).unwrap();
    pad.on_pointer(PointerEvent::Move { x: 50, y: 50 }).unwrap();
    pad.on_pointer(PointerEvent::Up).unwrap();

    let raster = snapshot(&mut pad);
    for (x, y) in [(10, 10), (20, 10), (30, 10), (50, 10), (50, 30), (50, 50)] {
        assert!(is_ink(&raster, x, y), "expected ink at ({x}, {y})");
    }
    assert!(pixel_is(&raster, 80, 80, [255, 255, 255]));
    assert!(pixel_is(&raster, 30, 40, [255, 255, 255]));
}

#[test]
fn move_without_active_stroke_draws_nothing() {
    let mut pad = create_test_sketchpad();

    pad.on_pointer_move(20, 20).unwrap();
    pad.on_pointer_move(40, 40).unwrap();
    assert_eq!(snapshot(&mut pad).count_unlike(WHITE), 0);

    pad.on_pointer_down(20, 20);
    pad.on_pointer_move(40, 20).unwrap();
    pad.on_pointer_up();
    let after_stroke = snapshot(&mut pad);

    pad.on_pointer_move(80, 80).unwrap();
    assert_eq!(snapshot(&mut pad), after_stroke);
}

#[test]
fn pointer_down_alone_paints_nothing() {
    let mut pad = create_test_sketchpad();
    pad.on_pointer_down(50, 50);
    assert!(pad.surface.is_drawing());
    assert_eq!(snapshot(&mut pad).count_unlike(WHITE), 0);
}

#[test]
fn stationary_move_leaves_a_dot() {
    let mut pad = create_test_sketchpad();
    pad.on_pointer_down(50, 50);
    pad.on_pointer_move(50, 50).unwrap();

    let raster = snapshot(&mut pad);
    assert!(is_ink(&raster, 50, 50));
    assert!(pixel_is(&raster, 50, 60, [255, 255, 255]));
}

#[test]
fn eraser_then_color_restores_brush() {
    let mut pad = create_test_sketchpad();

    pad.handle_action(ControlAction::SelectEraser).unwrap();
    assert!(pad.tool.is_eraser);

    pad.handle_action(ControlAction::SelectColor(YELLOW)).unwrap();
    assert!(!pad.tool.is_eraser);
    assert_eq!(pad.tool.brush_color, YELLOW);

    pad.on_pointer_down(10, 50);
    pad.on_pointer_move(90, 50).unwrap();
    let raster = snapshot(&mut pad);
    assert!(pixel_is(&raster, 50, 50, [0xff, 0xdd, 0x57]));
}

#[test]
fn clear_restores_blank_surface() {
    let mut pad = create_test_sketchpad();
    let blank = snapshot(&mut pad);

    pad.on_pointer_down(5, 5);
    pad.on_pointer_move(95, 95).unwrap();
    pad.on_pointer_move(5, 95).unwrap();
    pad.on_pointer_up();
    assert_ne!(snapshot(&mut pad), blank);

    pad.handle_action(ControlAction::Clear).unwrap();
    assert_eq!(snapshot(&mut pad), blank);
}

#[test]
fn clear_mid_stroke_keeps_origin() {
    let mut pad = create_test_sketchpad();

    pad.on_pointer_down(10, 10);
    pad.on_pointer_move(20, 20).unwrap();
    pad.clear().unwrap();
    assert!(pad.surface.is_drawing());

    pad.on_pointer_move(60, 60).unwrap();
    let raster = snapshot(&mut pad);
    // The first post-clear segment starts at the pre-clear origin.
    assert!(is_ink(&raster, 20, 20));
    assert!(is_ink(&raster, 40, 40));
    // Ink from before the clear is gone.
    assert!(pixel_is(&raster, 10, 10, [255, 255, 255]));
}

#[test]
fn cursor_follows_pointer_with_offset() {
    let mut pad = create_test_sketchpad();
    pad.surface.set_offset(SurfaceOffset::new(120, 40));
    pad.on_pointer(PointerEvent::Enter).unwrap();

    pad.on_pointer_move(30, 70).unwrap();
    let cursor = pad.cursor.unwrap();
    assert_eq!((cursor.x, cursor.y), (30.0 + 40.0 - 5.0, 70.0 + 120.0 - 5.0));
    assert_eq!(cursor.size, 10);
    assert_eq!(cursor.color, BLACK);
}

#[test]
fn offset_is_only_refreshed_on_enter() {
    let mut pad = create_test_sketchpad();

    pad.surface.set_offset(SurfaceOffset::new(10, 10));
    pad.on_pointer_move(0, 0).unwrap();
    assert_eq!(pad.cursor.unwrap().x, -5.0);

    pad.on_pointer_enter();
    pad.on_pointer_move(0, 0).unwrap();
    assert_eq!(pad.cursor.unwrap().x, 5.0);
    assert_eq!(pad.offset, SurfaceOffset::new(10, 10));
}

#[test]
fn eraser_segment_uses_background_color() {
    let mut pad = create_test_sketchpad();

    pad.select_palette(1);
    assert_eq!(pad.tool.brush_color, YELLOW);
    pad.on_pointer_down(10, 30);
    pad.on_pointer_move(90, 30).unwrap();
    pad.on_pointer_up();

    pad.select_eraser();
    pad.on_pointer_down(10, 30);
    pad.on_pointer_move(90, 30).unwrap();
    pad.on_pointer_move(90, 70).unwrap();
    pad.on_pointer_up();

    let raster = snapshot(&mut pad);
    assert!(pixel_is(&raster, 50, 30, [255, 255, 255]));
    assert!(pixel_is(&raster, 90, 50, [255, 255, 255]));
    assert_eq!(pad.cursor.unwrap().color, WHITE);
}

#[test]
fn leave_ends_stroke() {
    let mut pad = create_test_sketchpad();
    pad.on_pointer_down(10, 10);
    pad.on_pointer(PointerEvent::Leave).unwrap();
    assert!(!pad.surface.is_drawing());

    pad.on_pointer_move(90, 90).unwrap();
    assert_eq!(snapshot(&mut pad).count_unlike(WHITE), 0);

    // Ending twice is harmless.
    pad.on_pointer_up();
    assert!(!pad.surface.is_drawing());
}

#[test]
fn palette_index_out_of_range_is_ignored() {
    let mut pad = create_test_sketchpad();
    pad.select_eraser();
    pad.handle_action(ControlAction::SelectPalette(42)).unwrap();
    assert!(pad.tool.is_eraser);
    assert_eq!(pad.tool.brush_color, WHITE);
}

#[test]
fn damage_tracks_segments_and_clears() {
    let mut pad = create_test_sketchpad();
    assert!(pad.needs_redraw);
    assert_eq!(pad.take_damage(), vec![Rect::new(0, 0, 100, 100).unwrap()]);
    assert!(!pad.needs_redraw);

    pad.on_pointer_down(20, 20);
    pad.on_pointer_move(30, 25).unwrap();
    assert!(pad.needs_redraw);
    let damage = pad.take_damage();
    assert_eq!(damage.len(), 1);
    assert!(damage[0].contains(20, 20));
    assert!(damage[0].contains(30, 25));

    pad.handle_action(ControlAction::Clear).unwrap();
    assert_eq!(pad.take_damage(), vec![Rect::new(0, 0, 100, 100).unwrap()]);
}

#[test]
fn width_change_restyles_cursor_in_place() {
    let mut pad = create_test_sketchpad();
    pad.on_pointer_move(40, 40).unwrap();

    pad.handle_action(ControlAction::SetBrushWidth(20)).unwrap();
    let cursor = pad.cursor.unwrap();
    assert_eq!(cursor.size, 20);
    assert_eq!((cursor.x, cursor.y), (30.0, 30.0));

    pad.handle_action(ControlAction::AdjustBrushWidth(-16)).unwrap();
    let cursor = pad.cursor.unwrap();
    assert_eq!(cursor.size, 4);
    assert_eq!(cursor.center(), (40.0, 40.0));
}

#[test]
fn extreme_coordinates_are_handled() {
    let mut pad = create_test_sketchpad();
    pad.surface.set_offset(SurfaceOffset::new(10, 10));
    pad.on_pointer(PointerEvent::Enter).unwrap();
    pad.take_damage();

    pad.on_pointer(PointerEvent::Down { x: 0, y: 0 }).unwrap();
    pad.on_pointer(PointerEvent::Move { x: i32::MAX, y: 0 }).unwrap();

    let cursor = pad.cursor.unwrap();
    assert_eq!(cursor.x, i32::MAX as f64 + 10.0 - 5.0);
    assert_eq!(cursor.y, 10.0 - 5.0);
    assert_eq!(pad.take_damage(), vec![Rect::new(0, 0, 100, 7).unwrap()]);

    let raster = snapshot(&mut pad);
    assert!(is_ink(&raster, 50, 2));
    assert!(is_ink(&raster, 99, 2));
    assert!(pixel_is(&raster, 50, 50, [255, 255, 255]));

    pad.on_pointer(PointerEvent::Move { x: i32::MIN, y: i32::MIN }).unwrap();
    assert!(pad.take_damage().is_empty());
    assert_eq!(snapshot(&mut pad), raster);
    pad.on_pointer(PointerEvent::Up).unwrap();

    let cursor = pad.cursor.unwrap();
    assert_eq!(cursor.center(), (i32::MIN as f64 + 10.0, i32::MIN as f64 + 10.0));
}

#[test]
fn clear_keeps_eraser_active() {
    let mut pad = create_test_sketchpad();
    pad.handle_action(ControlAction::SelectEraser).unwrap();
    pad.handle_action(ControlAction::Clear).unwrap();

    assert!(pad.tool.is_eraser);
    assert_eq!(pad.tool.brush_color, WHITE);
    assert_eq!(pad.tool.effective_color(), WHITE);

    pad.handle_action(ControlAction::SelectPalette(0)).unwrap();
    assert!(!pad.tool.is_eraser);
    assert_eq!(pad.tool.brush_color, BLACK);
}
