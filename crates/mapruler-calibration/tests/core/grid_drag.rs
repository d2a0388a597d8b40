//! Corner and move drags on the calibration grid, including the exact
//! output at the minimum-size clamp.

use mapruler_calibration::{GridModel, GridRect, Handle};
use mapruler_core::Point;

fn drag(model: &mut GridModel, handle: Handle, from: (f64, f64), to: (f64, f64)) {
    model.begin_drag(Point::new(from.0, from.1), handle);
    model.update_drag(Point::new(to.0, to.1));
    model.end_drag();
}

#[test]
fn test_bottom_right_grows_from_top_left() {
    let mut model = GridModel::default();

    // Pointer moves (40, 20); damped to (20, 10)
    drag(&mut model, Handle::BottomRight, (300.0, 300.0), (340.0, 320.0));

    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(100.0, 100.0));
    assert_eq!(rect.size(), 230.0);
}

#[test]
fn test_top_left_formula() {
    let mut model = GridModel::default();

    drag(&mut model, Handle::TopLeft, (100.0, 100.0), (120.0, 140.0));

    // Damped delta (10, 20): size 200 - 10 - 20, position shifted by delta
    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(110.0, 120.0));
    assert_eq!(rect.size(), 170.0);
}

#[test]
fn test_top_right_formula() {
    let mut model = GridModel::default();

    drag(&mut model, Handle::TopRight, (300.0, 100.0), (320.0, 80.0));

    // Damped delta (10, -10): size 200 + 10 + 10, top moves up
    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(100.0, 90.0));
    assert_eq!(rect.size(), 220.0);
    assert_eq!(rect.corner(Handle::BottomLeft).x, 100.0);
}

#[test]
fn test_bottom_left_formula() {
    let mut model = GridModel::default();

    drag(&mut model, Handle::BottomLeft, (100.0, 300.0), (80.0, 320.0));

    // Damped delta (-10, 10): size 200 + 10 + 10, left edge moves left
    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(90.0, 100.0));
    assert_eq!(rect.size(), 220.0);
    assert_eq!(rect.corner(Handle::TopRight).y, 100.0);
}

#[test]
fn test_sequential_drags_start_from_current_grid() {
    let mut model = GridModel::default();

    drag(&mut model, Handle::Move, (200.0, 200.0), (220.0, 220.0));
    assert_eq!(model.rect().position(), Point::new(110.0, 110.0));

    // Second drag picks up from the moved grid, not the original
    drag(&mut model, Handle::BottomRight, (310.0, 310.0), (330.0, 330.0));
    assert_eq!(model.rect().position(), Point::new(110.0, 110.0));
    assert_eq!(model.rect().size(), 220.0);
}

#[test]
fn test_update_after_end_is_ignored() {
    let mut model = GridModel::default();
    drag(&mut model, Handle::Move, (200.0, 200.0), (220.0, 200.0));
    let before = model.rect();
    model.update_drag(Point::new(900.0, 900.0));
    assert_eq!(model.rect(), before);
}

// Clamp boundary: the stored size is clamped but position still follows the
// unclamped formula, so the anchor of the non-bottom-right handles shifts.

#[test]
fn test_clamp_bottom_right_keeps_position() {
    let mut model = GridModel::default();
    drag(&mut model, Handle::BottomRight, (300.0, 300.0), (-100.0, -100.0));
    assert_eq!(model.rect(), GridRect::new(100.0, 100.0, 50.0));
}

#[test]
fn test_clamp_top_left_pins_unclamped_position() {
    let mut model = GridModel::default();
    drag(&mut model, Handle::TopLeft, (100.0, 100.0), (500.0, 500.0));

    // Damped (200, 200): unclamped size -200, stored 50
    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(300.0, 300.0));
    assert_eq!(rect.size(), 50.0);
    assert_eq!(rect.corner(Handle::BottomRight), Point::new(350.0, 350.0));
}

#[test]
fn test_clamp_top_right_pins_unclamped_position() {
    let mut model = GridModel::default();
    drag(&mut model, Handle::TopRight, (300.0, 100.0), (-100.0, 500.0));

    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(100.0, 300.0));
    assert_eq!(rect.size(), 50.0);
    assert_eq!(rect.corner(Handle::BottomLeft), Point::new(100.0, 350.0));
}

#[test]
fn test_clamp_bottom_left_pins_unclamped_position() {
    let mut model = GridModel::default();
    drag(&mut model, Handle::BottomLeft, (100.0, 300.0), (500.0, -100.0));

    let rect = model.rect();
    assert_eq!(rect.position(), Point::new(300.0, 100.0));
    assert_eq!(rect.size(), 50.0);
    assert_eq!(rect.corner(Handle::TopRight), Point::new(350.0, 100.0));
}

#[test]
fn test_clamp_exactly_at_minimum() {
    let mut model = GridModel::default();
    // Damped (-75, -75) shrinks 200 to exactly 50
    drag(&mut model, Handle::BottomRight, (300.0, 300.0), (150.0, 150.0));
    assert_eq!(model.rect().size(), 50.0);
}
