use egui::emath::Rot2;
use egui::{Pos2, Vec2};

/// Rotate an offset expressed in a parent's local frame into world space.
///
/// Rotations are stored in degrees, 0 pointing up (negative y), increasing
/// clockwise in screen coordinates.
pub fn rotate_offset(offset: Vec2, degrees: f32) -> Vec2 {
    Rot2::from_angle(degrees.to_radians()) * offset
}

/// Map a world-space offset into the local frame of a parent rotated by
/// `degrees`. Inverse of [`rotate_offset`].
pub fn unrotate_offset(offset: Vec2, degrees: f32) -> Vec2 {
    Rot2::from_angle(degrees.to_radians()).inverse() * offset
}

/// Bearing from one point to another, in degrees.
///
/// Uses the same convention as stored rotations: 0 is up, clockwise
/// positive. Coincident points yield 0.
pub fn bearing(from: Pos2, to: Pos2) -> f32 {
    let delta = to - from;
    delta.x.atan2(-delta.y).to_degrees()
}

/// Normalize an angle in degrees to the `[0, 360)` range.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}
