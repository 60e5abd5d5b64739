use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use super::ObjectId;

// Default half-extents for the built-in object variants
pub const DEFAULT_ACTOR_EXTENT: f32 = 20.0;
pub const DEFAULT_ENEMY_EXTENT: f32 = 32.0;
pub const DEFAULT_WAYMARK_EXTENT: f32 = 15.0;

/// Movable capability: a position that is absolute when detached and
/// parent-frame-relative while attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    /// Position parent. When set, `x`/`y` are an offset in the parent's
    /// local frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ObjectId>,
    /// Marks the object as intentionally fixed at its attachment point.
    #[serde(default)]
    pub pinned: bool,
}

impl Position {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            parent_id: None,
            pinned: false,
        }
    }

    /// The stored coordinates as a point (absolute or relative, depending
    /// on attachment).
    pub fn point(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// The stored coordinates as an offset vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_attached(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Rotatable capability: a stored rotation plus an optional facing target.
///
/// With a target set, the effective rotation is the bearing towards the
/// target plus `rotation` as an offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facing {
    /// Rotation in degrees; an offset when `target_id` is set.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<ObjectId>,
    /// Suppresses facing rendering for objects that attack in all
    /// directions.
    #[serde(default)]
    pub omni: bool,
}

impl Facing {
    pub fn degrees(rotation: f32) -> Self {
        Self {
            rotation,
            target_id: None,
            omni: false,
        }
    }

    pub fn is_facing(&self) -> bool {
        self.target_id.is_some()
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self::degrees(0.0)
    }
}

/// Where an object variant prefers to land when attached to a new parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachAnchor {
    /// Snap to the parent's center.
    Center,
    /// Snap above the parent.
    Top,
    /// Snap to the parent's bottom-right corner.
    BottomRight,
    /// Keep the current absolute position, converted to parent-relative.
    Anywhere,
    /// Never attach when defaulting; explicit attach behaves like
    /// `Anywhere`.
    DontAttachByDefault,
}

impl AttachAnchor {
    /// Point anchors snap to a fixed spot on the parent and therefore
    /// collide when shared by several objects in one batch.
    pub fn is_point_anchor(&self) -> bool {
        matches!(self, Self::Center | Self::Top | Self::BottomRight)
    }
}

/// The list category an object belongs to for positional list actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    Actors,
    Markers,
    Zones,
    Draws,
    Tethers,
}
