use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::{Facing, Position};
use super::ObjectId;

/// Geometry of an area-of-effect zone, in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneShape {
    Circle { radius: f32 },
    Donut { inner_radius: f32, outer_radius: f32 },
    Cone { radius: f32, angle: f32 },
    Rect { width: f32, height: f32 },
    Line { length: f32, width: f32 },
}

impl ZoneShape {
    /// Half-extent of the shape's bounding square, used for anchor points.
    pub fn extent(&self) -> f32 {
        match *self {
            ZoneShape::Circle { radius } => radius,
            ZoneShape::Donut { outer_radius, .. } => outer_radius,
            ZoneShape::Cone { radius, .. } => radius,
            ZoneShape::Rect { width, height } => width.max(height) / 2.0,
            ZoneShape::Line { length, width } => length.max(width) / 2.0,
        }
    }
}

/// An area-of-effect zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ObjectId,
    pub shape: ZoneShape,
    pub position: Position,
    #[serde(default)]
    pub facing: Facing,
    pub color: Color32,
    /// Fill opacity in percent, 0-100.
    #[serde(default = "Zone::default_opacity")]
    pub opacity: u8,
}

impl Zone {
    pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(255, 140, 0);

    pub fn new(id: ObjectId, shape: ZoneShape, x: f32, y: f32) -> Self {
        Self {
            id,
            shape,
            position: Position::at(x, y),
            facing: Facing::default(),
            color: Self::DEFAULT_COLOR,
            opacity: Self::default_opacity(),
        }
    }

    fn default_opacity() -> u8 {
        35
    }
}
