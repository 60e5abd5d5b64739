use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::Position;
use super::ObjectId;

/// A freeform drawn polyline.
///
/// `points` is a flat `[x0, y0, x1, y1, ...]` array in the object's local
/// space; the position carries the drawing's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    pub id: ObjectId,
    pub position: Position,
    pub points: Vec<f32>,
    pub brush_width: f32,
    pub color: Color32,
}

impl Draw {
    pub fn new(id: ObjectId, x: f32, y: f32, points: Vec<f32>) -> Self {
        Self {
            id,
            position: Position::at(x, y),
            points,
            brush_width: 3.0,
            color: Color32::WHITE,
        }
    }

    /// Number of vertices in the polyline.
    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }
}
