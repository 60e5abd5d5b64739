use serde::{Deserialize, Serialize};

use super::common::Position;
use super::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaymarkKind {
    A,
    B,
    C,
    D,
    One,
    Two,
    Three,
    Four,
}

/// A field waymark. Waymarks only move; they never rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waymark {
    pub id: ObjectId,
    pub kind: WaymarkKind,
    pub position: Position,
}

impl Waymark {
    pub fn new(id: ObjectId, kind: WaymarkKind, x: f32, y: f32) -> Self {
        Self {
            id,
            kind,
            position: Position::at(x, y),
        }
    }
}
