use serde::{Deserialize, Serialize};

use super::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TetherKind {
    Line,
    Close,
    Far,
    MinusMinus,
    PlusMinus,
}

/// A tether between two objects. Owns no position of its own; both ends
/// resolve through the referenced objects, and either reference may dangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tether {
    pub id: ObjectId,
    pub start_id: ObjectId,
    pub end_id: ObjectId,
    pub kind: TetherKind,
}

impl Tether {
    pub fn new(id: ObjectId, start_id: ObjectId, end_id: ObjectId, kind: TetherKind) -> Self {
        Self {
            id,
            start_id,
            end_id,
            kind,
        }
    }

    pub fn references(&self, id: ObjectId) -> bool {
        self.start_id == id || self.end_id == id
    }
}
