//! Saving and loading scenes as JSON.
//!
//! The on-disk form is a small envelope (`version` + `scene`); every load
//! runs the schema upgrade pass first, so documents written by older
//! releases keep opening.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::scene::Scene;
use crate::upgrade::{self, SCENE_FORMAT_VERSION};

/// Errors that can occur while persisting or restoring a scene.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to encode scene: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene format version {0} is newer than this build supports")]
    UnsupportedVersion(u32),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Where a scene lives. Opaque to the editing core; the store just holds
/// on to it so external collaborators can save back to the same place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SceneSource {
    /// A file on disk.
    File { path: String },
    /// A named slot in browser/local storage.
    Slot { id: Uuid, name: String },
}

impl SceneSource {
    pub fn file(path: impl Into<String>) -> Self {
        SceneSource::File { path: path.into() }
    }

    /// A fresh storage slot with a random identity.
    pub fn new_slot(name: impl Into<String>) -> Self {
        SceneSource::Slot {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SceneSource::File { path } => path,
            SceneSource::Slot { name, .. } => name,
        }
    }
}

/// The persisted file envelope.
#[derive(Debug, Serialize, Deserialize)]
struct SceneEnvelope {
    version: u32,
    scene: Scene,
}

/// Encode a scene as pretty-printed JSON in the current format version.
pub fn scene_to_json(scene: &Scene) -> PersistenceResult<String> {
    let envelope = SceneEnvelope {
        version: SCENE_FORMAT_VERSION,
        scene: scene.clone(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Decode a scene from JSON, upgrading older format versions in place.
pub fn scene_from_json(json: &str) -> PersistenceResult<Scene> {
    let mut value: serde_json::Value = serde_json::from_str(json)?;
    let version = upgrade::envelope_version(&value);
    if version > SCENE_FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(version));
    }
    upgrade::upgrade_scene_value(&mut value);
    let envelope: SceneEnvelope = serde_json::from_value(value)?;
    Ok(envelope.scene)
}

pub fn save_scene(path: impl AsRef<Path>, scene: &Scene) -> PersistenceResult<()> {
    let path = path.as_ref();
    fs::write(path, scene_to_json(scene)?)?;
    log::info!("saved scene to {}", path.display());
    Ok(())
}

pub fn load_scene(path: impl AsRef<Path>) -> PersistenceResult<Scene> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let scene = scene_from_json(&json)?;
    log::info!("loaded scene from {}", path.display());
    Ok(scene)
}
