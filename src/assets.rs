//! Sprite lookup
//!
//! Entities reference sprites by id; the renderer is expected to fall back to
//! a solid shape of the entity's size and a fixed per-kind color whenever the
//! image file is absent, so the game never fails to start over missing art.

use std::path::{Path, PathBuf};

use glam::Vec2;
use log::debug;

/// A resolved sprite file plus its intended draw size
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteHandle {
    pub path: PathBuf,
    pub size: Vec2,
}

/// Resolve `{dir}/{sprite_id}.png`, or `None` when the file does not exist
pub fn try_load(dir: &Path, sprite_id: &str, size: Vec2) -> Option<SpriteHandle> {
    let path = dir.join(format!("{sprite_id}.png"));
    if path.is_file() {
        Some(SpriteHandle { path, size })
    } else {
        debug!("no sprite at {}, using shape fallback", path.display());
        None
    }
}
