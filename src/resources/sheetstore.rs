//! Sheet definitions and the layout registry.
//!
//! A sheet definition is a small JSON file describing the grid geometry of a
//! sheet texture plus the walk animation cut from it:
//!
//! ```json
//! {
//!   "tile_width": 70,
//!   "tile_height": 70,
//!   "columns": 3,
//!   "frame_count": 3,
//!   "substitutions": [[1, 2]]
//! }
//! ```
//!
//! `substitutions` lists `[frame, tile]` pairs for frames whose sheet slot is
//! a placeholder and must draw a different tile instead.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::sheet::SheetLayout;

#[derive(Debug, Deserialize, Serialize)]
pub struct SheetDef {
    pub tile_width: u32,
    pub tile_height: u32,
    pub columns: u32,
    pub frame_count: u32,
    #[serde(default)]
    pub substitutions: Vec<(u32, u32)>,
}

impl SheetDef {
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = fs::read_to_string(path).map_err(|e| SetupError::SheetDef {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| SetupError::SheetDef {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Validated sheet layouts keyed by sheet name.
#[derive(Resource, Default)]
pub struct SheetStore {
    sheets: FxHashMap<String, SheetLayout>,
}

impl SheetStore {
    pub fn insert(&mut self, key: impl Into<String>, layout: SheetLayout) {
        self.sheets.insert(key.into(), layout);
    }

    pub fn get(&self, key: &str) -> Option<&SheetLayout> {
        self.sheets.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_def_parses_with_substitutions() {
        let def: SheetDef = serde_json::from_str(
            r#"{"tile_width":70,"tile_height":70,"columns":3,"frame_count":3,"substitutions":[[1,2]]}"#,
        )
        .unwrap();
        assert_eq!(def.tile_width, 70);
        assert_eq!(def.columns, 3);
        assert_eq!(def.substitutions, vec![(1, 2)]);
    }

    #[test]
    fn test_sheet_def_substitutions_default_empty() {
        let def: SheetDef = serde_json::from_str(
            r#"{"tile_width":32,"tile_height":32,"columns":11,"frame_count":4}"#,
        )
        .unwrap();
        assert!(def.substitutions.is_empty());
    }

    #[test]
    fn test_store_lookup() {
        let mut store = SheetStore::default();
        store.insert("walker", SheetLayout::new(70, 70, 3).unwrap());
        assert!(store.get("walker").is_some());
        assert!(store.get("missing").is_none());
    }
}
