//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – window, sheet, and walk settings loaded from an INI file
//! - `input` – per-tick key state drained from the window's event queue
//! - `sheetstore` – sheet definitions from JSON and validated layouts by key
//! - `texturestore` – loaded textures keyed by string IDs

pub mod gameconfig;
pub mod input;
pub mod sheetstore;
pub mod texturestore;
