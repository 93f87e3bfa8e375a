//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance the walk cycle on input, wrap it, sync sprites
//! - [`render`] – draw sprite entities through the canvas seam

pub mod animation;
pub mod render;
