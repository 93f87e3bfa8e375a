//! Spritewalk library.
//!
//! Exposes the components, resources, systems, platform seams, and the frame
//! loop for use by the binary and the integration tests.

pub mod components;
pub mod engine;
pub mod error;
pub mod platform;
pub mod resources;
pub mod sheet;
pub mod systems;
