//! ECS components for entities.
//!
//! Submodules overview:
//! - [`screenposition`] – screen-space draw position for an entity
//! - [`sprite`] – clipped sprite rendering component
//! - [`walkcycle`] – walk animation state: frame index and scroll offset

pub mod screenposition;
pub mod sprite;
pub mod walkcycle;
