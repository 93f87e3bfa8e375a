//! Error types.
//!
//! Setup failures are tagged by the step that failed so a startup abort names
//! its cause. Sheet geometry problems are their own class and are raised at
//! configuration time, before the loop starts. Draw failures are recoverable
//! per frame; only a run of consecutive failures stops the loop.

use std::path::PathBuf;

use thiserror::Error;

/// Tile-sheet geometry rejected at configuration time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    /// A geometry field that must be non-zero was zero.
    #[error("sheet geometry field `{0}` must be non-zero")]
    InvalidGeometry(&'static str),

    /// The layout addresses pixels outside the loaded texture.
    #[error(
        "sheet layout needs {need_width}x{need_height} pixels but the texture is {tex_width}x{tex_height}"
    )]
    ExceedsTexture {
        need_width: u64,
        need_height: u64,
        tex_width: u32,
        tex_height: u32,
    },
}

/// A collaborator failed to initialize. Fatal; the loop never starts.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("window initialization failed: {0}")]
    Window(String),

    #[error("could not load sheet texture {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },

    #[error("could not read sheet definition {path:?}: {reason}")]
    SheetDef { path: PathBuf, reason: String },

    #[error("invalid sheet geometry: {0}")]
    Geometry(#[from] SheetError),
}

/// A clear/draw/present call failed mid-loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("draw call failed: {0}")]
pub struct DrawError(pub String);

/// Top-level failure of the engine run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// The display collaborator failed too many frames in a row.
    #[error("renderer degraded after {failures} consecutive draw failures")]
    RendererDegraded {
        failures: u32,
        #[source]
        last: DrawError,
    },
}
