use grid_kernel::{KernelError, KernelSolidHandle};
use serde::{Deserialize, Serialize};

/// Result of one lip build: the committed body plus a summary of the
/// subtractive tool set that produced it.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// The finished lip body, the only durable output of the build.
    pub body: KernelSolidHandle,
    /// What was subtracted from the shell.
    pub summary: CutoutSummary,
    /// Non-fatal warnings.
    pub diagnostics: Diagnostics,
}

/// Tool-body census for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoutSummary {
    /// Per-unit socket cutouts (notched branch: one per grid cell;
    /// non-notched branch: exactly one full-span cutout).
    pub unit_cutouts: usize,
    /// Whether the mid-span clearance channel was cut.
    pub has_mid_cutout: bool,
    /// Whether the top rim recess was cut.
    pub has_top_recess: bool,
}

/// Non-fatal diagnostics from a build.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
}

/// Errors from the lip build pipeline. Every step is a hard precondition
/// for the next; the first failure aborts the whole build and no partial
/// body is returned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("invalid dimension {dimension}: {value:.3}")]
    InvalidDimension { dimension: &'static str, value: f64 },

    #[error("degenerate fillet radius {radius:.3} ({context})")]
    DegenerateFillet { radius: f64, context: String },

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("boolean cut produced {pieces} disjoint bodies")]
    NonManifoldResult { pieces: usize },
}
