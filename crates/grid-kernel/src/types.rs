use serde::{Deserialize, Serialize};

/// Opaque handle to a solid in the geometry kernel.
/// Valid only for the current kernel session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Transient kernel-internal entity identifier (faces, edges).
/// Stable within one kernel session but not across rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelId(pub u64);

/// Handle to a construction plane retained in the kernel's model history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneId(pub u64);

/// Handle to an evaluated closed sketch profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub u64);

/// Signed extrusion direction relative to the sketch plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtentDirection {
    Positive,
    Negative,
}

/// One axis of a spacing-based rectangular pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternAxis {
    /// Instance count including the seed body.
    pub count: u32,
    /// Centre-to-centre spacing between instances.
    pub spacing: f64,
}

impl PatternAxis {
    pub fn new(count: u32, spacing: f64) -> Self {
        Self { count, spacing }
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("construction plane failed: {reason}")]
    PlaneFailed { reason: String },

    #[error("sketch profile failed: {reason}")]
    ProfileFailed { reason: String },

    #[error("extrude failed: {reason}")]
    ExtrudeFailed { reason: String },

    #[error("fillet failed: {reason}")]
    FilletFailed { reason: String },

    #[error("pattern failed: {reason}")]
    PatternFailed { reason: String },

    #[error("move failed: {reason}")]
    MoveFailed { reason: String },

    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("solid not found: handle {handle}")]
    SolidNotFound { handle: u64 },

    #[error("entity not found: {id:?}")]
    EntityNotFound { id: KernelId },

    #[error("kernel error: {message}")]
    Other { message: String },
}
