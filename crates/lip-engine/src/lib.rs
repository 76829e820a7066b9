pub mod base;
pub mod dims;
pub mod faces;
pub mod lip;
pub mod session;
pub mod types;

pub use base::{BaseCutoutRequest, BaseGenerator};
pub use dims::{CutoutPlan, LipDimensions};
pub use faces::{inner_cutout_scoop_face, top_face};
pub use lip::build_lip;
pub use session::{BuildSession, TransientBody};
pub use types::{BuildError, BuildOutput, CutoutSummary, Diagnostics};
