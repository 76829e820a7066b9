use grid_kernel::{KernelBundle, KernelError, KernelSolidHandle, MockKernel};
use grid_types::{LipSpec, BIN_BASE_HEIGHT};
use lip_engine::{build_lip, BaseCutoutRequest, BaseGenerator, BuildError, BuildOutput};

/// Errors from harness helpers and assertions.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("build failed: {0}")]
    Build(#[from] BuildError),

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

/// Depth of the straight lead-in section at the top of the socket profile.
const SOCKET_LEAD_DEPTH: f64 = 2.15;

/// How far the socket narrows below the lead-in section.
const SOCKET_TAPER_INSET: f64 = 1.8;

/// Base-generator double that mimics the tapered socket profile with two
/// stacked slabs: a full-opening lead-in over a narrower lower section.
/// Close enough in shape that material-removal comparisons between the
/// notched and full-span branches behave like the real profile.
pub struct SocketBaseGenerator;

impl BaseGenerator for SocketBaseGenerator {
    fn create_base_with_clearance(
        &mut self,
        kernel: &mut dyn KernelBundle,
        request: &BaseCutoutRequest,
    ) -> Result<KernelSolidHandle, KernelError> {
        let opening_width = request.base_width - 2.0 * request.xy_tolerance;
        let opening_length = request.base_length - 2.0 * request.xy_tolerance;
        let lead = kernel.box_at_point(
            opening_width,
            opening_length,
            SOCKET_LEAD_DEPTH,
            [
                request.xy_tolerance,
                request.xy_tolerance,
                -SOCKET_LEAD_DEPTH,
            ],
        )?;
        let lower = kernel.box_at_point(
            opening_width - 2.0 * SOCKET_TAPER_INSET,
            opening_length - 2.0 * SOCKET_TAPER_INSET,
            BIN_BASE_HEIGHT - SOCKET_LEAD_DEPTH,
            [
                request.xy_tolerance + SOCKET_TAPER_INSET,
                request.xy_tolerance + SOCKET_TAPER_INSET,
                -BIN_BASE_HEIGHT,
            ],
        )?;
        kernel.union_many(&lead, &[lower])
    }
}

/// Mock kernel plus socket double, ready to run lip builds.
pub struct LipFixture {
    pub kernel: MockKernel,
    base: SocketBaseGenerator,
}

impl LipFixture {
    pub fn new() -> Self {
        Self {
            kernel: MockKernel::new(),
            base: SocketBaseGenerator,
        }
    }

    pub fn build(&mut self, spec: &LipSpec) -> Result<BuildOutput, BuildError> {
        build_lip(spec, &mut self.kernel, &mut self.base)
    }
}

impl Default for LipFixture {
    fn default() -> Self {
        Self::new()
    }
}
