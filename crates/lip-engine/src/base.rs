use grid_kernel::{KernelBundle, KernelError, KernelSolidHandle};

/// Parameters for one base-with-clearance cutout body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCutoutRequest {
    pub base_width: f64,
    pub base_length: f64,
    pub xy_tolerance: f64,
    pub has_bottom_chamfer: bool,
}

/// External collaborator producing the peg/socket profile that mates bins
/// to a grid. The lip pipeline treats it as opaque: it only requires the
/// returned body to sit at the grid origin with its top face at z = 0, so
/// the pipeline can lift it to the lip elevation afterwards.
pub trait BaseGenerator {
    fn create_base_with_clearance(
        &mut self,
        kernel: &mut dyn KernelBundle,
        request: &BaseCutoutRequest,
    ) -> Result<KernelSolidHandle, KernelError>;
}
