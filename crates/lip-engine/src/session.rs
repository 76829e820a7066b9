use grid_kernel::{KernelBundle, KernelError, KernelSolidHandle};
use uuid::Uuid;

/// A solid or plane created during a build that is not part of its output.
/// The host kernel may retain these in its model history; the session only
/// records them so the build can account for what it created.
#[derive(Debug, Clone)]
pub struct TransientBody {
    pub id: Uuid,
    pub name: String,
    pub handle: KernelSolidHandle,
}

/// Owns kernel access for the duration of one build.
///
/// All intermediate bodies are tracked as transient; `commit` designates
/// exactly one body as the durable output and ends the session. There is
/// no partial commit: a build that fails mid-way leaves nothing designated.
pub struct BuildSession<'k> {
    kernel: &'k mut dyn KernelBundle,
    transient: Vec<TransientBody>,
}

impl<'k> BuildSession<'k> {
    pub fn new(kernel: &'k mut dyn KernelBundle) -> Self {
        Self {
            kernel,
            transient: Vec::new(),
        }
    }

    pub fn kernel(&mut self) -> &mut dyn KernelBundle {
        self.kernel
    }

    /// Record an intermediate body.
    pub fn track(&mut self, name: &str, handle: &KernelSolidHandle) {
        self.transient.push(TransientBody {
            id: Uuid::new_v4(),
            name: name.to_string(),
            handle: handle.clone(),
        });
    }

    pub fn transient_bodies(&self) -> &[TransientBody] {
        &self.transient
    }

    /// Name the given body and hand it back as the single durable output.
    pub fn commit(
        self,
        body: KernelSolidHandle,
        name: &str,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.kernel.name_body(&body, name)?;
        Ok(body)
    }
}
