//! Frame-object protocol.

use crate::core::RenderContext;

/// Anything the host calls once to start and then every frame.
///
/// # Lifecycle
///
/// 1. `start()` is called every frame until it returns `true`
/// 2. `update()` is called every frame once started
/// 3. `render()` is called every frame after all updates
///
/// Objects are dropped when the host is dropped; release resources in `Drop`.
pub trait FrameObject {
    /// Prepare the object. Return `false` to be called again next frame.
    fn start(&mut self) -> bool;

    /// Advance object state by one frame.
    fn update(&mut self);

    /// Push this frame's draw commands.
    fn render(&self, rc: &mut RenderContext);

    /// Name used in log messages.
    fn name(&self) -> &str {
        "object"
    }
}
