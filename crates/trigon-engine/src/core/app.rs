/// Control directive returned by event handlers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Lifecycle notification delivered by the host.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HostEvent<W> {
    /// A native window can be rendered to. `None` when the host reported the
    /// event without a usable handle.
    WindowAvailable(Option<W>),

    /// The native window is about to go away; everything bound to it must be
    /// released before the dispatch returns.
    WindowLost,

    WindowResized { width: u32, height: u32 },

    /// The host wants the process to wind down.
    DestroyRequested,
}

/// Host event system, drained without blocking.
pub trait HostEventSource {
    type Window;

    /// Delivers every pending event to `dispatch`, in order, and returns as
    /// soon as the queue is empty.
    fn pump(&mut self, dispatch: &mut dyn FnMut(HostEvent<Self::Window>));

    /// Checked once per loop iteration, before pumping.
    fn destroy_requested(&self) -> bool;
}
