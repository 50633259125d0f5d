use alloc::sync::Arc;
use alloc::vec::Vec;

use spindle::ScrollPhase;

pub type PhaseListener = Arc<dyn Fn(ScrollPhase) + Send + Sync>;
pub type ScrollListener = Arc<dyn Fn(i64, i64) + Send + Sync>;
pub type SelectionListener = Arc<dyn Fn(usize) + Send + Sync>;

/// Fan-out point for picker notifications.
///
/// Phase and scroll events are raw pass-throughs for observers that want
/// continuous feedback. Selection events are deduplicated: at most one
/// notification per settle, and only when the settled index differs from the
/// last one reported (or none was reported since the last reconfiguration).
#[derive(Clone, Default)]
pub struct Dispatcher {
    phase: Vec<PhaseListener>,
    scroll: Vec<ScrollListener>,
    selection: Vec<SelectionListener>,
    last_notified: Option<usize>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_phase_changed(&mut self, f: impl Fn(ScrollPhase) + Send + Sync + 'static) {
        self.phase.push(Arc::new(f));
    }

    pub fn on_scrolled(&mut self, f: impl Fn(i64, i64) + Send + Sync + 'static) {
        self.scroll.push(Arc::new(f));
    }

    pub fn on_value_selected(&mut self, f: impl Fn(usize) + Send + Sync + 'static) {
        self.selection.push(Arc::new(f));
    }

    /// The most recent index reported to selection listeners.
    pub fn last_notified(&self) -> Option<usize> {
        self.last_notified
    }

    /// Forgets the last reported selection; the next settle always notifies.
    pub fn reset(&mut self) {
        self.last_notified = None;
    }

    pub(crate) fn phase_changed(&self, phase: ScrollPhase) {
        for f in &self.phase {
            f(phase);
        }
    }

    pub(crate) fn scrolled(&self, delta_main: i64, delta_cross: i64) {
        for f in &self.scroll {
            f(delta_main, delta_cross);
        }
    }

    /// Reports a committed settle on `index`. Returns whether selection
    /// listeners were actually notified.
    pub(crate) fn settled(&mut self, index: usize) -> bool {
        if self.last_notified == Some(index) {
            return false;
        }
        self.last_notified = Some(index);
        for f in &self.selection {
            f(index);
        }
        true
    }
}

impl core::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("phase_listeners", &self.phase.len())
            .field("scroll_listeners", &self.scroll.len())
            .field("selection_listeners", &self.selection.len())
            .field("last_notified", &self.last_notified)
            .finish()
    }
}
