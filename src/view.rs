//! View-change tracking
//!
//! Caller-owned poll-and-compare state for hosts that want to re-anchor the
//! axes gizmo when the camera moves. The host calls [`ViewTracker::poll`]
//! from its per-frame (or per-view-change) hook; once the tracked object is
//! gone it calls [`ViewTracker::retire`], which is idempotent. This replaces
//! a callback holding global mutable state plus a spawned cleanup thread.

/// The host's 18-value view state: 3×3 rotation, camera position, origin,
/// clipping planes and orthoscopic flag.
pub type ViewState = [f32; 18];

/// Last-seen view with idempotent retirement
#[derive(Debug, Default, Clone)]
pub struct ViewTracker {
    prev: Option<ViewState>,
    retired: bool,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `view` against the last-seen state.
    ///
    /// Returns true when the view changed (including the very first poll)
    /// and the tracker is still live; the caller should then re-issue its
    /// placement. Returns false for an unchanged view or a retired tracker.
    pub fn poll(&mut self, view: &ViewState) -> bool {
        if self.retired {
            return false;
        }
        if self.prev.as_ref() == Some(view) {
            return false;
        }
        self.prev = Some(*view);
        true
    }

    /// Stop tracking; safe to call more than once
    pub fn retire(&mut self) {
        self.retired = true;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}
