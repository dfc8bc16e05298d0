//! Callback-based consumption for push transports
//!
//! Wraps a tracking session so a push-based live position channel can
//! hand fixes in and have every interested party notified with the
//! resulting snapshot. Processing stays serialized because the adapter
//! owns the session and takes fixes one call at a time.

use crate::api::session::TrackingSession;
use crate::api::types::StatusSnapshot;
use crate::core::PositionFix;
use std::collections::HashMap;

/// Callback invoked with every assembled snapshot
pub type SnapshotCallback = Box<dyn FnMut(&StatusSnapshot) + Send>;

/// Registration handle for a snapshot callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackHandle(u32);

impl CallbackHandle {
    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Push-transport adapter around a tracking session
pub struct CallbackTracker {
    session: TrackingSession,
    callbacks: HashMap<CallbackHandle, SnapshotCallback>,
    next_handle: u32,
}

impl CallbackTracker {
    pub fn new(session: TrackingSession) -> Self {
        Self {
            session,
            callbacks: HashMap::new(),
            next_handle: 0,
        }
    }

    /// Register a snapshot callback; returns the handle needed to
    /// unregister it.
    pub fn register(&mut self, callback: SnapshotCallback) -> CallbackHandle {
        let handle = CallbackHandle(self.next_handle);
        self.next_handle += 1;
        self.callbacks.insert(handle, callback);
        handle
    }

    /// Remove a previously registered callback. Returns whether it was
    /// registered.
    pub fn unregister(&mut self, handle: CallbackHandle) -> bool {
        self.callbacks.remove(&handle).is_some()
    }

    /// Feed one fix, fan the snapshot out to every callback and return it.
    pub fn push_fix(&mut self, fix: &PositionFix) -> StatusSnapshot {
        let snapshot = self.session.advance(fix);
        for callback in self.callbacks.values_mut() {
            callback(&snapshot);
        }
        snapshot
    }

    pub fn session(&self) -> &TrackingSession {
        &self.session
    }
}
