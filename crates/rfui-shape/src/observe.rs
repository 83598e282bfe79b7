//! Content-box dimension observation.
//!
//! The host layout system reports sizes into [`DimensionObserver::record`]
//! as layout runs; [`DimensionObserver::flush`], called once per event-loop
//! turn, delivers at most one coalesced notification per surface. Each
//! surface has exactly one subscriber, released by dropping its
//! [`Subscription`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::geom::Size;

/// Host-assigned identifier for a measurable surface (one per panel root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// The only failure in this crate: a surface already has its one subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserveError {
    AlreadyObserved(SurfaceId),
}

impl fmt::Display for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyObserved(id) => write!(f, "{id} already has a subscriber"),
        }
    }
}

impl std::error::Error for ObserveError {}

type Callback = Box<dyn FnMut(Size)>;

struct Entry {
    /// Taken out of the entry for the duration of a delivery, so a callback
    /// that re-enters the observer cannot alias a `RefCell` borrow.
    callback: Option<Callback>,
    pending: Option<Size>,
}

#[derive(Default)]
struct Registry {
    entries: HashMap<SurfaceId, Entry>,
}

/// Registry mapping surfaces to their single subscriber callback.
///
/// Single-threaded by design: notifications, interaction events and
/// rendering share one event loop, so the registry lives behind
/// `Rc<RefCell>` rather than a lock. Clones are cheap handles onto the same
/// registry.
#[derive(Default, Clone)]
pub struct DimensionObserver {
    registry: Rc<RefCell<Registry>>,
}

impl DimensionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `callback` to content-box updates for `surface`.
    ///
    /// The subscription lives until the returned handle is dropped. A second
    /// subscriber on a live surface is refused rather than silently
    /// replacing the first.
    pub fn observe(
        &self,
        surface: SurfaceId,
        callback: impl FnMut(Size) + 'static,
    ) -> Result<Subscription, ObserveError> {
        let mut reg = self.registry.borrow_mut();
        if reg.entries.contains_key(&surface) {
            return Err(ObserveError::AlreadyObserved(surface));
        }
        reg.entries.insert(
            surface,
            Entry { callback: Some(Box::new(callback)), pending: None },
        );
        log::debug!("observe {surface}");
        Ok(Subscription {
            surface,
            registry: Rc::downgrade(&self.registry),
        })
    }

    /// Stores the latest measured size for `surface`.
    ///
    /// Multiple records between flushes coalesce to the last one. Records
    /// for a detached or never-observed surface are dropped silently — a
    /// pending layout result racing an unmount is a normal occurrence, not
    /// an error.
    pub fn record(&self, surface: SurfaceId, size: Size) {
        let mut reg = self.registry.borrow_mut();
        match reg.entries.get_mut(&surface) {
            Some(entry) => entry.pending = Some(size),
            None => log::trace!("record for detached {surface} dropped"),
        }
    }

    /// Delivers at most one pending notification per surface, in ascending
    /// surface-id order.
    pub fn flush(&self) {
        let mut due: Vec<SurfaceId> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|(_, e)| e.pending.is_some())
            .map(|(&id, _)| id)
            .collect();
        due.sort_unstable();

        for surface in due {
            let taken = {
                let mut reg = self.registry.borrow_mut();
                reg.entries.get_mut(&surface).and_then(|entry| {
                    let size = entry.pending.take()?;
                    let cb = entry.callback.take()?;
                    Some((cb, size))
                })
            };
            let Some((mut cb, size)) = taken else { continue };

            log::trace!("notify {surface}: {}x{}", size.width(), size.height());
            cb(size);

            // The subscriber may have unobserved itself — or unobserved and
            // re-observed, installing a replacement callback — during
            // delivery. Restore only into an entry still waiting for its
            // callback; a fresh entry keeps its own.
            let mut reg = self.registry.borrow_mut();
            if let Some(entry) = reg.entries.get_mut(&surface) {
                if entry.callback.is_none() {
                    entry.callback = Some(cb);
                }
            }
        }
    }

    pub fn is_observed(&self, surface: SurfaceId) -> bool {
        self.registry.borrow().entries.contains_key(&surface)
    }
}

/// Live subscription handle. Dropping it unsubscribes; any pending record
/// for the surface is discarded with it, so no notification can fire after
/// the drop completes.
#[derive(Debug)]
pub struct Subscription {
    surface: SurfaceId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    #[inline]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Explicit alias for dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().entries.remove(&self.surface);
            log::debug!("unobserve {}", self.surface);
        }
    }
}
