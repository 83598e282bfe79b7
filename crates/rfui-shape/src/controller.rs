//! Per-panel controller binding one dimension subscription to the shape
//! function.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geom::Size;
use crate::observe::{DimensionObserver, ObserveError, Subscription, SurfaceId};
use crate::shape::{PanelShape, ShapeParams};

/// Interaction flags forwarded, unmodified, from the tile to the renderer.
///
/// The controller never interprets these; they ride along with the geometry
/// readout so a renderer has one place to look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFlags {
    pub selected: bool,
    pub hovered: bool,
    pub disabled: bool,
}

/// Measurement state of a mounted panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureState {
    /// No observation yet — geometry uses the params' fallback size.
    Unmeasured,
    /// At least one observation has been delivered.
    Measured,
}

struct ControllerState {
    params: ShapeParams,
    size: Size,
    measured: bool,
    flags: InteractionFlags,
    shape: PanelShape,
    revision: u64,
}

impl ControllerState {
    /// Recomputes the shape and bumps the revision only when the output
    /// actually changed — renderers key re-renders off `revision`, so an
    /// update that lands on identical geometry stays invisible to them.
    fn recompute(&mut self) {
        let next = self.params.compute(self.size);
        if next != self.shape {
            self.shape = next;
            self.revision += 1;
        }
    }
}

/// Glues one [`DimensionObserver`] subscription to [`crate::shape::panel_shape`]
/// for a single panel.
///
/// The controller is the mount handle: dropping it (or calling
/// [`unmount`](Self::unmount)) releases the subscription. Geometry is
/// available immediately after [`mount`](Self::mount), computed from the
/// fallback size, and tracks every delivered observation afterwards.
pub struct PanelShapeController {
    state: Rc<RefCell<ControllerState>>,
    subscription: Option<Subscription>,
}

impl PanelShapeController {
    /// Starts observing `surface` and returns the live handle.
    pub fn mount(
        observer: &DimensionObserver,
        surface: SurfaceId,
        params: ShapeParams,
    ) -> Result<Self, ObserveError> {
        let size = params.fallback;
        let state = Rc::new(RefCell::new(ControllerState {
            shape: params.compute(size),
            params,
            size,
            measured: false,
            flags: InteractionFlags::default(),
            revision: 0,
        }));

        let shared = Rc::clone(&state);
        let subscription = observer.observe(surface, move |size| {
            let mut st = shared.borrow_mut();
            st.measured = true;
            st.size = size;
            st.recompute();
        })?;

        log::debug!("panel mounted on {surface}");
        Ok(Self { state, subscription: Some(subscription) })
    }

    /// Applies new shape parameters and recomputes immediately from the
    /// currently known dimensions, without waiting for an observation.
    pub fn set_params(&self, params: ShapeParams) {
        let mut st = self.state.borrow_mut();
        st.params = params;
        st.recompute();
    }

    /// Stores interaction flags for the renderer. Never touches geometry.
    pub fn set_flags(&self, flags: InteractionFlags) {
        self.state.borrow_mut().flags = flags;
    }

    /// Releases the subscription. Idempotent; once it returns, no further
    /// observation reaches this controller even if a record was pending.
    pub fn unmount(&mut self) {
        if let Some(sub) = self.subscription.take() {
            log::debug!("panel unmounted from {}", sub.surface());
            sub.cancel();
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn measure_state(&self) -> MeasureState {
        if self.state.borrow().measured {
            MeasureState::Measured
        } else {
            MeasureState::Unmeasured
        }
    }

    /// Currently known dimensions (fallback until first observation).
    pub fn size(&self) -> Size {
        self.state.borrow().size
    }

    pub fn params(&self) -> ShapeParams {
        self.state.borrow().params
    }

    pub fn flags(&self) -> InteractionFlags {
        self.state.borrow().flags
    }

    /// Current geometry readout.
    pub fn shape(&self) -> PanelShape {
        self.state.borrow().shape
    }

    /// Monotonic counter that changes exactly when [`shape`](Self::shape)
    /// changes by value.
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }
}

impl Drop for PanelShapeController {
    fn drop(&mut self) {
        self.unmount();
    }
}
