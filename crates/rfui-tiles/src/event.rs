/// Interaction events routed to a tile.
///
/// Hit-testing happens host-side against the tile's clip polygon, so events
/// arrive pre-resolved rather than carrying a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// Primary button pressed and released over the tile.
    Click,
    /// Cursor entered the tile's clip region.
    HoverEnter,
    /// Cursor left the tile's clip region.
    HoverLeave,
}

/// Result returned by a tile's `on_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
