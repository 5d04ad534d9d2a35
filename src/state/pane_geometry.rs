//! Width and offset of the resizable output pane.
//!
//! DESIGN
//! ======
//! The pane is anchored to the right edge of its container and grows to the
//! left with a negative `translateX` offset. Its maximum width depends on
//! whether the module library is open, so every resize, library toggle and
//! drag end recomputes geometry from scratch instead of nudging it.
//!
//! Dragging keeps a live offset in `PaneState::Dragging`; committed geometry
//! is only rewritten when the drag ends.

#[cfg(test)]
#[path = "pane_geometry_test.rs"]
mod pane_geometry_test;

/// Slack used when comparing percentages computed along different paths.
const PERCENT_EPSILON: f64 = 1e-9;

/// Pixel constants for the library-dependent layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryConfig {
    /// Viewport space reserved beside the pane when the library is open.
    pub max_width_offset_open_px: f64,
    /// Viewport space reserved beside the pane when the library is closed.
    pub max_width_offset_closed_px: f64,
    /// Horizontal shift applied when the library opens or closes.
    pub library_shift_px: f64,
    /// Max width before the first recompute.
    pub initial_max_width_percent: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            max_width_offset_open_px: 240.0,
            max_width_offset_closed_px: 100.0,
            library_shift_px: 140.0,
            initial_max_width_percent: 300.0,
        }
    }
}

/// Measurements and layout flags feeding a recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneInputs {
    pub container_width_px: f64,
    pub viewport_width_px: f64,
    pub library_open: bool,
    /// `true` when the library open state just flipped, `false` for a plain resize.
    pub library_toggled: bool,
}

/// Committed pane geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaneGeometry {
    pub width_percent: f64,
    pub left_offset_px: f64,
    pub max_width_percent: f64,
    /// Offset that drags are measured from.
    pub base_offset_px: f64,
    /// Container width the percentages were computed against.
    pub base_width_px: f64,
}

impl Default for PaneGeometry {
    fn default() -> Self {
        Self::initial(&GeometryConfig::default())
    }
}

impl PaneGeometry {
    pub fn initial(config: &GeometryConfig) -> Self {
        Self {
            width_percent: 100.0,
            left_offset_px: 0.0,
            max_width_percent: config.initial_max_width_percent,
            base_offset_px: 0.0,
            base_width_px: 0.0,
        }
    }

    /// Whether the pane reaches past its container over sibling content.
    pub fn overlapping(&self) -> bool {
        self.left_offset_px < 0.0
    }

    /// CSS width value, e.g. `"120%"`.
    pub fn width_css(&self) -> String {
        format!("{}%", self.width_percent)
    }

    pub fn max_width_css(&self) -> String {
        format!("{}%", self.max_width_percent)
    }

    /// Recompute geometry from the previous state and fresh measurements.
    #[allow(clippy::float_cmp)]
    pub fn recompute(&self, inputs: PaneInputs, config: &GeometryConfig) -> Self {
        let container = inputs.container_width_px;
        if container <= 0.0 {
            return *self;
        }

        let (max_width_offset, library_offset) = if inputs.library_open {
            (config.max_width_offset_open_px, -config.library_shift_px)
        } else {
            (config.max_width_offset_closed_px, config.library_shift_px)
        };
        let library_offset = if inputs.library_toggled { library_offset } else { 0.0 };

        let mut offset = self.left_offset_px + library_offset;
        let mut width = if offset >= 0.0 || self.left_offset_px == 0.0 {
            offset = 0.0;
            100.0
        } else {
            (container - offset) / container * 100.0
        };

        let max_width = (inputs.viewport_width_px - max_width_offset) / container * 100.0;
        if width > max_width + PERCENT_EPSILON {
            offset += container * (width - max_width) / 100.0;
            width = max_width;
        }
        // A viewport narrower than container + reserved space cannot pull the
        // pane below its container width; it stays docked.
        if offset > 0.0 {
            offset = 0.0;
            width = 100.0;
        }

        Self {
            width_percent: width,
            left_offset_px: offset,
            max_width_percent: max_width,
            base_offset_px: offset,
            base_width_px: container,
        }
    }

    /// Clamp a drag delta so the width stays within `[100%, max]`.
    fn clamp_drag_delta(&self, delta_px: f64) -> f64 {
        if self.base_width_px <= 0.0 {
            return delta_px;
        }
        let min_delta = (100.0 - self.width_percent) * self.base_width_px / 100.0;
        let max_delta = (self.max_width_percent - self.width_percent) * self.base_width_px / 100.0;
        delta_px.min(max_delta).max(min_delta)
    }
}

/// Pane geometry with an optional drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaneState {
    Committed(PaneGeometry),
    Dragging {
        geometry: PaneGeometry,
        live_offset_px: f64,
    },
}

impl Default for PaneState {
    fn default() -> Self {
        Self::Committed(PaneGeometry::default())
    }
}

impl PaneState {
    pub fn geometry(&self) -> &PaneGeometry {
        match self {
            Self::Committed(geometry) | Self::Dragging { geometry, .. } => geometry,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Offset to render: the live drag offset while dragging.
    pub fn offset_px(&self) -> f64 {
        match self {
            Self::Committed(geometry) => geometry.left_offset_px,
            Self::Dragging { live_offset_px, .. } => *live_offset_px,
        }
    }

    /// Width to render. Follows the drag so the right edge stays put.
    pub fn width_percent(&self) -> f64 {
        match self {
            Self::Committed(geometry) => geometry.width_percent,
            Self::Dragging {
                geometry,
                live_offset_px,
            } => {
                if geometry.base_width_px <= 0.0 {
                    return geometry.width_percent;
                }
                let delta = geometry.base_offset_px - live_offset_px;
                geometry.width_percent + delta * 100.0 / geometry.base_width_px
            }
        }
    }

    /// Recompute committed geometry. A drag in progress keeps its live offset.
    pub fn recompute(&mut self, inputs: PaneInputs, config: &GeometryConfig) {
        match self {
            Self::Committed(geometry) | Self::Dragging { geometry, .. } => {
                *geometry = geometry.recompute(inputs, config);
            }
        }
    }

    pub fn drag_start(&mut self) {
        let geometry = *self.geometry();
        *self = Self::Dragging {
            geometry,
            live_offset_px: geometry.base_offset_px,
        };
    }

    /// Track a drag that has widened the pane by `delta_width_px` so far.
    pub fn drag_move(&mut self, delta_width_px: f64) {
        if let Self::Dragging {
            geometry,
            live_offset_px,
        } = self
        {
            let delta = geometry.clamp_drag_delta(delta_width_px);
            *live_offset_px = geometry.base_offset_px - delta;
        }
    }

    /// Finish a drag and fold it into committed geometry.
    ///
    /// Returns whether the pane now overlaps sibling content.
    pub fn drag_end(&mut self, delta_width_px: f64) -> bool {
        let Self::Dragging { geometry, .. } = *self else {
            return self.geometry().overlapping();
        };
        let delta = geometry.clamp_drag_delta(delta_width_px);
        let width_percent = if geometry.base_width_px > 0.0 {
            geometry.width_percent + delta * 100.0 / geometry.base_width_px
        } else {
            geometry.width_percent
        };
        let offset = geometry.base_offset_px - delta;
        let committed = PaneGeometry {
            width_percent,
            left_offset_px: offset,
            base_offset_px: offset,
            ..geometry
        };
        *self = Self::Committed(committed);
        committed.overlapping()
    }
}
