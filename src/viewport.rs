use crate::types::Coord;

/// The current map view. Pan/zoom handlers return the next viewport instead
/// of mutating a shared one, so repeated events are last-write-wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coord,
    pub zoom: f64,
}

impl Viewport {
    pub const fn new(center: Coord, zoom: f64) -> Self {
        Self { center, zoom }
    }

    pub fn moved(self, center: Coord) -> Self {
        Self { center, ..self }
    }

    pub fn zoomed(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }
}

/// The currently selected item, if any (a clicked marker, feature, ...).
/// Click handlers produce the next selection; closing the popup clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    selected: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Selection<T> {
    pub fn select(self, item: T) -> Self {
        Self {
            selected: Some(item),
        }
    }

    pub fn clear(self) -> Self {
        Self { selected: None }
    }

    pub fn current(&self) -> Option<&T> {
        self.selected.as_ref()
    }
}
