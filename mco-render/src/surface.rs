//! Drawing targets and the single-instance slot that owns them.

use std::cell::RefCell;
use thiserror::Error;

/// A surface refused or failed to draw a figure.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// A drawing target backed by an external plotting library.
///
/// `draw` creates a new instance and returns a handle to it; `dispose` tears
/// that instance down completely.
pub trait Surface {
    type Figure;
    type Handle;

    fn draw(&self, figure: &Self::Figure) -> Result<Self::Handle, RenderError>;

    fn dispose(&self, handle: Self::Handle);
}

/// Owns a surface and at most one live instance drawn on it.
pub struct Slot<S: Surface> {
    surface: S,
    current: RefCell<Option<S::Handle>>,
}

impl<S: Surface> Slot<S> {
    pub fn new(surface: S) -> Self {
        Slot {
            surface,
            current: RefCell::new(None),
        }
    }

    /// Dispose the previous instance, then draw `figure` as the new one.
    ///
    /// If drawing fails the slot is left empty.
    pub fn replace(&self, figure: &S::Figure) -> Result<(), RenderError> {
        self.clear();
        let handle = self.surface.draw(figure)?;
        *self.current.borrow_mut() = Some(handle);
        Ok(())
    }

    /// Dispose the live instance, if any.
    pub fn clear(&self) {
        let previous = self.current.borrow_mut().take();
        if let Some(handle) = previous {
            self.surface.dispose(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
