//! Render error boundary
//!
//! Once a render step fails the boundary keeps showing that failure until
//! `reset` is called; later renders do not run in between.

/// Heading shown in place of a failed widget
pub const FALLBACK_TITLE: &str = "Something went wrong";
pub const FALLBACK_DETAIL: &str = "The widget encountered an error while rendering.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderBoundary<E> {
    Normal,
    Failed(E),
}

impl<E> Default for RenderBoundary<E> {
    fn default() -> Self {
        RenderBoundary::Normal
    }
}

impl<E: Clone> RenderBoundary<E> {
    pub fn new() -> Self {
        RenderBoundary::Normal
    }

    /// Run `f` unless a failure is already captured
    pub fn render<T>(&mut self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let RenderBoundary::Failed(error) = self {
            return Err(error.clone());
        }
        f().map_err(|error| {
            *self = RenderBoundary::Failed(error.clone());
            error
        })
    }

    /// Clear a captured failure
    pub fn reset(&mut self) {
        *self = RenderBoundary::Normal;
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RenderBoundary::Failed(_))
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            RenderBoundary::Failed(error) => Some(error),
            RenderBoundary::Normal => None,
        }
    }
}
