//! Domain Services
//!
//! Stateless logic used by the application layer.

pub mod discovery;
pub mod renderer;

pub use discovery::{is_inline_target, resolve_triplet, select_targets};
pub use renderer::{mount_id, render_document};
