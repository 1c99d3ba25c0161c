//! Widget runtime model
//!
//! Host-independent logic behind the gallery and recipe card widgets. The
//! host bridge is passed in as a `HostEnvironment` value; nothing here reads
//! ambient global state.

mod boundary;
mod bridge;
mod card;
mod props;

pub use crate::domain::services::mount_id;
pub use boundary::{RenderBoundary, FALLBACK_DETAIL, FALLBACK_TITLE};
pub use bridge::{BridgeOutcome, HostBridge, HostEnvironment};
pub use card::{add, quick_facts_line, view_recipe, SELECT_MESSAGE_TYPE};
pub use props::{resolve_gallery_props, resolve_props};
