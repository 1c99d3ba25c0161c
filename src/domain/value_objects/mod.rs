//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_hash;
mod config_warning;
mod hash;
mod widget_resource;

pub use asset_hash::{AssetHash, InvalidAssetHash};
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use widget_resource::WidgetResource;
