//! Widget props resolution
//!
//! Sources, highest priority first: props injected with the page,
//! the host's structured tool output, then an empty default. A source whose
//! value does not deserialize is skipped.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entities::GalleryProps;

use super::bridge::HostEnvironment;

fn parse<T: DeserializeOwned>(value: Option<&Value>) -> Option<T> {
    value.and_then(|v| T::deserialize(v).ok())
}

/// Resolve props of any widget shape.
///
/// A source counts as absent when it is missing *or* does not deserialize
/// into `T`. This is deliberately looser than a plain `a ?? b ?? {}` chain:
/// malformed page props fall through to the structured tool output rather
/// than rendering an empty widget.
pub fn resolve_props<T>(env: &HostEnvironment) -> T
where
    T: DeserializeOwned + Default,
{
    parse(env.global_props())
        .or_else(|| parse(env.structured_content()))
        .unwrap_or_default()
}

/// Props for the dish gallery
pub fn resolve_gallery_props(env: &HostEnvironment) -> GalleryProps {
    resolve_props(env)
}
