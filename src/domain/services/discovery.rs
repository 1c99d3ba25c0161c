//! Entry point discovery
//!
//! Hashed HTML entry points are recognized purely by file name:
//! `<base>-<hash>.html`, where `<base>` is ASCII word characters or hyphens
//! and `<hash>` is four lowercase hex digits.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::AssetTriplet;
use crate::domain::value_objects::AssetHash;

fn target_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]+-[a-f0-9]{4}\.html$").expect("entry point pattern compiles")
    })
}

fn capture_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+)-([a-f0-9]{4})\.html$")
            .expect("entry point capture pattern compiles")
    })
}

/// Whether `file_name` is a hashed HTML entry point
pub fn is_inline_target(file_name: &str) -> bool {
    target_pattern().is_match(file_name)
}

/// Keep only hashed HTML entry points, in name order
pub fn select_targets<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut selected: Vec<String> = names
        .into_iter()
        .map(Into::into)
        .filter(|name| is_inline_target(name))
        .collect();
    selected.sort();
    selected
}

/// Split a discovered file name into its triplet.
///
/// Returns `None` when the name does not parse; callers skip such names
/// without reporting anything.
pub fn resolve_triplet(dir: &Path, file_name: &str) -> Option<AssetTriplet> {
    let caps = capture_pattern().captures(file_name)?;
    let base_name = caps.get(1)?.as_str();
    let hash = AssetHash::parse(caps.get(2)?.as_str()).ok()?;
    Some(AssetTriplet::new(dir, base_name, hash))
}
