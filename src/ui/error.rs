use std::path::Path;

use recipebook::RecipeBookError;

use crate::ui::theme::{self, Icon};

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.render(supports_color, supports_unicode);
    let mut out = format!("{} {}\n", icon, err);

    if let Some(hint) = err.downcast_ref::<RecipeBookError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.render(supports_color, supports_unicode),
            theme::dim(&hint, supports_color)
        ));
    }
    out
}

fn hint_for(err: &RecipeBookError) -> Option<String> {
    match err {
        RecipeBookError::DirectoryRead { path, .. } => Some(format!(
            "Build the widget first, or pass --dir pointing at the build output (looked in {}).",
            path.display()
        )),
        RecipeBookError::InvalidConfig { file, .. } => {
            Some(format!("Fix the TOML in {} and try again.", file.display()))
        }
        RecipeBookError::Write { path, .. } => Some(format!(
            "Files processed before {} were already rewritten; rerun once it is writable.",
            file_label(path)
        )),
        _ => None,
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
