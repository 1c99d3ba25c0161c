//! Reusable widget build content.

use super::env::TestEnv;

pub const SAMPLE_JS: &str = "console.log(1)";
pub const SAMPLE_CSS: &str = "body{color:red}";

/// Default widget build directory, relative to the project root
pub const DIST: &str = "ui-widget/dist";

/// The document the inliner produces for these inputs
pub fn expected_document(base: &str, js: &str, css: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\" />\n  <style>{css}</style>\n  <script type=\"module\">{js}</script>\n</head>\n<body>\n  <div id=\"{base}-root\"></div>\n</body>\n</html>\n"
    )
}

/// Lay down a Vite-style build: hashed HTML plus optional JS/CSS siblings.
pub fn write_build(env: &TestEnv, dir: &str, stem: &str, js: Option<&str>, css: Option<&str>) {
    env.write_project_file(
        &format!("{dir}/{stem}.html"),
        "<!doctype html><script type=\"module\" src=\"./app.js\"></script>",
    );
    if let Some(js) = js {
        env.write_project_file(&format!("{dir}/{stem}.js"), js);
    }
    if let Some(css) = css {
        env.write_project_file(&format!("{dir}/{stem}.css"), css);
    }
}
