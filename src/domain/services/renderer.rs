//! Self-contained document renderer
//!
//! Builds the single-file HTML document a widget host loads. CSS and JS are
//! trusted build output and are embedded as raw text: no escaping, no
//! rewriting, even for `</script>` or `&` sequences.

/// Id of the element a widget mounts into
pub fn mount_id(base_name: &str) -> String {
    format!("{}-root", base_name)
}

/// Render the inlined document for one widget.
///
/// Missing sources are passed as `""` and still produce their (empty) block.
pub fn render_document(base_name: &str, js: &str, css: &str) -> String {
    let root_id = mount_id(base_name);
    let mut doc = String::with_capacity(js.len() + css.len() + 256);
    doc.push_str("<!doctype html>\n");
    doc.push_str("<html>\n");
    doc.push_str("<head>\n");
    doc.push_str("  <meta charset=\"utf-8\" />\n");
    doc.push_str("  <style>");
    doc.push_str(css);
    doc.push_str("</style>\n");
    doc.push_str("  <script type=\"module\">");
    doc.push_str(js);
    doc.push_str("</script>\n");
    doc.push_str("</head>\n");
    doc.push_str("<body>\n");
    doc.push_str("  <div id=\"");
    doc.push_str(&root_id);
    doc.push_str("\"></div>\n");
    doc.push_str("</body>\n");
    doc.push_str("</html>\n");
    doc
}
