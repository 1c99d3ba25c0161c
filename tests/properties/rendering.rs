//! Property tests for document rendering.

use proptest::prelude::*;

use recipebook::{mount_id, render_document};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sources are embedded byte-for-byte, whatever they contain.
    #[test]
    fn property_sources_embedded_verbatim(
        base in "[A-Za-z0-9_-]{1,16}",
        js in "(?s).{0,128}",
        css in "(?s).{0,128}",
    ) {
        let doc = render_document(&base, &js, &css);

        let style = format!("  <style>{css}</style>\n");
        let script = format!("  <script type=\"module\">{js}</script>\n");
        prop_assert!(doc.contains(&style));
        prop_assert!(doc.contains(&script));
        let expected_root = format!("<div id=\"{}\"></div>", mount_id(&base));
        prop_assert!(doc.contains(&expected_root));
    }

    /// PROPERTY: the frame around the sources never changes.
    #[test]
    fn property_fixed_frame(js in "[^\n]{0,64}", css in "[^\n]{0,64}") {
        let doc = render_document("w", &js, &css);

        prop_assert!(doc.starts_with("<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\" />\n  <style>"));
        prop_assert!(doc.ends_with("</script>\n</head>\n<body>\n  <div id=\"w-root\"></div>\n</body>\n</html>\n"));
        prop_assert_eq!(doc.lines().count(), 11);
    }
}
