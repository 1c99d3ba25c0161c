//! Scenario: Inlining a fresh widget build
//!
//! Journey: the widget was just built with Vite; the inliner runs once
//! over the output directory before the server starts serving it.

use crate::common::*;

/// SCENARIO: complete triplet, no alias
#[test]
fn scenario_complete_triplet_without_alias() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some(SAMPLE_JS), Some(SAMPLE_CSS));

    let result = env.run(&["inline"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let doc = env.read_project_file("ui-widget/dist/foo-ab12.html");
    assert!(doc.contains("<style>body{color:red}</style>"));
    assert!(doc.contains("<script type=\"module\">console.log(1)</script>"));
    assert!(doc.contains("<div id=\"foo-root\"></div>"));
    assert!(!env.project_file_exists("ui-widget/dist/foo.html"));
}

/// SCENARIO: JS only, existing alias
#[test]
fn scenario_js_only_with_alias() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some(SAMPLE_JS), None);
    env.write_project_file("ui-widget/dist/foo.html", "<p>stale</p>");

    let result = env.run(&["inline"]);

    assert!(result.is_success());
    let hashed = env.read_project_file("ui-widget/dist/foo-ab12.html");
    assert!(hashed.contains("<style></style>"));
    assert!(hashed.contains("console.log(1)"));
    assert_eq!(env.read_project_file("ui-widget/dist/foo.html"), hashed);
}

/// SCENARIO: a directory with no matching names is left untouched
#[test]
fn scenario_no_hashed_entry_points() {
    let env = TestEnv::new();
    env.write_project_file("ui-widget/dist/index.html", "<p>index</p>");
    env.write_project_file("ui-widget/dist/foo-ABCD.html", "<p>upper</p>");
    env.write_project_file("ui-widget/dist/foo-abc.html", "<p>short</p>");

    let result = env.run(&["inline"]);

    assert!(result.is_success());
    assert_eq!(env.read_project_file("ui-widget/dist/index.html"), "<p>index</p>");
    assert_eq!(env.read_project_file("ui-widget/dist/foo-ABCD.html"), "<p>upper</p>");
    assert_eq!(env.read_project_file("ui-widget/dist/foo-abc.html"), "<p>short</p>");
}

/// SCENARIO: two independent triplets, one alias
#[test]
fn scenario_two_triplets_one_alias() {
    let env = TestEnv::new();
    write_build(&env, DIST, "a-1111", Some("A()"), None);
    write_build(&env, DIST, "b-2222", None, Some("b{}"));
    env.write_project_file("ui-widget/dist/b.html", "old");

    let result = env.run(&["inline"]);

    assert!(result.is_success());
    assert_eq!(
        env.read_project_file("ui-widget/dist/a-1111.html"),
        expected_document("a", "A()", "")
    );
    let b = env.read_project_file("ui-widget/dist/b-2222.html");
    assert_eq!(b, expected_document("b", "", "b{}"));
    assert_eq!(env.read_project_file("ui-widget/dist/b.html"), b);
    assert!(!env.project_file_exists("ui-widget/dist/a.html"));
}

/// SCENARIO: the inlined build is what the widget resource serves
#[test]
fn scenario_inlined_alias_is_served_as_widget() {
    let env = TestEnv::new();
    write_build(&env, DIST, "index-9f3c", Some(SAMPLE_JS), Some(SAMPLE_CSS));
    env.write_project_file("ui-widget/dist/index.html", "<p>unbundled</p>");

    assert!(env.run(&["inline"]).is_success());
    let served = env.run(&["widget", "gallery"]);

    assert!(served.is_success());
    assert_eq!(served.stdout, expected_document("index", SAMPLE_JS, SAMPLE_CSS));
    assert!(served.stdout.contains("<div id=\"index-root\"></div>"));
}
