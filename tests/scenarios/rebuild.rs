//! Scenario: Re-running the inliner
//!
//! Journey: the inliner runs again, with or without a rebuild in between.

use crate::assert_file_contains;
use crate::common::*;

/// SCENARIO: second run over unchanged sources is a no-op on content
#[test]
fn scenario_second_run_is_idempotent() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some(SAMPLE_JS), Some(SAMPLE_CSS));
    env.write_project_file("ui-widget/dist/foo.html", "old");

    assert!(env.run(&["inline"]).is_success());
    let first = env.read_project_file("ui-widget/dist/foo-ab12.html");
    let result = env.run(&["inline", "--json"]);
    let second = env.read_project_file("ui-widget/dist/foo-ab12.html");

    assert_eq!(first, second);
    assert_eq!(env.read_project_file("ui-widget/dist/foo.html"), second);
    let written = result
        .json_lines()
        .into_iter()
        .find(|e| e["event"] == "item_written")
        .expect("item_written event");
    assert_eq!(written["changed"], false);
}

/// SCENARIO: sources are never modified
#[test]
fn scenario_sources_untouched() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some(SAMPLE_JS), Some(SAMPLE_CSS));

    assert!(env.run(&["inline"]).is_success());

    assert_eq!(env.read_project_file("ui-widget/dist/foo-ab12.js"), SAMPLE_JS);
    assert_eq!(env.read_project_file("ui-widget/dist/foo-ab12.css"), SAMPLE_CSS);
}

/// SCENARIO: deleting a source empties its block on the next run
#[test]
fn scenario_deleted_source_collapses_block() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some(SAMPLE_JS), Some(SAMPLE_CSS));
    assert!(env.run(&["inline"]).is_success());

    std::fs::remove_file(env.project_path("ui-widget/dist/foo-ab12.css")).unwrap();
    assert!(env.run(&["inline"]).is_success());

    assert_eq!(
        env.read_project_file("ui-widget/dist/foo-ab12.html"),
        expected_document("foo", SAMPLE_JS, "")
    );
}

/// SCENARIO: a new hash generation is inlined alongside the old one
#[test]
fn scenario_new_hash_generation() {
    let env = TestEnv::new();
    write_build(&env, DIST, "foo-ab12", Some("v1()"), None);
    env.write_project_file("ui-widget/dist/foo.html", "alias");
    assert!(env.run(&["inline"]).is_success());

    write_build(&env, DIST, "foo-cd34", Some("v2()"), None);
    assert!(env.run(&["inline"]).is_success());

    // Both generations share the alias; the later name in sort order wins.
    assert_file_contains!(env, "ui-widget/dist/foo-ab12.html", "v1()");
    assert_file_contains!(env, "ui-widget/dist/foo-cd34.html", "v2()");
    assert_file_contains!(env, "ui-widget/dist/foo.html", "v2()");
}
