//! Integration tests for the `trail` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_node_trail_human() {
    let env = TestEnv::new();
    assert_eq!(
        env.trail(&["--node", "4"]),
        "Home > Page One > Two > Page Three > Page Four"
    );
}

#[test]
fn test_node_trail_json() {
    let env = TestEnv::new();
    let output = env.trail(&["--node", "4", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let links = value["links"].as_array().unwrap();
    assert_eq!(links.len(), 5);
    assert_eq!(links[0]["url"], "/");
    assert_eq!(links[1]["url"], "/one");
    assert!(links[4]["url"].is_null());

    let tags: Vec<&str> = value["cache"]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tag| tag.as_str())
        .collect();
    assert!(tags.contains(&"node:4"));
    assert!(tags.contains(&"config:node.type.page"));
    assert!(tags.contains(&"config:crumbtrail.settings"));
}

#[test]
fn test_node_trail_html() {
    let env = TestEnv::new();
    let output = env.trail(&["--node", "4", "--format", "html"]);

    assert!(output.starts_with("<nav class=\"breadcrumb\""));
    assert!(output.contains("<a href=\"/one\">Page One</a>"));
    assert!(output.contains("<li aria-current=\"page\">Page Four</li>"));
}

#[test]
fn test_html_escaping_with_env_allowed_type() {
    let env = TestEnv::new();
    env.command()
        .env("CRUMBTRAIL_ALLOWED_TYPES", "page,article")
        .args(["trail", "--node", "5", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R&amp;D News"));
}

#[test]
fn test_disallowed_type_uses_path_fallback() {
    let env = TestEnv::new();
    assert_eq!(env.trail(&["--node", "5"]), "Home");
}

#[test]
fn test_user_trail_skips_excluded_role() {
    let env = TestEnv::new();
    assert_eq!(env.trail(&["--user", "7"]), "Home > Page One > Page Two");
}

#[test]
fn test_path_trail() {
    let env = TestEnv::new();
    assert_eq!(env.trail(&["--path", "/docs/intro"]), "Home > Documentation");
    assert_eq!(
        env.trail(&["--path", "/docs/intro", "--language", "fr"]),
        "Accueil > Documentation"
    );
}

#[test]
fn test_path_resolving_to_node() {
    let env = TestEnv::new();
    assert_eq!(
        env.trail(&["--path", "/node/4"]),
        "Home > Page One > Two > Page Three > Page Four"
    );
    assert!(env.trail(&["--path", "/one"]).ends_with("> Page One"));
}

#[test]
fn test_admin_flag_forces_fallback() {
    let env = TestEnv::new();
    assert_eq!(env.trail(&["--node", "4", "--admin"]), "Home");
}

#[test]
fn test_front_page_trail_is_empty() {
    let env = TestEnv::new();
    assert_eq!(env.trail(&["--path", "/"]), "");
}

#[test]
fn test_front_page_from_environment() {
    let env = TestEnv::new();
    env.command()
        .env("CRUMBTRAIL_FRONT_PAGE", "/docs")
        .args(["trail", "--path", "/docs/intro"])
        .assert()
        .success()
        .stdout("Home\n");
}

#[test]
fn test_verbose_reports_builder() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "trail", "--user", "7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built by 'user'"));
}

#[test]
fn test_verbose_reports_skipped_reference() {
    let env = TestEnv::new();
    env.write_site(&env.read_site().replace("breadcrumb_path: [1, 2, 3]", "breadcrumb_path: [1, 40, 3]"));
    env.command()
        .args(["--verbose", "trail", "--node", "4"])
        .assert()
        .success()
        .stdout("Home > Page One > Page Three > Page Four\n")
        .stderr(predicate::str::contains(
            "skipping breadcrumb reference to missing node 40",
        ));
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let env = TestEnv::new();
    env.write_site(&env.read_site().replace("breadcrumb_path: [1, 2, 3]", "breadcrumb_path: [1, 40, 3]"));
    env.command()
        .args(["--quiet", "trail", "--node", "4"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_node_is_semantic_failure() {
    let env = TestEnv::new();
    env.command()
        .args(["trail", "--node", "99"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Node 99 does not exist"));
}

#[test]
fn test_relative_path_is_invalid_argument() {
    let env = TestEnv::new();
    env.command()
        .args(["trail", "--path", "docs"])
        .assert()
        .code(4);
}
