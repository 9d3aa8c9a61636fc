//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary site file
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const HOST_VARS: &[&str] = &[
    "CRUMBTRAIL_SITE",
    "CRUMBTRAIL_LOG_MODE",
    "CRUMBTRAIL_ALLOWED_TYPES",
    "CRUMBTRAIL_NODE_BUNDLES",
    "CRUMBTRAIL_EXCLUDED_ROLES",
    "CRUMBTRAIL_FRONT_PAGE",
];

/// A site with a configured `page` type, an `editor` role and one user.
pub const SAMPLE_SITE: &str = r"
settings:
  allowed_types: [page]
  node_bundles: [page]
content_types:
  - id: page
    label: Basic page
    breadcrumb_path: [1, 2, 3]
  - id: article
    label: Article
roles:
  - id: editor
    label: Editor
    breadcrumb_path: [1, 2]
nodes:
  - id: 1
    type: page
    title: Page One
    alias: /one
  - id: 2
    type: page
    title: Page Two
    short_title: Two
  - id: 3
    type: page
    title: Page Three
  - id: 4
    type: page
    title: Page Four
  - id: 5
    type: article
    title: R&D News
users:
  - id: 7
    name: ada
    roles: [administrator, editor]
pages:
  - path: /docs
    title: Documentation
translations:
  fr:
    Home: Accueil
";

/// Test environment with an isolated site file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the site file
    pub site_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment whose site file holds [`SAMPLE_SITE`].
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_site(SAMPLE_SITE);
        env
    }

    /// Create an environment without a site file.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let site_path = temp_path.join("site.yaml");

        Self {
            temp_dir,
            temp_path,
            site_path,
        }
    }

    /// Replace the site file contents.
    pub fn write_site(&self, yaml: &str) {
        std::fs::write(&self.site_path, yaml).expect("Failed to write site file");
    }

    /// Read the site file back.
    pub fn read_site(&self) -> String {
        std::fs::read_to_string(&self.site_path).expect("Failed to read site file")
    }

    /// Get a command builder without `--site`, running in the temp directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("crumbtrail").expect("Failed to find crumbtrail binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--site` pointing at this environment's file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--site").arg(&self.site_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Run `crumbtrail trail` with the given arguments and return stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn trail(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("trail")
            .args(args)
            .output()
            .expect("Failed to run trail command");

        assert!(
            output.status.success(),
            "Trail failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}
