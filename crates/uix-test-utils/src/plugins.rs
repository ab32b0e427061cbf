//! [`TestPluginDir`] builder for plugin discovery scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest filename expected by plugin discovery.
pub const MANIFEST_FILENAME: &str = "uix_plugin.toml";

/// A temporary working directory with a `plugins/` scan dir.
///
/// # Example
///
/// ```rust,no_run
/// use uix_test_utils::TestPluginDir;
///
/// let dir = TestPluginDir::new();
/// dir.add_plugin("kibana", r#"app = { title = "Kibana" }"#);
/// dir.write_config("[plugins]\nscan_dirs = [\"plugins\"]\n");
/// dir.assert_file_exists("plugins/kibana/uix_plugin.toml");
/// ```
pub struct TestPluginDir {
    temp_dir: TempDir,
}

impl Default for TestPluginDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPluginDir {
    /// Create an empty temporary directory with an empty `plugins/` dir.
    pub fn new() -> Self {
        let dir = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(dir.scan_dir()).unwrap();
        dir
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The default scan dir, `<root>/plugins`.
    pub fn scan_dir(&self) -> PathBuf {
        self.root().join("plugins")
    }

    /// Write `plugins/<id>/uix_plugin.toml` with the given `[ui_exports]`
    /// body and return the plugin directory.
    pub fn add_plugin(&self, id: &str, exports: &str) -> PathBuf {
        self.add_plugin_at(&format!("plugins/{id}"), id, exports)
    }

    /// Write a plugin manifest into `rel_dir` (relative to the root).
    pub fn add_plugin_at(&self, rel_dir: &str, id: &str, exports: &str) -> PathBuf {
        let manifest = format!(
            "[plugin]\nid = \"{id}\"\nversion = \"1.0.0\"\n\n[ui_exports]\n{exports}\n"
        );
        self.write_file(&format!("{rel_dir}/{MANIFEST_FILENAME}"), &manifest);
        self.root().join(rel_dir)
    }

    /// Write `uix.toml` at the root and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file("uix.toml", content)
    }

    /// Write an arbitrary file, creating parent directories.
    pub fn write_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
