//! Shared testing harness for `factory-injector` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative location of the generated factories file.
pub(crate) const FACTORIES_FILE: &str = "config/autoload/factory-injector-factories.global.php";

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated project with an empty `config/autoload/` directory.
    pub(crate) fn new() -> Self {
        let ctx = Self::without_autoload_dir();
        fs::create_dir_all(ctx.work_dir.join("config/autoload"))
            .expect("Failed to create config/autoload");
        ctx
    }

    /// Create a new isolated project without any config directories.
    pub(crate) fn without_autoload_dir() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory outside the project, for running with `--project-root`.
    pub(crate) fn outside_dir(&self) -> &Path {
        self.root.path()
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("factory-injector")
            .expect("Failed to locate factory-injector binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Run `factory-injector inject <class> <factory>` and assert success.
    pub(crate) fn inject(&self, class: &str, factory: &str) {
        self.cli().args(["inject", class, factory]).assert().success();
    }

    /// Path to the default factories file.
    pub(crate) fn factories_path(&self) -> PathBuf {
        self.work_dir.join(FACTORIES_FILE)
    }

    /// Write the default factories file.
    pub(crate) fn write_factories(&self, content: &str) {
        fs::write(self.factories_path(), content).expect("Failed to write factories file");
    }

    /// Read the default factories file.
    pub(crate) fn read_factories(&self) -> String {
        fs::read_to_string(self.factories_path()).expect("Failed to read factories file")
    }

    /// Write `factory-injector.toml` in the project root.
    pub(crate) fn write_tool_config(&self, content: &str) {
        fs::write(self.work_dir.join("factory-injector.toml"), content)
            .expect("Failed to write factory-injector.toml");
    }

    /// Factory registration lines of `content`, in file order.
    pub(crate) fn factory_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| line.contains(" => ") && line.ends_with(','))
            .map(str::to_string)
            .collect()
    }
}
