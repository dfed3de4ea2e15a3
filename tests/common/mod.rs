use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test project fixture for consistent filesystem setup.
///
/// The rendered root lives in a `project/` subdirectory so that ignore
/// rules files and configuration written by tests never show up in the
/// generated tree.
pub struct TestProject {
    pub temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new fixture with an empty project directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::create_dir(temp_dir.path().join("project"))?;
        Ok(Self { temp_dir })
    }

    /// Canonicalized project root (matches what the generator resolves to)
    pub fn root(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join("project")
            .canonicalize()
            .expect("project dir should canonicalize")
    }

    /// Create a file (and its parent directories) under the project root
    pub fn create_file(&self, rel: &str) -> PathBuf {
        let path = self.temp_dir.path().join("project").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, b"content").expect("write file");
        path
    }

    /// Create a directory under the project root
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.temp_dir.path().join("project").join(rel);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Write an ignore rules file beside (not inside) the project root
    pub fn write_rules(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("write rules file");
        path
    }

    /// Config file path inside the fixture so tests never touch the
    /// user's real configuration
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("projtree-config")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new().expect("Failed to create test project")
    }
}

#[allow(dead_code)]
pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("path should be valid UTF-8")
}
