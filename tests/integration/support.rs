use coverpick::tooling::cli::CliContext;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CONFIG: &str = r#"
[library]
root = "projects"

[stores]
overrides_path = "data/overrides.json"
analysis_path = "data/analysis.json"

[[focal_overrides]]
contains = "harbour"
position = "bottom"
"#;

/// Workspace with a config file and project folders populated with empty files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(projects: &[(&str, &[&str])]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("coverpick.toml"), CONFIG).unwrap();
        for (project, files) in projects {
            let project_dir = dir.path().join("projects").join(project);
            fs::create_dir_all(&project_dir).unwrap();
            for file in *files {
                fs::write(project_dir.join(file), b"").unwrap();
            }
        }
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("coverpick.toml")
    }

    pub fn write_analysis(&self, json: &str) {
        let data = self.root().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("analysis.json"), json).unwrap();
    }

    pub fn write_overrides(&self, json: &str) {
        let data = self.root().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("overrides.json"), json).unwrap();
    }

    pub fn context(&self) -> CliContext {
        CliContext::new(self.root().to_path_buf(), Some(self.config_path())).unwrap()
    }
}
