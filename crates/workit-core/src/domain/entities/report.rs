use std::path::PathBuf;

use serde::Serialize;

/// Port the generated service listens on.
pub const DEFAULT_SERVICE_PORT: u16 = 8080;

/// Outcome of a successful scaffold, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub project_path: PathBuf,
    pub old_identity: String,
    pub new_identity: String,
    pub rewritten_files: Vec<PathBuf>,
    pub next_steps: NextSteps,
}

/// How to run the freshly generated default service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextSteps {
    pub commands: Vec<String>,
    pub urls: Vec<String>,
}

impl NextSteps {
    pub fn for_project(project_name: &str) -> Self {
        let base = format!("http://localhost:{DEFAULT_SERVICE_PORT}");
        Self {
            commands: vec![
                format!("cd {project_name}"),
                "go run cmd/service1/main.go".into(),
            ],
            urls: vec![
                format!("{base}/hello"),
                format!("{base}/swagger/index.html"),
            ],
        }
    }
}
