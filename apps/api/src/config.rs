use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const MODEL_FILE_NAME: &str = "efficiency_model.json";

/// Where the service is running. Selects how on-disk paths are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// Serverless deployment; paths are relative to the working directory.
    Cloud,
    /// Local checkout; paths are relative to the crate directory.
    Local,
}

/// Filesystem locations the service reads from at runtime.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub model_path: PathBuf,
}

impl AppPaths {
    pub fn resolve(mode: DeploymentMode) -> Result<Self> {
        let paths = match mode {
            DeploymentMode::Cloud => {
                let cwd = std::env::current_dir()
                    .context("Unable to determine the working directory")?;
                Self::for_cloud(&cwd)
            }
            DeploymentMode::Local => Self::for_local(Path::new(env!("CARGO_MANIFEST_DIR"))),
        };
        Ok(paths)
    }

    fn for_cloud(root: &Path) -> Self {
        AppPaths {
            template_dir: root.join("frontend").join("templates"),
            static_dir: root.join("frontend").join("static"),
            model_path: root.join("server").join("models").join(MODEL_FILE_NAME),
        }
    }

    fn for_local(crate_dir: &Path) -> Self {
        AppPaths {
            template_dir: crate_dir.join("frontend").join("templates"),
            static_dir: crate_dir.join("frontend").join("static"),
            model_path: crate_dir.join("models").join(MODEL_FILE_NAME),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: DeploymentMode,
    pub paths: AppPaths,
    pub port: u16,
    pub development: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mode = deployment_mode(std::env::var_os("VERCEL_ENV").is_some());
        let development = is_development(std::env::var("APP_ENV").ok().as_deref());
        let default_level = if development { "debug" } else { "info" };

        Ok(Config {
            mode,
            paths: AppPaths::resolve(mode)?,
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            development,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        })
    }
}

fn deployment_mode(cloud_marker_present: bool) -> DeploymentMode {
    if cloud_marker_present {
        DeploymentMode::Cloud
    } else {
        DeploymentMode::Local
    }
}

fn is_development(app_env: Option<&str>) -> bool {
    app_env == Some("development")
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}
