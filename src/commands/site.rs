//! Resolve the command line into a ready render engine.
//!
//! Configuration is loaded and the environment resolved here, before the
//! source tree is read, so configuration errors never leave partial output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use pageit::application::RenderOptions;
use pageit::domain::entities::Environment;
use pageit::infrastructure::config::{discover_config, load_environments};
use pageit::presentation::{create_render_engine, Cli, ConcreteRenderEngine};

/// Everything a command needs to operate on one site
pub struct Site {
    pub engine: ConcreteRenderEngine,
    pub environment: Environment,
    pub env_name: String,
    pub config: Option<PathBuf>,
}

pub fn prepare(cli: &Cli) -> Result<Site> {
    let source = absolute(&cli.path)?;
    let output = absolute(&cli.output_root(&source))?;
    let tmp = cli.tmp.as_deref().map(absolute).transpose()?;

    let config = discover_config(cli.config.as_deref(), &source)?;
    let environments = load_environments(config.as_deref())?;
    let environment = environments.resolve(&cli.env)?;
    debug!(
        config = ?config,
        env = %cli.env,
        keys = environment.len(),
        "resolved environment"
    );

    let options = RenderOptions::new()
        .with_marker(cli.marker())
        .with_dry_run(cli.dry_run)
        .with_ignore_mtime(cli.ignore_mtime)
        .with_no_error_page(cli.noerr)
        .with_tmp_dir(tmp);

    Ok(Site {
        engine: create_render_engine(&source, &output, options),
        environment,
        env_name: cli.env.clone(),
        config,
    })
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("invalid path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["pageit"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn prepare_resolves_named_environment() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("site.yml");
        fs::write(&config, "default:\n  title: Home\nci:\n  title: CI\n").unwrap();

        let src = dir.path().to_str().unwrap();
        let cfg = config.to_str().unwrap();
        let site = prepare(&cli(&[src, "-f", cfg, "-e", "ci"])).unwrap();

        assert_eq!(site.env_name, "ci");
        assert_eq!(site.environment.get("title").unwrap(), "CI");
        assert_eq!(site.engine.output_root(), dir.path().join("output"));
        assert_eq!(site.config.as_deref(), Some(config.as_path()));
    }

    #[test]
    fn prepare_rejects_unknown_environment() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("site.yml");
        fs::write(&config, "default:\n  title: Home\n").unwrap();

        let src = dir.path().to_str().unwrap();
        let cfg = config.to_str().unwrap();
        let err = match prepare(&cli(&[src, "-f", cfg, "-e", "missing"])) {
            Ok(_) => panic!("expected unknown environment to fail"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("'missing'"));
        assert!(!dir.path().join("output").exists());
    }
}
