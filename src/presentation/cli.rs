//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Without flags, `pageit` renders the current directory into `./output`
//! - `--clean` alone only cleans; add `--render` (or `--watch`) to render after
//! - `--serve` takes an optional port with `=`, so the positional path is never
//!   mistaken for one

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::domain::entities::DEFAULT_ENVIRONMENT;
use crate::domain::value_objects::{TemplateMarker, DEFAULT_EXTENSION};

/// Port used by `--serve` without a value
pub const DEFAULT_PORT: u16 = 80;

/// Output directory name used when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Pageit - incremental static site renderer
#[derive(Parser, Debug)]
#[command(name = "pageit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output directory (default: <PATH>/output)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Report what would happen without writing or deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Delete previously generated output
    #[arg(short, long)]
    pub clean: bool,

    /// Render after --clean
    #[arg(short, long)]
    pub render: bool,

    /// Re-render whenever the source changes
    #[arg(short, long)]
    pub watch: bool,

    /// Serve the output directory over HTTP
    #[arg(
        short,
        long,
        value_name = "PORT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "80"
    )]
    pub serve: Option<u16>,

    /// Configuration file (default: pageit.yml, searched)
    #[arg(short = 'f', long, env = "PAGEIT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Named environment merged over `default`
    #[arg(short, long, env = "PAGEIT_ENV", default_value = DEFAULT_ENVIRONMENT)]
    pub env: String,

    /// Also write rendered template text under this directory
    #[arg(long, value_name = "DIR")]
    pub tmp: Option<PathBuf>,

    /// Render everything regardless of modification times
    #[arg(long)]
    pub ignore_mtime: bool,

    /// Fail on the first render error instead of writing an error page
    #[arg(long)]
    pub noerr: bool,

    /// Template suffix (default: .tera)
    #[arg(long, value_name = "STR", conflicts_with = "prefix")]
    pub ext: Option<String>,

    /// Template prefix, instead of a suffix
    #[arg(long, value_name = "STR")]
    pub prefix: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Emit NDJSON events instead of human output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}

impl Cli {
    /// Template marker selected by `--ext` / `--prefix`
    pub fn marker(&self) -> TemplateMarker {
        match (&self.prefix, &self.ext) {
            (Some(prefix), _) => TemplateMarker::prefix(prefix.as_str()),
            (None, Some(ext)) => TemplateMarker::suffix(ext.as_str()),
            (None, None) => TemplateMarker::suffix(DEFAULT_EXTENSION),
        }
    }

    /// A plain `--clean` does not render; everything else does
    pub fn should_render(&self) -> bool {
        self.render || self.watch || !self.clean
    }

    /// Output root for a given source root
    pub fn output_root(&self, source: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| source.join(DEFAULT_OUTPUT_DIR))
    }

    /// Default log filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pageit"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert!(cli.should_render());
        assert_eq!(cli.serve, None);
        assert_eq!(cli.marker(), TemplateMarker::suffix(".tera"));
        assert_eq!(cli.log_level(), "warn");
        assert_eq!(
            cli.output_root(Path::new("site")),
            PathBuf::from("site/output")
        );
    }

    #[test]
    fn test_cli_clean_only_does_not_render() {
        let cli = Cli::try_parse_from(["pageit", "--clean"]).unwrap();
        assert!(!cli.should_render());

        let cli = Cli::try_parse_from(["pageit", "-c", "-r"]).unwrap();
        assert!(cli.should_render());

        let cli = Cli::try_parse_from(["pageit", "-c", "-w"]).unwrap();
        assert!(cli.should_render());
    }

    #[test]
    fn test_cli_serve_default_port() {
        let cli = Cli::try_parse_from(["pageit", "--serve", "site"]).unwrap();
        assert_eq!(cli.serve, Some(DEFAULT_PORT));
        assert_eq!(cli.path, PathBuf::from("site"));
    }

    #[test]
    fn test_cli_serve_explicit_port() {
        let cli = Cli::try_parse_from(["pageit", "--serve=8080"]).unwrap();
        assert_eq!(cli.serve, Some(8080));
    }

    #[test]
    fn test_cli_prefix_marker() {
        let cli = Cli::try_parse_from(["pageit", "--prefix", "tera."]).unwrap();
        assert_eq!(cli.marker(), TemplateMarker::prefix("tera."));
    }

    #[test]
    fn test_cli_ext_conflicts_with_prefix() {
        assert!(Cli::try_parse_from(["pageit", "--ext", ".j2", "--prefix", "j2."]).is_err());
    }

    #[test]
    fn test_cli_verbosity() {
        let cli = Cli::try_parse_from(["pageit", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "debug");
        let cli = Cli::try_parse_from(["pageit", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "error");
        assert!(Cli::try_parse_from(["pageit", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_env_and_config() {
        let cli = Cli::try_parse_from(["pageit", "-e", "ci", "-f", "conf/site.yml"]).unwrap();
        assert_eq!(cli.env, "ci");
        assert_eq!(cli.config, Some(PathBuf::from("conf/site.yml")));
    }
}
