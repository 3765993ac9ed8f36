//! `mdoc demo` command implementation.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use mdoc_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;
use crate::showcase;

/// Output formats written by the demo command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Markdown,
    Html,
    Both,
}

/// Arguments for the demo command.
#[derive(Args)]
pub(crate) struct DemoArgs {
    /// Path to configuration file (default: auto-discover mdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write `demo.md` / `demo.html` into.
    #[arg(short, long, default_value = "output")]
    out_dir: PathBuf,

    /// Output formats to write.
    #[arg(short, long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Document title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Disable header numbering.
    #[arg(long)]
    no_numbering: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl DemoArgs {
    /// Execute the demo command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or an output file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            title: self.title,
            numbered_headers: self.no_numbering.then_some(false),
            preset: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Using config {}", path.display()));
        }

        let written = render(&config, self.format, &self.out_dir)?;
        for path in written {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Render the showcase document and write the requested formats into `out_dir`.
fn render(config: &Config, format: Format, out_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    std::fs::create_dir_all(out_dir)?;

    let mut builder = showcase::build(&config.document.title, config.document.numbered_headers);
    let mut written = Vec::new();

    if matches!(format, Format::Markdown | Format::Both) {
        let path = out_dir.join("demo.md");
        std::fs::write(&path, builder.to_markdown())?;
        tracing::info!(path = %path.display(), "Wrote markdown");
        written.push(path);
    }

    if matches!(format, Format::Html | Format::Both) {
        let styles = config.html_styles();
        let path = out_dir.join("demo.html");
        let html = builder.reset_header_indicator().to_html(Some(&styles));
        std::fs::write(&path, html)?;
        tracing::info!(path = %path.display(), "Wrote HTML");
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let written = render(&config, Format::Both, dir.path()).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("demo.md"), dir.path().join("demo.html")]
        );
        let md = std::fs::read_to_string(dir.path().join("demo.md")).unwrap();
        let html = std::fs::read_to_string(dir.path().join("demo.html")).unwrap();
        assert!(md.starts_with("# 1. Usage\n"));
        // Numbering restarts for the HTML pass.
        assert!(html.contains("<h1>1. Usage</h1>"));
        assert!(html.contains("<title>mdoc</title>"));
        assert!(html.contains("border-left: 3px solid #eee;"));
    }

    #[test]
    fn test_render_markdown_only_creates_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested/out");

        let written = render(&Config::default(), Format::Markdown, &out_dir).unwrap();

        assert_eq!(written, vec![out_dir.join("demo.md")]);
        assert!(!out_dir.join("demo.html").exists());
    }

    #[test]
    fn test_render_honors_style_preset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_toml_str("[styles]\npreset = \"none\"\n").unwrap();

        render(&config, Format::Html, dir.path()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("demo.html")).unwrap();
        assert!(html.contains("<table>\n"));
        assert!(!html.contains("border: 1px solid #000;"));
    }
}
