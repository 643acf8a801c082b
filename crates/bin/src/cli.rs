//! CLI argument definitions for the tikzplot binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render pgfplots figures from JSON descriptions
#[derive(Parser, Debug)]
#[command(name = "tikzplot")]
#[command(about = "tikzplot: pgfplots figures from JSON descriptions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a figure description to markup
    Render(RenderArgs),
}

/// Arguments for the render command
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// JSON figure description to read
    pub input: PathBuf,

    /// File to write the markup to; stdout when omitted
    #[arg(short, long, env = "TIKZPLOT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Wrap the figure in a compilable document
    #[arg(short, long)]
    pub standalone: bool,

    /// pgfplots compatibility level for the document preamble
    #[arg(long, env = "TIKZPLOT_COMPAT")]
    pub compat: Option<String>,

    /// Document class for the document preamble
    #[arg(long, env = "TIKZPLOT_CLASS")]
    pub class: Option<String>,
}
