// src/cli/mod.rs — CLI definition (clap derive)

pub mod files;
pub mod text;
pub mod tree;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "khelpers", about = "Record trees, text and path helpers", version)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build or flatten record trees (JSON in, JSON out)
    Tree {
        #[command(subcommand)]
        action: TreeAction,
    },
    /// Text helpers
    Text {
        #[command(subcommand)]
        action: TextAction,
    },
    /// File-system helpers
    Files {
        #[command(subcommand)]
        action: FilesAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum TreeAction {
    /// Nest a flat JSON array of records by their id/parent fields
    Build {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<String>,
        /// Id field name
        #[arg(long)]
        id: Option<String>,
        /// Parent field name
        #[arg(long)]
        parent: Option<String>,
        /// Children field name
        #[arg(long)]
        children: Option<String>,
        /// Skip the parent-cycle check
        #[arg(long)]
        no_cycle_check: bool,
    },
    /// Flatten a JSON forest in pre-order, adding a level field
    Flatten {
        /// Input file (defaults to stdin)
        #[arg(short, long)]
        input: Option<String>,
        /// Children field name
        #[arg(long)]
        children: Option<String>,
        /// Level field name
        #[arg(long)]
        level: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum TextAction {
    /// Shorten text around an ellipsis
    Ellipsize {
        text: String,
        /// Maximum length in characters
        #[arg(short, long)]
        max: usize,
        /// Where the ellipsis goes (0.0 = start, 1.0 = end)
        #[arg(short, long, default_value = "1.0")]
        position: f32,
        /// Ellipsis string (defaults to config)
        #[arg(short, long)]
        ellipsis: Option<String>,
    },
    /// Cut text at a word boundary
    Truncate {
        text: String,
        /// Maximum length in characters
        #[arg(short, long)]
        max: usize,
        /// Ellipsis string (defaults to config)
        #[arg(short, long)]
        ellipsis: Option<String>,
    },
}

#[derive(Subcommand, Clone)]
pub enum FilesAction {
    /// List entries of a directory
    List {
        dir: String,
        /// Allowed extensions, e.g. "jpg|png"
        #[arg(short, long)]
        types: Option<String>,
        /// Include directories
        #[arg(long)]
        all: bool,
    },
    /// Print the next free numbered variant of a file name
    Increment {
        name: String,
        #[arg(short, long, default_value = "_")]
        delimiter: String,
    },
}

/// Serialize command output as compact or pretty JSON.
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
