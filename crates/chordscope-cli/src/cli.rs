//! CLI argument definitions for chordscope.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chordscope")]
#[command(about = "IIDX score catalog and chord analyzer", version)]
pub struct Args {
    /// Data directory holding the catalog and captured note files
    #[arg(
        long,
        global = true,
        env = "CHORDSCOPE_DATA_DIR",
        default_value = "data"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the music catalog from raw table dumps
    ScrapeMusicList {
        /// Replace an existing catalog document
        #[arg(short = 'w', long)]
        overwrite: bool,
        /// Directory of raw dumps
        #[arg(long, default_value = "dump")]
        source: PathBuf,
    },
    /// Capture note data for every matching uncaptured chart
    ScrapeScore {
        /// Play mode (SP or DP; empty matches any)
        #[arg(long, default_value = "")]
        mode: String,
        /// Version filter (e.g. 11, sub, CS, 20-30, -20, 20-)
        #[arg(long, default_value = "")]
        ver: String,
        /// Music tag (exact match)
        #[arg(long)]
        tag: Option<String>,
        /// Difficulty (B, N, H, A, or L; empty matches any)
        #[arg(long, default_value = "")]
        diff: String,
        /// Directory of raw dumps
        #[arg(long, default_value = "dump")]
        source: PathBuf,
    },
    /// Chord histogram over the captured charts matching the filter
    Analyze {
        /// Play mode (SP or DP; empty matches any)
        #[arg(long, default_value = "")]
        mode: String,
        /// Version filter (e.g. 11, sub, CS, 20-30, -20, 20-)
        #[arg(long, default_value = "")]
        ver: String,
        /// Music tag (exact match)
        #[arg(long)]
        tag: Option<String>,
        /// Difficulty (B, N, H, A, or L; empty matches any)
        #[arg(long, default_value = "")]
        diff: String,
        /// Level filter (e.g. 12, 9-10, -3, 10-)
        #[arg(long, default_value = "")]
        lv: String,
        /// Include chords that never occur
        #[arg(short = 'a', long)]
        show_all: bool,
        /// Print the matched chart list before the histogram
        #[arg(short = 'l', long)]
        list: bool,
    },
}
