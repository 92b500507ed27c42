mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chordscope=info,chordscope_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.command {
        Command::ScrapeMusicList { overwrite, source } => {
            commands::scrape_music_list::run(&args.data_dir, &source, overwrite)
        }
        Command::ScrapeScore {
            mode,
            ver,
            tag,
            diff,
            source,
        } => commands::scrape_score::run(
            &args.data_dir,
            &source,
            &mode,
            &ver,
            tag.as_deref(),
            &diff,
        ),
        Command::Analyze {
            mode,
            ver,
            tag,
            diff,
            lv,
            show_all,
            list,
        } => commands::analyze::run(
            &args.data_dir,
            &mode,
            &ver,
            tag.as_deref(),
            &diff,
            &lv,
            show_all,
            list,
        ),
    }
}
