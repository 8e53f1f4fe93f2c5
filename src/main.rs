//! sch - Main Entry Point
//!
//! Parses the command line, resolves the schedule file and dispatches to the
//! handlers in the `sch` library. Today's date is read once here.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sch::{Config, JaDate, ListOptions, Scheduler};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// コマンドラインベースTODOマネージャ
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 直近のものだけでなく、今後すべての予定を表示します
    #[arg(short = 'a', long, global = true)]
    show_all: bool,

    /// 実行済みの予定も表示します
    #[arg(short = 'd', long, global = true)]
    show_done: bool,

    /// Path to the schedule file
    #[arg(short = 'f', long, global = true)]
    file: Option<PathBuf>,

    /// Do not print today's date above the listing
    #[arg(long, global = true)]
    no_headline: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 指定された日付,優先度,用事の予定を追加します
    #[command(visible_alias = "a")]
    Add {
        /// 日付（指定方法:20140803 0803 803）
        date: String,
        /// NICE値（e=-18, h=-10, n=0, l=10）
        #[arg(allow_hyphen_values = true)]
        priority: String,
        /// 用事
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        todo: Vec<String>,
    },
    /// 実行済みの予定を選択します（番号は一覧の左端の列）
    #[command(visible_alias = "d")]
    Done {
        #[arg(required = true, num_args = 1..)]
        numbers: Vec<usize>,
    },
}

fn main() -> Result<()> {
    // stdout carries the listing, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load()?;
    let today = JaDate::today();
    let data_file = config.data_file(args.file);
    tracing::debug!(path = %data_file.display(), %today, "starting");

    let mut scheduler =
        Scheduler::new(&data_file, today)?.with_headline(config.show_headline && !args.no_headline);
    let options = ListOptions {
        show_all: args.show_all,
        show_done: args.show_done,
    };

    let output = match args.command {
        None => scheduler.handle_show(options),
        Some(Command::Add {
            date,
            priority,
            todo,
        }) => scheduler.handle_add(&date, &priority, &todo.join(" "), options)?,
        Some(Command::Done { numbers }) => scheduler.handle_done(&numbers, options)?,
    };
    print!("{}", output);
    Ok(())
}
