use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use vkbd_core::{HostBridge, ImeSession, LayoutTable};
use vkbd_tools::{init_logging, parse_script, run_script, PrintSink, SessionConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay keyboard input against an IME session", long_about = None)]
struct Args {
    /// Replay script (reads stdin when omitted)
    script: Option<PathBuf>,

    /// TOML session config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host locale, overriding the config
    #[arg(short, long)]
    locale: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = Some(locale);
    }

    let source = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            source
        }
    };
    let script = parse_script(&source)?;

    let table = Arc::new(LayoutTable::builtin().context("Built-in layout table is invalid")?);
    let bridge = if config.host_sink {
        HostBridge::with_sink(PrintSink)
    } else {
        HostBridge::console()
    };

    let mut session = ImeSession::new(table, bridge);
    let mode = config.start(&mut session);
    info!("Session started in {:?} mode for '{}'", mode, session.active_language());

    run_script(&mut session, &script)?;
    info!("Composed text: {:?}", session.engine().composed_text());
    Ok(())
}
