use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use vkbd_core::render::render_engine;
use vkbd_core::{KeyboardEngine, LayoutTable, ModifierState, ModifierToggle};
use vkbd_tools::{init_logging, verify_builtin};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and verify the built-in keyboard layouts", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered layouts in carousel order
    List,

    /// Print the key labels of one layout
    Show {
        /// Language code, e.g. vie
        code: String,

        /// Modifier state: normal, shift, alt or alt-shift
        #[arg(short, long, default_value = "normal")]
        state: String,

        /// Print the rendered HTML instead of plain labels
        #[arg(long)]
        html: bool,
    },

    /// Validate every layout and check transforms against NFC
    Verify {
        /// Also list transforms NFC does not reproduce
        #[arg(long)]
        details: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            let table = LayoutTable::builtin().context("Built-in layout table is invalid")?;
            for layout in table.iter() {
                println!("{}\t{}\t{}", layout.code(), layout.locale(), layout.name());
            }
        }
        Commands::Show { code, state, html } => show(&code, &state, html)?,
        Commands::Verify { details } => {
            let reports = verify_builtin()?;
            for report in &reports {
                println!("{}", report);
                if details {
                    for (key, output) in &report.non_nfc {
                        println!("    {:?} -> {:?}", key, output);
                    }
                }
            }
            println!("{} layouts OK", reports.len());
        }
    }
    Ok(())
}

fn show(code: &str, state: &str, html: bool) -> Result<()> {
    let Some(state) = ModifierState::from_name(state) else {
        bail!("Unknown modifier state '{}'", state);
    };

    let table = Arc::new(LayoutTable::builtin().context("Built-in layout table is invalid")?);
    let mut engine = KeyboardEngine::new(table);
    if !engine.initialize(code, |_| {}) {
        bail!("No layout registered for '{}'", code);
    }
    engine.show();
    if state.has_shift() {
        engine.set_modifier(ModifierToggle::Shift);
    }
    if state.has_alt() {
        engine.set_modifier(ModifierToggle::Alt);
    }

    if html {
        if let Some(markup) = render_engine(&engine) {
            println!("{}", markup);
        }
        return Ok(());
    }

    if let Some(grid) = engine.grid() {
        for row in grid.rows() {
            let labels: Vec<&str> = row.iter().map(|key| key.label.as_str()).collect();
            println!("{}", labels.join(" "));
        }
    }
    Ok(())
}
