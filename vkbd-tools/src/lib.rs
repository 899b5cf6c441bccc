pub mod config;
pub mod script;
pub mod verify;

pub use config::SessionConfig;
pub use script::{parse_script, run_command, run_script, ReplayCommand, ScriptError, ScriptLine};
pub use verify::{verify_builtin, verify_table, LayoutReport};

use vkbd_core::CommandSink;

/// Host sink printing every command as a `sendCommand` call
#[derive(Debug, Default)]
pub struct PrintSink;

impl CommandSink for PrintSink {
    fn send_command(&mut self, name: &str, value: &str) {
        println!("sendCommand({:?}, {:?})", name, value);
    }
}

/// Sets up `env_logger`; `RUST_LOG` wins over the verbose flag
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
