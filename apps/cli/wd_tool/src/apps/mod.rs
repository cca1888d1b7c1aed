use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::error::Error;

mod scan;
use self::scan::*;

// From Cargo.toml
const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) trait SubApp {
    fn process(&mut self) -> Result<(), Box<dyn Error>>;
}

#[derive(Parser, Debug)]
#[command(name = PKG_NAME, version = VERSION, about = "Write defaults audit for VRC avatars")]
struct Options {
    #[arg(short, long, global = true, help = "Log extra info while scanning")]
    verbose: bool,
    #[command(subcommand)]
    commands: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    #[command(name = "scan", about = "Report animator states with write defaults enabled")]
    Scan(ScanApp),
}

#[derive(Debug)]
pub struct WdTool {
    options: Options,
}

impl WdTool {
    pub fn new() -> WdTool {
        WdTool {
            options: Options::parse()
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let log_level = if self.options.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        TermLogger::init(
            log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto)?;

        match &mut self.options.commands {
            SubCommand::Scan(app) => app.process(),
        }
    }
}
