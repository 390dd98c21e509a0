mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use lexopt::{Arg, Parser, ValueExt};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: cursnake [<options>]

Play snake in the terminal

Options:
  -c, --config <PATH>       Read configuration from the given file
      --log-file <PATH>     Write log messages to the given file
      --log-level <LEVEL>   Log messages at the given level and higher
                            [default: info]
  -h, --help                Show this help message and exit
  -V, --version             Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Action {
    Run(Arguments),
    Help,
    Version,
}

impl Action {
    fn from_parser(mut parser: Parser) -> Result<Action, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Long("log-level") => args.log_level = parser.value()?.parse()?,
                Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Action::Run(args))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: LevelFilter,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            config: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        if let Some(ref path) = self.log_file {
            let file = fs_err::File::create(path)?;
            WriteLogger::init(self.log_level, simplelog::Config::default(), file)
                .context("failed to initialize logging")?;
        }
        let config = self.load_config()?;
        log::debug!("Using settings {:?}", config.game);
        let app = App::new(Game::new(config.game));
        let terminal = ratatui::init();
        let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
            .and_then(|()| app.run(terminal));
        // Restore the terminal even if the game failed
        release_mouse(&mut io::stdout());
        ratatui::restore();
        r.map_err(Into::into)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match self.config {
            Some(ref path) => Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => {
                let path = Config::default_path()?;
                Config::load(&path, true).with_context(|| {
                    format!("failed to load configuration from {}", path.display())
                })
            }
        }
    }
}

/// Turn off mouse capture and focus reporting, logging any failure
fn release_mouse<W: Write>(out: &mut W) {
    if let Err(e) = execute!(out, DisableFocusChange, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
}

fn main() -> ExitCode {
    match Action::from_parser(Parser::from_env()) {
        Ok(Action::Run(args)) => exit_code(args.run()),
        Ok(Action::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Action::Version) => {
            println!("cursnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cursnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("cursnake: {e:#}");
            ExitCode::from(2)
        }
    }
}
