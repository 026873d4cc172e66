mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod logo;
mod options;
mod session;
mod startup;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

static HELP: &str = concat!(
    "Usage: snakez [-c PATH]\n",
    "\n",
    "Classic Snake in the terminal\n",
    "\n",
    "Options:\n",
    "  -c PATH, --config PATH    Read configuration from PATH\n",
    "  -h, --help                Show this help and exit\n",
    "  -V, --version             Show the program version and exit\n",
);

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snakez: {e}");
            return ExitCode::from(2);
        }
    };
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("snakez: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = App::new(config).run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Args {
    /// Path given with `--config`, overriding the default location
    config: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        Args::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Option<Args>, lexopt::Error> {
        let mut args = Args::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => {
                    print!("{HELP}");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                other => return Err(other.unexpected()),
            }
        }
        Ok(Some(args))
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match self.config {
            // An explicitly-given file must exist
            Some(ref path) => Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => {
                let path =
                    Config::default_path().context("failed to locate configuration file")?;
                Config::load(&path, true).with_context(|| {
                    format!("failed to load configuration from {}", path.display())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::from_parser(Parser::from_args(std::iter::empty::<&str>()))
            .unwrap()
            .unwrap();
        assert_eq!(args, Args::default());
    }

    #[test]
    fn config_argument() {
        let args = Args::from_parser(Parser::from_args(["--config", "custom.toml"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        let args = Args::from_parser(Parser::from_args(["-c", "custom.toml"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn help_short_circuits() {
        let args = Args::from_parser(Parser::from_args(["--help", "--config"])).unwrap();
        assert_eq!(args, None);
    }

    #[test]
    fn unexpected_argument() {
        assert!(Args::from_parser(Parser::from_args(["--frobnicate"])).is_err());
    }

    #[test]
    fn missing_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            config: Some(dir.path().join("nope.toml")),
        };
        assert!(args.load_config().is_err());
    }

    #[test]
    fn explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[options]\nsound = false\n").unwrap();
        let args = Args { config: Some(path) };
        let config = args.load_config().unwrap();
        assert!(!config.options.sound);
    }
}
