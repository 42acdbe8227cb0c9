mod app;
mod audio;
mod bestscore;
mod config;
mod consts;
mod difficulty;
mod game;
mod input;
mod menu;
mod scheduler;
mod screen;
mod util;
mod warning;
use crate::app::App;
use crate::audio::Mixer;
use crate::bestscore::BestScore;
use crate::config::Config;
use crate::game::Session;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable for configuring the log level
static LOG_ENV_VAR: &str = "TERMSNAKE_LOG";

static USAGE: &str = "\
Usage: termsnake [<options>]

Classic Snake in the terminal

Options:
  -c <file>, --config <file>
                    Read configuration from the given file
      --mute        Start with sound muted
  -h, --help        Display this help message and exit
  -V, --version     Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: lexopt::Parser) -> Result<Command, lexopt::Error> {
        use lexopt::prelude::*;
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Long("mute") => args.mute = true,
                Short('h') | Long("help") => return Ok(Command::Help),
                Short('V') | Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }

    fn run(self) -> ExitCode {
        match self {
            Command::Run(args) => match args.run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("termsnake: {e:?}");
                    ExitCode::from(2)
                }
            },
            Command::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Command::Version => {
                println!("termsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    mute: bool,
}

impl Arguments {
    fn run(self) -> anyhow::Result<()> {
        let mut config = self.load_config()?;
        if self.mute {
            config.audio.muted = true;
        }
        if let Some(path) = config.log_file() {
            init_logging(&path);
        }
        tracing::info!(
            difficulty = %config.game.difficulty,
            grid = ?config.game.grid.size(),
            "Starting termsnake"
        );
        let (best, warning) = load_best_score(&config);
        let mixer = Mixer::new(
            config.audio.output.open(),
            config.audio.volume,
            config.audio.muted,
        );
        let session = Session::new(config.game.grid, config.game.difficulty, rand::rng());
        let app = App::new(session, mixer, best, warning);
        let mut terminal = ratatui::init();
        let r = crossterm::execute!(terminal.backend_mut(), EnableFocusChange)
            .and_then(|()| app.run(terminal));
        // Not every terminal knows about focus reporting; ignore failures
        let _ = crossterm::execute!(io::stdout(), DisableFocusChange);
        ratatui::restore();
        match r {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
            r => r.context("terminal I/O failed"),
        }
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match self.config {
            Some(ref path) => Config::load(path, false)
                .with_context(|| format!("failed to load configuration from {}", path.display())),
            None => match Config::default_path() {
                Ok(path) => Config::load(&path, true).with_context(|| {
                    format!("failed to load configuration from {}", path.display())
                }),
                Err(_) => Ok(Config::default()),
            },
        }
    }
}

/// Set up logging to the file at `path`.  If the file cannot be opened, the
/// program runs without logging.
fn init_logging(path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if fs_err::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    else {
        return;
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

/// Load the best score, if saving it is enabled.  If the file could not be
/// read, a warning for the user is returned as well.
fn load_best_score(config: &Config) -> (BestScore, Option<Warning>) {
    let Some(path) = config.best_score_file() else {
        return (BestScore::default(), None);
    };
    let (best, err) = BestScore::load(path);
    let warning = err.map(|e| {
        tracing::warn!(error = %e, source = ?std::error::Error::source(&e), "Could not read best score; starting from zero");
        Warning::from(e)
    });
    (best, warning)
}

fn main() -> ExitCode {
    match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("termsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(lexopt::Parser::from_iter(
            std::iter::once("termsnake").chain(args.iter().copied()),
        ))
    }

    #[rstest]
    #[case(&[], Command::Run(Arguments::default()))]
    #[case(&["--mute"], Command::Run(Arguments { config: None, mute: true }))]
    #[case(&["-c", "snake.toml"], Command::Run(Arguments { config: Some(PathBuf::from("snake.toml")), mute: false }))]
    #[case(&["--config=snake.toml", "--mute"], Command::Run(Arguments { config: Some(PathBuf::from("snake.toml")), mute: true }))]
    #[case(&["--help"], Command::Help)]
    #[case(&["--mute", "-h"], Command::Help)]
    #[case(&["-V"], Command::Version)]
    fn test_parse(#[case] args: &[&str], #[case] cmd: Command) {
        assert_eq!(parse(args).unwrap(), cmd);
    }

    #[rstest]
    #[case(&["--speed"])]
    #[case(&["extra"])]
    #[case(&["--config"])]
    fn test_parse_error(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Arguments {
            config: Some(dir.path().join("nope.toml")),
            mute: false,
        };
        assert!(args.load_config().is_err());
    }

    #[test]
    fn best_score_disabled() {
        let config = toml::from_str::<Config>("[files]\nsave-best-score = false\n").unwrap();
        let (best, warning) = load_best_score(&config);
        assert_eq!(best, BestScore::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_best_score_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("best.json");
        fs_err::write(&path, "[]").unwrap();
        let config = toml::from_str::<Config>(&format!(
            "[files]\nbest-score-file = {:?}\n",
            path.display().to_string()
        ))
        .unwrap();
        let (best, warning) = load_best_score(&config);
        assert_eq!(best.get(), 0);
        assert!(warning.is_some());
    }
}
