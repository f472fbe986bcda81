//! Line protocol between the `sweep` CLI and the radar daemon.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{EnumString, IntoStaticStr};
use thiserror::Error;

const SOCKET_NAME: &str = "radar.sock";
const FALLBACK_SOCKET_PATH: &str = "/tmp/radar.sock";

pub fn socket_path() -> PathBuf {
    xdg::BaseDirectories::with_prefix("radar")
        .place_runtime_file(SOCKET_NAME)
        .unwrap_or_else(|_| PathBuf::from(FALLBACK_SOCKET_PATH))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
enum Verb {
    Start,
    Stop,
    SignIn,
    SignOut,
    MinRadius,
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Stop,
    /// Session began; the path, if any, points at the avatar image.
    SignIn(Option<PathBuf>),
    SignOut,
    MinRadius(f64),
    Reload,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("'{verb}' takes no argument, got '{arg}'")]
    UnexpectedArgument { verb: &'static str, arg: String },
    #[error("invalid radius '{0}'")]
    InvalidRadius(String),
}

impl Verb {
    fn name(self) -> &'static str {
        self.into()
    }
}

impl Command {
    fn verb(&self) -> Verb {
        match self {
            Self::Start => Verb::Start,
            Self::Stop => Verb::Stop,
            Self::SignIn(_) => Verb::SignIn,
            Self::SignOut => Verb::SignOut,
            Self::MinRadius(_) => Verb::MinRadius,
            Self::Reload => Verb::Reload,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb().name())?;
        match self {
            Self::SignIn(Some(path)) => write!(f, " {}", path.display()),
            Self::MinRadius(px) => write!(f, " {}", px),
            _ => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }
        let (head, arg) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest.trim()).filter(|s| !s.is_empty())),
            None => (line, None),
        };
        let verb = Verb::from_str(head).map_err(|_| CommandError::Unknown(head.to_string()))?;

        let no_arg = |cmd: Command| match arg {
            Some(arg) => Err(CommandError::UnexpectedArgument {
                verb: verb.name(),
                arg: arg.to_string(),
            }),
            None => Ok(cmd),
        };

        match verb {
            Verb::Start => no_arg(Command::Start),
            Verb::Stop => no_arg(Command::Stop),
            Verb::SignOut => no_arg(Command::SignOut),
            Verb::Reload => no_arg(Command::Reload),
            Verb::SignIn => Ok(Command::SignIn(arg.map(PathBuf::from))),
            Verb::MinRadius => {
                let arg = arg.ok_or(CommandError::MissingArgument(verb.name()))?;
                arg.parse::<f64>()
                    .ok()
                    .filter(|px| px.is_finite() && *px >= 0.0)
                    .map(Command::MinRadius)
                    .ok_or_else(|| CommandError::InvalidRadius(arg.to_string()))
            }
        }
    }
}
