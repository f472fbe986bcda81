use std::path::PathBuf;
use sweep::ipc::Command;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Start,
    Stop,
    SignedIn(Option<PathBuf>),
    SignedOut,
    MinRadius(f64),
    ConfigReload,
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => AppEvent::Start,
            Command::Stop => AppEvent::Stop,
            Command::SignIn(avatar) => AppEvent::SignedIn(avatar),
            Command::SignOut => AppEvent::SignedOut,
            Command::MinRadius(px) => AppEvent::MinRadius(px),
            Command::Reload => AppEvent::ConfigReload,
        }
    }
}
