use clap::{Parser, Subcommand};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use sweep::ipc::{self, Command};

#[derive(Parser, Debug)]
#[command(name = "sweep", version, about = "Control a running radar daemon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Start the sweep animation
    Start,
    /// Stop the sweep animation
    Stop,
    /// Sign in, optionally showing an avatar image at the center
    SignIn {
        /// Image file used as the avatar
        avatar: Option<PathBuf>,
    },
    /// Sign out, stopping the sweep and clearing the avatar
    SignOut,
    /// Set the radius the rings grow from
    MinRadius {
        /// Radius in pixels
        px: f64,
    },
    /// Reload the daemon configuration
    Reload,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Start => Command::Start,
            Commands::Stop => Command::Stop,
            Commands::SignIn { avatar } => Command::SignIn(avatar),
            Commands::SignOut => Command::SignOut,
            Commands::MinRadius { px } => Command::MinRadius(px),
            Commands::Reload => Command::Reload,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // the daemon resolves nothing relative to our working directory
    let command = match cli.command {
        Commands::SignIn {
            avatar: Some(path),
        } => Command::SignIn(Some(std::path::absolute(&path)?)),
        other => Command::from(other),
    };
    if let Command::MinRadius(px) = command
        && !(px.is_finite() && px >= 0.0)
    {
        anyhow::bail!("min radius must be a non-negative number, got {}", px);
    }
    send_command(&command)
}

fn send_command(cmd: &Command) -> anyhow::Result<()> {
    let path = ipc::socket_path();
    let mut stream = UnixStream::connect(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to radar daemon at {}: {}. Is radar running?",
            path.display(),
            e
        )
    })?;

    log::debug!("sending '{}' to {}", cmd, path.display());
    writeln!(stream, "{}", cmd)?;
    Ok(())
}
