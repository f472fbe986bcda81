use crate::events::AppEvent;
use async_channel::Sender;
use sweep::ipc::{self, Command};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub async fn run_server(tx: Sender<AppEvent>) {
    let socket_path = ipc::socket_path();

    // Cleanup old socket if it exists
    if fs_err::metadata(&socket_path).is_ok() {
        let _ = fs_err::remove_file(&socket_path);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!(
                "Failed to bind unix socket {}: {}",
                socket_path.display(),
                e
            );
            return;
        }
    };
    log::info!("Listening on {}", socket_path.display());

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if let Some(event) = parse_line(&line)
                            && tx.send(event).await.is_err()
                        {
                            break;
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

/// Blank lines are skipped, malformed ones logged and dropped.
fn parse_line(line: &str) -> Option<AppEvent> {
    if line.trim().is_empty() {
        return None;
    }
    match line.parse::<Command>() {
        Ok(command) => reject_relative_paths(command).map(AppEvent::from),
        Err(e) => {
            log::warn!("Ignoring control line '{}': {}", line.trim(), e);
            None
        }
    }
}

/// Relative avatar paths can't be resolved against the client's working
/// directory. The whole command is dropped so the sweep never starts around
/// an avatar the client didn't ask for.
fn reject_relative_paths(command: Command) -> Option<Command> {
    match command {
        Command::SignIn(Some(path)) if !path.is_absolute() => {
            log::warn!(
                "Ignoring sign-in: avatar path {} is not absolute",
                path.display()
            );
            None
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("start"), Some(AppEvent::Start));
        assert_eq!(parse_line("reload\n"), Some(AppEvent::ConfigReload));
        assert_eq!(
            parse_line("min-radius 64"),
            Some(AppEvent::MinRadius(64.0))
        );
        assert_eq!(
            parse_line("sign-in /srv/me.png"),
            Some(AppEvent::SignedIn(Some(PathBuf::from("/srv/me.png"))))
        );
    }

    #[test]
    fn test_parse_line_drops_garbage() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("show"), None);
        assert_eq!(parse_line("min-radius wide"), None);
    }

    #[test]
    fn test_relative_avatar_path_rejects_sign_in() {
        assert_eq!(parse_line("sign-in me.png"), None);
        assert_eq!(parse_line("sign-in ./pics/me.png"), None);
        assert_eq!(parse_line("sign-in"), Some(AppEvent::SignedIn(None)));
    }
}
