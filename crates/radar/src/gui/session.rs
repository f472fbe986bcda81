use crate::config::Config;
use crate::gui::avatar::Avatar;
use std::path::PathBuf;
use sweep::RingAnimator;

/// Everything the window shows, without the widgets. Messages from the
/// component land here and the draw func reads it back.
pub struct Session {
    pub animator: RingAnimator,
    pub avatar: Avatar,
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            animator: RingAnimator::new(config.sweep.clone()),
            avatar: Avatar::placeholder(config.avatar.size),
            config,
        }
    }

    pub fn start(&mut self) {
        self.animator.start();
        log::info!("Sweep started");
    }

    pub fn stop(&mut self) {
        self.animator.stop();
        log::info!("Sweep stopped");
    }

    /// Shows the avatar and starts the sweep around it. An avatar that fails
    /// to load leaves the sweep as it was.
    pub fn sign_in(&mut self, path: Option<PathBuf>) {
        let size = self.config.avatar.size;
        let avatar = match path.or_else(|| self.config.avatar.path.clone()) {
            Some(path) => match Avatar::load(&path, size) {
                Ok(avatar) => avatar,
                Err(e) => {
                    log::warn!("Failed to load avatar {}: {}", path.display(), e);
                    return;
                }
            },
            None => Avatar::placeholder(size),
        };

        self.animator.set_min_radius(avatar.radius());
        self.animator.start();
        self.avatar = avatar;
        log::info!("Signed in");
    }

    pub fn sign_out(&mut self) {
        self.animator.stop();
        self.avatar = Avatar::placeholder(self.config.avatar.size);
        log::info!("Signed out");
    }

    /// Takes over a reloaded config. If the avatar can't be redrawn at a new
    /// size, the old size stays in effect.
    pub fn apply_config(&mut self, mut new_config: Config) {
        if new_config.avatar.size != self.config.avatar.size {
            match self.avatar.resized(new_config.avatar.size) {
                Ok(avatar) => {
                    self.animator.set_min_radius(avatar.radius());
                    self.avatar = avatar;
                }
                Err(e) => {
                    log::warn!(
                        "Failed to resize avatar, keeping {}px: {}",
                        self.config.avatar.size,
                        e
                    );
                    new_config.avatar.size = self.config.avatar.size;
                }
            }
        }

        self.animator.set_settings(new_config.sweep.clone());
        self.config = new_config;
    }
}
