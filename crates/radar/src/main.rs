use radar::config;
use radar::gui::app::AppModel;
use radar::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    match config::write_default_config() {
        Ok(path) => log::debug!("Using config at {}", path.display()),
        Err(e) => log::warn!("Could not create default config: {}", e),
    }
    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.bis.radar");

    app.run::<AppModel>((config, rx));
}
