use comic_viewer::app::App;
use comic_viewer::config::Config;
use tracing::{error, info, Level};

fn main() {
    let config = Config::from_env();

    let level = config.level().unwrap_or(Level::INFO);
    dioxus_logger::init(level).expect("failed to init logger");

    if let Err(e) = config.validate() {
        error!(error = %e, "invalid configuration, requests will fail");
    }

    info!(
        api_url = %config.api_url,
        "comic-viewer v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    dioxus::launch(App);
}
