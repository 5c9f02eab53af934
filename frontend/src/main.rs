use log::{error, info};

use site_ui::config;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site behaviors");
    if let Err(err) = site_ui::web::start() {
        error!("site behaviors not started: {}", err);
    }
}
