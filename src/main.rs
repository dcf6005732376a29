use admin_board::app::App;
use admin_board::core::config::AppConfig;
use admin_board::core::services::LocalStorage;
use admin_board::logging::init_logging;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&LocalStorage);
    init_logging(&config.log_filter);
    tracing::info!(filter = %config.log_filter, "starting admin board");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
