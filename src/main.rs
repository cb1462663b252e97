//! Portfolio interactions entry point
//!
//! On the web this installs every page behaviour once the document loads.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Portfolio interactions starting...");
    if let Err(e) = portfolio_interactions::web::run() {
        log::error!("Startup failed: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use portfolio_interactions::contact::ContactAction;
    use portfolio_interactions::theme::MemoryStore;
    use portfolio_interactions::{SiteConfig, ThemeController};

    env_logger::init();
    log::info!("Portfolio interactions (native) starting...");
    log::info!("The page behaviours only run in a browser - build with `trunk serve`");

    let config = SiteConfig::load();
    let controller = ThemeController::initialize(MemoryStore::new());
    println!("Default theme: {}", controller.theme().as_str());
    for action in [ContactAction::Contact, ContactAction::GitHub, ContactAction::LinkedIn] {
        println!("{:>8}: {:?}", action.as_tag(), action.egress(&config));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
