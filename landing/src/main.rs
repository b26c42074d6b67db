// FixBot landing page: Leptos 0.8 CSR
// Developed by the FixBot team (c)2025

mod mount;
mod reveal;

use fixbot_page::components::LandingPage;
use fixbot_page::content::SiteContent;
use fixbot_page::MOUNT_ID;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let content = match SiteContent::fixbot() {
        Ok(content) => content,
        Err(err) => {
            log::error!("bundled page content rejected: {err}");
            return;
        }
    };

    let app = move || view! { <LandingPage content=content /> };
    match mount::root_element(MOUNT_ID) {
        Ok(root) => leptos::mount::mount_to(root, app).forget(),
        Err(err) => {
            log::error!("{err}; mounting on <body> instead");
            leptos::mount::mount_to_body(app);
        }
    }

    let observed = reveal::observe_reveals();
    log::info!("landing page mounted, {observed} reveal targets");
}

/// Route `log` records to the browser console.
///
/// Returns `false` when a logger was already installed; that logger keeps
/// receiving records, including the warning about the failed install.
fn init_logging() -> bool {
    match console_log::init_with_level(log::Level::Info) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("console logger not installed: {err}");
            false
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn second_logger_install_is_reported() {
        init_logging();
        assert!(!init_logging());
    }
}
