use tinmind::components::App;

#[cfg(feature = "web")]
use tinmind_core::config::ROOT_ELEMENT_ID;

fn main() {
    // Initialize cross-platform logger (web console + stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "web")]
    {
        // Pages without the host element simply don't get search.
        if let Err(e) = tinmind::platform::require_element(ROOT_ELEMENT_ID) {
            dioxus::logger::tracing::warn!("Search disabled: {}", e);
            return;
        }

        dioxus::LaunchBuilder::web()
            .with_cfg(dioxus::web::Config::new().rootname(ROOT_ELEMENT_ID))
            .launch(App);
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = App;
        dioxus::logger::tracing::warn!("Built without the `web` feature; nothing to launch");
    }
}
