use wasm_bindgen::prelude::*;

use crate::config::CompareConfig;
use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Installs the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = CompareConfig::default();
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Orders compare ready, API at {}", config.orders_endpoint()),
    );
}

/// Mounts the Leptos compare page into `<body>`.
#[wasm_bindgen(js_name = mountComparePage)]
pub fn mount_compare_page() {
    leptos::mount_to_body(app::App);
}
