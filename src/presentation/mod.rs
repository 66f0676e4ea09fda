//! Browser entry points: the `#[wasm_bindgen]` API and controller wiring shared
//! with the Leptos page in `app.rs`.

pub mod wasm_api;

use crate::application::CompareController;
use crate::config::CompareConfig;
use crate::infrastructure::{http::OrdersRestClient, rendering::CanvasRenderer};

pub type BrowserCompareController = CompareController<OrdersRestClient, CanvasRenderer>;

pub fn build_controller(config: &CompareConfig) -> BrowserCompareController {
    CompareController::new(
        OrdersRestClient::from_config(config),
        CanvasRenderer::new(config.canvas_id.clone(), config.width, config.height),
    )
}
