use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::{BrowserCompareController, build_controller};
use crate::application::SubmitOutcome;
use crate::config::CompareConfig;
use crate::domain::chart::Transition;
use crate::domain::logging::{LogComponent, get_logger};

/// JS facade for pages that keep their own form markup.
///
/// ```js
/// const api = new CompareChartApi("chart");
/// form.addEventListener("submit", (e) => {
///   e.preventDefault();
///   api.compare(month, firstYear, secondYear, category).catch(console.error);
/// });
/// ```
#[wasm_bindgen]
pub struct CompareChartApi {
    controller: Rc<BrowserCompareController>,
}

#[wasm_bindgen]
impl CompareChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String, base_url: Option<String>, template: Option<String>) -> Self {
        let mut config = CompareConfig::default().with_canvas(canvas_id);
        if let Some(base_url) = base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(template) = template {
            config = config.with_template(template);
        }

        get_logger().info(
            LogComponent::Presentation("CompareChartApi"),
            &format!("🚀 Compare API bound to #{} via {}", config.canvas_id, config.orders_endpoint()),
        );

        Self { controller: Rc::new(build_controller(&config)) }
    }

    /// Resolves to `"created"`, `"updated"`, `"recreated"` or `"superseded"`;
    /// rejects with the error message.
    pub fn compare(&self, month: String, first_year: String, second_year: String, category: String) -> Promise {
        let controller = Rc::clone(&self.controller);
        future_to_promise(async move {
            controller
                .submit(&month, &first_year, &second_year, &category)
                .await
                .map(|outcome| JsValue::from_str(outcome_name(outcome)))
                .map_err(|error| JsValue::from_str(&error.to_string()))
        })
    }

    #[wasm_bindgen(js_name = isRendered)]
    pub fn is_rendered(&self) -> bool {
        self.controller.is_rendered()
    }

    /// Current chart data as Chart.js-shaped JSON, if a chart exists.
    #[wasm_bindgen(js_name = chartData)]
    pub fn chart_data(&self) -> Option<String> {
        self.controller.state().chart().map(|chart| chart.to_config_json().to_string())
    }
}

pub fn outcome_name(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Rendered(Transition::Created) => "created",
        SubmitOutcome::Rendered(Transition::Updated) => "updated",
        SubmitOutcome::Rendered(Transition::Recreated) => "recreated",
        SubmitOutcome::Superseded => "superseded",
    }
}
