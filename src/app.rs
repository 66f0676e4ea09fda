use leptos::*;
use std::rc::Rc;
use strum::IntoEnumIterator;

use crate::{
    config::CompareConfig,
    domain::{
        events::CompareEvent,
        logging::{LogComponent, get_logger},
        orders::{Category, Month},
    },
    presentation::build_controller,
};

/// 🦀 Root component: compare form above the chart canvas
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .compare-app { font-family: -apple-system, BlinkMacSystemFont, sans-serif; max-width: 860px; margin: 0 auto; padding: 20px; }
            .compare-form { display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 16px; }
            .compare-form label { display: flex; flex-direction: column; font-size: 12px; color: #555; }
            .compare-form input[type=text] { width: 5em; }
            .compare-form fieldset { border: none; display: flex; gap: 8px; padding: 0; }
            .compare-form fieldset label { flex-direction: row; gap: 4px; }
            .status { min-height: 1.2em; font-size: 13px; color: #666; }
            "#}
        </style>
        <div class="compare-app">
            <h1>"Orders by day: year over year"</h1>
            <ComparePage config=CompareConfig::default() />
        </div>
    }
}

/// Form + canvas bound to a single compare controller
#[component]
pub fn ComparePage(config: CompareConfig) -> impl IntoView {
    let controller = Rc::new(build_controller(&config));

    let (month, set_month) = create_signal(Month::January);
    let (first_year, set_first_year) = create_signal(String::from("2015"));
    let (second_year, set_second_year) = create_signal(String::from("2014"));
    let (category, set_category) = create_signal(Category::Orders);
    let (status, set_status) = create_signal(String::new());

    controller.events().subscribe(move |event| set_status.set(status_line(event)));

    let on_submit = {
        let controller = Rc::clone(&controller);
        move |ev: ev::SubmitEvent| {
            // The page must not navigate; everything happens in place.
            ev.prevent_default();

            let controller = Rc::clone(&controller);
            let month = month.get_untracked().to_string();
            let first = first_year.get_untracked();
            let second = second_year.get_untracked();
            let category = category.get_untracked();

            set_status.set("Loading…".to_string());
            spawn_local(async move {
                // Failures are already reported through the event subscription.
                if let Err(error) = controller.submit(&month, &first, &second, category.as_ref()).await {
                    get_logger().debug(LogComponent::Presentation("ComparePage"), &error.to_string());
                }
            });
        }
    };

    view! {
        <form class="compare-form" on:submit=on_submit>
            <label>
                "Month"
                <select
                    name="month"
                    on:change=move |ev| {
                        if let Ok(selected) = Month::parse(&event_target_value(&ev)) {
                            set_month.set(selected);
                        }
                    }
                >
                    {Month::iter()
                        .map(|m| {
                            view! {
                                <option value=m.to_string() selected=move || month.get() == m>
                                    {m.name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                "First year"
                <input
                    type="text"
                    name="first-year"
                    maxlength="4"
                    prop:value=first_year
                    on:input=move |ev| set_first_year.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Second year"
                <input
                    type="text"
                    name="second-year"
                    maxlength="4"
                    prop:value=second_year
                    on:input=move |ev| set_second_year.set(event_target_value(&ev))
                />
            </label>
            <fieldset>
                {Category::iter()
                    .map(|c| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="category"
                                    value=c.as_ref().to_string()
                                    prop:checked=move || category.get() == c
                                    on:change=move |_| set_category.set(c)
                                />
                                {c.to_string()}
                            </label>
                        }
                    })
                    .collect_view()}
            </fieldset>
            <button type="submit">"Compare"</button>
        </form>
        <p class="status">{move || status.get()}</p>
        <canvas
            id=config.canvas_id.clone()
            width=config.width.to_string()
            height=config.height.to_string()
        ></canvas>
    }
}

/// One-line status text for a controller event
pub fn status_line(event: &CompareEvent) -> String {
    match event {
        CompareEvent::ChartCreated { month, years, category, days }
        | CompareEvent::ChartUpdated { month, years, category, days } => format!(
            "{} by day, {} {} vs {} ({} days)",
            category,
            month.name(),
            years.0,
            years.1,
            days
        ),
        CompareEvent::SubmitSuperseded { .. } => "Loading…".to_string(),
        CompareEvent::SubmitFailed { reason, .. } => format!("Could not compare: {reason}"),
    }
}
