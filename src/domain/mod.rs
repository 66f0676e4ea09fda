//! Domain layer: orders data, the comparison chart, and cross-cutting
//! logging, errors and events.

pub mod chart;
pub mod errors;
pub mod events;
pub mod logging;
pub mod orders;
