pub mod compare_controller;

pub use compare_controller::*;
