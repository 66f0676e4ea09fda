use crate::domain::orders::{Category, Month, Year};
use std::cell::RefCell;
use std::fmt::Debug;

pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Outcomes of a single compare submission
#[derive(Debug, Clone, PartialEq)]
pub enum CompareEvent {
    ChartCreated {
        month: Month,
        years: (Year, Year),
        category: Category,
        days: usize,
    },
    ChartUpdated {
        month: Month,
        years: (Year, Year),
        category: Category,
        days: usize,
    },
    /// A newer submission was issued while this one was in flight
    SubmitSuperseded { ticket: u64, latest: u64 },
    /// `ticket` is `None` when the form was rejected before any request
    SubmitFailed { ticket: Option<u64>, reason: String },
}

impl DomainEvent for CompareEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CompareEvent::ChartCreated { .. } => "ChartCreated",
            CompareEvent::ChartUpdated { .. } => "ChartUpdated",
            CompareEvent::SubmitSuperseded { .. } => "SubmitSuperseded",
            CompareEvent::SubmitFailed { .. } => "SubmitFailed",
        }
    }
}

pub trait EventDispatcher {
    fn publish(&self, event: CompareEvent);
}

/// Single-threaded dispatcher; handlers run synchronously in subscription order.
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    handlers: RefCell<Vec<Box<dyn Fn(&CompareEvent)>>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&CompareEvent) + 'static,
    {
        self.handlers.borrow_mut().push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish(&self, event: CompareEvent) {
        for handler in self.handlers.borrow().iter() {
            handler(&event);
        }
    }
}
