use crate::domain::{
    chart::{ChartRenderer, ChartState, Transition, YearSeries},
    errors::{AppError, AppResult, ValidationError},
    events::{CompareEvent, EventDispatcher, InMemoryEventDispatcher},
    logging::{LogComponent, LogLevel, get_logger},
    orders::{Category, DateRange, Month, OrdersRepository, Year, compute_range},
};
use std::cell::{Cell, Ref, RefCell};

/// Validated compare form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareForm {
    pub month: Month,
    pub first_year: Year,
    pub second_year: Year,
    pub category: Category,
}

impl CompareForm {
    /// Parses raw form values: `month` "01".."12", 4-digit years, `orders`/`revenue`.
    pub fn parse(month: &str, first_year: &str, second_year: &str, category: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            month: Month::parse(month)?,
            first_year: Year::parse(first_year)?,
            second_year: Year::parse(second_year)?,
            category: Category::parse(category)?,
        })
    }

    /// Month ranges for the first and second year.
    pub fn ranges(&self) -> Result<(DateRange, DateRange), ValidationError> {
        Ok((
            compute_range(self.first_year, self.month)?,
            compute_range(self.second_year, self.month)?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered(Transition),
    /// Results arrived after a newer submission was issued and were dropped
    Superseded,
}

/// Compare use case: owns the chart state and drives fetch → join → render.
///
/// Methods take `&self` so a single controller can be shared through `Rc`
/// between overlapping submissions on the browser event loop. No borrow of the
/// state is held across an await point.
pub struct CompareController<Repo, R, D = InMemoryEventDispatcher> {
    repository: Repo,
    renderer: RefCell<R>,
    state: RefCell<ChartState>,
    latest_ticket: Cell<u64>,
    events: D,
}

impl<Repo, R> CompareController<Repo, R, InMemoryEventDispatcher>
where
    Repo: OrdersRepository,
    R: ChartRenderer,
{
    pub fn new(repository: Repo, renderer: R) -> Self {
        Self::with_events(repository, renderer, InMemoryEventDispatcher::new())
    }
}

impl<Repo, R, D> CompareController<Repo, R, D>
where
    Repo: OrdersRepository,
    R: ChartRenderer,
    D: EventDispatcher,
{
    pub fn with_events(repository: Repo, renderer: R, events: D) -> Self {
        Self {
            repository,
            renderer: RefCell::new(renderer),
            state: RefCell::new(ChartState::Uninitialized),
            latest_ticket: Cell::new(0),
            events,
        }
    }

    pub fn state(&self) -> Ref<'_, ChartState> {
        self.state.borrow()
    }

    pub fn is_rendered(&self) -> bool {
        self.state.borrow().is_rendered()
    }

    pub fn renderer(&self) -> Ref<'_, R> {
        self.renderer.borrow()
    }

    pub fn events(&self) -> &D {
        &self.events
    }

    /// Entry point for raw form values.
    pub async fn submit(
        &self,
        month: &str,
        first_year: &str,
        second_year: &str,
        category: &str,
    ) -> AppResult<SubmitOutcome> {
        match CompareForm::parse(month, first_year, second_year, category) {
            Ok(form) => self.compare_submit(form).await,
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Fetch both years concurrently, then create or update the chart.
    ///
    /// Fails as a whole if either fetch fails; the chart state is left untouched.
    pub async fn compare_submit(&self, form: CompareForm) -> AppResult<SubmitOutcome> {
        let (first_range, second_range) = match form.ranges() {
            Ok(ranges) => ranges,
            Err(error) => return Err(self.reject(error)),
        };
        let ticket = self.issue_ticket();

        crate::log_info!(
            LogComponent::Application("CompareController"),
            "🔄 #{} comparing {} {} vs {} {} ({})",
            ticket,
            form.month.name(),
            form.first_year,
            form.month.name(),
            form.second_year,
            form.category.as_ref()
        );

        let joined = futures::try_join!(
            self.repository.fetch_orders_by_day(&first_range),
            self.repository.fetch_orders_by_day(&second_range),
        );
        // Stale submissions are dropped whether the join succeeded or failed.
        if let Some(latest) = self.newer_than(ticket) {
            get_logger().log_with_metadata(
                LogLevel::Debug,
                LogComponent::Application("CompareController"),
                "Dropping stale comparison",
                &format!("ticket={ticket} latest={latest} failed={}", joined.is_err()),
            );
            self.events.publish(CompareEvent::SubmitSuperseded { ticket, latest });
            return Ok(SubmitOutcome::Superseded);
        }

        let (first_records, second_records) = match joined {
            Ok(records) => records,
            Err(error) => return Err(self.fail(ticket, error.into())),
        };

        let days = first_range.days().max(second_range.days());
        let first = YearSeries::project(form.first_year.to_string(), &first_records, form.category, days);
        let second = YearSeries::project(form.second_year.to_string(), &second_records, form.category, days);

        let rendered = {
            let mut renderer = self.renderer.borrow_mut();
            self.state.borrow_mut().render(first, second, &mut *renderer)
        };
        let transition = match rendered {
            Ok(transition) => transition,
            Err(error) => return Err(self.fail(ticket, error.into())),
        };

        let years = (form.first_year, form.second_year);
        let event = match transition {
            Transition::Created | Transition::Recreated => CompareEvent::ChartCreated {
                month: form.month,
                years,
                category: form.category,
                days,
            },
            Transition::Updated => CompareEvent::ChartUpdated {
                month: form.month,
                years,
                category: form.category,
                days,
            },
        };
        self.events.publish(event);

        get_logger().info(
            LogComponent::Application("CompareController"),
            &format!("✅ #{ticket} chart {transition:?} with {days} days"),
        );
        Ok(SubmitOutcome::Rendered(transition))
    }

    fn reject(&self, error: ValidationError) -> AppError {
        crate::log_warn!(LogComponent::Application("CompareController"), "⚠️ {}", error);
        self.events.publish(CompareEvent::SubmitFailed { ticket: None, reason: error.to_string() });
        error.into()
    }

    /// Latest ticket if one was issued after `ticket`.
    fn newer_than(&self, ticket: u64) -> Option<u64> {
        let latest = self.latest_ticket.get();
        (latest != ticket).then_some(latest)
    }

    fn issue_ticket(&self) -> u64 {
        let ticket = self.latest_ticket.get() + 1;
        self.latest_ticket.set(ticket);
        ticket
    }

    fn fail(&self, ticket: u64, error: AppError) -> AppError {
        crate::log_error!(LogComponent::Application("CompareController"), "❌ #{} comparison failed: {}", ticket, error);
        self.events.publish(CompareEvent::SubmitFailed { ticket: Some(ticket), reason: error.to_string() });
        error
    }
}
