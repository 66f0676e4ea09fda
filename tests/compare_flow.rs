use chrono::Datelike;
use futures::channel::oneshot;
use futures::executor::block_on;
use orders_compare_wasm::application::{CompareController, SubmitOutcome};
use orders_compare_wasm::domain::chart::{ChartRenderer, ChartState, LineChart, Transition};
use orders_compare_wasm::domain::errors::{AppError, DomainError, NetworkError, RenderingError};
use orders_compare_wasm::domain::events::CompareEvent;
use orders_compare_wasm::domain::orders::{DailyRecord, DateRange, OrdersRepository};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Serves one record per day: `orders = year % 100 + day`, `revenue = day * 10.5`.
#[derive(Default, Clone)]
struct FakeRepository {
    requested: Rc<RefCell<Vec<String>>>,
    failing_years: HashSet<i32>,
    gates: Rc<RefCell<HashMap<i32, oneshot::Receiver<()>>>>,
}

impl FakeRepository {
    fn failing(year: i32) -> Self {
        Self { failing_years: HashSet::from([year]), ..Self::default() }
    }

    /// Holds the fetch for `year` until the sender fires.
    fn gate(&self, year: i32) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(year, rx);
        tx
    }
}

impl OrdersRepository for FakeRepository {
    async fn fetch_orders_by_day(&self, range: &DateRange) -> Result<Vec<DailyRecord>, NetworkError> {
        self.requested.borrow_mut().push(range.query_string());
        let year = range.start().year();

        let gate = self.gates.borrow_mut().remove(&year);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.failing_years.contains(&year) {
            return Err(NetworkError::HttpStatus { status: 500, status_text: "Internal Server Error".into() });
        }

        Ok((1..=range.days() as u8)
            .map(|day| DailyRecord {
                day,
                orders: (year % 100) as u64 + day as u64,
                revenue: day as f64 * 10.5,
            })
            .collect())
    }
}

#[derive(Default)]
struct FakeRenderer {
    creates: usize,
    redraws: usize,
    last: Option<LineChart>,
    fail: Rc<Cell<bool>>,
}

impl ChartRenderer for FakeRenderer {
    fn create(&mut self, chart: &LineChart) -> Result<(), RenderingError> {
        if self.fail.get() {
            return Err(RenderingError::DrawFailed("fake".into()));
        }
        self.creates += 1;
        self.last = Some(chart.clone());
        Ok(())
    }

    fn redraw(&mut self, chart: &LineChart) -> Result<(), RenderingError> {
        if self.fail.get() {
            return Err(RenderingError::DrawFailed("fake".into()));
        }
        self.redraws += 1;
        self.last = Some(chart.clone());
        Ok(())
    }
}

type TestController = CompareController<FakeRepository, FakeRenderer>;

fn controller_with(repository: FakeRepository) -> (TestController, FakeRepository, Rc<RefCell<Vec<CompareEvent>>>) {
    let controller = CompareController::new(repository.clone(), FakeRenderer::default());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    controller.events().subscribe(move |event| sink.borrow_mut().push(event.clone()));
    (controller, repository, events)
}

fn chart(controller: &TestController) -> LineChart {
    controller.state().chart().cloned().expect("chart rendered")
}

#[test]
fn first_submit_creates_chart() {
    let (controller, repository, events) = controller_with(FakeRepository::default());

    let outcome = block_on(controller.submit("03", "2015", "2014", "orders")).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rendered(Transition::Created));
    assert_eq!(
        *repository.requested.borrow(),
        vec!["start=2015-03-01&end=2015-04-01", "start=2014-03-01&end=2014-04-01"]
    );

    let chart = chart(&controller);
    assert_eq!(chart.len(), 31);
    assert_eq!(chart.labels().first(), Some(&1));
    assert_eq!(chart.labels().last(), Some(&31));
    assert_eq!(chart.datasets()[0].label, "2015");
    assert_eq!(chart.datasets()[1].label, "2014");
    assert_eq!(chart.datasets()[0].value(0), Some(16.0));
    assert_eq!(chart.datasets()[1].value(30), Some(45.0));

    assert_eq!(controller.renderer().creates, 1);
    assert!(matches!(events.borrow()[0], CompareEvent::ChartCreated { days: 31, .. }));
}

#[test]
fn same_length_month_updates_in_place() {
    let (controller, _, events) = controller_with(FakeRepository::default());

    block_on(controller.submit("03", "2015", "2014", "orders")).unwrap();
    let labels = chart(&controller).labels().to_vec();
    let outcome = block_on(controller.submit("01", "2013", "2012", "revenue")).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rendered(Transition::Updated));
    assert_eq!(controller.renderer().creates, 1);
    assert_eq!(controller.renderer().redraws, 1);

    let chart = chart(&controller);
    assert_eq!(chart.labels(), labels.as_slice());
    assert_eq!(chart.labels(), (1..=31).collect::<Vec<u32>>().as_slice());
    assert_eq!(chart.datasets().len(), 2);
    assert_eq!(chart.datasets()[0].label, "2013");
    assert_eq!(chart.datasets()[0].value(1), Some(21.0));
    assert_eq!(controller.renderer().last.as_ref(), Some(&chart));
    assert!(matches!(events.borrow()[1], CompareEvent::ChartUpdated { .. }));
}

#[test]
fn category_selects_projected_field() {
    let (orders, _, _) = controller_with(FakeRepository::default());
    let (revenue, _, _) = controller_with(FakeRepository::default());

    block_on(orders.submit("03", "2015", "2014", "orders")).unwrap();
    block_on(revenue.submit("03", "2015", "2014", "revenue")).unwrap();

    assert_eq!(chart(&orders).datasets()[0].value(9), Some(25.0));
    assert_eq!(chart(&revenue).datasets()[0].value(9), Some(105.0));
}

#[test]
fn leap_february_pads_shorter_year() {
    let (controller, _, _) = controller_with(FakeRepository::default());

    block_on(controller.submit("02", "2016", "2015", "orders")).unwrap();

    let chart = chart(&controller);
    assert_eq!(chart.len(), 29);
    assert_eq!(chart.datasets()[0].value(28), Some(45.0));
    assert_eq!(chart.datasets()[1].value(28), None);
}

#[test]
fn month_length_change_recreates_chart() {
    let (controller, _, _) = controller_with(FakeRepository::default());

    block_on(controller.submit("03", "2015", "2014", "orders")).unwrap();
    let outcome = block_on(controller.submit("04", "2015", "2014", "orders")).unwrap();

    assert_eq!(outcome, SubmitOutcome::Rendered(Transition::Recreated));
    assert_eq!(controller.renderer().creates, 2);
    assert_eq!(chart(&controller).len(), 30);
}

#[test]
fn failed_fetch_leaves_state_untouched() {
    let (controller, _, events) = controller_with(FakeRepository::failing(2014));

    let error = block_on(controller.submit("03", "2015", "2014", "orders")).unwrap_err();

    assert!(matches!(error, AppError::Infrastructure(_)));
    assert_eq!(*controller.state(), ChartState::Uninitialized);
    assert_eq!(controller.renderer().creates, 0);
    assert!(matches!(events.borrow()[0], CompareEvent::SubmitFailed { ticket: Some(1), .. }));
}

#[test]
fn failed_fetch_keeps_previous_chart() {
    let (controller, _, _) = controller_with(FakeRepository::failing(2013));

    block_on(controller.submit("03", "2015", "2014", "orders")).unwrap();
    let before = chart(&controller);

    assert!(block_on(controller.submit("03", "2013", "2014", "orders")).is_err());
    assert!(block_on(controller.submit("03", "2015", "2013", "orders")).is_err());

    assert_eq!(chart(&controller), before);
    assert_eq!(controller.renderer().redraws, 0);
}

#[test]
fn renderer_failure_keeps_previous_chart() {
    let (controller, _, _) = controller_with(FakeRepository::default());
    let fail = Rc::clone(&controller.renderer().fail);

    block_on(controller.submit("03", "2015", "2014", "orders")).unwrap();
    let before = chart(&controller);

    fail.set(true);
    let error = block_on(controller.submit("01", "2013", "2012", "revenue")).unwrap_err();

    assert!(matches!(error, AppError::Infrastructure(_)));
    assert_eq!(chart(&controller), before);
}

#[test]
fn invalid_input_sends_no_request() {
    let (controller, repository, events) = controller_with(FakeRepository::default());

    for (month, first, second, category) in [
        ("13", "2015", "2014", "orders"),
        ("03", "15", "2014", "orders"),
        ("03", "2015", "abcd", "orders"),
        ("03", "2015", "2014", "profit"),
    ] {
        let error = block_on(controller.submit(month, first, second, category)).unwrap_err();
        assert!(matches!(error, AppError::Domain(DomainError::Validation(_))));
    }

    assert!(repository.requested.borrow().is_empty());
    assert!(!controller.is_rendered());
    assert_eq!(events.borrow().len(), 4);
    assert!(events.borrow().iter().all(|e| matches!(e, CompareEvent::SubmitFailed { ticket: None, .. })));
}

#[test]
fn stale_submission_is_dropped() {
    let (controller, repository, events) = controller_with(FakeRepository::default());
    let release = repository.gate(2015);

    let (older, newer) = block_on(async {
        let older = controller.submit("03", "2015", "2014", "orders");
        let newer = async {
            let outcome = controller.submit("04", "2016", "2014", "orders").await;
            let _ = release.send(());
            outcome
        };
        futures::join!(older, newer)
    });

    assert_eq!(newer.unwrap(), SubmitOutcome::Rendered(Transition::Created));
    assert_eq!(older.unwrap(), SubmitOutcome::Superseded);

    let chart = chart(&controller);
    assert_eq!(chart.len(), 30);
    assert_eq!(chart.datasets()[0].label, "2016");
    assert_eq!(controller.renderer().creates, 1);
    assert!(
        events
            .borrow()
            .contains(&CompareEvent::SubmitSuperseded { ticket: 1, latest: 2 })
    );
}

#[test]
fn stale_failure_does_not_report_over_newer_chart() {
    let (controller, repository, events) = controller_with(FakeRepository::failing(2013));
    let release = repository.gate(2013);

    let (older, newer) = block_on(async {
        let older = controller.submit("03", "2013", "2014", "orders");
        let newer = async {
            let outcome = controller.submit("03", "2015", "2014", "orders").await;
            let _ = release.send(());
            outcome
        };
        futures::join!(older, newer)
    });

    assert_eq!(newer.unwrap(), SubmitOutcome::Rendered(Transition::Created));
    assert_eq!(older.unwrap(), SubmitOutcome::Superseded);
    assert_eq!(chart(&controller).datasets()[0].label, "2015");

    let events = events.borrow();
    assert_eq!(events.last(), Some(&CompareEvent::SubmitSuperseded { ticket: 1, latest: 2 }));
    assert!(!events.iter().any(|e| matches!(e, CompareEvent::SubmitFailed { .. })));
}
