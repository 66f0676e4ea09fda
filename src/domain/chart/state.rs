use super::entities::{LineChart, YearSeries};
use super::services::ChartRenderer;
use super::value_objects::Transition;
use crate::domain::errors::RenderingError;
use crate::domain::logging::{LogComponent, get_logger};

/// Chart state owned by the controller. `Uninitialized` until the first
/// successful comparison, `Rendered` for the rest of the page session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ChartState {
    #[default]
    Uninitialized,
    Rendered(LineChart),
}

impl ChartState {
    pub fn is_rendered(&self) -> bool {
        matches!(self, ChartState::Rendered(_))
    }

    pub fn chart(&self) -> Option<&LineChart> {
        match self {
            ChartState::Rendered(chart) => Some(chart),
            ChartState::Uninitialized => None,
        }
    }

    /// Create or update the chart from two projected series.
    ///
    /// Same month length: points are overwritten in place and the renderer
    /// redraws. Otherwise a new chart is built. On renderer failure the
    /// previous state is kept.
    pub fn render<R: ChartRenderer + ?Sized>(
        &mut self,
        first: YearSeries,
        second: YearSeries,
        renderer: &mut R,
    ) -> Result<Transition, RenderingError> {
        let days = first.len().max(second.len());

        if let ChartState::Rendered(chart) = self {
            if chart.len() == days {
                let mut staged = chart.clone();
                staged.overwrite(&first, &second);
                renderer.redraw(&staged)?;
                *chart = staged;
                return Ok(Transition::Updated);
            }
            get_logger().info(
                LogComponent::Domain("ChartState"),
                &format!("Month length changed {} -> {}, rebuilding chart", chart.len(), days),
            );
        }

        let chart = LineChart::new(first, second);
        renderer.create(&chart)?;
        let transition = if self.is_rendered() { Transition::Recreated } else { Transition::Created };
        *self = ChartState::Rendered(chart);
        Ok(transition)
    }
}
