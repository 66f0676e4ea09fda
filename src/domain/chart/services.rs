use super::entities::LineChart;
use crate::domain::errors::RenderingError;

/// Drawing collaborator for the comparison chart.
///
/// `create` builds a new chart artifact; `redraw` repaints the existing one
/// after its points were overwritten in place.
pub trait ChartRenderer {
    fn create(&mut self, chart: &LineChart) -> Result<(), RenderingError>;
    fn redraw(&mut self, chart: &LineChart) -> Result<(), RenderingError>;
}
