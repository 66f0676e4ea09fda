use serde::Serialize;

/// Value Object - cosmetic colours of one line series (Chart.js field names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub point_color: &'static str,
    pub point_stroke_color: &'static str,
    pub point_highlight_fill: &'static str,
    pub point_highlight_stroke: &'static str,
}

impl SeriesStyle {
    /// Light grey, used for the first year
    pub const PRIMARY: SeriesStyle = SeriesStyle {
        fill_color: "rgba(220,220,220,0.2)",
        stroke_color: "rgba(220,220,220,1)",
        point_color: "rgba(220,220,220,1)",
        point_stroke_color: "#fff",
        point_highlight_fill: "#fff",
        point_highlight_stroke: "rgba(220,220,220,1)",
    };

    /// Steel blue, used for the second year
    pub const SECONDARY: SeriesStyle = SeriesStyle {
        fill_color: "rgba(151,187,205,0.2)",
        stroke_color: "rgba(151,187,205,1)",
        point_color: "rgba(151,187,205,1)",
        point_stroke_color: "#fff",
        point_highlight_fill: "#fff",
        point_highlight_stroke: "rgba(151,187,205,1)",
    };
}

/// Value Object - one labelled series, one slot per day of month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    #[serde(flatten)]
    pub style: SeriesStyle,
    pub data: Vec<Option<f64>>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied().flatten()
    }
}

/// Which state transition a render performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Created,
    Updated,
    /// Rendered chart was replaced because the month length changed
    Recreated,
}
