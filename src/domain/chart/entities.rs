use super::value_objects::{Dataset, SeriesStyle};
use crate::domain::logging::LogComponent;
use crate::domain::orders::{Category, DailyRecord};
use serde::Serialize;

/// Values of one year projected onto day-of-month slots.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl YearSeries {
    /// Places each record at index `day - 1`; days absent from `records` stay `None`.
    pub fn project(label: impl Into<String>, records: &[DailyRecord], category: Category, days: usize) -> Self {
        let mut values = vec![None; days];
        for record in records {
            let day = record.day as usize;
            if (1..=days).contains(&day) {
                values[day - 1] = Some(category.project(record));
            } else {
                crate::log_warn!(
                    LogComponent::Domain("YearSeries"),
                    "Ignoring record for day {} outside 1..={}",
                    record.day,
                    days
                );
            }
        }
        Self { label: label.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Domain entity - two-year comparison line chart.
///
/// Both datasets always have one value per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    labels: Vec<u32>,
    datasets: [Dataset; 2],
}

impl LineChart {
    pub fn new(first: YearSeries, second: YearSeries) -> Self {
        let days = first.len().max(second.len());
        let dataset = |series: YearSeries, style: SeriesStyle| {
            let mut data = series.values;
            data.resize(days, None);
            Dataset { label: series.label, style, data }
        };

        Self {
            labels: (1..=days as u32).collect(),
            datasets: [
                dataset(first, SeriesStyle::PRIMARY),
                dataset(second, SeriesStyle::SECONDARY),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Dataset; 2] {
        &self.datasets
    }

    /// Overwrites a single point; indexes past the end are ignored.
    pub fn set_value(&mut self, series: usize, index: usize, value: Option<f64>) {
        if let Some(slot) = self.datasets.get_mut(series).and_then(|d| d.data.get_mut(index)) {
            *slot = value;
        }
    }

    /// Replaces every point of both series in place, keeping labels and styles.
    pub fn overwrite(&mut self, first: &YearSeries, second: &YearSeries) {
        for (series, incoming) in [first, second].into_iter().enumerate() {
            self.datasets[series].label = incoming.label.clone();
            for index in 0..self.len() {
                self.set_value(series, index, incoming.values.get(index).copied().flatten());
            }
        }
    }

    /// Min and max over all present values of both series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().flatten().copied())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
            })
    }

    /// Chart.js-shaped data object: `{ labels, datasets: [{ label, fillColor, ..., data }] }`.
    pub fn to_config_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
