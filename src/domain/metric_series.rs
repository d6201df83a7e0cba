// Quarterly metric payload domain model
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MetricSeriesError {
    #[error("series `{name}` has {actual} values but there are {expected} labels")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// Period labels plus named value columns, e.g.
/// `{"labels": ["2024.1Q"], "revenue": [1.0e12]}`.
///
/// Index `i` of every column refers to `labels[i]`. A `null` value means the
/// period has no data for that metric.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetricSeries {
    pub labels: Vec<String>,
    #[serde(flatten)]
    pub values: BTreeMap<String, Vec<Option<f64>>>,
}

impl MetricSeries {
    pub fn series(&self, name: &str) -> Option<&[Option<f64>]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// Reject payloads whose columns are not aligned with the labels.
    pub fn validate(&self) -> Result<(), MetricSeriesError> {
        for (name, values) in &self.values {
            if values.len() != self.labels.len() {
                return Err(MetricSeriesError::LengthMismatch {
                    name: name.clone(),
                    expected: self.labels.len(),
                    actual: values.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
impl MetricSeries {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            values: BTreeMap::new(),
        }
    }

    pub fn with_series(mut self, name: &str, values: Vec<Option<f64>>) -> Self {
        self.values.insert(name.to_string(), values);
        self
    }
}
