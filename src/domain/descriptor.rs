// Static chart definitions: which series a chart expects and how they are drawn
use super::format::ValueFormat;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Debug, Error, PartialEq)]
pub enum DescriptorError {
    #[error("chart {chart}: duplicate axis `{axis}`")]
    DuplicateAxis { chart: String, axis: String },
    #[error("chart {chart}: series `{series}` is bound to undeclared axis `{axis}`")]
    UnknownAxis {
        chart: String,
        series: String,
        axis: String,
    },
    #[error("chart {chart}: line series `{series}` cannot join stack `{stack}`")]
    StackedLine {
        chart: String,
        series: String,
        stack: String,
    },
    #[error("chart {chart}: stack `{stack}` spans axes `{first}` and `{second}`")]
    StackSpansAxes {
        chart: String,
        stack: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesDescriptor {
    /// Column name in the fetched payload
    pub key: &'static str,
    pub label: &'static str,
    /// Line stroke, or bar fill
    pub color: &'static str,
    /// Area under a line, or the bar outline; `None` reuses `color`
    pub accent: Option<&'static str>,
    pub kind: RenderKind,
    pub axis: &'static str,
    pub stack: Option<&'static str>,
    /// Position in the index tooltip, lowest first
    pub tooltip_order: Option<u8>,
    pub fill: bool,
    /// Bezier curve tension for lines; straight segments when unset
    pub tension: Option<f32>,
}

impl SeriesDescriptor {
    pub const fn bar(key: &'static str, label: &'static str, color: &'static str, axis: &'static str) -> Self {
        Self {
            key,
            label,
            color,
            accent: None,
            kind: RenderKind::Bar,
            axis,
            stack: None,
            tooltip_order: None,
            fill: true,
            tension: None,
        }
    }

    pub const fn line(key: &'static str, label: &'static str, color: &'static str, axis: &'static str) -> Self {
        Self {
            key,
            label,
            color,
            accent: None,
            kind: RenderKind::Line,
            axis,
            stack: None,
            tooltip_order: None,
            fill: false,
            tension: None,
        }
    }

    pub const fn stacked(self, stack: &'static str) -> Self {
        Self {
            stack: Some(stack),
            ..self
        }
    }

    pub const fn tooltip_order(self, order: u8) -> Self {
        Self {
            tooltip_order: Some(order),
            ..self
        }
    }

    pub const fn filled(self) -> Self {
        Self { fill: true, ..self }
    }

    pub const fn accent(self, accent: &'static str) -> Self {
        Self {
            accent: Some(accent),
            ..self
        }
    }

    pub const fn curved(self, tension: f32) -> Self {
        Self {
            tension: Some(tension),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDescriptor {
    pub id: &'static str,
    pub position: AxisPosition,
    pub begin_at_zero: bool,
    pub stacked: bool,
    pub format: ValueFormat,
    pub title: Option<&'static str>,
    /// Fixed [min, max]
    pub range: Option<(f64, f64)>,
}

impl AxisDescriptor {
    pub const fn left(id: &'static str, format: ValueFormat) -> Self {
        Self {
            id,
            position: AxisPosition::Left,
            begin_at_zero: true,
            stacked: false,
            format,
            title: None,
            range: None,
        }
    }

    pub const fn right(id: &'static str, format: ValueFormat) -> Self {
        Self {
            position: AxisPosition::Right,
            ..Self::left(id, format)
        }
    }

    /// Axis values may go negative, so the scale should not be pinned at zero.
    pub const fn signed(self) -> Self {
        Self {
            begin_at_zero: false,
            ..self
        }
    }

    pub const fn stacked(self) -> Self {
        Self {
            stacked: true,
            ..self
        }
    }

    pub const fn titled(self, title: &'static str) -> Self {
        Self {
            title: Some(title),
            ..self
        }
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }

    pub fn is_secondary(&self) -> bool {
        self.position == AxisPosition::Right
    }
}

/// Data-independent definition of one chart. Instances live in the static
/// catalog and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDescriptor {
    pub mount_id: &'static str,
    pub endpoint: &'static str,
    pub title: &'static str,
    pub kind: RenderKind,
    pub series: &'static [SeriesDescriptor],
    pub axes: &'static [AxisDescriptor],
    pub stacked_x: bool,
    pub legend: bool,
    /// Failures of the primary chart are surfaced to the user
    pub primary: bool,
}

impl ChartDescriptor {
    pub fn axis(&self, id: &str) -> Option<&AxisDescriptor> {
        self.axes.iter().find(|a| a.id == id)
    }

    pub fn validate(&self) -> Result<(), DescriptorError> {
        let chart = self.mount_id.to_string();

        for (i, axis) in self.axes.iter().enumerate() {
            if self.axes[..i].iter().any(|a| a.id == axis.id) {
                return Err(DescriptorError::DuplicateAxis {
                    chart,
                    axis: axis.id.to_string(),
                });
            }
        }

        let mut stack_axes: HashMap<&str, &str> = HashMap::new();
        for series in self.series {
            if self.axis(series.axis).is_none() {
                return Err(DescriptorError::UnknownAxis {
                    chart,
                    series: series.key.to_string(),
                    axis: series.axis.to_string(),
                });
            }

            let Some(stack) = series.stack else {
                continue;
            };

            if series.kind == RenderKind::Line {
                return Err(DescriptorError::StackedLine {
                    chart,
                    series: series.key.to_string(),
                    stack: stack.to_string(),
                });
            }

            let first = *stack_axes.entry(stack).or_insert(series.axis);
            if first != series.axis {
                return Err(DescriptorError::StackSpansAxes {
                    chart,
                    stack: stack.to_string(),
                    first: first.to_string(),
                    second: series.axis.to_string(),
                });
            }
        }

        Ok(())
    }
}
