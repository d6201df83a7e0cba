// Chart builder - binds a fetched payload to a chart descriptor
use crate::domain::chart_spec::{
    ChartData, ChartOptions, ChartSpec, Dataset, GridOptions, LegendOptions, Plugins, Scale,
    TickOptions, TitleOptions, TooltipOptions,
};
use crate::domain::descriptor::{
    AxisDescriptor, ChartDescriptor, DescriptorError, RenderKind, SeriesDescriptor,
};
use crate::domain::metric_series::{MetricSeries, MetricSeriesError};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error(transparent)]
    Series(#[from] MetricSeriesError),
    #[error("payload has no `{0}` series")]
    MissingSeries(String),
}

/// Resolve a descriptor against one payload.
///
/// The payload must carry every series the descriptor names, each aligned with
/// the labels. Lines always draw above bars (`order` 0 vs 1), secondary axes do
/// not draw grid lines, and tooltip strings are pre-rendered with the formatter
/// of the axis each series is bound to.
pub fn build_chart(
    descriptor: &ChartDescriptor,
    data: &MetricSeries,
    company_id: &str,
) -> Result<ChartSpec, BuildError> {
    descriptor.validate()?;
    data.validate()?;

    let datasets = descriptor
        .series
        .iter()
        .map(|series| build_dataset(descriptor, series, data))
        .collect::<Result<Vec<_>, _>>()?;

    let mut scales = BTreeMap::new();
    scales.insert(
        "x".to_string(),
        Scale {
            kind: "category",
            position: None,
            stacked: descriptor.stacked_x,
            begin_at_zero: false,
            min: None,
            max: None,
            grid: GridOptions {
                display: false,
                draw_on_chart_area: false,
            },
            ticks: None,
            title: None,
        },
    );
    for axis in descriptor.axes {
        scales.insert(axis.id.to_string(), build_scale(axis));
    }

    let title = if company_id.is_empty() {
        descriptor.title.to_string()
    } else {
        format!("[{}] {}", company_id, descriptor.title)
    };

    Ok(ChartSpec {
        mount_id: descriptor.mount_id.to_string(),
        kind: descriptor.kind,
        data: ChartData {
            labels: data.labels.clone(),
            datasets,
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: true,
            plugins: Plugins {
                title: TitleOptions {
                    display: true,
                    text: title,
                },
                legend: LegendOptions {
                    display: descriptor.legend,
                    position: "top",
                },
                tooltip: TooltipOptions {
                    mode: "index",
                    intersect: false,
                    sort_by_tooltip_order: descriptor
                        .series
                        .iter()
                        .any(|s| s.tooltip_order.is_some()),
                },
            },
            scales,
        },
    })
}

fn build_dataset(
    descriptor: &ChartDescriptor,
    series: &SeriesDescriptor,
    data: &MetricSeries,
) -> Result<Dataset, BuildError> {
    let values = data
        .series(series.key)
        .ok_or_else(|| BuildError::MissingSeries(series.key.to_string()))?;

    let axis = descriptor
        .axis(series.axis)
        .ok_or_else(|| DescriptorError::UnknownAxis {
            chart: descriptor.mount_id.to_string(),
            series: series.key.to_string(),
            axis: series.axis.to_string(),
        })?;

    let tooltip_labels = values
        .iter()
        .map(|v| format!("{}: {}", series.label, axis.format.tooltip(*v)))
        .collect();

    let accent = series.accent.unwrap_or(series.color);
    let (order, background_color, border_color) = match series.kind {
        RenderKind::Bar => (1, series.color, accent),
        RenderKind::Line => (0, accent, series.color),
    };

    Ok(Dataset {
        label: series.label.to_string(),
        data: values.to_vec(),
        kind: series.kind,
        background_color: background_color.to_string(),
        border_color: border_color.to_string(),
        stack: series.stack.map(str::to_string),
        y_axis_id: series.axis.to_string(),
        order,
        tooltip_order: series.tooltip_order,
        fill: series.fill,
        tension: series.tension,
        tooltip_labels,
    })
}

fn build_scale(axis: &AxisDescriptor) -> Scale {
    let (min, max) = match axis.range {
        Some((min, max)) => (Some(min), Some(max)),
        None => (None, None),
    };

    Scale {
        kind: "linear",
        position: Some(axis.position),
        stacked: axis.stacked,
        begin_at_zero: axis.begin_at_zero,
        min,
        max,
        grid: GridOptions {
            display: true,
            draw_on_chart_area: !axis.is_secondary(),
        },
        ticks: Some(TickOptions {
            format: axis.format,
            units: axis.format.tick_units(),
        }),
        title: axis.title.map(|text| TitleOptions {
            display: true,
            text: text.to_string(),
        }),
    }
}
