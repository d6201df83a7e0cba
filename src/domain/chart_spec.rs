// Render-engine configuration produced by the chart builder.
// Field names follow the Chart.js config contract.
use super::descriptor::{AxisPosition, RenderKind};
use super::format::{TickUnit, ValueFormat};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub mount_id: String,
    #[serde(rename = "type")]
    pub kind: RenderKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[cfg(test)]
impl ChartSpec {
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.data.datasets.iter().find(|d| d.label == label)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub kind: RenderKind,
    pub background_color: String,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    /// Draw order; lower draws on top
    pub order: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_order: Option<u8>,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f32>,
    /// `"<label>: <formatted value>"` for every period
    pub tooltip_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: BTreeMap<String, Scale>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Plugins {
    pub title: TitleOptions,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TitleOptions {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    pub position: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub mode: &'static str,
    pub intersect: bool,
    /// Sort index-tooltip items by `tooltipOrder`
    pub sort_by_tooltip_order: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    pub stacked: bool,
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub grid: GridOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOptions>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub display: bool,
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TickOptions {
    pub format: ValueFormat,
    /// Unit steps for labelling tick values, first match wins
    pub units: &'static [TickUnit],
}
