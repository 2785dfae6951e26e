use crate::domain::market_data::FiatCurrency;
use serde::Serialize;

pub const LINE_COLOR: &str = "#6495ed";
pub const FILL_COLOR: &str = "rgba(100, 149, 237, 0.2)";
pub const AXIS_COLOR: &str = "#e0e7ff";
pub const DATASET_LABEL: &str = "Preço USD (BRL)";
pub const X_AXIS_TITLE: &str = "Data";
pub const Y_AXIS_TITLE: &str = "Valor";
pub const LINE_TENSION: f64 = 0.2;

/// Value Object - Chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

/// Value Object - How axis ticks and the tooltip print a price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub prefix: String,
    pub decimals: usize,
}

impl CurrencyFormat {
    pub fn for_currency(currency: FiatCurrency) -> Self {
        Self { prefix: format!("{} ", currency.symbol()), decimals: 2 }
    }

    /// `R$ 5.20`
    pub fn format(&self, value: f64) -> String {
        format!("{}{:.*}", self.prefix, self.decimals, value)
    }
}

/// Labels and values of the single series, always the same length
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, String> {
        if labels.len() != values.len() {
            return Err(format!(
                "Label/value count mismatch: {} labels, {} values",
                labels.len(),
                values.len()
            ));
        }
        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataBlock {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub value_format: CurrencyFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickOptions {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<CurrencyFormat>,
}

impl TickOptions {
    pub fn label(&self, value: f64) -> String {
        match &self.format {
            Some(format) => format.format(value),
            None => format!("{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    pub display: bool,
    pub title: AxisTitle,
    pub ticks: TickOptions,
}

impl AxisOptions {
    fn titled(text: &str, format: Option<CurrencyFormat>) -> Self {
        Self {
            display: true,
            title: AxisTitle { display: true, text: text.to_string(), color: AXIS_COLOR.to_string() },
            ticks: TickOptions { color: AXIS_COLOR.to_string(), format },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
    pub scales: Scales,
}

/// Value Object - Complete description of the price history chart.
///
/// Laid out like a Chart.js config so it reads the same in logs and
/// snapshots; the canvas backend draws from it directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartDataBlock,
    pub options: ChartOptions,
}

impl LineChartConfig {
    pub fn price_history(series: ChartSeries, currency: FiatCurrency) -> Self {
        let format = CurrencyFormat::for_currency(currency);
        Self {
            chart_type: ChartType::Line,
            data: ChartDataBlock {
                labels: series.labels,
                datasets: vec![LineDataset {
                    label: DATASET_LABEL.to_string(),
                    data: series.values,
                    border_color: LINE_COLOR.to_string(),
                    background_color: FILL_COLOR.to_string(),
                    fill: true,
                    tension: LINE_TENSION,
                    point_radius: 0.0,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: PluginOptions {
                    legend: LegendOptions { display: false },
                    tooltip: TooltipOptions { value_format: format.clone() },
                },
                scales: Scales {
                    x: AxisOptions::titled(X_AXIS_TITLE, None),
                    y: AxisOptions::titled(Y_AXIS_TITLE, Some(format)),
                },
            },
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Values of the single line series
    pub fn values(&self) -> &[f64] {
        self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }

    pub fn point_count(&self) -> usize {
        self.values().len()
    }

    /// Tooltip body for the point at `index`
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let value = *self.values().get(index)?;
        Some(self.options.plugins.tooltip.value_format.format(value))
    }
}
