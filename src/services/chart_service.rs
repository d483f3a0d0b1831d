use thiserror::Error;
use tracing::debug;

use crate::models::{Axis, AxisOrient, Bar, Chart, Dataset, Listeners, Page, Tick, Title, TooltipHandle};
use crate::services::scale_service::{LinearScale, TimeScale};

/// Approximate number of ticks per axis
const TICK_COUNT: usize = 10;

/// Fixed geometry and styling of the bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    /// Uniform padding on every side
    pub padding: f64,
    pub fill: String,
    pub title: String,
    pub title_x: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            padding: 40.0,
            fill: "navy".to_string(),
            title: "United States Gross Domestic Product".to_string(),
            title_x: 280.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No element with id '{0}'")]
    MissingTarget(String),
    #[error("Dataset is empty")]
    EmptyDataset,
    #[error("Invalid date '{date}': {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Scales derived from one dataset
#[derive(Debug, Clone, Copy)]
pub struct ChartScales {
    pub bar_height: LinearScale,
    pub bar_x: LinearScale,
    pub x_axis: TimeScale,
    pub y_axis: LinearScale,
}

impl ChartScales {
    pub fn new(dataset: &Dataset, options: &ChartOptions) -> Result<Self, RenderError> {
        let (w, h, p) = (options.width, options.height, options.padding);
        let max_value = dataset.max_value().ok_or(RenderError::EmptyDataset)?;
        let (first, last) = dataset
            .date_extent()
            .map_err(|(date, source)| RenderError::InvalidDate { date, source })?
            .ok_or(RenderError::EmptyDataset)?;
        let last_index = (dataset.len() - 1) as f64;

        Ok(Self {
            bar_height: LinearScale::new((0.0, max_value), (0.0, h - 2.0 * p)),
            bar_x: LinearScale::new((0.0, last_index), (p, w - p)),
            x_axis: TimeScale::new((first, last), (p, w - p)),
            y_axis: LinearScale::new((0.0, max_value), (h - p, p)),
        })
    }
}

/// Width of every bar: the plot width split evenly across records
pub fn bar_width(options: &ChartOptions, count: usize) -> f64 {
    (options.width - 2.0 * options.padding) / count as f64
}

fn build_axes(scales: &ChartScales, options: &ChartOptions) -> (Axis, Axis) {
    let ticks = |labelled: Vec<(f64, String)>| {
        labelled
            .into_iter()
            .map(|(offset, label)| Tick { offset, label })
            .collect()
    };

    let x_range = scales.bar_x.range();
    let x_axis = Axis {
        id: "x-axis".to_string(),
        orient: AxisOrient::Bottom,
        translate: (0.0, options.height - options.padding),
        range: x_range,
        ticks: ticks(scales.x_axis.labelled_ticks(TICK_COUNT)),
    };

    let y_axis = Axis {
        id: "y-axis".to_string(),
        orient: AxisOrient::Left,
        translate: (options.padding, 0.0),
        range: scales.y_axis.range(),
        ticks: ticks(scales.y_axis.labelled_ticks(TICK_COUNT)),
    };

    (x_axis, y_axis)
}

/// Build the bars and wire their hover listeners to `tooltip`
fn build_bars(
    dataset: &Dataset,
    scales: &ChartScales,
    options: &ChartOptions,
    tooltip: &TooltipHandle,
) -> Vec<Bar> {
    let width = bar_width(options, dataset.len());

    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut bar = Bar {
                class: "bar".to_string(),
                x: scales.bar_x.apply(i as f64),
                y: scales.y_axis.apply(record.value),
                width,
                height: scales.bar_height.apply(record.value),
                fill: options.fill.clone(),
                date: record.date.clone(),
                gdp: record.value,
                label: record.label(),
                listeners: Listeners::default(),
            };

            let over = tooltip.clone();
            let date = record.date.clone();
            bar.on_mouse_over(move || over.show(&date));

            let out = tooltip.clone();
            bar.on_mouse_out(move || out.hide());

            bar
        })
        .collect()
}

/// Draw `dataset` as a bar chart into the `canvas_id` container, using the
/// `tooltip_id` element as the hover tooltip.
///
/// Both targets must already exist on the page. The tooltip is reset to
/// hidden before any bar is created.
pub fn render(
    dataset: &Dataset,
    page: &mut Page,
    canvas_id: &str,
    tooltip_id: &str,
    options: &ChartOptions,
) -> Result<(), RenderError> {
    let tooltip = page
        .tooltip(tooltip_id)
        .ok_or_else(|| RenderError::MissingTarget(tooltip_id.to_string()))?;
    if page.canvas(canvas_id).is_none() {
        return Err(RenderError::MissingTarget(canvas_id.to_string()));
    }

    let scales = ChartScales::new(dataset, options)?;
    let (x_axis, y_axis) = build_axes(&scales, options);

    let title = Title {
        id: "title".to_string(),
        x: options.title_x,
        y: options.padding,
        text: options.title.clone(),
    };

    tooltip.reset();

    let bars = build_bars(dataset, &scales, options, &tooltip);
    debug!("Rendering {} bars into #{}", bars.len(), canvas_id);

    let chart = Chart {
        width: options.width,
        height: options.height,
        class: "row".to_string(),
        x_axis,
        y_axis,
        title,
        bars,
    };

    page.canvas_mut(canvas_id)
        .ok_or_else(|| RenderError::MissingTarget(canvas_id.to_string()))?
        .append(chart);

    Ok(())
}
