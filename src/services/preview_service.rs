use plotters::prelude::*;

use crate::models::Dataset;

const BAR_COLOR: RGBColor = RGBColor(0, 0, 128);

/// Draw a label-free thumbnail of the chart as an SVG string
pub fn render_preview(dataset: &Dataset, size: (u32, u32)) -> Result<String, String> {
    let max_value = dataset
        .max_value()
        .ok_or_else(|| "Not enough data to draw a preview (minimum 1 record required).".to_string())?;
    let y_max = if max_value > 0.0 { max_value } else { 1.0 };

    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(0f64..dataset.len() as f64, 0f64..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .draw_series(dataset.records().iter().enumerate().map(|(i, record)| {
                let x = i as f64;
                Rectangle::new([(x, 0.0), (x + 1.0, record.value)], BAR_COLOR.filled())
            }))
            .map_err(|e| format!("Failed to draw bars: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render preview: {}", e))?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::Record;

    #[test]
    fn test_preview_draws_every_bar() {
        let dataset = Dataset::new(vec![
            Record::new("1947-01-01", 243.1),
            Record::new("1947-04-01", 246.3),
            Record::new("1947-07-01", 250.1),
        ]);
        let svg = render_preview(&dataset, (400, 250)).unwrap();
        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("#000080").count(), 3);
    }

    #[test]
    fn test_preview_rejects_empty_dataset() {
        assert!(render_preview(&Dataset::default(), (400, 250)).is_err());
    }
}
