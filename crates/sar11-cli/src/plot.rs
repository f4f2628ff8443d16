//! PNG charts — population over time and cell-size histogram.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

pub const CELL_SIZE_BINS: usize = 30;

pub fn render_population_trend(
    out_path: &Path,
    caption: &str,
    series: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let x_max = series.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
    let y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0f64..x_max, 0.0f64..(y_max * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("Time")
        .y_desc("Population Size")
        .draw()?;

    chart.draw_series(LineSeries::new(
        series.iter().copied(),
        BLUE.stroke_width(2),
    ))?;
    root.present()?;
    Ok(())
}

/// `(bin_start, count)` for `bins` equal-width bins spanning the data.
pub fn histogram_counts(values: &[f64], bins: usize) -> (f64, Vec<(f64, usize)>) {
    if values.is_empty() || bins == 0 {
        return (0.0, Vec::new());
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = if max > min {
        (max - min) / bins as f64
    } else {
        1.0
    };

    let mut counts = vec![0usize; bins];
    for &value in values {
        let idx = (((value - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let counts = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * width, count))
        .collect();
    (width, counts)
}

pub fn render_cell_size_histogram(
    out_path: &Path,
    caption: &str,
    cell_sizes: &[f64],
) -> Result<(), Box<dyn Error>> {
    let (width, counts) = histogram_counts(cell_sizes, CELL_SIZE_BINS);
    let (Some(&(x_min, _)), Some(&(last_start, _))) = (counts.first(), counts.last()) else {
        return Err("no cell-size measurements to plot".into());
    };
    let x_max = last_start + width;
    let y_max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as f64;

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..(y_max * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Cell Size")
        .y_desc("Frequency")
        .draw()?;

    for (bin_start, count) in counts {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin_start, 0.0), (bin_start + width, count as f64)],
            GREEN.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin_start, 0.0), (bin_start + width, count as f64)],
            BLACK.stroke_width(1),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_all_values() {
        let values: Vec<f64> = (0..300).map(|i| i as f64 / 100.0).collect();
        let (width, counts) = histogram_counts(&values, 30);
        assert_eq!(counts.len(), 30);
        assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 300);
        assert!((width - 2.99 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let (_, counts) = histogram_counts(&[0.0, 1.0], 4);
        assert_eq!(counts[0].1, 1);
        assert_eq!(counts[3].1, 1);
    }

    #[test]
    fn test_histogram_constant_values() {
        let (width, counts) = histogram_counts(&[0.4, 0.4, 0.4], 30);
        assert_eq!(width, 1.0);
        assert_eq!(counts[0].1, 3);
    }

    #[test]
    fn test_histogram_empty() {
        let (_, counts) = histogram_counts(&[], 30);
        assert!(counts.is_empty());
    }
}
