//! Monthly averages for one year, printed and optionally saved as CSV.

use log::info;
use mco_api::{DataSource, TimeSeriesResponse, Year};
use mco_data::axis::scientific_label;
use mco_data::ChartFigure;

/// Write `month,average` rows (no headers), months as served by the API.
pub fn write_csv(path: &str, series: &TimeSeriesResponse) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    for (month, average) in series.months.iter().zip(&series.averages) {
        wtr.write_record([month.clone(), average.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Table lines: display label, raw value, scientific label.
pub fn format_rows(figure: &ChartFigure) -> Vec<String> {
    figure
        .labels
        .iter()
        .zip(&figure.values)
        .map(|(label, value)| format!("{:<8} {:>24} {:>10}", label, value, scientific_label(*value)))
        .collect()
}

pub async fn run_timeseries<D: DataSource>(
    source: &D,
    year: Year,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let series = source.fetch_time_series(year).await?;
    let figure = ChartFigure::build(year, &series)?;

    println!("{}", figure.dataset_label());
    for row in format_rows(&figure) {
        println!("{}", row);
    }
    println!(
        "y-axis: {} .. {}",
        scientific_label(figure.bounds.min),
        scientific_label(figure.bounds.max)
    );

    if let Some(path) = csv_path {
        write_csv(path, &series)?;
        info!("Wrote {} months to {}", series.months.len(), path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TimeSeriesResponse {
        TimeSeriesResponse {
            months: vec!["2019-01".to_string(), "2019-02".to_string()],
            averages: vec![1.25e18, 1.5e18],
        }
    }

    #[test]
    fn test_write_csv() {
        let path = std::env::temp_dir().join(format!("mco-timeseries-{}.csv", std::process::id()));
        let path = path.to_str().unwrap().to_string();
        write_csv(&path, &series()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(written.as_bytes());
        let rows: Vec<(String, f64)> = rdr
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(rows, vec![("2019-01".to_string(), 1.25e18), ("2019-02".to_string(), 1.5e18)]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_format_rows() {
        let figure = ChartFigure::build(Year::new(2019), &series()).unwrap();
        let rows = format_rows(&figure);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Jan"));
        assert!(rows[0].ends_with("1.25e+18"));
        assert!(rows[1].ends_with("1.50e+18"));
    }
}
