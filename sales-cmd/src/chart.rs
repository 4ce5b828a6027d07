use anyhow::Context;
use sales_data::{update_figure, Region, Table};
use std::io::Write;

/// Load `csv_path` and write the chart spec for `region` as JSON.
pub fn run_chart(
    csv_path: &str,
    region: Region,
    pretty: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let table = Table::from_path(csv_path)
        .with_context(|| format!("Failed to load sales data from {}", csv_path))?;

    let spec = update_figure(&table, region);
    log::info!(
        "chart: {} of {} rows selected for {}",
        spec.points.len(),
        table.len(),
        region
    );

    let json = if pretty {
        serde_json::to_string_pretty(&spec)?
    } else {
        serde_json::to_string(&spec)?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn prints_filtered_chart_spec() {
        let file = write_csv("date,sales,region\n2024-01-01,100,north\n2024-01-02,150,south\n");
        let mut out = Vec::new();
        run_chart(file.path().to_str().unwrap(), Region::North, false, &mut out).unwrap();

        let spec: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(spec["title"], "Sales in North Region");
        assert_eq!(spec["points"].as_array().unwrap().len(), 1);
        assert_eq!(spec["points"][0]["date"], "2024-01-01");
    }

    #[test]
    fn empty_region_prints_empty_chart() {
        let file = write_csv("date,sales,region\n2024-01-01,100,north\n");
        let mut out = Vec::new();
        run_chart(file.path().to_str().unwrap(), Region::East, true, &mut out).unwrap();

        let spec: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(spec["title"], "Sales in East Region");
        assert!(spec["points"].as_array().unwrap().is_empty());
        assert_eq!(spec["yAxisTitle"], "Sales");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let mut out = Vec::new();
        let err = run_chart(path.to_str().unwrap(), Region::All, false, &mut out).unwrap_err();
        assert!(err.to_string().contains("Failed to load sales data"));
        assert!(out.is_empty());
    }
}
