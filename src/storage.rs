use crate::dataset::ScatterData;
use crate::models::{SeriesDescriptor, SeriesRow};
use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Load series descriptors from CSV with header `x,y,label,color` (one series per row).
pub fn load_series_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SeriesDescriptor>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<SeriesRow>().enumerate() {
        // +2: header line and 1-based numbering
        let row = row.with_context(|| format!("{}: bad row {}", path.display(), i + 2))?;
        out.push(row.into());
    }
    log::debug!("loaded {} series from {}", out.len(), path.display());
    Ok(out)
}

/// Load a JSON array of series descriptors.
pub fn load_series_json<P: AsRef<Path>>(path: P) -> Result<Vec<SeriesDescriptor>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let out: Vec<SeriesDescriptor> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded {} series from {}", out.len(), path.display());
    Ok(out)
}

/// Load series by file extension (`.csv` or `.json`).
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<Vec<SeriesDescriptor>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => load_series_csv(path),
        "json" => load_series_json(path),
        other => bail!("unsupported input format: {:?} (expected .csv or .json)", other),
    }
}

/// Save the assembled dataset as pretty JSON.
pub fn save_data_json<P: AsRef<Path>>(data: &ScatterData, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(data)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_rows_become_descriptors() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("s.csv");
        std::fs::write(&p, "x,y,label,color\n10, 101.3, Amber, #355E3B\n14,98.6,Basil,#00FF00\n")
            .unwrap();
        let v = load_series_csv(&p).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v[0], SeriesDescriptor::new((10.0, 101.3), "Amber", "#355E3B"));
        assert_eq!(v[1].label, "Basil");
    }

    #[test]
    fn unknown_extension_is_error() {
        assert!(load_series("series.txt").is_err());
    }
}
