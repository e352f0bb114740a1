use std::{collections::HashMap, io::Read, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::SIMULATOR;
use crate::domain::GeoPoint;

#[cfg(debug_assertions)]
use crate::config::DF;

/// One row of the reference CSV.
#[derive(Debug, Deserialize)]
struct GeoRecord {
    geolocation_zip_code_prefix: String,
    geolocation_lat: f64,
    geolocation_lng: f64,
}

/// In-memory postal-prefix to coordinate table.
///
/// Loaded once at startup, read-only afterwards. The source file may repeat
/// a prefix; the first row in file order wins. That mirrors the reference
/// data as exported and carries no business meaning.
pub struct GeoTable {
    by_prefix: HashMap<String, GeoPoint>,
}

/// Strips separators and surrounding whitespace from a raw postal code and
/// takes the leading prefix digits. No validation: a short or non-numeric
/// input simply becomes a shorter or garbage prefix that will miss lookup.
pub fn normalize_prefix(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != '.')
        .collect();
    cleaned.chars().take(SIMULATOR.prefix_len).collect()
}

impl GeoTable {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open geo reference file {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut by_prefix = HashMap::new();

        #[cfg(debug_assertions)]
        let mut duplicates = 0usize;

        for record in csv_reader.deserialize() {
            let record: GeoRecord = record.context("Malformed row in geo reference file")?;
            // Zero-pad so "1302" from a lossy export still matches "01302".
            let prefix = format!(
                "{:0>width$}",
                record.geolocation_zip_code_prefix.trim(),
                width = SIMULATOR.prefix_len
            );
            let point = GeoPoint::new(record.geolocation_lat, record.geolocation_lng);

            #[cfg(debug_assertions)]
            if by_prefix.contains_key(&prefix) {
                duplicates += 1;
            }

            // First row wins on duplicate prefixes.
            by_prefix.entry(prefix).or_insert(point);
        }

        #[cfg(debug_assertions)]
        if DF.log_duplicate_prefixes && duplicates > 0 {
            log::info!("Geo table: {} duplicate prefixes ignored", duplicates);
        }

        Ok(Self { by_prefix })
    }

    /// Resolve a raw postal code to coordinates. Returns `None` when the
    /// normalized prefix is not in the table; never a default coordinate.
    pub fn lookup(&self, raw_code: &str) -> Option<GeoPoint> {
        self.by_prefix.get(&normalize_prefix(raw_code)).copied()
    }

    pub fn len(&self) -> usize {
        self.by_prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_prefix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoTable, normalize_prefix};

    const SAMPLE: &str = "\
geolocation_zip_code_prefix,geolocation_lat,geolocation_lng
13023,-22.90,-47.06
42800,-12.96,-38.47
13023,-99.0,-99.0
01302,-23.54,-46.65
";

    fn table() -> GeoTable {
        GeoTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn normalizes_separators_and_whitespace() {
        assert_eq!(normalize_prefix("13023-000"), "13023");
        assert_eq!(normalize_prefix("13023.000"), "13023");
        assert_eq!(normalize_prefix(" 13023 "), "13023");
    }

    #[test]
    fn equivalent_raw_codes_resolve_identically() {
        let t = table();
        let a = t.lookup("13023-000").unwrap();
        let b = t.lookup("13023.000").unwrap();
        let c = t.lookup(" 13023 ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn first_row_wins_on_duplicates() {
        let point = table().lookup("13023").unwrap();
        assert_eq!(point.lat, -22.90);
        assert_eq!(point.lon, -47.06);
    }

    #[test]
    fn absent_prefix_is_none() {
        assert!(table().lookup("99999").is_none());
        assert!(table().lookup("").is_none());
        assert!(table().lookup("abc").is_none());
    }

    #[test]
    fn short_prefix_is_zero_padded_on_load() {
        // The file stores "01302" already padded; a query for it resolves.
        assert!(table().lookup("01302-911").is_some());
    }
}
