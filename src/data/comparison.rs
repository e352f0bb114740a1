use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::HISTOGRAM;

/// One historical order: what actually happened vs what each system promised.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRecord {
    pub dias_reais: f64,
    pub dias_estimados_antigo: f64,
    pub dias_previstos_ia: f64,
}

/// Headline figures for the performance tab.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonStats {
    pub legacy_mae: f64,
    pub model_mae: f64,
    /// How much lower the model MAE is, as a percentage of the legacy MAE.
    pub improvement_pct: f64,
    pub sample_count: usize,
}

/// Historical comparison data backing the error-distribution chart.
///
/// This asset is optional: when the file is missing the performance tab
/// shows a notice instead of the histogram.
pub struct ComparisonTable {
    records: Vec<ComparisonRecord>,
}

impl ComparisonTable {
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open comparison file {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<ComparisonRecord>, _>>()
            .context("Malformed row in comparison file")?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Signed error of the legacy estimator: actual minus promised days.
    pub fn legacy_errors(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.dias_reais - r.dias_estimados_antigo)
            .collect()
    }

    /// Signed error of the model: actual minus predicted days.
    pub fn model_errors(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| r.dias_reais - r.dias_previstos_ia)
            .collect()
    }

    pub fn stats(&self) -> ComparisonStats {
        let legacy_mae = mean_abs(&self.legacy_errors());
        let model_mae = mean_abs(&self.model_errors());
        let improvement_pct = if legacy_mae > 0.0 {
            (legacy_mae - model_mae) / legacy_mae * 100.0
        } else {
            0.0
        };
        ComparisonStats {
            legacy_mae,
            model_mae,
            improvement_pct,
            sample_count: self.records.len(),
        }
    }
}

fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

/// Bucket signed errors into the fixed chart range. Values outside the
/// range are dropped, matching the original chart's clipped x axis.
pub fn bin_errors(errors: &[f64]) -> Vec<usize> {
    let width = HISTOGRAM.bin_width();
    let mut bins = vec![0usize; HISTOGRAM.bin_count];
    for &e in errors {
        if e < HISTOGRAM.min_days || e >= HISTOGRAM.max_days {
            continue;
        }
        let idx = ((e - HISTOGRAM.min_days) / width) as usize;
        bins[idx.min(HISTOGRAM.bin_count - 1)] += 1;
    }
    bins
}

/// Center of bin `idx` on the days-of-error axis.
pub fn bin_center(idx: usize) -> f64 {
    let width = HISTOGRAM.bin_width();
    HISTOGRAM.min_days + (idx as f64 + 0.5) * width
}

#[cfg(test)]
mod tests {
    use super::{ComparisonTable, bin_errors};

    const SAMPLE: &str = "\
dias_reais,dias_estimados_antigo,dias_previstos_ia
10,14,11
8,15,8
20,18,17
";

    fn table() -> ComparisonTable {
        ComparisonTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn error_series() {
        let t = table();
        assert_eq!(t.legacy_errors(), vec![-4.0, -7.0, 2.0]);
        assert_eq!(t.model_errors(), vec![-1.0, 0.0, 3.0]);
    }

    #[test]
    fn stats_mae_and_improvement() {
        let s = table().stats();
        assert!((s.legacy_mae - 13.0 / 3.0).abs() < 1e-12);
        assert!((s.model_mae - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.sample_count, 3);
        // (13/3 - 4/3) / (13/3) = 9/13
        assert!((s.improvement_pct - 900.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn binning_counts_every_in_range_error() {
        let t = table();
        let bins = bin_errors(&t.model_errors());
        assert_eq!(bins.iter().sum::<usize>(), 3);
    }

    #[test]
    fn binning_drops_out_of_range() {
        let bins = bin_errors(&[0.0, 25.0, -25.0]);
        assert_eq!(bins.iter().sum::<usize>(), 1);
    }

    #[test]
    fn empty_table_stats_are_zero() {
        let t = ComparisonTable::from_reader(
            "dias_reais,dias_estimados_antigo,dias_previstos_ia\n".as_bytes(),
        )
        .unwrap();
        let s = t.stats();
        assert_eq!(s.sample_count, 0);
        assert_eq!(s.legacy_mae, 0.0);
        assert_eq!(s.improvement_pct, 0.0);
    }
}
