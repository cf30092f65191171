// File: crates/sweep-core/src/source.rs
// Summary: Data source adapter; synthetic random sales or imported rows filtered per year.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::{DataConfig, DataMode};
use crate::data::{Dataset, PeriodRecord, RawRecord};
use crate::layout::Layout;

/// Random values for every period label, regenerated on each rollover.
pub struct SyntheticSource {
    labels: Vec<String>,
    categories: Vec<String>,
    value_min: u32,
    value_max: u32,
    year: i32,
    rng: StdRng,
    current: Vec<PeriodRecord>,
}

impl SyntheticSource {
    pub fn new(cfg: &DataConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut src = Self {
            labels: cfg.period_labels.clone(),
            categories: cfg.categories.clone(),
            value_min: cfg.value_min,
            value_max: cfg.value_max,
            year: cfg.synthetic_start_year,
            rng,
            current: Vec::new(),
        };
        src.regenerate();
        src
    }

    fn regenerate(&mut self) {
        let mut out = Vec::with_capacity(self.labels.len());
        for label in &self.labels {
            let value = if self.value_max > self.value_min {
                self.rng.gen_range(self.value_min..self.value_max)
            } else {
                self.value_min
            };
            let category = self.categories.choose(&mut self.rng).cloned().unwrap_or_default();
            out.push(PeriodRecord::new(label.clone(), category, value as f64));
        }
        self.current = out;
    }
}

/// Rows from an external table, shown one year at a time.
pub struct ImportedSource {
    rows: Vec<RawRecord>,
    labels: Vec<String>,
    year: i32,
    floor: i32,
    ceiling: i32,
}

impl ImportedSource {
    pub fn new(rows: Vec<RawRecord>, cfg: &DataConfig) -> Self {
        let floor = cfg.year_floor.min(cfg.year_ceiling);
        let ceiling = cfg.year_floor.max(cfg.year_ceiling);
        Self { rows, labels: cfg.period_labels.clone(), year: floor, floor, ceiling }
    }

    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }

    pub fn records(&self) -> Vec<PeriodRecord> {
        records_for_year(&self.rows, self.year, &self.labels)
    }

    fn advance_year(&mut self) {
        self.year = if self.year >= self.ceiling { self.floor } else { self.year + 1 };
    }
}

/// Rows of `year` whose month is a known label, in canonical label order.
/// Rows sharing a label keep their input order.
pub fn records_for_year(rows: &[RawRecord], year: i32, labels: &[String]) -> Vec<PeriodRecord> {
    let mut keyed: Vec<(usize, &RawRecord)> = rows
        .iter()
        .filter(|r| r.year == year)
        .filter_map(|r| labels.iter().position(|l| *l == r.month).map(|i| (i, r)))
        .collect();
    keyed.sort_by_key(|(i, _)| *i);
    keyed
        .into_iter()
        .map(|(_, r)| PeriodRecord::new(r.month.clone(), r.product.clone(), r.sales))
        .collect()
}

/// Either data source, selected by `DataConfig::mode`.
pub enum DataSource {
    Synthetic(SyntheticSource),
    Imported(ImportedSource),
}

impl DataSource {
    /// Imported mode starts with no rows until a file is loaded.
    pub fn from_config(cfg: &DataConfig) -> Self {
        match cfg.mode {
            DataMode::Synthetic => DataSource::Synthetic(SyntheticSource::new(cfg)),
            DataMode::Imported => DataSource::Imported(ImportedSource::new(Vec::new(), cfg)),
        }
    }

    pub fn imported(rows: Vec<RawRecord>, cfg: &DataConfig) -> Self {
        DataSource::Imported(ImportedSource::new(rows, cfg))
    }

    pub fn mode(&self) -> DataMode {
        match self {
            DataSource::Synthetic(_) => DataMode::Synthetic,
            DataSource::Imported(_) => DataMode::Imported,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            DataSource::Synthetic(s) => s.year,
            DataSource::Imported(s) => s.year,
        }
    }

    /// Whether any rows are loaded at all; synthetic data always has some.
    pub fn has_rows(&self) -> bool {
        match self {
            DataSource::Synthetic(_) => true,
            DataSource::Imported(s) => !s.rows().is_empty(),
        }
    }

    /// Current records placed on `layout`. May be empty in imported mode.
    pub fn dataset(&self, layout: &Layout) -> Dataset {
        let year = Some(self.year());
        match self {
            DataSource::Synthetic(s) => Dataset::placed(year, s.current.clone(), layout),
            DataSource::Imported(s) => Dataset::placed(year, s.records(), layout),
        }
    }

    /// Next year (imported, wrapping) or a fresh random draw (synthetic).
    pub fn rollover(&mut self, layout: &Layout) -> Dataset {
        match self {
            DataSource::Synthetic(s) => {
                s.year += 1;
                s.regenerate();
            }
            DataSource::Imported(s) => s.advance_year(),
        }
        let ds = self.dataset(layout);
        info!(year = self.year(), records = ds.len(), mode = ?self.mode(), "dataset rolled over");
        ds
    }
}
