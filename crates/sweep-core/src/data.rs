// File: crates/sweep-core/src/data.rs
// Summary: Period records and the placed dataset consumed by the engine and renderer.

use crate::geometry::Point;
use crate::layout::Layout;

/// One period (month) of the active dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodRecord {
    pub label: String,
    pub category: String,
    pub value: f64,
}

impl PeriodRecord {
    pub fn new(label: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), category: category.into(), value }
    }
}

/// One validated row of an imported table.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub year: i32,
    pub month: String,
    pub product: String,
    pub sales: f64,
}

/// Ordered records for the displayed year plus their plot coordinates.
/// Never edited in place: a new year, new data or a resize produce a new value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub year: Option<i32>,
    pub records: Vec<PeriodRecord>,
    pub points: Vec<Point>,
}

impl Dataset {
    pub fn empty(year: Option<i32>) -> Self {
        Self { year, records: Vec::new(), points: Vec::new() }
    }

    pub fn placed(year: Option<i32>, records: Vec<PeriodRecord>, layout: &Layout) -> Self {
        let points = records.iter().enumerate().map(|(i, r)| layout.place(i, r.value)).collect();
        Self { year, records, points }
    }

    /// Same records, coordinates recomputed for `layout`.
    pub fn replaced_on(&self, layout: &Layout) -> Self {
        Self::placed(self.year, self.records.clone(), layout)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.records.get(index).map(|r| r.value)
    }
}
