//! Core data types: the rental table and the season/year vocabularies.

use polars::prelude::*;

pub const SEASON_COL: &str = "season";
pub const DATE_COL: &str = "dteday";
pub const YEAR_COL: &str = "yr";
pub const COUNT_COL: &str = "cnt";
/// Derived during preparation from `dteday`.
pub const MONTH_COL: &str = "month";

/// Meteorological season as coded in the dataset (1-4).
///
/// The derived `Ord` follows declaration order, which is the display order
/// used by the seasonal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn code(self) -> i64 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Position on the seasonal chart's x-axis.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Dataset years as (`yr` flag, calendar year).
pub const YEARS: [(i64, i32); 2] = [(0, 2011), (1, 2012)];

/// The loaded rental dataset.
///
/// Wraps the polars frame so the cache can hand out a read-only view; every
/// transformation produces a new frame.
#[derive(Debug, Clone, Default)]
pub struct RentalTable {
    df: DataFrame,
}

impl RentalTable {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_names().iter().any(|c| c.as_str() == name)
    }
}
