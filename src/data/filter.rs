//! Filter Controller Module
//! Sidebar selection state and the row filters it drives.

use crate::data::model::{Season, MONTH_COL, SEASON_COL, YEAR_COL};
use crate::error::Result;
use polars::prelude::*;
use std::collections::BTreeSet;

// ===== Selection =====

/// Year choice from the sidebar radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    Both,
    Year2011,
    Year2012,
}

impl YearFilter {
    pub const ALL: [YearFilter; 3] = [YearFilter::Both, YearFilter::Year2011, YearFilter::Year2012];

    pub fn label(self) -> &'static str {
        match self {
            YearFilter::Both => "2011 & 2012",
            YearFilter::Year2011 => "2011",
            YearFilter::Year2012 => "2012",
        }
    }

    /// The single calendar year to keep, or `None` for both.
    pub fn year(self) -> Option<i32> {
        match self {
            YearFilter::Both => None,
            YearFilter::Year2011 => Some(2011),
            YearFilter::Year2012 => Some(2012),
        }
    }
}

pub const ALL_MONTHS: std::ops::RangeInclusive<u32> = 1..=12;

/// Current sidebar selections. Rebuilt on every interaction, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub year: YearFilter,
    pub seasons: BTreeSet<Season>,
    pub months: BTreeSet<u32>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            year: YearFilter::Both,
            seasons: Season::ALL.into_iter().collect(),
            months: ALL_MONTHS.collect(),
        }
    }
}

impl FilterSelection {
    pub fn with_year(mut self, year: YearFilter) -> Self {
        self.year = year;
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = seasons.into_iter().collect();
        self
    }

    /// Months outside 1-12 are dropped.
    pub fn with_months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.months = months.into_iter().filter(|m| ALL_MONTHS.contains(m)).collect();
        self
    }
}

// ===== Row filters =====

/// Membership test built as an OR chain. An empty set matches nothing.
fn any_of(column: &str, values: impl IntoIterator<Item = Expr>) -> Expr {
    values
        .into_iter()
        .fold(lit(false), |acc, v| acc.or(col(column).eq(v)))
}

/// Apply year, then season, then month filters to a prepared frame.
///
/// Returns a new frame; the input is not modified.
pub fn apply_filters(prepared: &DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    let mut lf = prepared.clone().lazy();

    if let Some(year) = selection.year.year() {
        lf = lf.filter(col(YEAR_COL).eq(lit(year)));
    }

    lf = lf.filter(any_of(
        SEASON_COL,
        selection.seasons.iter().map(|s| lit(s.label())),
    ));
    lf = lf.filter(any_of(
        MONTH_COL,
        selection.months.iter().map(|&m| lit(m as i32)),
    ));

    Ok(lf.collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RentalTable;
    use crate::data::processor::DataProcessor;

    fn prepared() -> DataFrame {
        let df = df!(
            "instant" => (1..=8).collect::<Vec<i64>>(),
            "dteday" => [
                "2011-01-05", "2011-04-12", "2011-07-19", "2011-11-02",
                "2012-01-05", "2012-04-12", "2012-07-19", "2012-11-02",
            ],
            "season" => [1i64, 2, 3, 4, 1, 2, 3, 4],
            "yr" => [0i64, 0, 0, 0, 1, 1, 1, 1],
            "cnt" => [100i64, 200, 300, 400, 150, 250, 350, 450]
        )
        .unwrap();
        DataProcessor::prepare(&RentalTable::new(df)).unwrap()
    }

    #[test]
    fn test_default_selection_keeps_everything() {
        let df = prepared();
        let filtered = apply_filters(&df, &FilterSelection::default()).unwrap();
        assert_eq!(filtered.height(), df.height());
    }

    #[test]
    fn test_year_filters_partition_both_years() {
        let df = prepared();
        let both = apply_filters(&df, &FilterSelection::default()).unwrap();
        let y2011 = apply_filters(&df, &FilterSelection::default().with_year(YearFilter::Year2011)).unwrap();
        let y2012 = apply_filters(&df, &FilterSelection::default().with_year(YearFilter::Year2012)).unwrap();

        assert_eq!(both.height(), y2011.height() + y2012.height());
        assert_eq!(y2011.height(), 4);
        let years: Vec<Option<i32>> = y2012.column("yr").unwrap().i32().unwrap().into_iter().collect();
        assert!(years.iter().all(|y| *y == Some(2012)));
    }

    #[test]
    fn test_season_filter() {
        let df = prepared();
        let selection = FilterSelection::default().with_seasons([Season::Fall, Season::Winter]);
        let filtered = apply_filters(&df, &selection).unwrap();

        let seasons: Vec<Option<&str>> = filtered.column("season").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(seasons, vec![Some("Fall"), Some("Winter"), Some("Fall"), Some("Winter")]);
    }

    #[test]
    fn test_month_filter_combines_with_year() {
        let df = prepared();
        let selection = FilterSelection::default()
            .with_year(YearFilter::Year2011)
            .with_months([1, 7]);
        let filtered = apply_filters(&df, &selection).unwrap();

        let counts: Vec<Option<i64>> = filtered.column("cnt").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(counts, vec![Some(100), Some(300)]);
    }

    #[test]
    fn test_empty_selection_yields_no_rows() {
        let df = prepared();

        let no_seasons = FilterSelection::default().with_seasons([]);
        assert_eq!(apply_filters(&df, &no_seasons).unwrap().height(), 0);

        let no_months = FilterSelection::default().with_months([]);
        let filtered = apply_filters(&df, &no_months).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(filtered.width(), df.width());
    }

    #[test]
    fn test_filtered_never_exceeds_loaded() {
        let df = prepared();
        for year in YearFilter::ALL {
            for season in Season::ALL {
                for month in [1u32, 4, 7, 11, 12] {
                    let selection = FilterSelection::default()
                        .with_year(year)
                        .with_seasons([season])
                        .with_months([month]);
                    assert!(apply_filters(&df, &selection).unwrap().height() <= df.height());
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_months_are_dropped() {
        let selection = FilterSelection::default().with_months([0, 3, 13]);
        assert_eq!(selection.months.into_iter().collect::<Vec<_>>(), vec![3]);
    }
}
