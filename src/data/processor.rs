//! Data Processor Module
//! Derives display columns and computes the seasonal and monthly summaries.

use crate::data::model::{
    RentalTable, Season, COUNT_COL, DATE_COL, MONTH_COL, SEASON_COL, YEARS, YEAR_COL,
};
use crate::error::Result;
use polars::prelude::*;

/// Summed rentals for one (season, year) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalRow {
    pub season: Season,
    pub year: i32,
    pub count: i64,
}

/// Summed rentals for one (month, year) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRow {
    pub month: u32,
    pub year: i32,
    pub count: i64,
}

/// One row per observed (season, year), ordered Spring..Winter then by year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonalSummary {
    pub rows: Vec<SeasonalRow>,
}

/// One row per observed (month, year), ordered by month then year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySummary {
    pub rows: Vec<MonthlyRow>,
}

impl SeasonalSummary {
    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

impl MonthlySummary {
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// Handles column derivation and aggregation over rental frames.
pub struct DataProcessor;

impl DataProcessor {
    /// Replace `season` with its label and `yr` with the calendar year, and
    /// append the `month` extracted from `dteday`.
    ///
    /// Unknown codes become null. Other columns pass through untouched.
    pub fn prepare(table: &RentalTable) -> Result<DataFrame> {
        let df = table.frame();

        let is_season = |season: Season| col(SEASON_COL).eq(lit(season.code()));
        let season_label = when(is_season(Season::Spring))
            .then(lit(Season::Spring.label()))
            .when(is_season(Season::Summer))
            .then(lit(Season::Summer.label()))
            .when(is_season(Season::Fall))
            .then(lit(Season::Fall.label()))
            .when(is_season(Season::Winter))
            .then(lit(Season::Winter.label()))
            .otherwise(lit(NULL))
            .cast(DataType::String)
            .alias(SEASON_COL);

        let [(flag_a, year_a), (flag_b, year_b)] = YEARS;
        let calendar_year = when(col(YEAR_COL).eq(lit(flag_a)))
            .then(lit(year_a))
            .when(col(YEAR_COL).eq(lit(flag_b)))
            .then(lit(year_b))
            .otherwise(lit(NULL))
            .cast(DataType::Int32)
            .alias(YEAR_COL);

        // Non-exact matching accepts a timestamp suffix such as "2011-01-05 00:00:00".
        let date = match df.column(DATE_COL)?.dtype() {
            DataType::Date | DataType::Datetime(_, _) => col(DATE_COL),
            _ => col(DATE_COL).str().to_date(StrptimeOptions {
                format: Some("%Y-%m-%d".into()),
                exact: false,
                ..Default::default()
            }),
        };
        let month = date.dt().month().cast(DataType::Int32).alias(MONTH_COL);

        let prepared = df
            .clone()
            .lazy()
            .with_columns([season_label, calendar_year, month])
            .collect()?;
        Ok(prepared)
    }

    /// Group by (season, year) and sum `cnt`. Expects a prepared frame.
    pub fn seasonal_summary(df: &DataFrame) -> Result<SeasonalSummary> {
        let grouped = Self::sum_counts(df, SEASON_COL)?;

        let seasons = grouped.column(SEASON_COL)?.str()?;
        let years = grouped.column(YEAR_COL)?.i32()?;
        let counts = grouped.column(COUNT_COL)?.i64()?;

        let mut rows: Vec<SeasonalRow> = seasons
            .into_iter()
            .zip(years.into_iter())
            .zip(counts.into_iter())
            .filter_map(|((season, year), count)| {
                Some(SeasonalRow {
                    season: Season::from_label(season?)?,
                    year: year?,
                    count: count.unwrap_or(0),
                })
            })
            .collect();
        rows.sort_by_key(|r| (r.season, r.year));

        Ok(SeasonalSummary { rows })
    }

    /// Group by (month, year) and sum `cnt`. Expects a prepared frame.
    pub fn monthly_summary(df: &DataFrame) -> Result<MonthlySummary> {
        let grouped = Self::sum_counts(df, MONTH_COL)?;

        let months = grouped.column(MONTH_COL)?.i32()?;
        let years = grouped.column(YEAR_COL)?.i32()?;
        let counts = grouped.column(COUNT_COL)?.i64()?;

        let mut rows: Vec<MonthlyRow> = months
            .into_iter()
            .zip(years.into_iter())
            .zip(counts.into_iter())
            .filter_map(|((month, year), count)| {
                Some(MonthlyRow {
                    month: u32::try_from(month?).ok()?,
                    year: year?,
                    count: count.unwrap_or(0),
                })
            })
            .collect();
        rows.sort_by_key(|r| (r.month, r.year));

        Ok(MonthlySummary { rows })
    }

    /// Sum of the `cnt` column, for reconciling summaries against their input.
    pub fn total_count(df: &DataFrame) -> Result<i64> {
        let counts = df.column(COUNT_COL)?.cast(&DataType::Int64)?;
        Ok(counts.i64()?.into_iter().flatten().sum())
    }

    fn sum_counts(df: &DataFrame, key: &str) -> Result<DataFrame> {
        let grouped = df
            .clone()
            .lazy()
            .group_by([col(key), col(YEAR_COL)])
            .agg([col(COUNT_COL).cast(DataType::Int64).sum()])
            .collect()?;
        Ok(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> RentalTable {
        RentalTable::new(
            df!(
                "dteday" => ["2011-01-05", "2012-01-05"],
                "season" => [1i64, 1],
                "yr" => [0i64, 1],
                "cnt" => [100i64, 150]
            )
            .unwrap(),
        )
    }

    fn year_table() -> RentalTable {
        RentalTable::new(
            df!(
                "instant" => [1i64, 2, 3, 4, 5, 6],
                "dteday" => ["2011-01-01", "2011-04-10", "2011-07-20", "2011-10-30", "2012-01-15", "2012-07-04"],
                "season" => [1i64, 2, 3, 4, 1, 3],
                "yr" => [0i64, 0, 0, 0, 1, 1],
                "cnt" => [985i64, 2000, 4500, 3100, 1200, 6000]
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_prepare_derives_labels_years_and_months() {
        let prepared = DataProcessor::prepare(&year_table()).unwrap();

        let seasons: Vec<Option<&str>> = prepared.column("season").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(
            seasons,
            vec![Some("Spring"), Some("Summer"), Some("Fall"), Some("Winter"), Some("Spring"), Some("Fall")]
        );

        let years: Vec<Option<i32>> = prepared.column("yr").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(years, vec![Some(2011), Some(2011), Some(2011), Some(2011), Some(2012), Some(2012)]);

        let months: Vec<Option<i32>> = prepared.column("month").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(months, vec![Some(1), Some(4), Some(7), Some(10), Some(1), Some(7)]);

        // Passthrough columns are preserved, month is appended last.
        assert_eq!(prepared.width(), 6);
        assert_eq!(prepared.get_column_names().last().unwrap().as_str(), "month");
    }

    #[test]
    fn test_prepare_accepts_timestamp_strings() {
        let df = df!(
            "dteday" => ["2011-01-05 00:00:00", "2012-06-05 00:00:00"],
            "season" => [1i64, 2],
            "yr" => [0i64, 1],
            "cnt" => [100i64, 150]
        )
        .unwrap();
        let prepared = DataProcessor::prepare(&RentalTable::new(df)).unwrap();

        let months: Vec<Option<i32>> = prepared.column("month").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(months, vec![Some(1), Some(6)]);
    }

    #[test]
    fn test_prepare_uses_typed_date_column() {
        let df = df!(
            "dteday" => ["2011-03-05", "2012-11-20"],
            "season" => [1i64, 4],
            "yr" => [0i64, 1],
            "cnt" => [100i64, 150]
        )
        .unwrap()
        .lazy()
        .with_column(col("dteday").str().to_date(StrptimeOptions {
            format: Some("%Y-%m-%d".into()),
            ..Default::default()
        }))
        .collect()
        .unwrap();
        assert_eq!(df.column("dteday").unwrap().dtype(), &DataType::Date);

        let prepared = DataProcessor::prepare(&RentalTable::new(df)).unwrap();
        let months: Vec<Option<i32>> = prepared.column("month").unwrap().i32().unwrap().into_iter().collect();
        assert_eq!(months, vec![Some(3), Some(11)]);
        assert_eq!(prepared.column("dteday").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_prepare_leaves_source_table_untouched() {
        let table = year_table();
        DataProcessor::prepare(&table).unwrap();
        assert!(table.frame().column("season").unwrap().i64().is_ok());
        assert!(!table.has_column("month"));
    }

    #[test]
    fn test_seasonal_summary_two_rows() {
        let prepared = DataProcessor::prepare(&two_row_table()).unwrap();
        let summary = DataProcessor::seasonal_summary(&prepared).unwrap();
        assert_eq!(
            summary.rows,
            vec![
                SeasonalRow { season: Season::Spring, year: 2011, count: 100 },
                SeasonalRow { season: Season::Spring, year: 2012, count: 150 },
            ]
        );
    }

    #[test]
    fn test_seasonal_summary_orders_seasons() {
        let prepared = DataProcessor::prepare(&year_table()).unwrap();
        let summary = DataProcessor::seasonal_summary(&prepared).unwrap();
        let keys: Vec<(Season, i32)> = summary.rows.iter().map(|r| (r.season, r.year)).collect();
        assert_eq!(
            keys,
            vec![
                (Season::Spring, 2011),
                (Season::Spring, 2012),
                (Season::Summer, 2011),
                (Season::Fall, 2011),
                (Season::Fall, 2012),
                (Season::Winter, 2011),
            ]
        );
        assert_eq!(summary.years(), vec![2011, 2012]);
    }

    #[test]
    fn test_monthly_summary_sums_within_month() {
        let df = df!(
            "dteday" => ["2011-03-01", "2011-03-02", "2011-02-01", "2012-03-01"],
            "season" => [1i64, 1, 1, 1],
            "yr" => [0i64, 0, 0, 1],
            "cnt" => [10i64, 20, 5, 7]
        )
        .unwrap();
        let prepared = DataProcessor::prepare(&RentalTable::new(df)).unwrap();
        let summary = DataProcessor::monthly_summary(&prepared).unwrap();
        assert_eq!(
            summary.rows,
            vec![
                MonthlyRow { month: 2, year: 2011, count: 5 },
                MonthlyRow { month: 3, year: 2011, count: 30 },
                MonthlyRow { month: 3, year: 2012, count: 7 },
            ]
        );
    }

    #[test]
    fn test_summaries_reconcile_with_filtered_total() {
        let prepared = DataProcessor::prepare(&year_table()).unwrap();
        let total = DataProcessor::total_count(&prepared).unwrap();
        assert_eq!(total, 17785);
        let seasonal = DataProcessor::seasonal_summary(&prepared).unwrap();
        let monthly = DataProcessor::monthly_summary(&prepared).unwrap();
        assert_eq!(seasonal.rows.iter().map(|r| r.count).sum::<i64>(), total);
        assert_eq!(monthly.rows.iter().map(|r| r.count).sum::<i64>(), total);
    }

    #[test]
    fn test_summaries_ignore_row_order() {
        let prepared = DataProcessor::prepare(&year_table()).unwrap();
        let reversed = prepared.reverse();

        assert_eq!(
            DataProcessor::seasonal_summary(&prepared).unwrap(),
            DataProcessor::seasonal_summary(&reversed).unwrap()
        );
        assert_eq!(
            DataProcessor::monthly_summary(&prepared).unwrap(),
            DataProcessor::monthly_summary(&reversed).unwrap()
        );
    }

    #[test]
    fn test_summaries_of_empty_frame() {
        let prepared = DataProcessor::prepare(&year_table()).unwrap();
        let empty = prepared.head(Some(0));

        let seasonal = DataProcessor::seasonal_summary(&empty).unwrap();
        let monthly = DataProcessor::monthly_summary(&empty).unwrap();
        assert!(seasonal.rows.is_empty());
        assert!(monthly.rows.is_empty());
    }

    #[test]
    fn test_missing_count_column_is_an_error() {
        let df = df!(
            "dteday" => ["2011-01-05"],
            "season" => [1i64],
            "yr" => [0i64]
        )
        .unwrap();
        let prepared = DataProcessor::prepare(&RentalTable::new(df)).unwrap();
        assert!(DataProcessor::seasonal_summary(&prepared).is_err());
    }
}
