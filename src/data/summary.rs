use std::collections::BTreeMap;

use super::model::{BikeDataset, DayKind, Season, Weather};

// ---------------------------------------------------------------------------
// Chart-facing aggregations over filtered row indices
// ---------------------------------------------------------------------------
//
// Each function consumes the dataset plus a slice of row indices produced by
// the filter stage and returns a fresh value; nothing here touches the source
// tables. Keeping the group-bys out of the UI layer keeps them unit-testable.

/// Mean rentals per hour of day for one kind of calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    pub day_kind: DayKind,
    /// (hour, mean count), sorted by hour; hours with no rows are absent.
    pub points: Vec<(u8, f64)>,
}

/// Group the selected hourly rows by [`DayKind`] and average the rental count
/// per hour of day. Series come back in `DayKind` order; only kinds present
/// in the selection appear.
pub fn hourly_profile(dataset: &BikeDataset, rows: &[usize]) -> Vec<HourlySeries> {
    let mut sums: BTreeMap<DayKind, [(u64, u32); 24]> = BTreeMap::new();

    for &i in rows {
        let rec = &dataset.hourly[i];
        if rec.hour >= 24 {
            continue;
        }
        let per_hour = sums.entry(rec.day_kind()).or_insert([(0, 0); 24]);
        let (sum, n) = &mut per_hour[rec.hour as usize];
        *sum += u64::from(rec.count);
        *n += 1;
    }

    sums.into_iter()
        .map(|(day_kind, per_hour)| HourlySeries {
            day_kind,
            points: per_hour
                .iter()
                .enumerate()
                .filter(|(_, (_, n))| *n > 0)
                .map(|(hour, (sum, n))| (hour as u8, *sum as f64 / f64::from(*n)))
                .collect(),
        })
        .collect()
}

/// Mean daily rental count per (season, weather) pair present in the
/// selection, in fixed season-then-weather order.
pub fn season_weather_means(dataset: &BikeDataset, rows: &[usize]) -> Vec<(Season, Weather, f64)> {
    let mut groups: BTreeMap<(Season, Weather), (u64, u32)> = BTreeMap::new();

    for &i in rows {
        let rec = &dataset.daily[i];
        let (Some(season), Some(weather)) = (rec.season, rec.weather) else {
            continue;
        };
        let (sum, n) = groups.entry((season, weather)).or_default();
        *sum += u64::from(rec.count);
        *n += 1;
    }

    groups
        .into_iter()
        .map(|((season, weather), (sum, n))| (season, weather, sum as f64 / f64::from(n)))
        .collect()
}

/// Five-number summary of a distribution, quartiles by linear interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumber {
    fn of(sorted: &[f64]) -> FiveNumber {
        FiveNumber {
            min: sorted[0],
            q1: quantile(sorted, 0.25),
            median: quantile(sorted, 0.5),
            q3: quantile(sorted, 0.75),
            max: sorted[sorted.len() - 1],
        }
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Distribution of the daily rental count per (season, weather) pair, for the
/// box-plot variant of the aggregate chart.
pub fn season_weather_spread(
    dataset: &BikeDataset,
    rows: &[usize],
) -> Vec<(Season, Weather, FiveNumber)> {
    let mut groups: BTreeMap<(Season, Weather), Vec<f64>> = BTreeMap::new();

    for &i in rows {
        let rec = &dataset.daily[i];
        let (Some(season), Some(weather)) = (rec.season, rec.weather) else {
            continue;
        };
        groups
            .entry((season, weather))
            .or_default()
            .push(f64::from(rec.count));
    }

    groups
        .into_iter()
        .map(|((season, weather), mut values)| {
            values.sort_by(f64::total_cmp);
            (season, weather, FiveNumber::of(&values))
        })
        .collect()
}

/// Summed casual and registered rider counts for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiderTotals {
    pub casual: u64,
    pub registered: u64,
}

impl RiderTotals {
    pub fn total(&self) -> u64 {
        self.casual + self.registered
    }
}

/// Per-year casual/registered totals over the given daily rows, sorted by
/// year. Callers pass year-only filtered rows so each pie reflects the whole
/// year, not the season/weather subset.
pub fn rider_totals_by_year(dataset: &BikeDataset, rows: &[usize]) -> Vec<(i32, RiderTotals)> {
    let mut totals: BTreeMap<i32, RiderTotals> = BTreeMap::new();

    for &i in rows {
        let rec = &dataset.daily[i];
        let t = totals.entry(rec.year()).or_default();
        t.casual += u64::from(rec.casual);
        t.registered += u64::from(rec.registered);
    }

    totals.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{year_daily_indices, FilterSelection};
    use crate::data::testutil::{daily, dataset, hourly};
    use std::collections::BTreeSet;

    #[test]
    fn hourly_profile_averages_per_day_kind_and_hour() {
        let ds = dataset(
            vec![
                hourly(2012, 6, 4, 8, true, false, 100),
                hourly(2012, 6, 5, 8, true, false, 200),
                hourly(2012, 6, 9, 8, false, false, 60),
                hourly(2012, 7, 4, 8, false, true, 30),
            ],
            Vec::new(),
        );
        let rows: Vec<usize> = (0..ds.hourly.len()).collect();
        let series = hourly_profile(&ds, &rows);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].day_kind, DayKind::Workday);
        assert_eq!(series[0].points, vec![(8, 150.0)]);
        assert_eq!(series[1].day_kind, DayKind::Weekend);
        assert_eq!(series[1].points, vec![(8, 60.0)]);
        assert_eq!(series[2].day_kind, DayKind::Holiday);
        assert_eq!(series[2].points, vec![(8, 30.0)]);
    }

    #[test]
    fn season_weather_means_group_in_fixed_order() {
        let ds = dataset(
            Vec::new(),
            vec![
                daily(2012, 8, 1, Some(Season::Fall), Some(Weather::Clear), 100, 300),
                daily(2012, 8, 2, Some(Season::Fall), Some(Weather::Clear), 100, 100),
                daily(2012, 4, 1, Some(Season::Spring), Some(Weather::Mist), 50, 150),
                daily(2012, 4, 2, None, Some(Weather::Clear), 1, 1),
            ],
        );
        let rows: Vec<usize> = (0..ds.daily.len()).collect();
        let means = season_weather_means(&ds, &rows);

        assert_eq!(
            means,
            vec![
                (Season::Spring, Weather::Mist, 200.0),
                (Season::Fall, Weather::Clear, 300.0),
            ]
        );
    }

    #[test]
    fn five_number_summary_interpolates_quartiles() {
        let values = [1.0, 2.0, 3.0, 4.0];
        let fns = FiveNumber::of(&values);
        assert_eq!(fns.min, 1.0);
        assert_eq!(fns.q1, 1.75);
        assert_eq!(fns.median, 2.5);
        assert_eq!(fns.q3, 3.25);
        assert_eq!(fns.max, 4.0);
    }

    #[test]
    fn spread_sorts_values_before_summarizing() {
        let ds = dataset(
            Vec::new(),
            vec![
                daily(2012, 1, 5, Some(Season::Spring), Some(Weather::Clear), 0, 9),
                daily(2012, 1, 6, Some(Season::Spring), Some(Weather::Clear), 0, 1),
                daily(2012, 1, 7, Some(Season::Spring), Some(Weather::Clear), 0, 5),
            ],
        );
        let rows: Vec<usize> = (0..ds.daily.len()).collect();
        let spread = season_weather_spread(&ds, &rows);
        assert_eq!(spread.len(), 1);
        let (_, _, fns) = spread[0];
        assert_eq!(fns.min, 1.0);
        assert_eq!(fns.median, 5.0);
        assert_eq!(fns.max, 9.0);
    }

    #[test]
    fn pie_totals_match_unfiltered_table_per_year() {
        let ds = dataset(
            Vec::new(),
            vec![
                daily(2011, 3, 1, Some(Season::Spring), Some(Weather::Clear), 10, 40),
                daily(2012, 3, 1, Some(Season::Spring), Some(Weather::Clear), 20, 80),
                daily(2012, 9, 1, Some(Season::Fall), Some(Weather::Mist), 30, 70),
            ],
        );
        let mut sel = FilterSelection::default_for(&ds);
        sel.years = BTreeSet::from([2011, 2012]);
        // Shrink season/weather selection; the pies must not care.
        sel.seasons = BTreeSet::from([Season::Spring]);

        let totals = rider_totals_by_year(&ds, &year_daily_indices(&ds, &sel));
        assert_eq!(
            totals,
            vec![
                (2011, RiderTotals { casual: 10, registered: 40 }),
                (2012, RiderTotals { casual: 50, registered: 150 }),
            ]
        );
    }

    #[test]
    fn single_year_selection_yields_one_pie() {
        let ds = dataset(
            Vec::new(),
            vec![
                daily(2011, 3, 1, Some(Season::Spring), Some(Weather::Clear), 10, 40),
                daily(2012, 3, 1, Some(Season::Spring), Some(Weather::Clear), 20, 80),
            ],
        );
        let sel = FilterSelection::default_for(&ds);
        let totals = rider_totals_by_year(&ds, &year_daily_indices(&ds, &sel));
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].0, 2012);
    }
}
