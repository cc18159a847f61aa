use std::collections::BTreeSet;

use super::model::{BikeDataset, Season, Weather};

// ---------------------------------------------------------------------------
// Filter predicate: which years / seasons / weather conditions are selected
// ---------------------------------------------------------------------------

/// User-driven selection state, rebuilt by the sidebar on every interaction.
/// Never persisted; rows are only ever selected, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub seasons: BTreeSet<Season>,
    pub weather: BTreeSet<Weather>,
}

impl FilterSelection {
    /// Initial selection: the 2012 season of the dataset when present
    /// (otherwise every year found), with all seasons and weather conditions
    /// enabled.
    pub fn default_for(dataset: &BikeDataset) -> Self {
        let years: BTreeSet<i32> = if dataset.years.contains(&2012) {
            BTreeSet::from([2012])
        } else {
            dataset.years.iter().copied().collect()
        };
        FilterSelection {
            years,
            seasons: Season::ALL.into_iter().collect(),
            weather: Weather::ALL.into_iter().collect(),
        }
    }
}

/// Indices of daily rows passing all three predicates (logical AND). A row
/// with an unmapped season or weather code never matches an active filter,
/// mirroring a set-membership test against display labels.
pub fn filtered_daily_indices(dataset: &BikeDataset, sel: &FilterSelection) -> Vec<usize> {
    dataset
        .daily
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            sel.years.contains(&row.year())
                && row.season.is_some_and(|s| sel.seasons.contains(&s))
                && row.weather.is_some_and(|w| sel.weather.contains(&w))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Indices of hourly rows in the selected years. The hourly chart is only
/// year-filtered; season and weather do not apply to it.
pub fn filtered_hourly_indices(dataset: &BikeDataset, sel: &FilterSelection) -> Vec<usize> {
    dataset
        .hourly
        .iter()
        .enumerate()
        .filter(|(_, row)| sel.years.contains(&row.year()))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of daily rows in the selected years, ignoring the season and
/// weather filters. Feeds the rider-composition pies, whose per-year totals
/// must match the unfiltered table.
pub fn year_daily_indices(dataset: &BikeDataset, sel: &FilterSelection) -> Vec<usize> {
    dataset
        .daily
        .iter()
        .enumerate()
        .filter(|(_, row)| sel.years.contains(&row.year()))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{daily, dataset, hourly};

    fn two_year_dataset() -> BikeDataset {
        dataset(
            vec![
                hourly(2011, 6, 1, 8, true, false, 100),
                hourly(2012, 6, 1, 8, true, false, 150),
                hourly(2012, 6, 2, 9, false, false, 80),
            ],
            vec![
                daily(2011, 3, 1, Some(Season::Spring), Some(Weather::Clear), 50, 150),
                daily(2012, 3, 1, Some(Season::Spring), Some(Weather::Clear), 60, 200),
                daily(2012, 7, 1, Some(Season::Summer), Some(Weather::Mist), 90, 210),
                daily(2012, 11, 1, Some(Season::Winter), Some(Weather::Clear), 20, 120),
            ],
        )
    }

    #[test]
    fn daily_filter_restricts_years_exactly() {
        let ds = two_year_dataset();
        let mut sel = FilterSelection::default_for(&ds);
        sel.years = BTreeSet::from([2011]);

        let rows = filtered_daily_indices(&ds, &sel);
        let years: BTreeSet<i32> = rows.iter().map(|&i| ds.daily[i].year()).collect();
        assert_eq!(years, BTreeSet::from([2011]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = two_year_dataset();
        let sel = FilterSelection::default_for(&ds);
        assert_eq!(filtered_daily_indices(&ds, &sel), filtered_daily_indices(&ds, &sel));
        assert_eq!(
            filtered_hourly_indices(&ds, &sel),
            filtered_hourly_indices(&ds, &sel)
        );
    }

    #[test]
    fn season_and_weather_filters_and_together() {
        let ds = two_year_dataset();
        let mut sel = FilterSelection::default_for(&ds);
        sel.seasons = BTreeSet::from([Season::Summer]);
        sel.weather = BTreeSet::from([Weather::Clear]);

        // 2012 Summer rows are all Mist, so the AND of both predicates is empty.
        assert!(filtered_daily_indices(&ds, &sel).is_empty());

        sel.weather = BTreeSet::from([Weather::Mist]);
        let rows = filtered_daily_indices(&ds, &sel);
        assert_eq!(rows.len(), 1);
        assert_eq!(ds.daily[rows[0]].season, Some(Season::Summer));
    }

    #[test]
    fn hourly_filter_ignores_season_and_weather() {
        let ds = two_year_dataset();
        let mut sel = FilterSelection::default_for(&ds);
        sel.seasons.clear();
        sel.weather.clear();

        // Default year selection is {2012}: both 2012 hourly rows survive.
        assert_eq!(filtered_hourly_indices(&ds, &sel).len(), 2);
    }

    #[test]
    fn unmapped_category_never_matches() {
        let ds = dataset(
            Vec::new(),
            vec![daily(2012, 5, 1, None, Some(Weather::Clear), 10, 20)],
        );
        let sel = FilterSelection::default_for(&ds);
        assert!(filtered_daily_indices(&ds, &sel).is_empty());
        // Year-only selections still see the row.
        assert_eq!(year_daily_indices(&ds, &sel).len(), 1);
    }

    #[test]
    fn default_selection_prefers_2012() {
        let ds = two_year_dataset();
        let sel = FilterSelection::default_for(&ds);
        assert_eq!(sel.years, BTreeSet::from([2012]));
        assert_eq!(sel.seasons.len(), 4);
        assert_eq!(sel.weather.len(), 4);
    }

    #[test]
    fn default_selection_falls_back_to_present_years() {
        let ds = dataset(
            Vec::new(),
            vec![daily(2019, 5, 1, Some(Season::Spring), Some(Weather::Clear), 1, 2)],
        );
        let sel = FilterSelection::default_for(&ds);
        assert_eq!(sel.years, BTreeSet::from([2019]));
    }
}
