use crate::data::filter::{
    filtered_daily_indices, filtered_hourly_indices, year_daily_indices, FilterSelection,
};
use crate::data::model::BikeDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which rendition of the season × weather chart is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateStyle {
    /// Mean rental count as grouped bars.
    Bars,
    /// Distribution of rental counts as a box plot.
    BoxPlot,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded once at startup, read-only afterwards.
    pub dataset: BikeDataset,

    /// Current year/season/weather selection.
    pub filters: FilterSelection,

    /// Daily rows passing all three filters (cached).
    pub daily_visible: Vec<usize>,

    /// Hourly rows in the selected years (cached).
    pub hourly_visible: Vec<usize>,

    /// Daily rows in the selected years only, for the rider pies (cached).
    pub daily_in_years: Vec<usize>,

    /// Bars vs. box plot for the aggregate chart.
    pub aggregate_style: AggregateStyle,
}

impl AppState {
    pub fn new(dataset: BikeDataset) -> Self {
        let filters = FilterSelection::default_for(&dataset);
        let mut state = AppState {
            dataset,
            filters,
            daily_visible: Vec::new(),
            hourly_visible: Vec::new(),
            daily_in_years: Vec::new(),
            aggregate_style: AggregateStyle::Bars,
        };
        state.refilter();
        state
    }

    /// Recompute the cached index vectors after a filter change.
    pub fn refilter(&mut self) {
        self.daily_visible = filtered_daily_indices(&self.dataset, &self.filters);
        self.hourly_visible = filtered_hourly_indices(&self.dataset, &self.filters);
        self.daily_in_years = year_daily_indices(&self.dataset, &self.filters);
    }

    /// Title suffix listing the selected years, e.g. `2011 & 2012`.
    pub fn years_title(&self) -> String {
        self.filters
            .years
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Season, Weather};
    use crate::data::testutil::{daily, dataset, hourly};
    use std::collections::BTreeSet;

    #[test]
    fn refilter_keeps_index_vectors_consistent() {
        let ds = dataset(
            vec![
                hourly(2011, 6, 1, 8, true, false, 10),
                hourly(2012, 6, 1, 8, true, false, 20),
            ],
            vec![
                daily(2011, 6, 1, Some(Season::Summer), Some(Weather::Clear), 5, 15),
                daily(2012, 6, 1, Some(Season::Summer), Some(Weather::Clear), 7, 13),
            ],
        );
        let mut state = AppState::new(ds);
        assert_eq!(state.hourly_visible.len(), 1);
        assert_eq!(state.daily_visible.len(), 1);

        state.filters.years = BTreeSet::from([2011, 2012]);
        state.refilter();
        assert_eq!(state.hourly_visible.len(), 2);
        assert_eq!(state.daily_in_years.len(), 2);
        assert_eq!(state.years_title(), "2011 & 2012");
    }
}
