use std::collections::BTreeSet;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::{Season, Weather};
use crate::state::{AggregateStyle, AppState};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible section per dimension.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let years = state.dataset.years.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            filter_section(ui, "Year", &years, |y| y.to_string(), &mut state.filters.years, true);
            filter_section(
                ui,
                "Season",
                &Season::ALL,
                |s| s.label().to_string(),
                &mut state.filters.seasons,
                false,
            );
            filter_section(
                ui,
                "Weather",
                &Weather::ALL,
                |w| w.label().to_string(),
                &mut state.filters.weather,
                false,
            );
        });

    // Recompute visible indices after any checkbox changes.
    state.refilter();
}

/// One filter dimension: All/None buttons plus a checkbox per value.
fn filter_section<T: Copy + Ord>(
    ui: &mut Ui,
    title: &str,
    values: &[T],
    label: impl Fn(&T) -> String,
    selected: &mut BTreeSet<T>,
    default_open: bool,
) {
    let header_text = format!("{title}  ({}/{})", selected.len(), values.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(title)
        .default_open(default_open)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selected.extend(values.iter().copied());
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                }
            });

            for val in values {
                let mut checked = selected.contains(val);
                if ui.checkbox(&mut checked, label(val)).changed() {
                    if checked {
                        selected.insert(*val);
                    } else {
                        selected.remove(val);
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset counts and the aggregate-chart toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Bike Share Dashboard").strong());

        ui.separator();

        ui.label(format!(
            "{} daily / {} hourly rows loaded, {} days visible",
            state.dataset.daily.len(),
            state.dataset.hourly.len(),
            state.daily_visible.len()
        ));

        ui.separator();

        let boxed = state.aggregate_style == AggregateStyle::BoxPlot;
        if ui.selectable_label(boxed, "Box plot").clicked() {
            state.aggregate_style = if boxed {
                AggregateStyle::Bars
            } else {
                AggregateStyle::BoxPlot
            };
        }
    });
}
