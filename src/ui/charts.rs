use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, ScrollArea, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Line, Plot, PlotPoint,
    PlotPoints, Polygon, Text,
};

use crate::color;
use crate::data::model::{Season, Weather};
use crate::data::summary::{
    hourly_profile, rider_totals_by_year, season_weather_means, season_weather_spread, RiderTotals,
};
use crate::state::{AggregateStyle, AppState};

// ---------------------------------------------------------------------------
// Central panel – the three chart groups, fixed order and titles
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if state.filters.years.is_empty() {
        // Nothing renders on an empty year selection; the warning is the only
        // output for this frame.
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new("Select at least one year to display the charts.")
                    .size(16.0)
                    .color(Color32::from_rgb(0xe0, 0xa0, 0x30)),
            );
        });
        return;
    }

    let years = state.years_title();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(format!("Hourly Usage Pattern ({years})"));
            hourly_pattern(ui, state);

            ui.separator();
            ui.heading(format!("Average Rentals by Season and Weather ({years})"));
            season_weather_chart(ui, state);

            ui.separator();
            ui.heading("Casual vs. Registered Riders");
            rider_pies(ui, state);
        });
}

// ---------------------------------------------------------------------------
// Chart 1: hourly usage lines, one per day kind
// ---------------------------------------------------------------------------

fn hourly_pattern(ui: &mut Ui, state: &AppState) {
    let series = hourly_profile(&state.dataset, &state.hourly_visible);

    Plot::new("hourly_pattern")
        .legend(Legend::default())
        .x_axis_label("Hour of day")
        .y_axis_label("Average rentals")
        .include_x(-0.5)
        .include_x(23.5)
        .include_y(0.0)
        .height(320.0)
        .show(ui, |plot_ui| {
            for s in &series {
                let points: PlotPoints = s
                    .points
                    .iter()
                    .map(|&(hour, mean)| [f64::from(hour), mean])
                    .collect();

                plot_ui.line(
                    Line::new(points)
                        .name(s.day_kind.label())
                        .color(color::day_kind(s.day_kind))
                        .width(2.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Chart 2: season × weather aggregate (bars or box plot)
// ---------------------------------------------------------------------------

/// Offset of a weather condition's bar within its season group.
fn group_offset(weather: Weather) -> f64 {
    (weather.index() as f64 - 1.5) * 0.2
}

fn season_axis_formatter(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 1e-6 {
        return String::new();
    }
    Season::ALL
        .get(rounded as usize)
        .map(|s| s.label().to_string())
        .unwrap_or_default()
}

fn season_weather_chart(ui: &mut Ui, state: &AppState) {
    let plot = Plot::new("season_weather")
        .legend(Legend::default())
        .x_axis_label("Season")
        .y_axis_label("Rentals per day")
        .x_axis_formatter(season_axis_formatter)
        .include_x(-0.6)
        .include_x(3.6)
        .include_y(0.0)
        .height(320.0);

    match state.aggregate_style {
        AggregateStyle::Bars => {
            let means = season_weather_means(&state.dataset, &state.daily_visible);

            plot.show(ui, |plot_ui| {
                for condition in Weather::ALL {
                    let bars: Vec<Bar> = means
                        .iter()
                        .filter(|(_, w, _)| *w == condition)
                        .map(|(season, _, mean)| {
                            Bar::new(season.index() as f64 + group_offset(condition), *mean)
                                .width(0.18)
                        })
                        .collect();
                    if bars.is_empty() {
                        continue;
                    }
                    plot_ui.bar_chart(
                        BarChart::new(bars)
                            .name(condition.label())
                            .color(color::weather(condition)),
                    );
                }
            });
        }
        AggregateStyle::BoxPlot => {
            let spread = season_weather_spread(&state.dataset, &state.daily_visible);

            plot.show(ui, |plot_ui| {
                for condition in Weather::ALL {
                    let boxes: Vec<BoxElem> = spread
                        .iter()
                        .filter(|(_, w, _)| *w == condition)
                        .map(|(season, _, f)| {
                            BoxElem::new(
                                season.index() as f64 + group_offset(condition),
                                BoxSpread::new(f.min, f.q1, f.median, f.q3, f.max),
                            )
                            .box_width(0.16)
                            .whisker_width(0.10)
                        })
                        .collect();
                    if boxes.is_empty() {
                        continue;
                    }
                    plot_ui.box_plot(
                        BoxPlot::new(boxes)
                            .name(condition.label())
                            .color(color::weather(condition)),
                    );
                }
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Chart 3: rider composition pies, one per selected year
// ---------------------------------------------------------------------------

fn rider_pies(ui: &mut Ui, state: &AppState) {
    let totals = rider_totals_by_year(&state.dataset, &state.daily_in_years);
    if totals.is_empty() {
        ui.label("No daily rows in the selected years.");
        return;
    }

    ui.columns(totals.len(), |columns| {
        for (column, (year, riders)) in columns.iter_mut().zip(&totals) {
            rider_pie(column, *year, riders);
        }
    });
}

fn rider_pie(ui: &mut Ui, year: i32, riders: &RiderTotals) {
    let total = riders.total();
    if total == 0 {
        ui.label(format!("No rentals recorded in {year}."));
        return;
    }
    let casual_frac = riders.casual as f64 / total as f64;
    let wedges = [
        ("Casual", casual_frac, color::CASUAL),
        ("Registered", 1.0 - casual_frac, color::REGISTERED),
    ];

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("Rider share – {year}"));
    });

    Plot::new(format!("rider_pie_{year}"))
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .height(260.0)
        .show(ui, |plot_ui| {
            // Wedges start at 12 o'clock and sweep counter-clockwise.
            let mut start = 0.25;
            for (name, frac, fill) in wedges {
                plot_ui.polygon(
                    wedge_polygon(start, frac)
                        .fill_color(fill)
                        .stroke(Stroke::new(1.5, color::WEDGE_OUTLINE))
                        .name(name),
                );

                let mid = TAU * (start + frac / 2.0);
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    RichText::new(format!("{:.1}%", frac * 100.0))
                        .size(13.0)
                        .color(Color32::BLACK),
                ));

                start += frac;
            }
        });
}

/// Unit-circle pie wedge covering `frac` of a turn from `start` (in turns).
fn wedge_polygon(start: f64, frac: f64) -> Polygon<'static> {
    let steps = ((frac * 96.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = TAU * (start + frac * i as f64 / steps as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    Polygon::new(PlotPoints::from(points))
}
