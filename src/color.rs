use eframe::egui::Color32;

use crate::data::model::{DayKind, Weather};

// ---------------------------------------------------------------------------
// Fixed chart palettes
// ---------------------------------------------------------------------------

/// Pie wedge colour for casual riders.
pub const CASUAL: Color32 = Color32::from_rgb(0xff, 0x99, 0x99);
/// Pie wedge colour for registered riders.
pub const REGISTERED: Color32 = Color32::from_rgb(0x66, 0xb3, 0xff);
/// Outline drawn around every pie wedge.
pub const WEDGE_OUTLINE: Color32 = Color32::BLACK;

/// Fixed per-condition palette of the season × weather aggregate chart.
pub fn weather(w: Weather) -> Color32 {
    match w {
        Weather::Clear => Color32::from_rgb(0x66, 0xc2, 0xa5),
        Weather::Mist => Color32::from_rgb(0xfc, 0x8d, 0x62),
        Weather::LightSnowRain => Color32::from_rgb(0x8d, 0xa0, 0xcb),
        Weather::HeavyRainSnow => Color32::from_rgb(0xe7, 0x8a, 0xc3),
    }
}

/// Line colour per day kind in the hourly pattern chart.
pub fn day_kind(kind: DayKind) -> Color32 {
    match kind {
        DayKind::Workday => Color32::from_rgb(0x1f, 0x77, 0xb4),
        DayKind::Weekend => Color32::from_rgb(0x2c, 0xa0, 0x2c),
        DayKind::Holiday => Color32::from_rgb(0xd6, 0x27, 0x28),
    }
}
