use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Categorical columns – integer codes from the dataset docs → display labels
// ---------------------------------------------------------------------------

/// Season category. Declaration order is the fixed display/axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Map the dataset's 1–4 season code. Codes outside the documented range
    /// stay unmapped rather than failing the load.
    pub fn from_code(code: u8) -> Option<Season> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
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

    /// Position on the aggregate chart's x-axis.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Weather situation category, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weather {
    Clear,
    Mist,
    LightSnowRain,
    HeavyRainSnow,
}

impl Weather {
    pub const ALL: [Weather; 4] = [
        Weather::Clear,
        Weather::Mist,
        Weather::LightSnowRain,
        Weather::HeavyRainSnow,
    ];

    /// Map the dataset's 1–4 weather code; unknown codes stay unmapped.
    pub fn from_code(code: u8) -> Option<Weather> {
        match code {
            1 => Some(Weather::Clear),
            2 => Some(Weather::Mist),
            3 => Some(Weather::LightSnowRain),
            4 => Some(Weather::HeavyRainSnow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weather::Clear => "Clear/Few Clouds",
            Weather::Mist => "Mist/Cloudy",
            Weather::LightSnowRain => "Light Snow/Rain",
            Weather::HeavyRainSnow => "Heavy Rain/Snow",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Kind of calendar day, derived from the working-day and holiday flags.
/// The holiday flag wins: a public holiday is never counted as a workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayKind {
    Workday,
    Weekend,
    Holiday,
}

impl DayKind {
    pub fn of(working_day: bool, holiday: bool) -> DayKind {
        if holiday {
            DayKind::Holiday
        } else if working_day {
            DayKind::Workday
        } else {
            DayKind::Weekend
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayKind::Workday => "Workday",
            DayKind::Weekend => "Weekend",
            DayKind::Holiday => "Holiday",
        }
    }
}

// ---------------------------------------------------------------------------
// Records – one row of each source CSV
// ---------------------------------------------------------------------------

/// One row of `hour.csv`. Columns not listed here (temperature, humidity,
/// wind speed, …) are ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "hr")]
    pub hour: u8,
    #[serde(rename = "holiday", deserialize_with = "bool_from_int")]
    pub holiday: bool,
    #[serde(rename = "workingday", deserialize_with = "bool_from_int")]
    pub working_day: bool,
    #[serde(rename = "cnt")]
    pub count: u32,
}

impl HourlyRecord {
    /// Calendar year, derived from the date column.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn day_kind(&self) -> DayKind {
        DayKind::of(self.working_day, self.holiday)
    }
}

/// One row of `day.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "season", deserialize_with = "season_from_code")]
    pub season: Option<Season>,
    #[serde(rename = "weathersit", deserialize_with = "weather_from_code")]
    pub weather: Option<Weather>,
    pub casual: u32,
    pub registered: u32,
    #[serde(rename = "cnt")]
    pub count: u32,
}

impl DailyRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

// -- serde helpers for the integer-coded CSV columns --

fn bool_from_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(u8::deserialize(deserializer)? != 0)
}

fn season_from_code<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Season>, D::Error> {
    Ok(Season::from_code(u8::deserialize(deserializer)?))
}

fn weather_from_code<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Weather>, D::Error> {
    Ok(Weather::from_code(u8::deserialize(deserializer)?))
}

// ---------------------------------------------------------------------------
// BikeDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Both source tables plus the distinct years present, read-only after load.
#[derive(Debug, Clone)]
pub struct BikeDataset {
    /// All hourly rows.
    pub hourly: Vec<HourlyRecord>,
    /// All daily rows.
    pub daily: Vec<DailyRecord>,
    /// Sorted distinct calendar years in the daily table.
    pub years: Vec<i32>,
}

impl BikeDataset {
    pub fn new(hourly: Vec<HourlyRecord>, daily: Vec<DailyRecord>) -> Self {
        let mut years: Vec<i32> = daily.iter().map(|r| r.year()).collect();
        years.sort_unstable();
        years.dedup();
        BikeDataset { hourly, daily, years }
    }

    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }
}
