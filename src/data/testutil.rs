//! Small record builders shared by the data-layer unit tests.

use chrono::NaiveDate;

use super::model::{BikeDataset, DailyRecord, HourlyRecord, Season, Weather};

pub fn hourly(
    year: i32,
    month: u32,
    day: u32,
    hour: u8,
    working_day: bool,
    holiday: bool,
    count: u32,
) -> HourlyRecord {
    HourlyRecord {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        hour,
        holiday,
        working_day,
        count,
    }
}

pub fn daily(
    year: i32,
    month: u32,
    day: u32,
    season: Option<Season>,
    weather: Option<Weather>,
    casual: u32,
    registered: u32,
) -> DailyRecord {
    DailyRecord {
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        season,
        weather,
        casual,
        registered,
        count: casual + registered,
    }
}

pub fn dataset(hourly: Vec<HourlyRecord>, daily: Vec<DailyRecord>) -> BikeDataset {
    BikeDataset::new(hourly, daily)
}
