//! Writes deterministic `hour.csv` / `day.csv` files with the bike-share
//! schema, so the dashboard can run without the upstream dataset.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Dataset convention: 1 = Spring … 4 = Winter, by meteorological month.
fn season_code(month: u32) -> u8 {
    match month {
        3..=5 => 1,
        6..=8 => 2,
        9..=11 => 3,
        _ => 4,
    }
}

fn is_holiday(date: NaiveDate) -> bool {
    matches!(
        (date.month(), date.day()),
        (1, 1) | (7, 4) | (11, 11) | (12, 25)
    )
}

fn weather_code(rng: &mut SimpleRng) -> u8 {
    let roll = rng.next_f64();
    if roll < 0.62 {
        1
    } else if roll < 0.92 {
        2
    } else if roll < 0.99 {
        3
    } else {
        4
    }
}

/// Relative demand per hour of day.
const WORKDAY_CURVE: [f64; 24] = [
    0.06, 0.04, 0.03, 0.02, 0.03, 0.10, 0.35, 0.80, 1.00, 0.55, 0.40, 0.45, //
    0.52, 0.50, 0.48, 0.55, 0.75, 1.00, 0.90, 0.65, 0.48, 0.38, 0.28, 0.15,
];
const OFFDAY_CURVE: [f64; 24] = [
    0.12, 0.08, 0.05, 0.03, 0.02, 0.04, 0.08, 0.18, 0.35, 0.55, 0.75, 0.90, //
    1.00, 1.00, 0.95, 0.88, 0.78, 0.65, 0.52, 0.42, 0.35, 0.30, 0.24, 0.18,
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(2011);

    let mut hour_writer = csv::Writer::from_path("hour.csv")?;
    let mut day_writer = csv::Writer::from_path("day.csv")?;

    hour_writer.write_record([
        "instant", "dteday", "season", "yr", "mnth", "hr", "holiday", "weekday", "workingday",
        "weathersit", "casual", "registered", "cnt",
    ])?;
    day_writer.write_record([
        "instant", "dteday", "season", "yr", "mnth", "holiday", "weekday", "workingday",
        "weathersit", "casual", "registered", "cnt",
    ])?;

    let start = NaiveDate::from_ymd_opt(2011, 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).expect("valid date");

    let mut hour_instant: u64 = 0;
    let mut day_instant: u64 = 0;

    let mut date = start;
    while date <= end {
        let holiday = is_holiday(date);
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let working_day = !weekend && !holiday;
        let weather = weather_code(&mut rng);
        let season = season_code(date.month());
        let yr = date.year() - 2011;
        let weekday = date.weekday().num_days_from_sunday();

        // Ridership grows in year two, dips in bad weather and in winter.
        let year_factor = if yr == 0 { 1.0 } else { 1.6 };
        let season_factor = match season {
            2 => 1.2,
            3 => 1.1,
            4 => 0.7,
            _ => 0.9,
        };
        let weather_factor = match weather {
            1 => 1.0,
            2 => 0.8,
            3 => 0.45,
            _ => 0.15,
        };
        let curve = if working_day { &WORKDAY_CURVE } else { &OFFDAY_CURVE };
        let casual_share = if holiday {
            0.40
        } else if weekend {
            0.35
        } else {
            0.15
        };

        let mut day_casual: u64 = 0;
        let mut day_registered: u64 = 0;

        for (hr, weight) in curve.iter().enumerate() {
            let noise = 0.85 + 0.3 * rng.next_f64();
            let cnt = (400.0 * weight * year_factor * season_factor * weather_factor * noise)
                .round() as u64;
            let casual = (cnt as f64 * casual_share).round() as u64;
            let registered = cnt - casual;
            day_casual += casual;
            day_registered += registered;

            hour_instant += 1;
            hour_writer.write_record([
                hour_instant.to_string(),
                date.format("%Y-%m-%d").to_string(),
                season.to_string(),
                yr.to_string(),
                date.month().to_string(),
                hr.to_string(),
                u8::from(holiday).to_string(),
                weekday.to_string(),
                u8::from(working_day).to_string(),
                weather.to_string(),
                casual.to_string(),
                registered.to_string(),
                cnt.to_string(),
            ])?;
        }

        day_instant += 1;
        day_writer.write_record([
            day_instant.to_string(),
            date.format("%Y-%m-%d").to_string(),
            season.to_string(),
            yr.to_string(),
            date.month().to_string(),
            u8::from(holiday).to_string(),
            weekday.to_string(),
            u8::from(working_day).to_string(),
            weather.to_string(),
            day_casual.to_string(),
            day_registered.to_string(),
            (day_casual + day_registered).to_string(),
        ])?;

        date = date.succ_opt().expect("date within range");
    }

    hour_writer.flush()?;
    day_writer.flush()?;

    println!("Wrote {day_instant} daily and {hour_instant} hourly rows to day.csv / hour.csv");
    Ok(())
}
