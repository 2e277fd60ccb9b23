use chrono::NaiveDate;
use js_sys::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    DaysToGo(i64),
    Today,
}

impl Countdown {
    /// Whole calendar days; on and after the event day it stays at `Today`.
    pub fn between(today: NaiveDate, event: NaiveDate) -> Countdown {
        match (event - today).num_days() {
            d if d > 0 => Countdown::DaysToGo(d),
            _ => Countdown::Today,
        }
    }

    pub fn until(event: NaiveDate) -> Option<Countdown> {
        today_local().map(|today| Self::between(today, event))
    }

    pub fn banner(self) -> String {
        match self {
            Countdown::DaysToGo(1) => "1 day to go".to_string(),
            Countdown::DaysToGo(d) => format!("{d} days to go"),
            Countdown::Today => "Today is the day!".to_string(),
        }
    }
}

fn today_local() -> Option<NaiveDate> {
    let now = Date::new_0();
    let y = now.get_full_year() as i32;
    let m = now.get_month() as u32 + 1; // JS months are 0-11
    let d = now.get_date() as u32;
    NaiveDate::from_ymd_opt(y, m, d)
}
