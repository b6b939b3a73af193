use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Commercial season label, a pure function of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Normal,
    WinterSale,
    SummerSale,
    Ramadan,
    BlackFriday,
}

impl Season {
    /// First match wins: November is Black Friday, January/February the
    /// winter sale, July/August the summer sale, March/April Ramadan.
    pub fn from_month(month: u32) -> Self {
        match month {
            11 => Season::BlackFriday,
            1 | 2 => Season::WinterSale,
            7 | 8 => Season::SummerSale,
            3 | 4 => Season::Ramadan,
            _ => Season::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Normal => "Normal",
            Season::WinterSale => "Winter Sale",
            Season::SummerSale => "Summer Sale",
            Season::Ramadan => "Ramadan",
            Season::BlackFriday => "Black Friday",
        }
    }

    /// Relative over-representation of the season in the sales fact table.
    pub fn sales_weight(&self) -> f64 {
        match self {
            Season::Normal => 1.0,
            Season::WinterSale => 1.3,
            Season::SummerSale => 1.2,
            Season::Ramadan => 1.4,
            Season::BlackFriday => 2.5,
        }
    }
}

/// One row of the time dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date_id: u32,
    pub date: NaiveDate,
    pub year: i32,
    pub quarter: u32,
    pub month: u32,
    pub month_name: String,
    pub iso_week: u32,
    pub day: u32,
    pub weekday_name: String,
    pub is_weekend: bool,
    /// No holiday calendar is modeled; always false.
    pub is_holiday: bool,
    pub season: Season,
}

/// The time dimension: one row per day of the inclusive range, ordered by
/// date, with a dense 1-based key.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    start: NaiveDate,
    end: NaiveDate,
    days: Vec<CalendarDay>,
}

impl Calendar {
    pub fn build(start: NaiveDate, end: NaiveDate) -> Self {
        let mut days = Vec::new();
        let mut date = start;
        let mut date_id = 1;
        while date <= end {
            days.push(CalendarDay {
                date_id,
                date,
                year: date.year(),
                quarter: (date.month0() / 3) + 1,
                month: date.month(),
                month_name: date.format("%B").to_string(),
                iso_week: date.iso_week().week(),
                day: date.day(),
                weekday_name: date.format("%A").to_string(),
                is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                is_holiday: false,
                season: Season::from_month(date.month()),
            });
            date += Duration::days(1);
            date_id += 1;
        }
        Self { start, end, days }
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Resolve a date to its dense key; `None` outside the range.
    pub fn date_id(&self, date: NaiveDate) -> Option<u32> {
        if date < self.start || date > self.end {
            return None;
        }
        Some((date - self.start).num_days() as u32 + 1)
    }

    pub fn day(&self, date_id: u32) -> Option<&CalendarDay> {
        self.days.get((date_id as usize).checked_sub(1)?)
    }

    /// Weekly snapshot days: every Sunday in range.
    pub fn snapshot_days(&self) -> Vec<&CalendarDay> {
        self.days
            .iter()
            .filter(|day| day.date.weekday() == Weekday::Sun)
            .collect()
    }
}
