use chrono::NaiveDate;
use serde::Serialize;

pub const FULL_DAY_LABEL: &str = "Full day";
pub const HALF_DAY_LABEL: &str = "Half day";

/// Derives the display label for a day value: 1 is a full day,
/// anything else counts as a half day.
pub fn day_type_label(day_value: f64) -> &'static str {
    if day_value == 1.0 {
        FULL_DAY_LABEL
    } else {
        HALF_DAY_LABEL
    }
}

/// One absence day (holidays, sickness or childcare).
/// The extra text fields carry list-specific details: `cert` and `contact`
/// are used by sickness, `child` and `reason` by childcare.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceEntry {
    pub id: u32,
    pub date: NaiveDate, // serialized "YYYY-MM-DD"
    pub day_value: f64,  // 1.0 or 0.5
    pub day_type: String,
    pub note: String,
    pub cert: String,
    pub contact: String,
    pub child: String,
    pub reason: String,
}

impl AbsenceEntry {
    /// Constructor for entries created from the CLI.
    /// `id` is left at 0; the mutation guard assigns the real one.
    pub fn new(date: NaiveDate, day_value: f64) -> Self {
        Self {
            id: 0,
            date,
            day_value,
            day_type: day_type_label(day_value).to_string(),
            note: String::new(),
            cert: String::new(),
            contact: String::new(),
            child: String::new(),
            reason: String::new(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One timed entry (overtime or regular hours).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: u32,
    pub date: NaiveDate,
    pub minutes: i64,
    pub multiplier: f64, // >= 1, meaningful only for overtime
    pub note: String,
}

impl TimeEntry {
    pub fn new(date: NaiveDate, minutes: i64, multiplier: f64) -> Self {
        Self {
            id: 0,
            date,
            minutes,
            multiplier,
            note: String::new(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Multiplier with the `< 1` guard applied.
    pub fn effective_multiplier(&self) -> f64 {
        if self.multiplier >= 1.0 {
            self.multiplier
        } else {
            1.0
        }
    }
}

/// Common view over both entry kinds, used by the mutation guard and the
/// id allocator so the single-add and range-add paths share one code path.
pub trait Dated {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
    fn date(&self) -> NaiveDate;
}

impl Dated for AbsenceEntry {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for TimeEntry {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
    fn date(&self) -> NaiveDate {
        self.date
    }
}
