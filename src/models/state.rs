use super::entry::{AbsenceEntry, TimeEntry};
use super::list_kind::ListKind;
use serde::Serialize;

pub const STATE_VERSION: u32 = 1;

/// The five in-memory entry lists. One instance is owned by the command
/// handler for the duration of a command; all mutation goes through the
/// guard functions in `core::guard`.
#[derive(Debug, Clone, Serialize)]
pub struct State {
    pub version: u32,
    pub holidays: Vec<AbsenceEntry>,
    pub sickness: Vec<AbsenceEntry>,
    pub childcare: Vec<AbsenceEntry>,
    pub overtimes: Vec<TimeEntry>,
    pub hours: Vec<TimeEntry>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            holidays: Vec::new(),
            sickness: Vec::new(),
            childcare: Vec::new(),
            overtimes: Vec::new(),
            hours: Vec::new(),
        }
    }
}

impl State {
    pub fn absence_list(&self, kind: ListKind) -> Option<&Vec<AbsenceEntry>> {
        match kind {
            ListKind::Holidays => Some(&self.holidays),
            ListKind::Sickness => Some(&self.sickness),
            ListKind::Childcare => Some(&self.childcare),
            _ => None,
        }
    }

    pub fn absence_list_mut(&mut self, kind: ListKind) -> Option<&mut Vec<AbsenceEntry>> {
        match kind {
            ListKind::Holidays => Some(&mut self.holidays),
            ListKind::Sickness => Some(&mut self.sickness),
            ListKind::Childcare => Some(&mut self.childcare),
            _ => None,
        }
    }

    pub fn time_list(&self, kind: ListKind) -> Option<&Vec<TimeEntry>> {
        match kind {
            ListKind::Overtimes => Some(&self.overtimes),
            ListKind::Hours => Some(&self.hours),
            _ => None,
        }
    }

    pub fn time_list_mut(&mut self, kind: ListKind) -> Option<&mut Vec<TimeEntry>> {
        match kind {
            ListKind::Overtimes => Some(&mut self.overtimes),
            ListKind::Hours => Some(&mut self.hours),
            _ => None,
        }
    }

    pub fn list_len(&self, kind: ListKind) -> usize {
        match kind {
            ListKind::Holidays => self.holidays.len(),
            ListKind::Sickness => self.sickness.len(),
            ListKind::Childcare => self.childcare.len(),
            ListKind::Overtimes => self.overtimes.len(),
            ListKind::Hours => self.hours.len(),
        }
    }

    pub fn clear_list(&mut self, kind: ListKind) {
        match kind {
            ListKind::Holidays => self.holidays.clear(),
            ListKind::Sickness => self.sickness.clear(),
            ListKind::Childcare => self.childcare.clear(),
            ListKind::Overtimes => self.overtimes.clear(),
            ListKind::Hours => self.hours.clear(),
        }
    }

    /// Total holiday days already taken, in day units.
    pub fn holiday_days_taken(&self) -> f64 {
        self.holidays.iter().map(|e| e.day_value).sum()
    }
}
