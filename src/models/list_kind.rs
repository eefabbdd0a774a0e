use std::fmt;

/// The five tracked lists. Holidays, sickness and childcare hold absence
/// entries; overtimes and hours hold timed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Holidays,
    Sickness,
    Childcare,
    Overtimes,
    Hours,
}

impl ListKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "holidays" | "holiday" | "h" => Some(ListKind::Holidays),
            "sickness" | "sick" | "s" => Some(ListKind::Sickness),
            "childcare" | "child" | "c" => Some(ListKind::Childcare),
            "overtimes" | "overtime" | "ot" => Some(ListKind::Overtimes),
            "hours" | "hr" => Some(ListKind::Hours),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Holidays => "holidays",
            ListKind::Sickness => "sickness",
            ListKind::Childcare => "childcare",
            ListKind::Overtimes => "overtimes",
            ListKind::Hours => "hours",
        }
    }

    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            ListKind::Holidays | ListKind::Sickness | ListKind::Childcare
        )
    }

    pub fn all() -> [ListKind; 5] {
        [
            ListKind::Holidays,
            ListKind::Sickness,
            ListKind::Childcare,
            ListKind::Overtimes,
            ListKind::Hours,
        ]
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
