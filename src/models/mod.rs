pub mod entry;
pub mod list_kind;
pub mod settings;
pub mod state;

pub use entry::{AbsenceEntry, Dated, TimeEntry};
pub use list_kind::ListKind;
pub use settings::{Currency, Settings};
pub use state::State;
