pub mod attendance;
pub mod patch;
pub mod report;
pub mod shift;
pub mod user;

pub use attendance::Attendance;
pub use patch::Patch;
pub use report::{ShiftDetail, UserTotals, WeekSchedule, WeeklyReport};
pub use shift::{NewShift, RosterEntry, Shift};
pub use user::User;
