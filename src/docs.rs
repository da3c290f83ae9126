use crate::api::attendance::{ApprovePayload, ClockPayload, EnsurePayload};
use crate::api::shift::{ScheduleShift, ScheduleWeek};
use crate::api::user::CreateUser;
use crate::model::{
    Attendance, RosterEntry, Shift, ShiftDetail, User, UserTotals, WeekSchedule, WeeklyReport,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = r#"
## Staff Scheduling & Attendance

Administrators schedule shifts (single or a whole week at once), staff clock
in and out against their shifts, and weekly reports aggregate scheduled vs.
worked hours per user.

- **Shifts** — idempotent scheduling keyed on (user, date, start, end)
- **Attendance** — one record per shift/user; clock-in, clock-out, approval
- **Roster** — cross-user shift listing over a date range
- **Reports** — 7-day scheduled/worked totals plus per-shift detail

Authentication sits in front of this service; approve/unapprove and
scheduling calls are expected to arrive pre-authorized.
"#,
    ),
    paths(
        crate::api::user::create_user,
        crate::api::user::get_user,

        crate::api::shift::schedule_shift,
        crate::api::shift::schedule_week,
        crate::api::shift::get_roster,

        crate::api::attendance::clock_in,
        crate::api::attendance::clock_out,
        crate::api::attendance::ensure_record,
        crate::api::attendance::list_records,
        crate::api::attendance::get_record,
        crate::api::attendance::approve,
        crate::api::attendance::unapprove,

        crate::api::report::weekly,
    ),
    components(
        schemas(
            CreateUser,
            User,
            ScheduleShift,
            ScheduleWeek,
            Shift,
            RosterEntry,
            WeekSchedule,
            ClockPayload,
            EnsurePayload,
            ApprovePayload,
            Attendance,
            WeeklyReport,
            UserTotals,
            ShiftDetail
        )
    ),
    tags(
        (name = "Users", description = "Staff identity APIs"),
        (name = "Shifts", description = "Shift scheduling and roster APIs"),
        (name = "Attendance", description = "Clock-in/out and approval APIs"),
        (name = "Reports", description = "Weekly aggregation APIs"),
    )
)]
pub struct ApiDoc;
