use chrono::NaiveDateTime;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use super::report::round2;

/// Clock-in/clock-out record, exactly one per (shift, user) pair. Created as an
/// empty shell when the shift is scheduled; time_in and time_out are each set
/// at most once.
#[derive(Debug, Clone, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "shift_id": 1,
    "user_id": 1,
    "time_in": "2024-01-01T09:05:00",
    "time_out": "2024-01-01T13:05:00",
    "approved": false,
    "hours_worked": 4.0
}))]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub shift_id: u64,

    #[schema(example = 1)]
    pub user_id: u64,

    #[schema(example = "2024-01-01T09:05:00", value_type = String, format = "date-time", nullable = true)]
    pub time_in: Option<NaiveDateTime>,

    #[schema(example = "2024-01-01T13:05:00", value_type = String, format = "date-time", nullable = true)]
    pub time_out: Option<NaiveDateTime>,

    #[schema(example = false)]
    pub approved: bool,
}

impl Attendance {
    /// Hours actually worked; zero until both timestamps are present, clamped
    /// at zero if they are out of order.
    pub fn hours_worked(&self) -> f64 {
        match (self.time_in, self.time_out) {
            (Some(t_in), Some(t_out)) => {
                ((t_out - t_in).num_seconds() as f64 / 3600.0).max(0.0)
            }
            _ => 0.0,
        }
    }
}

// Hand-rolled so every attendance payload carries its derived hours_worked,
// rounded to two decimals.
impl Serialize for Attendance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Attendance", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("shift_id", &self.shift_id)?;
        state.serialize_field("user_id", &self.user_id)?;
        state.serialize_field("time_in", &self.time_in)?;
        state.serialize_field("time_out", &self.time_out)?;
        state.serialize_field("approved", &self.approved)?;
        state.serialize_field("hours_worked", &round2(self.hours_worked()))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(time_in: Option<&str>, time_out: Option<&str>) -> Attendance {
        let parse = |s: &str| {
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_time(chrono::NaiveTime::parse_from_str(s, "%H:%M").unwrap())
        };
        Attendance {
            id: 1,
            shift_id: 1,
            user_id: 1,
            time_in: time_in.map(parse),
            time_out: time_out.map(parse),
            approved: false,
        }
    }

    #[test]
    fn zero_until_both_set() {
        assert_eq!(record(None, None).hours_worked(), 0.0);
        assert_eq!(record(Some("09:00"), None).hours_worked(), 0.0);
    }

    #[test]
    fn hours_between_in_and_out() {
        assert_eq!(record(Some("09:05"), Some("13:05")).hours_worked(), 4.0);
    }

    #[test]
    fn out_before_in_clamps_to_zero() {
        assert_eq!(record(Some("13:00"), Some("09:00")).hours_worked(), 0.0);
    }

    #[test]
    fn json_carries_rounded_hours_worked() {
        let json = serde_json::to_value(record(Some("09:00"), Some("09:20"))).unwrap();
        assert_eq!(json["hours_worked"], serde_json::json!(0.33));

        let empty = serde_json::to_value(record(None, None)).unwrap();
        assert_eq!(empty["hours_worked"], serde_json::json!(0.0));
        assert_eq!(empty["time_in"], serde_json::Value::Null);
    }
}
