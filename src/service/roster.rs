use chrono::NaiveDate;

use crate::error::ServiceResult;
use crate::model::RosterEntry;
use crate::store::Store;

/// All shifts with work_date in [start_date, end_date], each carrying its
/// owner's username, ordered by date then start time. Unbounded by design;
/// result sets stay small at this system's scale.
pub async fn get_roster(
    store: &impl Store,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> ServiceResult<Vec<RosterEntry>> {
    Ok(store.roster_in_range(start_date, end_date).await?)
}
