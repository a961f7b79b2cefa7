// Date utility functions

use chrono::{DateTime, Local, NaiveDate};

pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    date.and_hms_opt(0, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

pub fn end_of_day(date: NaiveDate) -> DateTime<Local> {
    date.and_hms_opt(23, 59, 59)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}
