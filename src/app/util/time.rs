use chrono::Utc;

pub fn current_time_in_secs() -> i64 {
    Utc::now().timestamp()
}
