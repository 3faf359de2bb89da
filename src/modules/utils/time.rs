use chrono::Local;

/// Current local time formatted for display and logs
pub fn current_time_string() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
