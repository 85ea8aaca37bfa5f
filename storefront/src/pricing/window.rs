//! Time Window Classification
//!
//! Maps a wall-clock hour to the time-of-day window pricing rules target.

use chrono::{Local, Timelike};
use shared::models::TimeWindow;

/// Map an hour of the day to its window
///
/// Lower bounds are inclusive: 6 is morning, 12 afternoon, 18 evening,
/// 22 night. Anything outside the three daytime ranges is night.
pub fn time_window_for_hour(hour: u32) -> TimeWindow {
    TimeWindow::from_hour(hour)
}

/// Classify an instant by its hour of day
///
/// Works with anything carrying a wall-clock hour: `NaiveTime`,
/// `NaiveDateTime`, `DateTime<Local>`, ...
pub fn classify_time_window<T: Timelike>(instant: &T) -> TimeWindow {
    time_window_for_hour(instant.hour())
}

/// Window of the current local time
pub fn current_time_window() -> TimeWindow {
    classify_time_window(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_every_hour_maps_to_its_window() {
        for hour in 0..24 {
            let expected = match hour {
                6..=11 => TimeWindow::Morning,
                12..=17 => TimeWindow::Afternoon,
                18..=21 => TimeWindow::Evening,
                _ => TimeWindow::Night,
            };
            assert_eq!(time_window_for_hour(hour), expected, "hour {}", hour);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(time_window_for_hour(5), TimeWindow::Night);
        assert_eq!(time_window_for_hour(6), TimeWindow::Morning);
        assert_eq!(time_window_for_hour(11), TimeWindow::Morning);
        assert_eq!(time_window_for_hour(12), TimeWindow::Afternoon);
        assert_eq!(time_window_for_hour(18), TimeWindow::Evening);
        assert_eq!(time_window_for_hour(21), TimeWindow::Evening);
        assert_eq!(time_window_for_hour(22), TimeWindow::Night);
        assert_eq!(time_window_for_hour(23), TimeWindow::Night);
        assert_eq!(time_window_for_hour(0), TimeWindow::Night);
    }

    #[test]
    fn test_classify_uses_hour_only() {
        let just_before_noon = NaiveTime::from_hms_opt(11, 59, 59).unwrap();
        assert_eq!(classify_time_window(&just_before_noon), TimeWindow::Morning);

        let noon = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(classify_time_window(&noon), TimeWindow::Afternoon);
    }

    #[test]
    fn test_out_of_range_hour_is_night() {
        assert_eq!(time_window_for_hour(24), TimeWindow::Night);
    }
}
