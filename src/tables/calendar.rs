//! Calendar tables: monsoon rain days, festival months, extreme-weather days.
//!
//! Months are 0-indexed (January = 0), matching `chrono::Datelike::month0`.

/// Average rain days for each monsoon month (June–October).
pub const MONSOON_RAIN_DAYS: [(u32, f64); 5] = [(5, 14.0), (6, 21.0), (7, 19.0), (8, 13.0), (9, 6.0)];

/// September–November: Ganesh Chaturthi, Navratri/Dussehra, Diwali.
pub const FESTIVAL_MONTHS: [u32; 3] = [8, 9, 10];

/// Expected extreme-weather days per month (heat waves, cyclonic storms, cloudbursts).
pub const EXTREME_WEATHER_DAYS: [f64; 12] = [0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0, 3.0, 2.0, 1.0, 0.0, 0.0];

pub fn is_monsoon_month(month0: u32) -> bool {
    MONSOON_RAIN_DAYS.iter().any(|(m, _)| *m == month0)
}

pub fn is_festival_month(month0: u32) -> bool {
    FESTIVAL_MONTHS.contains(&month0)
}

/// Average rain days for the month, or 0 outside the monsoon.
pub fn rain_days(month0: u32) -> f64 {
    MONSOON_RAIN_DAYS
        .iter()
        .find(|(m, _)| *m == month0)
        .map(|(_, days)| *days)
        .unwrap_or(0.0)
}

pub fn expected_extreme_weather_days(month0: u32) -> f64 {
    EXTREME_WEATHER_DAYS.get(month0 as usize).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monsoon_covers_june_through_october() {
        let months: Vec<u32> = (0..12).filter(|m| is_monsoon_month(*m)).collect();
        assert_eq!(months, vec![5, 6, 7, 8, 9]);
        assert_eq!(rain_days(0), 0.0);
        assert_eq!(rain_days(6), 21.0);
    }

    #[test]
    fn festival_months_are_autumn() {
        assert!(is_festival_month(9));
        assert!(!is_festival_month(0));
    }
}
