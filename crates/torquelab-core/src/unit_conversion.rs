//! Unit Conversion Functions
//!
//! Provides conversion functions for the performance model and display layers:
//! - Mass: lb ↔ kg
//! - Torque: lb-ft ↔ N·m
//! - Power: hp ↔ W
//! - Speed: m/s ↔ mph, km/h ↔ mph

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * 0.453592
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / 0.453592
}

/// Convert pound-feet to newton-metres
pub fn lbft_to_nm(lbft: f64) -> f64 {
    lbft * 1.35582
}

/// Convert newton-metres to pound-feet
pub fn nm_to_lbft(nm: f64) -> f64 {
    nm / 1.35582
}

/// Convert mechanical horsepower to watts
pub fn hp_to_watts(hp: f64) -> f64 {
    hp * 745.7
}

/// Convert watts to mechanical horsepower
pub fn watts_to_hp(watts: f64) -> f64 {
    watts / 745.7
}

/// Convert metres per second to miles per hour
pub fn ms_to_mph(ms: f64) -> f64 {
    ms * 2.23694
}

/// Convert miles per hour to metres per second
pub fn mph_to_ms(mph: f64) -> f64 {
    mph / 2.23694
}

/// Convert km/h to mph
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * 0.62137119223733
}

/// Convert mph to km/h
pub fn mph_to_kmh(mph: f64) -> f64 {
    mph / 0.62137119223733
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lbs_kg_conversion() {
        assert!((lbs_to_kg(3000.0) - 1360.776).abs() < 0.01);
        assert!((kg_to_lbs(1360.776) - 3000.0).abs() < 0.01);
    }

    #[test]
    fn test_lbft_nm_conversion() {
        assert!((lbft_to_nm(500.0) - 677.91).abs() < 0.01);
        assert!((nm_to_lbft(677.91) - 500.0).abs() < 0.01);
    }

    #[test]
    fn test_hp_watts_conversion() {
        assert!((hp_to_watts(1.0) - 745.7).abs() < 0.01);
        assert!((watts_to_hp(745.7) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_ms_mph_conversion() {
        // 60 mph is the 0-60 target speed
        assert!((mph_to_ms(60.0) - 26.8224).abs() < 0.001);
        assert!((ms_to_mph(26.8224) - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_kmh_mph_conversion() {
        assert!((kmh_to_mph(100.0) - 62.14).abs() < 0.01);
        assert!((mph_to_kmh(62.14) - 100.0).abs() < 0.01);
    }
}
