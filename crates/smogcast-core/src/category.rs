//! AQI severity bands.

/// Severity band for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Inclusive upper bounds, checked in ascending order.
const BREAKPOINTS: [(f64, AqiCategory); 5] = [
    (50.0, AqiCategory::Good),
    (100.0, AqiCategory::Moderate),
    (150.0, AqiCategory::UnhealthyForSensitiveGroups),
    (200.0, AqiCategory::Unhealthy),
    (300.0, AqiCategory::VeryUnhealthy),
];

impl AqiCategory {
    /// Maps a raw AQI to its band. The first bound the value does not exceed wins.
    pub fn from_aqi(aqi: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map(|(_, category)| *category)
            .unwrap_or(AqiCategory::Hazardous)
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Hex display color.
    pub fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "#00E400",
            AqiCategory::Moderate => "#FFFF00",
            AqiCategory::UnhealthyForSensitiveGroups => "#FF7E00",
            AqiCategory::Unhealthy => "#FF0000",
            AqiCategory::VeryUnhealthy => "#8F3F97",
            AqiCategory::Hazardous => "#7E0023",
        }
    }
}

/// Rounds an AQI to two decimal places for display.
///
/// Ties go to even on the exact binary value, so `45.125` becomes `45.12`
/// while `123.456` (stored just above the half) becomes `123.46`.
pub fn round_aqi(aqi: f64) -> f64 {
    if !aqi.is_finite() {
        return aqi;
    }
    format!("{aqi:.2}").parse().unwrap_or(aqi)
}
