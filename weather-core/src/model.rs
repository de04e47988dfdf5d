use serde::{Serialize, Serializer};

/// Shown when the search form is submitted without a location.
pub const EMPTY_LOCATION_ERROR: &str = "Please enter a location.";
pub const EMPTY_LOCATION_SUGGESTION: &str =
    "Type a city name (e.g., 'Portland, OR') or zip code (e.g., '97201')";

pub const NOT_FOUND_SUGGESTION: &str = "Try a different city name or zip code.";
pub const UNAVAILABLE_ERROR: &str = "Unable to fetch weather data. Please try again.";
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Current conditions for one location, already converted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub city: String,
    pub country: String,
    pub temp_f: f64,
    pub temp_c: f64,
    pub feels_like_f: f64,
    pub feels_like_c: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub pressure: u32,
    pub response_time_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl WeatherFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_location() -> Self {
        Self::new(EMPTY_LOCATION_ERROR).with_suggestion(EMPTY_LOCATION_SUGGESTION)
    }

    pub fn not_found(location: &str) -> Self {
        Self::new(format!("Location \"{location}\" not found."))
            .with_suggestion(NOT_FOUND_SUGGESTION)
    }
}

/// Outcome of a single lookup, handed back to the browser as JSON.
///
/// Serializes flat, with a `success` flag next to the variant's fields:
///
/// ```json
/// {"success": false, "error": "Please enter a location.", "suggestion": "..."}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherResult {
    Success(WeatherReport),
    Failure(WeatherFailure),
}

impl WeatherResult {
    pub fn is_success(&self) -> bool {
        matches!(self, WeatherResult::Success(_))
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            WeatherResult::Success(report) => Some(report),
            WeatherResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&WeatherFailure> {
        match self {
            WeatherResult::Success(_) => None,
            WeatherResult::Failure(failure) => Some(failure),
        }
    }
}

impl From<WeatherReport> for WeatherResult {
    fn from(report: WeatherReport) -> Self {
        WeatherResult::Success(report)
    }
}

impl From<WeatherFailure> for WeatherResult {
    fn from(failure: WeatherFailure) -> Self {
        WeatherResult::Failure(failure)
    }
}

#[derive(Serialize)]
struct Flagged<'a, T> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

impl Serialize for WeatherResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WeatherResult::Success(body) => Flagged {
                success: true,
                body,
            }
            .serialize(serializer),
            WeatherResult::Failure(body) => Flagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> WeatherReport {
        WeatherReport {
            city: "Portland".into(),
            country: "US".into(),
            temp_f: 68.0,
            temp_c: 20.0,
            feels_like_f: 66.2,
            feels_like_c: 19.0,
            humidity: 55,
            description: "Scattered Clouds".into(),
            icon: "03d".into(),
            wind_speed: 4.6,
            pressure: 1016,
            response_time_ms: 120,
        }
    }

    #[test]
    fn success_serializes_flat_with_flag() {
        let value = serde_json::to_value(WeatherResult::from(sample_report())).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "city": "Portland",
                "country": "US",
                "temp_f": 68.0,
                "temp_c": 20.0,
                "feels_like_f": 66.2,
                "feels_like_c": 19.0,
                "humidity": 55,
                "description": "Scattered Clouds",
                "icon": "03d",
                "wind_speed": 4.6,
                "pressure": 1016,
                "response_time_ms": 120,
            })
        );
    }

    #[test]
    fn failure_without_suggestion_omits_field() {
        let value =
            serde_json::to_value(WeatherResult::from(WeatherFailure::new(GENERIC_ERROR))).unwrap();

        assert_eq!(value, json!({ "success": false, "error": GENERIC_ERROR }));
    }

    #[test]
    fn empty_location_carries_suggestion() {
        let value = serde_json::to_value(WeatherResult::from(WeatherFailure::empty_location()))
            .unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!(EMPTY_LOCATION_ERROR));
        assert_eq!(value["suggestion"], json!(EMPTY_LOCATION_SUGGESTION));
    }

    #[test]
    fn not_found_names_the_location() {
        let failure = WeatherFailure::not_found("Atlantis, ZZ");

        assert_eq!(failure.error, "Location \"Atlantis, ZZ\" not found.");
        assert_eq!(failure.suggestion.as_deref(), Some(NOT_FOUND_SUGGESTION));
    }
}
