use crate::WeatherResult;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Anything that can answer "what is the weather at this location right now".
///
/// Implementations never fail: every problem is folded into a
/// [`WeatherResult::Failure`] the caller can show as-is.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// `location` is the user's input; normalization is the provider's job.
    async fn get_weather(&self, location: &str) -> WeatherResult;
}

/// `(F - 32) * 5 / 9`, rounded for display.
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    round1((f - 32.0) * 5.0 / 9.0)
}

/// Round to one decimal place.
///
/// Goes through the formatter so the exact binary value is rounded, ties to
/// even: 4.35 (stored as 4.3499...) becomes 4.3 and 0.25 becomes 0.2.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Capitalize the first letter of every word, lowercase the rest.
/// A word starts after any non-alphabetic character ("light rain" -> "Light Rain").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}
