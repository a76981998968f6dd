use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Coarse weather condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConditionCategory {
    #[default]
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl ConditionCategory {
    pub const fn all() -> &'static [ConditionCategory] {
        &[
            Self::Clear,
            Self::PartlyCloudy,
            Self::Fog,
            Self::Rain,
            Self::Snow,
            Self::Thunderstorm,
        ]
    }

    /// Display name, also used for substring filtering.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a WMO weather code to a condition. Unknown codes are `Clear`.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn classify(weather_code: i64) -> ConditionCategory {
    match weather_code {
        0 => ConditionCategory::Clear,
        1..=3 => ConditionCategory::PartlyCloudy,
        45..=48 => ConditionCategory::Fog,
        51..=67 | 80..=82 => ConditionCategory::Rain,
        71..=77 | 85..=86 => ConditionCategory::Snow,
        95..=99 => ConditionCategory::Thunderstorm,
        _ => ConditionCategory::Clear,
    }
}

/// Presentation-level weather labels offered by the dashboard's condition picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionLabel {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl ConditionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Snowy => "snowy",
        }
    }

    pub fn includes(&self, condition: ConditionCategory) -> bool {
        use ConditionCategory::*;

        match self {
            Self::Sunny => matches!(condition, Clear),
            Self::Cloudy => matches!(condition, PartlyCloudy | Fog),
            Self::Rainy => matches!(condition, Rain | Thunderstorm),
            Self::Snowy => matches!(condition, Snow),
        }
    }
}

/// Condition part of the filter criteria.
///
/// Picker labels go through an explicit mapping onto [`ConditionCategory`];
/// any other text is matched as a case-insensitive substring of the
/// condition name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConditionFilter {
    #[default]
    All,
    Label(ConditionLabel),
    Text(String),
}

impl ConditionFilter {
    pub fn matches(&self, condition: ConditionCategory) -> bool {
        match self {
            Self::All => true,
            Self::Label(label) => label.includes(condition),
            Self::Text(text) => condition
                .as_str()
                .to_lowercase()
                .contains(&text.to_lowercase()),
        }
    }
}

impl FromStr for ConditionFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let filter = match s.to_lowercase().as_str() {
            "all" => Self::All,
            "sunny" => Self::Label(ConditionLabel::Sunny),
            "cloudy" => Self::Label(ConditionLabel::Cloudy),
            "rainy" => Self::Label(ConditionLabel::Rainy),
            "snowy" => Self::Label(ConditionLabel::Snowy),
            _ => Self::Text(s.to_string()),
        };
        Ok(filter)
    }
}

impl fmt::Display for ConditionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Label(label) => f.write_str(label.as_str()),
            Self::Text(text) => f.write_str(text),
        }
    }
}
