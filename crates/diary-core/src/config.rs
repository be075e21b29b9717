//! Display configuration
//!
//! Static text shown around the calendar. Nothing here affects the stores.

use chrono::{Datelike, Local, Month};

/// Startup configuration for the diary window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryConfig {
    /// Heading above the calendar ("november")
    pub month_label: String,
    /// Name shown on the profile card
    pub profile_name: String,
    /// Line under the profile name
    pub tagline: String,
}

impl DiaryConfig {
    /// Defaults, with any provided override applied on top
    pub fn new(
        month_label: Option<String>,
        profile_name: Option<String>,
        tagline: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            month_label: month_label.unwrap_or(defaults.month_label),
            profile_name: profile_name.unwrap_or(defaults.profile_name),
            tagline: tagline.unwrap_or(defaults.tagline),
        }
    }

    /// Initials for the avatar fallback ("CP" for "Creative Persona")
    pub fn initials(&self) -> String {
        self.profile_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            month_label: current_month_label(),
            profile_name: "Creative Persona".to_string(),
            tagline: "living by creativity".to_string(),
        }
    }
}

/// Lowercase name of the current local month
pub fn current_month_label() -> String {
    month_label(Local::now().month())
}

fn month_label(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_lowercase())
        .unwrap_or_default()
}
