//! Core types for Creative Diary

use serde::{Deserialize, Serialize};

use crate::error::{DiaryError, DiaryResult};

pub mod photo;
pub mod shelf;

pub use photo::PhotoRef;
pub use shelf::{ShelfContent, ShelfItem, ShelfItemId, ShelfKind};

/// Number of days shown on the calendar
pub const DAYS_IN_MONTH: usize = 30;

/// Maximum number of photos attached to one day entry
pub const MAX_DAY_PHOTOS: usize = 3;

const ROMAN_NUMERALS: [&str; DAYS_IN_MONTH] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI", "XXVII",
    "XXVIII", "XXIX", "XXX",
];

/// Zero-based index of a day in the month
///
/// Always below [`DAYS_IN_MONTH`]; the only way to build one is the checked
/// [`DayIndex::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DayIndex(u8);

impl DayIndex {
    /// Create a DayIndex, rejecting indices past the end of the month
    pub fn new(index: usize) -> DiaryResult<Self> {
        if index < DAYS_IN_MONTH {
            Ok(Self(index as u8))
        } else {
            Err(DiaryError::DayOutOfRange(index))
        }
    }

    /// All days of the month in calendar order
    pub fn all() -> impl Iterator<Item = DayIndex> {
        (0..DAYS_IN_MONTH as u8).map(DayIndex)
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }

    /// Roman numeral label ("I" for the first day)
    pub fn roman(&self) -> &'static str {
        ROMAN_NUMERALS[self.get()]
    }
}

impl TryFrom<usize> for DayIndex {
    type Error = DiaryError;

    fn try_from(index: usize) -> DiaryResult<Self> {
        Self::new(index)
    }
}

impl From<DayIndex> for usize {
    fn from(day: DayIndex) -> usize {
        day.get()
    }
}

impl std::fmt::Display for DayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {}", self.roman())
    }
}

/// Mood icon attached to a day
///
/// Derived from the day index, never chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Camera,
    Play,
    Film,
    Music,
    Cake,
    Car,
    Coffee,
    MessageCircle,
    BookOpen,
    Ear,
    Plane,
    Palette,
    Mountain,
    Sunrise,
    Image,
    Mic,
    Video,
    Eye,
    Briefcase,
    Feather,
    Map,
    Edit,
}

impl Mood {
    /// Icon cycle, in calendar order
    pub const ALL: [Mood; 22] = [
        Mood::Camera,
        Mood::Play,
        Mood::Film,
        Mood::Music,
        Mood::Cake,
        Mood::Car,
        Mood::Coffee,
        Mood::MessageCircle,
        Mood::BookOpen,
        Mood::Ear,
        Mood::Plane,
        Mood::Palette,
        Mood::Mountain,
        Mood::Sunrise,
        Mood::Image,
        Mood::Mic,
        Mood::Video,
        Mood::Eye,
        Mood::Briefcase,
        Mood::Feather,
        Mood::Map,
        Mood::Edit,
    ];

    /// Mood stamped on a day; wraps around the icon cycle
    pub fn for_day(day: DayIndex) -> Self {
        Self::ALL[day.get() % Self::ALL.len()]
    }

    /// Icon name
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Camera => "Camera",
            Mood::Play => "Play",
            Mood::Film => "Film",
            Mood::Music => "Music",
            Mood::Cake => "Cake",
            Mood::Car => "Car",
            Mood::Coffee => "Coffee",
            Mood::MessageCircle => "MessageCircle",
            Mood::BookOpen => "BookOpen",
            Mood::Ear => "Ear",
            Mood::Plane => "Plane",
            Mood::Palette => "Palette",
            Mood::Mountain => "Mountain",
            Mood::Sunrise => "Sunrise",
            Mood::Image => "Image",
            Mood::Mic => "Mic",
            Mood::Video => "Video",
            Mood::Eye => "Eye",
            Mood::Briefcase => "Briefcase",
            Mood::Feather => "Feather",
            Mood::Map => "Map",
            Mood::Edit => "Edit",
        }
    }

    /// Glyph used to draw the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Camera => "📷",
            Mood::Play => "▶",
            Mood::Film => "🎞",
            Mood::Music => "🎵",
            Mood::Cake => "🎂",
            Mood::Car => "🚗",
            Mood::Coffee => "☕",
            Mood::MessageCircle => "💬",
            Mood::BookOpen => "📖",
            Mood::Ear => "👂",
            Mood::Plane => "✈",
            Mood::Palette => "🎨",
            Mood::Mountain => "⛰",
            Mood::Sunrise => "🌅",
            Mood::Image => "🖼",
            Mood::Mic => "🎤",
            Mood::Video => "📹",
            Mood::Eye => "👁",
            Mood::Briefcase => "💼",
            Mood::Feather => "🪶",
            Mood::Map => "🗺",
            Mood::Edit => "✏",
        }
    }
}

/// A saved day entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContent {
    pub text: String,
    pub photos: Vec<PhotoRef>,
    pub mood: Mood,
}
