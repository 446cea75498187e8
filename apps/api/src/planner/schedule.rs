//! Weekly schedule model and the random day/template selection.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Day of the week. Ordering follows the calendar week starting on Monday,
/// which is also the iteration order of `WeeklySchedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid day '{}'. Expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun.",
            self.0
        )
    }
}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Exact three-letter codes only ("Mon", not "mon" or "Monday").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// Built-in messages assigned to freshly generated schedules.
pub const POST_TEMPLATES: [&str; 10] = [
    "Tip of the week: Engage with your audience through stories.",
    "Quote of the day: 'Success is no accident.'",
    "User spotlight: Check out this amazing post by @user!",
    "Enjoy 20% off all items this weekend!",
    "Quick Fix: Use hashtags smartly to boost visibility.",
    "Trending Now: Explore what's hot in your niche.",
    "Behind the Scenes: A look at our team's workflow.",
    "Giveaway: Participate to win exciting prizes!",
    "Announcement: New product launch this Thursday!",
    "Poll: What type of content do you want next?",
];

/// Day → message mapping. Each weekday appears at most once and iteration is
/// always Mon → Sun regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<Weekday, String>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday) -> Option<&str> {
        self.0.get(&day).map(String::as_str)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains_key(&day)
    }

    pub fn insert(&mut self, day: Weekday, message: impl Into<String>) -> Option<String> {
        self.0.insert(day, message.into())
    }

    pub fn remove(&mut self, day: Weekday) -> Option<String> {
        self.0.remove(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &str)> + '_ {
        self.0.iter().map(|(d, m)| (*d, m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Weekday, String)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (Weekday, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Keeps only valid weekday codes, deduplicated, in Mon → Sun order.
pub fn normalize_days<S: AsRef<str>>(preferred_days: &[S]) -> Vec<Weekday> {
    Weekday::ALL
        .into_iter()
        .filter(|day| preferred_days.iter().any(|p| p.as_ref() == day.code()))
        .collect()
}

/// Not enough preferred days to place `frequency` posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyTooHigh {
    pub frequency: usize,
    pub available: usize,
}

/// Picks `frequency` distinct days from `days` and, independently, `frequency`
/// distinct templates, then pairs them positionally. Both draws are without
/// replacement.
///
/// `frequency` is also bounded by the template pool size.
pub fn select_schedule<R: Rng + ?Sized>(
    rng: &mut R,
    frequency: usize,
    days: &[Weekday],
) -> Result<WeeklySchedule, FrequencyTooHigh> {
    let available = days.len().min(POST_TEMPLATES.len());
    if frequency > available {
        return Err(FrequencyTooHigh {
            frequency,
            available,
        });
    }

    let chosen_days = index::sample(rng, days.len(), frequency);
    let chosen_templates = index::sample(rng, POST_TEMPLATES.len(), frequency);

    Ok(chosen_days
        .iter()
        .zip(chosen_templates.iter())
        .map(|(d, t)| (days[d], POST_TEMPLATES[t].to_string()))
        .collect())
}
