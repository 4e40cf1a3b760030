use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Sad,
    Stressed,
    Tired,
    Anxious,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Okay,
        Mood::Sad,
        Mood::Stressed,
        Mood::Tired,
        Mood::Anxious,
        Mood::Angry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Okay => "okay",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Anxious => "anxious",
            Mood::Angry => "angry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Okay => "Okay",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Tired => "Tired",
            Mood::Anxious => "Anxious",
            Mood::Angry => "Angry",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let tag = value.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownMood(value.to_string()))
    }
}

/// One submission. The serialized form doubles as the outbound request body
/// and as an entry of the persisted history slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    pub ts: i64,
    pub username: String,
}

impl CheckIn {
    pub fn new(mood: Mood, note: Option<&str>, ts: i64, username: impl Into<String>) -> Self {
        Self {
            mood,
            note: note.unwrap_or_default().to_string(),
            ts,
            username: username.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodForm {
    pub mood: String,
}

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}
