use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodeParseError {
    #[error("chapter code must be three dash-separated numbers, got {provided:?}")]
    Malformed { provided: String },

    #[error("chapter code components are 1-based and must be non-zero")]
    ZeroComponent,
}

//
// ─── CHAPTER CODE ──────────────────────────────────────────────────────────────
//

/// Stable identifier for a chapter in the exam catalog.
///
/// Renders as `"<level>-<subject>-<chapter>"` (for example `"1-9-19"`),
/// which is the key format the backend expects in `weightage` maps.
/// All three components are 1-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterCode {
    level: u8,
    subject: u8,
    chapter: u8,
}

impl ChapterCode {
    /// Creates a code from its three components.
    ///
    /// # Errors
    ///
    /// Returns `CodeParseError::ZeroComponent` if any component is 0.
    pub fn new(level: u8, subject: u8, chapter: u8) -> Result<Self, CodeParseError> {
        if level == 0 || subject == 0 || chapter == 0 {
            return Err(CodeParseError::ZeroComponent);
        }
        Ok(Self {
            level,
            subject,
            chapter,
        })
    }

    // Callers must pass non-zero components.
    pub(crate) const fn from_parts(level: u8, subject: u8, chapter: u8) -> Self {
        Self {
            level,
            subject,
            chapter,
        }
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn subject(&self) -> u8 {
        self.subject
    }

    #[must_use]
    pub fn chapter(&self) -> u8 {
        self.chapter
    }
}

impl fmt::Debug for ChapterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChapterCode({self})")
    }
}

impl fmt::Display for ChapterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.level, self.subject, self.chapter)
    }
}

impl FromStr for ChapterCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CodeParseError::Malformed {
            provided: s.to_owned(),
        };

        let mut parts = s.split('-');
        let level = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(malformed)?;
        let subject = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(malformed)?;
        let chapter = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Self::new(level, subject, chapter)
    }
}

// Serialized as the string form so codes can key JSON objects.

impl Serialize for ChapterCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChapterCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
