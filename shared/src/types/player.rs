//! Player records as delivered by the feed, and the validated form the engine works with

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque player identifier
///
/// Feeds deliver ids as strings or integers; both are normalized to text so
/// that signatures sort the same way regardless of the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PlayerId(text),
            RawId::Signed(n) => PlayerId(n.to_string()),
            RawId::Unsigned(n) => PlayerId(n.to_string()),
        })
    }
}

/// Player row exactly as the player source supplies it
///
/// Every field may be missing; use [`PlayerRecord::validate`] to obtain a
/// [`Player`] the engine can place in a roster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "dfs_id", default, deserialize_with = "lenient::id")]
    pub id: Option<PlayerId>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(rename = "pos", default, deserialize_with = "lenient::text_or_empty")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub team: Option<String>,
    #[serde(rename = "opp", default, deserialize_with = "lenient::text")]
    pub opponent: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub salary: Option<i64>,
    #[serde(rename = "my_proj", default, deserialize_with = "lenient::float")]
    pub projection: Option<f64>,
}

/// Why a record cannot take part in a roster
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    #[error("missing player id")]
    MissingId,

    #[error("salary missing or not positive")]
    InvalidSalary,

    #[error("projection missing or negative")]
    MissingProjection,

    #[error("missing team")]
    MissingTeam,
}

impl PlayerRecord {
    /// Convert into a validated player
    pub fn validate(&self) -> Result<Player, IneligibleReason> {
        let id = match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => return Err(IneligibleReason::MissingId),
        };

        let salary = match self.salary {
            Some(s) if s > 0 => u32::try_from(s).map_err(|_| IneligibleReason::InvalidSalary)?,
            _ => return Err(IneligibleReason::InvalidSalary),
        };

        let projection = match self.projection {
            Some(p) if p.is_finite() && p >= 0.0 => p,
            _ => return Err(IneligibleReason::MissingProjection),
        };

        let team = match &self.team {
            Some(t) if !t.trim().is_empty() => t.clone(),
            _ => return Err(IneligibleReason::MissingTeam),
        };

        Ok(Player {
            id,
            name: self.name.clone(),
            position: self.position.clone(),
            team,
            opponent: self.opponent.clone().unwrap_or_default(),
            salary,
            projection,
        })
    }

    /// True when the record carries everything a roster slot needs
    pub fn is_eligible(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Validated player; the only kind of player a lineup can hold
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Player {
    #[serde(rename = "dfs_id")]
    pub id: PlayerId,
    pub name: String,
    #[serde(rename = "pos")]
    pub position: String,
    pub team: String,
    #[serde(rename = "opp")]
    pub opponent: String,
    pub salary: u32,
    #[serde(rename = "my_proj")]
    pub projection: f64,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            id: Some(player.id.clone()),
            name: player.name.clone(),
            position: player.position.clone(),
            team: Some(player.team.clone()),
            opponent: Some(player.opponent.clone()),
            salary: Some(i64::from(player.salary)),
            projection: Some(player.projection),
        }
    }
}

/// Field decoding that never fails a whole feed over one row
///
/// Numeric fields arrive as JSON numbers or as numeric strings depending on the
/// feed. A value that cannot be read becomes `None`, so the row fails
/// [`PlayerRecord::validate`] and is dropped like any other ineligible row.
mod lenient {
    use super::*;
    use crate::{process_debug, ProcessId};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Unsigned(u64),
        Float(f64),
        Text(String),
        Other(de::IgnoredAny),
    }

    fn whole(f: f64) -> Option<i64> {
        (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
    }

    fn unreadable<T>(field: &str, value: impl fmt::Display) -> Option<T> {
        process_debug!(ProcessId::current(), "Unreadable {} value {} treated as missing", field, value);
        None
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Int(n)) => Some(n),
            Some(Raw::Unsigned(n)) => i64::try_from(n).ok().or_else(|| unreadable("integer", n)),
            Some(Raw::Float(f)) => whole(f).or_else(|| unreadable("integer", f)),
            Some(Raw::Text(s)) if s.trim().is_empty() => None,
            Some(Raw::Text(s)) => {
                let text = s.trim();
                match text.parse::<i64>() {
                    Ok(n) => Some(n),
                    Err(_) => text.parse::<f64>().ok().and_then(whole).or_else(|| unreadable("integer", text)),
                }
            }
            Some(Raw::Other(_)) => unreadable("integer", "of unexpected type"),
        })
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Int(n)) => Some(n as f64),
            Some(Raw::Unsigned(n)) => Some(n as f64),
            Some(Raw::Float(f)) => Some(f),
            Some(Raw::Text(s)) if s.trim().is_empty() => None,
            Some(Raw::Text(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .or_else(|| unreadable("number", s.trim())),
            Some(Raw::Other(_)) => unreadable("number", "of unexpected type"),
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PlayerId>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Int(n)) => Some(PlayerId(n.to_string())),
            Some(Raw::Unsigned(n)) => Some(PlayerId(n.to_string())),
            Some(Raw::Text(s)) => Some(PlayerId(s)),
            Some(Raw::Float(f)) => whole(f).map(|n| PlayerId(n.to_string())).or_else(|| unreadable("id", f)),
            Some(Raw::Other(_)) => unreadable("id", "of unexpected type"),
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => None,
            Some(Raw::Text(s)) => Some(s),
            Some(Raw::Int(n)) => Some(n.to_string()),
            Some(Raw::Unsigned(n)) => Some(n.to_string()),
            Some(Raw::Float(f)) => Some(f.to_string()),
            Some(Raw::Other(_)) => unreadable("text", "of unexpected type"),
        })
    }

    pub fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(text(deserializer)?.unwrap_or_default())
    }
}
