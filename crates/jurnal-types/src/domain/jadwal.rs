use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Kelas, Mapel, User};
use crate::error::Error;
use crate::reference::{Entity, EntityKind, Ref};

/// School day. Declaration order is the calendar order used for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hari {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
}

impl Hari {
    pub const ALL: [Hari; 6] = [
        Hari::Senin,
        Hari::Selasa,
        Hari::Rabu,
        Hari::Kamis,
        Hari::Jumat,
        Hari::Sabtu,
    ];

    /// Position in the school week, starting at 0 for Monday.
    pub fn rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|h| h == self)
            .unwrap_or(Self::ALL.len())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hari::Senin => "senin",
            Hari::Selasa => "selasa",
            Hari::Rabu => "rabu",
            Hari::Kamis => "kamis",
            Hari::Jumat => "jumat",
            Hari::Sabtu => "sabtu",
        }
    }

    /// School day for a calendar weekday; Sunday has none.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Hari::Senin),
            Weekday::Tue => Some(Hari::Selasa),
            Weekday::Wed => Some(Hari::Rabu),
            Weekday::Thu => Some(Hari::Kamis),
            Weekday::Fri => Some(Hari::Jumat),
            Weekday::Sat => Some(Hari::Sabtu),
            Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Hari {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.as_str();
        let mut chars = s.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Hari {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|h| h.as_str() == needle)
            .ok_or_else(|| Error::InvalidValue {
                kind: "day",
                value: s.to_string(),
            })
    }
}

/// One timetable slot: a class, a day, a period and optionally a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jadwal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub kelas: Option<Ref<Kelas>>,
    pub hari: Hari,
    pub jam_ke: u32,
    #[serde(default)]
    pub mapel: Option<Ref<Mapel>>,
    #[serde(default)]
    pub created_by: Option<Ref<User>>,
    #[serde(default)]
    pub updated_by: Option<Ref<User>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Jadwal {
    const KIND: EntityKind = EntityKind::Jadwal;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JadwalDraft {
    pub kelas: String,
    pub hari: Hari,
    pub jam_ke: u32,
    /// `null` on the wire when no subject is assigned.
    #[serde(default)]
    pub mapel: Option<String>,
}

impl From<&Jadwal> for JadwalDraft {
    fn from(jadwal: &Jadwal) -> Self {
        Self {
            kelas: jadwal
                .kelas
                .as_ref()
                .map(|k| k.id().to_string())
                .unwrap_or_default(),
            hari: jadwal.hari,
            jam_ke: jadwal.jam_ke,
            mapel: jadwal.mapel.as_ref().map(|m| m.id().to_string()),
        }
    }
}
