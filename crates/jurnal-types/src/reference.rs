use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of records served by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Kelas,
    Mapel,
    Siswa,
    Jadwal,
    Jurnal,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::User,
        EntityKind::Kelas,
        EntityKind::Mapel,
        EntityKind::Siswa,
        EntityKind::Jadwal,
        EntityKind::Jurnal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Kelas => "kelas",
            EntityKind::Mapel => "mapel",
            EntityKind::Siswa => "siswa",
            EntityKind::Jadwal => "jadwal",
            EntityKind::Jurnal => "jurnal",
        }
    }

    /// Heading used for one record in detail projections ("Jurnal 3").
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Kelas => "Kelas",
            EntityKind::Mapel => "Mapel",
            EntityKind::Siswa => "Siswa",
            EntityKind::Jadwal => "Jadwal",
            EntityKind::Jurnal => "Jurnal",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record with a gateway-assigned identifier.
pub trait Entity {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// A record that can stand in for itself as a human-readable label.
pub trait Labeled: Entity {
    /// First non-empty value of the entity's display-field chain, if any.
    fn display_label(&self) -> Option<&str>;
}

/// Returns the first candidate that is present and non-empty.
pub fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.trim().is_empty())
}

/// Reference field as transmitted by the gateway: a bare identifier, or the
/// referenced record expanded in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Expanded(T),
}

impl<T: Entity> Ref<T> {
    pub fn bare(id: impl Into<String>) -> Self {
        Ref::Id(id.into())
    }

    /// Identifier of the referenced record regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Expanded(entity) => entity.id(),
        }
    }

    pub fn as_expanded(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Expanded(entity) => Some(entity),
        }
    }
}

impl<T> From<T> for Ref<T>
where
    T: Entity,
{
    fn from(entity: T) -> Self {
        Ref::Expanded(entity)
    }
}
