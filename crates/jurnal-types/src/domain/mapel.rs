use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reference::{Entity, EntityKind, Labeled, first_non_empty};

/// Subject (mata pelajaran).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapel {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub kode_mapel: Option<String>,
    #[serde(default)]
    pub nama_mapel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Mapel {
    const KIND: EntityKind = EntityKind::Mapel;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Labeled for Mapel {
    fn display_label(&self) -> Option<&str> {
        first_non_empty(&[self.nama_mapel.as_deref()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapelDraft {
    pub kode_mapel: String,
    pub nama_mapel: String,
    #[serde(default)]
    pub description: String,
}

impl From<&Mapel> for MapelDraft {
    fn from(mapel: &Mapel) -> Self {
        Self {
            kode_mapel: mapel.kode_mapel.clone().unwrap_or_default(),
            nama_mapel: mapel.nama_mapel.clone().unwrap_or_default(),
            description: mapel.description.clone().unwrap_or_default(),
        }
    }
}
