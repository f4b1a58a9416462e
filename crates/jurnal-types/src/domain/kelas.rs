use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Siswa;
use crate::reference::{Entity, EntityKind, Labeled, Ref, first_non_empty};

/// School class (rombongan belajar).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kelas {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nama_kelas: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Roster; ids on list endpoints, expanded on the class detail endpoint.
    #[serde(default)]
    pub siswa: Vec<Ref<Siswa>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Kelas {
    const KIND: EntityKind = EntityKind::Kelas;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Labeled for Kelas {
    fn display_label(&self) -> Option<&str> {
        first_non_empty(&[self.nama_kelas.as_deref()])
    }
}

impl Kelas {
    pub fn has_student(&self, siswa_id: &str) -> bool {
        self.siswa.iter().any(|s| s.id() == siswa_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KelasDraft {
    pub nama_kelas: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub siswa: Vec<String>,
}

impl From<&Kelas> for KelasDraft {
    fn from(kelas: &Kelas) -> Self {
        Self {
            nama_kelas: kelas.nama_kelas.clone().unwrap_or_default(),
            description: kelas.description.clone().unwrap_or_default(),
            siswa: kelas.siswa.iter().map(|s| s.id().to_string()).collect(),
        }
    }
}
