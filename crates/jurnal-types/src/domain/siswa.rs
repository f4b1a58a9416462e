use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Kelas;
use crate::error::Error;
use crate::reference::{Entity, EntityKind, Labeled, Ref, first_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "laki-laki")]
    LakiLaki,
    #[serde(rename = "perempuan")]
    Perempuan,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::LakiLaki => write!(f, "Laki-laki"),
            Gender::Perempuan => write!(f, "Perempuan"),
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "laki-laki" | "l" => Ok(Gender::LakiLaki),
            "perempuan" | "p" => Ok(Gender::Perempuan),
            _ => Err(Error::InvalidValue {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// Enrolled student.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Siswa {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub nis: Option<String>,
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub kelas: Option<Ref<Kelas>>,
    #[serde(default)]
    pub jenis_kelamin: Option<Gender>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Siswa {
    const KIND: EntityKind = EntityKind::Siswa;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Labeled for Siswa {
    fn display_label(&self) -> Option<&str> {
        first_non_empty(&[self.nama.as_deref()])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiswaDraft {
    pub nis: String,
    pub nama: String,
    pub kelas: String,
    pub jenis_kelamin: Gender,
}

impl From<&Siswa> for SiswaDraft {
    fn from(siswa: &Siswa) -> Self {
        Self {
            nis: siswa.nis.clone().unwrap_or_default(),
            nama: siswa.nama.clone().unwrap_or_default(),
            kelas: siswa
                .kelas
                .as_ref()
                .map(|k| k.id().to_string())
                .unwrap_or_default(),
            jenis_kelamin: siswa.jenis_kelamin.unwrap_or(Gender::LakiLaki),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_wire_names() {
        let siswa: Siswa =
            serde_json::from_str(r#"{"_id":"s1","nama":"Ani","jenisKelamin":"perempuan","kelas":"c1"}"#)
                .unwrap();
        assert_eq!(siswa.jenis_kelamin, Some(Gender::Perempuan));
        assert_eq!(siswa.kelas.as_ref().map(|k| k.id()), Some("c1"));
    }

    #[test]
    fn test_gender_from_str_rejects_unknown() {
        assert!("x".parse::<Gender>().is_err());
        assert_eq!("Laki-Laki".parse::<Gender>().unwrap(), Gender::LakiLaki);
    }
}
