use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Kelas, Mapel};
use crate::error::Error;
use crate::reference::{Entity, EntityKind, Labeled, Ref, first_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guru,
    #[serde(other)]
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Guru => write!(f, "guru"),
            Role::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "guru" => Ok(Role::Guru),
            _ => Err(Error::InvalidValue {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

/// Staff account (administrator or teacher).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub nama_lengkap: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nip: Option<String>,
    #[serde(default)]
    pub alamat: Option<String>,
    #[serde(default)]
    pub mata_pelajaran: Vec<Ref<Mapel>>,
    #[serde(default)]
    pub kelas_yang_diampu: Vec<Ref<Kelas>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Labeled for User {
    fn display_label(&self) -> Option<&str> {
        first_non_empty(&[
            self.nama_lengkap.as_deref(),
            self.name.as_deref(),
            self.username.as_deref(),
            self.email.as_deref(),
        ])
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Request body for creating or updating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub nama_lengkap: String,
    pub role: Role,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alamat: Option<String>,
    #[serde(default)]
    pub mata_pelajaran: Vec<String>,
    #[serde(default)]
    pub kelas_yang_diampu: Vec<String>,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone().unwrap_or_default(),
            password: None,
            nama_lengkap: user.nama_lengkap.clone().unwrap_or_default(),
            role: user.role.unwrap_or(Role::Guru),
            email: user.email.clone().unwrap_or_default(),
            nip: user.nip.clone(),
            alamat: user.alamat.clone(),
            mata_pelajaran: user.mata_pelajaran.iter().map(|r| r.id().to_string()).collect(),
            kelas_yang_diampu: user
                .kelas_yang_diampu
                .iter()
                .map(|r| r.id().to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_chain_prefers_full_name() {
        let user = User {
            id: "u1".into(),
            username: Some("budi".into()),
            nama_lengkap: Some("Budi Santoso".into()),
            ..Default::default()
        };
        assert_eq!(user.display_label(), Some("Budi Santoso"));
    }

    #[test]
    fn test_label_chain_falls_through_empty_fields() {
        let user = User {
            id: "u1".into(),
            nama_lengkap: Some(String::new()),
            email: Some("guru@sekolah.id".into()),
            ..Default::default()
        };
        assert_eq!(user.display_label(), Some("guru@sekolah.id"));
    }

    #[test]
    fn test_unknown_role_decodes_as_other() {
        let user: User = serde_json::from_str(r#"{"_id":"u1","role":"kepsek"}"#).unwrap();
        assert_eq!(user.role, Some(Role::Other));
    }
}
