use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Kelas, Mapel, Siswa, User};
use crate::reference::{Entity, EntityKind, Ref};

/// Teaching journal entry: what was taught in one period, plus attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jurnal {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub guru: Option<Ref<User>>,
    #[serde(default)]
    pub kelas: Option<Ref<Kelas>>,
    #[serde(default)]
    pub mapel: Option<Ref<Mapel>>,
    pub jam_pelajaran: u32,
    #[serde(default)]
    pub materi: Option<String>,
    #[serde(default)]
    pub catatan: Option<String>,
    #[serde(default)]
    pub siswa_tidak_hadir: Vec<Ref<Siswa>>,
    #[serde(default)]
    pub siswa_izin: Vec<Ref<Siswa>>,
    #[serde(default)]
    pub siswa_sakit: Vec<Ref<Siswa>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Jurnal {
    const KIND: EntityKind = EntityKind::Jurnal;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Request body for creating or updating a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurnalDraft {
    pub guru: String,
    pub kelas: String,
    pub mapel: String,
    pub jam_pelajaran: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materi: Option<String>,
    #[serde(default)]
    pub siswa_tidak_hadir: Vec<String>,
    #[serde(default)]
    pub siswa_izin: Vec<String>,
    #[serde(default)]
    pub siswa_sakit: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

impl JurnalDraft {
    /// Switches the class and drops attendance entries for students outside
    /// the new class's roster.
    pub fn set_kelas(&mut self, kelas: &Kelas) {
        self.kelas = kelas.id.clone();
        let keep = |ids: &mut Vec<String>| ids.retain(|id| kelas.has_student(id));
        keep(&mut self.siswa_tidak_hadir);
        keep(&mut self.siswa_izin);
        keep(&mut self.siswa_sakit);
    }

    /// Blank text fields are sent as absent rather than as empty strings.
    pub fn normalized(mut self) -> Self {
        self.materi = self.materi.filter(|m| !m.trim().is_empty());
        self.catatan = self.catatan.filter(|c| !c.trim().is_empty());
        self
    }
}

impl From<&Jurnal> for JurnalDraft {
    fn from(jurnal: &Jurnal) -> Self {
        let ids = |refs: &[Ref<Siswa>]| -> Vec<String> {
            refs.iter().map(|r| r.id().to_string()).collect()
        };
        let id_of = |r: Option<&str>| r.map(str::to_string).unwrap_or_default();
        Self {
            guru: id_of(jurnal.guru.as_ref().map(|r| r.id())),
            kelas: id_of(jurnal.kelas.as_ref().map(|r| r.id())),
            mapel: id_of(jurnal.mapel.as_ref().map(|r| r.id())),
            jam_pelajaran: jurnal.jam_pelajaran,
            materi: jurnal.materi.clone(),
            siswa_tidak_hadir: ids(&jurnal.siswa_tidak_hadir),
            siswa_izin: ids(&jurnal.siswa_izin),
            siswa_sakit: ids(&jurnal.siswa_sakit),
            catatan: jurnal.catatan.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JurnalDraft {
        JurnalDraft {
            guru: "u1".into(),
            kelas: "c1".into(),
            mapel: "m1".into(),
            jam_pelajaran: 1,
            materi: Some("  ".into()),
            siswa_tidak_hadir: vec!["s1".into(), "s2".into()],
            siswa_izin: vec!["s3".into()],
            siswa_sakit: vec![],
            catatan: Some("Ulangan".into()),
        }
    }

    #[test]
    fn test_set_kelas_drops_students_outside_roster() {
        let kelas = Kelas {
            id: "c2".into(),
            siswa: vec![Ref::bare("s2"), Ref::bare("s3")],
            ..Default::default()
        };
        let mut d = draft();
        d.set_kelas(&kelas);
        assert_eq!(d.kelas, "c2");
        assert_eq!(d.siswa_tidak_hadir, vec!["s2".to_string()]);
        assert_eq!(d.siswa_izin, vec!["s3".to_string()]);
    }

    #[test]
    fn test_normalized_omits_blank_text() {
        let value = serde_json::to_value(draft().normalized()).unwrap();
        assert!(value.get("materi").is_none());
        assert_eq!(value["catatan"], "Ulangan");
        assert_eq!(value["jamPelajaran"], 1);
    }

    #[test]
    fn test_decodes_mixed_reference_shapes() {
        let json = r#"{
            "_id": "j1",
            "guru": {"_id": "u1", "namaLengkap": "Bu Sari"},
            "kelas": "c1",
            "mapel": {"_id": "m1", "namaMapel": "IPA"},
            "jamPelajaran": 3,
            "siswaTidakHadir": ["s1", {"_id": "s2", "nama": "Dewi"}],
            "createdAt": "2025-08-17T07:30:00.000Z"
        }"#;
        let jurnal: Jurnal = serde_json::from_str(json).unwrap();
        assert_eq!(jurnal.guru.as_ref().unwrap().id(), "u1");
        assert_eq!(jurnal.kelas.as_ref().unwrap().id(), "c1");
        assert_eq!(jurnal.siswa_tidak_hadir.len(), 2);
        assert!(jurnal.siswa_izin.is_empty());
        assert!(jurnal.created_at.is_some());
    }
}
