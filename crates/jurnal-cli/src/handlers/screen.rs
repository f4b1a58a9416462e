//! Per-entity behaviour of the generic entity commands.

use serde::de::DeserializeOwned;

use jurnal_engine::{RefView, text_or_placeholder};
use jurnal_runtime::{Board, Client, Needs, Resource, Result};
use jurnal_types::{Entity, Jadwal, Jurnal, JurnalDraft, Kelas, Mapel, Siswa, User};

use crate::presentation::view_models::MemberRow;

/// An entity the CLI can list, show and edit.
pub trait Screen: Resource<Draft: DeserializeOwned> {
    /// Reference lists its labels and filter options resolve against.
    fn needs() -> Needs;

    /// Roster rows shown under the record's detail view.
    fn members(&self, _board: &Board<Self>) -> Vec<MemberRow> {
        Vec::new()
    }

    /// Applies form rules to a draft before it is sent.
    #[allow(async_fn_in_trait)]
    async fn conform(_client: &Client, draft: Self::Draft) -> Result<Self::Draft> {
        Ok(draft)
    }
}

impl Screen for User {
    fn needs() -> Needs {
        Needs {
            kelas: true,
            mapel: true,
            ..Needs::none()
        }
    }
}

impl Screen for Kelas {
    fn needs() -> Needs {
        Needs {
            siswa: true,
            ..Needs::none()
        }
    }

    /// Students arrive expanded from the class detail endpoint; bare ids
    /// fall back to the student list for name and gender.
    fn members(&self, board: &Board<Self>) -> Vec<MemberRow> {
        self.siswa
            .iter()
            .map(|member| {
                let id = member.id();
                let known = member
                    .as_expanded()
                    .or_else(|| board.prerequisites.siswa.iter().find(|s| s.id() == id));
                let gender = known.and_then(|s| s.jenis_kelamin).map(|g| g.to_string());
                MemberRow {
                    id: id.to_string(),
                    nama: RefView::from(member).resolve(Some(&board.labels.siswa)),
                    jenis_kelamin: text_or_placeholder(gender.as_deref()),
                }
            })
            .collect()
    }
}

impl Screen for Mapel {
    fn needs() -> Needs {
        Needs::none()
    }
}

impl Screen for Siswa {
    fn needs() -> Needs {
        Needs::students()
    }
}

impl Screen for Jadwal {
    fn needs() -> Needs {
        Needs::schedules()
    }
}

impl Screen for Jurnal {
    fn needs() -> Needs {
        Needs::journals()
    }

    /// Attendance may only name students on the chosen class's roster.
    async fn conform(client: &Client, mut draft: JurnalDraft) -> Result<JurnalDraft> {
        let kelas = client.kelas_with_siswa(&draft.kelas).await?;
        draft.set_kelas(&kelas);
        Ok(draft.normalized())
    }
}
