//! Landing summaries for the two roles.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use jurnal_engine::{LabelIndex, RefView, TimestampFormat};
use jurnal_types::{Hari, Jadwal, Kelas, Labeled, Mapel, Siswa, User};

use crate::board::LoadWarning;
use crate::client::Client;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub jam_ke: u32,
    pub hari: Hari,
    pub kelas: String,
    pub mapel: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherDashboard {
    pub teacher: String,
    pub jurnal_count: usize,
    pub jadwal_count: usize,
    pub user_count: usize,
    /// `None` on Sundays.
    pub today: Option<Hari>,
    pub today_schedule: Vec<ScheduleSlot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LoadWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub user_count: usize,
    pub kelas_count: usize,
    pub mapel_count: usize,
    pub siswa_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<LoadWarning>,
}

/// School day for `now` in the configured offset.
pub fn today(now: DateTime<Utc>, time: TimestampFormat) -> Option<Hari> {
    Hari::from_weekday(time.local(now).weekday())
}

/// Entries for `day`, ordered by period.
pub fn schedule_for(
    jadwal: &[Jadwal],
    day: Hari,
    kelas: &LabelIndex,
    mapel: &LabelIndex,
) -> Vec<ScheduleSlot> {
    let mut slots: Vec<ScheduleSlot> = jadwal
        .iter()
        .filter(|j| j.hari == day)
        .map(|j| ScheduleSlot {
            jam_ke: j.jam_ke,
            hari: j.hari,
            kelas: j
                .kelas
                .as_ref()
                .map(|r| RefView::from(r).resolve(Some(kelas)))
                .unwrap_or_else(|| jurnal_engine::PLACEHOLDER.to_string()),
            mapel: j
                .mapel
                .as_ref()
                .map(|r| RefView::from(r).resolve(Some(mapel)))
                .unwrap_or_else(|| jurnal_engine::PLACEHOLDER.to_string()),
        })
        .collect();
    slots.sort_by_key(|s| s.jam_ke);
    slots
}

fn counted<T>(source: &'static str, result: Result<Vec<T>>, warnings: &mut Vec<LoadWarning>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(source, error = %err, "dashboard fetch failed");
            warnings.push(LoadWarning {
                source,
                message: err.user_message(),
            });
            Vec::new()
        }
    }
}

/// Summary for the signed-in teacher. Needs a session with a user.
pub async fn teacher_dashboard(
    client: &Client,
    now: DateTime<Utc>,
    time: TimestampFormat,
    cancel: &CancellationToken,
) -> Result<TeacherDashboard> {
    let me = client.session().user().cloned().ok_or(Error::MissingCredential)?;

    let joined = async {
        futures::join!(
            client.list::<User>(),
            client.jurnal_by_guru(&me.id),
            client.jadwal_by_guru(&me.id),
            client.list::<Kelas>(),
            client.list::<Mapel>(),
        )
    };
    let (users, jurnal, jadwal, kelas, mapel) = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(Error::Cancelled),
        results = joined => results,
    };

    let jurnal = jurnal?;
    let jadwal = jadwal?;
    let mut warnings = Vec::new();
    let users = counted("users", users, &mut warnings);
    let kelas = LabelIndex::from_entities(&counted("kelas", kelas, &mut warnings));
    let mapel = LabelIndex::from_entities(&counted("mapel", mapel, &mut warnings));

    let today = today(now, time);
    let today_schedule = today
        .map(|day| schedule_for(&jadwal, day, &kelas, &mapel))
        .unwrap_or_default();

    Ok(TeacherDashboard {
        teacher: me.display_label().unwrap_or(&me.id).to_string(),
        jurnal_count: jurnal.len(),
        jadwal_count: jadwal.len(),
        user_count: users.len(),
        today,
        today_schedule,
        warnings,
    })
}

pub async fn admin_dashboard(client: &Client, cancel: &CancellationToken) -> Result<AdminDashboard> {
    let joined = async {
        futures::join!(
            client.list::<User>(),
            client.list::<Kelas>(),
            client.list::<Mapel>(),
            client.list::<Siswa>(),
        )
    };
    let (users, kelas, mapel, siswa) = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(Error::Cancelled),
        results = joined => results,
    };

    let users = users?;
    let mut warnings = Vec::new();
    Ok(AdminDashboard {
        user_count: users.len(),
        kelas_count: counted("kelas", kelas, &mut warnings).len(),
        mapel_count: counted("mapel", mapel, &mut warnings).len(),
        siswa_count: counted("siswa", siswa, &mut warnings).len(),
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jurnal_types::Ref;

    fn slot(id: &str, hari: Hari, jam_ke: u32, mapel: Option<&str>) -> Jadwal {
        Jadwal {
            id: id.into(),
            kelas: Some(Ref::bare("c1")),
            hari,
            jam_ke,
            mapel: mapel.map(Ref::bare),
            created_by: None,
            updated_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_today_uses_local_offset() {
        // Sunday 20:00 UTC is already Monday in Jakarta.
        let now = Utc.with_ymd_and_hms(2025, 8, 17, 20, 0, 0).unwrap();
        assert_eq!(today(now, TimestampFormat::default()), Some(Hari::Senin));
        assert_eq!(today(now, TimestampFormat::from_offset_minutes(0)), None);
    }

    #[test]
    fn test_schedule_for_sorts_by_period() {
        let mut kelas = LabelIndex::new();
        kelas.insert("c1", "7A");
        let mut mapel = LabelIndex::new();
        mapel.insert("m1", "IPA");

        let jadwal = vec![
            slot("j1", Hari::Senin, 4, Some("m1")),
            slot("j2", Hari::Selasa, 1, Some("m1")),
            slot("j3", Hari::Senin, 2, None),
        ];
        let slots = schedule_for(&jadwal, Hari::Senin, &kelas, &mapel);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].jam_ke, 2);
        assert_eq!(slots[0].mapel, "—");
        assert_eq!(slots[1].kelas, "7A");
        assert_eq!(slots[1].mapel, "IPA");
    }
}
