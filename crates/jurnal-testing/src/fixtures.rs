//! Entity builders with just enough fields set to be realistic.

use chrono::{DateTime, TimeZone, Utc};

use jurnal_types::{Gender, Hari, Jadwal, Jurnal, Kelas, LoginData, Mapel, Ref, Role, Siswa, User};

/// 17 Agustus 2025, 07:30 UTC (14.30 in Jakarta).
pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 17, 7, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn guru(id: &str, nama_lengkap: &str) -> User {
    User {
        id: id.into(),
        username: Some(nama_lengkap.to_lowercase().replace(' ', ".")),
        nama_lengkap: Some(nama_lengkap.into()),
        role: Some(Role::Guru),
        ..Default::default()
    }
}

pub fn admin(id: &str, username: &str) -> User {
    User {
        id: id.into(),
        username: Some(username.into()),
        role: Some(Role::Admin),
        ..Default::default()
    }
}

pub fn login(token: &str, user: User) -> LoginData {
    LoginData {
        token: token.into(),
        user,
    }
}

pub fn kelas(id: &str, nama: &str, siswa: &[&str]) -> Kelas {
    Kelas {
        id: id.into(),
        nama_kelas: Some(nama.into()),
        siswa: siswa.iter().map(|s| Ref::bare(*s)).collect(),
        ..Default::default()
    }
}

pub fn mapel(id: &str, kode: &str, nama: &str) -> Mapel {
    Mapel {
        id: id.into(),
        kode_mapel: Some(kode.into()),
        nama_mapel: Some(nama.into()),
        ..Default::default()
    }
}

pub fn siswa(id: &str, nama: &str, kelas_id: &str, gender: Gender) -> Siswa {
    Siswa {
        id: id.into(),
        nis: Some(format!("2025{}", id)),
        nama: Some(nama.into()),
        kelas: Some(Ref::bare(kelas_id)),
        jenis_kelamin: Some(gender),
        ..Default::default()
    }
}

pub fn jadwal(id: &str, kelas_id: &str, hari: Hari, jam_ke: u32, mapel_id: Option<&str>) -> Jadwal {
    Jadwal {
        id: id.into(),
        kelas: Some(Ref::bare(kelas_id)),
        hari,
        jam_ke,
        mapel: mapel_id.map(Ref::bare),
        created_by: None,
        updated_by: None,
        created_at: Some(timestamp()),
        updated_at: None,
    }
}

pub fn jurnal(id: &str, guru_id: &str, kelas_id: &str, mapel_id: &str, jam: u32) -> Jurnal {
    Jurnal {
        id: id.into(),
        guru: Some(Ref::bare(guru_id)),
        kelas: Some(Ref::bare(kelas_id)),
        mapel: Some(Ref::bare(mapel_id)),
        jam_pelajaran: jam,
        materi: Some(format!("Materi {}", id)),
        catatan: None,
        siswa_tidak_hadir: Vec::new(),
        siswa_izin: Vec::new(),
        siswa_sakit: Vec::new(),
        created_at: Some(timestamp()),
        updated_at: None,
    }
}
