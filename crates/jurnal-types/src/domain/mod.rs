mod jadwal;
mod jurnal;
mod kelas;
mod mapel;
mod siswa;
mod user;

pub use jadwal::{Hari, Jadwal, JadwalDraft};
pub use jurnal::{Jurnal, JurnalDraft};
pub use kelas::{Kelas, KelasDraft};
pub use mapel::{Mapel, MapelDraft};
pub use siswa::{Gender, Siswa, SiswaDraft};
pub use user::{Role, User, UserDraft};
