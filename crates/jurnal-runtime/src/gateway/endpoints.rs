use jurnal_types::EntityKind;

pub const LOGIN: &str = "login";
pub const LOGOUT: &str = "logout";

/// Path table for the school backend, relative to the API base URL.
pub struct Endpoints;

impl Endpoints {
    pub fn list(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::User => "getusers",
            EntityKind::Kelas => "getkelas",
            EntityKind::Mapel => "getmapels",
            EntityKind::Siswa => "getstudents",
            EntityKind::Jadwal => "getjadwal",
            EntityKind::Jurnal => "getjurnal",
        }
    }

    /// Users filtered server-side by role, e.g. `getusers?role=guru`.
    pub fn users_with_role(role: &str) -> String {
        format!("{}?role={}", Self::list(EntityKind::User), role)
    }

    /// A class detail comes with its students expanded.
    pub fn detail(kind: EntityKind, id: &str) -> String {
        let prefix = match kind {
            EntityKind::User => "getuser",
            EntityKind::Kelas => "withsiswa",
            EntityKind::Mapel => "getmapel",
            EntityKind::Siswa => "getstudent",
            EntityKind::Jadwal => "getjadwal",
            EntityKind::Jurnal => "getjurnal",
        };
        format!("{}/{}", prefix, id)
    }

    pub fn create(kind: EntityKind) -> String {
        format!("add{}", Self::noun(kind))
    }

    pub fn update(kind: EntityKind, id: &str) -> String {
        format!("update{}/{}", Self::noun(kind), id)
    }

    pub fn delete(kind: EntityKind, id: &str) -> String {
        format!("delete{}/{}", Self::noun(kind), id)
    }

    pub fn jurnal_by_guru(user_id: &str) -> String {
        format!("getjurnalbyguru/{}", user_id)
    }

    pub fn jadwal_by_guru(user_id: &str) -> String {
        format!("getjadwalbyguru/{}", user_id)
    }

    fn noun(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::User => "user",
            EntityKind::Kelas => "kelas",
            EntityKind::Mapel => "mapel",
            EntityKind::Siswa => "student",
            EntityKind::Jadwal => "jadwal",
            EntityKind::Jurnal => "jurnal",
        }
    }
}
