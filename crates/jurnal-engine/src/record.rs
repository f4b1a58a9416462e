//! Per-entity row projection shared by the on-screen table, the exports and print.
//!
//! Every display value goes through the label resolver, so a cell on screen
//! and the same cell in an exported file can never disagree.

use serde::Serialize;

use jurnal_types::{Entity, EntityKind, Jadwal, Jurnal, Kelas, Labeled, Mapel, Siswa, User};

use crate::label::{LabelIndices, RefView, resolve_label, resolve_list, text_or_placeholder};
use crate::query::{RefKey, SortKey};
use crate::time::TimestampFormat;

/// Everything needed to turn a record into display strings.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub labels: &'a LabelIndices,
    pub time: TimestampFormat,
}

impl<'a> RenderContext<'a> {
    pub fn new(labels: &'a LabelIndices, time: TimestampFormat) -> Self {
        Self { labels, time }
    }
}

/// One labelled value of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    /// Shown as a column of the on-screen table; every field is exported.
    #[serde(skip)]
    pub on_screen: bool,
}

impl Field {
    fn column(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            on_screen: true,
        }
    }

    fn detail(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            on_screen: false,
        }
    }
}

/// A listable entity: ordered fields, optional filter reference, default order.
pub trait Record: Entity + Clone {
    /// Fixed, ordered field list. The order is the export column order.
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field>;

    /// Reference the listing's filter dropdown selects on.
    fn filter_key() -> Option<RefKey<Self>> {
        None
    }

    /// Kind of record the filter reference points at, for option labels.
    fn filter_kind() -> Option<EntityKind> {
        None
    }

    fn default_sort<'a>(ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>>;
}

fn guru_of(j: &Jurnal) -> Option<RefView<'_>> {
    j.guru.as_ref().map(RefView::from)
}

fn creator_of(j: &Jadwal) -> Option<RefView<'_>> {
    j.created_by.as_ref().map(RefView::from)
}

fn kelas_of(s: &Siswa) -> Option<RefView<'_>> {
    s.kelas.as_ref().map(RefView::from)
}

fn label_of<T: Labeled>(entity: &T) -> String {
    text_or_placeholder(Some(entity.display_label().unwrap_or(entity.id())))
}

impl Record for Jurnal {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        let l = ctx.labels;
        vec![
            Field::column("Guru", resolve_label(self.guru.as_ref(), Some(&l.users))),
            Field::column("Kelas", resolve_label(self.kelas.as_ref(), Some(&l.kelas))),
            Field::column("Mapel", resolve_label(self.mapel.as_ref(), Some(&l.mapel))),
            Field::column("Jam Pelajaran", self.jam_pelajaran.to_string()),
            Field::column("Materi", text_or_placeholder(self.materi.as_deref())),
            Field::detail("Catatan", text_or_placeholder(self.catatan.as_deref())),
            Field::detail("Tidak Hadir", resolve_list(&self.siswa_tidak_hadir, Some(&l.siswa))),
            Field::detail("Izin", resolve_list(&self.siswa_izin, Some(&l.siswa))),
            Field::detail("Sakit", resolve_list(&self.siswa_sakit, Some(&l.siswa))),
            Field::column("Created At", ctx.time.format(self.created_at)),
            Field::column("Last Updated", ctx.time.format(self.updated_at)),
        ]
    }

    fn filter_key() -> Option<RefKey<Self>> {
        Some(guru_of)
    }

    fn filter_kind() -> Option<EntityKind> {
        Some(EntityKind::User)
    }

    fn default_sort<'a>(ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        let labels = ctx.labels;
        vec![
            SortKey::text(move |j: &Jurnal| resolve_label(j.guru.as_ref(), Some(&labels.users))),
            SortKey::text(move |j: &Jurnal| resolve_label(j.kelas.as_ref(), Some(&labels.kelas))),
            SortKey::number(|j: &Jurnal| u64::from(j.jam_pelajaran)),
        ]
    }
}

impl Record for Jadwal {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        let l = ctx.labels;
        vec![
            Field::column("Kelas", resolve_label(self.kelas.as_ref(), Some(&l.kelas))),
            Field::column("Hari", self.hari.to_string()),
            Field::column("Jam Ke", self.jam_ke.to_string()),
            Field::column("Mapel", resolve_label(self.mapel.as_ref(), Some(&l.mapel))),
            Field::column("Created By", resolve_label(self.created_by.as_ref(), Some(&l.users))),
            Field::detail("Updated By", resolve_label(self.updated_by.as_ref(), Some(&l.users))),
            Field::column("Created At", ctx.time.format(self.created_at)),
            Field::column("Updated At", ctx.time.format(self.updated_at)),
        ]
    }

    fn filter_key() -> Option<RefKey<Self>> {
        Some(creator_of)
    }

    fn filter_kind() -> Option<EntityKind> {
        Some(EntityKind::User)
    }

    fn default_sort<'a>(ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        let labels = ctx.labels;
        vec![
            SortKey::text(move |j: &Jadwal| {
                resolve_label(j.created_by.as_ref(), Some(&labels.users))
            }),
            SortKey::rank(|j: &Jadwal| j.hari.rank()),
            SortKey::number(|j: &Jadwal| u64::from(j.jam_ke)),
        ]
    }
}

impl Record for User {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        let l = ctx.labels;
        vec![
            Field::column("Username", text_or_placeholder(self.username.as_deref())),
            Field::column("Nama Lengkap", text_or_placeholder(self.nama_lengkap.as_deref())),
            Field::column(
                "Role",
                self.role.map(|r| r.to_string()).unwrap_or_else(|| text_or_placeholder(None)),
            ),
            Field::column("Email", text_or_placeholder(self.email.as_deref())),
            Field::detail("NIP", text_or_placeholder(self.nip.as_deref())),
            Field::detail("Alamat", text_or_placeholder(self.alamat.as_deref())),
            Field::detail("Mata Pelajaran", resolve_list(&self.mata_pelajaran, Some(&l.mapel))),
            Field::detail("Kelas Diampu", resolve_list(&self.kelas_yang_diampu, Some(&l.kelas))),
            Field::detail("Created At", ctx.time.format(self.created_at)),
            Field::detail("Updated At", ctx.time.format(self.updated_at)),
        ]
    }

    fn default_sort<'a>(_ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        vec![SortKey::text(|u: &User| label_of(u))]
    }
}

impl Record for Kelas {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        vec![
            Field::column("Nama Kelas", text_or_placeholder(self.nama_kelas.as_deref())),
            Field::column("Deskripsi", text_or_placeholder(self.description.as_deref())),
            Field::detail("Jumlah Siswa", self.siswa.len().to_string()),
            Field::detail("Siswa", resolve_list(&self.siswa, Some(&ctx.labels.siswa))),
            Field::detail("Created At", ctx.time.format(self.created_at)),
            Field::detail("Updated At", ctx.time.format(self.updated_at)),
        ]
    }

    fn default_sort<'a>(_ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        vec![SortKey::text(|k: &Kelas| label_of(k))]
    }
}

impl Record for Mapel {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        vec![
            Field::column("Kode Mata Pelajaran", text_or_placeholder(self.kode_mapel.as_deref())),
            Field::column("Nama Mata Pelajaran", text_or_placeholder(self.nama_mapel.as_deref())),
            Field::column("Deskripsi", text_or_placeholder(self.description.as_deref())),
            Field::detail("Created At", ctx.time.format(self.created_at)),
            Field::detail("Updated At", ctx.time.format(self.updated_at)),
        ]
    }

    fn default_sort<'a>(_ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        vec![SortKey::text(|m: &Mapel| m.kode_mapel.clone().unwrap_or_default())]
    }
}

impl Record for Siswa {
    fn fields(&self, ctx: &RenderContext<'_>) -> Vec<Field> {
        vec![
            Field::column("NIS", text_or_placeholder(self.nis.as_deref())),
            Field::column("Nama", text_or_placeholder(self.nama.as_deref())),
            Field::column("Kelas", resolve_label(self.kelas.as_ref(), Some(&ctx.labels.kelas))),
            Field::column(
                "Jenis Kelamin",
                self.jenis_kelamin
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| text_or_placeholder(None)),
            ),
            Field::detail("Created At", ctx.time.format(self.created_at)),
            Field::detail("Updated At", ctx.time.format(self.updated_at)),
        ]
    }

    fn filter_key() -> Option<RefKey<Self>> {
        Some(kelas_of)
    }

    fn filter_kind() -> Option<EntityKind> {
        Some(EntityKind::Kelas)
    }

    fn default_sort<'a>(_ctx: &RenderContext<'a>) -> Vec<SortKey<'a, Self>> {
        vec![SortKey::text(|s: &Siswa| label_of(s))]
    }
}

/// Header row for a table projection.
pub fn headers(fields: &[Field], on_screen_only: bool) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|f| !on_screen_only || f.on_screen)
        .map(|f| f.label)
        .collect()
}
