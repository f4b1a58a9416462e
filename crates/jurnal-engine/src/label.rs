//! Label resolution for reference fields.
//!
//! A reference arrives either as a bare id or as the expanded record. Both
//! shapes must produce the same label for the same referenced entity, and a
//! label is never empty: when nothing better is known the raw id is shown.

use std::collections::HashMap;

use jurnal_types::{EntityKind, Labeled, Ref};

/// Shown for absent values and empty lists.
pub const PLACEHOLDER: &str = "—";

/// Client-side `id -> label` lookup built from a prerequisite list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelIndex {
    labels: HashMap<String, String>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every entity by id; entities without a display value map to their id.
    pub fn from_entities<'a, T, I>(entities: I) -> Self
    where
        T: Labeled + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut index = Self::new();
        for entity in entities {
            let label = entity.display_label().unwrap_or(entity.id());
            index.insert(entity.id(), label);
        }
        index
    }

    pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(id.into(), label.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels
            .get(id)
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One index per referenceable entity kind.
#[derive(Debug, Clone, Default)]
pub struct LabelIndices {
    pub users: LabelIndex,
    pub kelas: LabelIndex,
    pub mapel: LabelIndex,
    pub siswa: LabelIndex,
}

impl LabelIndices {
    pub fn for_kind(&self, kind: EntityKind) -> Option<&LabelIndex> {
        match kind {
            EntityKind::User => Some(&self.users),
            EntityKind::Kelas => Some(&self.kelas),
            EntityKind::Mapel => Some(&self.mapel),
            EntityKind::Siswa => Some(&self.siswa),
            EntityKind::Jadwal | EntityKind::Jurnal => None,
        }
    }
}

/// Borrowed, type-erased view of a reference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefView<'a> {
    Bare(&'a str),
    Expanded { id: &'a str, label: Option<&'a str> },
}

impl<'a> RefView<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            RefView::Bare(id) => id,
            RefView::Expanded { id, .. } => id,
        }
    }

    /// Label carried by the record itself, without consulting any index.
    pub fn embedded_label(&self) -> Option<&'a str> {
        match *self {
            RefView::Bare(_) => None,
            RefView::Expanded { label, .. } => label,
        }
    }

    pub fn resolve(&self, index: Option<&LabelIndex>) -> String {
        let label = match *self {
            RefView::Bare(id) => index.and_then(|idx| idx.get(id)).unwrap_or(id),
            RefView::Expanded { id, label } => label.unwrap_or(id),
        };
        if label.trim().is_empty() {
            PLACEHOLDER.to_string()
        } else {
            label.to_string()
        }
    }
}

impl<'a, T: Labeled> From<&'a Ref<T>> for RefView<'a> {
    fn from(field: &'a Ref<T>) -> Self {
        match field {
            Ref::Id(id) => RefView::Bare(id),
            Ref::Expanded(entity) => RefView::Expanded {
                id: entity.id(),
                label: entity.display_label(),
            },
        }
    }
}

/// Display string for a single reference field.
pub fn resolve_label<T: Labeled>(field: Option<&Ref<T>>, index: Option<&LabelIndex>) -> String {
    match field {
        None => PLACEHOLDER.to_string(),
        Some(field) => RefView::from(field).resolve(index),
    }
}

/// Display string for a list-valued reference field, joined with `", "`.
pub fn resolve_list<T: Labeled>(fields: &[Ref<T>], index: Option<&LabelIndex>) -> String {
    if fields.is_empty() {
        return PLACEHOLDER.to_string();
    }
    fields
        .iter()
        .map(|field| RefView::from(field).resolve(index))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Free text, or the placeholder when blank.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
