//! Single-field reference filter and multi-key sort applied before paging.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::collate;
use crate::label::{LabelIndex, RefView};

/// Extracts the reference a listing can be filtered by (teacher, class, creator).
pub type RefKey<T> = for<'x> fn(&'x T) -> Option<RefView<'x>>;

/// One ascending sort key.
pub enum SortKey<'a, T> {
    /// Compared case- and accent-insensitively.
    Text(Box<dyn Fn(&T) -> String + 'a>),
    /// Position in a fixed declaration table (weekday order), never lexical.
    Rank(Box<dyn Fn(&T) -> usize + 'a>),
    Number(Box<dyn Fn(&T) -> u64 + 'a>),
}

impl<'a, T> SortKey<'a, T> {
    pub fn text(f: impl Fn(&T) -> String + 'a) -> Self {
        SortKey::Text(Box::new(f))
    }

    pub fn rank(f: impl Fn(&T) -> usize + 'a) -> Self {
        SortKey::Rank(Box::new(f))
    }

    pub fn number(f: impl Fn(&T) -> u64 + 'a) -> Self {
        SortKey::Number(Box::new(f))
    }

    fn extract(&self, item: &T) -> KeyValue {
        match self {
            SortKey::Text(f) => KeyValue::Text(collate::key(&f(item))),
            SortKey::Rank(f) => KeyValue::Ordinal(f(item) as u64),
            SortKey::Number(f) => KeyValue::Ordinal(f(item)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum KeyValue {
    Text(Vec<(u8, char)>),
    Ordinal(u64),
}

fn matches<T>(item: &T, key: RefKey<T>, value: &str) -> bool {
    key(item).is_some_and(|r| r.id() == value)
}

/// Filters by reference id (not label) and sorts by `sort`, stably.
///
/// An unset or blank `value` keeps every item.
pub fn filter_and_sort<T: Clone>(
    items: &[T],
    key: Option<RefKey<T>>,
    value: Option<&str>,
    sort: &[SortKey<'_, T>],
) -> Vec<T> {
    let value = value.map(str::trim).filter(|v| !v.is_empty());
    let mut decorated: Vec<(Vec<KeyValue>, &T)> = items
        .iter()
        .filter(|item| match (key, value) {
            (Some(key), Some(value)) => matches(*item, key, value),
            _ => true,
        })
        .map(|item| (sort.iter().map(|k| k.extract(item)).collect(), item))
        .collect();

    decorated.sort_by(|a, b| a.0.cmp(&b.0));
    decorated.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Candidate for a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub id: String,
    pub label: String,
}

/// Derives dropdown options from the unfiltered collection.
///
/// Labels come from an expanded reference inside the collection when one is
/// present, then from `index`, then the raw id. Options are unique by id and
/// ordered by label.
pub fn filter_options<T>(
    items: &[T],
    key: RefKey<T>,
    index: Option<&LabelIndex>,
) -> Vec<FilterOption> {
    let mut order: Vec<&str> = Vec::new();
    let mut embedded: HashMap<&str, &str> = HashMap::new();

    for item in items {
        let Some(view) = key(item) else { continue };
        let id = view.id();
        if id.trim().is_empty() {
            continue;
        }
        if !order.contains(&id) {
            order.push(id);
        }
        if let Some(label) = view.embedded_label().filter(|l| !l.trim().is_empty()) {
            embedded.insert(id, label);
        }
    }

    let mut options: Vec<FilterOption> = order
        .into_iter()
        .map(|id| {
            let label = embedded
                .get(id)
                .copied()
                .or_else(|| index.and_then(|idx| idx.get(id)))
                .unwrap_or(id);
            FilterOption {
                id: id.to_string(),
                label: label.to_string(),
            }
        })
        .collect();

    options.sort_by(|a, b| by_label(a, b));
    options
}

fn by_label(a: &FilterOption, b: &FilterOption) -> Ordering {
    collate::compare_total(&a.label, &b.label).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jurnal_types::{Hari, Jadwal, Ref, User};

    fn jadwal(id: &str, hari: Hari, jam_ke: u32, creator: Option<Ref<User>>) -> Jadwal {
        Jadwal {
            id: id.into(),
            kelas: Some(Ref::bare("c1")),
            hari,
            jam_ke,
            mapel: None,
            created_by: creator,
            updated_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn creator(j: &Jadwal) -> Option<RefView<'_>> {
        j.created_by.as_ref().map(RefView::from)
    }

    fn weekday_then_period<'a>() -> Vec<SortKey<'a, Jadwal>> {
        vec![
            SortKey::rank(|j: &Jadwal| j.hari.rank()),
            SortKey::number(|j: &Jadwal| u64::from(j.jam_ke)),
        ]
    }

    #[test]
    fn test_weekday_rank_beats_alphabetical() {
        let items = vec![
            jadwal("a", Hari::Jumat, 3, None),
            jadwal("b", Hari::Senin, 2, None),
            jadwal("c", Hari::Senin, 1, None),
        ];
        let sorted = filter_and_sort(&items, None, None, &weekday_then_period());
        let ids: Vec<&str> = sorted.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filter_matches_id_for_both_shapes() {
        let expanded = Ref::Expanded(User {
            id: "u1".into(),
            username: Some("sari".into()),
            ..Default::default()
        });
        let items = vec![
            jadwal("a", Hari::Senin, 1, Some(expanded)),
            jadwal("b", Hari::Senin, 2, Some(Ref::bare("u2"))),
            jadwal("c", Hari::Selasa, 1, Some(Ref::bare("u1"))),
            jadwal("d", Hari::Rabu, 1, None),
        ];
        let only_u1 = filter_and_sort(&items, Some(creator), Some("u1"), &[]);
        let ids: Vec<&str> = only_u1.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        let items = vec![
            jadwal("a", Hari::Senin, 1, None),
            jadwal("b", Hari::Senin, 2, Some(Ref::bare("u2"))),
        ];
        assert_eq!(filter_and_sort(&items, Some(creator), Some(" "), &[]).len(), 2);
        assert_eq!(filter_and_sort(&items, Some(creator), None, &[]).len(), 2);
    }

    #[test]
    fn test_text_key_is_case_insensitive_and_stable() {
        let items = vec!["beta", "Alpha", "alpha", "Beta"];
        let keys = [SortKey::text(|s: &&str| s.to_string())];
        let sorted = filter_and_sort(&items, None, None, &keys);
        assert_eq!(sorted, vec!["Alpha", "alpha", "beta", "Beta"]);
    }

    #[test]
    fn test_filter_options_label_priority_and_dedup() {
        let expanded = Ref::Expanded(User {
            id: "u1".into(),
            nama_lengkap: Some("Sari Dewi".into()),
            ..Default::default()
        });
        let items = vec![
            jadwal("a", Hari::Senin, 1, Some(Ref::bare("u1"))),
            jadwal("b", Hari::Senin, 2, Some(expanded)),
            jadwal("c", Hari::Selasa, 1, Some(Ref::bare("u2"))),
            jadwal("d", Hari::Rabu, 1, Some(Ref::bare("u3"))),
            jadwal("e", Hari::Rabu, 2, None),
        ];
        let mut index = LabelIndex::new();
        index.insert("u1", "ignored because embedded wins");
        index.insert("u2", "andi");

        let options = filter_options(&items, creator, Some(&index));
        assert_eq!(
            options,
            vec![
                FilterOption { id: "u2".into(), label: "andi".into() },
                FilterOption { id: "u1".into(), label: "Sari Dewi".into() },
                FilterOption { id: "u3".into(), label: "u3".into() },
            ]
        );
    }
}
