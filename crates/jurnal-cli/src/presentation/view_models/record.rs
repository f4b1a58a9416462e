use std::fmt;

use serde::Serialize;

use jurnal_engine::Field;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct DetailViewModel {
    pub entity: String,
    pub id: String,
    pub title: String,
    pub fields: Vec<Field>,
    /// Class roster; empty for every other entity.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberRow>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MemberRow {
    pub id: String,
    pub nama: String,
    pub jenis_kelamin: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MutationAction {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationAction::Created => write!(f, "created"),
            MutationAction::Updated => write!(f, "updated"),
            MutationAction::Deleted => write!(f, "deleted"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationViewModel {
    pub entity: String,
    pub action: MutationAction,
    /// `None` when the server acknowledged without returning the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CreateView for DetailViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::DetailView;
        Box::new(DetailView::new(self))
    }
}

impl CreateView for MutationViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::record::MutationView;
        Box::new(MutationView::new(self))
    }
}
