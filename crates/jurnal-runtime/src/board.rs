//! Loading a list view together with the dropdown and label data it needs.
//!
//! The primary list and every prerequisite list are requested concurrently
//! and the board is only handed out once all of them have settled, so label
//! indices are complete before anything renders. A prerequisite failure
//! degrades to an empty list plus a warning; a primary failure fails the
//! board. Every load races a cancellation token owned by its view.

use std::future::Future;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use jurnal_engine::{LabelIndex, LabelIndices};
use jurnal_types::{Kelas, Mapel, Role, Siswa, User};

use crate::client::Client;
use crate::{Error, Result};

/// Which users a view needs for labels and dropdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Users {
    #[default]
    Skip,
    All,
    Only(Role),
}

/// Prerequisite lists a view depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Needs {
    pub users: Users,
    pub kelas: bool,
    pub mapel: bool,
    pub siswa: bool,
}

impl Needs {
    pub fn none() -> Self {
        Self::default()
    }

    /// Journal listings: classes, subjects, students and teachers.
    pub fn journals() -> Self {
        Self {
            users: Users::Only(Role::Guru),
            kelas: true,
            mapel: true,
            siswa: true,
        }
    }

    pub fn schedules() -> Self {
        Self {
            users: Users::All,
            kelas: true,
            mapel: true,
            siswa: false,
        }
    }

    pub fn students() -> Self {
        Self {
            kelas: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Prerequisites {
    pub users: Vec<User>,
    pub kelas: Vec<Kelas>,
    pub mapel: Vec<Mapel>,
    pub siswa: Vec<Siswa>,
}

impl Prerequisites {
    pub fn labels(&self) -> LabelIndices {
        LabelIndices {
            users: LabelIndex::from_entities(&self.users),
            kelas: LabelIndex::from_entities(&self.kelas),
            mapel: LabelIndex::from_entities(&self.mapel),
            siswa: LabelIndex::from_entities(&self.siswa),
        }
    }
}

/// A prerequisite that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadWarning {
    pub source: &'static str,
    pub message: String,
}

/// Everything a list view renders from.
#[derive(Debug, Clone)]
pub struct Board<T> {
    pub items: Vec<T>,
    pub prerequisites: Prerequisites,
    pub labels: LabelIndices,
    pub warnings: Vec<LoadWarning>,
}

async fn best_effort<T, F>(wanted: bool, source: &'static str, fetch: F) -> (Vec<T>, Option<LoadWarning>)
where
    F: Future<Output = Result<Vec<T>>>,
{
    if !wanted {
        return (Vec::new(), None);
    }
    match fetch.await {
        Ok(items) => (items, None),
        Err(err) => {
            tracing::warn!(source, error = %err, "prerequisite fetch failed");
            let warning = LoadWarning {
                source,
                message: err.user_message(),
            };
            (Vec::new(), Some(warning))
        }
    }
}

pub async fn load_prerequisites(client: &Client, needs: Needs) -> (Prerequisites, Vec<LoadWarning>) {
    let role = match needs.users {
        Users::Only(role) => Some(role),
        _ => None,
    };
    let (users, kelas, mapel, siswa) = futures::join!(
        best_effort(needs.users != Users::Skip, "users", client.list_users(role)),
        best_effort(needs.kelas, "kelas", client.list::<Kelas>()),
        best_effort(needs.mapel, "mapel", client.list::<Mapel>()),
        best_effort(needs.siswa, "siswa", client.list::<Siswa>()),
    );

    let warnings = [users.1, kelas.1, mapel.1, siswa.1]
        .into_iter()
        .flatten()
        .collect();
    let prerequisites = Prerequisites {
        users: users.0,
        kelas: kelas.0,
        mapel: mapel.0,
        siswa: siswa.0,
    };
    (prerequisites, warnings)
}

/// Loads `primary` and the prerequisites named by `needs` as one unit.
///
/// Returns [`Error::Cancelled`] without touching any state if `cancel` fires
/// first.
pub async fn load_board<T, F>(
    client: &Client,
    primary: F,
    needs: Needs,
    cancel: &CancellationToken,
) -> Result<Board<T>>
where
    F: Future<Output = Result<Vec<T>>>,
{
    let joined = async { futures::join!(primary, load_prerequisites(client, needs)) };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!("board load cancelled");
            Err(Error::Cancelled)
        }
        (items, (prerequisites, warnings)) = joined => {
            let items = items?;
            let labels = prerequisites.labels();
            tracing::debug!(items = items.len(), warnings = warnings.len(), "board loaded");
            Ok(Board { items, prerequisites, labels, warnings })
        }
    }
}

/// Cancellation scope tied to one view's lifetime.
///
/// Starting a new load cancels whatever the previous one was doing; dropping
/// the scope cancels the current load.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn restart(&mut self) -> CancellationToken {
        self.token.cancel();
        self.token = CancellationToken::new();
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
