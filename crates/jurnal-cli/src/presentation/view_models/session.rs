use std::fmt;

use serde::Serialize;

use jurnal_types::{Labeled, Role, User};

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct SessionViewModel {
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl SessionViewModel {
    pub fn signed_in(user: &User) -> Self {
        Self {
            signed_in: true,
            user_id: Some(user.id.clone()),
            name: Some(user.display_label().unwrap_or(&user.id).to_string()),
            role: user.role,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            user_id: None,
            name: None,
            role: None,
        }
    }
}

impl CreateView for SessionViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::session::SessionView;
        Box::new(SessionView::new(self))
    }
}
