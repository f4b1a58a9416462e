use std::fmt;

use crate::presentation::view_models::SessionViewModel;

pub struct SessionView<'a> {
    data: &'a SessionViewModel,
}

impl<'a> SessionView<'a> {
    pub fn new(data: &'a SessionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SessionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.signed_in {
            return writeln!(f, "Not signed in.");
        }
        let name = self.data.name.as_deref().unwrap_or("-");
        let id = self.data.user_id.as_deref().unwrap_or("-");
        match &self.data.role {
            Some(role) => writeln!(f, "{} ({}) as {}", name, id, role),
            None => writeln!(f, "{} ({})", name, id),
        }
    }
}
