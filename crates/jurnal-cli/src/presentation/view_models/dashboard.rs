use std::fmt;

use serde::Serialize;

use jurnal_runtime::{AdminDashboard, TeacherDashboard};

use super::CreateView;

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardViewModel {
    Admin(AdminDashboard),
    Guru(TeacherDashboard),
}

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dashboard::DashboardView;
        Box::new(DashboardView::new(self))
    }
}
