mod common;
mod config;
mod dashboard;
mod listing;
mod record;
mod result;
mod session;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use dashboard::DashboardViewModel;
pub use listing::{ExportViewModel, ListingViewModel, OptionsViewModel, PrintViewModel};
pub use record::{DetailViewModel, MemberRow, MutationAction, MutationViewModel};
pub use result::CommandResultViewModel;
pub use session::SessionViewModel;

use std::fmt;

/// Bridge from a view model to its plain-text view.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
