use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use jurnal_runtime::Config;

use super::CreateView;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub config: Config,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}
