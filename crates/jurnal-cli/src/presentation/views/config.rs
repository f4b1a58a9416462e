use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = &self.data.config;
        writeln!(f, "Config: {}", self.data.path.display())?;
        writeln!(f)?;
        writeln!(f, "{:<20} {}", "api_base_url", config.api_base_url)?;
        writeln!(f, "{:<20} {}", "page_size", config.page_size)?;
        writeln!(f, "{:<20} {}", "utc_offset_minutes", config.utc_offset_minutes)?;
        writeln!(f, "{:<20} {}", "timeout_secs", config.timeout_secs)?;
        Ok(())
    }
}
