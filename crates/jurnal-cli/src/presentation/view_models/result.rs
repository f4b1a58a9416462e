use serde::Serialize;

use super::common::{Guidance, StatusBadge};

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    pub fn with_suggestions(mut self, guides: Vec<Guidance>) -> Self {
        self.suggestions.extend(guides);
        self
    }

    /// Prerequisite lists that failed to load become a warning badge plus
    /// one suggestion per source.
    pub fn with_load_warnings(self, warnings: &[jurnal_runtime::LoadWarning]) -> Self {
        if warnings.is_empty() {
            return self;
        }
        let guides = warnings
            .iter()
            .map(|w| Guidance::new(format!("{} unavailable: {}", w.source, w.message)))
            .collect();
        self.with_badge(StatusBadge::warning("Some reference data could not be loaded"))
            .with_suggestions(guides)
    }
}
