use std::sync::Mutex;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
    captured: Option<Mutex<String>>,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
            captured: None,
        }
    }

    #[cfg(test)]
    pub fn capturing(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: false,
            captured: Some(Mutex::new(String::new())),
        }
    }

    /// Drains everything rendered so far by a capturing renderer.
    #[cfg(test)]
    pub fn take_output(&self) -> String {
        self.captured
            .as_ref()
            .and_then(|buf| buf.lock().ok().map(|mut buf| std::mem::take(&mut *buf)))
            .unwrap_or_default()
    }

    pub fn is_json(&self) -> bool {
        self.json_mode
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = if self.json_mode {
            format!("{}\n", serde_json::to_string_pretty(&result)?)
        } else {
            self.render_text(&result)
        };
        match &self.captured {
            Some(buf) => {
                if let Ok(mut buf) = buf.lock() {
                    buf.push_str(&text);
                }
            }
            None => print!("{}", text),
        }
        Ok(())
    }

    /// Plain-text form: badge, content view, then tips.
    pub fn render_text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            let label = if !self.color {
                badge.label.clone()
            } else if badge.level == StatusLevel::Warning {
                badge.label.yellow().bold().to_string()
            } else {
                badge.label.bold().to_string()
            };
            out.push_str(&format!("{} {}\n\n", badge.icon(), label));
        }

        out.push_str(&result.content.create_view().to_string());

        if !result.suggestions.is_empty() {
            let heading = if self.color {
                "💡 Tips:".yellow().bold().to_string()
            } else {
                "💡 Tips:".to_string()
            };
            out.push_str(&format!("\n{}\n", heading));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    if self.color {
                        out.push_str(&format!(": {}", cmd.cyan()));
                    } else {
                        out.push_str(&format!(": {}", cmd));
                    }
                }
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        Guidance, MutationAction, MutationViewModel, StatusBadge,
    };

    fn plain() -> ConsoleRenderer {
        ConsoleRenderer {
            json_mode: false,
            color: false,
            captured: None,
        }
    }

    #[test]
    fn test_badge_content_and_tips() {
        let result = CommandResultViewModel::new(MutationViewModel {
            entity: "mapel".into(),
            action: MutationAction::Created,
            id: Some("m9".into()),
        })
        .with_badge(StatusBadge::success("Saved"))
        .with_suggestion(Guidance::new("Review it").with_command("jurnal mapel show m9"));

        assert_eq!(
            plain().render_text(&result),
            "✅ Saved\n\nmapel m9 created\n\n💡 Tips:\n  • Review it: jurnal mapel show m9\n"
        );
    }
}
