// Handlers build view models; renderers decide between JSON and a
// plain-text view. Views never fetch or compute anything themselves.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge};
