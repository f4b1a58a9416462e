pub mod board;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod session;

pub use board::{Board, LoadWarning, Needs, Prerequisites, Users, ViewScope, load_board};
pub use client::{Client, Resource, Scope};
pub use config::{Config, resolve_data_path};
pub use dashboard::{AdminDashboard, ScheduleSlot, TeacherDashboard, admin_dashboard, teacher_dashboard};
pub use error::{Error, Result};
pub use gateway::{Endpoints, Gateway, HttpGateway, Method, Request};
pub use listing::Listing;
pub use session::{Session, SessionStore};
