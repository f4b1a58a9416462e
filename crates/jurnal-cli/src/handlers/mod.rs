mod context;

pub mod config;
pub mod dashboard;
pub mod entity;
pub mod screen;
pub mod session;

pub use context::HandlerContext;
