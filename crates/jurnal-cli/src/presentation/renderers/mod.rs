pub mod console;

pub use console::ConsoleRenderer;
