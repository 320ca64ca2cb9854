// Command modules
mod history;
mod today;

// Re-export all commands
pub use history::history;
pub use today::today;
