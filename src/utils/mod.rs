/// Utility modules for common functionality
pub mod date;
pub mod messages;
