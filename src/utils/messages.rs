/// Pure functions for formatting user-facing messages (Discord-agnostic)

/// Format a validation error message with emoji
pub fn format_error(message: &str) -> String {
    format!("❌ {}", message)
}

/// Format one commercial-API record as a titled block of text
pub fn format_event_block(title: &str, content: &str) -> String {
    format!("【{}】\n{}\n", title, content)
}
