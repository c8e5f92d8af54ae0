#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("could not open browser") {
        suggestions.push("Set BROWSER to the command that launches your browser".to_string());
    }

    if msg_lower.contains("not found") || msg_lower.contains("no such file") {
        suggestions.push("Check that a web browser is installed and on PATH".to_string());
    }

    if msg_lower.contains("display") {
        suggestions.push("No graphical session found: open the link from another machine".to_string());
    }

    if msg_lower.contains("permission denied") {
        suggestions.push("Check the permissions of your browser executable".to_string());
    }

    suggestions
}
