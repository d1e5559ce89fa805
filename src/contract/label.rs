/// Turns a CamelCase contract name into the snake_case label used by the
/// registry: `_` goes before every uppercase ASCII letter except the first
/// character, runs of spaces collapse into one, and the result is lowercased.
pub fn derive_label(contract_name: &str) -> String {
    let mut label = String::with_capacity(contract_name.len() + 4);
    for (index, c) in contract_name.chars().enumerate() {
        if c == ' ' && label.ends_with(' ') {
            continue;
        }
        if index > 0 && c.is_ascii_uppercase() {
            label.push('_');
        }
        label.push(c);
    }
    label.to_lowercase()
}
