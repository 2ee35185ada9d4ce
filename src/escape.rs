/// Escapes a raw value for embedding between escaped double quotes in a
/// build definition. Backslashes are doubled before quotes are escaped;
/// reversing the order would re-escape the backslashes just inserted.
pub fn escape_literal(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
