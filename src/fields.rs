pub const KEY_WIFI_SSID: &str = "WIFI_SSID";
pub const KEY_WIFI_PASSWORD: &str = "WIFI_PASSWORD";
pub const KEY_FORCE_SETUP_MODE: &str = "FORCE_SETUP_MODE";

/// Raw values captured for the recognized provisioning keys. `None` means the
/// key never appeared; `Some("")` means it was assigned an empty value. The
/// fallback policy treats both the same, but the distinction keeps parsing
/// honest about what the file actually said.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub force_setup: Option<String>,
}

/// Walks the useful lines and captures assignments to the recognized keys.
/// Splits at the first `=` only, so values may contain `=` themselves; keys
/// and values are trimmed but otherwise untouched (no quote stripping). When
/// a key repeats, the last assignment wins.
pub fn extract_fields(lines: &[String]) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    for line in lines {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_owned();
        match key.trim() {
            KEY_WIFI_SSID => fields.ssid = Some(value),
            KEY_WIFI_PASSWORD => fields.password = Some(value),
            KEY_FORCE_SETUP_MODE => fields.force_setup = Some(value),
            _ => {}
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn captures_all_three_keys() {
        let fields = extract_fields(&lines(&[
            "WIFI_SSID=Home Net",
            "WIFI_PASSWORD=hunter2",
            "FORCE_SETUP_MODE=1",
        ]));
        assert_eq!(fields.ssid.as_deref(), Some("Home Net"));
        assert_eq!(fields.password.as_deref(), Some("hunter2"));
        assert_eq!(fields.force_setup.as_deref(), Some("1"));
    }

    #[test]
    fn splits_at_first_equals_only() {
        let fields = extract_fields(&lines(&["WIFI_PASSWORD=a=b=c"]));
        assert_eq!(fields.password.as_deref(), Some("a=b=c"));
    }

    #[test]
    fn trims_key_and_value_but_keeps_inner_whitespace() {
        let fields = extract_fields(&lines(&["WIFI_SSID =  Home Net  "]));
        assert_eq!(fields.ssid.as_deref(), Some("Home Net"));
    }

    #[test]
    fn last_assignment_wins() {
        let fields = extract_fields(&lines(&["WIFI_SSID=first", "WIFI_SSID=second"]));
        assert_eq!(fields.ssid.as_deref(), Some("second"));
    }

    #[test]
    fn ignores_unrecognized_keys_and_lines_without_equals() {
        let fields = extract_fields(&lines(&["HOSTNAME=printer", "not an assignment"]));
        assert_eq!(fields, ExtractedFields::default());
    }

    #[test]
    fn empty_assignment_is_captured_as_empty_not_missing() {
        let fields = extract_fields(&lines(&["WIFI_PASSWORD="]));
        assert_eq!(fields.password.as_deref(), Some(""));
        assert_eq!(fields.ssid, None);
    }

    #[test]
    fn does_not_strip_quotes_from_values() {
        let fields = extract_fields(&lines(&["WIFI_SSID=\"Home Net\""]));
        assert_eq!(fields.ssid.as_deref(), Some("\"Home Net\""));
    }
}
