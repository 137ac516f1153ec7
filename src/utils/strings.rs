use crate::error::{Error, Result};

// Device names that cannot be used as file stems on Windows.
const RESERVED_STEMS: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Icon names become `<name>.png`, so they are restricted to a portable
/// file-stem alphabet.
pub(crate) fn icon_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let portable = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if !portable || RESERVED_STEMS.contains(&trimmed.to_ascii_uppercase().as_str()) {
        return Err(Error::InvalidName(name.to_string()));
    }

    Ok(trimmed.to_string())
}

pub(crate) fn hex_color(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let valid = match trimmed.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    };

    if !valid {
        return Err(Error::InvalidColor(raw.to_string()));
    }

    Ok(trimmed.to_string())
}
