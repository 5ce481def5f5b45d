//! Upload filename sanitization.

use unicode_normalization::UnicodeNormalization;

use lockdrop_core::error::AppError;

/// Longest sanitized filename kept, in bytes.
pub const MAX_FILENAME_LEN: usize = 255;

const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Reduce a user-supplied filename to a safe ASCII name.
///
/// The name is NFKD-decomposed first so accented letters keep their base
/// letter. Path separators become word breaks, whitespace runs collapse to `_`,
/// anything outside `[A-Za-z0-9_.-]` is dropped and leading or trailing
/// `.`/`_` are trimmed. `"../../etc/passwd"` becomes `"etc_passwd"`.
/// A name that is empty after this is rejected.
pub fn sanitize_filename(raw: &str) -> Result<String, AppError> {
    let spaced: String = raw
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let mut name: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    name = name.trim_matches(|c| c == '.' || c == '_').to_string();

    if name.is_empty() {
        return Err(AppError::validation("Invalid filename"));
    }

    let stem = name.split('.').next().unwrap_or_default().to_ascii_uppercase();
    if WINDOWS_DEVICE_NAMES.contains(&stem.as_str()) {
        name.insert(0, '_');
    }

    // ASCII only past this point, so byte truncation stays on a char boundary.
    name.truncate(MAX_FILENAME_LEN);
    Ok(name)
}
