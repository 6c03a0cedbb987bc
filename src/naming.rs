use std::path::{MAIN_SEPARATOR, is_separator};

// Bytes that libretro replaces with '_' in thumbnail file names.
const UNSAFE_BYTES: &[u8] = b"&'!:/\\";

// Path separators are ASCII on every host, so multi-byte sequences never match.
fn is_separator_byte(byte: u8) -> bool {
    byte.is_ascii() && is_separator(byte as char)
}

/// Last element of `path` using the host's separator rules.
///
/// Trailing separators are ignored. An empty path yields `"."` and a path made
/// only of separators yields a single separator.
pub fn base_name_bytes(path: &[u8]) -> &[u8] {
    if path.is_empty() {
        return b".";
    }

    let end = match path.iter().rposition(|b| !is_separator_byte(*b)) {
        Some(idx) => idx + 1,
        None => return &path[..MAIN_SEPARATOR.len_utf8()],
    };
    let trimmed = &path[..end];

    match trimmed.iter().rposition(|b| is_separator_byte(*b)) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

pub fn base_name(path: &str) -> String {
    String::from_utf8_lossy(base_name_bytes(path.as_bytes())).into_owned()
}

/// Drop everything from the last '.' onwards.
pub fn strip_extension(name: &[u8]) -> &[u8] {
    match name.iter().rposition(|b| *b == b'.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Byte-level form of [`clean_rom_name`]; input that is not valid UTF-8 is
/// kept as-is apart from the ASCII edits.
pub fn clean_rom_name_bytes(filename: &[u8]) -> Vec<u8> {
    strip_extension(base_name_bytes(filename))
        .iter()
        .map(|b| if UNSAFE_BYTES.contains(b) { b'_' } else { *b })
        .collect()
}

/// Turn a ROM path into the game name libretro uses for thumbnails.
///
/// The directory prefix is removed with native path rules first, then the
/// extension, then each of `& ' ! : / \` is replaced by `_`. A separator that
/// is not native to the host is therefore left to the substitution step.
pub fn clean_rom_name(filename: &str) -> String {
    String::from_utf8_lossy(&clean_rom_name_bytes(filename.as_bytes())).into_owned()
}
