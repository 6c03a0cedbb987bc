use once_cell::sync::Lazy;
use std::collections::HashMap;

// Mapping from short console code to the libretro thumbnail folder name.
pub static CONSOLE_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    let pairs = [
        ("FC", "Nintendo - Nintendo Entertainment System"),
        ("SFC", "Nintendo - Super Nintendo Entertainment System"),
        ("MD", "Sega - Mega Drive - Genesis"),
        ("GB", "Nintendo - Game Boy"),
        ("GBC", "Nintendo - Game Boy Color"),
        ("GBA", "Nintendo - Game Boy Advance"),
        ("PS", "Sony - PlayStation"),
        ("PCE", "NEC - PC Engine - TurboGrafx 16"),
        ("NGP", "SNK - Neo Geo Pocket"),
        ("GG", "Sega - Game Gear"),
        ("SMS", "Sega - Master System - Mark III"),
        ("WS", "Bandai - WonderSwan"),
        ("LNX", "Atari - Lynx"),
        ("POKE", "Nintendo - Pokemon Mini"),
    ];

    for (k, v) in pairs {
        m.insert(k, v);
    }
    m
});

/// Resolve a console code to its libretro platform name.
///
/// Lookups are case-sensitive. Unknown codes are returned unchanged so callers
/// can pass a full platform name straight through.
pub fn platform_name(code: &str) -> &str {
    CONSOLE_NAMES.get(code).copied().unwrap_or(code)
}

pub fn is_known_console(code: &str) -> bool {
    CONSOLE_NAMES.contains_key(code)
}

/// All known `(code, platform name)` pairs, sorted by code.
pub fn known_consoles() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = CONSOLE_NAMES.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_unstable_by_key(|(code, _)| *code);
    pairs
}
