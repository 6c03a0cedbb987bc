use crate::config::Config;
use crate::game_console::platform_name;
use crate::naming::clean_rom_name_bytes;
use crate::types::ThumbnailRecord;
use crate::utils::query_escape;

pub const LIBRETRO_THUMBNAILS_URL: &str = "https://thumbnails.libretro.com";

/// Build the libretro thumbnail URL for an already sanitized game name.
///
/// The console code is resolved through the console table (unknown codes are
/// used verbatim) and each path segment is query-escaped on its own.
pub fn thumbnail_url<G: AsRef<[u8]> + ?Sized>(
    console: &str,
    art_type: &str,
    game_name: &G,
) -> String {
    format!(
        "{}/{}/{}/{}.png",
        LIBRETRO_THUMBNAILS_URL,
        query_escape(platform_name(console)),
        query_escape(art_type),
        query_escape(game_name)
    )
}

/// Build the record for one raw input line. The URL is escaped from the raw
/// bytes; `rom` and `name` are decoded lossily for display and JSON.
pub fn record_for_line(line: &[u8], config: &Config) -> ThumbnailRecord {
    let name = clean_rom_name_bytes(line);
    let url = thumbnail_url(&config.console, &config.art_type, &name);
    ThumbnailRecord {
        rom: String::from_utf8_lossy(line).into_owned(),
        name: String::from_utf8_lossy(&name).into_owned(),
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;

    fn config_for(console: &str) -> Config {
        Config {
            console: console.to_string(),
            art_type: "Named_Boxarts".to_string(),
            format: OutputFormat::Tsv,
            verbose: 0,
        }
    }

    #[test]
    fn builds_url_for_known_console() {
        assert_eq!(
            thumbnail_url("FC", "Named_Boxarts", "Super Mario Bros"),
            "https://thumbnails.libretro.com/Nintendo+-+Nintendo+Entertainment+System/Named_Boxarts/Super+Mario+Bros.png"
        );
    }

    #[test]
    fn unknown_console_is_used_verbatim() {
        assert_eq!(
            thumbnail_url("Sega - 32X", "Named_Snaps", "Doom"),
            "https://thumbnails.libretro.com/Sega+-+32X/Named_Snaps/Doom.png"
        );
    }

    #[test]
    fn escapes_each_segment() {
        assert_eq!(
            thumbnail_url("GB", "Named Titles", "Pokemon - Red Version (USA, Europe)"),
            "https://thumbnails.libretro.com/Nintendo+-+Game+Boy/Named+Titles/Pokemon+-+Red+Version+%28USA%2C+Europe%29.png"
        );
    }

    #[test]
    fn invalid_utf8_name_escapes_raw_bytes() {
        let record = record_for_line(b"Caf\xff.nes", &config_for("XYZ"));
        assert_eq!(
            record.url,
            "https://thumbnails.libretro.com/XYZ/Named_Boxarts/Caf%FF.png"
        );
        assert_eq!(record.name, "Caf\u{FFFD}");
    }

    #[test]
    fn record_keeps_original_line() {
        let record = record_for_line(
            b"roms/Zelda II: The Adventure of Link.nes",
            &config_for("FC"),
        );
        assert_eq!(record.rom, "roms/Zelda II: The Adventure of Link.nes");
        assert_eq!(record.name, "Zelda II_ The Adventure of Link");
        assert_eq!(
            record.url,
            "https://thumbnails.libretro.com/Nintendo+-+Nintendo+Entertainment+System/Named_Boxarts/Zelda+II_+The+Adventure+of+Link.png"
        );
    }
}
