use std::io::Cursor;

use romthumb::config::Config;
use romthumb::game_console::{known_consoles, platform_name};
use romthumb::naming::clean_rom_name;
use romthumb::pipeline::process_lines;
use romthumb::thumbnail::thumbnail_url;
use romthumb::types::OutputFormat;

fn config(console: &str, art_type: &str) -> Config {
    Config {
        console: console.to_string(),
        art_type: art_type.to_string(),
        format: OutputFormat::Tsv,
        verbose: 0,
    }
}

fn run(config: &Config, input: &str) -> String {
    let mut out = Vec::new();
    process_lines(Cursor::new(input), &mut out, config).expect("process lines");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn every_console_code_resolves_into_the_url() {
    for (code, name) in known_consoles() {
        let url = thumbnail_url(code, "Named_Boxarts", "Game");
        let expected_segment = name.replace(' ', "+");
        assert_eq!(
            url,
            format!("https://thumbnails.libretro.com/{expected_segment}/Named_Boxarts/Game.png")
        );
        assert_eq!(platform_name(code), name);
    }
}

#[test]
fn sanitized_name_flows_into_the_last_segment() {
    let out = run(
        &config("SFC", "Named_Titles"),
        "/mnt/roms/snes/Kirby's Dream Land 3 (USA).sfc\n",
    );
    assert_eq!(
        out,
        "/mnt/roms/snes/Kirby's Dream Land 3 (USA).sfc\thttps://thumbnails.libretro.com/Nintendo+-+Super+Nintendo+Entertainment+System/Named_Titles/Kirby_s+Dream+Land+3+%28USA%29.png\n"
    );
}

#[test]
fn output_order_matches_input_order() {
    let input = "c.gba\nb.gba\n\n\na.gba\n";
    let out = run(&config("GBA", "Named_Boxarts"), input);
    let roms: Vec<&str> = out
        .lines()
        .map(|line| line.split('\t').next().unwrap_or_default())
        .collect();
    assert_eq!(roms, ["c.gba", "b.gba", "a.gba"]);
}

#[test]
fn sanitized_names_never_carry_unsafe_punctuation() {
    let names = [
        "Tom & Jerry (USA).nes",
        "Ms. Pac-Man!.md",
        "Disney's Aladdin.gg",
        "Q*bert: Qubes.sms",
    ];
    for name in names {
        let cleaned = clean_rom_name(name);
        for ch in ['&', '\'', '!', ':', '/', '\\'] {
            assert!(!cleaned.contains(ch), "{name:?} -> {cleaned:?}");
        }
    }
}
