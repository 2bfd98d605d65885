//! Library-level tests for conversion, harmony and palette building.

use std::collections::HashSet;

use hueforge::models::{ColorError, ColorFormat, HarmonyRule, Hsl, Palette, RgbColor};
use hueforge::services::{harmony, random, PaletteBuilder, PaletteSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hex(s: &str) -> RgbColor {
    RgbColor::from_hex(s).expect("valid hex")
}

#[test]
fn test_complementary_red_hue() {
    let colors = harmony::complementary(hex("#ff0000"));
    assert_eq!(colors[1].to_hsl().h, 180);
}

#[test]
fn test_analogous_wraps_across_zero() {
    // Hue 10: neighbours at 340 and 40
    let base = RgbColor::from_hsl(Hsl::new(10, 100, 50));
    let hues: Vec<u16> = harmony::analogous(base)
        .iter()
        .map(|c| c.to_hsl().h)
        .collect();
    assert_eq!(hues.len(), 3);
    assert_eq!(hues[1], base.to_hsl().h);
    assert!(hues[0].abs_diff(340) <= 1, "{hues:?}");
    assert!(hues[2].abs_diff(40) <= 1, "{hues:?}");
}

#[test]
fn test_builder_palettes_are_distinct_and_sized() {
    let mut rng = StdRng::seed_from_u64(2024);
    let builder = PaletteBuilder::default();

    for rule in HarmonyRule::ALL {
        for count in 1..=12 {
            let palette = builder.build_palette(&mut rng, rule, count).unwrap();
            assert_eq!(palette.len(), count);
            let unique: HashSet<_> = palette.colors().iter().collect();
            assert_eq!(unique.len(), count, "{rule}/{count}");
        }
    }
}

#[test]
fn test_builder_rgb_output_matches_hex() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    let builder = PaletteBuilder::default();

    let hex_out = builder
        .build(&mut a, HarmonyRule::Analogous, 6, ColorFormat::Hex)
        .unwrap();
    let rgb_out = builder
        .build(&mut b, HarmonyRule::Analogous, 6, ColorFormat::Rgb)
        .unwrap();

    let reformatted = Palette::from_hex_strings(hex_out.as_slice())
        .unwrap()
        .render(ColorFormat::Rgb);
    assert_eq!(reformatted, rgb_out);
}

#[test]
fn test_exhaustion_is_reported() {
    let mut rng = StdRng::seed_from_u64(5);
    let err = PaletteBuilder::new(2)
        .build_palette(&mut rng, HarmonyRule::Single, 3)
        .unwrap_err();
    assert!(matches!(
        err,
        ColorError::PaletteGenerationExhausted {
            attempts: 2,
            collected: 2,
            requested: 3
        }
    ));
}

#[test]
fn test_session_format_switch_does_not_regenerate() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut session = PaletteSession::new(PaletteBuilder::default(), ColorFormat::Rgb);
    session
        .generate(&mut rng, HarmonyRule::Monochromatic, 4)
        .unwrap();
    let stored = session.current().cloned().unwrap();

    session.set_format(ColorFormat::Hex);
    session.set_format(ColorFormat::Rgb);
    assert_eq!(session.current(), Some(&stored));
    assert_eq!(session.render().unwrap(), stored.render(ColorFormat::Rgb));
}

#[test]
fn test_random_hex_strings_parse() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..200 {
        let s = random::generate(&mut rng, ColorFormat::Hex);
        let color = hex(&s);
        assert_eq!(color.to_hex(), s);
    }
}
