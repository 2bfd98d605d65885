//! Harmony derivation in HSL space.
//!
//! Every function takes a base color and returns an ordered set of related
//! colors. The base itself is returned untouched; derived colors go through
//! an integer HSL round trip and may differ from an exact rotation by
//! rounding noise.

use crate::constants::{
    ANALOGOUS_SPREAD, DEFAULT_MONOCHROMATIC_STEPS, MAX_MONOCHROMATIC_STEPS,
    MONOCHROMATIC_MAX_LIGHTNESS, MONOCHROMATIC_MIN_LIGHTNESS,
};
use crate::models::{ColorError, ColorResult, HarmonyRule, Hsl, RgbColor};

fn rotated(hsl: Hsl, degrees: i32) -> RgbColor {
    RgbColor::from_hsl(hsl.rotate(degrees))
}

/// `[base, hue + 180]`.
#[must_use]
pub fn complementary(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    vec![base, rotated(hsl, 180)]
}

/// `[hue - 30, base, hue + 30]`, in ascending hue order.
#[must_use]
pub fn analogous(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    vec![
        rotated(hsl, -ANALOGOUS_SPREAD),
        base,
        rotated(hsl, ANALOGOUS_SPREAD),
    ]
}

/// `[base, hue + 120, hue + 240]`.
#[must_use]
pub fn triadic(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    vec![base, rotated(hsl, 120), rotated(hsl, 240)]
}

/// Lightness for step `index` of `steps`, spread evenly over the band.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn step_lightness(index: usize, steps: usize) -> u8 {
    let min = f64::from(MONOCHROMATIC_MIN_LIGHTNESS);
    let span = f64::from(MONOCHROMATIC_MAX_LIGHTNESS - MONOCHROMATIC_MIN_LIGHTNESS);
    (min + span * index as f64 / (steps - 1) as f64).round() as u8
}

/// `count` colors sharing the base hue and saturation, lightness 15% to 85%.
///
/// A single step keeps the base lightness.
///
/// # Errors
///
/// Returns [`ColorError::InvalidCount`] when `count` is zero or larger than
/// [`MAX_MONOCHROMATIC_STEPS`], past which rounded lightness values repeat.
pub fn monochromatic(base: RgbColor, count: usize) -> ColorResult<Vec<RgbColor>> {
    if count == 0 {
        return Err(ColorError::invalid_count(count, "at least one color is required"));
    }
    if count > MAX_MONOCHROMATIC_STEPS {
        return Err(ColorError::invalid_count(
            count,
            format!("monochromatic palettes hold at most {MAX_MONOCHROMATIC_STEPS} distinct lightness steps"),
        ));
    }

    Ok(lightness_steps(base.to_hsl(), count))
}

/// Spreads `count` lightness steps of `hsl` over the band. `count` must be in
/// `1..=MAX_MONOCHROMATIC_STEPS`.
fn lightness_steps(hsl: Hsl, count: usize) -> Vec<RgbColor> {
    if count == 1 {
        return vec![RgbColor::from_hsl(hsl)];
    }

    (0..count)
        .map(|i| RgbColor::from_hsl(hsl.with_lightness(step_lightness(i, count))))
        .collect()
}

/// Applies `rule` to `base` with its natural set size.
///
/// Monochromatic uses [`DEFAULT_MONOCHROMATIC_STEPS`]; `Single` returns the
/// base alone.
#[must_use]
pub fn derive(rule: HarmonyRule, base: RgbColor) -> Vec<RgbColor> {
    match rule {
        HarmonyRule::Complementary => complementary(base),
        HarmonyRule::Analogous => analogous(base),
        HarmonyRule::Triadic => triadic(base),
        HarmonyRule::Monochromatic => lightness_steps(base.to_hsl(), DEFAULT_MONOCHROMATIC_STEPS),
        HarmonyRule::Single => vec![base],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b);
        d.min(360 - d)
    }

    #[test]
    fn test_complementary_of_red_is_cyan_hue() {
        let colors = complementary(RgbColor::from_hex("#ff0000").unwrap());
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].to_hex(), "#ff0000");
        assert_eq!(colors[1].to_hsl().h, 180);
        assert_eq!(colors[1].to_hex(), "#00ffff");
    }

    #[test]
    fn test_analogous_hues() {
        let base = RgbColor::from_hex("#3366cc").unwrap();
        let base_hue = base.to_hsl().h;
        let colors = analogous(base);

        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], base);
        assert!(hue_distance(colors[0].to_hsl().h, base_hue - 30) <= 1);
        assert!(hue_distance(colors[2].to_hsl().h, base_hue + 30) <= 1);
    }

    #[test]
    fn test_analogous_wraps_below_zero() {
        let colors = analogous(RgbColor::from_hex("#ff0000").unwrap());
        assert_eq!(colors[0].to_hsl().h, 330);
        assert_eq!(colors[2].to_hsl().h, 30);
    }

    #[test]
    fn test_triadic_hues() {
        let colors = triadic(RgbColor::from_hex("#ff0000").unwrap());
        assert_eq!(colors.len(), 3);
        let hues: Vec<u16> = colors.iter().map(|c| c.to_hsl().h).collect();
        assert_eq!(hues, vec![0, 120, 240]);
        assert_eq!(colors[1].to_hex(), "#00ff00");
        assert_eq!(colors[2].to_hex(), "#0000ff");
    }

    #[test]
    fn test_monochromatic_five_steps() {
        let base = RgbColor::from_hex("#3366cc").unwrap();
        let base_hsl = base.to_hsl();
        let colors = monochromatic(base, 5).unwrap();
        assert_eq!(colors.len(), 5);

        let expected_lightness = [15u8, 33, 50, 68, 85];
        for (color, expected) in colors.iter().zip(expected_lightness) {
            let hsl = color.to_hsl();
            assert!(hue_distance(hsl.h, base_hsl.h) <= 2, "hue drifted: {hsl}");
            assert!(hsl.s.abs_diff(base_hsl.s) <= 2, "saturation drifted: {hsl}");
            assert!(hsl.l.abs_diff(expected) <= 1, "lightness off: {hsl}");
        }
    }

    #[test]
    fn test_step_lightness_endpoints() {
        assert_eq!(step_lightness(0, 2), 15);
        assert_eq!(step_lightness(1, 2), 85);
        assert_eq!(step_lightness(1, 5), 33);
        assert_eq!(step_lightness(70, 71), 85);
    }

    #[test]
    fn test_monochromatic_single_step_keeps_lightness() {
        let base = RgbColor::from_hex("#3366cc").unwrap();
        let colors = monochromatic(base, 1).unwrap();
        assert_eq!(colors, vec![base]);
    }

    #[test]
    fn test_monochromatic_count_bounds() {
        let base = RgbColor::from_hex("#3366cc").unwrap();
        assert!(matches!(
            monochromatic(base, 0),
            Err(ColorError::InvalidCount { count: 0, .. })
        ));
        assert!(monochromatic(base, MAX_MONOCHROMATIC_STEPS + 1).is_err());

        let widest = monochromatic(base, MAX_MONOCHROMATIC_STEPS).unwrap();
        let mut unique = widest.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), MAX_MONOCHROMATIC_STEPS);
    }

    #[test]
    fn test_derive_dispatch() {
        let base = RgbColor::from_hex("#3366cc").unwrap();
        assert_eq!(derive(HarmonyRule::Complementary, base).len(), 2);
        assert_eq!(derive(HarmonyRule::Analogous, base).len(), 3);
        assert_eq!(derive(HarmonyRule::Triadic, base).len(), 3);
        assert_eq!(
            derive(HarmonyRule::Monochromatic, base).len(),
            DEFAULT_MONOCHROMATIC_STEPS
        );
        assert_eq!(derive(HarmonyRule::Single, base), vec![base]);
    }

    #[test]
    fn test_derive_monochromatic_matches_default_steps() {
        for hex in ["#3366cc", "#000000", "#ffffff"] {
            let base = RgbColor::from_hex(hex).unwrap();
            assert_eq!(
                derive(HarmonyRule::Monochromatic, base),
                monochromatic(base, DEFAULT_MONOCHROMATIC_STEPS).unwrap(),
                "{hex}"
            );
        }
    }
}
