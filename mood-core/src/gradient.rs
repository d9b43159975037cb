//! Intensity-to-gradient mapping for heavily-logged days.

use crate::style::MoodKind;

/// Opacity range the normalized intensity maps into.
const MIN_OPACITY: f64 = 0.2;
const OPACITY_SPAN: f64 = 0.6;

/// CSS background for an aggregated day cell.
///
/// Pure function: normalizes `avg_intensity` (0..=10) to `t` in [0,1],
/// maps it to an opacity in [0.2, 0.8], and returns a two-stop diagonal
/// gradient from the kind's base color at that opacity down to half of it.
/// Higher intensity never produces lower opacity.
pub fn intensity_gradient(kind: MoodKind, avg_intensity: f64) -> String {
    let t = (avg_intensity / 10.0).clamp(0.0, 1.0);
    let opacity = MIN_OPACITY + OPACITY_SPAN * t;
    let color = kind.style().color;
    format!(
        "linear-gradient(135deg, {color}{:02x}, {color}{:02x})",
        alpha_byte(opacity),
        alpha_byte(opacity * 0.5),
    )
}

/// Opacity the gradient's first stop uses, exposed for display (the
/// aggregated cell shows a rounded intensity tag next to the gradient).
pub fn intensity_opacity(avg_intensity: f64) -> f64 {
    let t = (avg_intensity / 10.0).clamp(0.0, 1.0);
    MIN_OPACITY + OPACITY_SPAN * t
}

fn alpha_byte(opacity: f64) -> u8 {
    (opacity * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_eight_maps_to_opacity_68() {
        // 0.2 + 0.6 * 0.8 = 0.68
        assert!((intensity_opacity(8.0) - 0.68).abs() < 1e-9);
        let gradient = intensity_gradient(MoodKind::Happy, 8.0);
        // 0.68 * 255 = 173.4 -> 0xad; half stop 0.34 * 255 = 86.7 -> 0x57
        assert_eq!(
            gradient,
            "linear-gradient(135deg, #FCD34Dad, #FCD34D57)"
        );
    }

    #[test]
    fn opacity_is_monotonic_in_intensity() {
        let mut previous = -1.0;
        for step in 0..=100 {
            let intensity = step as f64 / 10.0;
            let opacity = intensity_opacity(intensity);
            assert!(
                opacity >= previous,
                "opacity dropped at intensity {}",
                intensity
            );
            previous = opacity;
        }
    }

    #[test]
    fn opacity_stays_in_range() {
        assert!((intensity_opacity(0.0) - 0.2).abs() < 1e-9);
        assert!((intensity_opacity(10.0) - 0.8).abs() < 1e-9);
        // inputs are bounded by construction, but clamping holds anyway
        assert!((intensity_opacity(-3.0) - 0.2).abs() < 1e-9);
        assert!((intensity_opacity(25.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn gradient_is_pure() {
        let a = intensity_gradient(MoodKind::Sad, 4.5);
        let b = intensity_gradient(MoodKind::Sad, 4.5);
        assert_eq!(a, b);
    }

    #[test]
    fn gradient_uses_the_kind_color() {
        let gradient = intensity_gradient(MoodKind::Angry, 5.0);
        assert!(gradient.contains("#F87171"));
        let gradient = intensity_gradient(MoodKind::from_tag("unknown_xyz"), 5.0);
        assert!(gradient.contains("#86EFAC"), "unknown kind uses custom color");
    }
}
