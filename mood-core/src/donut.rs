//! Donut (ring) chart geometry for multi-mood days.
//!
//! Maps a day's mood groups onto contiguous annulus arcs: first-seen
//! order, starting at the top (-90 deg in a coordinate system where 0 deg
//! is east and angles grow clockwise), proceeding clockwise with no gaps
//! or overlaps. Output is pure path data; interaction and placement are
//! the caller's concern.

use crate::event::MoodEvent;
use crate::style::MoodKind;

/// One annulus arc of the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub kind: MoodKind,
    /// Fill color from the kind's style table.
    pub color: &'static str,
    /// Rounded integer share of the day's records. Rounding may make the
    /// percents sum to 100 +/- 1; that is accepted, only the arc spans are
    /// corrected.
    pub percent: u32,
    /// Arc start in degrees (-90 = top).
    pub start_angle: f64,
    /// Angular span in degrees, clockwise.
    pub sweep: f64,
    /// SVG path data for the annulus segment.
    pub path: String,
}

/// A complete ring chart sized to one day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    /// Width and height of the square SVG viewport.
    pub size: f64,
    pub segments: Vec<DonutSegment>,
}

/// Where the ring starts: straight up.
const START_ANGLE: f64 = -90.0;
/// Inner and outer radii as fractions of the viewport size.
const INNER_RADIUS_FRACTION: f64 = 0.3;
const OUTER_RADIUS_FRACTION: f64 = 0.4;

/// Group moods by kind in first-seen order, with rounded percent shares.
pub fn mood_shares(moods: &[MoodEvent]) -> Vec<(MoodKind, u32)> {
    let mut order: Vec<MoodKind> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for mood in moods {
        match order.iter().position(|k| *k == mood.kind) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(mood.kind);
                counts.push(1);
            }
        }
    }

    let total = moods.len() as f64;
    order
        .into_iter()
        .zip(counts)
        .map(|(kind, count)| (kind, (100.0 * count as f64 / total).round() as u32))
        .collect()
}

/// Build the ring chart for a day's moods.
///
/// Arc spans are derived from the exact group fractions so they tile the
/// full 360 degrees; the last arc absorbs any floating-point residual at
/// the seam. The rounded `percent` on each segment is a display share and
/// is deliberately not re-normalized.
pub fn build_donut(moods: &[MoodEvent], diameter: f64) -> DonutChart {
    if moods.is_empty() {
        return DonutChart {
            size: diameter,
            segments: Vec::new(),
        };
    }

    let shares = mood_shares(moods);
    let total = moods.len() as f64;

    // recount per kind in the same first-seen order for exact spans
    let mut counts: Vec<usize> = vec![0; shares.len()];
    for mood in moods {
        if let Some(i) = shares.iter().position(|(k, _)| *k == mood.kind) {
            counts[i] += 1;
        }
    }

    let cx = diameter / 2.0;
    let cy = diameter / 2.0;
    let inner = diameter * INNER_RADIUS_FRACTION;
    let outer = diameter * OUTER_RADIUS_FRACTION;

    let last = shares.len() - 1;
    let mut current = START_ANGLE;
    let mut segments = Vec::with_capacity(shares.len());

    for (i, ((kind, percent), count)) in shares.into_iter().zip(counts).enumerate() {
        let sweep = if i == last {
            // the last arc closes the ring exactly
            START_ANGLE + 360.0 - current
        } else {
            count as f64 / total * 360.0
        };
        let path = annulus_path(cx, cy, inner, outer, current, current + sweep);
        segments.push(DonutSegment {
            kind,
            color: kind.style().color,
            percent,
            start_angle: current,
            sweep,
            path,
        });
        current += sweep;
    }

    DonutChart {
        size: diameter,
        segments,
    }
}

/// SVG path for an annulus segment between `start_deg` and `end_deg`.
///
/// Inner edge, radial line out, outer arc clockwise, radial line in,
/// inner arc counter-clockwise back to the start. The large-arc flag is
/// set when the span exceeds 180 degrees. A full-circle span degenerates
/// to a zero-length arc (start == end), so it is drawn as a closed ring
/// instead: two 180-degree arcs per edge, no radial seams.
fn annulus_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    if end_deg - start_deg >= 360.0 - 1e-9 {
        return full_ring_path(cx, cy, inner_radius, outer_radius, start_deg);
    }

    let start = start_deg.to_radians();
    let end = end_deg.to_radians();

    let x1 = cx + inner_radius * start.cos();
    let y1 = cy + inner_radius * start.sin();
    let x2 = cx + outer_radius * start.cos();
    let y2 = cy + outer_radius * start.sin();
    let x3 = cx + outer_radius * end.cos();
    let y3 = cy + outer_radius * end.sin();
    let x4 = cx + inner_radius * end.cos();
    let y4 = cy + inner_radius * end.sin();

    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    format!(
        "M {x1} {y1} L {x2} {y2} A {outer_radius} {outer_radius} 0 {large_arc} 1 {x3} {y3} \
         L {x4} {y4} A {inner_radius} {inner_radius} 0 {large_arc} 0 {x1} {y1} Z"
    )
}

/// Complete ring: outer circle clockwise, inner circle counter-clockwise,
/// each as two half arcs. Opposite winding punches the hole under the
/// default nonzero fill rule.
fn full_ring_path(cx: f64, cy: f64, inner_radius: f64, outer_radius: f64, start_deg: f64) -> String {
    let start = start_deg.to_radians();
    let mid = (start_deg + 180.0).to_radians();

    let ox1 = cx + outer_radius * start.cos();
    let oy1 = cy + outer_radius * start.sin();
    let ox2 = cx + outer_radius * mid.cos();
    let oy2 = cy + outer_radius * mid.sin();
    let ix1 = cx + inner_radius * start.cos();
    let iy1 = cy + inner_radius * start.sin();
    let ix2 = cx + inner_radius * mid.cos();
    let iy2 = cy + inner_radius * mid.sin();

    format!(
        "M {ox1} {oy1} A {outer_radius} {outer_radius} 0 1 1 {ox2} {oy2} \
         A {outer_radius} {outer_radius} 0 1 1 {ox1} {oy1} \
         M {ix1} {iy1} A {inner_radius} {inner_radius} 0 1 0 {ix2} {iy2} \
         A {inner_radius} {inner_radius} 0 1 0 {ix1} {iy1} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(kind: MoodKind, hour: u32) -> MoodEvent {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        MoodEvent {
            kind,
            custom_label: None,
            intensity: 5.0,
            date,
            timestamp: date.and_hms_opt(hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn shares_keep_first_seen_order() {
        let moods = vec![
            event(MoodKind::Sad, 8),
            event(MoodKind::Happy, 9),
            event(MoodKind::Sad, 10),
            event(MoodKind::Calm, 11),
        ];
        let shares = mood_shares(&moods);
        let kinds: Vec<MoodKind> = shares.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![MoodKind::Sad, MoodKind::Happy, MoodKind::Calm]);
    }

    #[test]
    fn shares_sum_within_one_of_hundred() {
        let moods = vec![
            event(MoodKind::Happy, 8),
            event(MoodKind::Happy, 9),
            event(MoodKind::Sad, 10),
        ];
        let total: u32 = mood_shares(&moods).iter().map(|(_, p)| p).sum();
        assert!((99..=101).contains(&total), "shares summed to {}", total);
    }

    #[test]
    fn two_thirds_happy_splits_240_and_120() {
        // [happy, happy, sad] -> happy 240 deg then sad 120 deg from the top
        let moods = vec![
            event(MoodKind::Happy, 8),
            event(MoodKind::Happy, 9),
            event(MoodKind::Sad, 10),
        ];
        let chart = build_donut(&moods, 48.0);
        assert_eq!(chart.segments.len(), 2);

        let happy = &chart.segments[0];
        assert_eq!(happy.kind, MoodKind::Happy);
        assert!((happy.start_angle - -90.0).abs() < 1e-9);
        assert!((happy.sweep - 240.0).abs() < 1e-9);
        assert_eq!(happy.percent, 67);

        let sad = &chart.segments[1];
        assert_eq!(sad.kind, MoodKind::Sad);
        assert!((sad.start_angle - 150.0).abs() < 1e-9);
        assert!((sad.sweep - 120.0).abs() < 1e-9);
        assert_eq!(sad.percent, 33);
    }

    #[test]
    fn arc_spans_always_sum_to_exactly_360() {
        let cases: Vec<Vec<MoodEvent>> = vec![
            vec![event(MoodKind::Happy, 8)],
            vec![event(MoodKind::Happy, 8), event(MoodKind::Sad, 9)],
            vec![
                event(MoodKind::Happy, 8),
                event(MoodKind::Sad, 9),
                event(MoodKind::Calm, 10),
            ],
            vec![
                event(MoodKind::Happy, 8),
                event(MoodKind::Happy, 9),
                event(MoodKind::Sad, 10),
                event(MoodKind::Calm, 11),
            ],
            vec![
                event(MoodKind::Happy, 8),
                event(MoodKind::Happy, 9),
                event(MoodKind::Happy, 10),
                event(MoodKind::Sad, 11),
                event(MoodKind::Calm, 12),
                event(MoodKind::Angry, 13),
                event(MoodKind::Anxious, 14),
            ],
        ];
        for moods in cases {
            let chart = build_donut(&moods, 48.0);
            let total: f64 = chart.segments.iter().map(|s| s.sweep).sum();
            assert!(
                (total - 360.0).abs() < 1e-9,
                "spans summed to {} for {} moods",
                total,
                moods.len()
            );
            // contiguous: each segment starts where the previous ended
            let mut expected_start = -90.0;
            for segment in &chart.segments {
                assert!((segment.start_angle - expected_start).abs() < 1e-9);
                expected_start += segment.sweep;
            }
        }
    }

    #[test]
    fn large_arc_flag_set_only_above_half_circle() {
        let half = annulus_path(24.0, 24.0, 14.4, 19.2, -90.0, 90.0);
        assert!(half.contains(" 0 0 1 "), "180 deg span must not set large-arc");

        let wide = annulus_path(24.0, 24.0, 14.4, 19.2, -90.0, 150.0);
        assert!(wide.contains(" 0 1 1 "), "240 deg span must set large-arc");
    }

    #[test]
    fn radii_follow_the_size() {
        let moods = vec![event(MoodKind::Happy, 8), event(MoodKind::Sad, 9)];
        let chart = build_donut(&moods, 60.0);
        assert!((chart.size - 60.0).abs() < 1e-9);
        // outer radius 0.4 * 60 = 24, inner 0.3 * 60 = 18
        assert!(chart.segments[0].path.contains("A 24 24"));
        assert!(chart.segments[0].path.contains("A 18 18"));
    }

    #[test]
    fn single_kind_day_draws_a_visible_full_ring() {
        // three happy check-ins: one 360 deg segment, drawn as a closed
        // ring rather than an arc from a point back to itself
        let moods = vec![
            event(MoodKind::Happy, 8),
            event(MoodKind::Happy, 9),
            event(MoodKind::Happy, 10),
        ];
        let chart = build_donut(&moods, 48.0);
        assert_eq!(chart.segments.len(), 1);

        let ring = &chart.segments[0];
        assert!((ring.sweep - 360.0).abs() < 1e-9);
        assert_eq!(ring.percent, 100);
        // two subpaths (outer and inner circles), no radial seam lines
        assert_eq!(ring.path.matches("M ").count(), 2);
        assert_eq!(ring.path.matches("A ").count(), 4);
        assert!(!ring.path.contains("L "));
    }

    #[test]
    fn build_is_deterministic() {
        let moods = vec![
            event(MoodKind::Happy, 8),
            event(MoodKind::Happy, 9),
            event(MoodKind::Sad, 10),
        ];
        let a = build_donut(&moods, 48.0);
        let b = build_donut(&moods, 48.0);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_moods_build_an_empty_chart() {
        let chart = build_donut(&[], 48.0);
        assert!(chart.segments.is_empty());
    }

    #[test]
    fn segment_colors_come_from_the_style_table() {
        let moods = vec![event(MoodKind::Happy, 8), event(MoodKind::Angry, 9)];
        let chart = build_donut(&moods, 48.0);
        assert_eq!(chart.segments[0].color, "#FCD34D");
        assert_eq!(chart.segments[1].color, "#F87171");
    }
}
