//! SVG rendering of a donut chart built by `mood_core::donut`.

use dioxus::prelude::*;
use mood_core::donut::DonutChart;

/// Props for DonutSvg
#[derive(Props, Clone, PartialEq)]
pub struct DonutSvgProps {
    /// Precomputed ring geometry (paths, colors, spans).
    pub chart: DonutChart,
}

/// Draws the ring. Carries no event handlers; interaction belongs to the
/// surrounding day cell.
#[component]
pub fn DonutSvg(props: DonutSvgProps) -> Element {
    let size = props.chart.size;
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 {size} {size}",
            for segment in props.chart.segments.iter() {
                path {
                    d: "{segment.path}",
                    fill: "{segment.color}",
                    stroke: "white",
                    stroke_width: "1",
                    opacity: "0.8",
                }
            }
        }
    }
}
