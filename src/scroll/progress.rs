/// Position of the tracked container relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Top edge of the container relative to the viewport top. Negative once scrolled past.
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl Geometry {
    pub fn new(container_top: f64, container_height: f64, viewport_height: f64) -> Self {
        Self {
            container_top,
            container_height,
            viewport_height,
        }
    }

    fn is_finite(&self) -> bool {
        self.container_top.is_finite()
            && self.container_height.is_finite()
            && self.viewport_height.is_finite()
    }
}

/// How scroll position maps onto timeline progress.
///
/// The timeline has gone through three curves. `ViewportSpan` is the one the
/// site ships with; the others stay selectable from `config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProgressFormula {
    /// Starts when the container top enters from below, ends when its bottom
    /// leaves through the top: distance is `height + viewport`.
    #[default]
    ViewportSpan,
    /// Starts once the container top reaches the viewport top, ends when its
    /// bottom reaches the viewport bottom: distance is `height - viewport`.
    Overflow,
    /// Tracks the viewport midline: distance is `height - viewport / 2`.
    HalfViewport,
}

impl ProgressFormula {
    /// Parses the names accepted by `TIMELINE_PROGRESS_FORMULA`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "viewport-span" => Some(ProgressFormula::ViewportSpan),
            "overflow" => Some(ProgressFormula::Overflow),
            "half-viewport" => Some(ProgressFormula::HalfViewport),
            _ => None,
        }
    }

    pub fn progress(self, geometry: Geometry) -> f64 {
        let Geometry {
            container_top: top,
            container_height: height,
            viewport_height: viewport,
        } = geometry;

        match self {
            ProgressFormula::ViewportSpan => progress(top, height, viewport),
            // never divide by less than one pixel
            ProgressFormula::Overflow => ratio(geometry, (-top).max(0.0), (height - viewport).max(1.0)),
            ProgressFormula::HalfViewport => {
                ratio(geometry, (viewport / 2.0 - top).max(0.0), height - viewport / 2.0)
            }
        }
    }
}

fn ratio(geometry: Geometry, scrolled: f64, distance: f64) -> f64 {
    if !geometry.is_finite() || geometry.container_height <= 0.0 || distance <= 0.0 {
        return 0.0;
    }
    (scrolled / distance).clamp(0.0, 1.0)
}

/// Canonical progress mapping, clamped to `[0, 1]`.
///
/// 0 until the container top enters the viewport from below, 1 once its
/// bottom edge has left through the top.
pub fn progress(container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    let geometry = Geometry::new(container_top, container_height, viewport_height);
    ratio(
        geometry,
        (viewport_height - container_top).max(0.0),
        container_height + viewport_height,
    )
}

/// Highest entry considered reached for the given progress.
///
/// Always in `[0, entry_count - 1]`; an empty timeline reports 0.
pub fn active_index(progress: f64, entry_count: usize) -> usize {
    if entry_count == 0 {
        return 0;
    }
    let last = entry_count - 1;
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((progress * last as f64).floor() as usize).min(last)
}

/// Values handed to the timeline renderer each tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollState {
    pub progress: f64,
    pub active_index: usize,
}

impl ScrollState {
    pub fn compute(geometry: Geometry, formula: ProgressFormula, entry_count: usize) -> Self {
        let progress = formula.progress(geometry);
        Self {
            progress,
            active_index: active_index(progress, entry_count),
        }
    }

    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.active_index
    }

    /// Progress as a CSS percentage, e.g. for `height` or `top`.
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMULAS: [ProgressFormula; 3] = [
        ProgressFormula::ViewportSpan,
        ProgressFormula::Overflow,
        ProgressFormula::HalfViewport,
    ];

    #[test]
    fn progress_is_zero_before_container_enters() {
        assert_eq!(progress(800.0, 1000.0, 800.0), 0.0);
        assert_eq!(progress(2400.0, 1000.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_one_once_container_is_scrolled_past() {
        assert_eq!(progress(-1000.0, 1000.0, 800.0), 1.0);
        assert_eq!(progress(-5000.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn progress_midway() {
        // 900 of 1800 pixels travelled
        assert!((progress(-100.0, 1000.0, 800.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_container_reports_zero() {
        for formula in FORMULAS {
            assert_eq!(formula.progress(Geometry::new(-300.0, 0.0, 800.0)), 0.0);
        }
        assert_eq!(progress(-300.0, -5.0, 800.0), 0.0);
    }

    #[test]
    fn non_finite_geometry_reports_zero() {
        assert_eq!(progress(f64::NAN, 1000.0, 800.0), 0.0);
        assert_eq!(progress(0.0, f64::INFINITY, 800.0), 0.0);
    }

    #[test]
    fn progress_stays_in_unit_range() {
        for formula in FORMULAS {
            for height in [0.0, 1.0, 250.0, 799.0, 800.0, 1000.0, 5000.0] {
                for viewport in [1.0, 320.0, 800.0, 2000.0] {
                    for top in (-8000..=8000).step_by(125) {
                        let p = formula.progress(Geometry::new(top as f64, height, viewport));
                        assert!((0.0..=1.0).contains(&p), "{formula:?} {top} {height} {viewport} -> {p}");
                    }
                }
            }
        }
    }

    #[test]
    fn progress_grows_as_container_moves_up() {
        for formula in FORMULAS {
            for (height, viewport) in [(1000.0, 800.0), (300.0, 900.0), (4000.0, 700.0)] {
                let mut last = 0.0;
                // scrolling down moves the container top towards negative values
                for top in (-6000..=3000).rev().step_by(10) {
                    let p = formula.progress(Geometry::new(top as f64, height, viewport));
                    assert!(p >= last, "{formula:?} regressed at top={top}");
                    last = p;
                }
            }
        }
    }

    #[test]
    fn scrolling_back_up_retraces_the_same_values() {
        let tops: Vec<f64> = (-2000i32..=1000).step_by(50).map(f64::from).collect();
        let down: Vec<f64> = tops.iter().rev().map(|&t| progress(t, 1000.0, 800.0)).collect();
        let mut up: Vec<f64> = tops.iter().map(|&t| progress(t, 1000.0, 800.0)).collect();
        up.reverse();
        assert_eq!(down, up);
        assert!(up.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn overflow_formula_matches_viewport_pinned_curve() {
        let formula = ProgressFormula::Overflow;
        assert_eq!(formula.progress(Geometry::new(100.0, 1000.0, 800.0)), 0.0);
        assert!((formula.progress(Geometry::new(-100.0, 1000.0, 800.0)) - 0.5).abs() < 1e-12);
        assert_eq!(formula.progress(Geometry::new(-200.0, 1000.0, 800.0)), 1.0);
        // shorter than the viewport: one pixel floor instead of a negative span
        assert_eq!(formula.progress(Geometry::new(-1.0, 500.0, 800.0)), 1.0);
    }

    #[test]
    fn half_viewport_formula_tracks_midline() {
        let formula = ProgressFormula::HalfViewport;
        assert_eq!(formula.progress(Geometry::new(400.0, 1000.0, 800.0)), 0.0);
        assert!((formula.progress(Geometry::new(100.0, 1000.0, 800.0)) - 0.5).abs() < 1e-12);
        assert_eq!(formula.progress(Geometry::new(-200.0, 1000.0, 800.0)), 1.0);
        assert_eq!(formula.progress(Geometry::new(-200.0, 300.0, 800.0)), 0.0);
    }

    #[test]
    fn formula_names_parse() {
        assert_eq!(ProgressFormula::from_name("overflow"), Some(ProgressFormula::Overflow));
        assert_eq!(ProgressFormula::from_name(" Half-Viewport "), Some(ProgressFormula::HalfViewport));
        assert_eq!(ProgressFormula::from_name("viewport-span"), Some(ProgressFormula::ViewportSpan));
        assert_eq!(ProgressFormula::from_name("linear"), None);
    }

    #[test]
    fn active_index_endpoints() {
        for n in 1..=20 {
            assert_eq!(active_index(0.0, n), 0);
            assert_eq!(active_index(1.0, n), n - 1);
        }
    }

    #[test]
    fn active_index_for_six_entries_at_half() {
        assert_eq!(active_index(0.5, 6), 2);
    }

    #[test]
    fn active_index_is_monotonic_and_bounded() {
        for n in [1, 2, 6, 13] {
            let mut last = 0;
            for step in 0..=1000 {
                let idx = active_index(step as f64 / 1000.0, n);
                assert!(idx >= last);
                assert!(idx < n);
                last = idx;
            }
        }
    }

    #[test]
    fn active_index_clamps_out_of_range_progress() {
        assert_eq!(active_index(-0.3, 6), 0);
        assert_eq!(active_index(7.0, 6), 5);
        assert_eq!(active_index(f64::NAN, 6), 0);
        assert_eq!(active_index(0.7, 0), 0);
    }

    #[test]
    fn scroll_state_marks_reached_entries() {
        let state = ScrollState::compute(
            Geometry::new(-100.0, 1000.0, 800.0),
            ProgressFormula::ViewportSpan,
            6,
        );
        assert_eq!(state.active_index, 2);
        assert!(state.is_reached(0));
        assert!(state.is_reached(2));
        assert!(!state.is_reached(3));
        assert!((state.percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn compute_is_idempotent() {
        let geometry = Geometry::new(-321.5, 1480.0, 912.0);
        let a = ScrollState::compute(geometry, ProgressFormula::ViewportSpan, 6);
        let b = ScrollState::compute(geometry, ProgressFormula::ViewportSpan, 6);
        assert_eq!(a, b);
    }
}
