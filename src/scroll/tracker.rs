use log::{debug, trace, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use super::progress::{Geometry, ProgressFormula, ScrollState};
use crate::config;

/// Source of container/viewport measurements.
pub trait GeometryReader {
    /// `None` while the container is not mounted or the host can't measure.
    fn measure(&self) -> Option<Geometry>;
}

/// Measures the element behind a `NodeRef` against the browser window.
#[derive(Clone, PartialEq)]
pub struct DomGeometry {
    node: NodeRef,
}

impl DomGeometry {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl GeometryReader for DomGeometry {
    fn measure(&self) -> Option<Geometry> {
        let element = self.node.cast::<Element>()?;
        let rect = element.get_bounding_client_rect();
        let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
        Some(Geometry::new(rect.top(), rect.height(), viewport_height))
    }
}

/// Turns a measurement into the next `ScrollState`.
#[derive(Clone)]
pub struct ScrollTracker<R> {
    reader: R,
    formula: ProgressFormula,
    entry_count: usize,
}

impl<R: GeometryReader> ScrollTracker<R> {
    pub fn new(reader: R, formula: ProgressFormula, entry_count: usize) -> Self {
        Self {
            reader,
            formula,
            entry_count,
        }
    }

    /// Returns `None` when nothing could be measured; the caller keeps its
    /// previous state in that case.
    pub fn tick(&self) -> Option<ScrollState> {
        match self.reader.measure() {
            Some(geometry) => Some(ScrollState::compute(geometry, self.formula, self.entry_count)),
            None => {
                trace!("timeline container not measurable, skipping tick");
                None
            }
        }
    }
}

/// Window listeners that are removed again when the guard drops.
pub struct WindowListeners {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn Fn()>,
}

impl WindowListeners {
    pub fn attach(
        events: &'static [&'static str],
        handler: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        // built before registering so a failed registration still unwinds the earlier ones
        let listeners = Self {
            window,
            events,
            callback: Closure::<dyn Fn()>::new(handler),
        };
        for event in events {
            listeners
                .window
                .add_event_listener_with_callback(event, listeners.callback.as_ref().unchecked_ref())?;
        }
        Ok(listeners)
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        for event in self.events {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("failed to remove {} listener: {:?}", event, err);
            }
        }
    }
}

/// Tracks how far the element behind `node` has scrolled through the viewport.
///
/// Re-measures on every notification in `config::TRACKED_EVENTS` and once on
/// mount. Listeners live exactly as long as the calling component.
#[hook]
pub fn use_scroll_progress(node: NodeRef, entry_count: usize) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |(node, entry_count)| {
                let tracker = ScrollTracker::new(
                    DomGeometry::new(node.clone()),
                    config::progress_formula(),
                    *entry_count,
                );
                let update = move || {
                    if let Some(next) = tracker.tick() {
                        setter.set(next);
                    }
                };

                let listeners = match WindowListeners::attach(config::TRACKED_EVENTS, update.clone()) {
                    Ok(listeners) => {
                        debug!("timeline scroll tracking attached for {} entries", entry_count);
                        Some(listeners)
                    }
                    Err(err) => {
                        warn!("could not attach scroll tracking: {:?}", err);
                        None
                    }
                };
                // Initial measurement
                update();

                move || {
                    if listeners.is_some() {
                        debug!("timeline scroll tracking detached");
                    }
                    drop(listeners);
                }
            },
            (node, entry_count),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Hands out queued measurements, one per tick.
    struct Scripted(RefCell<VecDeque<Option<Geometry>>>);

    impl Scripted {
        fn new(ticks: Vec<Option<Geometry>>) -> Self {
            Self(RefCell::new(ticks.into()))
        }
    }

    impl GeometryReader for Scripted {
        fn measure(&self) -> Option<Geometry> {
            self.0.borrow_mut().pop_front().flatten()
        }
    }

    fn run(tracker: &ScrollTracker<Scripted>, ticks: usize) -> Vec<ScrollState> {
        let mut state = ScrollState::default();
        let mut published = Vec::new();
        for _ in 0..ticks {
            if let Some(next) = tracker.tick() {
                state = next;
            }
            published.push(state);
        }
        published
    }

    #[test]
    fn unmounted_container_skips_the_tick() {
        let tracker = ScrollTracker::new(Scripted::new(vec![None]), ProgressFormula::ViewportSpan, 6);
        assert_eq!(tracker.tick(), None);
    }

    #[test]
    fn skipped_tick_keeps_previous_state() {
        let reader = Scripted::new(vec![
            Some(Geometry::new(-100.0, 1000.0, 800.0)),
            None,
            Some(Geometry::new(-1000.0, 1000.0, 800.0)),
        ]);
        let tracker = ScrollTracker::new(reader, ProgressFormula::ViewportSpan, 6);
        let states = run(&tracker, 3);

        assert_eq!(states[0].active_index, 2);
        assert_eq!(states[1], states[0]);
        assert_eq!(states[2].progress, 1.0);
        assert_eq!(states[2].active_index, 5);
    }

    #[test]
    fn identical_geometry_publishes_identical_state() {
        let geometry = Geometry::new(250.0, 1400.0, 800.0);
        let tracker = ScrollTracker::new(
            Scripted::new(vec![Some(geometry), Some(geometry)]),
            ProgressFormula::ViewportSpan,
            6,
        );
        let states = run(&tracker, 2);
        assert_eq!(states[0], states[1]);
    }

    #[test]
    fn updates_follow_notification_order() {
        let tops = [800.0, 400.0, -100.0, -600.0, -100.0, 800.0];
        let reader = Scripted::new(
            tops.iter()
                .map(|&top| Some(Geometry::new(top, 1000.0, 800.0)))
                .collect(),
        );
        let tracker = ScrollTracker::new(reader, ProgressFormula::ViewportSpan, 6);
        let indices: Vec<usize> = run(&tracker, tops.len())
            .iter()
            .map(|state| state.active_index)
            .collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 2, 0]);
    }
}
