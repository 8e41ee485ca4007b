use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::transitions::{Easing, TransitionConfig};
use crate::types::Display;

/// Snapshot of an element's transitionable state.
#[derive(Debug, Clone, Copy)]
struct ElementSnapshot {
    visible: bool,
    /// Last display the element had while visible.
    shown_display: Display,
}

/// A single active opacity fade.
#[derive(Debug, Clone)]
struct ActiveTransition {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
    /// Display painted while the element fades out.
    paint_display: Display,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        lerp(self.from, self.to, eased)
    }

    fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Manages fade state across frames.
///
/// Display changes are applied to the element tree immediately; this state
/// only tracks the cosmetic opacity that a renderer paints while an element
/// fades in or out.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Previous frame's visibility per element.
    snapshots: HashMap<String, ElementSnapshot>,
    /// Currently active fades, keyed by element id.
    active: HashMap<String, ActiveTransition>,
    /// Reduced motion flag - when true, fades complete instantly.
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, no fades are started.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Returns true if any fade is currently active.
    pub fn has_active_transitions(&self) -> bool {
        !self.active.is_empty()
    }

    /// Update animation state based on the current element tree.
    pub fn update(&mut self, root: &Element) {
        self.update_at(root, Instant::now());
    }

    /// Like [`update`](Self::update), sampled at an explicit instant.
    /// Detects display changes, starts new fades, and prunes completed ones.
    pub fn update_at(&mut self, root: &Element, now: Instant) {
        self.active.retain(|_, transition| !transition.is_done(now));
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        let id = &element.id;
        let prev = self.snapshots.get(id).copied();
        let visible = !element.is_hidden();
        let shown_display = match (visible, element.display, prev) {
            (true, Some(display), _) => display,
            (false, _, Some(prev)) => prev.shown_display,
            _ => Display::Block,
        };
        let current = ElementSnapshot {
            visible,
            shown_display,
        };

        if let Some(prev) = prev {
            self.check_and_start_fade(id, prev, current, element.transitions.opacity, now);
        }

        self.snapshots.insert(id.clone(), current);

        if let Content::Children(children) = &element.content {
            for child in children {
                self.update_element(child, now);
            }
        }
    }

    fn check_and_start_fade(
        &mut self,
        id: &str,
        prev: ElementSnapshot,
        current: ElementSnapshot,
        config: Option<TransitionConfig>,
        now: Instant,
    ) {
        let Some(config) = config else { return };
        let (prev_visible, curr_visible) = (prev.visible, current.visible);

        if prev_visible == curr_visible {
            return;
        }

        if self.reduced_motion {
            self.active.remove(id);
            return;
        }

        // A fade already running restarts from its current opacity
        let from = match self.active.get(id) {
            Some(existing) => existing.value_at(now),
            None => opacity_of(prev_visible),
        };
        let to = opacity_of(curr_visible);

        log::debug!(
            "[animation] Fade {} for {} ({:.2} -> {:.2} over {:?})",
            if curr_visible { "in" } else { "out" },
            id,
            from,
            to,
            config.duration
        );

        self.active.insert(
            id.to_string(),
            ActiveTransition {
                from,
                to,
                start: now,
                duration: config.duration,
                easing: config.easing,
                paint_display: current.shown_display,
            },
        );
    }

    /// Interpolated opacity for an element.
    /// Returns None if no fade is active for it.
    pub fn get_opacity(&self, element_id: &str) -> Option<f32> {
        self.get_opacity_at(element_id, Instant::now())
    }

    /// Like [`get_opacity`](Self::get_opacity), sampled at an explicit instant.
    pub fn get_opacity_at(&self, element_id: &str, now: Instant) -> Option<f32> {
        let transition = self.active.get(element_id)?;
        if transition.is_done(now) {
            return None;
        }
        Some(transition.value_at(now))
    }

    /// True while an element is hidden in the tree but still fading out.
    pub fn is_fading_out_at(&self, element_id: &str, now: Instant) -> bool {
        self.fading_out_display_at(element_id, now).is_some()
    }

    /// The display an element had before it was hidden, while it is still
    /// fading out. None once the fade ends or if the element is not fading out.
    pub fn fading_out_display_at(&self, element_id: &str, now: Instant) -> Option<Display> {
        self.active
            .get(element_id)
            .filter(|t| t.to < t.from && !t.is_done(now))
            .map(|t| t.paint_display)
    }

    /// Remove fades and snapshots for elements no longer in tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.snapshots.retain(|id, _| current_ids.contains(id));
        self.active.retain(|id, _| current_ids.contains(id));
    }
}

fn opacity_of(visible: bool) -> f32 {
    if visible {
        1.0
    } else {
        0.0
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_ids_recursive(child, ids);
        }
    }
}
