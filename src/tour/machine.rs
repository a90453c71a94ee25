use crate::store::{KeyStore, keys};

use super::layout::{Rect, Size, place_tooltip, spotlight};
use super::step::{Lang, TourStep, default_steps};

/// Where the walkthrough currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourState {
    Inactive,
    AtStep(usize),
}

/// Everything a renderer needs to draw one step; no DOM types, no side
/// effects (design split: state machine here, presentation elsewhere)
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub title: String,
    pub body: String,
    /// Tooltip top-left in CSS pixels
    pub tooltip: (f64, f64),
    /// Cut-out over the dimmed overlay; `None` dims the whole page
    pub spotlight: Option<Rect>,
    pub index: usize,
    pub total: usize,
    pub is_first: bool,
    pub is_last: bool,
}

/// The onboarding walkthrough state machine.
///
/// States are step indices plus `Inactive`; `next` past the last step and
/// `dismiss` both land in `Inactive` and persist the completion flag so the
/// tour does not auto-start again.
#[derive(Debug)]
pub struct Tour {
    steps: Vec<TourStep>,
    state: TourState,
    lang: Lang,
}

impl Tour {
    pub fn new(steps: Vec<TourStep>, lang: Lang) -> Self {
        Self {
            steps,
            state: TourState::Inactive,
            lang,
        }
    }

    pub fn with_default_steps(lang: Lang) -> Self {
        Self::new(default_steps(), lang)
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TourState::AtStep(_))
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    /// Whether the tour should launch on its own for this user
    pub fn should_auto_start(&self, store: &dyn KeyStore) -> bool {
        !self.steps.is_empty() && store.get(keys::TOUR_COMPLETED).as_deref() != Some("true")
    }

    /// Inactive -> step 0. No-op while already running or with no steps.
    pub fn start(&mut self) -> bool {
        if self.is_active() || self.steps.is_empty() {
            return false;
        }
        self.state = TourState::AtStep(0);
        true
    }

    /// Advance one step; finishing the last step completes the tour
    pub fn next(&mut self, store: &mut dyn KeyStore) {
        if let TourState::AtStep(i) = self.state {
            if i + 1 < self.steps.len() {
                self.state = TourState::AtStep(i + 1);
            } else {
                self.finish(store);
            }
        }
    }

    /// Step back, clamped at the first step
    pub fn prev(&mut self) {
        if let TourState::AtStep(i) = self.state
            && i > 0
        {
            self.state = TourState::AtStep(i - 1);
        }
    }

    /// Close the tour from any step; counts as completed
    pub fn dismiss(&mut self, store: &mut dyn KeyStore) {
        if self.is_active() {
            self.finish(store);
        }
    }

    fn finish(&mut self, store: &mut dyn KeyStore) {
        self.state = TourState::Inactive;
        store.set(keys::TOUR_COMPLETED, "true");
    }

    pub fn current_step(&self) -> Option<(usize, &TourStep)> {
        match self.state {
            TourState::AtStep(i) => self.steps.get(i).map(|s| (i, s)),
            TourState::Inactive => None,
        }
    }

    /// Pure view description of the current step.
    ///
    /// `resolve` maps an element selector to its on-screen rectangle, if the
    /// element exists. A missing element degrades to a centered tooltip with
    /// no spotlight; it never fails and never blocks progression.
    pub fn render<F>(&self, viewport: Size, tooltip_size: Size, resolve: F) -> Option<StepView>
    where
        F: Fn(&str) -> Option<Rect>,
    {
        let (index, step) = self.current_step()?;

        let target_rect = step.target.as_deref().and_then(&resolve);
        let tooltip = place_tooltip(target_rect, step.placement, tooltip_size, viewport);

        Some(StepView {
            title: step.title.get(self.lang).to_string(),
            body: step.body.get(self.lang).to_string(),
            tooltip,
            spotlight: target_rect.map(spotlight),
            index,
            total: self.steps.len(),
            is_first: index == 0,
            is_last: index + 1 == self.steps.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::tour::step::{Localized, Placement};

    fn two_steps() -> Vec<TourStep> {
        vec![
            TourStep::new(
                None,
                Localized::new("Привет", "Hello"),
                Localized::new("Первый шаг", "First step"),
                Placement::Center,
            ),
            TourStep::new(
                Some("#map"),
                Localized::new("Карта", "Map"),
                Localized::new("Второй шаг", "Second step"),
                Placement::Bottom,
            ),
        ]
    }

    #[test]
    fn test_start_from_inactive_only() {
        let mut tour = Tour::new(two_steps(), Lang::En);
        assert!(!tour.is_active());
        assert!(tour.start());
        assert_eq!(tour.state(), TourState::AtStep(0));
        // Second start while running is a no-op
        assert!(!tour.start());
        assert_eq!(tour.state(), TourState::AtStep(0));
    }

    #[test]
    fn test_next_past_last_completes() {
        let mut tour = Tour::new(two_steps(), Lang::En);
        let mut store = MemoryStore::new();
        tour.start();

        tour.next(&mut store);
        assert_eq!(tour.state(), TourState::AtStep(1));
        assert_eq!(store.get(keys::TOUR_COMPLETED), None);

        tour.next(&mut store);
        assert_eq!(tour.state(), TourState::Inactive);
        assert_eq!(store.get(keys::TOUR_COMPLETED), Some("true".to_string()));
        assert!(!tour.should_auto_start(&store));
    }

    #[test]
    fn test_prev_clamps_at_first_step() {
        let mut tour = Tour::new(two_steps(), Lang::En);
        tour.start();

        tour.prev();
        assert_eq!(tour.state(), TourState::AtStep(0));

        let mut store = MemoryStore::new();
        tour.next(&mut store);
        tour.prev();
        assert_eq!(tour.state(), TourState::AtStep(0));
    }

    #[test]
    fn test_dismiss_marks_completed() {
        let mut tour = Tour::new(two_steps(), Lang::Ru);
        let mut store = MemoryStore::new();
        assert!(tour.should_auto_start(&store));

        tour.start();
        tour.dismiss(&mut store);
        assert!(!tour.is_active());
        assert_eq!(store.get(keys::TOUR_COMPLETED), Some("true".to_string()));
    }

    #[test]
    fn test_dismiss_while_inactive_does_not_mark() {
        let mut tour = Tour::new(two_steps(), Lang::Ru);
        let mut store = MemoryStore::new();
        tour.dismiss(&mut store);
        assert_eq!(store.get(keys::TOUR_COMPLETED), None);
    }

    #[test]
    fn test_empty_tour_never_starts() {
        let mut tour = Tour::new(Vec::new(), Lang::En);
        let store = MemoryStore::new();
        assert!(!tour.should_auto_start(&store));
        assert!(!tour.start());
    }

    #[test]
    fn test_render_whole_page_step() {
        let mut tour = Tour::new(two_steps(), Lang::En);
        tour.start();

        let view = tour
            .render(Size::new(400.0, 800.0), Size::new(200.0, 100.0), |_| {
                panic!("whole-page step must not resolve a target")
            })
            .unwrap();

        assert_eq!(view.title, "Hello");
        assert_eq!(view.spotlight, None);
        assert_eq!(view.tooltip, (100.0, 350.0));
        assert!(view.is_first);
        assert!(!view.is_last);
        assert_eq!((view.index, view.total), (0, 2));
    }

    #[test]
    fn test_render_targeted_step_with_spotlight() {
        let mut tour = Tour::new(two_steps(), Lang::Ru);
        let mut store = MemoryStore::new();
        tour.start();
        tour.next(&mut store);

        let view = tour
            .render(Size::new(400.0, 800.0), Size::new(200.0, 100.0), |sel| {
                assert_eq!(sel, "#map");
                Some(Rect::new(100.0, 200.0, 100.0, 50.0))
            })
            .unwrap();

        assert_eq!(view.title, "Карта");
        assert_eq!(view.spotlight, Some(Rect::new(95.0, 195.0, 110.0, 60.0)));
        assert_eq!(view.tooltip, (50.0, 265.0));
        assert!(view.is_last);
    }

    #[test]
    fn test_render_missing_target_degrades_to_center() {
        let mut tour = Tour::new(two_steps(), Lang::En);
        let mut store = MemoryStore::new();
        tour.start();
        tour.next(&mut store);

        let view = tour
            .render(Size::new(400.0, 800.0), Size::new(200.0, 100.0), |_| None)
            .unwrap();

        assert_eq!(view.spotlight, None);
        assert_eq!(view.tooltip, (100.0, 350.0));
    }

    #[test]
    fn test_render_inactive_is_none() {
        let tour = Tour::new(two_steps(), Lang::En);
        assert!(
            tour.render(Size::new(400.0, 800.0), Size::new(200.0, 100.0), |_| None)
                .is_none()
        );
    }
}
