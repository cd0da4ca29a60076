// src/wizard.rs
//! Step wizard: a clamped index over a fixed, non-empty list of tutorial steps.
//!
//! Navigation never wraps and never fails. Out-of-range jumps are clamped to
//! the nearest valid step.

use std::rc::Rc;

use crate::content::{PageContent, TutorialStep};

#[derive(Debug, Clone, PartialEq)]
pub struct StepWizard {
    steps: Rc<[TutorialStep]>,
    current: usize,
}

impl Default for StepWizard {
    /// Built-in tutorial, which is never empty.
    fn default() -> Self {
        Self {
            steps: PageContent::default().steps.into(),
            current: 0,
        }
    }
}

impl StepWizard {
    /// Starts at the first step. An empty list has no valid index, so it is rejected.
    pub fn new(steps: Rc<[TutorialStep]>) -> Result<Self, String> {
        if steps.is_empty() {
            return Err("step wizard needs at least one step".to_string());
        }
        Ok(Self { steps, current: 0 })
    }

    fn last(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.last());
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1).min(self.last());
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn current(&self) -> &TutorialStep {
        &self.steps[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last()
    }

    pub fn steps(&self) -> &[TutorialStep] {
        &self.steps
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.current + 1, self.steps.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Icon;
    use pretty_assertions::assert_eq;

    fn steps(n: usize) -> Rc<[TutorialStep]> {
        (0..n)
            .map(|i| TutorialStep {
                title: format!("step {i}"),
                description: String::new(),
                icon: Icon::Code,
                details: vec![],
            })
            .collect()
    }

    fn six() -> StepWizard {
        StepWizard::new(PageContent::default().steps.into()).unwrap()
    }

    #[test]
    fn starts_at_first_step() {
        let w = six();
        assert_eq!(w.index(), 0);
        assert!(w.is_first());
        assert!(!w.is_last());
        assert_eq!(w.current().title, "Analyze Your Static Project");
        assert_eq!(w.progress_label(), "Step 1 of 6");
    }

    #[test]
    fn default_wizard_uses_builtin_steps() {
        assert_eq!(StepWizard::default(), six());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(StepWizard::new(steps(0)).is_err());
    }

    #[test]
    fn walk_forward_and_back_clamps_at_both_ends() {
        let mut w = six();
        for _ in 0..5 {
            w.next();
        }
        assert_eq!(w.index(), 5);
        assert!(w.is_last());
        w.next();
        assert_eq!(w.index(), 5);

        for _ in 0..5 {
            w.previous();
        }
        assert_eq!(w.index(), 0);
        w.previous();
        assert_eq!(w.index(), 0);
    }

    #[test]
    fn go_to_jumps_from_any_start() {
        let original = PageContent::default().steps;
        for start in 0..6 {
            let mut w = six();
            w.go_to(start);
            w.go_to(3);
            assert_eq!(w.index(), 3);
            assert_eq!(w.current(), &original[3]);
        }
    }

    #[test]
    fn go_to_out_of_range_clamps_to_last() {
        let mut w = six();
        w.go_to(6);
        assert_eq!(w.index(), 5);
        w.go_to(usize::MAX);
        assert_eq!(w.index(), 5);
    }

    #[test]
    fn single_step_is_first_and_last() {
        let mut w = StepWizard::new(steps(1)).unwrap();
        assert!(w.is_first() && w.is_last());
        w.next();
        w.previous();
        assert_eq!(w.index(), 0);
    }
}
