// src/models/session.rs

use serde::{Deserialize, Serialize};

use crate::{
    data,
    error::AppError,
    models::{guide::DocumentType, onboarding::OnboardingWizard, quiz::QuizEngine},
};

/// Application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Landing,
    Onboarding,
    Dashboard,
    Guide,
    Quiz,
    Faq,
}

/// User-driven navigation actions.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavAction {
    GetStarted,
    OpenDashboard,
    OpenGuide { document_type: DocumentType },
    OpenQuiz,
    OpenFaq,
    Back,
}

/// The single in-process session: current screen plus the ephemeral state of
/// the screen-local widgets. Durable state lives in the key-value store.
#[derive(Debug)]
pub struct Session {
    pub screen: Screen,

    /// Payload carried by guide navigation.
    pub selected_guide: Option<DocumentType>,

    pub wizard: OnboardingWizard,
    pub quiz: QuizEngine,

    /// Result of the most recent applied translation request.
    pub last_translation: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            selected_guide: None,
            wizard: OnboardingWizard::new(),
            quiz: QuizEngine::new(data::quiz_questions()),
            last_translation: None,
        }
    }

    /// The shortcut bar is shown once onboarding is complete, everywhere but
    /// the landing screen.
    pub fn nav_visible(&self, has_profile: bool) -> bool {
        has_profile && self.screen != Screen::Landing
    }

    /// Rejects actions that belong to another screen's flow.
    pub fn expect_screen(&self, screen: Screen) -> Result<(), AppError> {
        if self.screen != screen {
            return Err(AppError::Conflict(format!(
                "Action requires the {:?} screen, but the session is on {:?}",
                screen, self.screen
            )));
        }
        Ok(())
    }

    /// Applies a navigation action. `has_profile` reflects whether a completed
    /// profile is persisted; any transition that would land on the dashboard
    /// without one falls back to onboarding.
    pub fn navigate(&mut self, action: NavAction, has_profile: bool) -> Result<Screen, AppError> {
        let next = match (self.screen, action) {
            (Screen::Landing, NavAction::GetStarted) => Screen::Dashboard,
            (Screen::Dashboard | Screen::Faq, NavAction::OpenGuide { document_type }) => {
                self.selected_guide = Some(document_type);
                Screen::Guide
            }
            (Screen::Guide | Screen::Quiz | Screen::Faq, NavAction::Back) => Screen::Dashboard,
            (Screen::Dashboard, NavAction::OpenQuiz) => Screen::Quiz,
            (Screen::Dashboard, NavAction::OpenFaq) => Screen::Faq,
            // Shortcut bar actions, valid wherever the bar is visible.
            (_, NavAction::OpenDashboard) if self.nav_visible(has_profile) => Screen::Dashboard,
            (_, NavAction::OpenQuiz) if self.nav_visible(has_profile) => Screen::Quiz,
            (_, NavAction::OpenFaq) if self.nav_visible(has_profile) => Screen::Faq,
            (screen, action) => {
                return Err(AppError::Conflict(format!(
                    "Action {:?} does not apply to the {:?} screen",
                    action, screen
                )));
            }
        };

        let next = if next == Screen::Dashboard && !has_profile {
            Screen::Onboarding
        } else {
            next
        };

        self.enter(next);
        Ok(next)
    }

    /// Wizard completion transition (onboarding to dashboard).
    pub fn onboarding_completed(&mut self) {
        self.enter(Screen::Dashboard);
    }

    /// Screen-local state is ephemeral: (re)entering a screen resets its
    /// widgets, and the guide payload only survives on the guide screen.
    fn enter(&mut self, next: Screen) {
        match next {
            Screen::Onboarding => self.wizard = OnboardingWizard::new(),
            Screen::Quiz => self.quiz.reset(),
            _ => {}
        }
        if next != Screen::Guide {
            self.selected_guide = None;
        }
        self.screen = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::onboarding::Step1Input;

    #[test]
    fn get_started_without_a_profile_enters_onboarding() {
        let mut session = Session::new();
        let next = session.navigate(NavAction::GetStarted, false).unwrap();
        assert_eq!(next, Screen::Onboarding);
        assert_eq!(session.screen, Screen::Onboarding);
    }

    #[test]
    fn get_started_with_a_profile_enters_the_dashboard() {
        let mut session = Session::new();
        let next = session.navigate(NavAction::GetStarted, true).unwrap();
        assert_eq!(next, Screen::Dashboard);
    }

    #[test]
    fn guide_navigation_carries_the_document_payload() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, true).unwrap();
        session
            .navigate(
                NavAction::OpenGuide {
                    document_type: DocumentType::Pan,
                },
                true,
            )
            .unwrap();
        assert_eq!(session.screen, Screen::Guide);
        assert_eq!(session.selected_guide, Some(DocumentType::Pan));

        session.navigate(NavAction::Back, true).unwrap();
        assert_eq!(session.screen, Screen::Dashboard);
        assert_eq!(session.selected_guide, None);
    }

    #[test]
    fn faq_can_open_a_guide() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, true).unwrap();
        session.navigate(NavAction::OpenFaq, true).unwrap();
        let next = session
            .navigate(
                NavAction::OpenGuide {
                    document_type: DocumentType::Aadhaar,
                },
                true,
            )
            .unwrap();
        assert_eq!(next, Screen::Guide);
        assert_eq!(session.selected_guide, Some(DocumentType::Aadhaar));
    }

    #[test]
    fn undefined_transitions_are_conflicts() {
        let mut session = Session::new();
        // Nothing but get_started works from the landing screen without the
        // shortcut bar.
        assert!(session.navigate(NavAction::Back, false).is_err());
        assert!(session.navigate(NavAction::OpenQuiz, false).is_err());
        assert_eq!(session.screen, Screen::Landing);

        // The shortcut bar is hidden on landing even with a profile.
        assert!(session.navigate(NavAction::OpenQuiz, true).is_err());
    }

    #[test]
    fn shortcut_bar_requires_a_completed_profile() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, true).unwrap();
        session.navigate(NavAction::OpenFaq, true).unwrap();

        // Visible bar: jumping straight from FAQ to quiz works.
        let next = session.navigate(NavAction::OpenQuiz, true).unwrap();
        assert_eq!(next, Screen::Quiz);

        // Without a profile the same jump is rejected.
        let mut bare = Session::new();
        bare.navigate(NavAction::GetStarted, false).unwrap();
        assert!(bare.navigate(NavAction::OpenQuiz, false).is_err());
    }

    #[test]
    fn dashboard_guard_redirects_when_the_profile_disappeared() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, true).unwrap();
        session.navigate(NavAction::OpenQuiz, true).unwrap();

        // Persisted profile vanished between requests; back falls through to
        // onboarding instead of the dashboard.
        let next = session.navigate(NavAction::Back, false).unwrap();
        assert_eq!(next, Screen::Onboarding);
    }

    #[test]
    fn entering_onboarding_resets_the_wizard() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, false).unwrap();
        session
            .wizard
            .submit_step1(Step1Input {
                name: "Asha".to_string(),
            })
            .unwrap();
        assert_eq!(session.wizard.step(), 2);

        // Complete onboarding and open the quiz; then the persisted profile
        // disappears, so Back routes through the guard into a fresh wizard.
        session.onboarding_completed();
        session.navigate(NavAction::OpenQuiz, true).unwrap();
        let next = session.navigate(NavAction::Back, false).unwrap();
        assert_eq!(next, Screen::Onboarding);
        assert_eq!(session.wizard.step(), 1);
        assert!(session.wizard.form().name.is_empty());
    }

    #[test]
    fn entering_the_quiz_resets_the_engine() {
        let mut session = Session::new();
        session.navigate(NavAction::GetStarted, true).unwrap();
        session.navigate(NavAction::OpenQuiz, true).unwrap();
        session.quiz.select(1).unwrap();
        session.quiz.advance().unwrap();
        assert_eq!(session.quiz.current_index(), 1);

        session.navigate(NavAction::Back, true).unwrap();
        session.navigate(NavAction::OpenQuiz, true).unwrap();
        assert_eq!(session.quiz.current_index(), 0);
        assert_eq!(session.quiz.selected(), None);
    }

    #[test]
    fn nav_visibility_needs_profile_and_a_non_landing_screen() {
        let mut session = Session::new();
        assert!(!session.nav_visible(true));
        session.navigate(NavAction::GetStarted, true).unwrap();
        assert!(session.nav_visible(true));
        assert!(!session.nav_visible(false));
    }
}
