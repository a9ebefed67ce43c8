//! Application state definitions
//!
//! Contains the wizard screen machine and the `AppState` that owns all
//! session data: the quiz, the completed profile, the product selection,
//! and the derived routine.

use crate::catalog::{self, Product};
use crate::profile::SkinProfile;
use crate::quiz::QuizState;
use crate::routine::Routine;
use crate::selection::Selection;

/// Wizard screen for the analysis workflow.
///
/// The flow progresses through these screens linearly. Screens cannot be
/// skipped, and there is no backward transition between screens - only the
/// quiz moves backwards, within the Analysis screen.
///
/// # State Transitions
///
/// ```text
/// Welcome -> Analysis -> Results -> Recommendations -> Routine -> Final
/// ```
///
/// # Invariants
///
/// - Cannot reach `Results` or later without a completed profile
/// - Cannot reach `Routine` without a non-empty selection
/// - Restarting from `Final` clears all session data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Introduction screen.
    #[default]
    Welcome,
    /// The six-question skin analysis quiz.
    Analysis,
    /// Skin type summary and care tips derived from the quiz.
    Results,
    /// Recommended products with toggle selection.
    Recommendations,
    /// Auto-organized morning/evening routine.
    Routine,
    /// Session summary with selected products and totals.
    Final,
}

impl Screen {
    /// Get the next screen in the wizard sequence.
    ///
    /// Returns `None` at the final screen; restarting is a reset, not a
    /// transition.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Analysis),
            Self::Analysis => Some(Self::Results),
            Self::Results => Some(Self::Recommendations),
            Self::Recommendations => Some(Self::Routine),
            Self::Routine => Some(Self::Final),
            Self::Final => None,
        }
    }

    /// Display title for this screen.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Skin Analysis",
            Self::Analysis => "Skin Analysis Quiz",
            Self::Results => "Your Skin Profile",
            Self::Recommendations => "Recommended for You",
            Self::Routine => "Your Personalized Routine",
            Self::Final => "Routine Ready",
        }
    }

    /// Step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::Welcome => 1,
            Self::Analysis => 2,
            Self::Results => 3,
            Self::Recommendations => 4,
            Self::Routine => 5,
            Self::Final => 6,
        }
    }

    /// Total number of wizard steps.
    pub const TOTAL_STEPS: usize = 6;
}

/// Main application state.
///
/// All session data lives here, owned by the single-threaded event loop.
/// Each key event performs one atomic transition; the screen callbacks
/// below are the only ways the wizard moves forward.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current wizard screen.
    pub screen: Screen,
    /// Quiz engine state for the Analysis screen.
    pub quiz: QuizState,
    /// Completed profile; set once by the quiz, cleared on restart.
    pub profile: Option<SkinProfile>,
    /// Recommendation list cached when the profile is completed.
    pub recommendations: Vec<Product>,
    /// Products the user has toggled on.
    pub selection: Selection,
    /// Derived routine, recomputed when the selection is confirmed.
    pub routine: Routine,
    /// Highlighted option on the quiz screen.
    pub option_cursor: usize,
    /// Highlighted product on the recommendations screen.
    pub product_cursor: usize,
    /// Status message for user feedback.
    pub status_message: String,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Welcome,
            quiz: QuizState::new(),
            profile: None,
            recommendations: Vec::new(),
            selection: Selection::new(),
            routine: Routine::default(),
            option_cursor: 0,
            product_cursor: 0,
            status_message: "Welcome to dermtui".to_string(),
            help_visible: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Welcome screen confirmed: start the quiz.
    pub fn on_start(&mut self) {
        if self.screen == Screen::Welcome {
            self.screen = Screen::Analysis;
            self.status_message = "Answer each question, then press Enter".to_string();
        }
    }

    /// Quiz finished: hold the profile, compute recommendations, show results.
    pub fn on_analysis_complete(&mut self, profile: SkinProfile) {
        if self.screen != Screen::Analysis {
            return;
        }
        self.recommendations = catalog::recommend(&profile);
        self.profile = Some(profile);
        self.product_cursor = 0;
        self.screen = Screen::Results;
        self.status_message = "Analysis complete".to_string();
    }

    /// Results screen confirmed: show the recommendation list.
    pub fn on_continue_from_results(&mut self) {
        if self.screen == Screen::Results && self.profile.is_some() {
            self.screen = Screen::Recommendations;
            self.status_message = "Toggle products with Space, confirm with Enter".to_string();
        }
    }

    /// Selection confirmed: partition it into the routine.
    ///
    /// Inert while the selection is empty; the user must pick at least one
    /// product to continue.
    pub fn on_products_selected(&mut self) {
        if self.screen != Screen::Recommendations {
            return;
        }
        if self.selection.is_empty() {
            self.status_message = "Select at least one product to continue".to_string();
            return;
        }
        self.routine = Routine::partition(&self.selection);
        self.screen = Screen::Routine;
        self.status_message =
            format!("{} products organized into your routine", self.selection.len());
    }

    /// Routine reviewed: show the final summary.
    pub fn on_routine_complete(&mut self) {
        if self.screen == Screen::Routine {
            self.screen = Screen::Final;
            self.status_message = "Your skincare journey starts now".to_string();
        }
    }

    /// Start over: clear the profile, selection, routine, and quiz.
    pub fn on_restart(&mut self) {
        if self.screen == Screen::Final {
            *self = Self::default();
        }
    }
}
