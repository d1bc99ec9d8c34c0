//! The recipe lookup view: its state and the controller that drives it.
//!
//! [`ViewState`] only changes through the transition methods defined here.
//! [`RecipeLookupView`] performs the I/O around those transitions. Its lock
//! is never held across an await, so lookups can overlap. Every lookup takes
//! a [`RequestTicket`] before it starts, and only the newest ticket may write
//! its outcome. A slow response can therefore never replace the result of a
//! request issued after it.

use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

use crate::client::CocktailSource;
use crate::error::LookupError;
use crate::model::Recipe;

pub const SEARCH_FALLBACK_MESSAGE: &str = "An error occurred while fetching cocktail data.";
pub const RANDOM_FALLBACK_MESSAGE: &str =
    "An error occurred while fetching random cocktail data.";

/// Identifies one issued lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// What the display region should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRegion<'a> {
    Error(&'a str),
    Recipe(&'a Recipe),
    Loading,
}

/// Everything the view owns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    current_recipe: Option<Recipe>,
    search_text: String,
    error_message: String,
    generation: u64,
    mounted: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current_recipe.as_ref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Keystroke: replace the search text and nothing else
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Name to search for on submit, `None` for an empty box
    pub fn submission(&self) -> Option<String> {
        if self.search_text.is_empty() {
            None
        } else {
            Some(self.search_text.clone())
        }
    }

    /// Mark the view mounted; true only the first time
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Register a new lookup, superseding any that are still in flight
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Show a recipe and clear any error
    pub fn succeed(&mut self, recipe: Recipe) {
        self.current_recipe = Some(recipe);
        self.error_message.clear();
    }

    /// Show an error and clear any recipe
    pub fn fail(&mut self, message: impl Into<String>) {
        self.current_recipe = None;
        self.error_message = message.into();
    }

    /// Apply a finished lookup if it is still the latest one
    ///
    /// Returns false, leaving the state untouched, for a stale ticket.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Recipe, LookupError>,
        fallback: &str,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(recipe) => self.succeed(recipe),
            Err(err) => self.fail(err.user_message(fallback)),
        }
        true
    }

    /// Error first, then recipe, then the loading placeholder
    pub fn display(&self) -> DisplayRegion<'_> {
        if !self.error_message.is_empty() {
            DisplayRegion::Error(&self.error_message)
        } else if let Some(recipe) = &self.current_recipe {
            DisplayRegion::Recipe(recipe)
        } else {
            DisplayRegion::Loading
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LookupKind {
    Name,
    Random,
}

impl LookupKind {
    fn fallback(self) -> &'static str {
        match self {
            LookupKind::Name => SEARCH_FALLBACK_MESSAGE,
            LookupKind::Random => RANDOM_FALLBACK_MESSAGE,
        }
    }
}

/// Controller that owns a [`ViewState`] and talks to a [`CocktailSource`]
pub struct RecipeLookupView {
    source: Box<dyn CocktailSource>,
    state: Mutex<ViewState>,
}

impl RecipeLookupView {
    pub fn new(source: Box<dyn CocktailSource>) -> Self {
        Self {
            source,
            state: Mutex::new(ViewState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        // Transitions cannot panic halfway, so a poisoned state is still consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current state, for rendering
    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    /// First display: fetch a random cocktail, once per view
    pub async fn mount(&self) {
        let first = self.lock().mount();
        if first {
            info!("View mounted, fetching a random cocktail");
            self.lookup_random().await;
        }
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        self.lock().set_search_text(text);
    }

    /// Submit the search form
    ///
    /// Returns whether a lookup was issued. An empty search box is ignored.
    pub async fn handle_search_submit(&self) -> bool {
        let submission = self.lock().submission();
        match submission {
            Some(name) => {
                self.lookup_by_name(&name).await;
                true
            }
            None => {
                debug!("Ignoring empty search submission");
                false
            }
        }
    }

    pub async fn lookup_by_name(&self, name: &str) {
        let ticket = self.lock().begin_request();
        let outcome = self.source.search_by_name(name).await;
        self.finish(ticket, LookupKind::Name, outcome);
    }

    pub async fn lookup_random(&self) {
        let ticket = self.lock().begin_request();
        let outcome = self.source.random().await;
        self.finish(ticket, LookupKind::Random, outcome);
    }

    fn finish(
        &self,
        ticket: RequestTicket,
        kind: LookupKind,
        outcome: Result<Recipe, LookupError>,
    ) {
        match &outcome {
            Ok(recipe) => debug!("{:?} lookup returned {}", kind, recipe.name),
            Err(LookupError::NotFound) => info!("{:?} lookup found nothing", kind),
            Err(err) => warn!("{:?} lookup failed: {}", kind, err),
        }

        if !self.lock().settle(ticket, outcome, kind.fallback()) {
            debug!("Discarding stale {:?} lookup result {:?}", kind, ticket);
        }
    }
}
