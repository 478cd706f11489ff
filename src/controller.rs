use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    client::PodsiteClient,
    config::{endpoints, FeatureFlags},
    fallback::FallbackStore,
    presenter::{ErrorPresenter, Notice},
    PodsiteError,
};

/// One dynamic section of the site. Each area knows where its live data
/// comes from and which embedded document backs it up.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContentArea {
    FeaturedEpisode,
    EpisodesList,
    About,
    Faq,
}

impl ContentArea {
    /// API path serving this area's live data.
    pub fn path(self) -> &'static str {
        match self {
            Self::FeaturedEpisode => endpoints::FEATURED_EPISODE,
            Self::EpisodesList => endpoints::EPISODES,
            Self::About => endpoints::ABOUT,
            Self::Faq => endpoints::FAQ,
        }
    }

    /// Key of the page-embedded fallback document for this area.
    pub fn fallback_key(self) -> &'static str {
        match self {
            Self::FeaturedEpisode => "featured-episode-fallback",
            Self::EpisodesList => "episodes-list-fallback",
            Self::About => "about-fallback",
            Self::Faq => "faq-fallback",
        }
    }
}

/// Where a load cycle currently stands. The three rendered/error states are
/// terminal until the next [`ContentController::load`] or
/// [`ContentController::retry`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Rendered,
    FallbackRendered,
    ErrorShown,
}

/// Result of one load cycle. Owned by the controller until the next cycle
/// replaces it.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Live data fetched from the API.
    Live(T),
    /// Embedded fallback data substituted after the API failed.
    Fallback(T),
    /// No data available; the failure that ended the cycle.
    Failed(PodsiteError),
}

impl<T> LoadOutcome<T> {
    /// The rendered data, from either the live or the fallback path.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Live(data) | Self::Fallback(data) => Some(data),
            Self::Failed(_) => None,
        }
    }
}

/// Rendering seam between the pipeline and the page templates.
///
/// The controller only ever hands data *to* the view; it never clears one.
/// On a failed cycle whatever the page pre-rendered stays up.
pub trait ContentView<T> {
    fn render(&mut self, data: &T);
}

/// Drives one content area through its load cycle:
/// `Idle → Loading → Rendered | FallbackRendered | ErrorShown`.
///
/// On failure the controller substitutes the area's embedded fallback when
/// one exists (warning banner, content still shown) and otherwise shows a
/// hard error banner; either banner offers a retry that restarts the whole
/// cycle with a fresh attempt budget. Failures stop here: the controller
/// never re-throws one.
///
/// `load` and `retry` take `&mut self`, so a second cycle cannot start
/// while one is still being awaited; a user-visible retry control always
/// acts on a settled controller.
pub struct ContentController<T, V, P> {
    area: ContentArea,
    client: PodsiteClient,
    fallbacks: Arc<FallbackStore>,
    view: V,
    presenter: P,
    state: LoadState,
    outcome: Option<LoadOutcome<T>>,
    _data: PhantomData<fn() -> T>,
}

impl<T, V, P> ContentController<T, V, P>
where
    T: DeserializeOwned,
    V: ContentView<T>,
    P: ErrorPresenter,
{
    pub fn new(
        area: ContentArea,
        client: PodsiteClient,
        fallbacks: Arc<FallbackStore>,
        view: V,
        presenter: P,
    ) -> Self {
        Self {
            area,
            client,
            fallbacks,
            view,
            presenter,
            state: LoadState::Idle,
            outcome: None,
            _data: PhantomData,
        }
    }

    pub fn area(&self) -> ContentArea {
        self.area
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Outcome of the last completed cycle, if any.
    pub fn outcome(&self) -> Option<&LoadOutcome<T>> {
        self.outcome.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Runs one full load cycle and returns its outcome.
    pub async fn load(&mut self) -> &LoadOutcome<T> {
        let features = self.client.config().features;

        self.state = LoadState::Loading;
        let loading = features
            .enable_loading_states
            .then(|| self.presenter.show_loading(self.area));

        let fetched = self.client.get::<T>(self.area.path()).await;

        // The indicator comes down on success and failure alike.
        if let Some(handle) = loading {
            self.presenter.hide_loading(handle);
        }

        let outcome = match fetched {
            Ok(data) => {
                self.view.render(&data);
                self.state = LoadState::Rendered;
                LoadOutcome::Live(data)
            }
            Err(err) => self.recover(err, features),
        };

        &*self.outcome.insert(outcome)
    }

    /// Restarts the cycle from `Idle` with a fresh attempt budget.
    pub async fn retry(&mut self) -> &LoadOutcome<T> {
        self.state = LoadState::Idle;
        self.load().await
    }

    fn recover(&mut self, err: PodsiteError, features: FeatureFlags) -> LoadOutcome<T> {
        tracing::warn!(area = ?self.area, error = %err, "live content load failed");

        if features.use_fallback_content {
            if let Some(data) = self.fallbacks.get_as::<T>(self.area.fallback_key()) {
                tracing::warn!(area = ?self.area, "rendering embedded fallback content");
                self.view.render(&data);
                if features.enable_error_ui {
                    self.presenter.show_notice(self.area, Notice::fallback_warning());
                }
                self.state = LoadState::FallbackRendered;
                return LoadOutcome::Fallback(data);
            }
        }

        // No fallback: pre-rendered static content stays untouched.
        if features.enable_error_ui {
            self.presenter.show_notice(self.area, Notice::load_failure());
        }
        self.state = LoadState::ErrorShown;
        LoadOutcome::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::ContentArea;

    #[test]
    fn areas_map_to_endpoints_and_fallback_keys() {
        assert_eq!(ContentArea::FeaturedEpisode.path(), "/episodes/featured");
        assert_eq!(
            ContentArea::FeaturedEpisode.fallback_key(),
            "featured-episode-fallback"
        );
        assert_eq!(ContentArea::EpisodesList.path(), "/episodes");
        assert_eq!(
            ContentArea::EpisodesList.fallback_key(),
            "episodes-list-fallback"
        );
        assert_eq!(ContentArea::About.path(), "/about");
        assert_eq!(ContentArea::About.fallback_key(), "about-fallback");
        assert_eq!(ContentArea::Faq.path(), "/faq");
        assert_eq!(ContentArea::Faq.fallback_key(), "faq-fallback");
    }
}
