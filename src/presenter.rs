use crate::controller::ContentArea;

/// Banner severity, mirrored in the page's styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Opaque handle for a loading indicator, issued by
/// [`ErrorPresenter::show_loading`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LoadingHandle(pub u64);

/// Dismissible banner payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    /// Whether the banner offers a retry action. Activating it must clear
    /// the banner and call the owning controller's `retry()` exactly once
    /// per banner.
    pub retry_offered: bool,
}

impl Notice {
    /// Warning shown alongside fallback content.
    pub fn fallback_warning() -> Self {
        Self {
            message: "Using cached content. Real-time data temporarily unavailable.".to_owned(),
            severity: Severity::Warning,
            retry_offered: true,
        }
    }

    /// Hard failure banner shown when no fallback exists.
    pub fn load_failure() -> Self {
        Self {
            message: "Unable to load content. Please try again later.".to_owned(),
            severity: Severity::Error,
            retry_offered: true,
        }
    }
}

/// Loading and error surface the embedding page implements.
///
/// Implementations are best-effort UI and must not panic. Beyond inserting
/// and removing the indicated elements they have no side effects.
pub trait ErrorPresenter {
    /// Inserts a loading indicator into the area's container.
    fn show_loading(&mut self, area: ContentArea) -> LoadingHandle;

    /// Removes the indicator unconditionally; must tolerate handles whose
    /// indicator is already gone.
    fn hide_loading(&mut self, handle: LoadingHandle);

    /// Inserts a dismissible banner into the area's container.
    fn show_notice(&mut self, area: ContentArea, notice: Notice);
}
