/// Failure of one of the upstream fetches.
///
/// Both kinds are shown to the visitor as page text, but they are kept apart
/// so the logs tell a broken payload from a broken connection.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The response arrived and parsed as JSON but lacks the expected data.
    Structural(String),
    /// The request failed outright or the body is not JSON.
    Transport(String),
}

impl FetchError {
    pub fn is_structural(&self) -> bool {
        matches!(self, FetchError::Structural(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Structural(_) => "structural",
            FetchError::Transport(_) => "transport",
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Structural(msg) => write!(f, "Structural Error: {}", msg),
            FetchError::Transport(msg) => write!(f, "Transport Error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure while drawing to the page or the chart canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    ElementNotFound(String),
    Canvas(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::ElementNotFound(id) => write!(f, "Element not found: {}", id),
            RenderError::Canvas(msg) => write!(f, "Canvas Error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

pub type FetchResult<T> = Result<T, FetchError>;
pub type RenderResult<T> = Result<T, RenderError>;

/// Either stage of the history pipeline can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    Fetch(FetchError),
    Render(RenderError),
}

impl From<FetchError> for HistoryError {
    fn from(e: FetchError) -> Self {
        HistoryError::Fetch(e)
    }
}

impl From<RenderError> for HistoryError {
    fn from(e: RenderError) -> Self {
        HistoryError::Render(e)
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Fetch(e) => e.fmt(f),
            HistoryError::Render(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for HistoryError {}
