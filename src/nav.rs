//! Navigation state machine.
//!
//! One screen is active at a time; [`Router::navigate`] replaces it
//! unconditionally, with no history stack and no guards. Name-based
//! resolution is total: unrecognized screen names land on the 404 screen
//! instead of failing.

use serde::{Deserialize, Serialize};

/// Form mode carried by the export form screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit,
}

/// The screens of the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Dashboard,
    ExportsList,
    ExportDetail { id: String },
    ExportForm { mode: FormMode, id: Option<String> },
    NotFound { requested: String },
}

/// Untyped parameters accompanying a named navigation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenParams {
    pub id: Option<String>,
    pub mode: Option<String>,
}

impl ScreenParams {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Resolves a screen name and parameters to a screen.
///
/// Total over its input: anything unrecognized becomes `NotFound`.
pub fn resolve(name: &str, params: ScreenParams) -> Screen {
    match name {
        "DASHBOARD" => Screen::Dashboard,
        "EXPORTS_LIST" => Screen::ExportsList,
        "EXPORT_DETAIL" => Screen::ExportDetail {
            id: params.id.unwrap_or_default(),
        },
        "EXPORT_FORM" => Screen::ExportForm {
            mode: match params.mode.as_deref() {
                Some("edit") => FormMode::Edit,
                _ => FormMode::Create,
            },
            id: params.id,
        },
        other => Screen::NotFound {
            requested: other.to_string(),
        },
    }
}

/// Tracks the active screen and the pending scroll reset.
#[derive(Clone, Debug)]
pub struct Router {
    current: Screen,
    scroll_reset: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Sessions open on the dashboard.
    pub fn new() -> Self {
        Self {
            current: Screen::Dashboard,
            scroll_reset: false,
        }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Replaces the active screen and schedules a scroll reset.
    pub fn navigate(&mut self, screen: Screen) {
        self.current = screen;
        self.scroll_reset = true;
    }

    /// Name-based navigation; unknown names land on the 404 screen.
    pub fn navigate_named(&mut self, name: &str, params: ScreenParams) {
        self.navigate(resolve(name, params));
    }

    /// Consumes the pending scroll reset, if any. The shell calls this
    /// once per frame after a navigation.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}
