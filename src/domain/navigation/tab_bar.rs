//! Bottom tab bar and active-route resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Path,
    Matrix,
    History,
    More,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Path, Tab::Matrix, Tab::History, Tab::More];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Path => "path",
            Tab::Matrix => "matrix",
            Tab::History => "history",
            Tab::More => "more",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Path => "Path",
            Tab::Matrix => "Matrix",
            Tab::History => "Requests",
            Tab::More => "More",
        }
    }

    /// Route the tab navigates to.
    pub fn href(&self) -> &'static str {
        match self {
            Tab::Path => "/path",
            Tab::Matrix => "/matrix",
            Tab::History => "/history",
            Tab::More => "/pricing",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Routes that belong to the request flow and highlight the History tab.
const HISTORY_FLOW_ROUTES: [&str; 2] = ["/new-request", "/analysis-result"];

/// Resolves which tab is highlighted for `pathname`.
///
/// Request-flow screens map to History, exact `href` matches map to their
/// tab, and everything else falls back to Path.
pub fn resolve_active(pathname: &str) -> Tab {
    if HISTORY_FLOW_ROUTES.contains(&pathname) {
        return Tab::History;
    }
    Tab::ALL
        .into_iter()
        .find(|tab| tab.href() == pathname)
        .unwrap_or(Tab::Path)
}
