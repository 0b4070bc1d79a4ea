//! Icon symbol table.
//!
//! DESIGN
//! ======
//! The set of icon names is closed. `IconName` is an enum and every variant
//! resolves through an exhaustive match in [`IconName::handle`], so a typed
//! lookup cannot miss. Handles point into the Lucide icon set by component
//! name and asset slug; rendering is left to whoever consumes them.
//!
//! The only untyped entry point is [`FromStr`], used when a name arrives
//! over HTTP.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// TYPES
// =============================================================================

/// Symbolic icon names. Serialized as their camelCase key (`fileText`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconName {
    Home,
    Users,
    Package,
    FileText,
    BarChart,
    FileUp,
    User,
    LogOut,
    LayoutDashboard,
    ChevronDown,
    ChevronUp,
}

/// Opaque reference to a glyph in the Lucide icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconHandle {
    /// Lucide component name, e.g. `FileText`.
    pub component: &'static str,
    /// Lucide asset slug, e.g. `file-text`.
    pub slug: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl ErrorCode for UnknownIcon {
    fn error_code(&self) -> &'static str {
        "E_UNKNOWN_ICON"
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

impl IconName {
    /// Every icon name, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Users,
        Self::Package,
        Self::FileText,
        Self::BarChart,
        Self::FileUp,
        Self::User,
        Self::LogOut,
        Self::LayoutDashboard,
        Self::ChevronDown,
        Self::ChevronUp,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Users => "users",
            Self::Package => "package",
            Self::FileText => "fileText",
            Self::BarChart => "barChart",
            Self::FileUp => "fileUp",
            Self::User => "user",
            Self::LogOut => "logOut",
            Self::LayoutDashboard => "layoutDashboard",
            Self::ChevronDown => "chevronDown",
            Self::ChevronUp => "chevronUp",
        }
    }

    #[must_use]
    pub const fn handle(self) -> IconHandle {
        let (component, slug) = match self {
            Self::Home => ("Home", "home"),
            Self::Users => ("Users", "users"),
            Self::Package => ("Package", "package"),
            Self::FileText => ("FileText", "file-text"),
            Self::BarChart => ("BarChart", "bar-chart"),
            Self::FileUp => ("FileUp", "file-up"),
            Self::User => ("User", "user"),
            Self::LogOut => ("LogOut", "log-out"),
            Self::LayoutDashboard => ("LayoutDashboard", "layout-dashboard"),
            Self::ChevronDown => ("ChevronDown", "chevron-down"),
            Self::ChevronUp => ("ChevronUp", "chevron-up"),
        };
        IconHandle { component, slug }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_owned()))
    }
}

/// The whole table keyed by icon name, as served by `GET /api/icons`.
#[must_use]
pub fn registry() -> BTreeMap<&'static str, IconHandle> {
    IconName::ALL
        .into_iter()
        .map(|name| (name.as_str(), name.handle()))
        .collect()
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod tests;
