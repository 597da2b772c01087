//! Client-side route table.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Translate,
    Health,
    Navigation,
    About,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Translate,
        Route::Health,
        Route::Navigation,
        Route::About,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Translate => "/translate",
            Route::Health => "/health",
            Route::Navigation => "/navigation",
            Route::About => "/about",
        }
    }

    /// Match a path against the table. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
