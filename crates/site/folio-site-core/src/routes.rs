//! Two routes: the page at `/`, and a not-found page for everything else.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    /// Resolve a request path. Query strings and fragments are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        match path {
            "" | "/" => Route::Home,
            _ => Route::NotFound,
        }
    }
}

/// Content of the not-found page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub status: u16,
    pub heading: &'static str,
    pub message: &'static str,
    pub back_href: &'static str,
    pub back_label: &'static str,
}

impl Default for NotFoundPage {
    fn default() -> Self {
        Self {
            status: 404,
            heading: "404",
            message: "Oops! Page not found",
            back_href: "/",
            back_label: "Go back home",
        }
    }
}
