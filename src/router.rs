//! Minimal history-backed router.
//!
//! Tracks the current pathname in a signal, pushes history entries on
//! navigation and follows browser back/forward through `popstate`. Kept
//! deliberately small: three routes plus a not-found fallback, and
//! navigating to the page you are already on is a no-op so repeated
//! clicks never pile up history entries.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Pages reachable from the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Upload,
    Chat,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Landing,
            "/upload" => Route::Upload,
            "/chat" => Route::Chat,
            _ => Route::NotFound,
        }
    }
}

/// Reactive view of the browser location.
#[derive(Clone, Copy)]
pub struct Router {
    path: RwSignal<String>,
}

impl Router {
    pub fn new() -> Self {
        let path = RwSignal::new(current_pathname());

        // Follow back/forward buttons. The listener lives as long as the
        // app, so the closure is leaked on purpose.
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            path.set(current_pathname());
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();

        Self { path }
    }

    /// Current pathname (reactive).
    pub fn path(&self) -> String {
        self.path.get()
    }

    /// Route matching the current pathname (reactive).
    pub fn route(&self) -> Route {
        Route::from_path(&self.path.get())
    }

    /// Push a new history entry and update the current path.
    ///
    /// No-op when already on the target path.
    pub fn navigate(&self, to: &str) {
        if !should_navigate(&self.path.get_untracked(), to) {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
        self.path.set(to.to_string());
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigating to the current path must not push a duplicate history entry.
pub fn should_navigate(current: &str, target: &str) -> bool {
    current != target
}

fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path("/upload"), Route::Upload);
        assert_eq!(Route::from_path("/chat"), Route::Chat);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        assert_eq!(Route::from_path("/upload/"), Route::Upload);
        assert_eq!(Route::from_path("/chat///"), Route::Chat);
    }

    #[test]
    fn same_path_navigation_is_a_noop() {
        assert!(!should_navigate("/upload", "/upload"));
        assert!(should_navigate("/", "/upload"));
        assert!(should_navigate("/upload", "/chat"));
    }
}
