//! DocChat UI - Leptos frontend
//!
//! A chat interface for asking questions about uploaded documents, backed
//! by an external document-QA server.

pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod pages;
pub mod router;
pub mod state;
pub mod transfer;
pub mod types;

use leptos::prelude::*;

use pages::{chat::ChatPage, landing::LandingPage, upload::UploadPage};
use router::{Route, Router};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let router = Router::new();
    provide_context(router);

    view! {
        <main class="min-h-screen bg-slate-900 text-slate-100">
            {move || match router.route() {
                Route::Landing => view! { <LandingPage /> }.into_any(),
                Route::Upload => view! { <UploadPage /> }.into_any(),
                Route::Chat => view! { <ChatPage /> }.into_any(),
                Route::NotFound => view! { <NotFound /> }.into_any(),
            }}
        </main>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let router = expect_context::<Router>();

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-500 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"Page not found"</p>
                <button
                    on:click=move |_| router.navigate("/")
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </button>
            </div>
        </div>
    }
}
