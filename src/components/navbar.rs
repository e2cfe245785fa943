//! Top navigation bar

use leptos::prelude::*;

use crate::router::Router;

/// Brand plus route buttons, shared by the landing and upload pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let router = expect_context::<Router>();

    view! {
        <nav class="h-16 px-4 flex items-center justify-between border-b border-slate-800 bg-slate-900/80 backdrop-blur-sm sticky top-0 z-40">
            <button
                on:click=move |_| router.navigate("/")
                class="flex items-center gap-2 hover:opacity-80 transition-opacity"
            >
                <span class="w-3 h-3 rounded-full bg-gradient-to-br from-blue-500 to-violet-500"></span>
                <span class="text-lg font-semibold">"DocChat"</span>
            </button>

            <div class="flex items-center gap-2">
                <button
                    on:click=move |_| router.navigate("/upload")
                    class="px-4 py-2 rounded-lg text-slate-300 hover:text-slate-100 hover:bg-slate-800 transition-colors"
                >
                    "Upload"
                </button>
                <button
                    on:click=move |_| router.navigate("/chat")
                    class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 font-medium transition-colors"
                >
                    "Start Chat"
                </button>
            </div>
        </nav>
    }
}
