//! Standalone upload page

use leptos::prelude::*;

use crate::components::{Navbar, UploadForm};

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />

            <main class="flex-1 w-full max-w-3xl mx-auto px-4 py-10">
                <div class="mb-6">
                    <div class="inline-block px-3 py-1 rounded-full bg-slate-800 border border-slate-700 text-xs text-slate-400">
                        "Uploader"
                    </div>
                    <h1 class="mt-3 text-3xl font-bold">"Upload documents"</h1>
                    <p class="mt-2 text-slate-400">
                        "PDF, DOCX or TXT. We'll extract, chunk, and store the content in your \
                         knowledge base. Optionally add metadata before upload."
                    </p>
                </div>

                <UploadForm />
            </main>
        </div>
    }
}
