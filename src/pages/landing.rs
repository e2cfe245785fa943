//! Landing page

use leptos::prelude::*;

use crate::components::Navbar;
use crate::router::Router;

/// Landing page with hero section and feature highlights.
#[component]
pub fn LandingPage() -> impl IntoView {
    let router = expect_context::<Router>();

    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />

            // Hero section
            <section class="flex-1 flex items-center justify-center px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-block px-4 py-1 mb-6 rounded-full bg-slate-800 border border-slate-700 text-sm text-slate-400">
                        "AI-powered document intelligence"
                    </div>

                    <h1 class="text-5xl md:text-6xl font-bold mb-6">
                        "Talk to your documents. "
                        <span class="bg-gradient-to-r from-blue-400 to-violet-400 bg-clip-text text-transparent">
                            "Intelligently."
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 mb-12 max-w-2xl mx-auto">
                        "Upload PDFs, DOCX, or TXT files and get instant AI-powered insights. \
                         Ask questions in natural language and get precise answers with source citations."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            on:click=move |_| router.navigate("/chat")
                            class="px-8 py-4 bg-blue-600 hover:bg-blue-700 rounded-xl text-lg font-semibold
                                   transition-all hover:scale-105"
                        >
                            "Start Chatting"
                        </button>
                        <button
                            on:click=move |_| router.navigate("/upload")
                            class="px-8 py-4 bg-slate-800 hover:bg-slate-700 border border-slate-700
                                   rounded-xl text-lg font-semibold transition-all hover:scale-105"
                        >
                            "Upload Documents"
                        </button>
                    </div>
                </div>
            </section>

            // Features section
            <section class="py-20 px-4 bg-slate-800/50">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"How it works"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="📄"
                            title="Upload documents"
                            description="Drag and drop PDFs, DOCX, or TXT files. Content is extracted, chunked, and indexed for semantic search."
                        />
                        <FeatureCard
                            icon="💬"
                            title="Ask in natural language"
                            description="Question your documents as if you were talking to an expert and get context-aware answers."
                        />
                        <FeatureCard
                            icon="📚"
                            title="Answers with citations"
                            description="Every answer points back to the originating documents by title, author, or filename."
                        />
                    </div>
                </div>
            </section>

            // Footer
            <footer class="py-8 px-4 border-t border-slate-800 text-center text-slate-500">
                <p>"DocChat — intelligent document analysis"</p>
            </footer>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-slate-800 rounded-xl border border-slate-700 hover:border-slate-600 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-slate-400">{description}</p>
        </div>
    }
}
