//! Chat page - main conversation interface

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api;
use crate::components::{ChatInput, LoadingBubble, MessageBubble, UploadModal};
use crate::config;
use crate::router::Router;
use crate::state::ChatState;
use crate::types::{Message, UploadReply};

const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Summarize the main points",
    "What are the key findings?",
    "Extract important quotes",
    "What questions does this raise?",
];

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let router = expect_context::<Router>();
    let state = ChatState::new();
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Auto-scroll to the newest message
    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    // Send a question and append the answer (or an error reply).
    let ask = move |question: String| {
        let question = question.trim().to_string();
        if question.is_empty() || state.is_loading.get_untracked() {
            return;
        }
        state.push(Message::user(&question));
        state.is_loading.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            match api::ask_question(config::api_base(), &question).await {
                Ok(reply) => state.push(Message::bot(reply.answer, reply.sources)),
                Err(error) => {
                    tracing::error!("chat request failed: {}", error);
                    state.push(Message::error_reply(error.apology()));
                }
            }
            state.is_loading.set(false);
            scroll_to_bottom();
        });
    };

    let send_message = move || {
        let question = input.get_untracked();
        input.set(String::new());
        ask(question);
    };

    // After an upload from the modal: confirm in the log, then auto-send
    // a summary request on the user's behalf (product behavior).
    let on_upload_success = Callback::new(move |reply: UploadReply| {
        let note = match reply.chunks_uploaded() {
            Some(chunks) => format!(
                "**Document uploaded successfully!** Processed {} text chunks and stored \
                 in your knowledge base. I can now answer questions about this document.",
                chunks
            ),
            None => "**Document uploaded successfully!** Stored in your knowledge base. \
                     I can now answer questions about this document."
                .to_string(),
        };
        state.push(Message::system(note));
        state.show_upload.set(false);
        scroll_to_bottom();

        spawn_local(async move {
            TimeoutFuture::new(config::SUMMARY_DELAY_MS).await;
            state.push(Message::user(config::SUMMARY_REQUEST_LABEL));
            state.is_loading.set(true);
            scroll_to_bottom();
            match api::ask_question(config::api_base(), config::SUMMARY_QUESTION).await {
                Ok(reply) => state.push(Message::bot(reply.answer, reply.sources)),
                Err(error) => {
                    tracing::warn!("auto-summary failed: {}", error);
                    state.push(Message::error_reply(api::SUMMARY_ERROR_REPLY));
                }
            }
            state.is_loading.set(false);
            scroll_to_bottom();
        });
    });

    let on_modal_close = Callback::new(move |_| state.show_upload.set(false));

    view! {
        <div class="h-screen flex flex-col bg-slate-900">
            // Chat header
            <div class="h-16 px-4 flex items-center justify-between border-b border-slate-800 bg-slate-900/80 backdrop-blur-sm">
                <div class="flex items-center gap-3">
                    <button
                        on:click=move |_| router.navigate("/")
                        class="p-2 rounded-lg text-slate-400 hover:text-slate-200 hover:bg-slate-800"
                        title="Back to Home"
                    >
                        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="m12 19-7-7 7-7" />
                            <path d="M19 12H5" />
                        </svg>
                    </button>
                    <div>
                        <h1 class="font-semibold">"DocChat"</h1>
                        <p class="text-xs text-slate-500">"Document Intelligence Assistant"</p>
                    </div>
                </div>

                <button
                    on:click=move |_| state.show_upload.set(true)
                    class="flex items-center gap-2 px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700
                           border border-slate-700 transition-colors"
                    title="Upload Document"
                >
                    <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                        <polyline points="7,10 12,15 17,10" />
                        <line x1="12" y1="15" x2="12" y2="3" />
                    </svg>
                    "Upload"
                </button>
            </div>

            // Messages area
            <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                <For
                    each=move || state.messages.get()
                    key=|message| message.id.clone()
                    children=move |message: Message| view! { <MessageBubble message=message /> }
                />

                <Show when=move || state.is_loading.get()>
                    <LoadingBubble />
                </Show>

                // Suggested questions while the log only holds the welcome
                <Show when=move || state.only_welcome()>
                    <div class="max-w-2xl mx-auto">
                        <p class="text-sm text-slate-500 mb-3">"Try asking:"</p>
                        <div class="grid sm:grid-cols-2 gap-3">
                            {SUGGESTED_QUESTIONS.iter().map(|question| view! {
                                <button
                                    on:click=move |_| input.set(question.to_string())
                                    class="px-4 py-3 text-left text-sm bg-slate-800 hover:bg-slate-700
                                           border border-slate-700 rounded-xl transition-colors"
                                >
                                    {*question}
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                </Show>

                // Scroll anchor
                <div node_ref=messages_end_ref></div>
            </div>

            // Input area
            <ChatInput
                value=input
                on_submit=send_message
                disabled=state.is_loading
            />

            // Upload modal
            <Show when=move || state.show_upload.get()>
                <UploadModal on_close=on_modal_close on_success=on_upload_success />
            </Show>
        </div>
    }
}
