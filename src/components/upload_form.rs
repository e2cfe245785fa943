//! Document upload form.
//!
//! Dropzone plus optional metadata editor, driving the transfer client
//! with live progress and a Cancel button. Used standalone on the upload
//! page (where it shows a success card) and inside the chat modal (where
//! the caller takes over after `on_success`).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

use crate::config;
use crate::router::Router;
use crate::state::{Banner, BannerTone, TransferState};
use crate::transfer::{self, UploadError};
use crate::types::{DocumentMetadata, MetaField, UploadReply};

#[component]
pub fn UploadForm(
    /// Called after a successful upload (the upload page leaves this unset
    /// and shows the success card instead).
    #[prop(into, optional)]
    on_success: Option<Callback<UploadReply>>,
    /// Hide the inline success card (the modal shows its own follow-up).
    #[prop(default = false)]
    hide_response: bool,
) -> impl IntoView {
    let router = expect_context::<Router>();
    let state = TransferState::new();

    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let extra = RwSignal::new(vec![MetaField::empty()]);
    let drag_over = RwSignal::new(false);
    let response = RwSignal::new(Option::<UploadReply>::None);

    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let choose_file = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                state.file.set(Some(file));
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_over.set(false);
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            state.file.set(Some(file));
        }
    };

    let add_row = move |_| extra.update(|rows| rows.push(MetaField::empty()));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.in_flight() {
            return;
        }
        let Some(file) = state.file.get_untracked() else {
            state.banner.set(Some(Banner {
                tone: BannerTone::Error,
                message: "Please select a file first.".to_string(),
            }));
            return;
        };

        let metadata = DocumentMetadata {
            title: title.get_untracked(),
            author: author.get_untracked(),
            extra: extra.get_untracked(),
        };
        response.set(None);

        let url = config::upload_url(config::api_base());
        let started = transfer::upload_with_progress(&url, &file, &metadata, move |pct| {
            state.progress.set(pct);
        });
        match started {
            Ok((handle, pending)) => {
                state.begin(handle);
                spawn_local(async move {
                    match pending.await {
                        Ok(reply) => {
                            let message = match reply.chunks_uploaded() {
                                Some(chunks) => format!(
                                    "Document uploaded successfully! Processed {} text chunks \
                                     and stored in your knowledge base.",
                                    chunks
                                ),
                                None => "Document uploaded successfully!".to_string(),
                            };
                            state.finish_success(message);
                            response.set(Some(reply.clone()));
                            if let Some(on_success) = on_success {
                                // Let the user see the full progress bar
                                // before the caller closes the form.
                                TimeoutFuture::new(config::SUCCESS_CALLBACK_DELAY_MS).await;
                                on_success.run(reply);
                            }
                        }
                        // Cancel already set its own terminal status; a
                        // late abort result must not overwrite it.
                        Err(UploadError::Aborted) => {}
                        Err(error) => {
                            tracing::error!("upload failed: {}", error);
                            state.finish_error(error.to_string());
                        }
                    }
                });
            }
            Err(error) => state.finish_error(error.to_string()),
        }
    };

    let reset = move |_| {
        state.reset();
        title.set(String::new());
        author.set(String::new());
        extra.set(vec![MetaField::empty()]);
        response.set(None);
    };

    view! {
        <div class="p-6 bg-slate-800/50 border border-slate-700 rounded-2xl">
            // Dropzone
            <div
                class=move || format!(
                    "p-8 rounded-xl border-2 border-dashed text-center cursor-pointer transition-colors {}",
                    if drag_over.get() {
                        "border-blue-500 bg-blue-500/10"
                    } else {
                        "border-slate-600 hover:border-slate-500"
                    }
                )
                on:click=choose_file
                on:dragover=move |ev: DragEvent| { ev.prevent_default(); drag_over.set(true); }
                on:dragleave=move |ev: DragEvent| { ev.prevent_default(); drag_over.set(false); }
                on:drop=on_drop
                role="button"
                tabindex="0"
                aria-label="Upload document"
            >
                // The input stops click propagation so the programmatic
                // click cannot bubble back up and reopen the picker.
                <input
                    node_ref=file_input_ref
                    type="file"
                    accept=config::ACCEPTED_FILE_TYPES
                    class="hidden"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    on:change=on_file_change
                />
                <div class="font-medium text-slate-200">
                    {move || if state.file.with(|file| file.is_some()) {
                        "File selected"
                    } else {
                        "Drag & drop your document here"
                    }}
                </div>
                <div class="mt-1 text-sm text-slate-500">"PDF, DOCX or TXT • Click to browse"</div>
                {move || state.file.get().map(|file| view! {
                    <div class="mt-3">
                        <span class="px-3 py-1 rounded-full bg-slate-700 text-sm text-slate-300">
                            {file.name()} " — " {human_file_size(file.size())}
                        </span>
                    </div>
                })}
            </div>

            <form class="mt-5 flex flex-col gap-4" on:submit=submit>
                // Title / author
                <div class="grid sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-slate-400 mb-1">"Title (optional)"</label>
                        <input
                            class="w-full px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="e.g., Company Handbook"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-slate-400 mb-1">"Author (optional)"</label>
                        <input
                            class="w-full px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="e.g., Jane Doe"
                            prop:value=move || author.get()
                            on:input=move |ev| author.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                // Extra key/value rows
                <div>
                    <div class="text-sm text-slate-400 mb-2">"Additional metadata (optional)"</div>
                    <div class="flex flex-col gap-2">
                        <For
                            each=move || extra.get()
                            key=|row| row.id.clone()
                            children=move |row: MetaField| {
                                let row_id = row.id.clone();
                                let key_id = row.id.clone();
                                let value_id = row.id.clone();
                                view! {
                                    <div class="flex gap-2">
                                        <input
                                            class="flex-1 px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg
                                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                                            placeholder="Key (e.g., department)"
                                            prop:value=row.key.clone()
                                            on:input=move |ev| {
                                                let key = event_target_value(&ev);
                                                extra.update(|rows| {
                                                    if let Some(row) = rows.iter_mut().find(|r| r.id == key_id) {
                                                        row.key = key.clone();
                                                    }
                                                });
                                            }
                                        />
                                        <input
                                            class="flex-1 px-3 py-2 bg-slate-900 border border-slate-700 rounded-lg
                                                   focus:outline-none focus:ring-2 focus:ring-blue-500"
                                            placeholder="Value (e.g., Finance)"
                                            prop:value=row.value.clone()
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                extra.update(|rows| {
                                                    if let Some(row) = rows.iter_mut().find(|r| r.id == value_id) {
                                                        row.value = value.clone();
                                                    }
                                                });
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="px-3 py-2 rounded-lg text-slate-400 hover:text-slate-200 hover:bg-slate-700"
                                            aria-label="Remove metadata row"
                                            on:click=move |_| extra.update(|rows| rows.retain(|r| r.id != row_id))
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            }
                        />
                        <div>
                            <button
                                type="button"
                                class="px-3 py-2 rounded-lg text-sm text-slate-400 hover:text-slate-200 hover:bg-slate-700"
                                on:click=add_row
                            >
                                "+ Add field"
                            </button>
                        </div>
                    </div>
                </div>

                // Progress + cancel while a transfer is in flight
                <Show when=move || state.in_flight()>
                    <div class="flex flex-col gap-2">
                        <div class="h-2 bg-slate-700 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-blue-500 rounded-full transition-all"
                                style=move || format!("width: {}%", state.progress.get())
                            ></div>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-sm text-slate-400">
                                {move || format!("Uploading… {}%", state.progress.get())}
                            </span>
                            <button
                                type="button"
                                class="px-3 py-1 rounded-lg text-sm text-slate-400 hover:text-slate-200 hover:bg-slate-700"
                                on:click=move |_| state.cancel()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>

                // Status banner
                {move || state.banner.get().map(|banner| view! {
                    <div class=format!(
                        "px-4 py-3 rounded-lg text-sm {}",
                        match banner.tone {
                            BannerTone::Success => "bg-green-500/10 border border-green-500/30 text-green-300",
                            BannerTone::Error => "bg-red-500/10 border border-red-500/30 text-red-300",
                        }
                    )>
                        {banner.message}
                    </div>
                })}

                <div class="flex gap-3">
                    <button
                        type="submit"
                        disabled=move || state.file.with(|file| file.is_none()) || state.in_flight()
                        class="px-5 py-2.5 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                               disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                    >
                        "Upload File to Server"
                    </button>
                    <button
                        type="button"
                        class="px-5 py-2.5 rounded-lg text-slate-400 hover:text-slate-200 hover:bg-slate-700"
                        on:click=reset
                    >
                        "Reset"
                    </button>
                </div>
            </form>

            // Success card (standalone page only)
            {move || (!hide_response).then(|| response.get().map(|reply| {
                let chunks = reply.chunks_uploaded();
                let file_name = state.file.with(|file| {
                    file.as_ref().map(|f| f.name()).unwrap_or_default()
                });
                view! {
                    <div class="mt-6 p-6 bg-slate-900 border border-green-500/30 rounded-xl">
                        <div class="flex items-center gap-2 text-lg font-semibold text-green-300">
                            "✅ Upload Complete!"
                        </div>
                        <p class="mt-2 text-slate-300">
                            <strong>{file_name}</strong>
                            " has been successfully processed and added to your knowledge base."
                        </p>
                        {chunks.map(|chunks| view! {
                            <p class="mt-1 text-sm text-slate-400">
                                {chunks} " text chunks indexed"
                            </p>
                        })}
                        <div class="mt-4 flex gap-3">
                            <button
                                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium"
                                on:click=move |_| router.navigate("/chat")
                            >
                                "Start Conversation"
                            </button>
                            <button
                                class="px-4 py-2 rounded-lg text-slate-400 hover:text-slate-200 hover:bg-slate-700"
                                on:click=move |_| router.navigate("/")
                            >
                                "Go to Home"
                            </button>
                        </div>
                    </div>
                }
            }))}
        </div>
    }
}

/// Human-readable file size, e.g. `1.25 MB`.
fn human_file_size(bytes: f64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes <= 0.0 {
        return "0 B".to_string();
    }
    let exponent = (bytes.log(1024.0).floor() as usize).min(UNITS.len() - 1);
    format!("{:.2} {}", bytes / 1024f64.powi(exponent as i32), UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::human_file_size;

    #[test]
    fn file_sizes_pick_sane_units() {
        assert_eq!(human_file_size(0.0), "0 B");
        assert_eq!(human_file_size(512.0), "512.00 B");
        assert_eq!(human_file_size(2048.0), "2.00 KB");
        assert_eq!(human_file_size(5.0 * 1024.0 * 1024.0), "5.00 MB");
    }
}
