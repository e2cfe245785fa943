//! Upload modal wrapping the upload form.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::UploadForm;
use crate::types::UploadReply;

/// Modal dialog around [`UploadForm`], closed by the ✕ button or a click
/// on the backdrop.
#[component]
pub fn UploadModal(on_close: Callback<()>, on_success: Callback<UploadReply>) -> impl IntoView {
    let on_backdrop_click = move |ev: MouseEvent| {
        // Only clicks on the backdrop itself close the modal, not clicks
        // bubbling up from the form.
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 bg-slate-950/70 backdrop-blur-sm flex items-center justify-center z-50 p-4"
            on:click=on_backdrop_click
        >
            <div class="w-full max-w-2xl max-h-[90vh] overflow-y-auto bg-slate-900 border border-slate-700 rounded-2xl">
                <div class="px-6 py-4 flex items-center justify-between border-b border-slate-700">
                    <h2 class="text-lg font-semibold">"Upload Document"</h2>
                    <button
                        class="w-8 h-8 rounded-lg text-slate-400 hover:text-slate-200 hover:bg-slate-800"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="p-6">
                    <UploadForm on_success=on_success hide_response=true />
                </div>
            </div>
        </div>
    }
}
