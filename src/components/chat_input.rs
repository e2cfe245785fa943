//! Chat input component

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Chat input with auto-resize textarea
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when the user submits
    on_submit: impl Fn() + Clone + 'static,
    /// Whether input is disabled (a question is already in flight)
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Hand focus back to the textarea once the in-flight question
    // settles, so the user can keep typing without reaching for the mouse.
    Effect::new(move |was_disabled: Option<bool>| {
        let is_disabled = disabled.get();
        if focus_returns(was_disabled.unwrap_or(false), is_disabled) {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        }
        is_disabled
    });

    // Grow the textarea with its content, up to a cap
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(200);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: 200px;", new_height),
            );
        }
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(textarea) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlTextAreaElement>().ok())
        {
            value.set(textarea.value());
            resize_textarea();
        }
    };

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !value.get().trim().is_empty() && !disabled.get() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = {
        let on_submit = on_submit.clone();
        move |_| {
            if !value.get().trim().is_empty() && !disabled.get() {
                on_submit();
            }
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="p-4 bg-slate-800/50 backdrop-blur-sm border-t border-slate-700">
            <div class="flex items-end gap-3">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || value.get()
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder="Ask me anything about your documents..."
                    disabled=move || disabled.get()
                    rows="1"
                    class="flex-1 px-4 py-3 bg-slate-900 border border-slate-700 rounded-xl resize-none
                           text-slate-100 placeholder-slate-500
                           focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent
                           disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>

                <button
                    on:click=on_button_click
                    disabled=move || disabled.get() || is_empty.get()
                    class="p-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                           disabled:cursor-not-allowed rounded-xl transition-colors
                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="w-5 h-5 text-white"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <line x1="22" y1="2" x2="11" y2="13"></line>
                        <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                    </svg>
                </button>
            </div>
            <p class="mt-2 text-xs text-slate-500 text-center">
                "Press Enter to send, Shift+Enter for new line"
            </p>
        </div>
    }
}

/// Focus goes back to the input exactly on the disabled→enabled edge.
fn focus_returns(was_disabled: bool, is_disabled: bool) -> bool {
    was_disabled && !is_disabled
}

#[cfg(test)]
mod tests {
    use super::focus_returns;

    #[test]
    fn focus_returns_only_when_reenabled() {
        assert!(focus_returns(true, false));
        assert!(!focus_returns(false, false));
        assert!(!focus_returns(false, true));
        assert!(!focus_returns(true, true));
    }
}
