//! Chat message bubble

use leptos::prelude::*;

use crate::format::{parse_blocks, Block, Inline};
use crate::types::{Message, MessageKind, SourceRef};

/// Render a single chat message
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let is_user = message.kind == MessageKind::User;
    let has_sources = !message.sources.is_empty();

    let bubble_class = format!(
        "px-4 py-3 rounded-2xl {} {}",
        match message.kind {
            MessageKind::User => "bg-blue-600 text-white rounded-tr-sm",
            MessageKind::Bot => "bg-slate-800 text-slate-100 rounded-tl-sm",
            MessageKind::System => "bg-slate-800/60 border border-slate-700 text-slate-300",
        },
        if message.is_error {
            "border border-red-500/50"
        } else if message.is_welcome {
            "border border-blue-500/30"
        } else {
            ""
        }
    );

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            // Avatar (bot and system only)
            {(!is_user).then(|| view! {
                <div class="w-8 h-8 rounded-full bg-gradient-to-br from-blue-500 to-violet-500
                            flex items-center justify-center text-white text-sm font-medium shrink-0">
                    "D"
                </div>
            })}

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=bubble_class>
                    {if is_user {
                        // User text is shown verbatim
                        view! {
                            <div class="whitespace-pre-wrap break-words">{message.content.clone()}</div>
                        }
                        .into_any()
                    } else {
                        view! { <MessageContent content=message.content.clone() /> }.into_any()
                    }}

                    {has_sources.then(|| view! {
                        <SourcesSection sources=message.sources.clone() />
                    })}
                </div>

                <span class="text-xs text-slate-600 mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}

/// Render bot/system content with its lightweight markup.
#[component]
fn MessageContent(content: String) -> impl IntoView {
    let blocks = parse_blocks(&content);

    view! {
        <div class="break-words space-y-2">
            {blocks.into_iter().map(|block| match block {
                Block::Paragraph(inlines) => view! {
                    <p class="whitespace-pre-wrap">{render_inlines(inlines)}</p>
                }
                .into_any(),
                Block::Bullet(inlines) => view! {
                    <p class="pl-2">"• " {render_inlines(inlines)}</p>
                }
                .into_any(),
                Block::Numbered(number, inlines) => view! {
                    <p class="pl-2">
                        <span class="font-medium">{number}". "</span>
                        {render_inlines(inlines)}
                    </p>
                }
                .into_any(),
            }).collect::<Vec<_>>()}
        </div>
    }
}

fn render_inlines(inlines: Vec<Inline>) -> impl IntoView {
    inlines
        .into_iter()
        .map(|inline| match inline {
            Inline::Text(text) => view! { <span>{text}</span> }.into_any(),
            Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect::<Vec<_>>()
}

/// Citations under a bot answer.
#[component]
fn SourcesSection(sources: Vec<SourceRef>) -> impl IntoView {
    view! {
        <div class="mt-3 pt-3 border-t border-slate-700">
            <div class="flex items-center gap-2 text-xs font-medium text-slate-400 mb-2">
                <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" />
                    <polyline points="14,2 14,8 20,8" />
                </svg>
                "Sources"
            </div>
            <div class="flex flex-col gap-1">
                {sources.into_iter().map(|source| {
                    let label = source.label().to_string();
                    let byline = source.byline();
                    view! {
                        <div class="text-xs">
                            <span class="text-slate-300">{label}</span>
                            {byline.map(|byline| view! {
                                <span class="text-slate-500">" " {byline}</span>
                            })}
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
