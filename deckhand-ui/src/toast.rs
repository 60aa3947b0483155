//! Non-blocking notices for the UI
//!
//! Replaces alert dialogs with a stack of dismissible toasts

use deckhand_common::dashboard::Level;
use leptos::*;

use crate::view::{SignalView, Toast};

pub fn level_class(level: Level) -> &'static str {
    match level {
        Level::Success => "alert-success",
        Level::Warning => "alert-warning",
        Level::Error => "alert-error",
    }
}

pub fn level_icon(level: Level) -> &'static str {
    match level {
        Level::Success => "✓",
        Level::Warning => "⏱️",
        Level::Error => "❌",
    }
}

/// Toast stack, newest last
#[component]
pub fn NoticeToasts(state: SignalView) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || state.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let level = toast.notice.level;
                    view! {
                        <div class={format!("toast {}", level_class(level))}>
                            <div class="toast-icon">{level_icon(level)}</div>
                            <div class="toast-message">{toast.notice.message}</div>
                            <button
                                class="toast-close"
                                on:click=move |_| state.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_class() {
        assert_eq!(level_class(Level::Success), "alert-success");
        assert_eq!(level_class(Level::Warning), "alert-warning");
        assert_eq!(level_class(Level::Error), "alert-error");
    }
}
