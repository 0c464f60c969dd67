//! Single transient notification region.
//!
//! The gate raises at most one notice at a time (permission verification
//! failure), so a newer notice simply replaces the current one.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use gate::Notifier;
use leptos::prelude::*;

/// How long a notice stays visible.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    /// Bumped on every `show` so a late dismiss can't hide a newer notice.
    pub seq: u64,
}

impl ToastState {
    /// Show `message`, returning the sequence number to dismiss it with.
    pub fn show(&mut self, message: String) -> u64 {
        self.seq += 1;
        self.message = Some(message);
        self.seq
    }

    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.message = None;
        }
    }
}

/// Gate notifier writing into the toast signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub RwSignal<ToastState>);

impl Notifier for ToastNotifier {
    fn error(&self, message: &str) {
        let Some(seq) = self.0.try_update(|s| s.show(message.to_owned())) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let toasts = self.0;
            gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                toasts.try_update(|s| s.dismiss(seq));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    }
}

/// Renders the current notice, if any.
#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dismiss = move |_| {
        toasts.update(|s| {
            let seq = s.seq;
            s.dismiss(seq);
        });
    };

    view! {
        <Show when=move || toasts.get().message.is_some()>
            <div class="toast toast--error" role="alert">
                <span class="toast__message">{move || toasts.get().message.unwrap_or_default()}</span>
                <button class="toast__close" type="button" aria-label="Dismiss" on:click=dismiss>
                    "×"
                </button>
            </div>
        </Show>
    }
}
