//! Transient notification toasts.

use leptos::prelude::*;

use crate::state::notify::{NoticeLevel, NotifyState};

/// How long a notice stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4_000;

/// Push a notice and schedule its auto-dismissal.
///
/// Call sites use this instead of mutating `NotifyState` directly so every
/// toast disappears on its own; clicking a toast dismisses it early.
pub fn push_notice(notify: RwSignal<NotifyState>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    let mut id = String::new();
    notify.update(|n| id = n.push(level, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        notify.update(|n| n.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Stack of active notices, newest last.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack">
            {move || {
                notify
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.level {
                            NoticeLevel::Info => "toast toast--info",
                            NoticeLevel::Success => "toast toast--success",
                            NoticeLevel::Error => "toast toast--error",
                        };
                        let id = notice.id.clone();
                        view! {
                            <div class=class on:click=move |_| notify.update(|n| n.dismiss(&id))>
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
