//! Toast overlay rendering `NoticeState`.
//!
//! In the browser each toast is dismissed [`TOAST_TTL_MS`] after it first
//! appears. Sequence numbers only grow, so a single high-water mark is
//! enough to avoid scheduling the same toast twice.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::notices::TOAST_TTL_MS;
use crate::state::notices::{NoticeState, Toast};

/// Sequence numbers newer than `scheduled_through`, in queue order.
pub fn unscheduled(toasts: &[Toast], scheduled_through: u64) -> Vec<u64> {
    toasts.iter().map(|t| t.seq).filter(|seq| *seq > scheduled_through).collect()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let scheduled_through = StoredValue::new(0_u64);

    Effect::new(move || {
        let fresh = notices.with(|n| unscheduled(&n.toasts, scheduled_through.get_value()));
        let Some(&latest) = fresh.last() else {
            return;
        };
        scheduled_through.set_value(latest);
        #[cfg(feature = "hydrate")]
        for seq in fresh {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                notices.update(|n| n.dismiss(seq));
            });
        }
    });

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || notices.get().toasts
                key=|toast| toast.seq
                children=move |toast| {
                    let seq = toast.seq;
                    view! {
                        <div class=format!("toast {}", toast.kind.class())>
                            <div class="toast__body">
                                <strong class="toast__title">{toast.title}</strong>
                                <p class="toast__message">{toast.message}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(seq))
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
