//! Toast notifications
//!
//! Drawers report caught flow errors here; the container sits once at the
//! top of the page.

use crate::core::{Notice, NoticeKind};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Length of the exit transition before a toast is removed
#[cfg(feature = "hydrate")]
const EXIT_ANIMATION_MS: u32 = 300;

/// Notice with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer(manager: NotificationManager) -> impl IntoView {
    let notifications = manager.notifications();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 max-w-sm" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| view! { <NotificationToast item=item manager=manager/> }
            />
        </div>
    }
}

#[component]
fn NotificationToast(item: NotificationItem, manager: NotificationManager) -> impl IntoView {
    let id = item.id;
    let notice = item.notice;
    let (is_exiting, set_is_exiting) = signal(false);

    if let Some(ms) = notice.auto_dismiss_ms {
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(ms).await;
                set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                manager.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ms, set_is_exiting);
        }
    }

    let (container_class, icon_class, icon_path) = match notice.kind {
        NoticeKind::Error => (
            "bg-red-50 border-red-300",
            "text-red-600",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NoticeKind::Warning => (
            "bg-amber-50 border-amber-300",
            "text-amber-600",
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
        ),
    };

    view! {
        <div
            class=format!(
                "flex items-start gap-3 p-4 rounded-lg border shadow-lg transition-all duration-300 {}",
                container_class,
            )
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            role="status"
        >
            <div class=icon_class>
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold text-slate-800">{notice.title}</h4>
                <p class="text-xs text-slate-600 mt-0.5">{notice.message}</p>
            </div>
            <button
                class="text-slate-400 hover:text-slate-700 transition-colors"
                aria-label="Dismiss notification"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Handle for pushing toasts; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: StoredValue<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notice, dropping the oldest beyond the limit
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notice });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|n| n.retain(|i| i.id != id));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the page-wide notification manager and put it in context
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_keeps_the_newest_five() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            for i in 0..7 {
                manager.notify(Notice::warning(format!("notice {i}"), ""));
            }

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), MAX_NOTIFICATIONS);
            assert_eq!(items.front().map(|item| item.id), Some(2));
            assert_eq!(items.back().map(|item| item.notice.title.as_str()), Some("notice 6"));
        });
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            manager.notify(Notice::warning("retry", ""));
            manager.notify(Notice::error("failed", ""));

            manager.dismiss(0);

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].notice.kind, NoticeKind::Error);
        });
    }
}
