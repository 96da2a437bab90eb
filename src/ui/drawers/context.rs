//! Which drawer is open
//!
//! At most one drawer is open at a time. Opening another one replaces it.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKind {
    Trial,
    Demo,
    Login,
}

/// Drawer context shared by the calls to action and the drawers
#[derive(Clone, Copy)]
pub struct DrawerContext {
    active: RwSignal<Option<DrawerKind>>,
}

impl DrawerContext {
    pub fn open(&self, kind: DrawerKind) {
        leptos::logging::log!("Opening {:?} drawer", kind);
        self.active.set(Some(kind));
    }

    pub fn close(&self) {
        self.active.set(None);
    }

    /// Reactive "is this drawer open"
    pub fn is_open(&self, kind: DrawerKind) -> Signal<bool> {
        let active = self.active;
        Signal::derive(move || active.get() == Some(kind))
    }

    pub fn closer(&self) -> Callback<()> {
        let ctx = *self;
        Callback::new(move |_| ctx.close())
    }
}

/// Body scroll is locked while any drawer is open
#[cfg(feature = "hydrate")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        leptos::logging::warn!("Failed to toggle body scroll: {:?}", e);
    }
}

/// Provide drawer context to the page
pub fn provide_drawer_context() -> DrawerContext {
    let ctx = DrawerContext {
        active: RwSignal::new(None),
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            set_body_scroll_locked(ctx.active.get().is_some());
        });
        on_cleanup(|| set_body_scroll_locked(false));
    }

    provide_context(ctx);

    ctx
}

pub fn use_drawer_context() -> DrawerContext {
    expect_context::<DrawerContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DrawerContext {
        DrawerContext {
            active: RwSignal::new(None),
        }
    }

    #[test]
    fn test_opening_a_drawer_replaces_the_open_one() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            let trial = ctx.is_open(DrawerKind::Trial);
            let demo = ctx.is_open(DrawerKind::Demo);

            ctx.open(DrawerKind::Trial);
            assert!(trial.get_untracked());

            ctx.open(DrawerKind::Demo);
            assert!(!trial.get_untracked());
            assert!(demo.get_untracked());
        });
    }

    #[test]
    fn test_closer_closes_whatever_is_open() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.open(DrawerKind::Login);

            ctx.closer().run(());

            assert!(!ctx.is_open(DrawerKind::Login).get_untracked());
            assert_eq!(ctx.active.get_untracked(), None);
        });
    }
}
