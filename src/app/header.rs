use std::time::Duration;

use leptos::prelude::*;

use crate::content::{CONTACT, NAV_SECTIONS};
use crate::scroll_spy::DEFAULT_OFFSET;

use super::scroll_spy::use_scroll_spy;
use super::theme_toggle::ThemeToggle;

/// How long a clicked link stays highlighted before the scroll spy takes over
/// again, so the smooth scroll doesn't flicker through the sections between.
const MANUAL_HOLD: Duration = Duration::from_millis(600);

#[component]
pub fn Header() -> impl IntoView {
    let ids = NAV_SECTIONS
        .iter()
        .map(|s| s.id().to_string())
        .collect::<Vec<_>>();
    let spied = use_scroll_spy(Signal::stored(ids), Signal::stored(DEFAULT_OFFSET));
    let (manual_active, set_manual_active) = signal(None::<&'static str>);
    let current = Memo::new(move |_| match manual_active.get() {
        Some(id) => id.to_string(),
        None => spied.get(),
    });

    Effect::new(move |_| {
        if manual_active.get().is_none() {
            return;
        }
        match set_timeout_with_handle(move || set_manual_active.set(None), MANUAL_HOLD) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't schedule nav highlight reset: {e:?}");
                set_manual_active.set(None);
            }
        }
    });

    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-background/80 border-b">
            <nav class="container mx-auto flex items-center justify-between h-16 px-4">
                <a
                    href="#home"
                    class="font-extrabold text-medium md:text-lg gradient-text"
                    aria-label="Go to home"
                >
                    {CONTACT.name}
                </a>
                <div class="hidden md:flex items-center gap-2 md:gap-6 text-sm">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            let id = section.id();
                            view! {
                                <a
                                    href=section.href()
                                    on:click=move |_| set_manual_active.set(Some(id))
                                    class=move || {
                                        if current.get() == id {
                                            "transition-colors text-primary font-semibold"
                                        } else {
                                            "transition-colors hover:text-primary"
                                        }
                                    }
                                >
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <a
                        href=CONTACT.github
                        aria-label="GitHub"
                        class="hover:text-primary text-xl"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=CONTACT.linkedin
                        aria-label="LinkedIn"
                        class="hover:text-primary text-xl ml-2"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </nav>
        </header>
    }
}
