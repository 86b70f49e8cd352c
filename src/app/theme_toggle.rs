use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::STORAGE_KEY;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    // rendered only after hydration, the server can't know the stored theme
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (stored, set_stored) = signal(None::<Theme>);

    let prefers_dark = use_preferred_dark();
    let theme = Memo::new(move |_| Theme::resolve(stored.get(), prefers_dark.get()));

    Effect::new(move |_| apply_theme(theme.get()));

    view! {
        <Show when=move || mounted.get()>
            <button
                type="button"
                class="inline-flex items-center justify-center h-9 w-9 rounded-md hover:bg-accent"
                aria-label="Toggle theme"
                title=move || theme.get().toggle_title()
                on:click=move |_| set_stored.set(Some(theme.get_untracked().toggled()))
            >
                <span class=move || {
                    if theme.get().is_dark() { "hidden" } else { "h-5 w-5" }
                }>"☀"</span>
                <span class=move || {
                    if theme.get().is_dark() { "h-5 w-5" } else { "hidden" }
                }>"☾"</span>
                <span class="sr-only">"Toggle theme"</span>
            </button>
        </Show>
    }
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("couldn't apply theme: {e:?}");
    }
}
