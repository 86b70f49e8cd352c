use leptos::prelude::*;

/// Reactive scroll spy for the navigation.
///
/// Watches the sections named by `ids` (top to bottom) and returns the id of
/// the one currently under the sticky header, or an empty string. Any change
/// to `ids` or `offset` tears the running observation down and starts over.
/// Observation is scoped to the calling component and stops when it unmounts.
pub fn use_scroll_spy(ids: Signal<Vec<String>>, offset: Signal<u32>) -> Signal<String> {
    let (active, set_active) = signal(String::new());
    let params = Memo::new(move |_| (ids.get(), offset.get()));

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let (ids, offset) = params.get();
        browser::observe(ids, offset, set_active);
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (params, set_active);

    active.into()
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use leptos::{ev, prelude::*};
    use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::scroll_spy::{PageLayout, ScrollSpy};

    struct DomLayout;

    impl PageLayout for DomLayout {
        fn section_top(&self, id: &str) -> Option<f64> {
            document()
                .get_element_by_id(id)?
                .dyn_into::<HtmlElement>()
                .ok()
                .map(|el| f64::from(el.offset_top()))
        }

        fn scroll_y(&self) -> f64 {
            window().scroll_y().unwrap_or_default()
        }
    }

    fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
        m.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts observation for the current effect run. Everything registered
    /// here is released by the effect's cleanup.
    pub(super) fn observe(ids: Vec<String>, offset: u32, set_active: WriteSignal<String>) {
        let mut spy = ScrollSpy::new(ids, offset);
        for skipped in spy.attach(&DomLayout) {
            log::debug!("scroll spy: skipping section, {skipped}");
        }
        set_active.set(spy.active().to_string());
        if !spy.is_observing() {
            return;
        }

        let spy = Arc::new(Mutex::new(spy));
        let frame = Arc::new(Mutex::new(None::<AnimationFrameRequestHandle>));

        let run_frame = {
            let spy = Arc::clone(&spy);
            move || {
                let changed = lock(&spy).on_frame(&DomLayout).map(str::to_string);
                if let Some(id) = changed {
                    log::trace!("scroll spy: active section `{id}`");
                    set_active.set(id);
                }
            }
        };

        let _ = use_event_listener_with_options(
            use_window(),
            ev::scroll,
            {
                let spy = Arc::clone(&spy);
                let frame = Arc::clone(&frame);
                move |_| {
                    if !lock(&spy).schedule_scroll() {
                        return;
                    }
                    match request_animation_frame_with_handle(run_frame.clone()) {
                        Ok(handle) => *lock(&frame) = Some(handle),
                        Err(e) => {
                            log::warn!("scroll spy: no animation frame, updating now: {e:?}");
                            run_frame();
                        }
                    }
                }
            },
            UseEventListenerOptions::default().passive(true),
        );

        let _ = use_event_listener_with_options(
            use_window(),
            ev::resize,
            {
                let spy = Arc::clone(&spy);
                move |_| {
                    let changed = lock(&spy).on_resize(&DomLayout).map(str::to_string);
                    if let Some(id) = changed {
                        set_active.set(id);
                    }
                }
            },
            UseEventListenerOptions::default().passive(true),
        );

        on_cleanup(move || {
            lock(&spy).teardown();
            if let Some(handle) = lock(&frame).take() {
                handle.cancel();
            }
        });
    }
}
