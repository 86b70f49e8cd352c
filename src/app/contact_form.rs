use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};

use crate::contact::{ContactError, ContactMessage};
use crate::content::CONTACT;

const THANKS: &str = "Thanks! I will get back to you shortly.";

/// Contact form that hands the message to the visitor's mail client.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(None::<Result<&'static str, ContactError>>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name_el), Some(message_el)) =
            (name_ref.get_untracked(), message_ref.get_untracked())
        else {
            return;
        };
        match ContactMessage::new(&name_el.value(), &message_el.value()) {
            Ok(msg) => {
                if let Err(e) = window().location().set_href(&msg.mailto(CONTACT.email)) {
                    log::warn!("couldn't open mail client: {e:?}");
                }
                set_status.set(Some(Ok(THANKS)));
                name_el.set_value("");
                message_el.set_value("");
            }
            Err(e) => set_status.set(Some(Err(e))),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <input
                node_ref=name_ref
                required
                name="name"
                placeholder="Your name"
                class="w-full rounded-md border bg-background px-3 py-2"
            />
            <textarea
                node_ref=message_ref
                required
                name="message"
                placeholder="Your message"
                class="w-full rounded-md border bg-background px-3 py-2 h-28"
            ></textarea>
            <button type="submit" class="btn btn-hero w-full">
                "Send via Email"
            </button>
            {move || {
                status
                    .get()
                    .map(|s| match s {
                        Ok(text) => {
                            Either::Left(view! { <p class="text-sm text-primary" role="status">{text}</p> })
                        }
                        Err(e) => {
                            Either::Right(
                                view! {
                                    <p class="text-sm text-destructive" role="alert">
                                        {e.to_string()}
                                    </p>
                                },
                            )
                        }
                    })
            }}
        </form>
    }
}
