use leptos::{prelude::*, task::spawn_local};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, HtmlAnchorElement, Response, Url};

use crate::content::{RESUME_FILE, RESUME_PATH};
use crate::download::{check_status, DownloadError};

/// Fetches the resume first so a missing file shows a message instead of
/// navigating to an error page.
#[component]
pub fn DownloadCv() -> impl IntoView {
    let (error, set_error) = signal(None::<DownloadError>);

    let on_click = move |_| {
        set_error.set(None);
        spawn_local(async move {
            if let Err(e) = download(RESUME_PATH, RESUME_FILE).await {
                log::warn!("resume download failed: {e:?}");
                set_error.set(Some(e));
            }
        });
    };

    view! {
        <button type="button" class="btn btn-secondary w-full sm:w-auto" on:click=on_click>
            "Download CV"
        </button>
        {move || {
            error
                .get()
                .map(|e| {
                    view! {
                        <p class="w-full text-sm text-destructive" role="alert">
                            {e.to_string()}
                        </p>
                    }
                })
        }}
    }
}

fn js_err(e: JsValue) -> DownloadError {
    DownloadError::Unavailable(format!("{e:?}"))
}

async fn download(path: &str, file: &'static str) -> Result<(), DownloadError> {
    let resp: Response = JsFuture::from(window().fetch_with_str(path))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    check_status(file, resp.ok(), resp.status())?;

    let blob: Blob = JsFuture::from(resp.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let saved = save(&url, file);
    if let Err(e) = Url::revoke_object_url(&url) {
        log::debug!("couldn't revoke resume url: {e:?}");
    }
    saved
}

fn save(url: &str, file: &str) -> Result<(), DownloadError> {
    let link: HtmlAnchorElement = document()
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| DownloadError::Unavailable("created element is not an anchor".into()))?;
    link.set_href(url);
    link.set_download(file);
    let body = document()
        .body()
        .ok_or_else(|| DownloadError::Unavailable("document has no body".into()))?;
    body.append_child(&link).map_err(js_err)?;
    link.click();
    link.remove();
    Ok(())
}
