//! Notice modal component

use std::sync::Mutex;

use futures::channel::oneshot;
use leptos::mount::mount_to;
use leptos::prelude::*;
use log::warn;
use rede_shared::Notice;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::dom;

// the pages ship no stylesheet for the modal, so it carries its own layout
const BACKDROP_STYLE: &str = "position: fixed; inset: 0; z-index: 10000; display: flex; \
    align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.45);";
const DIALOG_STYLE: &str = "background: #fff; color: #212529; padding: 1.5rem 2rem; \
    border-radius: 0.5rem; max-width: 28rem; text-align: center; \
    box-shadow: 0 0.5rem 1.5rem rgba(0, 0, 0, 0.3);";

#[component]
pub fn NoticeModal(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="notice-backdrop" style=BACKDROP_STYLE>
            <div class=notice.level.class() style=DIALOG_STYLE role="alertdialog" aria-modal="true">
                <h2>{notice.title}</h2>
                <p>{notice.message}</p>
                <button on:click=move |_| on_close.run(())>"OK"</button>
            </div>
        </div>
    }
}

/// Shows `notice` on top of the page and resolves once it is dismissed.
pub async fn show(notice: Notice) {
    let host = match create_host() {
        Ok(host) => host,
        Err(err) => {
            warn!("notice host unavailable ({err:?}), falling back to alert");
            alert(&notice);
            return;
        }
    };

    let (tx, rx) = oneshot::channel::<()>();
    let tx = Mutex::new(Some(tx));
    let on_close = Callback::new(move |_: ()| {
        if let Some(tx) = tx.lock().ok().and_then(|mut slot| slot.take()) {
            let _ = tx.send(());
        }
    });

    let handle = mount_to(host.clone(), move || {
        view! { <NoticeModal notice=notice on_close=on_close /> }
    });

    // closed or dropped, the notice is gone either way
    let _ = rx.await;
    drop(handle);
    host.remove();
}

fn create_host() -> Result<HtmlElement, JsValue> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body to exist"))?;
    let host = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)?;
    body.append_child(&host)?;
    Ok(host)
}

fn alert(notice: &Notice) {
    let message = format!("{}\n{}", notice.title, notice.message);
    if let Err(err) = dom::window().and_then(|w| w.alert_with_message(&message)) {
        warn!("alert failed: {err:?}");
    }
}
