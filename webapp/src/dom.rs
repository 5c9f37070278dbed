//! ==============================================================================
//! dom.rs - small helpers over web-sys
//! ==============================================================================
//!
//! the pages are rendered by the server; these helpers only look elements
//! up, read fields and attach listeners. listeners live as long as the
//! page, so their closures are leaked on purpose.
//!
//! ==============================================================================

use js_sys::Promise;
use log::{debug, warn};
use rede_shared::config::META_PREFIX;
use rede_shared::Control;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Current value of an `<input>` or `<textarea>` by id. A missing field
/// reads as empty.
pub fn field_value(id: &str) -> String {
    let Some(element) = by_id(id) else {
        warn!("field #{id} not found");
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        warn!("#{id} is not an input field");
        String::new()
    }
}

/// `data-{name}` attribute of an element.
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

/// Reads `<meta name="rede:{key}" content="...">`.
pub fn meta_lookup(key: &str) -> Option<String> {
    let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
    document()
        .ok()?
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

// ==============================================================================
// events
// ==============================================================================

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Binds `handler` to `#id` if the element is on this page. The handler
/// receives the element along with the event.
pub fn on_id<F>(id: &str, event: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Element, Event) + 'static,
{
    let Some(element) = by_id(id) else {
        debug!("#{id} not on this page");
        return Ok(());
    };

    let target = element.clone();
    listen(&element, event, move |ev| handler(target.clone(), ev))
}

/// Element the event started on, or its nearest ancestor matching `selector`.
pub fn event_closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()?
}

/// The next element sibling, if it is a `<span>`.
pub fn next_span(element: &Element) -> Option<Element> {
    element
        .next_element_sibling()
        .filter(|sibling| sibling.tag_name().eq_ignore_ascii_case("span"))
}

// ==============================================================================
// controls
// ==============================================================================

/// Any trigger element. Buttons use the `disabled` property, anything
/// else (icons, links) carries a `disabled` attribute that the delegated
/// handlers check.
pub struct ElementControl(pub Element);

impl ElementControl {
    pub fn is_disabled(&self) -> bool {
        match self.0.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => self.0.has_attribute("disabled"),
        }
    }
}

impl Control for ElementControl {
    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }

        let result = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(err) = result {
            warn!("could not toggle disabled: {err:?}");
        }
    }
}

// ==============================================================================
// effects
// ==============================================================================

pub async fn sleep(ms: u32) -> Result<(), JsValue> {
    let window = window()?;
    let promise = Promise::new(&mut |resolve, _| {
        if let Err(err) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms(ms))
        {
            warn!("set_timeout failed: {err:?}");
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await?;
    Ok(())
}

/// `setTimeout` takes an `i32`; longer delays are clamped, not wrapped.
fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Fades the element out over `ms`, then takes it off the page.
pub async fn fade_out_and_remove(element: &Element, ms: u32) -> Result<(), JsValue> {
    if ms > 0 {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let style = html.style();
            style.set_property("transition", &format!("opacity {ms}ms"))?;
            style.set_property("opacity", "0")?;
            sleep(ms).await?;
        }
    }
    element.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_clamped() {
        assert_eq!(timeout_ms(400), 400);
        assert_eq!(timeout_ms(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
    }
}
