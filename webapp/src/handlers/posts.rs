//! ==============================================================================
//! handlers/posts.rs - post creation, likes, edit and delete
//! ==============================================================================
//!
//! like and delete triggers are rendered once per post and swap classes at
//! runtime, so they are handled by delegated click listeners on the
//! document. the post id comes from the nearest `div[data-publicacao-id]`.
//!
//! ==============================================================================

use std::rc::Rc;

use leptos::task::spawn_local;
use log::{error, warn};
use rede_shared::like::{HIGHLIGHT_CLASS, LIKE_CLASS, UNLIKE_CLASS};
use rede_shared::{
    Control, DeleteOutcome, Dispatcher, LikeButton, LikeRole, LikeView, PostForm, PostId,
    Transport, Ui,
};
use wasm_bindgen::JsValue;
use web_sys::{Element, Event};

use crate::dom::{self, field_value, ElementControl};

pub const POST_CONTAINER: &str = "div[data-publicacao-id]";
pub const DELETE_CLASS: &str = "deletar-publicacao";

pub fn bind<T, U>(dispatcher: &Rc<Dispatcher<T, U>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    let document = dom::document()?;

    // new post form on the home page
    let d = dispatcher.clone();
    dom::on_id("nova-publicacao", "submit", move |_, event| {
        event.prevent_default();

        let form = read_post_form();
        let d = d.clone();
        spawn_local(async move {
            let _ = d.create_post(form).await;
        });
    })?;

    // like / unlike
    let d = dispatcher.clone();
    let like_selector = format!(".{LIKE_CLASS}, .{UNLIKE_CLASS}");
    dom::listen(&document, "click", move |event| {
        if let Some(trigger) = dom::event_closest(&event, &like_selector) {
            on_like_click(&d, trigger, &event);
        }
    })?;

    // delete
    let d = dispatcher.clone();
    let delete_selector = format!(".{DELETE_CLASS}");
    dom::listen(&document, "click", move |event| {
        if let Some(trigger) = dom::event_closest(&event, &delete_selector) {
            on_delete_click(&d, trigger, &event);
        }
    })?;

    // edit page
    let d = dispatcher.clone();
    dom::on_id("atualizar-publicacao", "click", move |trigger, event| {
        event.prevent_default();

        let control = ElementControl(trigger);
        if control.is_disabled() {
            return;
        }
        let Some(id) = dom::data_attr(&control.0, "publicacao-id") else {
            error!("#atualizar-publicacao has no data-publicacao-id");
            return;
        };
        let form = read_post_form();
        control.set_disabled(true);
        let d = d.clone();
        spawn_local(async move {
            let _ = d.edit_post(&control, &PostId(id), form).await;
        });
    })?;

    Ok(())
}

fn read_post_form() -> PostForm {
    PostForm {
        title: field_value("titulo"),
        content: field_value("conteudo"),
    }
}

fn on_like_click<T, U>(dispatcher: &Rc<Dispatcher<T, U>>, trigger: Element, event: &Event)
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    event.prevent_default();

    let control = ElementControl(trigger);
    if control.is_disabled() {
        return;
    }

    let (state, counter) = match read_like(&control.0) {
        Ok(found) => found,
        Err(err) => {
            error!("like trigger does not match the page layout: {err:?}");
            return;
        }
    };

    // disabled now, not when the task starts, so a quick second click is
    // dropped by the check above
    control.set_disabled(true);
    let d = dispatcher.clone();
    spawn_local(async move {
        let next = d.toggle_like(&control, state).await;
        if let Err(err) = render_like(&control.0, &counter, &next.render()) {
            error!("could not update like counter: {err:?}");
        }
    });
}

fn on_delete_click<T, U>(dispatcher: &Rc<Dispatcher<T, U>>, trigger: Element, event: &Event)
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    event.prevent_default();

    let control = ElementControl(trigger);
    if control.is_disabled() {
        return;
    }

    let Some((container, id)) = post_container(&control.0) else {
        error!("delete trigger is not inside {POST_CONTAINER}");
        return;
    };

    control.set_disabled(true);
    let d = dispatcher.clone();
    spawn_local(async move {
        match d.delete_post(&control, &id).await {
            DeleteOutcome::Deleted => {}
            DeleteOutcome::Cancelled => {
                control.set_disabled(false);
                return;
            }
            DeleteOutcome::Failed(_) => return,
        }
        if let Err(err) = dom::fade_out_and_remove(&container, d.config().post_fade_ms).await {
            warn!("fade failed, removing post {id} at once: {err:?}");
            container.remove();
        }
    });
}

/// Nearest post container of `element` and the id it carries.
pub fn post_container(element: &Element) -> Option<(Element, PostId)> {
    let container = element.closest(POST_CONTAINER).ok()??;
    let id = dom::data_attr(&container, "publicacao-id")?;
    Some((container, PostId(id)))
}

/// Builds the like state from the trigger and returns it with the counter
/// element it was read from.
pub fn read_like(trigger: &Element) -> Result<(LikeButton, Element), JsValue> {
    let (_, id) = post_container(trigger)
        .ok_or_else(|| JsValue::from_str("no post container with data-publicacao-id"))?;
    let counter = dom::next_span(trigger)
        .ok_or_else(|| JsValue::from_str("no counter span after the trigger"))?;
    let class_name = trigger.class_name();
    let role = LikeRole::from_classes(class_name.split_whitespace())
        .ok_or_else(|| JsValue::from_str("trigger has neither like class"))?;

    let text = counter.text_content().unwrap_or_default();
    Ok((LikeButton::new(id, &text, role), counter))
}

/// Writes a like view to the page. Rendering the same view twice leaves
/// the page unchanged.
pub fn render_like(trigger: &Element, counter: &Element, view: &LikeView) -> Result<(), JsValue> {
    counter.set_text_content(Some(&view.counter_text));

    let classes = trigger.class_list();
    classes.remove_1(view.stale_class)?;
    classes.add_1(view.trigger_class)?;
    classes.toggle_with_force(HIGHLIGHT_CLASS, view.highlighted)?;
    Ok(())
}
