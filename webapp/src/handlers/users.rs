//! Profile page actions: follow, edit profile, password, account deletion.

use std::rc::Rc;

use leptos::task::spawn_local;
use log::error;
use rede_shared::{
    Control, Dispatcher, FollowAction, PasswordChangeInput, ProfileForm, Transport, Ui, UserId,
};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::{self, field_value, ElementControl};

pub fn bind<T, U>(dispatcher: &Rc<Dispatcher<T, U>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    bind_follow(dispatcher, "seguir", FollowAction::Follow)?;
    bind_follow(dispatcher, "parar-de-seguir", FollowAction::Unfollow)?;

    let d = dispatcher.clone();
    dom::on_id("editar-usuario", "submit", move |_, event| {
        event.prevent_default();

        let form = ProfileForm {
            name: field_value("nome"),
            email: field_value("email"),
            nick: field_value("nick"),
        };
        let d = d.clone();
        spawn_local(async move {
            let _ = d.edit_profile(form).await;
        });
    })?;

    let d = dispatcher.clone();
    dom::on_id("atualizar-senha", "submit", move |_, event| {
        event.prevent_default();

        let input = PasswordChangeInput {
            current: field_value("senha-atual"),
            new: field_value("nova-senha"),
            confirmation: field_value("confirmar-senha"),
        };
        let d = d.clone();
        spawn_local(async move {
            let _ = d.change_password(input).await;
        });
    })?;

    let d = dispatcher.clone();
    dom::on_id("deletar-usuario", "click", move |_, event| {
        event.prevent_default();

        let d = d.clone();
        spawn_local(async move {
            d.delete_account().await;
        });
    })?;

    Ok(())
}

fn bind_follow<T, U>(
    dispatcher: &Rc<Dispatcher<T, U>>,
    id: &'static str,
    action: FollowAction,
) -> Result<(), JsValue>
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    let d = dispatcher.clone();
    dom::on_id(id, "click", move |trigger: Element, _| {
        let control = ElementControl(trigger);
        if control.is_disabled() {
            return;
        }

        let Some(user) = dom::data_attr(&control.0, "usuario-id") else {
            error!("#{id} has no data-usuario-id");
            return;
        };
        // a second click before the task starts must not send again
        control.set_disabled(true);
        let d = d.clone();
        spawn_local(async move {
            let _ = d.follow(&control, &UserId(user), action).await;
        });
    })
}
