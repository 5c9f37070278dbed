//! Registration and login forms.

use std::rc::Rc;

use leptos::task::spawn_local;
use rede_shared::{Dispatcher, LoginForm, RegisterInput, Transport, Ui};
use wasm_bindgen::JsValue;

use crate::dom::{self, field_value};

pub fn bind<T, U>(dispatcher: &Rc<Dispatcher<T, U>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    // registration page
    let d = dispatcher.clone();
    dom::on_id("formulario-cadastro", "submit", move |_, event| {
        event.prevent_default();

        let input = RegisterInput {
            name: field_value("nome"),
            nick: field_value("nick"),
            email: field_value("email"),
            password: field_value("senha"),
            confirmation: field_value("confirmar-senha"),
        };
        let d = d.clone();
        spawn_local(async move {
            d.register(input).await;
        });
    })?;

    // login page
    let d = dispatcher.clone();
    dom::on_id("login", "submit", move |_, event| {
        event.prevent_default();

        let form = LoginForm {
            email: field_value("email"),
            password: field_value("senha"),
        };
        let d = d.clone();
        spawn_local(async move {
            let _ = d.login(form).await;
        });
    })?;

    Ok(())
}
