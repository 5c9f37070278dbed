//! ==============================================================================
//! handlers/mod.rs - page event bindings
//! ==============================================================================
//!
//! the same module runs on every page; each binder attaches to the
//! elements it finds and skips the rest.
//!
//! ==============================================================================

use std::rc::Rc;

use rede_shared::{Dispatcher, Transport, Ui};
use wasm_bindgen::JsValue;


pub mod account;
pub mod posts;
pub mod users;

pub fn bind_all<T, U>(dispatcher: &Rc<Dispatcher<T, U>>) -> Result<(), JsValue>
where
    T: Transport + 'static,
    U: Ui + 'static,
{
    account::bind(dispatcher)?;
    posts::bind(dispatcher)?;
    users::bind(dispatcher)?;
    Ok(())
}
