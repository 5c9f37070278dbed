//! ==============================================================================
//! lib.rs - shared logic for the rede social web client
//! ==============================================================================
//!
//! purpose:
//!     everything the page scripts do that does not touch the browser:
//!     endpoint table, navigation routes, form payloads and validation,
//!     the like counter view model, user-facing notices, configuration
//!     parsing and the action dispatcher itself.
//!
//! relationships:
//!     - used by: webapp (binds dom events, supplies the fetch transport
//!       and the browser ui)
//!     - talks to: the /web/* handlers of the server-rendered site
//!
//! design rationale:
//!     the dispatcher is generic over a `Transport` and a `Ui`, so every
//!     flow (register then login, like toggle, confirm then delete) runs
//!     natively in tests against a scripted backend. the wasm crate only
//!     adapts those two seams to fetch and the dom.
//!
//! ==============================================================================

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod like;
pub mod notice;

#[cfg(test)]
mod testing;

pub use client::{ApiRequest, Client, Transport};
pub use config::ClientConfig;
pub use dispatcher::{
    Control, DeleteOutcome, DisabledGuard, Dispatcher, FollowAction, RegisterOutcome, Ui,
};
pub use endpoints::{Endpoint, Method, PostId, Route, UserId};
pub use error::ClientError;
pub use forms::{
    LoginForm, PasswordChangeInput, PasswordForm, PostForm, ProfileForm, RegisterForm,
    RegisterInput,
};
pub use like::{LikeButton, LikeRole, LikeView};
pub use notice::{Notice, NoticeLevel};
