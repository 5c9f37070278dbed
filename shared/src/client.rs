//! ==============================================================================
//! client.rs - typed client for the site endpoints
//! ==============================================================================
//!
//! one method per endpoint. every call resolves to `Ok(())` on a 2xx and
//! to a `ClientError` otherwise; response bodies on success are ignored.
//!
//! ==============================================================================

use log::debug;
use serde::Serialize;

use crate::endpoints::{Endpoint, PostId, UserId};
use crate::error::ClientError;
use crate::forms::{self, LoginForm, PasswordForm, PostForm, ProfileForm, RegisterForm};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// A request ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    /// form-urlencoded body, if the endpoint takes one
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn empty(endpoint: Endpoint) -> Self {
        Self { endpoint, body: None }
    }

    pub fn with_form<T: Serialize>(endpoint: Endpoint, form: &T) -> Result<Self, ClientError> {
        Ok(Self {
            endpoint,
            body: Some(forms::encode(form)?),
        })
    }
}

/// Sends one request and reports whether it succeeded.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<(), ClientError>;
}

pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: ApiRequest) -> Result<(), ClientError> {
        debug!(
            "{} {}",
            request.endpoint.method().as_str(),
            request.endpoint.path()
        );
        self.transport.send(request).await
    }

    async fn send_form<F: Serialize>(&self, endpoint: Endpoint, form: &F) -> Result<(), ClientError> {
        self.send(ApiRequest::with_form(endpoint, form)?).await
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::Register, form).await
    }

    pub async fn login(&self, form: &LoginForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::Login, form).await
    }

    pub async fn create_post(&self, form: &PostForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::CreatePost, form).await
    }

    pub async fn like_post(&self, id: &PostId) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::LikePost(id.clone()))).await
    }

    pub async fn unlike_post(&self, id: &PostId) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::UnlikePost(id.clone()))).await
    }

    pub async fn edit_post(&self, id: &PostId, form: &PostForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::EditPost(id.clone()), form).await
    }

    pub async fn delete_post(&self, id: &PostId) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::DeletePost(id.clone()))).await
    }

    pub async fn follow(&self, id: &UserId) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::Follow(id.clone()))).await
    }

    pub async fn unfollow(&self, id: &UserId) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::Unfollow(id.clone()))).await
    }

    pub async fn edit_profile(&self, form: &ProfileForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::EditProfile, form).await
    }

    pub async fn change_password(&self, form: &PasswordForm) -> Result<(), ClientError> {
        self.send_form(Endpoint::ChangePassword, form).await
    }

    pub async fn delete_account(&self) -> Result<(), ClientError> {
        self.send(ApiRequest::empty(Endpoint::DeleteAccount)).await
    }
}
