//! ==============================================================================
//! dispatcher.rs - form/action dispatcher
//! ==============================================================================
//!
//! purpose:
//!     one async flow per user action. each flow validates local input,
//!     sends its request(s) through the typed client, then tells the ui
//!     what to show or where to go. flows never retry; a failure is shown
//!     once and the user triggers the action again if they want to.
//!
//! seams:
//!     - `Transport` (client.rs): how a request leaves the page
//!     - `Ui`: notices, confirmation dialogs, navigation
//!     - `Control`: the trigger that is disabled while its request runs
//!
//! dom changes (like counter, removed post) are returned as values and
//! projected by the caller.
//!
//! ==============================================================================

use log::{info, warn};

use crate::client::{Client, Transport};
use crate::config::ClientConfig;
use crate::endpoints::{PostId, Route, UserId};
use crate::error::ClientError;
use crate::forms::{LoginForm, PasswordChangeInput, PostForm, ProfileForm, RegisterInput};
use crate::like::{LikeButton, LikeRole};
use crate::notice::{prompt, Notice};

// ==============================================================================
// seams
// ==============================================================================

#[allow(async_fn_in_trait)]
pub trait Ui {
    /// Shows a notice; resolves once the user has dismissed it.
    async fn notify(&self, notice: Notice);

    /// Blocking yes/no dialog.
    fn confirm(&self, prompt: &str) -> bool;

    fn navigate(&self, route: &Route);
}

/// A trigger element that can be disabled.
pub trait Control {
    fn set_disabled(&self, disabled: bool);
}

/// Keeps a control disabled while alive and re-enables it on drop.
pub struct DisabledGuard<'a, C: Control + ?Sized> {
    control: &'a C,
    armed: bool,
}

impl<'a, C: Control + ?Sized> DisabledGuard<'a, C> {
    pub fn new(control: &'a C) -> Self {
        control.set_disabled(true);
        Self {
            control,
            armed: true,
        }
    }

    /// Leaves the control disabled, e.g. when the page is about to change.
    pub fn hold(mut self) {
        self.armed = false;
    }
}

impl<C: Control + ?Sized> Drop for DisabledGuard<'_, C> {
    fn drop(&mut self) {
        if self.armed {
            self.control.set_disabled(false);
        }
    }
}

// ==============================================================================
// outcomes
// ==============================================================================

/// Result of the register-then-login chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// local validation failed, nothing was sent
    Rejected(ClientError),
    RegistrationFailed(ClientError),
    /// account exists but the follow-up login failed
    LoginFailed(ClientError),
    LoggedIn,
}

/// Result of a confirm-then-delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(ClientError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    Follow,
    Unfollow,
}

// ==============================================================================
// dispatcher
// ==============================================================================

pub struct Dispatcher<T, U> {
    client: Client<T>,
    ui: U,
    config: ClientConfig,
}

impl<T: Transport, U: Ui> Dispatcher<T, U> {
    pub fn new(transport: T, ui: U, config: ClientConfig) -> Self {
        Self {
            client: Client::new(transport),
            ui,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub async fn register(&self, input: RegisterInput) -> RegisterOutcome {
        let (register, login) = match input.validate() {
            Ok(forms) => forms,
            Err(err) => {
                self.ui.notify(Notice::password_mismatch()).await;
                return RegisterOutcome::Rejected(err);
            }
        };

        if let Err(err) = self.client.register(&register).await {
            warn!("registration failed: {err}");
            self.ui.notify(Notice::registration_failed()).await;
            return RegisterOutcome::RegistrationFailed(err);
        }
        info!("user {} registered", register.nick);
        self.ui.notify(Notice::registered()).await;

        if let Err(err) = self.client.login(&login).await {
            warn!("login after registration failed: {err}");
            self.ui.notify(Notice::authentication_failed()).await;
            return RegisterOutcome::LoginFailed(err);
        }

        self.ui.navigate(&Route::Home);
        RegisterOutcome::LoggedIn
    }

    pub async fn login(&self, form: LoginForm) -> Result<(), ClientError> {
        match self.client.login(&form).await {
            Ok(()) => {
                self.ui.navigate(&Route::Home);
                Ok(())
            }
            Err(err) => {
                warn!("login failed: {err}");
                self.ui.notify(Notice::invalid_credentials()).await;
                Err(err)
            }
        }
    }

    pub async fn create_post(&self, form: PostForm) -> Result<(), ClientError> {
        match self.client.create_post(&form).await {
            Ok(()) => {
                self.ui.navigate(&Route::Home);
                Ok(())
            }
            Err(err) => {
                warn!("create post failed: {err}");
                self.ui.notify(Notice::post_create_failed()).await;
                Err(err)
            }
        }
    }

    /// Likes or unlikes depending on the trigger's current role and returns
    /// the state to render.
    pub async fn toggle_like<C>(&self, trigger: &C, state: LikeButton) -> LikeButton
    where
        C: Control + ?Sized,
    {
        let guard = DisabledGuard::new(trigger);
        let outcome = match state.role {
            LikeRole::Like => self.client.like_post(&state.post_id).await,
            LikeRole::Unlike => self.client.unlike_post(&state.post_id).await,
        };
        drop(guard);

        let next = state.settle(&outcome);
        if let Err(err) = outcome {
            warn!("{:?} failed for post {}: {err}", state.role, state.post_id);
            let notice = match state.role {
                LikeRole::Like => Notice::like_failed(),
                LikeRole::Unlike => Notice::unlike_failed(),
            };
            self.ui.notify(notice).await;
        }
        next
    }

    pub async fn edit_post<C>(&self, trigger: &C, id: &PostId, form: PostForm) -> Result<(), ClientError>
    where
        C: Control + ?Sized,
    {
        let guard = DisabledGuard::new(trigger);
        let result = self.client.edit_post(id, &form).await;
        drop(guard);

        match result {
            Ok(()) => {
                self.ui.notify(Notice::post_updated()).await;
                if self.config.edit_post_redirect {
                    self.ui.navigate(&Route::Home);
                }
                Ok(())
            }
            Err(err) => {
                warn!("edit failed for post {id}: {err}");
                self.ui.notify(Notice::post_update_failed()).await;
                Err(err)
            }
        }
    }

    /// Asks first; on `Deleted` the caller removes the post from the page.
    pub async fn delete_post<C>(&self, trigger: &C, id: &PostId) -> DeleteOutcome
    where
        C: Control + ?Sized,
    {
        if !self.ui.confirm(prompt::DELETE_POST) {
            return DeleteOutcome::Cancelled;
        }

        let guard = DisabledGuard::new(trigger);
        let result = self.client.delete_post(id).await;
        drop(guard);

        match result {
            Ok(()) => DeleteOutcome::Deleted,
            Err(err) => {
                warn!("delete failed for post {id}: {err}");
                self.ui.notify(Notice::post_delete_failed()).await;
                DeleteOutcome::Failed(err)
            }
        }
    }

    /// On success the page moves to the user's profile and the trigger
    /// stays disabled until it does.
    pub async fn follow<C>(&self, trigger: &C, id: &UserId, action: FollowAction) -> Result<(), ClientError>
    where
        C: Control + ?Sized,
    {
        let guard = DisabledGuard::new(trigger);
        let result = match action {
            FollowAction::Follow => self.client.follow(id).await,
            FollowAction::Unfollow => self.client.unfollow(id).await,
        };

        match result {
            Ok(()) => {
                guard.hold();
                self.ui.navigate(&Route::User(id.clone()));
                Ok(())
            }
            Err(err) => {
                drop(guard);
                warn!("{action:?} failed for user {id}: {err}");
                let notice = match action {
                    FollowAction::Follow => Notice::follow_failed(),
                    FollowAction::Unfollow => Notice::unfollow_failed(),
                };
                self.ui.notify(notice).await;
                Err(err)
            }
        }
    }

    pub async fn edit_profile(&self, form: ProfileForm) -> Result<(), ClientError> {
        match self.client.edit_profile(&form).await {
            Ok(()) => {
                self.ui.notify(Notice::profile_updated()).await;
                self.ui.navigate(&Route::OwnProfile);
                Ok(())
            }
            Err(err) => {
                warn!("profile update failed: {err}");
                self.ui.notify(Notice::profile_update_failed()).await;
                Err(err)
            }
        }
    }

    pub async fn change_password(&self, input: PasswordChangeInput) -> Result<(), ClientError> {
        let form = match input.validate() {
            Ok(form) => form,
            Err(err) => {
                self.ui.notify(Notice::new_password_mismatch()).await;
                return Err(err);
            }
        };

        match self.client.change_password(&form).await {
            Ok(()) => {
                self.ui.notify(Notice::password_updated()).await;
                self.ui.navigate(&Route::OwnProfile);
                Ok(())
            }
            Err(err) => {
                warn!("password change failed: {err}");
                self.ui.notify(Notice::password_update_failed()).await;
                Err(err)
            }
        }
    }

    pub async fn delete_account(&self) -> DeleteOutcome {
        if !self.ui.confirm(prompt::DELETE_ACCOUNT) {
            return DeleteOutcome::Cancelled;
        }

        match self.client.delete_account().await {
            Ok(()) => {
                self.ui.notify(Notice::account_deleted()).await;
                self.ui.navigate(&Route::Logout);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!("account deletion failed: {err}");
                self.ui.notify(Notice::account_delete_failed()).await;
                DeleteOutcome::Failed(err)
            }
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
