//! ==============================================================================
//! endpoints.rs - request targets and navigation routes
//! ==============================================================================
//!
//! every url the page scripts touch lives here. ids come straight from
//! `data-*` attributes and are passed through untouched.
//!
//! ==============================================================================

use std::fmt;

/// post identifier as rendered in `data-publicacao-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(pub String);

/// user identifier as rendered in `data-usuario-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

// ==============================================================================
// endpoints
// ==============================================================================

/// One variant per backend action the client can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    CreatePost,
    LikePost(PostId),
    UnlikePost(PostId),
    EditPost(PostId),
    DeletePost(PostId),
    Follow(UserId),
    Unfollow(UserId),
    EditProfile,
    ChangePassword,
    DeleteAccount,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register
            | Endpoint::Login
            | Endpoint::CreatePost
            | Endpoint::LikePost(_)
            | Endpoint::Follow(_)
            | Endpoint::Unfollow(_) => Method::Post,
            Endpoint::UnlikePost(_)
            | Endpoint::EditPost(_)
            | Endpoint::EditProfile
            | Endpoint::ChangePassword => Method::Put,
            Endpoint::DeletePost(_) | Endpoint::DeleteAccount => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/web/usuario/registrar".to_string(),
            Endpoint::Login => "/web/login".to_string(),
            Endpoint::CreatePost => "/web/publicacoes".to_string(),
            Endpoint::LikePost(id) => format!("/web/publicacoes/{}/curtir", id),
            Endpoint::UnlikePost(id) => format!("/web/publicacoes/{}/descurtir", id),
            Endpoint::EditPost(id) => format!("/web/publicacoes/{}", id),
            Endpoint::DeletePost(id) => format!("/web/publicacoes/{}/deletar", id),
            Endpoint::Follow(id) => format!("/web/usuario/{}/seguir", id),
            Endpoint::Unfollow(id) => format!("/web/usuario/{}/parar-de-seguir", id),
            Endpoint::EditProfile => "/web/editar-usuario".to_string(),
            Endpoint::ChangePassword => "/web/atualizar-senha".to_string(),
            Endpoint::DeleteAccount => "/web/deletar-usuario".to_string(),
        }
    }

    /// Full url for this endpoint under `base` (empty for same origin).
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

// ==============================================================================
// navigation routes
// ==============================================================================

/// Pages the client navigates to after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    /// someone's public profile
    User(UserId),
    /// the signed-in user's own profile
    OwnProfile,
    Logout,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/web/home".to_string(),
            Route::Login => "/web/login".to_string(),
            Route::User(id) => format!("/web/usuario/{}", id),
            Route::OwnProfile => "/web/perfil".to_string(),
            Route::Logout => "/web/logout".to_string(),
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_endpoints() {
        let id = PostId::from("42");
        assert_eq!(Endpoint::LikePost(id.clone()).path(), "/web/publicacoes/42/curtir");
        assert_eq!(Endpoint::LikePost(id.clone()).method(), Method::Post);
        assert_eq!(Endpoint::UnlikePost(id.clone()).path(), "/web/publicacoes/42/descurtir");
        assert_eq!(Endpoint::UnlikePost(id.clone()).method(), Method::Put);
        assert_eq!(Endpoint::EditPost(id.clone()).path(), "/web/publicacoes/42");
        assert_eq!(Endpoint::EditPost(id.clone()).method(), Method::Put);
        assert_eq!(Endpoint::DeletePost(id.clone()).path(), "/web/publicacoes/42/deletar");
        assert_eq!(Endpoint::DeletePost(id).method(), Method::Delete);
    }

    #[test]
    fn test_user_endpoints() {
        let id = UserId::from("7");
        assert_eq!(Endpoint::Follow(id.clone()).path(), "/web/usuario/7/seguir");
        assert_eq!(Endpoint::Unfollow(id.clone()).path(), "/web/usuario/7/parar-de-seguir");
        assert_eq!(Endpoint::Unfollow(id).method(), Method::Post);
        assert_eq!(Endpoint::EditProfile.method(), Method::Put);
        assert_eq!(Endpoint::ChangePassword.path(), "/web/atualizar-senha");
        assert_eq!(Endpoint::DeleteAccount.method(), Method::Delete);
    }

    #[test]
    fn test_url_joins_base() {
        assert_eq!(Endpoint::Login.url(""), "/web/login");
        assert_eq!(Endpoint::Login.url("https://rede.example/"), "https://rede.example/web/login");
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Home.path(), "/web/home");
        assert_eq!(Route::User(UserId::from("3")).path(), "/web/usuario/3");
        assert_eq!(Route::Logout.path(), "/web/logout");
    }
}
