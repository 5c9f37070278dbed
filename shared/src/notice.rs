//! User-facing notices.
//!
//! Copy is Portuguese to match the server-rendered pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
}

impl NoticeLevel {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice success",
            NoticeLevel::Error => "notice error",
            NoticeLevel::Warning => "notice warning",
        }
    }
}

/// A modal message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(title: &str, message: &str, level: NoticeLevel) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            level,
        }
    }

    fn error(message: &str) -> Self {
        Self::new("Ops...", message, NoticeLevel::Error)
    }

    fn success(message: &str) -> Self {
        Self::new("Sucesso!", message, NoticeLevel::Success)
    }

    // registration / login

    pub fn password_mismatch() -> Self {
        Self::new("Viixe!", "As senhas não condizem!", NoticeLevel::Error)
    }

    pub fn registered() -> Self {
        Self::new("Bem-vindo!", "Usuário cadastrado com sucesso!", NoticeLevel::Success)
    }

    pub fn registration_failed() -> Self {
        Self::error("Dados inválidos ou usuário já cadastrado!")
    }

    pub fn authentication_failed() -> Self {
        Self::error("Erro ao autenticar o usuário!")
    }

    pub fn invalid_credentials() -> Self {
        Self::error("Usuário ou senha inválidos!")
    }

    // posts

    pub fn post_create_failed() -> Self {
        Self::error("Erro ao criar a publicação!")
    }

    pub fn like_failed() -> Self {
        Self::error("Erro ao curtir publicação!")
    }

    pub fn unlike_failed() -> Self {
        Self::error("Erro ao descurtir publicação!")
    }

    pub fn post_updated() -> Self {
        Self::success("Publicação editada com sucesso!")
    }

    pub fn post_update_failed() -> Self {
        Self::error("Erro ao editar a publicação!")
    }

    pub fn post_delete_failed() -> Self {
        Self::error("Erro ao excluir a publicação!")
    }

    // users

    pub fn follow_failed() -> Self {
        Self::error("Erro ao seguir o usuário!")
    }

    pub fn unfollow_failed() -> Self {
        Self::error("Erro ao parar de seguir o usuário!")
    }

    pub fn profile_updated() -> Self {
        Self::success("Usuário atualizado com sucesso!")
    }

    pub fn profile_update_failed() -> Self {
        Self::error("Erro ao atualizar o usuário!")
    }

    pub fn new_password_mismatch() -> Self {
        Self::new("Ops...", "As senhas não coincidem!", NoticeLevel::Warning)
    }

    pub fn password_updated() -> Self {
        Self::success("Senha atualizada com sucesso!")
    }

    pub fn password_update_failed() -> Self {
        Self::error("Erro ao atualizar a senha!")
    }

    pub fn account_deleted() -> Self {
        Self::success("Sua conta foi excluída. Até mais!")
    }

    pub fn account_delete_failed() -> Self {
        Self::error("Erro ao excluir a sua conta!")
    }
}

/// Prompts for the blocking confirmation dialogs.
pub mod prompt {
    pub const DELETE_POST: &str =
        "Tem certeza que deseja excluir essa publicação? Essa ação é irreversível!";
    pub const DELETE_ACCOUNT: &str =
        "Tem certeza que deseja apagar sua conta? Essa ação é irreversível!";
}
