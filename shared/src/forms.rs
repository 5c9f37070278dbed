//! Form payloads sent to the site handlers.
//!
//! Field names on the wire are the ones the handlers read with
//! `FormValue`, so the structs rename to them.

use serde::Serialize;

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    #[serde(rename = "nome")]
    pub name: String,
    pub nick: String,
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostForm {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "conteudo")]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub nick: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordForm {
    #[serde(rename = "atual")]
    pub current: String,
    #[serde(rename = "nova")]
    pub new: String,
}

/// Registration fields as typed, confirmation included.
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub name: String,
    pub nick: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

impl RegisterInput {
    /// Checks the confirmation and splits the input into the register
    /// payload and the login payload that follows it.
    pub fn validate(self) -> Result<(RegisterForm, LoginForm), ClientError> {
        check_confirmation(&self.password, &self.confirmation)?;

        let login = LoginForm {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        let register = RegisterForm {
            name: self.name,
            nick: self.nick,
            email: self.email,
            password: self.password,
        };
        Ok((register, login))
    }
}

/// Password change fields as typed.
#[derive(Debug, Clone, Default)]
pub struct PasswordChangeInput {
    pub current: String,
    pub new: String,
    pub confirmation: String,
}

impl PasswordChangeInput {
    pub fn validate(self) -> Result<PasswordForm, ClientError> {
        check_confirmation(&self.new, &self.confirmation)?;
        Ok(PasswordForm {
            current: self.current,
            new: self.new,
        })
    }
}

/// Exact comparison, no trimming: the browser sends what was typed.
pub fn check_confirmation(password: &str, confirmation: &str) -> Result<(), ClientError> {
    if password != confirmation {
        return Err(ClientError::PasswordMismatch);
    }
    Ok(())
}

/// Encodes a payload as `application/x-www-form-urlencoded`.
pub fn encode<T: Serialize>(form: &T) -> Result<String, ClientError> {
    serde_urlencoded::to_string(form).map_err(|e| ClientError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_input(password: &str, confirmation: &str) -> RegisterInput {
        RegisterInput {
            name: "Ana Souza".to_string(),
            nick: "ana".to_string(),
            email: "ana@rede.dev".to_string(),
            password: password.to_string(),
            confirmation: confirmation.to_string(),
        }
    }

    #[test]
    fn test_register_input_splits_into_register_and_login() {
        let (register, login) = register_input("s3nha", "s3nha").validate().unwrap();
        assert_eq!(register.nick, "ana");
        assert_eq!(login.email, "ana@rede.dev");
        assert_eq!(login.password, "s3nha");
    }

    #[test]
    fn test_register_input_rejects_mismatch() {
        let err = register_input("s3nha", "senha").validate().unwrap_err();
        assert_eq!(err, ClientError::PasswordMismatch);
    }

    #[test]
    fn test_confirmation_is_not_trimmed() {
        assert!(check_confirmation("abc", "abc ").is_err());
        assert!(check_confirmation("", "").is_ok());
    }

    #[test]
    fn test_register_form_uses_wire_names() {
        let (register, _) = register_input("a b", "a b").validate().unwrap();
        assert_eq!(
            encode(&register).unwrap(),
            "nome=Ana+Souza&nick=ana&email=ana%40rede.dev&senha=a+b"
        );
    }

    #[test]
    fn test_password_form_uses_wire_names() {
        let form = PasswordChangeInput {
            current: "velha".to_string(),
            new: "nova&1".to_string(),
            confirmation: "nova&1".to_string(),
        }
        .validate()
        .unwrap();
        assert_eq!(encode(&form).unwrap(), "atual=velha&nova=nova%261");
    }

    #[test]
    fn test_post_and_profile_forms() {
        let post = PostForm {
            title: "Oi".to_string(),
            content: "primeira publicação".to_string(),
        };
        assert_eq!(
            encode(&post).unwrap(),
            "titulo=Oi&conteudo=primeira+publica%C3%A7%C3%A3o"
        );

        let profile = ProfileForm {
            name: "Ana".to_string(),
            email: "ana@rede.dev".to_string(),
            nick: "ana".to_string(),
        };
        assert_eq!(encode(&profile).unwrap(), "nome=Ana&email=ana%40rede.dev&nick=ana");
    }
}
