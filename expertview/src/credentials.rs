use crate::errors::expertview_error::ExpertViewError;
use std::fmt;

/// Hashes a plaintext secret the way the service expects it: lowercase hex MD5.
pub fn hash_password(secret: &str) -> String {
    format!("{:x}", md5::compute(secret.as_bytes()))
}

/// Login and password for the web service. The password is only ever sent hashed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn password_hash(&self) -> String {
        hash_password(&self.password)
    }

    pub(crate) fn validate(&self) -> Result<(), ExpertViewError> {
        if self.login.is_empty() || self.password.is_empty() {
            return Err(ExpertViewError::MissingCredentials);
        }

        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}
