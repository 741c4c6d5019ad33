//! Login/registration form model.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::{AUTH_FALLBACK, ApiError};
use crate::types::{LoginRequest, RegisterRequest};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// A validated form, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub busy: bool,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.error = None;
    }

    /// Validate the form into a submission.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a required field is empty.
    pub fn submission(&self) -> Result<AuthSubmission, &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required.");
        }
        if self.password.is_empty() {
            return Err("Password is required.");
        }
        match self.mode {
            AuthMode::Login => Ok(AuthSubmission::Login(LoginRequest {
                email: email.to_owned(),
                password: self.password.clone(),
            })),
            AuthMode::Register => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err("Name is required.");
                }
                Ok(AuthSubmission::Register(RegisterRequest {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    password: self.password.clone(),
                }))
            }
        }
    }

    /// Mark a submission as in flight and clear the previous error.
    pub fn begin(&mut self) {
        self.busy = true;
        self.error = None;
    }

    pub fn fail(&mut self, error: &ApiError) {
        self.busy = false;
        self.error = Some(error.user_message(AUTH_FALLBACK));
    }

    pub fn reject(&mut self, message: &str) {
        self.busy = false;
        self.error = Some(message.to_owned());
    }

    /// Reset after a successful login; credentials are not kept around.
    pub fn finish(&mut self) {
        *self = Self { mode: self.mode, ..Self::default() };
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Login",
            AuthMode::Register => "Sign Up",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Need an account? Sign Up",
            AuthMode::Register => "Have an account? Login",
        }
    }
}
