//! Account correlation state machine (combo mode)
//!
//! Tracks the most recently seen valid account value and pairs it with
//! subsequent password lines to form `email:password` records.

use crate::validate::EmailValidator;

/// Correlation state over one file pass.
///
/// A valid account line arms the correlator; every following password line
/// pairs with that account until a new account line appears. An account
/// line that fails the email check DISARMS it: a malformed account
/// invalidates correlation until the next valid one, so passwords are never
/// paired with a stale email across a broken record boundary.
#[derive(Debug)]
pub struct Correlator {
    email: EmailValidator,
    current: Option<String>,
}

impl Correlator {
    /// Create a correlator in the no-account state.
    pub fn new(email: EmailValidator) -> Self {
        Self {
            email,
            current: None,
        }
    }

    /// Feed an account line's extracted value.
    pub fn observe_account(&mut self, value: &str) {
        if self.email.is_email(value) {
            self.current = Some(value.to_string());
        } else {
            self.current = None;
        }
    }

    /// Build the combo record for a password line, if an account is armed.
    ///
    /// Does not consume the account: the same email may pair with several
    /// password lines in a row.
    pub fn pair(&self, password: &str) -> Option<String> {
        self.current
            .as_ref()
            .map(|email| format!("{}:{}", email, password))
    }

    /// Whether a valid account is currently armed.
    pub fn has_account(&self) -> bool {
        self.current.is_some()
    }
}
