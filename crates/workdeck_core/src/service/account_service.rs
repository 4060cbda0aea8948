//! Account use-case service.
//!
//! # Responsibility
//! - Validate sign-up, sign-in, profile and password inputs above the store.
//! - Drive the three-step password recovery flow.
//! - Set session flags after successful authentication.
//!
//! # Invariants
//! - Validation runs in a fixed order and the first failure is returned.
//! - Error `Display` output is the user-facing message.
//! - Passwords and contact values never appear in log events.

use crate::model::workspace::Credentials;
use crate::repo::workspace_store::WorkspaceStore;
use crate::session::Session;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted length for a new password, in chars.
pub const MIN_PASSWORD_CHARS: usize = 6;
/// Length of a recovery verification code.
pub const RECOVERY_CODE_DIGITS: usize = 6;

/// Errors from account service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountServiceError {
    /// Target domain has no record.
    DomainNotFound(String),
    /// Sign-up on a domain that already has a password.
    AlreadyRegistered(String),
    PasswordRequired,
    PasswordMismatch,
    /// Sign-up without a recovery email.
    RecoveryEmailRequired,
    /// Profile update without an email.
    EmailRequired,
    IncorrectPassword,
    /// Password change with a blank field.
    AllFieldsRequired,
    CurrentPasswordIncorrect,
    /// Password change below [`MIN_PASSWORD_CHARS`].
    NewPasswordTooShort,
    /// Recovery reset below [`MIN_PASSWORD_CHARS`].
    ResetPasswordTooShort,
    EmailNotFound,
    PhoneNotFound,
    InvalidRecoveryCode,
    /// Recovery step called while the flow is at another step.
    RecoveryStepOutOfOrder {
        expected: RecoveryStep,
        actual: RecoveryStep,
    },
}

impl Display for AccountServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainNotFound(domain) => write!(f, "Workspace `{domain}` not found"),
            Self::AlreadyRegistered(domain) => {
                write!(f, "Workspace `{domain}` already has a password")
            }
            Self::PasswordRequired => write!(f, "Password is required"),
            Self::PasswordMismatch => write!(f, "Passwords do not match"),
            Self::RecoveryEmailRequired => write!(f, "Email is required for account recovery"),
            Self::EmailRequired => write!(f, "Email is required"),
            Self::IncorrectPassword => write!(f, "Incorrect password"),
            Self::AllFieldsRequired => write!(f, "All fields are required"),
            Self::CurrentPasswordIncorrect => write!(f, "Current password is incorrect"),
            Self::NewPasswordTooShort => write!(
                f,
                "New password must be at least {MIN_PASSWORD_CHARS} characters"
            ),
            Self::ResetPasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_CHARS} characters")
            }
            Self::EmailNotFound => write!(f, "Email address not found"),
            Self::PhoneNotFound => write!(f, "Phone number not found"),
            Self::InvalidRecoveryCode => write!(
                f,
                "Please enter a valid {RECOVERY_CODE_DIGITS}-digit code"
            ),
            Self::RecoveryStepOutOfOrder { expected, actual } => write!(
                f,
                "password recovery is at step {actual:?}, expected {expected:?}"
            ),
        }
    }
}

impl Error for AccountServiceError {}

/// Sign-up form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpRequest {
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub phone: String,
}

/// Password change form input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Account service facade over a borrowed store.
pub struct AccountService<'store> {
    store: &'store mut WorkspaceStore,
}

impl<'store> AccountService<'store> {
    pub fn new(store: &'store mut WorkspaceStore) -> Self {
        Self { store }
    }

    /// Returns whether `domain` has completed sign-up.
    ///
    /// Unregistered domains are offered sign-up instead of sign-in.
    pub fn is_registered(&self, domain: &str) -> bool {
        self.store
            .domain(domain)
            .is_some_and(|record| record.is_registered())
    }

    /// Registers credentials for `domain` and authenticates the session.
    pub fn sign_up(
        &mut self,
        session: &mut Session,
        domain: &str,
        request: &SignUpRequest,
    ) -> Result<(), AccountServiceError> {
        if self.is_registered(domain) {
            return Err(AccountServiceError::AlreadyRegistered(domain.to_string()));
        }
        if is_blank(&request.password) {
            return Err(AccountServiceError::PasswordRequired);
        }
        if request.password != request.confirm_password {
            return Err(AccountServiceError::PasswordMismatch);
        }
        if is_blank(&request.email) {
            return Err(AccountServiceError::RecoveryEmailRequired);
        }

        self.store.create_domain(
            domain,
            Credentials {
                password: request.password.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
            },
        );
        session.mark_authenticated(domain);
        info!("event=account_sign_up module=account status=ok");
        Ok(())
    }

    /// Checks `password` and authenticates the session on success.
    pub fn sign_in(
        &mut self,
        session: &mut Session,
        domain: &str,
        password: &str,
    ) -> Result<(), AccountServiceError> {
        if is_blank(password) {
            return Err(AccountServiceError::PasswordRequired);
        }

        let matches = self
            .store
            .domain(domain)
            .and_then(|record| record.password.as_deref())
            .is_some_and(|stored| stored == password);
        if !matches {
            warn!("event=account_sign_in module=account status=error error_code=incorrect_password");
            return Err(AccountServiceError::IncorrectPassword);
        }

        session.mark_authenticated(domain);
        info!("event=account_sign_in module=account status=ok");
        Ok(())
    }

    /// Replaces contact details; email is mandatory, phone may be empty.
    pub fn update_profile(
        &mut self,
        domain: &str,
        email: &str,
        phone: &str,
    ) -> Result<(), AccountServiceError> {
        if is_blank(email) {
            return Err(AccountServiceError::EmailRequired);
        }
        if !self.store.update_profile(domain, email, phone) {
            return Err(AccountServiceError::DomainNotFound(domain.to_string()));
        }
        info!("event=account_update_profile module=account status=ok");
        Ok(())
    }

    /// Changes the password after confirming the current one.
    pub fn change_password(
        &mut self,
        domain: &str,
        request: &PasswordChangeRequest,
    ) -> Result<(), AccountServiceError> {
        if is_blank(&request.current_password)
            || is_blank(&request.new_password)
            || is_blank(&request.confirm_password)
        {
            return Err(AccountServiceError::AllFieldsRequired);
        }

        let record = self
            .store
            .domain(domain)
            .ok_or_else(|| AccountServiceError::DomainNotFound(domain.to_string()))?;
        if record.password.as_deref() != Some(request.current_password.as_str()) {
            return Err(AccountServiceError::CurrentPasswordIncorrect);
        }
        if request.new_password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AccountServiceError::NewPasswordTooShort);
        }
        if request.new_password != request.confirm_password {
            return Err(AccountServiceError::PasswordMismatch);
        }

        self.store.update_password(domain, &request.new_password);
        info!("event=account_change_password module=account status=ok");
        Ok(())
    }
}

/// Position in the password recovery flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    /// Waiting for the email or phone on record.
    VerifyContact,
    /// Waiting for the verification code.
    EnterCode,
    /// Waiting for the new password.
    ResetPassword,
    Completed,
}

/// Contact channel the user proves ownership of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryContact {
    Email(String),
    Phone(String),
}

/// One password recovery attempt for one domain.
///
/// No code is actually delivered: any well-formed code is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecovery {
    domain: String,
    step: RecoveryStep,
}

impl PasswordRecovery {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            step: RecoveryStep::VerifyContact,
        }
    }

    pub fn step(&self) -> RecoveryStep {
        self.step
    }

    /// Step 1: the contact value must equal the one on record.
    pub fn request_code(
        &mut self,
        store: &WorkspaceStore,
        contact: &RecoveryContact,
    ) -> Result<(), AccountServiceError> {
        self.expect_step(RecoveryStep::VerifyContact)?;
        let record = store.domain(&self.domain);
        match contact {
            RecoveryContact::Email(email) => {
                if record.and_then(|domain| domain.email.as_deref()) != Some(email.as_str()) {
                    return Err(AccountServiceError::EmailNotFound);
                }
            }
            RecoveryContact::Phone(phone) => {
                if record.and_then(|domain| domain.phone.as_deref()) != Some(phone.as_str()) {
                    return Err(AccountServiceError::PhoneNotFound);
                }
            }
        }

        self.step = RecoveryStep::EnterCode;
        info!("event=account_recovery_code_sent module=account status=ok");
        Ok(())
    }

    /// Step 2: accepts any code of exactly [`RECOVERY_CODE_DIGITS`] ASCII digits.
    pub fn verify_code(&mut self, code: &str) -> Result<(), AccountServiceError> {
        self.expect_step(RecoveryStep::EnterCode)?;
        if !is_valid_recovery_code(code) {
            return Err(AccountServiceError::InvalidRecoveryCode);
        }
        self.step = RecoveryStep::ResetPassword;
        Ok(())
    }

    /// Step 3: stores the new password and completes the flow.
    pub fn reset_password(
        &mut self,
        store: &mut WorkspaceStore,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AccountServiceError> {
        self.expect_step(RecoveryStep::ResetPassword)?;
        if new_password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(AccountServiceError::ResetPasswordTooShort);
        }
        if new_password != confirm_password {
            return Err(AccountServiceError::PasswordMismatch);
        }
        if !store.update_password(&self.domain, new_password) {
            return Err(AccountServiceError::DomainNotFound(self.domain.clone()));
        }

        self.step = RecoveryStep::Completed;
        info!("event=account_recovery_reset module=account status=ok");
        Ok(())
    }

    fn expect_step(&self, expected: RecoveryStep) -> Result<(), AccountServiceError> {
        if self.step != expected {
            return Err(AccountServiceError::RecoveryStepOutOfOrder {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_valid_recovery_code(code: &str) -> bool {
    code.len() == RECOVERY_CODE_DIGITS && code.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_recovery_code, AccountServiceError};

    #[test]
    fn recovery_code_must_be_six_ascii_digits() {
        assert!(is_valid_recovery_code("123456"));
        assert!(!is_valid_recovery_code("12345"));
        assert!(!is_valid_recovery_code("12345a"));
        assert!(!is_valid_recovery_code("١٢٣٤٥٦"));
    }

    #[test]
    fn display_uses_user_facing_messages() {
        assert_eq!(
            AccountServiceError::NewPasswordTooShort.to_string(),
            "New password must be at least 6 characters"
        );
        assert_eq!(
            AccountServiceError::ResetPasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            AccountServiceError::InvalidRecoveryCode.to_string(),
            "Please enter a valid 6-digit code"
        );
    }
}
