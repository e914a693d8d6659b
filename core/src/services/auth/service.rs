//! Auth orchestration implementation

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserStatus};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::activation::ActivationManager;
use crate::services::mail::{MailService, OutboundMail};
use crate::services::session::SessionManager;

use super::config::AuthServiceConfig;

/// Orchestrates the account and session flows
///
/// Credential failures deliberately collapse to `InvalidCredentials` for
/// unknown emails and wrong passwords alike; account-status refusals stay
/// distinct so the caller can log them apart, but the HTTP layer renders
/// them all as a generic 401.
pub struct AuthService<U, S, M>
where
    U: UserRepository,
    S: SessionStore,
    M: MailService,
{
    users: U,
    sessions: SessionManager<S>,
    activation: ActivationManager<S>,
    mail: M,
    config: AuthServiceConfig,
}

impl<U, S, M> AuthService<U, S, M>
where
    U: UserRepository,
    S: SessionStore,
    M: MailService,
{
    /// Creates a new auth service
    pub fn new(
        users: U,
        sessions: SessionManager<S>,
        activation: ActivationManager<S>,
        mail: M,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            activation,
            mail,
            config,
        }
    }

    /// Registers a new account and dispatches its activation email.
    ///
    /// The account starts `NotActive` and cannot log in until the ticket
    /// from the email is redeemed. A failed mail dispatch is logged but
    /// does not fail registration; the client can request activation help
    /// out of band.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        kp_shared::validate_credentials(email, password).map_err(ValidationError::Fields)?;

        let user = User::new(email.to_string(), password).map_err(DomainError::internal)?;
        let user = self.users.create(user).await?;
        info!(user_id = %user.id, "account registered");

        let ticket = self.activation.create_ticket(user.id).await?;
        let mail = OutboundMail::activation(&user.email, &self.config.activation_url(&ticket));

        if let Err(e) = self.mail.send(mail).await {
            warn!(user_id = %user.id, error = %e, "activation email dispatch failed");
        }

        Ok(user)
    }

    /// Authenticates credentials and opens a session for the device
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        fingerprint: &str,
    ) -> DomainResult<TokenPair> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let password_ok = user
            .verify_password(password)
            .map_err(DomainError::internal)?;
        if !password_ok {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        match user.status {
            UserStatus::Active => {}
            UserStatus::NotActive => return Err(AuthError::AccountNotActivated.into()),
            UserStatus::Banned | UserStatus::Deleted => {
                return Err(AuthError::AccountSuspended.into())
            }
        }

        self.sessions.issue(user.id, fingerprint).await
    }

    /// Rotates the session named by a refresh token
    pub async fn refresh(&self, refresh_token: &str, fingerprint: &str) -> DomainResult<TokenPair> {
        self.sessions.refresh(refresh_token, fingerprint).await
    }

    /// Ends the session for one device
    pub async fn logout(&self, refresh_token: &str, fingerprint: &str) -> DomainResult<()> {
        self.sessions.logout(refresh_token, fingerprint).await
    }

    /// Ends every session belonging to the token's subject
    pub async fn logout_all(&self, refresh_token: &str) -> DomainResult<usize> {
        self.sessions.logout_all(refresh_token).await
    }

    /// Redeems an activation ticket and marks the account active
    pub async fn activate(&self, ticket: &str, purpose: &str) -> DomainResult<Uuid> {
        let subject = self.activation.redeem(ticket, purpose).await?;
        self.users.update_status(subject, UserStatus::Active).await?;
        info!(user_id = %subject, "account activated");
        Ok(subject)
    }

    /// Looks up the public view of an account by id
    pub async fn find_user(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.users.find_by_id(id).await
    }
}
