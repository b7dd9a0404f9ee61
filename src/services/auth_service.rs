use std::sync::Arc;

use crate::errors::ApiError;
use crate::stores::CredentialStore;
use crate::types::db::client::ROLE_ADMIN;

/// Session keys written at login and read by the gated handlers
pub const SESSION_CLIENT_ID: &str = "client_id";
pub const SESSION_USERNAME: &str = "username";
pub const SESSION_ROLE: &str = "role";

/// Dashboard paths handed back as redirect targets
pub const ADMIN_DASHBOARD: &str = "/dashboard_admin";
pub const CLIENT_DASHBOARD: &str = "/dashboard_client";

/// First-boot admin credentials, provisioned only when the account is absent
pub const SEED_ADMIN_USERNAME: &str = "admin";
pub const SEED_ADMIN_PASSWORD: &str = "admin123";

/// Result of a successful login, ready to be written into the session
#[derive(Debug)]
pub struct LoginOutcome {
    pub client_id: String,
    pub username: String,
    pub role: String,
    pub redirect_url: String,
}

/// AuthService validates credentials and decides the post-login destination.
///
/// The destination is chosen from the stored `role` column, not from
/// username equality.
pub struct AuthService {
    credential_store: Arc<CredentialStore>,
}

impl AuthService {
    pub fn new(credential_store: Arc<CredentialStore>) -> Self {
        Self { credential_store }
    }

    /// Validate credentials and produce the session payload
    ///
    /// Unknown usernames and wrong passwords surface identically as
    /// `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
        let record = self
            .credential_store
            .verify_credentials(username, password)
            .await?;

        Ok(LoginOutcome {
            redirect_url: redirect_target(&record.role).to_string(),
            client_id: record.id,
            username: record.username,
            role: record.role,
        })
    }

    /// Provision the first-boot admin account when it does not exist yet
    pub async fn ensure_seed_admin(&self) -> Result<(), ApiError> {
        if self
            .credential_store
            .find_by_username(SEED_ADMIN_USERNAME)
            .await?
            .is_some()
        {
            tracing::debug!("admin account already present, skipping seed");
            return Ok(());
        }

        self.credential_store
            .add_client(
                SEED_ADMIN_USERNAME.to_string(),
                SEED_ADMIN_PASSWORD,
                ROLE_ADMIN.to_string(),
                None,
            )
            .await?;
        tracing::info!("seeded first-boot admin account");
        Ok(())
    }
}

/// Map a stored role to its dashboard; anything unrecognized gets the
/// client dashboard
pub fn redirect_target(role: &str) -> &'static str {
    if role == ROLE_ADMIN {
        ADMIN_DASHBOARD
    } else {
        CLIENT_DASHBOARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    use crate::types::db::client::ROLE_CLIENT;

    async fn setup_service() -> (Arc<CredentialStore>, AuthService) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let store = Arc::new(CredentialStore::new(db));
        let service = AuthService::new(store.clone());
        (store, service)
    }

    #[test]
    fn redirect_is_chosen_by_role() {
        assert_eq!(redirect_target(ROLE_ADMIN), ADMIN_DASHBOARD);
        assert_eq!(redirect_target(ROLE_CLIENT), CLIENT_DASHBOARD);
        assert_eq!(redirect_target("unknown"), CLIENT_DASHBOARD);
    }

    #[tokio::test]
    async fn seeded_admin_lands_on_the_admin_dashboard() {
        let (_, service) = setup_service().await;

        service
            .ensure_seed_admin()
            .await
            .expect("seeding should succeed");

        let outcome = service
            .login(SEED_ADMIN_USERNAME, SEED_ADMIN_PASSWORD)
            .await
            .expect("seeded credentials should log in");

        assert_eq!(outcome.redirect_url, ADMIN_DASHBOARD);
        assert_eq!(outcome.role, ROLE_ADMIN);
    }

    #[tokio::test]
    async fn seeding_twice_is_harmless() {
        let (_, service) = setup_service().await;

        service.ensure_seed_admin().await.expect("first seed");
        service.ensure_seed_admin().await.expect("second seed");
    }

    #[tokio::test]
    async fn admin_role_wins_even_for_other_usernames() {
        let (store, service) = setup_service().await;

        store
            .add_client("ops".to_string(), "pw", ROLE_ADMIN.to_string(), None)
            .await
            .expect("add should succeed");

        let outcome = service.login("ops", "pw").await.expect("login should succeed");
        assert_eq!(outcome.redirect_url, ADMIN_DASHBOARD);
    }

    #[tokio::test]
    async fn regular_clients_land_on_the_client_dashboard() {
        let (store, service) = setup_service().await;

        store
            .add_client("alice".to_string(), "pw", ROLE_CLIENT.to_string(), None)
            .await
            .expect("add should succeed");

        let outcome = service
            .login("alice", "pw")
            .await
            .expect("login should succeed");
        assert_eq!(outcome.redirect_url, CLIENT_DASHBOARD);
    }

    #[tokio::test]
    async fn login_failures_share_one_shape() {
        let (store, service) = setup_service().await;

        store
            .add_client("alice".to_string(), "pw", ROLE_CLIENT.to_string(), None)
            .await
            .expect("add should succeed");

        let wrong = service.login("alice", "nope").await.unwrap_err();
        let unknown = service.login("nobody", "pw").await.unwrap_err();
        assert_eq!(wrong.message(), unknown.message());
    }
}
