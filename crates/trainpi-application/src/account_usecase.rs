//! Local account registration and sign-in.
//!
//! Accounts live in a single global list. There is no credential
//! verification: login with an unknown email creates the account and login
//! with a known email replaces its password.

use std::sync::Arc;

use chrono::Utc;
use trainpi_core::config::LatencyConfig;
use trainpi_core::plan::build_learning_plan;
use trainpi_core::snapshot::{StoredUserData, UserDataStore, UserProfileSnapshot};
use trainpi_core::user::{AccountRecord, AccountRepository, AuthSession, AuthUser, UserIdentity};
use trainpi_core::{Result, TrainpiError};

use crate::latency::simulate;

pub const DEFAULT_PATH: &str = "Full Stack Developer";
pub const DEFAULT_INTERESTS: [&str; 1] = ["Technology"];
pub const DEFAULT_SKILLS: [&str; 1] = ["JavaScript"];
const FALLBACK_NAME: &str = "Learner";

pub struct AccountUseCase {
    accounts: Arc<dyn AccountRepository>,
    store: UserDataStore,
    latency: LatencyConfig,
}

impl AccountUseCase {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        store: UserDataStore,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            accounts,
            store,
            latency,
        }
    }

    /// Registers a new account and seeds its starter plan.
    ///
    /// Fails with `AlreadyExists` when the email is taken.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<&str>,
    ) -> Result<AuthSession> {
        require_credentials(email, password)?;
        simulate(self.latency.auth()).await;

        let mut accounts = self.accounts.list_accounts()?;
        if accounts.iter().any(|account| account.email == email) {
            return Err(TrainpiError::already_exists("Account", email));
        }

        let full_name = full_name
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| name_from_email(email));
        let account = AccountRecord {
            id: next_account_id(&accounts),
            email: email.to_string(),
            password: password.to_string(),
            full_name,
        };
        accounts.push(account.clone());
        self.accounts.save_accounts(&accounts)?;
        tracing::info!("Registered account {} ({})", account.id, account.email);

        self.seed_plan(&account.identity());
        Ok(session_for(&account))
    }

    /// Signs in, creating or updating the account as needed, and makes sure
    /// the user has a plan.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        require_credentials(email, password)?;
        simulate(self.latency.auth()).await;

        let mut accounts = self.accounts.list_accounts()?;
        let account = match accounts.iter_mut().find(|account| account.email == email) {
            Some(existing) => {
                existing.password = password.to_string();
                existing.clone()
            }
            None => {
                let created = AccountRecord {
                    id: next_account_id(accounts.as_slice()),
                    email: email.to_string(),
                    password: password.to_string(),
                    full_name: name_from_email(email),
                };
                tracing::info!("Created account {} on first sign-in", created.email);
                accounts.push(created.clone());
                created
            }
        };
        self.accounts.save_accounts(&accounts)?;

        self.ensure_starter_plan(&account.identity());
        Ok(session_for(&account))
    }

    /// Builds a plan from the stored profile (or defaults) and saves it,
    /// replacing any existing plan.
    pub fn seed_plan(&self, identity: &UserIdentity) -> StoredUserData {
        let snapshot = self.store.read_user_data(identity);
        let profile = snapshot.profile.unwrap_or_default();

        let interests = profile.interests.unwrap_or_else(|| to_owned(&DEFAULT_INTERESTS));
        let skills = profile.skills.unwrap_or_else(|| to_owned(&DEFAULT_SKILLS));
        let strengths = profile.strengths.unwrap_or_else(|| to_owned(&DEFAULT_SKILLS));
        let career_path = profile
            .career_path
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_PATH.to_string());

        let plan = build_learning_plan(&career_path, &interests, &skills);
        let override_profile = UserProfileSnapshot {
            interests: Some(interests),
            skills: Some(skills),
            career_path: Some(plan.career_path.clone()),
            strengths: Some(strengths),
        };
        self.store
            .save_plan_snapshot(identity, plan, Some(override_profile))
    }

    /// Seeds a plan only when the snapshot has none.
    pub fn ensure_starter_plan(&self, identity: &UserIdentity) -> StoredUserData {
        let snapshot = self.store.read_user_data(identity);
        if snapshot.plan.is_some() {
            return snapshot;
        }
        self.seed_plan(identity)
    }
}

fn require_credentials(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(TrainpiError::validation("Email and password are required"));
    }
    Ok(())
}

fn name_from_email(email: &str) -> String {
    email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Epoch millis, bumped past the highest existing id so two accounts
/// created within the same millisecond stay distinct.
fn next_account_id(accounts: &[AccountRecord]) -> u64 {
    let highest = accounts.iter().map(|account| account.id).max().unwrap_or(0);
    now_millis().max(highest.saturating_add(1))
}

fn session_for(account: &AccountRecord) -> AuthSession {
    AuthSession {
        user: AuthUser::from(account),
        token: format!("mock-token-{}", now_millis()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email() {
        assert_eq!(name_from_email("ada@example.com"), "ada");
        assert_eq!(name_from_email("@example.com"), "Learner");
        assert_eq!(name_from_email("plain"), "plain");
    }

    fn account_with_id(id: u64) -> AccountRecord {
        AccountRecord {
            id,
            email: format!("{}@example.com", id),
            password: "pw".to_string(),
            full_name: "Test".to_string(),
        }
    }

    #[test]
    fn test_next_account_id_moves_past_existing_ids() {
        let far_future = now_millis() + 1_000_000;
        assert_eq!(next_account_id(&[account_with_id(far_future)]), far_future + 1);
        assert!(next_account_id(&[]) >= now_millis() - 1_000);
    }

    #[test]
    fn test_next_account_id_saturates_at_max() {
        assert_eq!(next_account_id(&[account_with_id(u64::MAX)]), u64::MAX);
    }

    #[test]
    fn test_require_credentials() {
        assert!(require_credentials("a@b.c", "pw").is_ok());
        assert!(require_credentials(" ", "pw").unwrap_err().is_validation());
        assert!(require_credentials("a@b.c", "").unwrap_err().is_validation());
    }
}
