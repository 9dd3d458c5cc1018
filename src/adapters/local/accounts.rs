use crate::domain::upload::Account;
use crate::ports::accounts::AccountResolver;
use crate::ports::preferences::PreferenceStore;

/// Preference key holding the name of the selected account.
pub const SELECTED_ACCOUNT: &str = "select_oc_account";

/// Resolves the current account from the selected-account preference.
pub struct PreferenceAccount<P> {
    preferences: P,
}

impl<P: PreferenceStore> PreferenceAccount<P> {
    pub fn new(preferences: P) -> Self {
        Self { preferences }
    }
}

impl<P: PreferenceStore> AccountResolver for PreferenceAccount<P> {
    fn current_account(&self) -> Option<Account> {
        self.preferences
            .get_string(SELECTED_ACCOUNT)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(Account::new)
    }
}
