use crate::domain::upload::Account;

#[cfg_attr(test, mockall::automock)]
pub trait AccountResolver: Send + Sync {
    /// The account instant uploads go to, or `None` if none is configured.
    fn current_account(&self) -> Option<Account>;
}
