//! List Accounts Handler
//!
//! Summarizes every account in the directory for listing. Read-only.

use crate::directory::Directory;
use crate::domain::DomainError;
use crate::error::AppResult;

use super::AccountSummary;

/// Handler for the account listing
pub struct ListAccountsHandler<'a> {
    directory: &'a Directory,
}

impl<'a> ListAccountsHandler<'a> {
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    /// Summarize all accounts in creation order
    pub fn execute(self) -> AppResult<Vec<AccountSummary>> {
        let mut summaries = Vec::with_capacity(self.directory.accounts().len());

        for account in self.directory.accounts() {
            // Every account is opened for a registered customer, so the
            // holder lookup only fails if the directory is corrupted.
            let holder = self
                .directory
                .find_customer(account.holder_tax_id())
                .ok_or_else(|| DomainError::CustomerNotFound(account.holder_tax_id().to_string()))?;

            summaries.push(AccountSummary {
                number: account.number(),
                branch: account.branch().to_string(),
                holder_name: holder.name().to_string(),
                holder_tax_id: holder.tax_id().to_string(),
            });
        }

        Ok(summaries)
    }
}
