//! Account context - Ambient partition/region/account for ARN construction
//!
//! The context is supplied by the surrounding tool and each value may still
//! be unresolved when a resource is declared. ARN construction requires a
//! resolved partition and account; region is carried for collaborators but
//! is not part of the ARN grammar.

use thiserror::Error;

use crate::arn::Arn;
use crate::token::Pending;

/// Errors raised when the ambient context cannot produce an ARN
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A required ambient value is not resolved at this call
    #[error("Account {field} is unresolved at ARN construction time")]
    Unresolved { field: &'static str },
}

/// Ambient deployment context for a declaring scope
#[derive(Debug, Clone)]
pub struct AccountContext {
    partition: Pending<String>,
    region: Pending<String>,
    account: Pending<String>,
}

impl AccountContext {
    /// Context with all values known up front
    pub fn resolved(
        partition: impl Into<String>,
        region: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            partition: Pending::resolved(partition.into()),
            region: Pending::resolved(region.into()),
            account: Pending::resolved(account.into()),
        }
    }

    /// Context with every value deferred to a later phase
    pub fn unresolved() -> Self {
        Self {
            partition: Pending::deferred("partition"),
            region: Pending::deferred("region"),
            account: Pending::deferred("account"),
        }
    }

    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Pending::resolved(partition.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Pending::resolved(region.into());
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Pending::resolved(account.into());
        self
    }

    pub fn partition(&self) -> Option<&str> {
        self.partition.value().map(String::as_str)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.value().map(String::as_str)
    }

    pub fn account(&self) -> Option<&str> {
        self.account.value().map(String::as_str)
    }

    /// Construct an ARN for a named resource in this context.
    ///
    /// Fails if the partition or account is still unresolved; deferral is
    /// the caller's concern, not this type's.
    pub fn arn_for(
        &self,
        service: &str,
        resource_type: &str,
        resource_name: &str,
    ) -> Result<Arn, ContextError> {
        let partition = self
            .partition
            .value()
            .ok_or(ContextError::Unresolved { field: "partition" })?;
        let account = self
            .account
            .value()
            .ok_or(ContextError::Unresolved { field: "account" })?;

        Ok(Arn::new(
            service,
            partition.as_str(),
            account.as_str(),
            resource_type,
            resource_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arn_for_resolved_context() {
        let context = AccountContext::resolved("aws", "us-east-1", "123456789012");
        let arn = context.arn_for("timestream", "database", "custom").unwrap();
        assert_eq!(arn.to_string(), "timestream:aws:123456789012:database/custom");
    }

    #[test]
    fn unresolved_partition_fails() {
        let context = AccountContext::unresolved().with_account("123456789012");
        let result = context.arn_for("timestream", "database", "custom");
        assert_eq!(result, Err(ContextError::Unresolved { field: "partition" }));
    }

    #[test]
    fn unresolved_account_fails() {
        let context = AccountContext::unresolved()
            .with_partition("aws")
            .with_region("us-east-1");
        let result = context.arn_for("timestream", "database", "custom");
        assert_eq!(result, Err(ContextError::Unresolved { field: "account" }));
    }

    #[test]
    fn region_is_not_required_for_arns() {
        let context = AccountContext::unresolved()
            .with_partition("aws")
            .with_account("123456789012");
        assert_eq!(context.region(), None);
        assert!(context.arn_for("timestream", "database", "custom").is_ok());
    }
}
