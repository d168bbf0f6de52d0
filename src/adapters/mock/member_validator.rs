use crate::domain::value_objects::MemberId;
use crate::ports::member_validator::{MemberValidator as MemberValidatorTrait, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock implementation of MemberValidator
///
/// Supports stateful testing by storing valid member IDs.
/// Members can be registered up front or revoked later.
pub struct MemberValidator {
    valid_members: Mutex<HashSet<MemberId>>,
}

impl MemberValidator {
    pub fn new() -> Self {
        Self {
            valid_members: Mutex::new(HashSet::new()),
        }
    }

    /// Build a validator that accepts the given members
    pub fn with_members(members: impl IntoIterator<Item = MemberId>) -> Self {
        Self {
            valid_members: Mutex::new(members.into_iter().collect()),
        }
    }

    /// Register a valid member
    pub fn add_member(&self, member_id: MemberId) {
        self.valid_members.lock().unwrap().insert(member_id);
    }

    /// Revoke a member's validity
    pub fn revoke_member(&self, member_id: MemberId) {
        self.valid_members.lock().unwrap().remove(&member_id);
    }
}

impl Default for MemberValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberValidatorTrait for MemberValidator {
    /// Check membership against the registered set
    async fn is_valid_member(&self, member_id: MemberId) -> Result<bool> {
        Ok(self.valid_members.lock().unwrap().contains(&member_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_registered_member_is_valid() {
        let validator = MemberValidator::with_members([MemberId::new(1)]);

        assert!(validator.is_valid_member(MemberId::new(1)).await.unwrap());
        assert!(!validator.is_valid_member(MemberId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn test_revoked_member_is_invalid() {
        let validator = MemberValidator::new();
        validator.add_member(MemberId::new(5));
        validator.revoke_member(MemberId::new(5));

        assert!(!validator.is_valid_member(MemberId::new(5)).await.unwrap());
    }
}
