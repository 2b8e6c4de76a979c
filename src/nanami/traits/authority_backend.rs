use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::nanami::enums::authority_error::AuthorityError;
use crate::nanami::structs::announce_batch::AnnounceBatch;
use crate::nanami::structs::approval_info::ApprovalInfo;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthorityBackend: Send + Sync {
    async fn fetch_approval_info(&self) -> Result<ApprovalInfo, AuthorityError>;

    async fn push_announce_batch(&self, batch: &AnnounceBatch) -> Result<(), AuthorityError>;
}
