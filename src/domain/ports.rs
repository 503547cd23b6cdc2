use crate::domain::model::User;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 使用者資料來源，表單只需要以登入帳號查詢
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn username_taken(&self, username: &str) -> Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
