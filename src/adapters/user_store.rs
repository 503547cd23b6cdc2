use crate::domain::model::User;
use crate::domain::ports::UserStore;
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;

/// 記憶體中的使用者資料，以登入帳號為鍵
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// 帳號已存在時回傳錯誤，不覆寫
    pub async fn insert(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(FormError::UserStoreError {
                message: format!("user #{} duplicates an existing login", user.id),
            });
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }
}

/// 從 JSON 檔載入的唯讀使用者清單，格式為 `[{"id": 1, "username": "..."}]`
#[derive(Debug)]
pub struct JsonFileUserStore {
    inner: InMemoryUserStore,
}

impl JsonFileUserStore {
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let users: Vec<User> = serde_json::from_str(&content)?;

        let inner = InMemoryUserStore::new();
        for user in users {
            inner.insert(user).await.map_err(|e| FormError::UserStoreError {
                message: format!("{} in {}", e, path.display()),
            })?;
        }

        tracing::info!("Loaded {} users from {}", inner.len().await, path.display());
        Ok(Self { inner })
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.inner.find_by_username(username).await
    }
}
