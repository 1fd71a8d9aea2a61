use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::calculator::repo_types::{InsertLambCalculation, LambCalculation};
use crate::users::repo_types::{InsertUser, User};

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn create_user(&self, user: InsertUser) -> anyhow::Result<User>;
    async fn save_lamb_calculation(
        &self,
        calculation: InsertLambCalculation,
    ) -> anyhow::Result<LambCalculation>;
    async fn get_lamb_calculation(&self, id: Uuid) -> anyhow::Result<Option<LambCalculation>>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemStorage {
    users: RwLock<HashMap<Uuid, User>>,
    lamb_calculations: RwLock<HashMap<Uuid, LambCalculation>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: InsertUser) -> anyhow::Result<User> {
        let user = user.with_id(Uuid::new_v4());
        self.users.write().await.insert(user.id, user.clone());
        debug!(user_id = %user.id, "user stored");
        Ok(user)
    }

    async fn save_lamb_calculation(
        &self,
        calculation: InsertLambCalculation,
    ) -> anyhow::Result<LambCalculation> {
        let calculation = calculation.with_id(Uuid::new_v4());
        self.lamb_calculations
            .write()
            .await
            .insert(calculation.id, calculation.clone());
        debug!(calculation_id = %calculation.id, "lamb calculation stored");
        Ok(calculation)
    }

    async fn get_lamb_calculation(&self, id: Uuid) -> anyhow::Result<Option<LambCalculation>> {
        Ok(self.lamb_calculations.read().await.get(&id).cloned())
    }
}
