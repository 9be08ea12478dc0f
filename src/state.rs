use crate::config::AppConfig;
use crate::users::repo::{MongoUserStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);

        let db = crate::db::connect(&config.mongo).await?;
        let users = Arc::new(MongoUserStore::new(
            db.collection(&config.mongo.collection),
        )) as Arc<dyn UserStore>;

        Ok(Self::from_parts(config, users))
    }

    pub fn from_parts(config: Arc<AppConfig>, users: Arc<dyn UserStore>) -> Self {
        Self { config, users }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with(Arc::new(crate::users::memory::MemoryUserStore::default()))
    }

    #[cfg(test)]
    pub fn fake_with(users: Arc<dyn UserStore>) -> Self {
        use crate::config::{MongoConfig, Profile};

        let config = Arc::new(AppConfig {
            profile: Profile::Dev,
            mongo: MongoConfig {
                uri: "mongodb://localhost:27017".into(),
                database: "test".into(),
                collection: "users".into(),
            },
            host: "127.0.0.1".into(),
            port: 0,
            base_path: "/".into(),
            cors_origins: Vec::new(),
        });
        Self::from_parts(config, users)
    }
}
