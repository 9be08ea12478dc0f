use serde::Deserialize;

/// Named configuration profile, picked from `ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Dev,
    Stage,
    Prod,
}

impl Profile {
    /// Unknown or missing values fall back to `dev`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("stage") => Profile::Stage,
            Some("prod") => Profile::Prod,
            _ => Profile::Dev,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Stage => "stage",
            Profile::Prod => "prod",
        }
    }

    pub fn env_file(&self) -> String {
        format!("{}.env", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub profile: Profile,
    pub mongo: MongoConfig,
    pub host: String,
    pub port: u16,
    pub base_path: String,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Loads `{profile}.env` (or `.env`) and reads settings from the process env.
    pub fn from_env() -> anyhow::Result<Self> {
        let profile = Profile::from_env_value(std::env::var("ENV").ok().as_deref());
        if dotenvy::from_filename(profile.env_file()).is_err() {
            dotenvy::dotenv().ok();
        }

        let mongo = MongoConfig {
            uri: std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            database: std::env::var("MONGO_DATABASE").unwrap_or_else(|_| "REST-API-GIN".into()),
            collection: std::env::var("MONGO_COLLECTION").unwrap_or_else(|_| "users".into()),
        };
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {v:?}: {e}"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            profile,
            mongo,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            base_path: normalize_base_path(
                &std::env::var("BASE_PATH").unwrap_or_else(|_| "/".into()),
            ),
            cors_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }
}

/// Leading slash, no trailing slash; the root comes back as `/`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    format!("/{}", trimmed)
}

pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .map(str::to_string)
        .collect()
}
