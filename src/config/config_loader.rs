use anyhow::{Context, Result};

use super::{
    config_model::{Auth, BackendServer, Database, DotEnvyConfig, RepositoryKind},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let backend_server = BackendServer {
        port: parse_env("SERVER_PORT")?,
        body_limit: parse_env("SERVER_BODY_LIMIT")?,
        timeout: parse_env("SERVER_TIMEOUT")?,
    };

    let repository = match optional_env("REPOSITORY") {
        Some(raw) => RepositoryKind::try_from(raw.as_str())?,
        None => RepositoryKind::default(),
    };

    // The in-memory backend never opens a connection.
    let database = Database {
        url: match repository {
            RepositoryKind::Postgres => required_env("DATABASE_URL")?,
            RepositoryKind::InMemory => optional_env("DATABASE_URL").unwrap_or_default(),
        },
    };

    let auth = Auth {
        jwt_secret: required_env("JWT_SECRET")?,
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
        auth,
        repository,
        stage: get_stage(),
    })
}

pub fn get_stage() -> Stage {
    let stage_str = optional_env("STAGE").unwrap_or_default();
    Stage::try_from(stage_str.as_str()).unwrap_or_default()
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn required_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("{} is missing", key))
}

fn parse_env<T>(key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    required_env(key)?
        .trim()
        .parse::<T>()
        .with_context(|| format!("{} is invalid", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Every test here mutates the same process environment.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn set_env_vars() {
        unsafe {
            env::set_var("SERVER_PORT", "8080");
            env::set_var("SERVER_BODY_LIMIT", "10");
            env::set_var("SERVER_TIMEOUT", "30");
            env::set_var("DATABASE_URL", "postgres://localhost:5432/webinars");
            env::set_var("JWT_SECRET", "supersecretjwtsecretforunittesting123");
            env::set_var("STAGE", "development");
            env::remove_var("REPOSITORY");
        }
    }

    #[test]
    fn test_load_success() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        set_env_vars();

        let config = load().unwrap();

        assert_eq!(config.backend_server.port, 8080);
        assert_eq!(config.backend_server.body_limit, 10);
        assert_eq!(config.backend_server.timeout, 30);
        assert_eq!(config.database.url, "postgres://localhost:5432/webinars");
        assert_eq!(config.auth.jwt_secret, "supersecretjwtsecretforunittesting123");
        assert_eq!(config.repository, RepositoryKind::Postgres);
        assert_eq!(config.stage, Stage::Development);
    }

    #[test]
    fn test_load_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        set_env_vars();
        unsafe {
            env::set_var("SERVER_PORT", "not-a-port");
        }

        let err = load().unwrap_err();

        assert!(err.to_string().contains("SERVER_PORT"));
    }

    #[test]
    fn test_load_in_memory_without_database() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        set_env_vars();
        unsafe {
            env::set_var("REPOSITORY", "in-memory");
            env::remove_var("DATABASE_URL");
        }

        let config = load().unwrap();

        assert_eq!(config.repository, RepositoryKind::InMemory);
        assert!(config.database.url.is_empty());
    }

    #[test]
    fn test_load_missing_jwt_secret() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        set_env_vars();
        unsafe {
            env::remove_var("JWT_SECRET");
        }

        let err = load().unwrap_err();

        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
