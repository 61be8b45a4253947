//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USER_SERVICE_*` environment variables over
//! configuration files.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct AppSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// PostgreSQL connection string. Users are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Configured host, defaulting to all interfaces.
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host(), self.port())
    }

    /// Database URL, when persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool size, defaulting to the pool's own default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "USER_SERVICE_HOST",
        "USER_SERVICE_PORT",
        "USER_SERVICE_DATABASE_URL",
        "USER_SERVICE_POOL_MAX_SIZE",
    ];

    fn load_from_args(args: &[&str]) -> AppSettings {
        let argv = std::iter::once(OsString::from("user-service"))
            .chain(args.iter().map(OsString::from));
        AppSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), DEFAULT_MAX_SIZE);
    }

    #[rstest]
    fn host_alone_keeps_the_default_port() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", Some("127.0.0.1".to_owned())),
            ("USER_SERVICE_PORT", None::<String>),
            ("USER_SERVICE_DATABASE_URL", None::<String>),
            ("USER_SERVICE_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", Some("127.0.0.1".to_owned())),
            ("USER_SERVICE_PORT", Some("9090".to_owned())),
            (
                "USER_SERVICE_DATABASE_URL",
                Some("postgres://localhost/users".to_owned()),
            ),
            ("USER_SERVICE_POOL_MAX_SIZE", Some("3".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        assert_eq!(settings.database_url(), Some("postgres://localhost/users"));
        assert_eq!(settings.pool_max_size(), 3);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", None::<String>),
            ("USER_SERVICE_PORT", Some("9090".to_owned())),
            ("USER_SERVICE_DATABASE_URL", None::<String>),
            ("USER_SERVICE_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_args(&["--port", "7070"]);
        assert_eq!(settings.port(), 7070);
    }
}
