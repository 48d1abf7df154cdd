//! Server configuration.
//!
//! CLI arguments with environment variable fallbacks (clap).

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use clap::Parser;

use crate::domain::{LookupEndpoint, LookupKey, LookupSource, RequestShape, ValueObjectError};

/// CRUD service with a concurrent dual-source lookup and idempotent replaces
#[derive(Parser, Debug, Clone)]
#[command(name = "fundamentals-server")]
#[command(about = "CRUD service with a concurrent dual-source lookup and idempotent writes")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "APP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of source A, queried as `{base}/{key}/json`
    #[arg(long, env = "APP_SOURCE_A_URL", default_value = "https://viacep.com.br/ws")]
    pub source_a_url: String,

    /// Base URL of source B, queried as `{base}/?name={key}`
    #[arg(long, env = "APP_SOURCE_B_URL", default_value = "https://api.nationalize.io")]
    pub source_b_url: String,

    /// Deadline for each external lookup call in milliseconds
    #[arg(long, env = "APP_LOOKUP_TIMEOUT_MS", default_value_t = 5000)]
    pub lookup_timeout_ms: u64,

    /// Upper bound of the blocking worker pool used by task-per-call lookups
    #[arg(long, env = "APP_MAX_BLOCKING_THREADS", default_value_t = 64)]
    pub max_blocking_threads: usize,

    /// Key sent to source A by the health check
    #[arg(long, env = "APP_HEALTH_PROBE_KEY", default_value = "01001000")]
    pub health_probe_key: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "APP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn source_a(&self) -> LookupEndpoint {
        LookupEndpoint::new(
            LookupSource::SourceA,
            self.source_a_url.clone(),
            RequestShape::PathSegment {
                suffix: "json".to_string(),
            },
        )
    }

    pub fn source_b(&self) -> LookupEndpoint {
        LookupEndpoint::new(
            LookupSource::SourceB,
            self.source_b_url.clone(),
            RequestShape::QueryParam {
                param: "name".to_string(),
            },
        )
    }

    pub fn health_probe_key(&self) -> Result<LookupKey, ValueObjectError> {
        LookupKey::new(self.health_probe_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_defaults() {
        // テスト項目: CLI 引数で設定を上書きできる
        // when (操作):
        let config = Config::try_parse_from([
            "fundamentals-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--source-a-url",
            "http://a.local/ws",
            "--source-b-url",
            "http://b.local",
            "--lookup-timeout-ms",
            "250",
            "--max-blocking-threads",
            "8",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:9090");
        assert_eq!(config.lookup_timeout(), Duration::from_millis(250));
        assert_eq!(config.max_blocking_threads, 8);
        assert_eq!(config.source_a().base_url, "http://a.local/ws");
        assert_eq!(config.source_b().source, LookupSource::SourceB);
        assert_eq!(
            config.source_b().shape,
            RequestShape::QueryParam {
                param: "name".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        // テスト項目: 範囲外のポートはパースエラーになる
        let result = Config::try_parse_from(["fundamentals-server", "--port", "70000"]);

        assert!(result.is_err());
    }
}
