use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    /// 是否开放 /reset 接口（仅用于测试隔离）
    expose_reset: bool,
    server: RawServerConfig,
    auth: RawAuthConfig,
    log: RawLogConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            expose_reset: true,
            server: RawServerConfig::default(),
            auth: RawAuthConfig::default(),
            log: RawLogConfig::default(),
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    host: String,
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawAuthConfig {
    /// HMAC 共享密钥
    hmac_secret: String,
}

impl Default for RawAuthConfig {
    fn default() -> Self {
        Self {
            hmac_secret: "bookSecret".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawLogConfig {
    level: String,
    file: String,
}

impl Default for RawLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "library.log".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 未设置 RUST_LOG 时使用的级别
    pub level: String,
    /// 日志文件路径
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    expose_reset: bool,
    hmac_secret: String,
    server: ServerConfig,
    log: LogConfig,
}

impl AppConfigImpl {
    fn new(data: RawConfig) -> Self {
        AppConfigImpl {
            expose_reset: data.expose_reset,
            hmac_secret: data.auth.hmac_secret,
            server: ServerConfig {
                host: data.server.host,
                port: data.server.port,
            },
            log: LogConfig {
                level: data.log.level,
                file: data.log.file,
            },
        }
    }

    /// Reads `config.*` from the working directory (optional) and `APP__*`
    /// environment variables, e.g. `APP__SERVER__PORT=8080`.
    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        Ok(AppConfigImpl::new(raw))
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone()
    }

    pub fn hmac_secret(&self) -> &str {
        &self.hmac_secret
    }

    pub fn expose_reset(&self) -> bool {
        self.expose_reset
    }
}

impl Default for AppConfigImpl {
    fn default() -> Self {
        AppConfigImpl::new(RawConfig::default())
    }
}
