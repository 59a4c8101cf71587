use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            worker_threads: Some(DEFAULT_WORKER_THREADS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_format() -> String { "compact".to_string() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise environment variables, otherwise defaults.
    /// A config file that exists but does not parse is an error.
    pub fn load_and_validate() -> Result<Self> {
        // 文件存在则以文件为准（解析失败直接报错）；否则回退到环境变量与默认值
        let mut cfg = if std::path::Path::new(&config_path()).exists() {
            load_default()?
        } else {
            Self::from_env()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads);
        let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_log_format());
        Self {
            server: ServerConfig { host, port, worker_threads },
            log: LogConfig { format },
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // 归一化 server（空 host、线程数）
        self.server.normalize()?;
        // 归一化 log.format（大小写、空值）
        self.log.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = DEFAULT_HOST.to_string();
        }
        // u16 已限制上界，这里只需排除 0
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        // 未配置或为 0 时使用默认线程数
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LogConfig {
    fn normalize(&mut self) -> Result<()> {
        let format = self.format.trim().to_ascii_lowercase();
        if format.is_empty() {
            self.format = default_log_format();
            return Ok(());
        }
        if format != "compact" && format != "json" {
            return Err(anyhow!("log.format must be `compact` or `json`, got `{format}`"));
        }
        self.format = format;
        Ok(())
    }
}
