use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 页面渲染后允许提交的最短秒数
    pub min_submit_delay_secs: i64,
    /// 计数器未声明 data-max 时使用的上限
    pub default_counter_max: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// HttpTransport 使用的 User-Agent
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_submit_delay_secs: 3,
            default_counter_max: 4000,
            verbose_logging: false,
            user_agent: None,
        }
    }
}

impl Config {
    /// 从 TOML 文本解析配置，缺省的键使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("无法解析配置内容")?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载配置
    ///
    /// # 参数
    /// - `path`: 配置文件路径
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("配置文件不合法: {}", path.display()))
    }

    /// 检查取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_submit_delay_secs < 0 {
            return Err(ConfigError::InvalidValue {
                key: "min_submit_delay_secs",
                value: self.min_submit_delay_secs.to_string(),
                reason: "不能为负数",
            });
        }
        if self.default_counter_max == 0 {
            return Err(ConfigError::InvalidValue {
                key: "default_counter_max",
                value: "0".to_string(),
                reason: "必须大于 0",
            });
        }
        Ok(())
    }
}
