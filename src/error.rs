use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 网络传输错误
    #[error("传输错误: {0}")]
    Transport(#[from] TransportError),
    /// 状态机错误
    #[error("状态机错误: {0}")]
    Lifecycle(#[from] LifecycleError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {key} 的值 '{value}' 不合法: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// 网络传输错误
///
/// 只在传输层内部流转，提交流程会把它归一成 `SubmissionOutcome::Failure`
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 读取响应体失败
    #[error("读取响应失败 ({endpoint}): {source}")]
    BodyReadFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 表单声明了不支持的提交方法
    #[error("不支持的提交方法: {0}")]
    UnsupportedMethod(String),
}

/// 状态机非法跳转
#[derive(Debug, Error, PartialEq, Eq)]
#[error("非法状态跳转: {from:?} -> {to:?}")]
pub struct LifecycleError {
    pub from: crate::workflow::LifecycleState,
    pub to: crate::workflow::LifecycleState,
}

// ========== 便捷构造函数 ==========

impl TransportError {
    /// 创建请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建响应读取错误
    pub fn body_read_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::BodyReadFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::request_failed("https://example.test/delete", io);

        assert!(err.to_string().contains("https://example.test/delete"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_app_error_wraps_config_error() {
        let err: AppError = ConfigError::InvalidValue {
            key: "default_counter_max",
            value: "0".to_string(),
            reason: "必须大于 0",
        }
        .into();

        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("default_counter_max"));
    }
}
