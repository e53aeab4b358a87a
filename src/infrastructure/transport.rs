//! 提交传输 - 基础设施层
//!
//! 只负责把一次请求发出去并拿回原始响应，不解析业务含义

use reqwest::header::ACCEPT;
use reqwest::Method;
use tracing::debug;

use crate::config::Config;
use crate::error::TransportError;
use crate::models::{SubmissionRequest, SubmissionResponse};

/// 提交传输
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// 是否支持异步提交，不支持时交给浏览器原生提交
    fn can_submit_async(&self) -> bool {
        true
    }

    /// 发送一次提交请求
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError>;
}

/// 基于 reqwest 的 HTTP 传输
///
/// 不设置客户端超时，慢网络下请求会一直挂起直到返回
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// 创建新的 HTTP 传输
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::request_failed("client", e))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> Result<SubmissionResponse, TransportError> {
        let method = match request.method.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => return Err(TransportError::UnsupportedMethod(other.to_string())),
        };

        debug!("发送提交请求: {} {}", method, request.url);

        let builder = self
            .client
            .request(method.clone(), &request.url)
            .header(ACCEPT, "application/json");
        let builder = if method == Method::GET {
            builder.query(&request.fields)
        } else {
            builder.form(&request.fields)
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::request_failed(&request.url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::body_read_failed(&request.url, e))?;

        debug!("提交响应: 状态码 {}, 响应体 {} 字节", status, body.len());

        Ok(SubmissionResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unsupported_method() {
        let transport = HttpTransport::new(&Config::default()).unwrap();
        let request = SubmissionRequest {
            url: "http://127.0.0.1:9/delete".to_string(),
            method: "delete".to_string(),
            fields: Vec::new(),
        };

        let err = transport.submit(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::UnsupportedMethod(m) if m == "DELETE"));
    }

    #[tokio::test]
    async fn test_get_form_reaches_network() {
        let transport = HttpTransport::new(&Config::default()).unwrap();
        let request = SubmissionRequest {
            url: "http://127.0.0.1:9/delete".to_string(),
            method: "get".to_string(),
            fields: vec![("full_name".to_string(), "Ada".to_string())],
        };

        // 端口无人监听，GET 分支应走到网络层而不是被方法检查拦下
        let err = transport.submit(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::RequestFailed { .. }), "{}", err);
    }

    #[test]
    fn test_http_transport_submits_async() {
        let transport = HttpTransport::new(&Config {
            user_agent: Some("intake-test".to_string()),
            ..Config::default()
        })
        .unwrap();
        assert!(transport.can_submit_async());
    }
}
