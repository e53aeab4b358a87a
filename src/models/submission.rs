//! 提交请求、原始响应与提交结果
//!
//! 服务端响应约定：`{ "ok": true, "referenceId": "..." }` 或
//! `{ "ok": false, "error": "..." }`，其他形状一律视为失败

use serde_json::Value;

/// 服务端未给出原因时的兜底提示
pub const MSG_SUBMISSION_FAILED: &str = "Submission failed. Please try again later.";

/// 一次提交请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// 表单声明的 action
    pub url: String,
    /// 表单声明的 method（大写）
    pub method: String,
    /// 所有字段的 name/value 对，包括隐藏字段
    pub fields: Vec<(String, String)>,
}

impl SubmissionRequest {
    /// 按 name 查找字段值
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// 传输层返回的原始响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub status: u16,
    pub body: String,
}

impl SubmissionResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx 视为成功状态码
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 一次提交的结果，用完即弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { correlation_token: String },
    Failure { message: String },
}

impl SubmissionOutcome {
    /// 解析服务端响应
    ///
    /// # 参数
    /// - `response`: 原始响应
    /// - `local_token`: 本地签发的关联编号，服务端未回显时使用
    ///
    /// # 返回
    /// 状态码非 2xx、响应体不是 JSON、`ok` 不是 `true` 都返回 `Failure`
    pub fn from_response(response: &SubmissionResponse, local_token: &str) -> Self {
        // 响应体解析失败降级为 None，不向上抛
        let payload: Option<Value> = serde_json::from_str(&response.body).ok();

        let acknowledged = payload
            .as_ref()
            .and_then(|p| p.get("ok"))
            .and_then(Value::as_bool)
            == Some(true);

        if !response.is_success_status() || !acknowledged {
            let message = payload
                .as_ref()
                .and_then(|p| p.get("error"))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(MSG_SUBMISSION_FAILED);
            return SubmissionOutcome::Failure {
                message: message.to_string(),
            };
        }

        let token = payload
            .as_ref()
            .and_then(|p| p.get("referenceId"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(local_token);

        SubmissionOutcome::Success {
            correlation_token: token.to_string(),
        }
    }

    /// 传输失败时的结果
    pub fn transport_failure() -> Self {
        SubmissionOutcome::Failure {
            message: MSG_SUBMISSION_FAILED.to_string(),
        }
    }
}
