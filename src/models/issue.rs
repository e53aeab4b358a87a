use super::field::FieldName;

/// 蜜罐被填写时的提示（不透露是哪个守卫触发）
pub const MSG_REJECTED: &str = "Unable to submit this request.";
/// 提交过快时的提示
pub const MSG_TOO_FAST: &str = "Please wait a few seconds before submitting.";
pub const MSG_FULL_NAME: &str = "Please enter your full name.";
pub const MSG_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_PHONE: &str = "Please enter a valid phone number or leave it blank.";
pub const MSG_REQUEST_DETAILS: &str =
    "Please include at least 20 characters describing your request.";
pub const MSG_CONFIRMATION: &str = "You must confirm the deletion request before submitting.";

/// 校验问题
///
/// `field` 为 `None` 表示与具体字段无关的拒绝（守卫触发或提交失败）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: Option<FieldName>,
    pub message: String,
}

impl ValidationIssue {
    /// 绑定到字段的问题
    pub fn for_field(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            message: message.into(),
        }
    }

    /// 不绑定字段的问题
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}
