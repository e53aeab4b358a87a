//! 字段校验服务 - 业务能力层
//!
//! 只负责"把字段值变成问题列表"，不碰页面展示

use regex::Regex;
use std::sync::LazyLock;

use crate::config::Config;
use crate::models::issue::{
    MSG_CONFIRMATION, MSG_EMAIL, MSG_FULL_NAME, MSG_PHONE, MSG_REJECTED, MSG_REQUEST_DETAILS,
    MSG_TOO_FAST,
};
use crate::models::{FieldName, FormValues, ValidationIssue};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 7;
const MIN_DETAILS_LEN: usize = 20;

/// 字段校验器
///
/// 职责：
/// - 先过反自动化守卫（蜜罐、最短填写时间），命中即短路
/// - 守卫通过后逐个字段检查，汇总全部问题
/// - 纯函数，同样的输入总是得到同样的输出
#[derive(Debug, Clone)]
pub struct FieldValidator {
    min_submit_delay_secs: i64,
}

impl FieldValidator {
    /// 创建新的校验器
    pub fn new(config: &Config) -> Self {
        Self {
            min_submit_delay_secs: config.min_submit_delay_secs,
        }
    }

    /// 校验一次字段快照
    ///
    /// # 参数
    /// - `values`: 字段快照
    /// - `elapsed_secs`: 距离会话开始的秒数，时间戳无法解析时为 `None`
    ///
    /// # 返回
    /// 问题列表，空列表表示通过
    pub fn validate(&self, values: &FormValues, elapsed_secs: Option<i64>) -> Vec<ValidationIssue> {
        if let Some(rejection) = self.check_guard(values, elapsed_secs) {
            return vec![rejection];
        }

        let mut issues = Vec::new();

        if values.full_name.trim().chars().count() < MIN_NAME_LEN {
            issues.push(ValidationIssue::for_field(FieldName::FullName, MSG_FULL_NAME));
        }

        if !is_valid_email(values.email.trim()) {
            issues.push(ValidationIssue::for_field(FieldName::Email, MSG_EMAIL));
        }

        let phone = values.phone.trim();
        if !phone.is_empty() && count_digits(phone) < MIN_PHONE_DIGITS {
            issues.push(ValidationIssue::for_field(FieldName::Phone, MSG_PHONE));
        }

        if values.request_details.trim().chars().count() < MIN_DETAILS_LEN {
            issues.push(ValidationIssue::for_field(
                FieldName::RequestDetails,
                MSG_REQUEST_DETAILS,
            ));
        }

        if !values.confirmation {
            issues.push(ValidationIssue::for_field(
                FieldName::Confirmation,
                MSG_CONFIRMATION,
            ));
        }

        issues
    }

    /// 反自动化守卫，两种拒绝都不绑定字段
    fn check_guard(&self, values: &FormValues, elapsed_secs: Option<i64>) -> Option<ValidationIssue> {
        if !values.honeypot.trim().is_empty() {
            return Some(ValidationIssue::general(MSG_REJECTED));
        }

        match elapsed_secs {
            Some(elapsed) if elapsed >= 0 && elapsed >= self.min_submit_delay_secs => None,
            _ => Some(ValidationIssue::general(MSG_TOO_FAST)),
        }
    }
}

/// 根据隐藏字段里的开始时间计算经过秒数
///
/// 时间戳不是整数时返回 `None`
pub fn elapsed_since(started_at: &str, now_secs: i64) -> Option<i64> {
    let started: i64 = started_at.trim().parse().ok()?;
    now_secs.checked_sub(started)
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}
