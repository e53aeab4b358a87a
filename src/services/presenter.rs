//! 错误展示服务 - 业务能力层
//!
//! 把问题列表投影到行内错误、摘要区和状态行上，保证辅助技术可感知

use tracing::debug;

use crate::infrastructure::{FormPage, StatusState};
use crate::models::{FieldName, ValidationIssue};

pub const MSG_REVIEW: &str = "Please review the highlighted fields.";
pub const MSG_SUBMITTING: &str = "Submitting your request...";
pub const MSG_SUBMITTED: &str = "Your request was submitted successfully.";

/// 状态行的宏观状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Idle,
    Review,
    Submitting,
    Succeeded,
    Failed(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Idle => "",
            StatusLine::Review => MSG_REVIEW,
            StatusLine::Submitting => MSG_SUBMITTING,
            StatusLine::Succeeded => MSG_SUBMITTED,
            StatusLine::Failed(message) => message,
        }
    }

    pub fn state(&self) -> StatusState {
        match self {
            StatusLine::Idle | StatusLine::Submitting => StatusState::None,
            StatusLine::Succeeded => StatusState::Success,
            StatusLine::Review | StatusLine::Failed(_) => StatusState::Error,
        }
    }
}

/// 错误展示器
///
/// 职责：
/// - 每次校验先清空全部字段错误，再只给当前有问题的字段标记
/// - 维护摘要区：无问题时隐藏，有问题时重建并把焦点移过去
/// - 维护状态行与成功面板
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPresenter;

impl ErrorPresenter {
    pub fn new() -> Self {
        Self
    }

    /// 先清后标，防止修好的字段残留旧错误
    pub fn apply_field_errors<P: FormPage>(&self, page: &mut P, issues: &[ValidationIssue]) {
        self.clear_field_errors(page);
        for issue in issues {
            if let Some(field) = issue.field {
                page.set_field_error(field, Some(&issue.message));
            }
        }
    }

    pub fn clear_field_errors<P: FormPage>(&self, page: &mut P) {
        for field in FieldName::ALL {
            page.set_field_error(field, None);
        }
    }

    /// 重建摘要区并移动焦点，空列表时隐藏
    pub fn show_summary<P: FormPage>(&self, page: &mut P, issues: &[ValidationIssue]) {
        if issues.is_empty() {
            page.hide_summary();
            return;
        }

        debug!("显示错误摘要: {} 条", issues.len());
        page.show_summary(issues);
        page.focus_summary();
    }

    pub fn hide_summary<P: FormPage>(&self, page: &mut P) {
        page.hide_summary();
    }

    /// 摘要区链接被点击，焦点跳到对应字段
    pub fn activate_summary_link<P: FormPage>(&self, page: &mut P, field: FieldName) {
        page.focus_field(field);
    }

    pub fn set_status<P: FormPage>(&self, page: &mut P, status: &StatusLine) {
        page.set_status(status.text(), status.state());
    }

    pub fn show_success<P: FormPage>(&self, page: &mut P, token: &str) {
        page.show_success(token);
    }

    pub fn hide_success<P: FormPage>(&self, page: &mut P) {
        page.hide_success();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{Focus, MemoryPage};

    #[test]
    fn test_clear_then_reapply() {
        let presenter = ErrorPresenter::new();
        let mut page = MemoryPage::new("/delete");

        presenter.apply_field_errors(
            &mut page,
            &[
                ValidationIssue::for_field(FieldName::FullName, "name"),
                ValidationIssue::for_field(FieldName::Email, "email"),
            ],
        );
        assert!(page.is_marked_invalid(FieldName::FullName));
        assert!(page.is_marked_invalid(FieldName::Email));

        presenter.apply_field_errors(
            &mut page,
            &[ValidationIssue::for_field(FieldName::Email, "still bad")],
        );
        assert!(!page.is_marked_invalid(FieldName::FullName));
        assert_eq!(page.field_error(FieldName::FullName), None);
        assert_eq!(page.field_error(FieldName::Email), Some("still bad"));
    }

    #[test]
    fn test_empty_issues_leave_no_error_state() {
        let presenter = ErrorPresenter::new();
        let mut page = MemoryPage::new("/delete");
        page.set_field_error(FieldName::Phone, Some("old"));

        presenter.apply_field_errors(&mut page, &[]);
        presenter.apply_field_errors(&mut page, &[]);
        presenter.show_summary(&mut page, &[]);

        for field in FieldName::ALL {
            assert!(!page.is_marked_invalid(field));
            assert_eq!(page.field_error(field), None);
        }
        assert!(page.summary().is_none());
    }

    #[test]
    fn test_general_issue_marks_no_field() {
        let presenter = ErrorPresenter::new();
        let mut page = MemoryPage::new("/delete");
        let issues = [ValidationIssue::general("Unable to submit this request.")];

        presenter.apply_field_errors(&mut page, &issues);
        presenter.show_summary(&mut page, &issues);

        assert!(FieldName::ALL.iter().all(|f| !page.is_marked_invalid(*f)));
        assert_eq!(page.summary(), Some(&issues[..]));
        assert_eq!(page.focus(), Some(Focus::Summary));
    }

    #[test]
    fn test_summary_link_focuses_field() {
        let presenter = ErrorPresenter::new();
        let mut page = MemoryPage::new("/delete");
        presenter.activate_summary_link(&mut page, FieldName::RequestDetails);
        assert_eq!(page.focus(), Some(Focus::Field(FieldName::RequestDetails)));
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(StatusLine::Idle.state(), StatusState::None);
        assert_eq!(StatusLine::Review.text(), MSG_REVIEW);
        assert_eq!(StatusLine::Review.state(), StatusState::Error);
        assert_eq!(StatusLine::Submitting.state(), StatusState::None);
        assert_eq!(StatusLine::Succeeded.state(), StatusState::Success);
        let failed = StatusLine::Failed("Rate limited".to_string());
        assert_eq!(failed.text(), "Rate limited");
        assert_eq!(failed.state(), StatusState::Error);
    }
}
