//! 页面能力 - 基础设施层
//!
//! 把表单依赖的 DOM 约定抽象成 trait，控制器只通过它读写页面

use std::collections::{HashMap, HashSet};

use crate::models::{FieldName, FormValues, HiddenField, ValidationIssue};

/// 状态行的状态标记（对应 data-state 属性）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    None,
    Success,
    Error,
}

impl StatusState {
    /// data-state 属性值，`None` 表示移除该属性
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            StatusState::None => None,
            StatusState::Success => Some("success"),
            StatusState::Error => Some("error"),
        }
    }
}

/// 字符计数器的展示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    /// `current/max`
    pub text: String,
    pub near_limit: bool,
    pub at_limit: bool,
}

/// 表单声明的提交目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub action: String,
    pub method: String,
}

/// 表单页面
///
/// 职责：
/// - 暴露字段读取、清空能力，字段值只存在于页面
/// - 暴露错误槽、摘要区、状态行、成功面板、提交按钮、计数器等展示钩子
/// - 不认识校验规则，不处理提交流程
pub trait FormPage {
    /// 表单的 action 与 method
    fn target(&self) -> FormTarget;

    /// 文本字段的当前值
    fn value(&self, field: FieldName) -> String;

    /// 勾选框是否勾选
    fn is_checked(&self, field: FieldName) -> bool;

    fn hidden_value(&self, field: HiddenField) -> String;

    fn set_hidden_value(&mut self, field: HiddenField, value: &str);

    /// 设置字段行内错误，`None` 同时清除错误文本和 aria-invalid 标记
    fn set_field_error(&mut self, field: FieldName, message: Option<&str>);

    /// 字段当前是否带有 aria-invalid 标记
    fn is_marked_invalid(&self, field: FieldName) -> bool;

    /// 重建摘要区列表并显示
    fn show_summary(&mut self, issues: &[ValidationIssue]);

    /// 隐藏摘要区并清空列表
    fn hide_summary(&mut self);

    fn focus_summary(&mut self);

    fn focus_field(&mut self, field: FieldName);

    fn set_status(&mut self, text: &str, state: StatusState);

    /// 在成功面板中回显关联编号并显示面板
    fn show_success(&mut self, token: &str);

    fn hide_success(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    /// 等同于 form.reset()
    fn reset(&mut self);

    /// 页面是否有计数器元素
    fn has_counter(&self) -> bool;

    /// 计数器 data-max 属性的原始值
    fn counter_max_attr(&self) -> Option<String>;

    fn render_counter(&mut self, view: &CounterView);

    /// 读取一次字段快照
    fn read_values(&self) -> FormValues {
        FormValues {
            full_name: self.value(FieldName::FullName),
            email: self.value(FieldName::Email),
            phone: self.value(FieldName::Phone),
            request_details: self.value(FieldName::RequestDetails),
            confirmation: self.is_checked(FieldName::Confirmation),
            honeypot: self.hidden_value(HiddenField::Company),
        }
    }

    /// 按浏览器 FormData 的规则收集提交字段：未勾选的勾选框不提交
    fn form_data(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for field in FieldName::ALL {
            if field.is_checkbox() {
                if self.is_checked(field) {
                    pairs.push((field.name().to_string(), "on".to_string()));
                }
            } else {
                pairs.push((field.name().to_string(), self.value(field)));
            }
        }
        for hidden in HiddenField::ALL {
            pairs.push((hidden.name().to_string(), self.hidden_value(hidden)));
        }
        pairs
    }
}

/// 焦点位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Summary,
    Field(FieldName),
}

/// 无渲染环境的内存页面
///
/// 记录每个展示钩子的当前状态，供测试和无 DOM 宿主使用
#[derive(Debug, Clone)]
pub struct MemoryPage {
    target: FormTarget,
    values: HashMap<FieldName, String>,
    checked: bool,
    hidden: HashMap<HiddenField, String>,
    errors: HashMap<FieldName, String>,
    invalid: HashSet<FieldName>,
    summary: Option<Vec<ValidationIssue>>,
    focus: Option<Focus>,
    status_text: String,
    status_state: StatusState,
    success: Option<String>,
    submit_enabled: bool,
    counter: Option<CounterSlot>,
}

#[derive(Debug, Clone)]
struct CounterSlot {
    max_attr: Option<String>,
    view: Option<CounterView>,
}

impl MemoryPage {
    /// 创建带计数器（无 data-max）的页面
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            target: FormTarget {
                action: action.into(),
                method: "POST".to_string(),
            },
            values: HashMap::new(),
            checked: false,
            hidden: HashMap::new(),
            errors: HashMap::new(),
            invalid: HashSet::new(),
            summary: None,
            focus: None,
            status_text: String::new(),
            status_state: StatusState::None,
            success: None,
            submit_enabled: true,
            counter: Some(CounterSlot {
                max_attr: None,
                view: None,
            }),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.target.method = method.into();
        self
    }

    /// 设置计数器的 data-max 属性
    pub fn with_counter_max(mut self, max_attr: impl Into<String>) -> Self {
        self.counter = Some(CounterSlot {
            max_attr: Some(max_attr.into()),
            view: None,
        });
        self
    }

    /// 页面上没有计数器元素
    pub fn without_counter(mut self) -> Self {
        self.counter = None;
        self
    }

    /// 模拟用户输入（不触发事件，事件由控制器的 `on_input` 处理）
    pub fn type_into(&mut self, field: FieldName, text: &str) {
        self.values.insert(field, text.to_string());
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// 内联错误文本
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// 摘要区当前内容，`None` 表示隐藏
    pub fn summary(&self) -> Option<&[ValidationIssue]> {
        self.summary.as_deref()
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    pub fn status(&self) -> (&str, StatusState) {
        (&self.status_text, self.status_state)
    }

    /// 成功面板中回显的编号，`None` 表示面板隐藏
    pub fn success_token(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn counter_view(&self) -> Option<&CounterView> {
        self.counter.as_ref().and_then(|slot| slot.view.as_ref())
    }
}

impl FormPage for MemoryPage {
    fn target(&self) -> FormTarget {
        self.target.clone()
    }

    fn value(&self, field: FieldName) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn is_checked(&self, field: FieldName) -> bool {
        field.is_checkbox() && self.checked
    }

    fn hidden_value(&self, field: HiddenField) -> String {
        self.hidden.get(&field).cloned().unwrap_or_default()
    }

    fn set_hidden_value(&mut self, field: HiddenField, value: &str) {
        self.hidden.insert(field, value.to_string());
    }

    fn set_field_error(&mut self, field: FieldName, message: Option<&str>) {
        match message.filter(|m| !m.is_empty()) {
            Some(message) => {
                self.errors.insert(field, message.to_string());
                self.invalid.insert(field);
            }
            None => {
                self.errors.remove(&field);
                self.invalid.remove(&field);
            }
        }
    }

    fn is_marked_invalid(&self, field: FieldName) -> bool {
        self.invalid.contains(&field)
    }

    fn show_summary(&mut self, issues: &[ValidationIssue]) {
        self.summary = Some(issues.to_vec());
    }

    fn hide_summary(&mut self) {
        self.summary = None;
    }

    fn focus_summary(&mut self) {
        self.focus = Some(Focus::Summary);
    }

    fn focus_field(&mut self, field: FieldName) {
        self.focus = Some(Focus::Field(field));
    }

    fn set_status(&mut self, text: &str, state: StatusState) {
        self.status_text = text.to_string();
        self.status_state = state;
    }

    fn show_success(&mut self, token: &str) {
        self.success = Some(token.to_string());
    }

    fn hide_success(&mut self) {
        self.success = None;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn reset(&mut self) {
        self.values.clear();
        self.checked = false;
        self.hidden.clear();
    }

    fn has_counter(&self) -> bool {
        self.counter.is_some()
    }

    fn counter_max_attr(&self) -> Option<String> {
        self.counter.as_ref().and_then(|slot| slot.max_attr.clone())
    }

    fn render_counter(&mut self, view: &CounterView) {
        if let Some(slot) = self.counter.as_mut() {
            slot.view = Some(view.clone());
        }
    }
}
