use std::fmt;

/// 需要校验的可见字段
///
/// 顺序即校验顺序，也是错误摘要里的排列顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// 姓名
    FullName,
    /// 邮箱
    Email,
    /// 电话（可选）
    Phone,
    /// 请求说明
    RequestDetails,
    /// 确认勾选框
    Confirmation,
}

impl FieldName {
    /// 全部字段，按表单顺序
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::RequestDetails,
        FieldName::Confirmation,
    ];

    /// 表单中的 name 属性
    pub fn name(self) -> &'static str {
        match self {
            FieldName::FullName => "full_name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::RequestDetails => "request_details",
            FieldName::Confirmation => "confirmation",
        }
    }

    /// 是否为勾选框
    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldName::Confirmation)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 隐藏字段：蜜罐、渲染时间戳、关联编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenField {
    Company,
    SubmittedAt,
    ReferenceId,
}

impl HiddenField {
    pub const ALL: [HiddenField; 3] = [
        HiddenField::Company,
        HiddenField::SubmittedAt,
        HiddenField::ReferenceId,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HiddenField::Company => "company",
            HiddenField::SubmittedAt => "submitted_at",
            HiddenField::ReferenceId => "reference_id",
        }
    }
}

/// 一次读取到的字段值
///
/// 只是从页面读出来的瞬时快照，用完即弃，页面才是唯一数据源
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub request_details: String,
    pub confirmation: bool,
    pub honeypot: String,
}
