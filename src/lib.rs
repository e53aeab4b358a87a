//! # Delete Request Intake
//!
//! 数据删除请求表单的客户端控制器
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 页面、时钟、网络三种能力，全部以 trait 注入
//! - `FormPage` - 表单 DOM 约定，`MemoryPage` 为无渲染环境实现
//! - `Transport` - 提交请求，`HttpTransport` 基于 reqwest
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `FieldValidator` - 反自动化守卫 + 字段校验
//! - `ErrorPresenter` - 行内错误、摘要区、状态行
//! - `CharCounter` - 请求说明字数统计
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 提交生命周期
//! - `FormSession` - 开始时间与关联编号
//! - `Lifecycle` - 带守卫的状态机
//! - `IntakeController` - 事件入口（input / submit / 摘要链接）
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{Clock, FormPage, HttpTransport, MemoryPage, SystemClock, Transport};
pub use models::{FieldName, SubmissionOutcome, ValidationIssue};
pub use workflow::{IntakeController, LifecycleState, SubmitReport};
