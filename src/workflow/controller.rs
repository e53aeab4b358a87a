//! 删除请求表单控制器 - 流程层
//!
//! 核心职责：把用户事件喂给提交状态机
//!
//! 流程顺序：
//! 1. 校验（守卫 → 字段）
//! 2. 不通过：展示问题，回到空闲
//! 3. 通过：禁用按钮 → 提交 → 成功重置 / 失败保留输入 → 恢复按钮

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::{Clock, FormPage, Transport};
use crate::models::{
    FieldName, HiddenField, SubmissionOutcome, SubmissionRequest, ValidationIssue,
};
use crate::services::{elapsed_since, CharCounter, ErrorPresenter, FieldValidator, StatusLine};
use crate::utils::logging::truncate_text;
use crate::workflow::lifecycle::{Lifecycle, LifecycleState};
use crate::workflow::session::FormSession;

/// 一次提交动作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// 无法异步提交，交给浏览器原生提交，控制器不做任何处理
    NativeFallback,
    /// 校验未通过
    Blocked(Vec<ValidationIssue>),
    /// 请求已发出并得到结果
    Completed(SubmissionOutcome),
    /// 状态机拒绝了本次动作
    Ignored,
}

/// 删除请求表单控制器
///
/// - 持有页面、传输、时钟三种能力
/// - 字段值只从页面读取，不保留副本
/// - `submit` 借用 `&mut self` 贯穿整个请求，同一时刻最多一个提交
pub struct IntakeController<P, T, C> {
    page: P,
    transport: T,
    clock: C,
    session: FormSession,
    lifecycle: Lifecycle,
    validator: FieldValidator,
    presenter: ErrorPresenter,
    default_counter_max: usize,
    verbose_logging: bool,
    rng: StdRng,
}

impl<P: FormPage, T: Transport, C: Clock> IntakeController<P, T, C> {
    /// 初始化控制器：签发会话、写入隐藏字段、刷新计数器
    pub fn new(page: P, transport: T, clock: C, config: &Config) -> Self {
        Self::with_rng(page, transport, clock, config, StdRng::from_entropy())
    }

    /// 使用指定随机源初始化
    pub fn with_rng(mut page: P, transport: T, clock: C, config: &Config, mut rng: StdRng) -> Self {
        let session = FormSession::issue(&clock, &mut rng);
        session.write_to(&mut page);

        info!("📝 删除请求表单已就绪 {}", session);

        let mut controller = Self {
            page,
            transport,
            clock,
            session,
            lifecycle: Lifecycle::new(),
            validator: FieldValidator::new(config),
            presenter: ErrorPresenter::new(),
            default_counter_max: config.default_counter_max,
            verbose_logging: config.verbose_logging,
            rng,
        };
        controller.update_counter();
        controller
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// 宿主把用户输入写进页面时使用
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// 字段 input 事件
    ///
    /// 清掉摘要、成功面板和状态行；字段当前带错误时立即重新校验
    pub fn on_input(&mut self, field: FieldName) {
        self.presenter.hide_summary(&mut self.page);
        self.presenter.hide_success(&mut self.page);
        self.presenter.set_status(&mut self.page, &StatusLine::Idle);

        if self.page.is_marked_invalid(field) {
            self.run_validation();
        }

        self.update_counter();
    }

    /// 摘要区链接被激活
    pub fn on_summary_link(&mut self, field: FieldName) {
        self.presenter.activate_summary_link(&mut self.page, field);
    }

    /// 用户提交表单
    pub async fn submit(&mut self) -> SubmitReport {
        if !self.transport.can_submit_async() {
            info!("当前环境不支持异步提交，交给原生表单提交");
            return SubmitReport::NativeFallback;
        }

        self.recover_abandoned();

        if let Err(e) = self.lifecycle.advance(LifecycleState::Validating) {
            warn!("⚠️ 忽略提交: {}", e);
            return SubmitReport::Ignored;
        }

        self.presenter.hide_summary(&mut self.page);
        self.presenter.hide_success(&mut self.page);

        let issues = self.run_validation();
        if !issues.is_empty() {
            return self.block(issues);
        }

        self.enter(LifecycleState::Submitting);
        self.page.set_submit_enabled(false);
        self.presenter
            .set_status(&mut self.page, &StatusLine::Submitting);

        info!("📤 正在提交删除请求 {}", self.session);

        let outcome = self.send().await;
        match &outcome {
            SubmissionOutcome::Success { correlation_token } => {
                self.succeed(correlation_token);
            }
            SubmissionOutcome::Failure { message } => {
                self.fail(message);
            }
        }

        // 无论结果如何都恢复按钮
        self.page.set_submit_enabled(true);
        self.enter(LifecycleState::Idle);

        SubmitReport::Completed(outcome)
    }

    /// 校验当前页面并刷新行内错误
    fn run_validation(&mut self) -> Vec<ValidationIssue> {
        let values = self.page.read_values();
        let elapsed = elapsed_since(
            &self.page.hidden_value(HiddenField::SubmittedAt),
            self.clock.now_secs(),
        );

        let issues = self.validator.validate(&values, elapsed);
        self.presenter.apply_field_errors(&mut self.page, &issues);
        issues
    }

    fn block(&mut self, issues: Vec<ValidationIssue>) -> SubmitReport {
        self.enter(LifecycleState::Blocked);

        warn!("⚠️ 提交被拦截: {} 个问题", issues.len());
        if self.verbose_logging {
            for issue in &issues {
                let field = issue.field.map_or("-", FieldName::name);
                info!("  {} | {}", field, truncate_text(&issue.message, 60));
            }
        }

        self.presenter.show_summary(&mut self.page, &issues);
        self.presenter.set_status(&mut self.page, &StatusLine::Review);
        self.enter(LifecycleState::Idle);

        SubmitReport::Blocked(issues)
    }

    /// 发出唯一一次网络请求，所有错误都归一成 `Failure`
    async fn send(&self) -> SubmissionOutcome {
        let target = self.page.target();
        let request = SubmissionRequest {
            url: target.action,
            method: target.method.to_ascii_uppercase(),
            fields: self.page.form_data(),
        };

        match self.transport.submit(&request).await {
            Ok(response) => {
                SubmissionOutcome::from_response(&response, self.session.correlation_token())
            }
            Err(e) => {
                warn!("⚠️ 提交请求失败: {}", e);
                SubmissionOutcome::transport_failure()
            }
        }
    }

    fn succeed(&mut self, token: &str) {
        self.enter(LifecycleState::Succeeded);
        info!("✓ 删除请求提交成功, 编号 {}", token);

        self.presenter.show_success(&mut self.page, token);
        self.page.reset();
        self.presenter.clear_field_errors(&mut self.page);

        self.session.rearm(&self.clock, &mut self.rng);
        self.session.write_to(&mut self.page);

        self.update_counter();
        self.presenter.set_status(&mut self.page, &StatusLine::Succeeded);
    }

    fn fail(&mut self, message: &str) {
        self.enter(LifecycleState::Failed);
        warn!("⚠️ 删除请求提交失败: {}", truncate_text(message, 80));

        self.presenter
            .show_summary(&mut self.page, &[ValidationIssue::general(message)]);
        self.presenter
            .set_status(&mut self.page, &StatusLine::Failed(message.to_string()));
    }

    fn update_counter(&mut self) {
        if !self.page.has_counter() {
            return;
        }
        let counter = CharCounter::from_attr(
            self.page.counter_max_attr().as_deref(),
            self.default_counter_max,
        );
        let view = counter.measure(&self.page.value(FieldName::RequestDetails));
        self.page.render_counter(&view);
    }

    /// 上一次 `submit` 的 future 在等待响应时被丢弃，状态会停在 Submitting，
    /// 按失败处理并恢复按钮
    fn recover_abandoned(&mut self) {
        if self.lifecycle.state() != LifecycleState::Submitting {
            return;
        }
        warn!("⚠️ 上一次提交未完成就被放弃，恢复表单");
        self.enter(LifecycleState::Failed);
        self.page.set_submit_enabled(true);
        self.presenter.set_status(&mut self.page, &StatusLine::Idle);
        self.enter(LifecycleState::Idle);
    }

    /// 内部跳转，流程本身保证合法
    fn enter(&mut self, next: LifecycleState) {
        if let Err(e) = self.lifecycle.advance(next) {
            error!("❌ {}", e);
        }
    }
}
