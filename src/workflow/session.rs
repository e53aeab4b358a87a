//! 表单会话
//!
//! 每次页面加载一个实例，开始时间与关联编号总是一起签发

use rand::Rng;
use std::fmt::Display;

use crate::infrastructure::{Clock, FormPage};
use crate::models::{generate_reference, HiddenField};

/// 表单会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    /// 会话开始时间（Unix 秒）
    started_at: i64,

    /// 关联编号 `DR-YYYYMMDD-XXXXXX`
    correlation_token: String,
}

impl FormSession {
    /// 签发新会话
    pub fn issue<C: Clock, R: Rng + ?Sized>(clock: &C, rng: &mut R) -> Self {
        Self {
            started_at: clock.now_secs(),
            correlation_token: generate_reference(clock.today(), rng),
        }
    }

    /// 提交成功后重新签发，新编号不会与旧编号相同
    pub fn rearm<C: Clock, R: Rng + ?Sized>(&mut self, clock: &C, rng: &mut R) {
        let mut next = Self::issue(clock, rng);
        while next.correlation_token == self.correlation_token {
            next.correlation_token = generate_reference(clock.today(), rng);
        }
        *self = next;
    }

    /// 写入页面的隐藏字段，随表单一起提交
    pub fn write_to<P: FormPage>(&self, page: &mut P) {
        page.set_hidden_value(HiddenField::SubmittedAt, &self.started_at.to_string());
        page.set_hidden_value(HiddenField::ReferenceId, &self.correlation_token);
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn correlation_token(&self) -> &str {
        &self.correlation_token
    }
}

impl Display for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[会话 开始#{} 编号#{}]",
            self.started_at, self.correlation_token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{ManualClock, MemoryPage};
    use crate::models::is_reference_format;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn clock() -> ManualClock {
        ManualClock::new(1_735_689_600, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_issue_stamps_both() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(1);
        let session = FormSession::issue(&clock, &mut rng);

        assert_eq!(session.started_at(), 1_735_689_600);
        assert!(session.correlation_token().starts_with("DR-20250101-"));
        assert!(is_reference_format(session.correlation_token()));
    }

    #[test]
    fn test_rearm_resets_together() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = FormSession::issue(&clock, &mut rng);
        let old_token = session.correlation_token().to_string();

        clock.advance(42);
        session.rearm(&clock, &mut rng);

        assert_eq!(session.started_at(), 1_735_689_642);
        assert_ne!(session.correlation_token(), old_token);
        assert!(is_reference_format(session.correlation_token()));
    }

    #[test]
    fn test_write_to_page() {
        let clock = clock();
        let mut rng = StdRng::seed_from_u64(3);
        let session = FormSession::issue(&clock, &mut rng);
        let mut page = MemoryPage::new("/delete");

        session.write_to(&mut page);

        assert_eq!(page.hidden_value(HiddenField::SubmittedAt), "1735689600");
        assert_eq!(
            page.hidden_value(HiddenField::ReferenceId),
            session.correlation_token()
        );
    }
}
