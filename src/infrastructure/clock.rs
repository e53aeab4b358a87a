//! 时钟能力

use chrono::{Local, NaiveDate};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// 时钟
pub trait Clock {
    /// 当前 Unix 时间（秒）
    fn now_secs(&self) -> i64;

    /// 本地日期，用于关联编号
    fn today(&self) -> NaiveDate;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        Local::now().timestamp()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// 手动推进的时钟
///
/// 克隆体共享同一时间，持有一个克隆即可在外部推进
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<AtomicI64>,
    today: NaiveDate,
}

impl ManualClock {
    pub fn new(now_secs: i64, today: NaiveDate) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now_secs)),
            today,
        }
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, now_secs: i64) {
        self.now.store(now_secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
