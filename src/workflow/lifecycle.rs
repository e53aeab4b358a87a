//! 提交生命周期状态机
//!
//! Idle → Validating → (Blocked | Submitting) → (Succeeded | Failed) → Idle

use tracing::debug;

use crate::error::LifecycleError;

/// 生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Validating,
    Blocked,
    Submitting,
    Succeeded,
    Failed,
}

impl LifecycleState {
    /// 是否允许跳转到 `next`
    pub fn can_transition(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Blocked)
                | (Validating, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Blocked, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }
}

/// 带守卫的状态机
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// 跳转到下一个状态，非法跳转保持原状态并返回错误
    pub fn advance(&mut self, next: LifecycleState) -> Result<(), LifecycleError> {
        if !self.state.can_transition(next) {
            return Err(LifecycleError {
                from: self.state,
                to: next,
            });
        }
        debug!("状态跳转: {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifecycleState::*;

    #[test]
    fn test_happy_path() {
        let mut lifecycle = Lifecycle::new();
        for next in [Validating, Submitting, Succeeded, Idle] {
            lifecycle.advance(next).unwrap();
        }
        assert_eq!(lifecycle.state(), Idle);
    }

    #[test]
    fn test_blocked_returns_to_idle() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(Validating).unwrap();
        lifecycle.advance(Blocked).unwrap();
        lifecycle.advance(Idle).unwrap();
        assert_eq!(lifecycle.state(), Idle);
    }

    #[test]
    fn test_double_submit_is_illegal() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(Validating).unwrap();
        lifecycle.advance(Submitting).unwrap();

        let err = lifecycle.advance(Validating).unwrap_err();
        assert_eq!(
            err,
            LifecycleError {
                from: Submitting,
                to: Validating
            }
        );
        assert_eq!(lifecycle.state(), Submitting);
    }

    #[test]
    fn test_cannot_skip_validation() {
        assert!(!Idle.can_transition(Submitting));
        assert!(!Idle.can_transition(Succeeded));
        assert!(!Blocked.can_transition(Submitting));
        assert!(!Failed.can_transition(Succeeded));
    }
}
