//! 字符计数服务

use regex::Regex;
use std::sync::LazyLock;

use crate::infrastructure::CounterView;

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("leading int pattern is valid"));

/// 接近上限的比例
const NEAR_LIMIT_RATIO: f64 = 0.85;

/// 请求说明字段的字符计数器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    max: usize,
}

impl CharCounter {
    /// 根据 data-max 属性创建计数器
    ///
    /// 属性缺失、无法解析或不大于 0 时使用 `default_max`
    pub fn from_attr(max_attr: Option<&str>, default_max: usize) -> Self {
        let max = max_attr
            .and_then(parse_leading_int)
            .filter(|&max| max > 0)
            .and_then(|max| usize::try_from(max).ok())
            .unwrap_or(default_max);
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// 计算当前文本的展示内容
    pub fn measure(&self, text: &str) -> CounterView {
        let len = text.chars().count();
        let near_threshold = (self.max as f64 * NEAR_LIMIT_RATIO).floor() as usize;
        CounterView {
            text: format!("{}/{}", len, self.max),
            near_limit: len >= near_threshold && len < self.max,
            at_limit: len >= self.max,
        }
    }
}

/// 按 parseInt 的规则读取开头的十进制整数，忽略后续字符，溢出时饱和
fn parse_leading_int(raw: &str) -> Option<i64> {
    let caps = LEADING_INT.captures(raw)?;
    let negative = &caps[1] == "-";
    let value = caps[2].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_from_attr() {
        assert_eq!(CharCounter::from_attr(Some("500"), 4000).max(), 500);
        assert_eq!(CharCounter::from_attr(Some(" 250px"), 4000).max(), 250);
        assert_eq!(CharCounter::from_attr(None, 4000).max(), 4000);
        assert_eq!(CharCounter::from_attr(Some(""), 4000).max(), 4000);
        assert_eq!(CharCounter::from_attr(Some("abc"), 4000).max(), 4000);
        assert_eq!(CharCounter::from_attr(Some("0"), 4000).max(), 4000);
        assert_eq!(CharCounter::from_attr(Some("-20"), 4000).max(), 4000);
        assert_eq!(CharCounter::from_attr(Some("+300"), 4000).max(), 300);
    }

    #[test]
    fn test_huge_max_saturates() {
        let huge = "9".repeat(30);
        let counter = CharCounter::from_attr(Some(&huge), 4000);
        assert_eq!(counter.max(), usize::try_from(i64::MAX).unwrap_or(4000));

        let view = counter.measure("abc");
        assert!(!view.near_limit && !view.at_limit);
    }

    #[test]
    fn test_display_text() {
        let counter = CharCounter::from_attr(None, 4000);
        assert_eq!(counter.measure("").text, "0/4000");
        assert_eq!(counter.measure("héllo").text, "5/4000");
    }

    #[test]
    fn test_limit_states() {
        let counter = CharCounter::from_attr(Some("100"), 4000);

        let below = counter.measure(&"a".repeat(84));
        assert!(!below.near_limit && !below.at_limit);

        let near = counter.measure(&"a".repeat(85));
        assert!(near.near_limit && !near.at_limit);

        let at = counter.measure(&"a".repeat(100));
        assert!(!at.near_limit && at.at_limit);

        let over = counter.measure(&"a".repeat(120));
        assert!(over.at_limit);
    }

    #[test]
    fn test_near_limit_floors_threshold() {
        // floor(10 * 0.85) = 8
        let counter = CharCounter::from_attr(Some("10"), 4000);
        assert!(counter.measure("12345678").near_limit);
        assert!(!counter.measure("1234567").near_limit);
    }
}
