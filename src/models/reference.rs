//! 关联编号：`DR-YYYYMMDD-XXXXXX`
//!
//! 后缀为 6 位大写 36 进制随机字符，只用于人工对照，不保证密码学唯一

use chrono::NaiveDate;
use rand::Rng;

const PREFIX: &str = "DR";
const SUFFIX_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 生成关联编号
///
/// # 参数
/// - `date`: 签发日期
/// - `rng`: 随机源
pub fn generate_reference<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", PREFIX, date.format("%Y%m%d"), suffix)
}

/// 检查字符串是否符合关联编号格式
pub fn is_reference_format(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(prefix), Some(date), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == PREFIX
        && date.len() == 8
        && NaiveDate::parse_from_str(date, "%Y%m%d").is_ok()
        && suffix.len() == SUFFIX_LEN
        && suffix
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}
