use serde::{Deserialize, Serialize};
use std::fmt;

/// 会員ID - 会員管理コンテキストへの参照
///
/// カタログコンテキストは会員レコードを持たず、IDのみを扱う。
/// 有効性の判定はMemberValidatorポートに委譲する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_round_trips_value() {
        let member_id = MemberId::new(42);
        assert_eq!(member_id.value(), 42);
        assert_eq!(MemberId::from(42), member_id);
        assert_eq!(member_id.to_string(), "42");
    }

    #[test]
    fn test_member_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&MemberId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: MemberId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, MemberId::new(7));
    }
}
