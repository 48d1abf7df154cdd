//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a client-supplied idempotency key.
pub const IDEMPOTENCY_KEY_MAX_LEN: usize = 255;

/// Customer identifier value object.
///
/// Identifiers are assigned by the customer repository and are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Create a new CustomerId.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::CustomerIdNotPositive` for zero or negative values
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::CustomerIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client-supplied idempotency token.
///
/// Opaque to the service; only emptiness and length are checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Create a new IdempotencyKey.
    ///
    /// # Arguments
    ///
    /// * `key` - The token exactly as the client sent it
    ///
    /// # Returns
    ///
    /// A Result containing the IdempotencyKey or an error if validation fails
    pub fn new(key: String) -> Result<Self, ValueObjectError> {
        if key.is_empty() {
            return Err(ValueObjectError::IdempotencyKeyEmpty);
        }
        let len = key.len();
        if len > IDEMPOTENCY_KEY_MAX_LEN {
            return Err(ValueObjectError::IdempotencyKeyTooLong {
                max: IDEMPOTENCY_KEY_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(key))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdempotencyKey {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key forwarded verbatim to both lookup sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey(String);

impl LookupKey {
    /// Create a new LookupKey.
    pub fn new(key: String) -> Result<Self, ValueObjectError> {
        if key.is_empty() {
            return Err(ValueObjectError::LookupKeyEmpty);
        }
        Ok(Self(key))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LookupKey {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_new_success() {
        // テスト項目: 正の値から CustomerId を作成できる
        // when (操作):
        let result = CustomerId::new(1);

        // then (期待する結果):
        assert_eq!(result.unwrap().value(), 1);
    }

    #[test]
    fn test_customer_id_rejects_zero_and_negative() {
        // テスト項目: 0 以下の CustomerId は作成できない
        assert_eq!(
            CustomerId::new(0),
            Err(ValueObjectError::CustomerIdNotPositive(0))
        );
        assert_eq!(
            CustomerId::new(-7),
            Err(ValueObjectError::CustomerIdNotPositive(-7))
        );
    }

    #[test]
    fn test_idempotency_key_new_success() {
        // テスト項目: 有効な冪等キーを作成できる
        // given (前提条件):
        let key = "key-1".to_string();

        // when (操作):
        let result = IdempotencyKey::new(key);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "key-1");
    }

    #[test]
    fn test_idempotency_key_new_empty_fails() {
        // テスト項目: 空の冪等キーは作成できない
        let result = IdempotencyKey::new(String::new());

        assert_eq!(result, Err(ValueObjectError::IdempotencyKeyEmpty));
    }

    #[test]
    fn test_idempotency_key_new_too_long_fails() {
        // テスト項目: 256 文字以上の冪等キーは作成できない
        // given (前提条件):
        let key = "k".repeat(IDEMPOTENCY_KEY_MAX_LEN + 1);

        // when (操作):
        let result = IdempotencyKey::new(key);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::IdempotencyKeyTooLong {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_lookup_key_new_empty_fails() {
        // テスト項目: 空の検索キーは作成できない
        assert_eq!(
            LookupKey::new(String::new()),
            Err(ValueObjectError::LookupKeyEmpty)
        );
    }

    #[test]
    fn test_lookup_key_is_kept_verbatim() {
        // テスト項目: 検索キーは加工されずに保持される
        let key = LookupKey::try_from(" 83402-220 ".to_string()).unwrap();

        assert_eq!(key.as_str(), " 83402-220 ");
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        assert!(ts1 < ts2);
    }
}
