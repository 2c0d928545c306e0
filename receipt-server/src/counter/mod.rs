//! Receipt number counter
//!
//! # 结构
//!
//! - [`ReceiptCounter`] - 计数器抽象 (allocate / ingest)
//! - [`FileCounterStore`] - JSON 文件持久化 (`{"counter": <int>}`)
//! - [`MemoryCounterStore`] - 内存实现，用于测试
//!
//! # 失败策略
//!
//! 计数器错误从不返回给 HTTP 调用方：读取失败时回退到 1，
//! 写入失败只记录日志。回退原因通过 [`CounterOrigin`] 和 `warn!` 日志暴露。

mod file;
mod memory;

pub use file::FileCounterStore;
pub use memory::MemoryCounterStore;

use std::path::PathBuf;

use async_trait::async_trait;
use shared::ReceiptId;
use thiserror::Error;

/// Counter value used when nothing usable is persisted
pub const INITIAL_COUNTER: u64 = 1;

/// Largest counter value that can be handed out; its successor must still fit
pub const MAX_COUNTER: u64 = u64::MAX - 1;

/// Why a persisted counter could not be used
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("counter file not found: {0}")]
    Missing(PathBuf),

    #[error("counter file corrupt: {0}")]
    Corrupt(String),

    #[error("counter file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where an allocated id came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterOrigin {
    /// Read from the store
    Persisted,
    /// Store empty, started from [`INITIAL_COUNTER`]
    DefaultedMissing,
    /// Store unparsable, restarted from [`INITIAL_COUNTER`]
    DefaultedCorrupt,
    /// Store unreadable, restarted from [`INITIAL_COUNTER`]
    DefaultedUnreadable,
    /// Caller-supplied numeric id
    Ingested,
}

impl CounterOrigin {
    pub fn is_defaulted(&self) -> bool {
        matches!(
            self,
            Self::DefaultedMissing | Self::DefaultedCorrupt | Self::DefaultedUnreadable
        )
    }
}

impl From<&CounterError> for CounterOrigin {
    fn from(err: &CounterError) -> Self {
        match err {
            CounterError::Missing(_) => Self::DefaultedMissing,
            CounterError::Corrupt(_) => Self::DefaultedCorrupt,
            CounterError::Io(_) => Self::DefaultedUnreadable,
        }
    }
}

/// Result of resolving a receipt id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub id: ReceiptId,
    pub origin: CounterOrigin,
}

/// Receipt number store
#[async_trait]
pub trait ReceiptCounter: Send + Sync {
    /// Return the current counter as a zero-padded id and persist counter + 1
    async fn allocate(&self) -> Allocation;

    /// Accept a caller-supplied id
    ///
    /// A numeric candidate is returned unchanged and the counter moves to
    /// candidate + 1; anything else behaves exactly like [`allocate`](Self::allocate).
    async fn ingest(&self, candidate: &str) -> Allocation;
}

/// Numeric value of a caller-supplied id, if it is one
///
/// Digits with an optional leading `+`, up to [`MAX_COUNTER`]. Surrounding
/// whitespace, a minus sign or a larger value make the id non-numeric.
pub fn parse_candidate(candidate: &str) -> Option<u64> {
    candidate.parse().ok().filter(|value| *value <= MAX_COUNTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate() {
        assert_eq!(parse_candidate("0042"), Some(42));
        assert_eq!(parse_candidate("7"), Some(7));
        assert_eq!(parse_candidate("not-a-number"), None);
        assert_eq!(parse_candidate(""), None);
        assert_eq!(parse_candidate("-1"), None);
        assert_eq!(parse_candidate(" 42"), None);
        assert_eq!(parse_candidate("+7"), Some(7));
        assert_eq!(parse_candidate("18446744073709551614"), Some(MAX_COUNTER));
        assert_eq!(parse_candidate("18446744073709551615"), None);
    }

    #[test]
    fn test_origin_from_error() {
        let missing = CounterError::Missing(PathBuf::from("c.json"));
        let corrupt = CounterError::Corrupt("eof".into());
        let io = CounterError::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));

        assert_eq!(CounterOrigin::from(&missing), CounterOrigin::DefaultedMissing);
        assert_eq!(CounterOrigin::from(&corrupt), CounterOrigin::DefaultedCorrupt);
        assert_eq!(CounterOrigin::from(&io), CounterOrigin::DefaultedUnreadable);
        assert!(CounterOrigin::DefaultedCorrupt.is_defaulted());
        assert!(!CounterOrigin::Ingested.is_defaulted());
    }
}
