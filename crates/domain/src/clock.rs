//! # Clock（時刻プロバイダ）
//!
//! 決済レコードの `created_at` を `Utc::now()` 直接呼び出しから切り離し、
//! 固定時刻を注入可能にするための抽象化。

use chrono::{DateTime, TimeZone, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時刻を返す実装
///
/// スタブの決済台帳が既定で使用する。
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// スタブ用の既定時刻（2023-06-01T12:00:00Z）
    pub fn placeholder() -> Self {
        Self::new(
            Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
