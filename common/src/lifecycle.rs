//! ビューのマウント状態
//!
//! 非同期処理の完了時に、アンマウント済みのビューへ書き込まないためのガード。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// マウント中フラグ（クローンはすべて同じフラグを共有する）
#[derive(Debug, Clone)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// マウント済みの状態で作成
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// アンマウントを記録（以降 run_if_mounted は何もしない）
    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// マウント中のときだけ実行
    pub fn run_if_mounted<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.is_mounted() {
            Some(f())
        } else {
            log::debug!("view unmounted, dropping late completion");
            None
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
