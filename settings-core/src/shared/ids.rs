// Id Generation
//
// 序列项 ID 生成策略，通过依赖注入提供
// 唯一性由策略保证，而不是依赖时间戳的偶然性

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// ID 生成器端口
///
/// `scope` 为父级命名空间（如页脚列的 ID），为空时生成顶层 ID
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, scope: &str) -> String;
}

/// 基于 UUID v4 的生成器（生产默认）
#[derive(Debug, Default)]
pub struct UuidIds;

impl UuidIds {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIds {
    fn next_id(&self, scope: &str) -> String {
        let id = Uuid::new_v4().to_string();
        if scope.is_empty() {
            id
        } else {
            format!("{scope}-{id}")
        }
    }
}

/// 递增计数器生成器
///
/// ID 可预测，用于测试和需要稳定 ID 的场景
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从指定值之后开始计数（用于避开种子数据占用的 ID）
    pub fn starting_after(last: u64) -> Self {
        Self {
            counter: AtomicU64::new(last),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, scope: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        if scope.is_empty() {
            n.to_string()
        } else {
            format!("{scope}-{n}")
        }
    }
}
