//! 员工目录数据源
//!
//! 目录由外部的目录/档案服务持有，引擎只接收只读快照。
//! 这里定义数据源接口，并提供默认的内存实现。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::EmployeeRecord;
use crate::errors::Result;

/// 目录数据源接口
///
/// 每次调用返回一份独立的快照，调用方拿到后不会再被修改。
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// 加载当前目录快照
    async fn load_directory(&self) -> Result<Vec<EmployeeRecord>>;
}

/// 内存目录
///
/// 数据仅在内存中，适合测试和嵌入使用
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl MemoryDirectory {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// 整体替换目录
    pub async fn replace(&self, records: Vec<EmployeeRecord>) {
        *self.records.write().await = records;
    }

    /// 按 id 更新记录，不存在时追加到末尾
    pub async fn upsert(&self, record: EmployeeRecord) {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    /// 删除记录，返回是否存在
    pub async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        records.len() != before
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DirectorySource for MemoryDirectory {
    async fn load_directory(&self) -> Result<Vec<EmployeeRecord>> {
        Ok(self.records.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_directory_mutations() {
        let directory = MemoryDirectory::new(vec![EmployeeRecord::new("1", "Alice")]);

        directory
            .upsert(EmployeeRecord::reporting_to("2", "Bob", "1"))
            .await;
        directory
            .upsert(EmployeeRecord::new("1", "Alice").with_title("CEO"))
            .await;
        assert_eq!(directory.len().await, 2);

        let snapshot = directory.load_directory().await.unwrap();
        assert_eq!(snapshot[0].title.as_deref(), Some("CEO"));
        assert_eq!(snapshot[1].id, "2");

        assert!(directory.remove("2").await);
        assert!(!directory.remove("2").await);

        directory.replace(Vec::new()).await;
        assert!(directory.is_empty().await);
        // 之前取出的快照不受影响
        assert_eq!(snapshot.len(), 2);
    }
}
