use crate::types::ColumnAccess;

/// Decides which columns a child may read, given both parents' access
pub trait ColumnAccessMergeStrategy: Send + Sync {
    fn merge(&self, first: &ColumnAccess, second: &ColumnAccess) -> ColumnAccess;
}

/// Child may read anything either parent could read
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleColumnAccessMergeStrategy;

impl ColumnAccessMergeStrategy for SimpleColumnAccessMergeStrategy {
    fn merge(&self, first: &ColumnAccess, second: &ColumnAccess) -> ColumnAccess {
        first.union(second)
    }
}
