// ==========================================
// 滞销库存报表 - 分类筛选
// ==========================================
// All → 全量；无 Category 列 → 全量（无条件）；否则精确相等
// 空分类的行只出现在 All 中
// ==========================================

use crate::domain::{Column, ItemCollection, ItemRecord, Schema};
use crate::engine::category::CategorySelector;

/// 当前渲染轮次的工作子集（借用集合，保持原行序）
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    schema: &'a Schema,
    records: Vec<&'a ItemRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn records(&self) -> &[&'a ItemRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn filter<'a>(collection: &'a ItemCollection, selector: &CategorySelector) -> FilteredView<'a> {
    let schema = collection.schema();
    let all = || collection.records().iter().collect::<Vec<_>>();

    let records = match selector {
        CategorySelector::All => all(),
        CategorySelector::Exact(_) if !schema.has(Column::Category) => all(),
        CategorySelector::Exact(category) => collection
            .records()
            .iter()
            .filter(|record| record.category().as_deref() == Some(category.as_str()))
            .collect(),
    };

    FilteredView { schema, records }
}
