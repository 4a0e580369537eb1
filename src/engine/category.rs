// ==========================================
// 滞销库存报表 - 分类选择器
// ==========================================
// "All" 为全量；其余为精确的分类值
// 可选列表 = "All" + 去重、排序、去空后的分类值
// ==========================================

use crate::domain::{Column, ItemCollection};
use std::collections::BTreeSet;
use std::fmt;

/// 全量选项
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    #[default]
    All,
    Exact(String),
}

impl CategorySelector {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Exact(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES,
            CategorySelector::Exact(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelector::All)
    }
}

impl From<&str> for CategorySelector {
    fn from(value: &str) -> Self {
        CategorySelector::parse(value)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 数据中出现的分类值（去重、排序、排除空值）
///
/// Category 列不存在时返回 None（不提供筛选）
pub fn available_categories(collection: &ItemCollection) -> Option<Vec<String>> {
    if !collection.schema().has(Column::Category) {
        return None;
    }

    let categories: BTreeSet<String> = collection
        .records()
        .iter()
        .filter_map(|record| record.category())
        .collect();

    Some(categories.into_iter().collect())
}

/// 选择器选项: "All" 在前
pub fn selector_options(collection: &ItemCollection) -> Option<Vec<String>> {
    available_categories(collection).map(|categories| {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories)
            .collect()
    })
}
