//! 只读查询构建
//!
//! 生成数据服务的 REST 路径，参数顺序固定：`select`、过滤、`order`、`limit`。

use std::fmt::Display;

/// 远端集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    TeamMembers,
    Announcements,
    QuickTools,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::TeamMembers => "team_members",
            Collection::Announcements => "announcements",
            Collection::QuickTools => "quick_tools",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    collection: Collection,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

impl Query {
    pub fn from(collection: Collection) -> Self {
        Self {
            collection,
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// 等值过滤 (`column=eq.value`)
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// 渲染为 `/rest/v1/<table>?...`
    pub fn to_path(&self) -> String {
        let mut params = vec![format!("select={}", self.columns)];
        for (column, value) in &self.filters {
            params.push(format!("{}=eq.{}", column, encode_value(value)));
        }
        if let Some((column, direction)) = &self.order {
            params.push(format!("order={}.{}", column, direction.as_str()));
        }
        if let Some(n) = self.limit {
            params.push(format!("limit={}", n));
        }
        format!("/rest/v1/{}?{}", self.collection.name(), params.join("&"))
    }
}

/// 过滤值里的保留字符需要转义，其余原样保留
fn encode_value(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_everything() {
        assert_eq!(
            Query::from(Collection::Projects).to_path(),
            "/rest/v1/projects?select=*"
        );
    }

    #[test]
    fn test_parameters_render_in_fixed_order() {
        let query = Query::from(Collection::TeamMembers)
            .limit(10)
            .order("joined_at", Direction::Ascending)
            .eq("is_visible", true);
        assert_eq!(
            query.to_path(),
            "/rest/v1/team_members?select=*&is_visible=eq.true&order=joined_at.asc&limit=10"
        );
    }

    #[test]
    fn test_filter_values_are_escaped() {
        let query = Query::from(Collection::QuickTools).eq("category", "dev & ops");
        assert_eq!(
            query.to_path(),
            "/rest/v1/quick_tools?select=*&category=eq.dev%20%26%20ops"
        );
    }
}
