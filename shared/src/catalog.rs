//! 项目列表：查询与分类过滤

use crate::error::ApiResult;
use crate::models::Project;
use crate::query::{Collection, Direction, Query};
use crate::request::HttpClient;
use crate::supabase::SupabaseClient;

pub fn project_query() -> Query {
    Query::from(Collection::Projects).order("created_at", Direction::Descending)
}

pub async fn load_projects<C: HttpClient + Clone>(
    client: &SupabaseClient<C>,
) -> ApiResult<Vec<Project>> {
    client.select(&project_query()).await
}

/// 去重后的分类，按首次出现的顺序
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

/// 分类过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn is(&self, category: &str) -> bool {
        matches!(self, CategoryFilter::Only(c) if c == category)
    }

    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        match self {
            CategoryFilter::All => projects.to_vec(),
            CategoryFilter::Only(category) => projects
                .iter()
                .filter(|p| &p.category == category)
                .cloned()
                .collect(),
        }
    }
}
