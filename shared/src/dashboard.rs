//! 控制面板数据
//!
//! 三个查询并发发出，全部结束后一起渲染。每个区块独立失败：
//! 失败的区块记录日志并保持为空，其余区块照常填充。

use crate::error::ApiResult;
use crate::models::{Announcement, Project, QuickTool};
use crate::query::{Collection, Direction, Query};
use crate::request::HttpClient;
use crate::supabase::SupabaseClient;
use chrono::{DateTime, Utc};

pub const ANNOUNCEMENT_LIMIT: usize = 5;
pub const RECENT_PROJECT_LIMIT: usize = 6;

pub fn announcement_query() -> Query {
    Query::from(Collection::Announcements)
        .order("created_at", Direction::Descending)
        .limit(ANNOUNCEMENT_LIMIT)
}

pub fn quick_tool_query() -> Query {
    Query::from(Collection::QuickTools).order("order", Direction::Ascending)
}

pub fn recent_project_query() -> Query {
    Query::from(Collection::Projects)
        .order("updated_at", Direction::Descending)
        .limit(RECENT_PROJECT_LIMIT)
}

/// 公告的展示策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnouncementPolicy {
    /// 最近的公告全部展示，不检查 `expires_at`
    #[default]
    ShowAll,
    /// 过滤掉已过期的公告（在条数限制之后过滤，可能少于上限）
    HideExpired,
}

impl AnnouncementPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Self::ShowAll),
            "unexpired" => Some(Self::HideExpired),
            _ => None,
        }
    }

    pub fn apply(&self, announcements: Vec<Announcement>, now: DateTime<Utc>) -> Vec<Announcement> {
        match self {
            Self::ShowAll => announcements,
            Self::HideExpired => announcements
                .into_iter()
                .filter(|a| !a.is_expired(now))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub announcements: Vec<Announcement>,
    pub quick_tools: Vec<QuickTool>,
    pub projects: Vec<Project>,
}

fn section<T>(name: &str, result: ApiResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Error loading {}: {}", name, e);
        Vec::new()
    })
}

pub async fn load_dashboard<C: HttpClient + Clone>(
    client: &SupabaseClient<C>,
    policy: AnnouncementPolicy,
    now: DateTime<Utc>,
) -> DashboardData {
    let announcement_query = announcement_query();
    let tool_query = quick_tool_query();
    let project_query = recent_project_query();

    let (announcements, quick_tools, projects) = futures::join!(
        client.select::<Announcement>(&announcement_query),
        client.select::<QuickTool>(&tool_query),
        client.select::<Project>(&project_query),
    );

    DashboardData {
        announcements: policy.apply(section("announcements", announcements), now),
        quick_tools: section("quick tools", quick_tools),
        projects: section("projects", projects),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_timestamp;
    use crate::request::MockHttpClient;
    use serde_json::json;
    use std::rc::Rc;

    const BASE: &str = "https://db.example.com";

    fn url(query: &Query) -> String {
        format!("{}{}", BASE, query.to_path())
    }

    fn announcements() -> serde_json::Value {
        json!([
            { "id": "a1", "title": "Release", "content": "v2 is out", "priority": "high",
              "created_at": "2024-05-03T00:00:00Z" },
            { "id": "a2", "title": "Old promo", "content": "ended", "priority": "low",
              "expires_at": "2024-05-01T00:00:00Z", "created_at": "2024-04-01T00:00:00Z" }
        ])
    }

    fn tools() -> serde_json::Value {
        json!([
            { "id": "t1", "name": "Repo", "description": "Code", "url": "https://github.com",
              "icon": "Github", "category": "dev", "order": 1 },
            { "id": "t2", "name": "Docs", "description": "Wiki", "url": "https://docs.example.com",
              "icon": "BookOpen", "category": "docs", "order": 2 }
        ])
    }

    fn now() -> DateTime<Utc> {
        parse_timestamp("2024-05-05T00:00:00Z").unwrap()
    }

    #[test]
    fn test_queries() {
        assert_eq!(
            announcement_query().to_path(),
            "/rest/v1/announcements?select=*&order=created_at.desc&limit=5"
        );
        assert_eq!(quick_tool_query().to_path(), "/rest/v1/quick_tools?select=*&order=order.asc");
        assert_eq!(
            recent_project_query().to_path(),
            "/rest/v1/projects?select=*&order=updated_at.desc&limit=6"
        );
    }

    #[tokio::test]
    async fn test_all_sections_populate() {
        let http = Rc::new(MockHttpClient::new());
        http.mock_response(&url(&announcement_query()), 200, announcements());
        http.mock_response(&url(&quick_tool_query()), 200, tools());
        http.mock_response(&url(&recent_project_query()), 200, json!([]));
        let client = SupabaseClient::new(http.clone(), BASE, "anon");

        let data = load_dashboard(&client, AnnouncementPolicy::ShowAll, now()).await;
        assert_eq!(data.announcements.len(), 2);
        assert_eq!(data.quick_tools.len(), 2);
        assert!(data.projects.is_empty());
        assert_eq!(http.requests.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_section_stays_empty() {
        let http = Rc::new(MockHttpClient::new());
        http.mock_network_error(&url(&announcement_query()), "offline");
        http.mock_response(&url(&quick_tool_query()), 200, tools());
        http.mock_response(&url(&recent_project_query()), 403, json!({ "message": "denied" }));
        let client = SupabaseClient::new(http, BASE, "anon");

        let data = load_dashboard(&client, AnnouncementPolicy::ShowAll, now()).await;
        assert!(data.announcements.is_empty());
        assert_eq!(data.quick_tools.len(), 2);
        assert!(data.projects.is_empty());
    }

    #[tokio::test]
    async fn test_hide_expired_policy() {
        let http = Rc::new(MockHttpClient::new());
        http.mock_response(&url(&announcement_query()), 200, announcements());
        let client = SupabaseClient::new(http, BASE, "anon");

        let data = load_dashboard(&client, AnnouncementPolicy::HideExpired, now()).await;
        let ids: Vec<&str> = data.announcements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1"]);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(AnnouncementPolicy::parse("all"), Some(AnnouncementPolicy::ShowAll));
        assert_eq!(
            AnnouncementPolicy::parse(" unexpired "),
            Some(AnnouncementPolicy::HideExpired)
        );
        assert_eq!(AnnouncementPolicy::parse("none"), None);
    }
}
