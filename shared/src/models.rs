use crate::icon::ToolIcon;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================
//
// 远端集合的行原样映射，不做派生或回写。
// 非主键列允许为 null（按空值处理），单行缺值不影响整个列表。

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(with = "crate::date::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::date::flexible")]
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    /// 卡片封面上的两个字母
    pub fn initials(&self) -> String {
        self.title.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    #[serde(with = "crate::date::flexible")]
    pub joined_at: DateTime<Utc>,
    #[serde(default, with = "crate::date::flexible_option")]
    pub created_at: Option<DateTime<Utc>>,
}

fn visible_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default, with = "crate::date::flexible_option")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::date::flexible")]
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    /// 没有过期时间的公告永不过期
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTool {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
    #[serde(default, with = "crate::date::flexible_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuickTool {
    pub fn icon(&self) -> ToolIcon {
        ToolIcon::from_name(&self.icon)
    }
}

/// 将标签列表拆成“展示部分”和“溢出数量”，用于 `+N` 标记
pub fn split_tags(tags: &[String], limit: usize) -> (&[String], usize) {
    let shown = tags.len().min(limit);
    (&tags[..shown], tags.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_from_row() {
        let row = json!({
            "id": "p1",
            "title": "pos cloud",
            "description": "Cloud POS",
            "category": "POS",
            "status": "active",
            "tech_stack": ["Rust", "Postgres"],
            "github_url": null,
            "demo_url": "https://demo.example.com",
            "is_public": true,
            "created_at": "2024-01-02T03:04:05+00:00",
            "updated_at": "2024-02-02T03:04:05+00:00"
        });
        let project: Project = serde_json::from_value(row).unwrap();
        assert!(project.is_active());
        assert_eq!(project.initials(), "PO");
        assert_eq!(project.github_url, None);
        assert_eq!(project.demo_url.as_deref(), Some("https://demo.example.com"));
        assert_eq!(project.tech_stack, vec!["Rust", "Postgres"]);
    }

    #[test]
    fn test_initials_handles_short_and_multibyte_titles() {
        let mut project: Project = serde_json::from_value(json!({
            "id": "p", "title": "x", "description": "", "category": "c", "status": "draft",
            "created_at": "2024-01-01", "updated_at": "2024-01-01"
        }))
        .unwrap();
        assert!(!project.is_active());
        assert_eq!(project.initials(), "X");
        project.title = "ñandú".to_string();
        assert_eq!(project.initials(), "ÑA");
    }

    #[test]
    fn test_unknown_priority_is_tolerated() {
        let a: Announcement = serde_json::from_value(json!({
            "id": "a1",
            "title": "Maintenance",
            "content": "Tonight",
            "priority": "urgent",
            "created_at": "2024-05-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(a.priority, Priority::Unknown);
        assert_eq!(a.expires_at, None);
    }

    #[test]
    fn test_announcement_expiry() {
        let a: Announcement = serde_json::from_value(json!({
            "id": "a1", "title": "t", "content": "c", "priority": "high",
            "expires_at": "2024-05-10T00:00:00Z",
            "created_at": "2024-05-01T00:00:00Z"
        }))
        .unwrap();
        let before = crate::date::parse_timestamp("2024-05-09").unwrap();
        let after = crate::date::parse_timestamp("2024-05-11").unwrap();
        assert!(!a.is_expired(before));
        assert!(a.is_expired(after));
    }

    #[test]
    fn test_split_tags() {
        let tags: Vec<String> = ["a", "b", "c", "d", "e", "f"].iter().map(|s| s.to_string()).collect();
        let (shown, rest) = split_tags(&tags, 4);
        assert_eq!(shown.len(), 4);
        assert_eq!(rest, 2);

        let (shown, rest) = split_tags(&tags[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_quick_tool_icon_resolution() {
        let tool: QuickTool = serde_json::from_value(json!({
            "id": "t1", "name": "Repo", "description": "Source", "url": "https://github.com",
            "icon": "Github", "category": "dev", "order": 1
        }))
        .unwrap();
        assert_eq!(tool.icon(), ToolIcon::Github);
    }

    #[test]
    fn test_null_columns_decode_as_empty() {
        let project: Project = serde_json::from_value(json!({
            "id": "p2", "title": "Kiosk", "description": null, "category": "POS",
            "status": null, "tech_stack": null, "is_public": null,
            "created_at": "2024-01-01", "updated_at": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(project.description, "");
        assert_eq!(project.status, "");
        assert!(project.tech_stack.is_empty());
        assert!(!project.is_public);

        let member: TeamMember = serde_json::from_value(json!({
            "id": "m1", "full_name": "Ada", "role": null, "expertise": null,
            "joined_at": "2023-01-01"
        }))
        .unwrap();
        assert_eq!(member.role, "");
        assert!(member.expertise.is_empty());

        let a: Announcement = serde_json::from_value(json!({
            "id": "a1", "title": "t", "content": null, "priority": null,
            "created_at": "2024-05-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(a.content, "");
        assert_eq!(a.priority, Priority::Unknown);

        let tool: QuickTool = serde_json::from_value(json!({
            "id": "t1", "name": "Docs", "description": null, "url": "https://docs.example.com",
            "icon": null, "category": null, "order": null
        }))
        .unwrap();
        assert_eq!(tool.order, 0);
        assert_eq!(tool.icon(), ToolIcon::Link);
    }
}
