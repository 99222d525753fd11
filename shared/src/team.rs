//! 团队列表：查询、补充成员与排序

use crate::error::ApiResult;
use crate::models::TeamMember;
use crate::query::{Collection, Direction, Query};
use crate::request::HttpClient;
use crate::supabase::SupabaseClient;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub fn team_query() -> Query {
    Query::from(Collection::TeamMembers)
        .eq("is_visible", true)
        .order("joined_at", Direction::Ascending)
}

const fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid date"),
    }
}

// 常量求值，日期写错会在编译期报错
const JOINED_TANGPANITAN: NaiveDate = date(2023, 1, 1);
const JOINED_PHUWANON: NaiveDate = date(2023, 3, 15);
const JOINED_YANISA: NaiveDate = date(2023, 5, 20);

fn midnight(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

fn extra(id: &str, name: &str, role: &str, joined: NaiveDate, expertise: &[&str]) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        full_name: name.to_string(),
        role: role.to_string(),
        expertise: expertise.iter().map(|s| s.to_string()).collect(),
        bio: None,
        avatar_url: None,
        github_url: None,
        linkedin_url: None,
        is_visible: true,
        joined_at: midnight(joined),
        created_at: None,
    }
}

/// 尚未录入远端的成员，只在客户端补充显示
// TODO: 将这三位成员写入 team_members 表后删除
pub fn extra_members() -> Vec<TeamMember> {
    vec![
        extra(
            "temp-tangpanitan-id",
            "Tangpanitan Spt",
            "CEO/CEO",
            JOINED_TANGPANITAN,
            &["Leadership", "Business Development"],
        ),
        extra(
            "temp-phuwanon-id",
            "Phuwanon Kaewdang",
            "Full Stack Developer",
            JOINED_PHUWANON,
            &["React", "Node.js", "Database Management", "Cloud Deployment"],
        ),
        extra(
            "temp-yanisa-id",
            "Yanisa Yaswanwilai",
            "Programmer",
            JOINED_YANISA,
            &["JavaScript", "TypeScript", "React", "RESTful APIs"],
        ),
    ]
}

/// 合并远端成员与补充成员，按加入时间升序（稳定排序）
pub fn merge_members(fetched: Vec<TeamMember>, extras: Vec<TeamMember>) -> Vec<TeamMember> {
    let mut members = fetched;
    members.extend(extras);
    members.sort_by_key(|m| m.joined_at);
    members
}

/// 拉取可见成员并补充固定成员
///
/// 拉取失败时直接返回错误，不做合并。
pub async fn load_team<C: HttpClient + Clone>(
    client: &SupabaseClient<C>,
) -> ApiResult<Vec<TeamMember>> {
    let fetched = client.select(&team_query()).await?;
    Ok(merge_members(fetched, extra_members()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::request::MockHttpClient;
    use serde_json::json;
    use std::rc::Rc;

    const TEAM_URL: &str =
        "https://db.example.com/rest/v1/team_members?select=*&is_visible=eq.true&order=joined_at.asc";

    fn member(id: &str, joined: NaiveDate) -> TeamMember {
        extra(id, id, "Engineer", joined, &[])
    }

    fn is_sorted(members: &[TeamMember]) -> bool {
        members.windows(2).all(|w| w[0].joined_at <= w[1].joined_at)
    }

    #[test]
    fn test_extra_members_are_fixed() {
        let extras = extra_members();
        assert_eq!(extras.len(), 3);
        assert!(is_sorted(&extras));
        assert!(extras.iter().all(|m| m.is_visible));
    }

    #[test]
    fn test_merge_preserves_count_and_sorts() {
        let fetched = vec![
            member("late", date(2024, 6, 1)),
            member("early", date(2022, 1, 1)),
            member("mid", date(2023, 2, 1)),
        ];
        let merged = merge_members(fetched, extra_members());
        assert_eq!(merged.len(), 6);
        assert!(is_sorted(&merged));
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "early",
                "temp-tangpanitan-id",
                "mid",
                "temp-phuwanon-id",
                "temp-yanisa-id",
                "late"
            ]
        );
    }

    #[test]
    fn test_merge_with_nothing_fetched() {
        let merged = merge_members(Vec::new(), extra_members());
        assert_eq!(merged, extra_members());
    }

    #[test]
    fn test_merge_is_stable_for_equal_dates() {
        let fetched = vec![member("a", date(2023, 1, 1))];
        let merged = merge_members(fetched, extra_members());
        assert_eq!(merged[0].id, "a");
        assert_eq!(merged[1].id, "temp-tangpanitan-id");
    }

    #[tokio::test]
    async fn test_load_team_merges_fetched_rows() {
        let http = Rc::new(MockHttpClient::new());
        http.mock_response(
            TEAM_URL,
            200,
            json!([
                { "id": "m1", "full_name": "Ann", "role": "Designer", "expertise": ["Figma"],
                  "is_visible": true, "joined_at": "2023-02-01" },
                { "id": "m2", "full_name": "Bo", "role": "Engineer",
                  "is_visible": true, "joined_at": "2024-01-10T00:00:00+00:00" }
            ]),
        );
        let client = SupabaseClient::new(http.clone(), "https://db.example.com", "anon");

        let team = load_team(&client).await.unwrap();
        assert_eq!(team.len(), 5);
        assert!(is_sorted(&team));
        assert_eq!(team.last().map(|m| m.id.as_str()), Some("m2"));
    }

    #[tokio::test]
    async fn test_load_team_failure_is_not_merged() {
        let http = Rc::new(MockHttpClient::new());
        http.mock_response(TEAM_URL, 500, json!({ "message": "boom" }));
        let client = SupabaseClient::new(http, "https://db.example.com", "anon");

        let err = load_team(&client).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 500,
                message: "boom".to_string()
            }
        );
    }
}
