//! 站点配置
//!
//! 浏览器端没有进程环境变量，配置在构建期注入；这里只负责校验与默认值。

use crate::dashboard::AnnouncementPolicy;
use thiserror::Error;
use url::Url;

pub const VAR_SUPABASE_URL: &str = "SUPABASE_URL";
pub const VAR_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const VAR_ANNOUNCEMENTS: &str = "FASTCODE_ANNOUNCEMENTS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration value {0}")]
    Missing(&'static str),
    #[error("{0} is not an http(s) URL")]
    InvalidUrl(String),
    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub announcements: AnnouncementPolicy,
}

impl SiteConfig {
    /// 从变量来源构建配置
    ///
    /// 服务地址与公钥必填；公告策略缺省为全部展示。
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let url = parse_service_url(&required(VAR_SUPABASE_URL)?)?;
        let supabase_url = url.as_str().trim_end_matches('/').to_string();
        let supabase_anon_key = required(VAR_SUPABASE_ANON_KEY)?;

        let announcements = match lookup(VAR_ANNOUNCEMENTS) {
            Some(value) if !value.trim().is_empty() => AnnouncementPolicy::parse(&value)
                .ok_or(ConfigError::InvalidValue {
                    var: VAR_ANNOUNCEMENTS,
                    value,
                })?,
            _ => AnnouncementPolicy::default(),
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            announcements,
        })
    }
}

/// 服务地址必须是带主机名的 http(s) URL
fn parse_service_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl(raw.to_string());

    // `http:///x` 会被规范化为 `http://x/`，主机名必须紧跟在 `://` 之后
    let authority = raw.split_once("://").map(|(_, rest)| rest).ok_or_else(invalid)?;
    if authority.is_empty() || authority.starts_with('/') {
        return Err(invalid());
    }

    let url = Url::parse(raw).map_err(|e| {
        log::debug!("[Config] {} rejected: {}", raw, e);
        invalid()
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_complete_config() {
        let config = SiteConfig::from_vars(vars(&[
            (VAR_SUPABASE_URL, "https://abc.supabase.co/"),
            (VAR_SUPABASE_ANON_KEY, "anon-key"),
            (VAR_ANNOUNCEMENTS, "unexpired"),
        ]))
        .unwrap();
        assert_eq!(config.supabase_url, "https://abc.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(config.announcements, AnnouncementPolicy::HideExpired);
    }

    #[test]
    fn test_announcement_policy_defaults_to_show_all() {
        let config = SiteConfig::from_vars(vars(&[
            (VAR_SUPABASE_URL, "http://localhost:54321"),
            (VAR_SUPABASE_ANON_KEY, "anon-key"),
        ]))
        .unwrap();
        assert_eq!(config.announcements, AnnouncementPolicy::ShowAll);
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(
            SiteConfig::from_vars(vars(&[])),
            Err(ConfigError::Missing(VAR_SUPABASE_URL))
        );
        assert_eq!(
            SiteConfig::from_vars(vars(&[
                (VAR_SUPABASE_URL, "https://abc.supabase.co"),
                (VAR_SUPABASE_ANON_KEY, "   "),
            ])),
            Err(ConfigError::Missing(VAR_SUPABASE_ANON_KEY))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            SiteConfig::from_vars(vars(&[
                (VAR_SUPABASE_URL, "abc.supabase.co"),
                (VAR_SUPABASE_ANON_KEY, "k"),
            ])),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            SiteConfig::from_vars(vars(&[
                (VAR_SUPABASE_URL, "ftp://abc.supabase.co"),
                (VAR_SUPABASE_ANON_KEY, "k"),
            ])),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            SiteConfig::from_vars(vars(&[
                (VAR_SUPABASE_URL, "https://abc.supabase.co"),
                (VAR_SUPABASE_ANON_KEY, "k"),
                (VAR_ANNOUNCEMENTS, "some"),
            ])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_url_without_host_is_rejected() {
        for url in ["https://", "http://", "http:///x", "https:///"] {
            assert_eq!(
                SiteConfig::from_vars(vars(&[
                    (VAR_SUPABASE_URL, url),
                    (VAR_SUPABASE_ANON_KEY, "k"),
                ])),
                Err(ConfigError::InvalidUrl(url.to_string())),
                "{url}"
            );
        }
    }

    #[test]
    fn test_url_keeps_port_and_path() {
        let config = SiteConfig::from_vars(vars(&[
            (VAR_SUPABASE_URL, "http://localhost:54321/base/"),
            (VAR_SUPABASE_ANON_KEY, "k"),
        ]))
        .unwrap();
        assert_eq!(config.supabase_url, "http://localhost:54321/base");
    }
}
