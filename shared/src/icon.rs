//! 快捷工具图标
//!
//! 远端 `quick_tools.icon` 存的是图标名字符串。这里把它映射到一个封闭的枚举，
//! 未知名称统一回退到 `Link`。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolIcon {
    #[default]
    Link,
    Github,
    Database,
    Code,
    Terminal,
    FileText,
    Mail,
    Calendar,
    Cloud,
    Server,
    BarChart,
    Settings,
}

impl ToolIcon {
    pub const ALL: [ToolIcon; 12] = [
        ToolIcon::Link,
        ToolIcon::Github,
        ToolIcon::Database,
        ToolIcon::Code,
        ToolIcon::Terminal,
        ToolIcon::FileText,
        ToolIcon::Mail,
        ToolIcon::Calendar,
        ToolIcon::Cloud,
        ToolIcon::Server,
        ToolIcon::BarChart,
        ToolIcon::Settings,
    ];

    /// 规范名称（与常见图标库的组件名一致）
    pub fn name(&self) -> &'static str {
        match self {
            ToolIcon::Link => "Link",
            ToolIcon::Github => "Github",
            ToolIcon::Database => "Database",
            ToolIcon::Code => "Code2",
            ToolIcon::Terminal => "Terminal",
            ToolIcon::FileText => "FileText",
            ToolIcon::Mail => "Mail",
            ToolIcon::Calendar => "Calendar",
            ToolIcon::Cloud => "Cloud",
            ToolIcon::Server => "Server",
            ToolIcon::BarChart => "BarChart3",
            ToolIcon::Settings => "Settings",
        }
    }

    /// 解析图标名，忽略大小写以及 `-` `_` 空格
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let icon = match key.as_str() {
            "link" | "link2" => ToolIcon::Link,
            "github" => ToolIcon::Github,
            "database" => ToolIcon::Database,
            "code" | "code2" => ToolIcon::Code,
            "terminal" | "terminalsquare" => ToolIcon::Terminal,
            "filetext" | "file" => ToolIcon::FileText,
            "mail" | "email" => ToolIcon::Mail,
            "calendar" | "calendardays" => ToolIcon::Calendar,
            "cloud" => ToolIcon::Cloud,
            "server" => ToolIcon::Server,
            "barchart" | "barchart2" | "barchart3" | "chart" => ToolIcon::BarChart,
            "settings" | "settings2" | "cog" => ToolIcon::Settings,
            _ => return None,
        };
        Some(icon)
    }

    /// 解析失败时回退到 `Link`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names_round_trip() {
        for icon in ToolIcon::ALL {
            assert_eq!(ToolIcon::parse(icon.name()), Some(icon));
        }
    }

    #[test]
    fn test_parse_is_case_and_separator_insensitive() {
        assert_eq!(ToolIcon::parse("file-text"), Some(ToolIcon::FileText));
        assert_eq!(ToolIcon::parse("BAR_CHART_3"), Some(ToolIcon::BarChart));
        assert_eq!(ToolIcon::parse("code 2"), Some(ToolIcon::Code));
    }

    #[test]
    fn test_unknown_names_default_to_link() {
        assert_eq!(ToolIcon::parse("Sparkles"), None);
        assert_eq!(ToolIcon::from_name("Sparkles"), ToolIcon::Link);
        assert_eq!(ToolIcon::from_name(""), ToolIcon::Link);
    }
}
