//! 页面定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM。
//! 定义了站点所有页面及其外壳（导航栏、页脚）的显示规则。

use std::fmt::Display;

/// 站点页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// 首页 (默认页面)
    #[default]
    Home,
    Projects,
    Team,
    Join,
    Login,
    /// 控制面板 (需要登录)
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Projects,
        Page::Team,
        Page::Join,
        Page::Login,
        Page::Dashboard,
    ];

    /// 将页面标识解析为枚举，未知标识回退到首页
    pub fn from_id(id: &str) -> Self {
        match id {
            "projects" => Self::Projects,
            "team" => Self::Team,
            "join" => Self::Join,
            "login" => Self::Login,
            "dashboard" => Self::Dashboard,
            _ => Self::Home,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Team => "team",
            Self::Join => "join",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }

    /// 导航栏上的文字
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Team => "Team",
            Self::Join => "Join Us",
            Self::Login => "Sign In",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Self::Login)
    }

    pub fn shows_footer(&self) -> bool {
        !matches!(self, Self::Login | Self::Dashboard)
    }

    /// 导航栏条目，登录后追加控制面板入口
    pub fn nav_items(signed_in: bool) -> Vec<Page> {
        let mut items = vec![Self::Home, Self::Projects, Self::Team, Self::Join];
        if signed_in {
            items.push(Self::Dashboard);
        }
        items
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn test_unknown_ids_fall_back_to_home() {
        assert_eq!(Page::from_id("admin"), Page::Home);
        assert_eq!(Page::from_id(""), Page::Home);
        assert_eq!(Page::from_id("Dashboard"), Page::Home);
    }

    #[test]
    fn test_shell_visibility() {
        assert!(!Page::Login.shows_navbar());
        assert!(!Page::Login.shows_footer());
        assert!(Page::Dashboard.shows_navbar());
        assert!(!Page::Dashboard.shows_footer());
        for page in [Page::Home, Page::Projects, Page::Team, Page::Join] {
            assert!(page.shows_navbar());
            assert!(page.shows_footer());
        }
    }

    #[test]
    fn test_nav_items_depend_on_session() {
        assert!(!Page::nav_items(false).contains(&Page::Dashboard));
        assert_eq!(Page::nav_items(true).last(), Some(&Page::Dashboard));
        assert!(!Page::nav_items(true).contains(&Page::Login));
    }
}
