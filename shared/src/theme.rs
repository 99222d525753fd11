/// 配色主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// 持久化与 `data-theme` 属性使用的值
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// 主题偏好
///
/// 只有用户切换过（或之前保存过）的主题才写入存储；
/// 跟随系统得到的主题不保存，系统配色变化后下次访问仍会跟随。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub theme: Theme,
    saved: bool,
}

impl ThemePreference {
    /// 优先使用存储的值，否则跟随系统
    pub fn load(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => Self { theme, saved: true },
            None => Self {
                theme: if prefers_dark { Theme::Dark } else { Theme::Light },
                saved: false,
            },
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            theme: self.theme.toggle(),
            saved: true,
        }
    }

    /// 需要写入存储的值
    pub fn to_store(&self) -> Option<&'static str> {
        self.saved.then(|| self.theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggle(), theme);
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_persisted_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_system_theme_is_not_persisted() {
        let pref = ThemePreference::load(None, true);
        assert_eq!(pref.theme, Theme::Dark);
        assert_eq!(pref.to_store(), None);

        let pref = ThemePreference::load(Some("sepia"), false);
        assert_eq!(pref.theme, Theme::Light);
        assert_eq!(pref.to_store(), None);
    }

    #[test]
    fn test_stored_theme_wins_over_system() {
        let pref = ThemePreference::load(Some("light"), true);
        assert_eq!(pref.theme, Theme::Light);
        assert_eq!(pref.to_store(), Some("light"));
    }

    #[test]
    fn test_toggle_is_persisted() {
        let pref = ThemePreference::load(None, false).toggled();
        assert_eq!(pref.theme, Theme::Dark);
        assert_eq!(pref.to_store(), Some("dark"));
        assert_eq!(pref.toggled().to_store(), Some("light"));
    }
}
