//! 主题模块
//!
//! 初始主题取自 LocalStorage，没有记录时跟随系统配色偏好。
//! 主题变化时同步到根元素的 `dark` class 与 `data-theme` 属性；
//! 只有用户切换过的主题才写回存储。

use crate::web::LocalStorage;
use fastcode_shared::{STORAGE_THEME_KEY, Theme, ThemePreference};
use leptos::prelude::*;

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|m| m.matches())
}

fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("[Theme] Could not update root class: {:?}", e);
    }
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("[Theme] Could not update data-theme: {:?}", e);
    }
}

/// 主题上下文
#[derive(Clone, Copy)]
pub struct ThemeContext {
    preference: ReadSignal<ThemePreference>,
    set_preference: WriteSignal<ThemePreference>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let stored = LocalStorage::get(STORAGE_THEME_KEY);
        let (preference, set_preference) =
            signal(ThemePreference::load(stored.as_deref(), prefers_dark()));

        Effect::new(move |_| {
            let preference = preference.get();
            apply_theme(preference.theme);
            if let Some(value) = preference.to_store() {
                LocalStorage::set(STORAGE_THEME_KEY, value);
            }
        });

        Self {
            preference,
            set_preference,
        }
    }

    /// 当前主题（响应式读取）
    pub fn theme(&self) -> Theme {
        self.preference.with(|p| p.theme)
    }

    pub fn toggle(&self) {
        self.set_preference.update(|p| *p = p.toggled());
    }
}

/// 从 Context 获取主题上下文
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
