//! FastCode 站点核心库
//!
//! 与平台无关的部分都放在这里，可以直接在本机 `cargo test`：
//! - `models` / `date`: 远端集合的数据模型
//! - `request` / `supabase` / `query`: 托管服务的 HTTP 抽象与客户端
//! - `auth`: 会话状态机与登录、恢复流程
//! - `page` / `theme` / `icon`: 视图层使用的领域枚举
//! - `catalog` / `team` / `dashboard`: 各页面的数据加载与列表变换
//! - `content`: 静态营销文案
//! - `config`: 构建期配置

pub mod auth;
pub mod catalog;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod date;
pub mod error;
pub mod icon;
pub mod models;
pub mod page;
pub mod query;
pub mod request;
pub mod supabase;
pub mod team;
pub mod theme;

pub use auth::{AuthPhase, DashboardGate, Session, SessionState, User};
pub use config::{ConfigError, SiteConfig};
pub use error::{ApiError, ApiResult};
pub use icon::ToolIcon;
pub use models::{Announcement, Priority, Project, QuickTool, TeamMember};
pub use page::Page;
pub use query::{Collection, Direction, Query};
pub use supabase::SupabaseClient;
pub use theme::{Theme, ThemePreference};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 品牌名称
pub const BRAND: &str = "FastCode";

/// LocalStorage 中保存会话的键
pub const STORAGE_SESSION_KEY: &str = "fastcode.auth.session";

/// LocalStorage 中保存主题偏好的键
pub const STORAGE_THEME_KEY: &str = "theme";
