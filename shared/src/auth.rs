//! 认证模块
//!
//! 会话状态机与登录、恢复流程，与视图层解耦：
//! 视图层只持有 `SessionState`，由本模块决定状态如何迁移。
//!
//! ```text
//! Loading ──restored──▶ Unauthenticated ⇄ Authenticated
//!         └─restored──▶ Authenticated
//! ```

use crate::page::Page;
use crate::request::HttpClient;
use crate::supabase::SupabaseClient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 过期判断提前量（秒）
const EXPIRY_MARGIN_SECS: i64 = 10;

// =========================================================
// 会话数据
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// 认证服务签发的会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub expires_in: i64,
    /// Unix 秒
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: User,
}

fn bearer() -> String {
    "bearer".to_string()
}

impl Session {
    /// 服务未返回 `expires_at` 时按 `expires_in` 补齐
    pub fn stamped(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(now.timestamp() + self.expires_in);
        }
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => at - EXPIRY_MARGIN_SECS <= now.timestamp(),
            None => true,
        }
    }
}

// =========================================================
// 状态机
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// 控制面板的访问判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardGate {
    /// 会话尚在恢复，显示加载中
    Wait,
    /// 确认未登录，跳转登录页
    RedirectToLogin,
    Render,
}

impl DashboardGate {
    /// 将目标页面映射为实际渲染的页面
    pub fn resolve(self, page: Page) -> Page {
        match (self, page) {
            (DashboardGate::RedirectToLogin, Page::Dashboard) => Page::Login,
            _ => page,
        }
    }
}

/// 认证状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    session: Option<Session>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::restoring()
    }
}

impl SessionState {
    /// 初始状态：正在恢复会话
    pub fn restoring() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }

    /// 启动时的会话恢复已完成
    pub fn restored(&mut self, session: Option<Session>) {
        self.session = session;
        self.loading = false;
    }

    /// 应用登录结果
    ///
    /// 成功时记录用户并返回下一个页面；失败时原样返回错误信息，不修改状态。
    pub fn apply_sign_in(&mut self, outcome: Result<Session, String>) -> Result<Page, String> {
        let session = outcome?;
        self.session = Some(session);
        self.loading = false;
        Ok(Page::Dashboard)
    }

    /// 登出，返回被清除的会话（已登出时为 `None`）
    pub fn sign_out(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn phase(&self) -> AuthPhase {
        match (&self.session, self.loading) {
            (_, true) => AuthPhase::Loading,
            (Some(_), false) => AuthPhase::Authenticated,
            (None, false) => AuthPhase::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn dashboard_gate(&self) -> DashboardGate {
        match self.phase() {
            AuthPhase::Loading => DashboardGate::Wait,
            AuthPhase::Unauthenticated => DashboardGate::RedirectToLogin,
            AuthPhase::Authenticated => DashboardGate::Render,
        }
    }
}

// =========================================================
// 流程
// =========================================================

/// 使用邮箱与密码登录
///
/// 错误以可直接展示的文本返回。
pub async fn sign_in<C: HttpClient + Clone>(
    client: &SupabaseClient<C>,
    email: &str,
    password: &str,
    now: DateTime<Utc>,
) -> Result<Session, String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password".to_string());
    }

    match client.sign_in_with_password(email, password).await {
        Ok(session) => {
            log::info!("[Auth] Signed in as {}", session.user.id);
            Ok(session.stamped(now))
        }
        Err(e) => {
            log::warn!("[Auth] Sign-in rejected: {}", e);
            Err(e.to_string())
        }
    }
}

/// 恢复本地保存的会话
///
/// 未过期的会话直接复用；已过期的会话尝试刷新一次，失败则视为未登录。
pub async fn restore_session<C: HttpClient + Clone>(
    client: &SupabaseClient<C>,
    stored: Option<Session>,
    now: DateTime<Utc>,
) -> Option<Session> {
    let session = stored?;
    if !session.is_expired(now) {
        return Some(session);
    }

    match client.refresh_session(&session.refresh_token).await {
        Ok(fresh) => {
            log::info!("[Auth] Stored session refreshed");
            Some(fresh.stamped(now))
        }
        Err(e) => {
            log::warn!("[Auth] Could not refresh stored session: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests;
