//! 认证模块
//!
//! 管理用户会话状态，与路由系统解耦。
//! 路由服务通过注入的访问判定信号获知认证状态。

use crate::api::Client;
use crate::web::LocalStorage;
use chrono::Utc;
use fastcode_shared::auth::{restore_session, sign_in};
use fastcode_shared::{DashboardGate, Page, STORAGE_SESSION_KEY, Session, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始为“恢复中”
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::restoring());
        Self { state, set_state }
    }

    /// 控制面板访问判定信号（用于路由服务注入）
    pub fn dashboard_gate_signal(&self) -> Signal<DashboardGate> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.dashboard_gate()))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

fn persist(session: Option<&Session>) {
    match session {
        Some(session) => {
            LocalStorage::set_json(STORAGE_SESSION_KEY, session);
        }
        None => {
            LocalStorage::delete(STORAGE_SESSION_KEY);
        }
    }
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次的会话，过期则尝试刷新；完成后结束加载状态。
pub fn init_auth(ctx: &AuthContext, client: Client) {
    let stored = LocalStorage::get_json::<Session>(STORAGE_SESSION_KEY);
    let set_state = ctx.set_state;

    spawn_local(async move {
        let had_session = stored.is_some();
        let session = restore_session(&client, stored, Utc::now()).await;
        if had_session || session.is_some() {
            persist(session.as_ref());
        }
        log::debug!("[Auth] Session restored: {}", session.is_some());
        set_state.update(|state| state.restored(session));
    });
}

/// 使用邮箱与密码登录
///
/// 成功时保存会话并返回下一个页面；失败时返回可展示的错误信息。
pub async fn login(
    ctx: &AuthContext,
    client: &Client,
    email: String,
    password: String,
) -> Result<Page, String> {
    let outcome = sign_in(client, &email, &password, Utc::now()).await;
    if let Ok(session) = &outcome {
        persist(Some(session));
    }

    ctx.set_state
        .try_update(|state| state.apply_sign_in(outcome))
        .unwrap_or_else(|| Err("Session is no longer available".to_string()))
}

/// 注销并清除状态
///
/// 本地状态立即清除；服务端吊销在后台进行，失败只记录日志。
pub fn logout(ctx: &AuthContext, client: &Client) {
    let cleared = ctx
        .set_state
        .try_update(|state| state.sign_out())
        .flatten();
    persist(None);

    if let Some(session) = cleared {
        let client = client.clone();
        spawn_local(async move {
            if let Err(e) = client.sign_out(&session).await {
                log::warn!("[Auth] Remote sign-out failed: {}", e);
            }
        });
    }
}
