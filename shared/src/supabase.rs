//! 托管数据/认证服务客户端
//!
//! 只用到服务的一小部分：
//! - 数据接口 `/rest/v1` 的只读查询
//! - 认证接口 `/auth/v1` 的密码登录、刷新令牌、登出
//!
//! 传输层通过 `HttpClient` 注入，浏览器与测试各自提供实现。

use crate::auth::Session;
use crate::error::{ApiError, ApiResult};
use crate::query::Query;
use crate::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::json;

pub const HEADER_API_KEY: &str = "apikey";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseClient<C> {
    http: C,
    base_url: String,
    anon_key: String,
    /// 登录用户的访问令牌，为空时以匿名身份访问
    access_token: Option<String>,
}

impl<C: HttpClient + Clone> SupabaseClient<C> {
    pub fn new(http: C, base_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: None,
        }
    }

    /// 以用户身份发送请求的副本
    pub fn authorized(&self, session: &Session) -> Self {
        Self {
            access_token: Some(session.access_token.clone()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, path: &str, method: HttpMethod, bearer: &str) -> HttpRequest {
        HttpRequest::new(&self.url(path), method)
            .with_header(HEADER_API_KEY, &self.anon_key)
            .with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", bearer))
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    async fn execute(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let res = self.http.send(req).await?;
        if !res.is_success() {
            return Err(ApiError::rejected(res.status, &res.body));
        }
        Ok(res)
    }

    // =========================================================
    // 数据接口
    // =========================================================

    /// 执行只读查询
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> ApiResult<Vec<T>> {
        let req = self
            .request(&query.to_path(), HttpMethod::Get, self.bearer())
            .with_header("Accept", "application/json");
        self.execute(req).await?.json()
    }

    // =========================================================
    // 认证接口
    // =========================================================

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> ApiResult<Session> {
        let req = self
            .request("/auth/v1/token?grant_type=password", HttpMethod::Post, &self.anon_key)
            .with_header("Content-Type", "application/json")
            .with_body(json!({ "email": email, "password": password }));
        self.execute(req).await?.json()
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> ApiResult<Session> {
        let req = self
            .request(
                "/auth/v1/token?grant_type=refresh_token",
                HttpMethod::Post,
                &self.anon_key,
            )
            .with_header("Content-Type", "application/json")
            .with_body(json!({ "refresh_token": refresh_token }));
        self.execute(req).await?.json()
    }

    /// 在服务端吊销会话
    pub async fn sign_out(&self, session: &Session) -> ApiResult<()> {
        let req = self.request("/auth/v1/logout", HttpMethod::Post, &session.access_token);
        self.execute(req).await.map(|_| ())
    }
}
