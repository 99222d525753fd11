//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现 `HttpClient`，供托管服务客户端注入使用。

use async_trait::async_trait;
use fastcode_shared::error::{ApiError, ApiResult};
use fastcode_shared::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::{Method, RequestBuilder};

/// 浏览器 HTTP 客户端
///
/// 无状态，可随意复制。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserHttpClient;

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("读取响应失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
