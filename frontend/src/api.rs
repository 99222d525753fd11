use crate::web::BrowserHttpClient;
use fastcode_shared::{SiteConfig, SupabaseClient};
use leptos::prelude::*;

/// 浏览器端的托管服务客户端
pub type Client = SupabaseClient<BrowserHttpClient>;

pub fn connect(config: &SiteConfig) -> Client {
    SupabaseClient::new(
        BrowserHttpClient,
        &config.supabase_url,
        &config.supabase_anon_key,
    )
}

/// 从 Context 获取匿名客户端
pub fn use_client() -> Client {
    use_context::<Client>().expect("Client should be provided")
}

pub fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().expect("SiteConfig should be provided")
}
