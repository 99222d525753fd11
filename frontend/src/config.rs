//! 构建期配置
//!
//! 变量在编译时通过 `option_env!` 捕获，构建命令需设置对应环境变量。

use fastcode_shared::config::{VAR_ANNOUNCEMENTS, VAR_SUPABASE_ANON_KEY, VAR_SUPABASE_URL};
use fastcode_shared::{ConfigError, SiteConfig};

fn build_var(name: &str) -> Option<String> {
    let value = match name {
        VAR_SUPABASE_URL => option_env!("SUPABASE_URL"),
        VAR_SUPABASE_ANON_KEY => option_env!("SUPABASE_ANON_KEY"),
        VAR_ANNOUNCEMENTS => option_env!("FASTCODE_ANNOUNCEMENTS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_vars(build_var)
}
