//! 线框图标
//!
//! 每个图标是一个无参组件，尺寸与颜色通过 `attr:class` 传入。

use fastcode_shared::ToolIcon;
use fastcode_shared::content::{FeatureIcon, SocialNetwork};
use leptos::prelude::*;

macro_rules! icon {
    ($name:ident => $($body:tt)*) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $($body)*
                </svg>
            }
        }
    };
}

// 品牌与导航
icon!(Code2 => <path d="m18 16 4-4-4-4" /><path d="m6 8-4 4 4 4" /><path d="m14.5 4-5 16" />);
icon!(Menu => <line x1="4" x2="20" y1="12" y2="12" /><line x1="4" x2="20" y1="6" y2="6" /><line x1="4" x2="20" y1="18" y2="18" />);
icon!(X => <path d="M18 6 6 18" /><path d="m6 6 12 12" />);
icon!(Sun =>
    <circle cx="12" cy="12" r="4" />
    <path d="M12 2v2" /><path d="M12 20v2" />
    <path d="m4.93 4.93 1.41 1.41" /><path d="m17.66 17.66 1.41 1.41" />
    <path d="M2 12h2" /><path d="M20 12h2" />
    <path d="m6.34 17.66-1.41 1.41" /><path d="m19.07 4.93-1.41 1.41" />
);
icon!(Moon => <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />);
icon!(ArrowRight => <path d="M5 12h14" /><path d="m12 5 7 7-7 7" />);
icon!(ExternalLink => <path d="M15 3h6v6" /><path d="M10 14 21 3" /><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />);

// 首页特性
icon!(Zap => <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />);
icon!(Shield => <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />);
icon!(Rocket =>
    <path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
    <path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
    <path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" />
    <path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
);
icon!(TrendingUp => <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" /><polyline points="16 7 22 7 22 13" />);

// 社交
icon!(Github =>
    <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
    <path d="M9 18c-4.51 2-5-2-7-2" />
);
icon!(Twitter => <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />);
icon!(Linkedin =>
    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
    <rect width="4" height="12" x="2" y="9" />
    <circle cx="4" cy="4" r="2" />
);

// 招聘
icon!(MapPin => <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" /><circle cx="12" cy="10" r="3" />);
icon!(Clock => <circle cx="12" cy="12" r="10" /><polyline points="12 6 12 12 16 14" />);
icon!(Briefcase => <path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" /><rect width="20" height="14" x="2" y="6" rx="2" />);

// 团队与项目
icon!(User => <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" /><circle cx="12" cy="7" r="4" />);
icon!(Users =>
    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
    <circle cx="9" cy="7" r="4" />
    <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
);
icon!(Filter => <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3" />);

// 控制面板与提示
icon!(LayoutDashboard =>
    <rect width="7" height="9" x="3" y="3" rx="1" />
    <rect width="7" height="5" x="14" y="3" rx="1" />
    <rect width="7" height="9" x="14" y="12" rx="1" />
    <rect width="7" height="5" x="3" y="16" rx="1" />
);
icon!(Megaphone => <path d="m3 11 18-5v12L3 14v-3z" /><path d="M11.6 16.8a3 3 0 1 1-5.8-1.6" />);
icon!(Activity => <path d="M22 12h-4l-3 9L9 3l-3 9H2" />);
icon!(AlertTriangle =>
    <path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" />
    <path d="M12 9v4" /><path d="M12 17h.01" />
);
icon!(AlertCircle => <circle cx="12" cy="12" r="10" /><line x1="12" x2="12" y1="8" y2="12" /><line x1="12" x2="12.01" y1="16" y2="16" />);
icon!(CheckCircle2 => <circle cx="12" cy="12" r="10" /><path d="m9 12 2 2 4-4" />);

// 快捷工具
icon!(Link =>
    <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" />
    <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" />
);
icon!(Database => <ellipse cx="12" cy="5" rx="9" ry="3" /><path d="M3 5V19A9 3 0 0 0 21 19V5" /><path d="M3 12A9 3 0 0 0 21 12" />);
icon!(Terminal => <polyline points="4 17 10 11 4 5" /><line x1="12" x2="20" y1="19" y2="19" />);
icon!(FileText =>
    <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
    <path d="M14 2v4a2 2 0 0 0 2 2h4" />
    <path d="M10 9H8" /><path d="M16 13H8" /><path d="M16 17H8" />
);
icon!(Mail => <rect width="20" height="16" x="2" y="4" rx="2" /><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />);
icon!(Calendar =>
    <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
    <line x1="16" x2="16" y1="2" y2="6" /><line x1="8" x2="8" y1="2" y2="6" />
    <line x1="3" x2="21" y1="10" y2="10" />
);
icon!(Cloud => <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />);
icon!(Server =>
    <rect width="20" height="8" x="2" y="2" rx="2" ry="2" />
    <rect width="20" height="8" x="2" y="14" rx="2" ry="2" />
    <line x1="6" x2="6.01" y1="6" y2="6" /><line x1="6" x2="6.01" y1="18" y2="18" />
);
icon!(BarChart3 => <path d="M3 3v18h18" /><path d="M18 17V9" /><path d="M13 17V5" /><path d="M8 17v-3" />);
icon!(Settings =>
    <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
    <circle cx="12" cy="12" r="3" />
);

/// 快捷工具图标
pub fn tool_icon(icon: ToolIcon, class: &'static str) -> AnyView {
    match icon {
        ToolIcon::Link => view! { <Link attr:class=class /> }.into_any(),
        ToolIcon::Github => view! { <Github attr:class=class /> }.into_any(),
        ToolIcon::Database => view! { <Database attr:class=class /> }.into_any(),
        ToolIcon::Code => view! { <Code2 attr:class=class /> }.into_any(),
        ToolIcon::Terminal => view! { <Terminal attr:class=class /> }.into_any(),
        ToolIcon::FileText => view! { <FileText attr:class=class /> }.into_any(),
        ToolIcon::Mail => view! { <Mail attr:class=class /> }.into_any(),
        ToolIcon::Calendar => view! { <Calendar attr:class=class /> }.into_any(),
        ToolIcon::Cloud => view! { <Cloud attr:class=class /> }.into_any(),
        ToolIcon::Server => view! { <Server attr:class=class /> }.into_any(),
        ToolIcon::BarChart => view! { <BarChart3 attr:class=class /> }.into_any(),
        ToolIcon::Settings => view! { <Settings attr:class=class /> }.into_any(),
    }
}

pub fn feature_icon(icon: FeatureIcon, class: &'static str) -> AnyView {
    match icon {
        FeatureIcon::Zap => view! { <Zap attr:class=class /> }.into_any(),
        FeatureIcon::Shield => view! { <Shield attr:class=class /> }.into_any(),
        FeatureIcon::Rocket => view! { <Rocket attr:class=class /> }.into_any(),
        FeatureIcon::TrendingUp => view! { <TrendingUp attr:class=class /> }.into_any(),
    }
}

pub fn social_icon(network: SocialNetwork, class: &'static str) -> AnyView {
    match network {
        SocialNetwork::Github => view! { <Github attr:class=class /> }.into_any(),
        SocialNetwork::Twitter => view! { <Twitter attr:class=class /> }.into_any(),
        SocialNetwork::Linkedin => view! { <Linkedin attr:class=class /> }.into_any(),
    }
}
