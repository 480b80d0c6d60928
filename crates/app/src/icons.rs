use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdChartColumn, LdClipboardCheck, LdDownload, LdFileText, LdLayoutDashboard,
    LdMessageSquare, LdSettings, LdShield, LdTrendingUp, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::IconRef;

/// Renders the lucide glyph behind an [`IconRef`].
#[component]
pub fn NavIcon(icon: IconRef, #[props(default = 18)] size: u32) -> Element {
    match icon {
        IconRef::Home => rsx! { Icon { icon: LdLayoutDashboard, width: size, height: size } },
        IconRef::Users => rsx! { Icon { icon: LdUsers, width: size, height: size } },
        IconRef::ClipboardCheck => {
            rsx! { Icon { icon: LdClipboardCheck, width: size, height: size } }
        }
        IconRef::FileText => rsx! { Icon { icon: LdFileText, width: size, height: size } },
        IconRef::Settings => rsx! { Icon { icon: LdSettings, width: size, height: size } },
        IconRef::BarChart => rsx! { Icon { icon: LdChartColumn, width: size, height: size } },
        IconRef::MessageSquare => {
            rsx! { Icon { icon: LdMessageSquare, width: size, height: size } }
        }
        IconRef::Shield => rsx! { Icon { icon: LdShield, width: size, height: size } },
        IconRef::TrendingUp => rsx! { Icon { icon: LdTrendingUp, width: size, height: size } },
        IconRef::Download => rsx! { Icon { icon: LdDownload, width: size, height: size } },
    }
}

#[component]
pub fn BellIcon() -> Element {
    rsx! { Icon { icon: LdBell, width: 18, height: 18 } }
}
