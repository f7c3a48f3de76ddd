use dioxus::prelude::*;
use moe_ui::{MobileNav, NavLink};

/// Section links shared by the desktop bar and the mobile menu
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "home"),
        NavLink::new("Services", "services"),
        NavLink::new("Gallery", "gallery"),
        NavLink::new("Reviews", "testimonials"),
        NavLink::new("Contact", "contact"),
    ]
}

#[component]
pub fn SiteHeader() -> Element {
    let links = nav_links();

    rsx! {
        header { class: "sticky top-0 z-30 bg-white/90 backdrop-blur border-b border-pink-100",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                a {
                    href: "#home",
                    class: "text-2xl font-bold bg-gradient-to-r from-pink-500 to-purple-600 bg-clip-text text-transparent",
                    "Moe Balloons"
                }
                nav {
                    class: "hidden md:flex items-center gap-8",
                    "aria-label": "Main navigation",
                    for link in links.iter() {
                        a {
                            key: "{link.section_id}",
                            href: link.href(),
                            class: "text-gray-700 hover:text-pink-500 transition-colors font-medium",
                            "{link.label}"
                        }
                    }
                }
                MobileNav { links }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_unique() {
        let links = nav_links();
        let mut ids: Vec<&str> = links.iter().map(|l| l.section_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), links.len());
        assert!(ids.contains(&"gallery"));
    }
}
