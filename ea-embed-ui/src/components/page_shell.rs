//! Page layout: navigation bar, content slot, footer.

use dioxus::prelude::*;
use ea_utils::dates;

/// Product name shown in the navigation bar and footer.
pub const APP_TITLE: &str = "E-commerce Analytics";

#[derive(Props, Clone, PartialEq)]
pub struct NavBarProps {
    #[props(default = APP_TITLE.to_string())]
    pub title: String,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        nav {
            style: "background: #ffffff; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 0 32px; height: 64px; display: flex; align-items: center;",
                h1 {
                    style: "margin: 0; font-size: 20px; font-weight: 700; color: #111827;",
                    "{props.title}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FooterProps {
    /// Copyright year; the current calendar year unless given
    #[props(default = dates::current_year())]
    pub year: i32,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let line = dates::copyright_line(props.year, APP_TITLE);

    rsx! {
        footer {
            style: "background: #ffffff; margin-top: auto;",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 16px 32px;",
                p {
                    style: "margin: 0; text-align: center; font-size: 14px; color: #6b7280;",
                    "{line}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageShellProps {
    pub children: Element,
}

/// Full-height page with the nav bar on top, `children` in the main region,
/// and the footer at the bottom.
#[component]
pub fn PageShell(props: PageShellProps) -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",
            NavBar {}
            main {
                style: "width: 100%; max-width: 1280px; margin: 0 auto; padding: 24px 32px; box-sizing: border-box;",
                {props.children}
            }
            Footer {}
        }
    }
}
