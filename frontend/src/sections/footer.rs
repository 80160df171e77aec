use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::icons;

pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: fn() -> Html,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { href: "https://discord.com", label: "Discord", icon: icons::discord },
    SocialLink { href: "https://x.com", label: "X", icon: icons::x_logo },
    SocialLink { href: "https://youtube.com", label: "YouTube", icon: icons::youtube },
    SocialLink { href: "https://medium.com", label: "Medium", icon: icons::medium },
];

pub fn copyright(year: i32) -> String {
    format!("©Nova {}. All rights reserved", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p class="footer-copyright">{ copyright(year) }</p>

                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={link.label}
                            class="footer-social__link"
                        >
                            { (link.icon)() }
                        </a>
                    }) }
                </div>

                <a href="#privacy-policy" class="footer-privacy">{"Privacy Policy"}</a>
            </div>
        </footer>
    }
}

pub const FOOTER_CSS: &str = r#"
    .footer {
        width: 100vw;
        background: #5542ff;
        padding: 1rem 0;
        color: #000;
    }
    .footer-inner {
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        padding: 0 1rem;
    }
    .footer-copyright {
        font-size: 0.875rem;
        font-weight: 300;
    }
    .footer-social {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    .footer-social__link {
        color: #000;
        transition: color 0.5s ease-in-out;
    }
    .footer-social__link:hover {
        color: #fff;
    }
    .footer-privacy {
        font-size: 0.875rem;
        font-weight: 300;
        color: #000;
    }
    .footer-privacy:hover {
        text-decoration: underline;
    }
    @media (min-width: 768px) {
        .footer-inner {
            flex-direction: row;
        }
        .footer-copyright {
            text-align: left;
        }
        .footer-social {
            justify-content: flex-start;
        }
        .footer-privacy {
            text-align: right;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "©Nova 2026. All rights reserved");
    }

    #[test]
    fn social_links_are_absolute_and_labelled() {
        for link in &SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{}", link.href);
            assert!(!link.label.is_empty());
        }
    }
}
