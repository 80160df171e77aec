use yew::prelude::*;

use crate::components::animated_title::animated_title_css;
use crate::components::button::BUTTON_CSS;
use crate::components::navbar::{Navbar, NAVBAR_CSS};
use crate::sections::{
    about::{About, ABOUT_CSS},
    contact::{Contact, CONTACT_CSS},
    features::{Features, FEATURES_CSS},
    footer::{Footer, FOOTER_CSS},
    hero::{Hero, HERO_CSS},
    story::{Story, STORY_CSS},
};

const BASE_CSS: &str = r#"
    html, body {
        margin: 0;
        width: 100vw;
        overflow-x: hidden;
        background: #dfdff0;
        font-family: 'general', sans-serif;
    }
    *, *::before, *::after {
        box-sizing: border-box;
    }
    .landing {
        position: relative;
        min-height: 100vh;
        width: 100vw;
        overflow: hidden;
    }
    .special-font b {
        font-family: 'zentry', sans-serif;
        font-feature-settings: "ss01" on;
    }
"#;

pub fn page_css() -> String {
    let title_css = animated_title_css();
    [
        BASE_CSS,
        BUTTON_CSS,
        NAVBAR_CSS,
        title_css.as_str(),
        HERO_CSS,
        ABOUT_CSS,
        FEATURES_CSS,
        STORY_CSS,
        CONTACT_CSS,
        FOOTER_CSS,
    ]
    .concat()
}

#[function_component(Home)]
pub fn home() -> Html {
    let css = use_memo(|_| page_css(), ());

    html! {
        <main class="landing">
            <style>{ (*css).clone() }</style>
            <Navbar />
            <Hero />
            <About />
            <Features />
            <Story />
            <Contact />
            <Footer />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use crate::components::navbar::nav_href;
    use crate::config::NAV_ITEMS;
    use crate::sections::{about, contact, features, hero, story};

    /// Anchors the navigation links can jump to, in page order.
    const SECTION_IDS: [&str; 5] = [
        hero::SECTION_ID,
        about::SECTION_ID,
        features::SECTION_ID,
        story::SECTION_ID,
        contact::SECTION_ID,
    ];

    #[test]
    fn every_nav_link_has_a_section() {
        for item in NAV_ITEMS {
            let href = nav_href(item);
            let target = href.trim_start_matches('#');
            assert!(SECTION_IDS.contains(&target), "no section for {}", href);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids = SECTION_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTION_IDS.len());
    }
}
