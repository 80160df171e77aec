use log::{info, warn};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::button::Button;
use crate::components::icons;
use crate::config;

/// Show/hide decision for the navigation bar, driven by the last scroll move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavScroll {
    pub last_y: f64,
    pub visible: bool,
    pub floating: bool,
}

impl Default for NavScroll {
    fn default() -> Self {
        NavScroll {
            last_y: 0.0,
            visible: true,
            floating: false,
        }
    }
}

impl NavScroll {
    pub fn update(&mut self, current_y: f64) {
        if current_y <= 0.0 {
            // Back at the top: always shown, docked.
            self.visible = true;
            self.floating = false;
        } else if current_y > self.last_y {
            self.visible = false;
            self.floating = true;
        } else if current_y < self.last_y {
            self.visible = true;
            self.floating = true;
        }
        self.last_y = current_y;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioToggle {
    pub playing: bool,
    pub indicator_active: bool,
}

impl AudioToggle {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        self.indicator_active = !self.indicator_active;
    }
}

pub fn nav_href(item: &str) -> String {
    format!("#{}", item.to_lowercase())
}

pub fn nav_style(visible: bool) -> String {
    let (offset, opacity) = if visible {
        (0.0, 1)
    } else {
        (-config::NAV_HIDE_OFFSET_PX, 0)
    };
    format!(
        "transform: translateY({}px); opacity: {}; transition: transform {s}s, opacity {s}s;",
        offset,
        opacity,
        s = config::NAV_FADE_SECS
    )
}

pub fn indicator_delay(bar: usize) -> String {
    format!("animation-delay: {:.1}s;", bar as f64 * 0.1)
}

fn sync_audio(audio: &HtmlAudioElement, playing: bool) {
    if !playing {
        if let Err(err) = audio.pause() {
            warn!("Failed to pause background audio: {:?}", err);
        }
        return;
    }

    match audio.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                // Browsers reject play() without a user gesture or when the file is missing.
                if let Err(err) = JsFuture::from(promise).await {
                    gloo_console::warn!("Background audio did not start:", err);
                }
            });
        }
        Err(err) => warn!("Failed to start background audio: {:?}", err),
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let audio_ref = use_node_ref();
    let audio = use_state_eq(AudioToggle::default);
    let nav = use_state_eq(NavScroll::default);
    let (_, scroll_y) = use_window_scroll();

    {
        let audio_ref = audio_ref.clone();
        use_effect_with_deps(
            move |playing| {
                if let Some(element) = audio_ref.cast::<HtmlAudioElement>() {
                    sync_audio(&element, *playing);
                }
                || ()
            },
            audio.playing,
        );
    }

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let mut next = *nav;
                next.update(*scroll_y);
                nav.set(next);
                || ()
            },
            scroll_y,
        );
    }

    let toggle_audio = {
        let audio = audio.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *audio;
            next.toggle();
            info!("Background audio {}", if next.playing { "on" } else { "off" });
            audio.set(next);
        })
    };

    html! {
        <div
            class={classes!("nav-container", nav.floating.then_some("floating-nav"))}
            style={nav_style(nav.visible)}
        >
            <header class="nav-header">
                <nav class="nav-bar">
                    <div class="nav-left">
                        <img src={config::asset("img/logo.png")} alt="logo" class="nav-logo" />
                        <Button
                            id="product-button"
                            title="Products"
                            right_icon={icons::location_arrow()}
                            class={classes!("nav-product-button")}
                        />
                    </div>

                    <div class="nav-right">
                        <div class="nav-links">
                            { for config::NAV_ITEMS.iter().map(|item| html! {
                                <a key={*item} href={nav_href(item)} class="nav-hover-btn">
                                    { *item }
                                </a>
                            }) }
                        </div>

                        <button onclick={toggle_audio} class="audio-toggle" aria-label="Toggle background audio">
                            <audio
                                ref={audio_ref}
                                class="hidden"
                                src={config::asset("audio/loop.mp3")}
                                loop=true
                            />
                            { for (1..=config::INDICATOR_BARS).map(|bar| html! {
                                <div
                                    key={bar}
                                    class={classes!("indicator-line", audio.indicator_active.then_some("active"))}
                                    style={indicator_delay(bar)}
                                />
                            }) }
                        </button>
                    </div>
                </nav>
            </header>
        </div>
    }
}

pub const NAVBAR_CSS: &str = r#"
    .nav-container {
        position: fixed;
        left: 0;
        right: 0;
        top: 1rem;
        z-index: 50;
        height: 4rem;
        border: none;
        transition: all 0.7s;
    }
    .floating-nav {
        border-radius: 0.5rem;
        background: #000;
        border: 1px solid #000;
    }
    .nav-header {
        position: absolute;
        top: 50%;
        width: 100%;
        transform: translateY(-50%);
    }
    .nav-bar {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem;
    }
    .nav-left {
        display: flex;
        align-items: center;
        gap: 1.75rem;
    }
    .nav-logo {
        width: 2.5rem;
    }
    .nav-product-button {
        display: none;
        background: #dfdff0;
    }
    .nav-right {
        display: flex;
        height: 100%;
        align-items: center;
    }
    .nav-links {
        display: none;
    }
    .nav-hover-btn {
        position: relative;
        margin: 0 0.5rem;
        font-family: 'general', sans-serif;
        font-size: 0.75rem;
        text-transform: uppercase;
        color: #dfdff0;
        text-decoration: none;
        cursor: pointer;
    }
    .nav-hover-btn::after {
        content: '';
        position: absolute;
        left: 0;
        bottom: -0.125rem;
        height: 2px;
        width: 100%;
        transform: scaleX(0);
        transform-origin: bottom right;
        background: #dfdff0;
        transition: transform 0.3s cubic-bezier(0.65, 0.05, 0.36, 1);
    }
    .nav-hover-btn:hover::after {
        transform: scaleX(1);
        transform-origin: bottom left;
    }
    .audio-toggle {
        margin-left: 2.5rem;
        display: flex;
        align-items: center;
        gap: 0.125rem;
        background: none;
        border: none;
        cursor: pointer;
    }
    .audio-toggle .hidden {
        display: none;
    }
    .indicator-line {
        height: 0.25rem;
        width: 1px;
        border-radius: 9999px;
        background: #fff;
        transition: all 0.2s ease-in-out;
    }
    .indicator-line.active {
        animation: indicator-line 0.5s ease infinite;
    }
    @keyframes indicator-line {
        0% { height: 4px; transform: translateY(-0px); }
        50% { height: 16px; transform: translateY(-4px); }
        100% { height: 4px; transform: translateY(-0px); }
    }
    @media (min-width: 640px) {
        .nav-container {
            left: 1.5rem;
            right: 1.5rem;
        }
    }
    @media (min-width: 768px) {
        .nav-product-button {
            display: flex;
        }
        .nav-links {
            display: block;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolling_down_hides_and_up_shows() {
        let mut nav = NavScroll::default();
        assert!(nav.visible);

        nav.update(120.0);
        assert!(!nav.visible);
        assert!(nav.floating);

        nav.update(80.0);
        assert!(nav.visible);
        assert!(nav.floating);
        assert_eq!(nav.last_y, 80.0);
    }

    #[test]
    fn top_of_page_always_shows_docked_bar() {
        let mut nav = NavScroll::default();
        nav.update(300.0);
        nav.update(0.0);
        assert!(nav.visible);
        assert!(!nav.floating);

        // Arriving at zero straight after a downward move still shows the bar.
        let mut nav = NavScroll { last_y: 0.0, visible: false, floating: true };
        nav.update(0.0);
        assert!(nav.visible);
        assert!(!nav.floating);
    }

    #[test]
    fn unchanged_offset_keeps_state() {
        let mut nav = NavScroll::default();
        nav.update(200.0);
        let before = nav;
        nav.update(200.0);
        assert_eq!(nav, before);
    }

    #[test]
    fn audio_toggle_flips_playback_and_indicator() {
        let mut audio = AudioToggle::default();
        audio.toggle();
        assert!(audio.playing);
        assert!(audio.indicator_active);
        audio.toggle();
        assert_eq!(audio, AudioToggle::default());
    }

    #[test]
    fn nav_links_point_at_lowercased_sections() {
        let hrefs: Vec<String> = config::NAV_ITEMS.iter().map(|item| nav_href(item)).collect();
        assert_eq!(hrefs, ["#nexus", "#vault", "#prologue", "#about", "#contact"]);
    }

    #[test]
    fn hidden_bar_slides_up_and_fades() {
        assert_eq!(
            nav_style(false),
            "transform: translateY(-100px); opacity: 0; transition: transform 0.2s, opacity 0.2s;"
        );
        assert!(nav_style(true).starts_with("transform: translateY(0px); opacity: 1;"));
    }

    #[test]
    fn indicator_bars_are_staggered() {
        assert_eq!(indicator_delay(3), "animation-delay: 0.3s;");
    }
}
