use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::animation::easing::power1_in_out;
use crate::animation::hooks::use_scroll_progress;
use crate::animation::tween::{Corners, Polygon};
use crate::components::animated_title::render_markup;
use crate::components::button::Button;
use crate::components::icons;
use crate::config;

pub const SECTION_ID: &str = "nexus";

/// Shape the video frame settles into once the hero scrolls away.
pub const HERO_CLIP: Polygon = Polygon([(14.0, 0.0), (72.0, 0.0), (88.0, 90.0), (0.0, 95.0)]);
pub const HERO_CORNERS: Corners = Corners([0.0, 0.0, 40.0, 10.0]);

/// Videos are numbered from 1; wraps back to 1 after the last one.
pub fn next_index(current: usize, total: usize) -> usize {
    current % total + 1
}

/// Every visible video except the hidden upcoming one has to report in.
pub fn loading_done(loaded: usize, total: usize) -> bool {
    loaded >= total.saturating_sub(1)
}

pub fn frame_style(progress: f64) -> String {
    let t = power1_in_out(progress);
    format!(
        "clip-path: {}; border-radius: {};",
        Polygon::FULL.lerp(&HERO_CLIP, t).to_css(),
        Corners::SQUARE.lerp(&HERO_CORNERS, t).to_css()
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let total = config::HERO_VIDEO_COUNT;
    let current = use_state_eq(|| 1usize);
    let has_clicked = use_state_eq(|| false);
    let loading = use_state_eq(|| true);
    let loaded = use_mut_ref(|| 0usize);

    let frame = use_node_ref();
    let progress = use_scroll_progress(frame.clone(), "center center".into(), "bottom center".into(), 0.0);

    // Missing videos never fire `loadeddata`; don't block the page on them.
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::HERO_LOADING_TIMEOUT_MS, move || {
                    debug!("Hero loading timeout elapsed");
                    loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let on_video_loaded = {
        let loaded = loaded.clone();
        let loading = loading.clone();
        Callback::from(move |_: Event| {
            let mut count = loaded.borrow_mut();
            *count += 1;
            if loading_done(*count, total) {
                info!("Hero videos loaded");
                loading.set(false);
            }
        })
    };

    let on_mini_click = {
        let current = current.clone();
        let has_clicked = has_clicked.clone();
        Callback::from(move |_: MouseEvent| {
            has_clicked.set(true);
            current.set(next_index(*current, total));
        })
    };

    let upcoming = next_index(*current, total);

    html! {
        <div id={SECTION_ID} class="hero">
            {
                if *loading {
                    html! {
                        <div class="hero-loading">
                            <div class="three-body">
                                <div class="three-body__dot" />
                                <div class="three-body__dot" />
                                <div class="three-body__dot" />
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div id="video-frame" ref={frame} class="hero-frame" style={frame_style(progress)}>
                <div class="hero-mini">
                    <div class="hero-mini__preview" onclick={on_mini_click}>
                        <video
                            key={format!("mini-{}", upcoming)}
                            src={config::hero_video(upcoming)}
                            loop=true
                            muted=true
                            class="hero-mini__video"
                            onloadeddata={on_video_loaded.clone()}
                        />
                    </div>
                </div>

                {
                    if *has_clicked {
                        html! {
                            <video
                                key={format!("next-{}", *current)}
                                src={config::hero_video(*current)}
                                loop=true
                                muted=true
                                autoplay=true
                                class="hero-next"
                                onloadeddata={on_video_loaded.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <video
                    src={config::hero_video(*current)}
                    loop=true
                    muted=true
                    autoplay=true
                    class="hero-background"
                    onloadeddata={on_video_loaded}
                />

                <h1 class="special-font hero-heading hero-heading--corner hero-heading--light">
                    { render_markup("G<b>A</b>MING") }
                </h1>

                <div class="hero-copy">
                    <h1 class="special-font hero-heading hero-heading--light">
                        { render_markup("redefi<b>n</b>e") }
                    </h1>
                    <p class="hero-tagline">
                        { render_markup("Enter the Metagame Layer <br /> Unleash the Play Economy") }
                    </p>
                    <Button
                        id="watch-trailer"
                        title="Watch trailer"
                        left_icon={icons::location_arrow()}
                        class={classes!("hero-trailer-button")}
                    />
                </div>
            </div>

            <h1 class="special-font hero-heading hero-heading--corner hero-heading--dark">
                { render_markup("G<b>A</b>MING") }
            </h1>
        </div>
    }
}

pub const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        height: 100dvh;
        width: 100vw;
        overflow-x: hidden;
    }
    .hero-loading {
        position: absolute;
        z-index: 100;
        display: flex;
        height: 100dvh;
        width: 100vw;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        background: #f0f2fa;
    }
    .three-body {
        position: relative;
        display: inline-block;
        height: 35px;
        width: 35px;
        animation: spin78236 2s infinite linear;
    }
    .three-body__dot {
        position: absolute;
        height: 100%;
        width: 30%;
    }
    .three-body__dot::after {
        content: "";
        position: absolute;
        height: 0%;
        width: 100%;
        padding-bottom: 100%;
        border-radius: 50%;
        background: #5d3fd3;
    }
    .three-body__dot:nth-child(1) { bottom: 5%; left: 0; transform: rotate(60deg); transform-origin: 50% 85%; }
    .three-body__dot:nth-child(2) { bottom: 5%; right: 0; transform: rotate(-60deg); transform-origin: 50% 85%; }
    .three-body__dot:nth-child(3) { bottom: -5%; left: 0; transform: translateX(116.666%); }
    @keyframes spin78236 {
        0% { transform: rotate(0deg); }
        100% { transform: rotate(360deg); }
    }
    .hero-frame {
        position: relative;
        z-index: 10;
        height: 100dvh;
        width: 100vw;
        overflow: hidden;
        border-radius: 0.5rem;
        background: #dfdff0;
    }
    .hero-mini {
        position: absolute;
        left: 50%;
        top: 50%;
        z-index: 50;
        width: 16rem;
        height: 16rem;
        transform: translate(-50%, -50%);
        cursor: pointer;
        overflow: hidden;
        border-radius: 0.5rem;
    }
    .hero-mini__preview {
        height: 100%;
        width: 100%;
        transform: scale(0.5);
        opacity: 0;
        transform-origin: center;
        transition: all 0.5s ease-in;
    }
    .hero-mini__preview:hover {
        transform: scale(1);
        opacity: 1;
    }
    .hero-mini__video {
        height: 16rem;
        width: 16rem;
        transform: scale(1.5);
        object-fit: cover;
        object-position: center;
    }
    .hero-next {
        position: absolute;
        left: 50%;
        top: 50%;
        z-index: 20;
        width: 100%;
        height: 100%;
        transform: translate(-50%, -50%);
        object-fit: cover;
        object-position: center;
        animation: hero-grow 1s cubic-bezier(0.455, 0.03, 0.515, 0.955) both;
    }
    @keyframes hero-grow {
        from { width: 16rem; height: 16rem; }
        to { width: 100%; height: 100%; }
    }
    .hero-background {
        position: absolute;
        left: 0;
        top: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: center;
    }
    .hero-heading {
        font-family: 'zentry', sans-serif;
        font-size: 5rem;
        font-weight: 900;
        text-transform: uppercase;
        margin: 0;
    }
    .hero-heading--corner {
        position: absolute;
        bottom: 1.25rem;
        right: 1.25rem;
        z-index: 40;
    }
    .hero-heading--light {
        color: #dfdff0;
    }
    .hero-heading--dark {
        color: #000;
    }
    .hero-copy {
        position: absolute;
        left: 0;
        top: 0;
        z-index: 40;
        margin-top: 6rem;
        padding: 0 1.25rem;
    }
    .hero-tagline {
        margin-bottom: 1.25rem;
        max-width: 16rem;
        font-family: 'robert-regular', sans-serif;
        color: #f0f2fa;
    }
    .hero-trailer-button {
        background: #edff66;
    }
    @media (min-width: 640px) {
        .hero-copy {
            padding: 0 2.5rem;
        }
    }
    @media (min-width: 768px) {
        .hero-heading {
            font-size: 9rem;
        }
        .hero-mini {
            width: 16rem;
        }
    }
    @media (min-width: 1024px) {
        .hero-heading {
            font-size: 12rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_index_cycles_through_all_videos() {
        let total = 4;
        let mut index = 1;
        let mut seen = Vec::new();
        for _ in 0..total {
            seen.push(index);
            index = next_index(index, total);
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(index, 1);
    }

    #[test]
    fn overlay_lifts_once_visible_videos_load() {
        assert!(!loading_done(2, 4));
        assert!(loading_done(3, 4));
        assert!(loading_done(5, 4));
    }

    #[test]
    fn frame_starts_square_and_ends_clipped() {
        assert_eq!(
            frame_style(0.0),
            "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%); border-radius: 0% 0% 0% 0%;"
        );
        assert_eq!(
            frame_style(1.0),
            "clip-path: polygon(14% 0%, 72% 0%, 88% 90%, 0% 95%); border-radius: 0% 0% 40% 10%;"
        );
    }
}
