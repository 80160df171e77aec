use yew::prelude::*;

use crate::animation::easing::power1_out;
use crate::animation::hooks::use_scroll_progress;
use crate::animation::tween::{ClipFrame, ClipTween};
use crate::components::animated_title::AnimatedTitle;
use crate::config;

pub const SECTION_ID: &str = "about";

// The pin wrapper's top meets the viewport top exactly when the full-height
// clip box is centered, so "top top" on the wrapper starts the expansion.
const PIN_START: &str = "top top";

/// Scroll distance the clip stays pinned, as a relative trigger end.
pub fn pin_end() -> String {
    format!("+={}", config::ABOUT_PIN_DISTANCE_PX)
}

pub const ABOUT_CLIP: ClipTween = ClipTween {
    from: ClipFrame { width_vw: 30.0, height_vh: 60.0, radius_px: 24.0 },
    to: ClipFrame { width_vw: 100.0, height_vh: 100.0, radius_px: 0.0 },
};

pub fn pin_style() -> String {
    format!("height: calc(100dvh + {}px);", config::ABOUT_PIN_DISTANCE_PX)
}

#[function_component(About)]
pub fn about() -> Html {
    let pin = use_node_ref();
    let progress = use_scroll_progress(
        pin.clone(),
        PIN_START.into(),
        pin_end().into(),
        config::ABOUT_SCRUB_SECS,
    );

    html! {
        <div id={SECTION_ID} class="about">
            <div class="about-intro">
                <h2 class="about-eyebrow">{"Welcome to Zentry"}</h2>

                <AnimatedTitle
                    title="Disc<b>o</b>ver the world's <br /> l<b>a</b>rgest shared <b>a</b>dventure"
                    container_class={classes!("about-title")}
                />

                <div class="about-subtext">
                    <p>{"The Game of Games begins - your life, now an epic MMORPG"}</p>
                    <p>{"Zentry unites every player from countless games and platforms"}</p>
                </div>
            </div>

            <div class="about-pin" ref={pin} style={pin_style()}>
                <div id="clip" class="about-clip">
                    <div class="mask-clip-path about-image" style={ABOUT_CLIP.css_at(power1_out(progress))}>
                        <img
                            src={config::asset("img/about.webp")}
                            alt="background"
                            class="about-image__img"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

pub const ABOUT_CSS: &str = r#"
    .about {
        min-height: 100vh;
        width: 100vw;
    }
    .about-intro {
        position: relative;
        margin: 9rem 0 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.25rem;
    }
    .about-eyebrow {
        font-family: 'general', sans-serif;
        font-size: 0.875rem;
        text-transform: uppercase;
    }
    .about-title.animated-title {
        margin-top: 1.25rem;
        text-align: center;
        color: #000;
    }
    .about-subtext {
        position: absolute;
        bottom: -80dvh;
        left: 50%;
        z-index: 30;
        width: 100%;
        max-width: 24rem;
        transform: translateX(-50%);
        text-align: center;
        font-family: 'circular-web', sans-serif;
        font-size: 1.125rem;
    }
    .about-subtext p:last-child {
        color: #6b7280;
    }
    .about-pin {
        position: relative;
        width: 100vw;
    }
    .about-clip {
        position: sticky;
        top: 0;
        height: 100dvh;
        width: 100vw;
        overflow: hidden;
    }
    .about-image {
        position: absolute;
        left: 50%;
        top: 0;
        z-index: 20;
        transform: translateX(-50%);
        transform-origin: center;
        overflow: hidden;
    }
    .about-image__img {
        position: absolute;
        left: 0;
        top: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    @media (min-width: 768px) {
        .about-eyebrow {
            font-size: 10px;
        }
        .about-subtext {
            max-width: 34rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::trigger::{ScrollTrigger, TriggerEnd};

    #[test]
    fn pin_range_matches_wrapper_height() {
        assert_eq!(pin_end(), "+=800");
        let trigger = ScrollTrigger::parse(PIN_START, &pin_end()).unwrap();
        assert_eq!(trigger.end, TriggerEnd::Relative(config::ABOUT_PIN_DISTANCE_PX));
        assert_eq!(pin_style(), "height: calc(100dvh + 800px);");
    }

    #[test]
    fn clip_expands_to_full_viewport_without_radius() {
        assert_eq!(ABOUT_CLIP.frame_at(power1_out(1.0)), ABOUT_CLIP.to);
        assert_eq!(ABOUT_CLIP.frame_at(power1_out(0.0)), ABOUT_CLIP.from);
    }
}
