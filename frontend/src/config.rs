use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const ASSET_ROOT: &str = "/";

/// Resolves a static asset (image, video, audio) against the site root.
pub fn asset(path: &str) -> String {
    format!("{}{}", ASSET_ROOT, path.trim_start_matches('/'))
}

pub fn hero_video(index: usize) -> String {
    asset(&format!("videos/hero-{}.mp4", index))
}

pub const NAV_ITEMS: [&str; 5] = ["Nexus", "Vault", "Prologue", "About", "Contact"];

pub const HERO_VIDEO_COUNT: usize = 4;
// Give up on the loading overlay if the videos never report `loadeddata`.
pub const HERO_LOADING_TIMEOUT_MS: u32 = 6000;

pub const NAV_HIDE_OFFSET_PX: f64 = 100.0;
pub const NAV_FADE_SECS: f64 = 0.2;
pub const INDICATOR_BARS: usize = 4;

pub const WORD_STAGGER_SECS: f64 = 0.02;

pub const ABOUT_PIN_DISTANCE_PX: f64 = 800.0;
pub const ABOUT_SCRUB_SECS: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_have_a_single_leading_slash() {
        assert_eq!(asset("img/about.webp"), "/img/about.webp");
        assert_eq!(asset("/audio/loop.mp3"), "/audio/loop.mp3");
        assert_eq!(hero_video(3), "/videos/hero-3.mp4");
    }
}
