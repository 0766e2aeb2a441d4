use crate::motion::{ActivationConfig, RevealConfig, TweenConfig};

/// Every call to action on the page sends visitors here.
pub const SCHEDULING_URL: &str = "https://calendly.com/shahrukhmd/phyllo";

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by trunk from frontend/assets
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "/lovable-uploads"  // Production upload bucket
}

/// Resolves an opaque asset reference against the configured base.
pub fn asset_url(reference: &str) -> String {
    if reference.starts_with('/') || reference.starts_with("http") {
        reference.to_string()
    } else {
        format!("{}/{}", get_asset_base(), reference)
    }
}

pub fn showcase_activation() -> ActivationConfig {
    ActivationConfig::default()
}

pub fn counter_tween() -> TweenConfig {
    TweenConfig::default()
}

pub fn reveal_text() -> RevealConfig {
    RevealConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Easing;

    #[test]
    fn bare_references_get_the_asset_base() {
        assert_eq!(asset_url("dash.png"), format!("{}/dash.png", get_asset_base()));
        assert_eq!(asset_url("/already/rooted.png"), "/already/rooted.png");
    }

    #[test]
    fn animation_tuning_matches_the_page() {
        let showcase = showcase_activation();
        assert_eq!(showcase.threshold, 0.5);
        assert_eq!(showcase.root_margin(), "-20% 0px -20% 0px");
        assert_eq!(showcase.interval_ms, 5000);

        let counter = counter_tween();
        assert_eq!(counter.duration_secs, 2.0);
        assert_eq!(counter.easing, Easing::QuartOut);

        let reveal = reveal_text();
        assert_eq!(reveal.step_secs, 0.1);
        assert_eq!(reveal.transition_secs, 0.8);
        assert_eq!(reveal.easing, Easing::REVEAL);
    }
}
