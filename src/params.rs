//! Canonical query-string encoding of a card configuration.
//!
//! Parameter names are versioned with the rendering service's contract;
//! renaming one here is a silent protocol break, not a local error. Emission
//! order is fixed so equal configs always serialize identically, which keeps
//! caching layers in front of the service effective.

use crate::card::{CardConfig, CardKind};
use chrono::Utc;
use url::form_urlencoded::Serializer;

/// Wire default applied when no animation is set.
pub const DEFAULT_ANIMATION: &str = "fadeIn";
/// Wire default applied when no animation speed is set.
pub const DEFAULT_SPEED: &str = "normal";
/// Wire default applied when no gradient type is set.
pub const DEFAULT_GRADIENT_TYPE: &str = "linear";

/// Encode a config into the service's query contract, stamping quote cards
/// with the current time.
pub fn encode(config: &CardConfig) -> String {
    encode_at(config, Utc::now().timestamp_millis())
}

/// Encode with a caller-supplied clock.
///
/// Pure: equal `(config, now_ms)` pairs always produce identical strings.
/// `now_ms` is only consulted for quote cards, whose content is randomized
/// server-side per request; the `t` parameter stops intermediary caches
/// from coalescing distinct requests.
pub fn encode_at(config: &CardConfig, now_ms: i64) -> String {
    let mut query = Serializer::new(String::new());

    query.append_pair("type", config.kind.as_str());
    query.append_pair("username", config.username.as_deref().unwrap_or(""));
    query.append_pair("theme", &config.theme);
    query.append_pair("bg", &config.bg_color);
    query.append_pair("primary", &config.primary_color);
    query.append_pair("secondary", &config.secondary_color);
    query.append_pair("text", &config.text_color);
    query.append_pair("border", &config.border_color);
    query.append_pair("radius", &config.border_radius.to_string());
    query.append_pair("showBorder", bool_str(config.show_border));
    query.append_pair("width", &config.width.to_string());
    query.append_pair("height", &config.height.to_string());
    query.append_pair(
        "animation",
        config.animation.as_deref().unwrap_or(DEFAULT_ANIMATION),
    );
    query.append_pair(
        "speed",
        config.animation_speed.as_deref().unwrap_or(DEFAULT_SPEED),
    );
    query.append_pair("gradient", bool_str(config.gradient_enabled));
    query.append_pair(
        "gradientType",
        config
            .gradient_type
            .as_deref()
            .unwrap_or(DEFAULT_GRADIENT_TYPE),
    );
    query.append_pair("gradientAngle", &config.gradient_angle.to_string());
    query.append_pair("gradientStart", &config.gradient_start);
    query.append_pair("gradientEnd", &config.gradient_end);

    // Omission, not empty-string, signals "no custom text" to the service.
    if let Some(text) = config.custom_text.as_deref() {
        if !text.is_empty() {
            query.append_pair("customText", text);
        }
    }

    if config.kind == CardKind::Quote {
        query.append_pair("t", &now_ms.to_string());
    }

    query.finish()
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardConfig, CardKind, PreviewFormat};
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn pairs(query: &str) -> Vec<(String, String)> {
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    fn pair_map(query: &str) -> HashMap<String, String> {
        pairs(query).into_iter().collect()
    }

    #[test]
    fn encode_is_deterministic_for_non_quote_kinds() {
        let config = CardConfig::new(CardKind::Stats, Some("octocat".to_string()));
        assert_eq!(encode(&config), encode(&config.clone()));
    }

    #[test]
    fn field_order_is_stable() {
        let config = CardConfig::new(CardKind::Stats, Some("octocat".to_string()));
        let names: Vec<String> = pairs(&encode(&config))
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "type",
                "username",
                "theme",
                "bg",
                "primary",
                "secondary",
                "text",
                "border",
                "radius",
                "showBorder",
                "width",
                "height",
                "animation",
                "speed",
                "gradient",
                "gradientType",
                "gradientAngle",
                "gradientStart",
                "gradientEnd",
            ]
        );
    }

    #[test]
    fn scalar_rendering() {
        let mut config = CardConfig::new(CardKind::Streak, Some("octocat".to_string()));
        config.border_radius = 12;
        config.show_border = false;
        config.gradient_enabled = true;
        config.width = 400;

        let map = pair_map(&encode(&config));
        assert_eq!(map["type"], "streak");
        assert_eq!(map["radius"], "12");
        assert_eq!(map["showBorder"], "false");
        assert_eq!(map["gradient"], "true");
        assert_eq!(map["width"], "400");
    }

    #[test]
    fn wire_defaults_always_sent() {
        let config = CardConfig::new(CardKind::Stats, Some("octocat".to_string()));
        let map = pair_map(&encode(&config));
        assert_eq!(map["animation"], "fadeIn");
        assert_eq!(map["speed"], "normal");
        assert_eq!(map["gradientType"], "linear");
    }

    #[test]
    fn missing_username_encodes_as_empty() {
        let config = CardConfig::new(CardKind::Quote, None);
        let map = pair_map(&encode_at(&config, 0));
        assert_eq!(map["username"], "");
    }

    #[test]
    fn custom_text_omitted_unless_non_empty() {
        let mut config = CardConfig::new(CardKind::Custom, None);
        assert!(!pair_map(&encode(&config)).contains_key("customText"));

        config.custom_text = Some(String::new());
        assert!(!pair_map(&encode(&config)).contains_key("customText"));

        config.custom_text = Some("Ship it".to_string());
        assert_eq!(pair_map(&encode(&config))["customText"], "Ship it");
    }

    #[test]
    fn quote_gets_cache_buster_others_do_not() {
        let quote = CardConfig::new(CardKind::Quote, None);
        let map = pair_map(&encode_at(&quote, 1700000000000));
        assert_eq!(map["t"], "1700000000000");

        let stats = CardConfig::new(CardKind::Stats, Some("octocat".to_string()));
        assert!(!pair_map(&encode_at(&stats, 1700000000000)).contains_key("t"));
    }

    #[test]
    fn quote_encodings_differ_only_in_timestamp() {
        let config = CardConfig::new(CardKind::Quote, None);
        let a = pairs(&encode_at(&config, 1000));
        let b = pairs(&encode_at(&config, 2000));
        assert_ne!(a, b);

        let without_t =
            |list: &[(String, String)]| -> Vec<(String, String)> {
                list.iter().filter(|(k, _)| k != "t").cloned().collect()
            };
        assert_eq!(without_t(&a), without_t(&b));
    }

    #[test]
    fn hex_colors_are_percent_encoded() {
        let config = CardConfig::default();
        let query = encode_at(&config, 0);
        assert!(query.contains("bg=%230d1117"));
        assert!(!query.contains("bg=#"));
    }

    #[test]
    fn encode_never_emits_format_override() {
        let mut config = CardConfig::new(CardKind::Stats, Some("octocat".to_string()));
        config.preview_format = PreviewFormat::Img;
        assert!(!pair_map(&encode(&config)).contains_key("format"));
    }

    // ── Property tests ──────────────────────────────────

    fn color() -> impl Strategy<Value = String> {
        "#[0-9a-f]{6}"
    }

    fn card_config() -> impl Strategy<Value = CardConfig> {
        (
            prop_oneof![
                Just(CardKind::Stats),
                Just(CardKind::Languages),
                Just(CardKind::Streak),
                Just(CardKind::Activity),
                Just(CardKind::Quote),
                Just(CardKind::Custom),
            ],
            proptest::option::of("[a-zA-Z0-9 _-]{0,24}"),
            (color(), color(), color(), color(), color()),
            (0u32..64, any::<bool>(), 1u32..2000, 1u32..2000),
            proptest::option::of("[a-zA-Z ]{0,16}"),
            (any::<bool>(), 0u32..360, color(), color()),
        )
            .prop_map(
                |(kind, username, colors, frame, custom_text, gradient)| {
                    let (bg, primary, secondary, text, border) = colors;
                    let (radius, show_border, width, height) = frame;
                    let (gradient_enabled, gradient_angle, gradient_start, gradient_end) =
                        gradient;
                    CardConfig {
                        kind,
                        username,
                        bg_color: bg,
                        primary_color: primary,
                        secondary_color: secondary,
                        text_color: text,
                        border_color: border,
                        border_radius: radius,
                        show_border,
                        width,
                        height,
                        gradient_enabled,
                        gradient_angle,
                        gradient_start,
                        gradient_end,
                        custom_text,
                        ..CardConfig::default()
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn encode_at_is_pure(config in card_config(), now in 0i64..4_000_000_000_000) {
            prop_assert_eq!(encode_at(&config, now), encode_at(&config.clone(), now));
        }

        #[test]
        fn encoded_values_survive_url_parsing(config in card_config()) {
            let map = pair_map(&encode_at(&config, 7));
            prop_assert_eq!(map.get("type").map(String::as_str), Some(config.kind.as_str()));
            prop_assert_eq!(map.get("bg"), Some(&config.bg_color));
            prop_assert_eq!(
                map.get("username").map(String::as_str),
                Some(config.username.as_deref().unwrap_or(""))
            );
            prop_assert_eq!(map.get("width"), Some(&config.width.to_string()));
        }
    }
}
