//! Markers, timings, and pure checks shared by the page wiring.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the email check and the parallax math on the host.

use serde::{Deserialize, Serialize};

/// Blocking notice shown when the lead form's email value fails the format
/// check.
pub const LEAD_EMAIL_INVALID_MSG: &str = "Please enter a valid email address";

/// Markers and timings the page wiring operates on.
///
/// Every field has a default matching the markup contract of the marketing
/// pages; a host page may override any subset via the `data-page-behaviors`
/// JSON attribute on the root element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Id of the lead-capture form. At most one per page; absent is fine.
    #[serde(default = "default_lead_form_id")]
    pub lead_form_id: String,
    /// Class carried by auto-dismissing flash banners.
    #[serde(default = "default_flash_class")]
    pub flash_class: String,
    /// Class carried by elements shifted on scroll.
    #[serde(default = "default_parallax_class")]
    pub parallax_class: String,
    /// How long a flash banner stays fully visible before fading.
    #[serde(default = "default_flash_visible_ms")]
    pub flash_visible_ms: u32,
    /// Delay between fading a flash banner and detaching it. Must stay in
    /// sync with the stylesheet's opacity transition duration, or the banner
    /// pops out before the fade completes.
    #[serde(default = "default_flash_fade_ms")]
    pub flash_fade_ms: u32,
    /// Fraction of the scroll distance applied to parallax elements.
    #[serde(default = "default_parallax_rate")]
    pub parallax_rate: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lead_form_id: default_lead_form_id(),
            flash_class: default_flash_class(),
            parallax_class: default_parallax_class(),
            flash_visible_ms: default_flash_visible_ms(),
            flash_fade_ms: default_flash_fade_ms(),
            parallax_rate: default_parallax_rate(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override; any field left out keeps its default.
    pub fn from_json(raw: &str) -> Option<PageConfig> {
        serde_json::from_str(raw).ok()
    }
}

fn default_lead_form_id() -> String {
    "lead-capture-form".to_string()
}

fn default_flash_class() -> String {
    "alert".to_string()
}

fn default_parallax_class() -> String {
    "parallax".to_string()
}

fn default_flash_visible_ms() -> u32 {
    3_000
}

fn default_flash_fade_ms() -> u32 {
    300
}

fn default_parallax_rate() -> f64 {
    0.5
}

/// Permissive email format check: exactly one `@`, no whitespace, and a
/// domain whose final dot has at least one character on each side.
///
/// This is a UX convenience, not address validation; the backend re-checks
/// whatever it receives.
pub fn email_format_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Vertical parallax offset for a given scroll position.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Inline `transform` value shifting a parallax element `offset` CSS pixels
/// down the page.
pub fn parallax_transform(offset: f64) -> String {
    format!("translate3d(0px, {}px, 0px)", fmt_px(offset))
}

// Fixed two-decimal rendering without `format!` on floats; core's
// float-to-decimal path has had wasm-facing panics on some toolchain/browser
// combinations. Scale + round into an i64, then format integers.
fn fmt_px(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scaled = (v * 100.0).round();
    if scaled.abs() >= i64::MAX as f64 {
        return "0".to_string();
    }

    let n = scaled as i64;
    let int_part = (n / 100).abs();
    let frac_part = (n % 100).abs();

    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());
    if frac_part > 0 {
        out.push('.');
        if frac_part % 10 == 0 {
            out.push_str(&(frac_part / 10).to_string());
        } else {
            if frac_part < 10 {
                out.push('0');
            }
            out.push_str(&frac_part.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check_accepts_plain_addresses() {
        assert!(email_format_ok("user@example.com"));
        assert!(email_format_ok("a@b.c"));
        assert!(email_format_ok("first.last@mail.example.co.uk"));
        assert!(email_format_ok("who+tag@host42.net"));
    }

    #[test]
    fn email_check_rejects_malformed_addresses() {
        for bad in [
            "",
            "not-an-email",
            "user@example",
            "@example.com",
            "user@",
            "us er@example.com",
            "user@exam ple.com",
            "user@example.com\n",
            "user@@example.com",
            "user@.com",
            "user@example.",
            "@",
        ] {
            assert!(!email_format_ok(bad), "accepted {bad:?}");
        }
    }

    #[test]
    fn parallax_offset_is_half_scroll_at_default_rate() {
        assert_eq!(parallax_offset(100.0, 0.5), 50.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(-40.0, 0.5), -20.0);
    }

    #[test]
    fn parallax_transform_renders_css_pixels() {
        assert_eq!(parallax_transform(50.0), "translate3d(0px, 50px, 0px)");
        assert_eq!(parallax_transform(0.0), "translate3d(0px, 0px, 0px)");
        assert_eq!(parallax_transform(16.5), "translate3d(0px, 16.5px, 0px)");
        assert_eq!(parallax_transform(1.05), "translate3d(0px, 1.05px, 0px)");
        assert_eq!(parallax_transform(-20.0), "translate3d(0px, -20px, 0px)");
    }

    #[test]
    fn parallax_transform_degrades_on_non_finite_offsets() {
        assert_eq!(parallax_transform(f64::NAN), "translate3d(0px, 0px, 0px)");
        assert_eq!(
            parallax_transform(f64::INFINITY),
            "translate3d(0px, 0px, 0px)"
        );
    }

    #[test]
    fn config_defaults_match_page_markup_contract() {
        let c = PageConfig::default();
        assert_eq!(c.lead_form_id, "lead-capture-form");
        assert_eq!(c.flash_class, "alert");
        assert_eq!(c.parallax_class, "parallax");
        assert_eq!(c.flash_visible_ms, 3_000);
        assert_eq!(c.flash_fade_ms, 300);
        assert_eq!(c.parallax_rate, 0.5);
    }

    #[test]
    fn config_json_overrides_are_partial() {
        let raw = r#"{"parallax_rate": 0.25, "flash_visible_ms": 5000}"#;
        let c = PageConfig::from_json(raw).expect("valid override");
        assert_eq!(c.parallax_rate, 0.25);
        assert_eq!(c.flash_visible_ms, 5_000);
        assert_eq!(c.flash_class, "alert");
        assert_eq!(c.lead_form_id, "lead-capture-form");
    }

    #[test]
    fn config_json_garbage_is_rejected() {
        assert!(PageConfig::from_json("not json").is_none());
        assert!(PageConfig::from_json(r#"{"flash_visible_ms": "soon"}"#).is_none());
    }
}
