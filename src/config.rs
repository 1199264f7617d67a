use web_sys::Window;

pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

const DEFAULT_CATEGORY: &str = "creatives";
const DEFAULT_RELAY_PUBLIC_KEY: &str = "_5fQbVxUaeSigZDHG";
const DEFAULT_RELAY_SERVICE_ID: &str = "service_79k516t";
const DEFAULT_RELAY_TEMPLATE_ID: &str = "template_hdw4cx8";
const DEFAULT_WHATSAPP_NUMBER: &str = "918709922877";
const DEFAULT_TELEGRAM_USERNAME: &str = "kaifxed";
const DEFAULT_INTRO_MESSAGE: &str =
    "Hi Kaif! I saw your portfolio and would like to discuss a project.";
const DEFAULT_PLAYER_VOLUME: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub device: DeviceClass,
    pub page_origin: Option<String>,
    pub default_category: String,
    pub relay_public_key: String,
    pub relay_service_id: String,
    pub relay_template_id: String,
    pub whatsapp_number: String,
    pub telegram_username: String,
    pub intro_message: String,
    pub player_volume: u32,
}

impl SiteConfig {
    pub fn load(window: &Window) -> Self {
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let page_origin = window.location().origin().ok();
        Self {
            device: device_class_for_width(viewport_width),
            page_origin,
            default_category: DEFAULT_CATEGORY.to_string(),
            relay_public_key: relay_public_key(),
            relay_service_id: relay_service_id(),
            relay_template_id: relay_template_id(),
            whatsapp_number: whatsapp_number(),
            telegram_username: telegram_username(),
            intro_message: DEFAULT_INTRO_MESSAGE.to_string(),
            player_volume: DEFAULT_PLAYER_VOLUME,
        }
    }

    // autoplay, and with it the volume task, is desktop only
    pub fn autoplay_allowed(&self) -> bool {
        self.device == DeviceClass::Desktop
    }
}

pub fn device_class_for_width(viewport_width: f64) -> DeviceClass {
    if viewport_width > MOBILE_MAX_WIDTH_PX {
        DeviceClass::Desktop
    } else {
        DeviceClass::Mobile
    }
}

fn relay_public_key() -> String {
    resolve(
        option_env!("SHOWREEL_RELAY_PUBLIC_KEY")
            .or(option_env!("TRUNK_PUBLIC_SHOWREEL_RELAY_PUBLIC_KEY")),
        DEFAULT_RELAY_PUBLIC_KEY,
    )
}

fn relay_service_id() -> String {
    resolve(
        option_env!("SHOWREEL_RELAY_SERVICE_ID")
            .or(option_env!("TRUNK_PUBLIC_SHOWREEL_RELAY_SERVICE_ID")),
        DEFAULT_RELAY_SERVICE_ID,
    )
}

fn relay_template_id() -> String {
    resolve(
        option_env!("SHOWREEL_RELAY_TEMPLATE_ID")
            .or(option_env!("TRUNK_PUBLIC_SHOWREEL_RELAY_TEMPLATE_ID")),
        DEFAULT_RELAY_TEMPLATE_ID,
    )
}

fn whatsapp_number() -> String {
    resolve(
        option_env!("SHOWREEL_WHATSAPP_NUMBER")
            .or(option_env!("TRUNK_PUBLIC_SHOWREEL_WHATSAPP_NUMBER")),
        DEFAULT_WHATSAPP_NUMBER,
    )
}

fn telegram_username() -> String {
    resolve(
        option_env!("SHOWREEL_TELEGRAM_USERNAME")
            .or(option_env!("TRUNK_PUBLIC_SHOWREEL_TELEGRAM_USERNAME")),
        DEFAULT_TELEGRAM_USERNAME,
    )
}

fn resolve(raw: Option<&str>, fallback: &str) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_threshold_splits_device_classes() {
        assert_eq!(device_class_for_width(1280.0), DeviceClass::Desktop);
        assert_eq!(device_class_for_width(768.0), DeviceClass::Mobile);
        assert_eq!(device_class_for_width(769.0), DeviceClass::Desktop);
        assert_eq!(device_class_for_width(0.0), DeviceClass::Mobile);
    }

    #[test]
    fn resolve_prefers_non_empty_overrides() {
        assert_eq!(resolve(Some("service_override"), "fallback"), "service_override");
        assert_eq!(resolve(Some("   "), "fallback"), "fallback");
        assert_eq!(resolve(None, "fallback"), "fallback");
    }
}
