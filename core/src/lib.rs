pub mod contact;
pub mod embed;
pub mod filter;
pub mod links;
pub mod motion;

pub use contact::{ContactError, ContactPayload, RelayRequest, TemplateParams, RELAY_ENDPOINT};
pub use embed::{
    volume_command, DeferredVideo, PlaybackParams, VolumeRetry, VOLUME_RETRY_DELAYS_MS,
};
pub use filter::{
    matches_category, plan_transitions, FilterState, ItemTransition, HIDE_COLLAPSE_DELAY_MS,
    SHOW_FADE_DELAY_MS,
};
pub use links::{encode_component, telegram_url, whatsapp_url};
pub use motion::{
    hero_offset, reveal_ready, shape_transform, CounterTween, COUNT_DURATION_MS, COUNT_TICK_MS,
};
