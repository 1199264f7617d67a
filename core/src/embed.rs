use serde::Serialize;

use crate::links::encode_component;

// Delays between post-load volume commands, in ms. The player inside a
// fresh frame is usually not ready for API messages at the load event.
pub const VOLUME_RETRY_DELAYS_MS: &[u32] = &[200, 500, 1_000, 2_000, 4_000];

// Embed attributes captured before the live frame is removed from the page;
// the frame is rebuilt from these whenever the item's category becomes
// active again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredVideo {
    pub src: String,
    pub title: String,
    pub allow: String,
    pub allowfullscreen: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackParams {
    // autoplaying frames are created muted so browsers honor the request
    pub autoplay: bool,
    pub origin: Option<String>,
}

impl DeferredVideo {
    pub fn player_src(&self, params: &PlaybackParams) -> Option<String> {
        let src = self.src.trim();
        if !(src.starts_with("https://") || src.starts_with("http://")) {
            return None;
        }
        let mut url = String::from(src);
        let mut sep = if src.contains('?') { '&' } else { '?' };
        push_param(&mut url, &mut sep, "vq", "hd1080");
        if params.autoplay {
            push_param(&mut url, &mut sep, "autoplay", "1");
            push_param(&mut url, &mut sep, "mute", "1");
        }
        push_param(&mut url, &mut sep, "enablejsapi", "1");
        if let Some(origin) = params.origin.as_deref() {
            let encoded = encode_component(origin);
            push_param(&mut url, &mut sep, "origin", &encoded);
        }
        Some(url)
    }
}

fn push_param(url: &mut String, sep: &mut char, key: &str, value: &str) {
    url.push(*sep);
    url.push_str(key);
    url.push('=');
    url.push_str(value);
    *sep = '&';
}

// One volume command per step; the schedule ends once the table is spent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeRetry {
    step: usize,
}

impl VolumeRetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_delay(&mut self) -> Option<u32> {
        let delay = VOLUME_RETRY_DELAYS_MS.get(self.step).copied()?;
        self.step += 1;
        Some(delay)
    }

    pub fn commands_issued(&self) -> usize {
        self.step
    }
}

#[derive(Serialize)]
struct PlayerCommand<'a> {
    event: &'a str,
    func: &'a str,
    args: [u32; 1],
}

pub fn volume_command(level: u32) -> Option<String> {
    let command = PlayerCommand {
        event: "command",
        func: "setVolume",
        args: [level.min(100)],
    };
    serde_json::to_string(&command).ok()
}
