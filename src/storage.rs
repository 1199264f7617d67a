// keys written by earlier revisions of the site, no longer read
const STALE_KEYS: &[&str] = &["portfolio-theme", "portfolio-last-filter", "portfolio-visited"];

pub fn purge_stale_keys() {
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };
    for key in STALE_KEYS {
        let _ = storage.remove_item(key);
    }
}
