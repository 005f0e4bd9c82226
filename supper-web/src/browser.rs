//! Browser implementations of the client boundaries

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Promise, Reflect};
use supper_core::{ExportError, FileSaver, SessionStore, ShareError, ShareTarget, StoredSession};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `localStorage` key holding the serialized session
const SESSION_KEY: &str = "supper.session";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Keeps the identity provider's session in `localStorage`
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<StoredSession> {
        let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("Discarding unreadable stored session: {}", e);
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = local_storage() else {
            warn!("localStorage unavailable, session will not survive a reload");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(SESSION_KEY, &raw).is_err() {
                    warn!("Failed to persist session");
                }
            }
            Err(e) => warn!("Failed to serialize session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

// -- Downloads --

fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, String> {
    let uint8_array = js_sys::Uint8Array::from(data);
    let array = js_sys::Array::new();
    array.push(&uint8_array);

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &opts)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create blob URL: {e:?}"))
}

fn trigger_download(blob_url: &str, filename: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("document has no body")?;
    let elem = document
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {e:?}"))?;
    let _ = elem.set_attribute("href", blob_url);
    let _ = elem.set_attribute("download", filename);
    let _ = elem.set_attribute("style", "display:none");
    let _ = body.append_child(&elem);
    if let Some(html_elem) = elem.dyn_ref::<web_sys::HtmlElement>() {
        html_elem.click();
    }
    let _ = body.remove_child(&elem);
    Ok(())
}

/// How long a blob URL outlives its download click. The browser reads the
/// blob after `click()` returns, so it must still resolve by then.
const REVOKE_DELAY_MS: u32 = 40_000;

fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

fn revoke_later(url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(REVOKE_DELAY_MS).await;
        revoke_blob_url(&url);
    });
}

/// Click the download link for `url`, then hand the URL to `release`.
/// Nothing here revokes it.
fn offer_download(
    url: String,
    download: impl FnOnce(&str) -> Result<(), String>,
    release: impl FnOnce(String),
) -> Result<(), String> {
    let result = download(&url);
    release(url);
    result
}

/// Saves files through a hidden download link
pub struct BlobDownloadSaver;

impl FileSaver for BlobDownloadSaver {
    fn save(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
        let to_error = |message: String| ExportError::Save {
            file_name: file_name.to_string(),
            message,
        };
        let url = create_blob_url(&bytes, mime).map_err(to_error)?;
        let result = offer_download(url, |url| trigger_download(url, file_name), revoke_later)
            .map_err(to_error);
        debug!("Offered {} ({} bytes) for download", file_name, bytes.len());
        result
    }
}

// -- Share sheet --

/// `navigator.share`, looked up at call time so older browsers degrade to
/// the unsupported notice
pub struct NavigatorShare;

fn navigator_share() -> Option<(web_sys::Navigator, Function)> {
    let navigator = web_sys::window()?.navigator();
    let share = Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    let share = share.dyn_into::<Function>().ok()?;
    Some((navigator, share))
}

fn error_name(error: &JsValue) -> Option<String> {
    Reflect::get(error, &JsValue::from_str("name"))
        .ok()?
        .as_string()
}

#[async_trait(?Send)]
impl ShareTarget for NavigatorShare {
    fn is_supported(&self) -> bool {
        navigator_share().is_some()
    }

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        let (navigator, share) =
            navigator_share().ok_or_else(|| ShareError::Failed("navigator.share missing".into()))?;

        let data = Object::new();
        let set = |key: &str, value: &str| {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map(|_| ())
                .map_err(|e| ShareError::Failed(format!("{e:?}")))
        };
        set("title", title)?;
        set("text", text)?;

        let promise = share
            .call1(&navigator, &data)
            .map_err(|e| ShareError::Failed(format!("{e:?}")))?
            .dyn_into::<Promise>()
            .map_err(|e| ShareError::Failed(format!("share did not return a promise: {e:?}")))?;

        match JsFuture::from(promise).await {
            Ok(_) => Ok(()),
            Err(e) if error_name(&e).as_deref() == Some("AbortError") => Err(ShareError::Cancelled),
            Err(e) => Err(ShareError::Failed(
                error_name(&e).unwrap_or_else(|| format!("{e:?}")),
            )),
        }
    }
}

// -- Location --

/// The page URL without its fragment
pub fn current_url() -> Option<String> {
    let location = web_sys::window()?.location();
    let href = location.href().ok()?;
    Some(href.split('#').next().unwrap_or(&href).to_string())
}

pub fn url_fragment() -> Option<String> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let hash = hash.strip_prefix('#')?;
    if hash.is_empty() {
        None
    } else {
        Some(hash.to_string())
    }
}

/// Drop the fragment from the address bar so tokens don't linger in history
pub fn clear_url_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(url) = current_url() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

pub fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            warn!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}
