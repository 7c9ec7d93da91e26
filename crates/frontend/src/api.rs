//! Catalog fetch.
//!
//! The menu is a static JSON resource served next to the page; there is no
//! backend. A failed or slow fetch is not an error the visitor sees: the
//! caller logs it and the app keeps running with an empty catalog.

use contracts::{MenuDocument, Product};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

const MENU_URL: &str = "public/data/menu.json";

pub async fn fetch_menu() -> Result<Vec<Product>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_cache(RequestCache::NoCache);

    let request = Request::new_with_str_and_init(MENU_URL, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let doc: MenuDocument = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(doc.items)
}
