#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use constants::{FOLLOW_ASSEMBLY_ATTR, FOLLOW_PARTS_ATTR, FOLLOW_SIZE_ATTR, SCALER_ATTR};
use folio_core::{scaler_config_from_json, FollowOptions, ScalerConfig};
use follow::FollowMount;
use scaler::ScalerMount;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod follow;
mod frame;
mod hero;
mod options;
mod scaler;

/// Mounts created from markup at startup; they live as long as the page.
#[derive(Default)]
struct PageMounts {
    follow: Vec<FollowMount>,
    scalers: Vec<ScalerMount>,
    hero: Option<dom::EventListener>,
}

thread_local! {
    static PAGE: RefCell<PageMounts> = RefCell::new(PageMounts::default());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow!("no root element"))?;

    let mut page = PageMounts::default();

    let follow_selector = format!("[{}],[{}]", FOLLOW_ASSEMBLY_ATTR, FOLLOW_PARTS_ATTR);
    for container in dom::html_elements(&root, &follow_selector) {
        let mounted = options::follow_options_from_attrs(
            container.get_attribute(FOLLOW_ASSEMBLY_ATTR).as_deref(),
            container.get_attribute(FOLLOW_PARTS_ATTR).as_deref(),
            container.get_attribute(FOLLOW_SIZE_ATTR).as_deref(),
        )
        .map_err(anyhow::Error::from)
        .and_then(|opts| FollowMount::mount(&container, &opts));
        match mounted {
            Ok(m) => page.follow.push(m),
            Err(e) => log::error!("[follow] skipping #{}: {:#}", container.id(), e),
        }
    }

    for el in dom::html_elements(&root, &format!("[{}]", SCALER_ATTR)) {
        let raw = el.get_attribute(SCALER_ATTR).unwrap_or_default();
        let mounted = options::scaler_options_from_attr(&raw)
            .map_err(anyhow::Error::from)
            .and_then(|config| ScalerMount::mount(&el, config));
        match mounted {
            Ok(m) => page.scalers.push(m),
            Err(e) => log::error!("[scaler] skipping #{}: {:#}", el.id(), e),
        }
    }

    page.hero = hero::wire_hero_fade(&window, &document);

    log::info!(
        "mounted {} follow assemblies, {} scalers, hero fade {}",
        page.follow.len(),
        page.scalers.len(),
        if page.hero.is_some() { "on" } else { "off" }
    );
    PAGE.with(|p| *p.borrow_mut() = page);
    Ok(())
}

/// Pointer-follow assembly mounted from JS.
///
/// `options` is either a preset name, a JSON string, or an object with
/// `assembly`, `parts` and `referenceSize`.
#[wasm_bindgen]
pub struct FollowHandle {
    mount: Option<FollowMount>,
}

#[wasm_bindgen]
impl FollowHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, options: JsValue) -> Result<FollowHandle, JsValue> {
        let options = follow_options_from_js(&options).map_err(to_js)?;
        let mount = FollowMount::mount(&container, &options).map_err(to_js)?;
        Ok(Self { mount: Some(mount) })
    }

    #[wasm_bindgen(js_name = setReferenceSize)]
    pub fn set_reference_size(&self, size: f32) -> Result<(), JsValue> {
        match &self.mount {
            Some(m) => m.set_reference_size(size).map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn dispose(&mut self) {
        if let Some(mut m) = self.mount.take() {
            m.dispose();
        }
    }
}

/// Distance scaler mounted from JS; `options` may be omitted.
#[wasm_bindgen]
pub struct ScalerHandle {
    mount: Option<ScalerMount>,
}

#[wasm_bindgen]
impl ScalerHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::HtmlElement, options: JsValue) -> Result<ScalerHandle, JsValue> {
        let config = scaler_config_from_js(&options).map_err(to_js)?;
        let mount = ScalerMount::mount(&element, config).map_err(to_js)?;
        Ok(Self { mount: Some(mount) })
    }

    pub fn dispose(&mut self) {
        if let Some(mut m) = self.mount.take() {
            m.dispose();
        }
    }
}

fn follow_options_from_js(value: &JsValue) -> anyhow::Result<FollowOptions> {
    if let Some(s) = value.as_string() {
        let s = s.trim();
        if s.starts_with('{') || s.starts_with('[') {
            return Ok(options::follow_options_from_attrs(None, Some(s), None)?);
        }
        return Ok(options::follow_options_from_attrs(Some(s), None, None)?);
    }
    let json = json_of(value)?.ok_or_else(|| anyhow!("follow options are required"))?;
    Ok(options::follow_options_from_attrs(None, Some(&json), None)?)
}

fn scaler_config_from_js(value: &JsValue) -> anyhow::Result<ScalerConfig> {
    if let Some(s) = value.as_string() {
        return Ok(scaler_config_from_json(&s)?);
    }
    let json = json_of(value)?.unwrap_or_default();
    Ok(scaler_config_from_json(&json)?)
}

fn json_of(value: &JsValue) -> anyhow::Result<Option<String>> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json = js_sys::JSON::stringify(value).map_err(|e| anyhow!("{:?}", e))?;
    Ok(Some(String::from(json)))
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}
