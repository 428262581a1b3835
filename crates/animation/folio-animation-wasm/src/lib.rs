use js_sys::Function;
use log::warn;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use folio_animation_core::{
    AnimatedPrinter, CipherConfig, CipherReveal, HeroIntro, IntroConfig, RngSource, StageTable,
    VirtualClock, VirtualTicker,
};
use folio_site_core::{Route, Theme};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn from_js_or_default<T>(value: JsValue, what: &str) -> Result<T, JsError>
where
    T: Default + serde::de::DeserializeOwned,
{
    if jsvalue_is_undefined_or_null(&value) {
        Ok(T::default())
    } else {
        swb::from_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    swb::to_value(value).map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// Cipher heading driven by the host's animation frames.
///
/// The host calls `frame()` from each `requestAnimationFrame` callback and
/// keeps scheduling while `needs_frame()` is true.
#[wasm_bindgen]
pub struct FolioCipher {
    core: CipherReveal<VirtualTicker, RngSource>,
}

#[wasm_bindgen]
impl FolioCipher {
    /// Create a cipher. `config` is a CipherConfig object or undefined/null
    /// for defaults. Pass a seed for a reproducible reveal.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, seed: Option<u32>) -> Result<FolioCipher, JsError> {
        console_error_panic_hook::set_once();
        let cfg: CipherConfig = from_js_or_default(config, "config")?;
        let rng = match seed {
            Some(s) => RngSource::seeded(u64::from(s)),
            None => RngSource::from_entropy(),
        };
        let core = CipherReveal::new(cfg, VirtualTicker::new(), rng)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(FolioCipher { core })
    }

    /// Begin revealing `target`, replacing any reveal in progress.
    pub fn start(&mut self, target: &str) {
        self.core.start(target);
    }

    /// Run one animation frame. Returns true when the text changed.
    pub fn frame(&mut self) -> bool {
        self.core.step().acted()
    }

    #[wasm_bindgen(js_name = needs_frame)]
    pub fn needs_frame(&self) -> bool {
        self.core.ticker().pending().is_some()
    }

    pub fn stop(&mut self) {
        self.core.stop();
    }

    #[wasm_bindgen(js_name = is_complete)]
    pub fn is_complete(&self) -> bool {
        self.core.is_complete()
    }

    /// `{ text, revealed, complete }` for rendering.
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.core.frame(), "snapshot")
    }
}

/// Click-triggered printer sequence on a host-advanced clock.
#[wasm_bindgen]
pub struct FolioPrinter {
    core: AnimatedPrinter<VirtualClock>,
}

#[wasm_bindgen]
impl FolioPrinter {
    /// `table` is a stage table array or undefined/null for the default one.
    /// `on_complete` runs once per finished sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(table: JsValue, on_complete: Option<Function>) -> Result<FolioPrinter, JsError> {
        console_error_panic_hook::set_once();
        let table: StageTable = from_js_or_default(table, "stage table")?;
        let mut core = AnimatedPrinter::with_table(table, VirtualClock::new())
            .map_err(|e| JsError::new(&format!("stage table error: {e}")))?;
        if let Some(f) = on_complete {
            core = core.with_completion(move || {
                if let Err(err) = f.call0(&JsValue::UNDEFINED) {
                    warn!("printer: completion callback threw: {err:?}");
                }
            });
        }
        Ok(FolioPrinter { core })
    }

    /// Start the sequence. Returns the events it produced (empty when busy).
    pub fn click(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.core.click(), "events")
    }

    /// Move the clock forward by `dt_ms` and return the events that fired.
    pub fn advance(&mut self, dt_ms: f64) -> Result<JsValue, JsError> {
        to_js(&self.core.advance(dt_ms), "events")
    }

    pub fn phase(&self) -> String {
        self.core.phase().as_str().to_string()
    }

    #[wasm_bindgen(js_name = paper_visible)]
    pub fn paper_visible(&self) -> bool {
        self.core.paper_visible()
    }

    #[wasm_bindgen(js_name = printed_lines)]
    pub fn printed_lines(&self) -> usize {
        self.core.printed_lines()
    }

    /// Drop pending stages, e.g. on unmount.
    pub fn cancel(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.core.cancel(), "events")
    }
}

/// Typed greeting in the hero section.
#[wasm_bindgen]
pub struct FolioIntro {
    core: HeroIntro<VirtualClock>,
}

#[wasm_bindgen]
impl FolioIntro {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FolioIntro, JsError> {
        console_error_panic_hook::set_once();
        let cfg: IntroConfig = from_js_or_default(config, "config")?;
        Ok(FolioIntro {
            core: HeroIntro::new(cfg, VirtualClock::new()),
        })
    }

    /// Schedule the greeting. Only the first call does anything.
    pub fn mount(&mut self) -> bool {
        self.core.mount()
    }

    pub fn advance(&mut self, dt_ms: f64) -> Result<JsValue, JsError> {
        to_js(&self.core.advance(dt_ms), "events")
    }

    pub fn greeting(&self) -> String {
        self.core.greeting_text()
    }

    #[wasm_bindgen(js_name = is_ready)]
    pub fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    pub fn cancel(&mut self) {
        self.core.cancel();
    }
}

/// `"home"` or `"not_found"`.
#[wasm_bindgen]
pub fn route(path: &str) -> String {
    match Route::resolve(path) {
        Route::Home => "home".to_string(),
        Route::NotFound => "not_found".to_string(),
    }
}

#[wasm_bindgen(js_name = scroll_progress)]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    folio_site_core::scroll_progress(scroll_y, document_height, viewport_height)
}

/// Colour for one cipher glyph. `theme` is "light", "dark" or "system".
#[wasm_bindgen(js_name = glyph_color)]
pub fn glyph_color(
    theme: JsValue,
    system_prefers_dark: bool,
    revealed: bool,
) -> Result<String, JsError> {
    let theme: Theme = from_js_or_default(theme, "theme")?;
    Ok(theme
        .resolve(system_prefers_dark)
        .glyph_color(revealed)
        .to_string())
}

/// Next stored theme after the header toggle.
#[wasm_bindgen(js_name = toggle_theme)]
pub fn toggle_theme(theme: JsValue) -> Result<JsValue, JsError> {
    let theme: Theme = from_js_or_default(theme, "theme")?;
    to_js(&theme.toggled(), "theme")
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
