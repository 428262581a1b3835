#![cfg(target_arch = "wasm32")]
use folio_animation_wasm::{
    abi_version, glyph_color, route, toggle_theme, FolioCipher, FolioIntro, FolioPrinter,
};
use js_sys::Function;
use serde_json::{json, Value};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn events(v: JsValue) -> Vec<Value> {
    swb::from_value(v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn cipher_reveals_with_seed() {
    let mut c = FolioCipher::new(JsValue::UNDEFINED, Some(7)).unwrap();
    c.start("Yaswanth");
    let mut frames = 0;
    while c.needs_frame() && frames < 10_000 {
        c.frame();
        frames += 1;
    }
    assert!(c.is_complete());
    let snap: Value = swb::from_value(c.snapshot().unwrap()).unwrap();
    assert_eq!(snap["text"], "Yaswanth");
    assert_eq!(snap["complete"], true);
}

#[wasm_bindgen_test]
fn cipher_rejects_bad_config() {
    let cfg = swb::to_value(&json!({ "lock_probability": 2.0 })).unwrap();
    assert!(FolioCipher::new(cfg, None).is_err());
}

#[wasm_bindgen_test]
fn printer_walks_phases() {
    let mut p = FolioPrinter::new(JsValue::NULL, None).unwrap();
    let first = events(p.click().unwrap());
    assert!(!first.is_empty());
    assert_eq!(p.phase(), "compressing");
    assert!(events(p.click().unwrap()).is_empty());

    events(p.advance(800.0).unwrap());
    assert_eq!(p.phase(), "sliding");
    assert!(p.paper_visible());

    let tail = events(p.advance(3200.0).unwrap());
    assert_eq!(
        tail.last().map(|e| e["type"].clone()),
        Some(json!("phase_changed"))
    );
    assert_eq!(p.phase(), "idle");
}

#[wasm_bindgen_test]
fn throwing_completion_callback_does_not_stall_printer() {
    let boom = Function::new_no_args("throw new Error('boom')");
    let mut p = FolioPrinter::new(JsValue::UNDEFINED, Some(boom)).unwrap();
    events(p.click().unwrap());
    let tail = events(p.advance(4000.0).unwrap());
    assert!(tail.iter().any(|e| e["type"] == "sequence_completed"));
    assert_eq!(p.phase(), "idle");

    events(p.click().unwrap());
    assert_eq!(p.phase(), "compressing");
}

#[wasm_bindgen_test]
fn intro_types_greeting() {
    let mut i = FolioIntro::new(JsValue::UNDEFINED).unwrap();
    assert!(i.mount());
    assert!(!i.mount());
    events(i.advance(2200.0).unwrap());
    assert_eq!(i.greeting(), "Hi, I am ");
    assert!(i.is_ready());
}

#[wasm_bindgen_test]
fn helpers() {
    assert_eq!(route("/"), "home");
    assert_eq!(route("/nope?x=1"), "not_found");
    assert_eq!(
        glyph_color(JsValue::from_str("dark"), false, true).unwrap(),
        "#ffffff"
    );
    let next = toggle_theme(JsValue::from_str("system")).unwrap();
    assert_eq!(next.as_string().as_deref(), Some("dark"));
}
