//! Browser tests for the JS-facing API.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use hero_scene_wasm::HeroScene;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
    }
    object.into()
}

/// Unwrap a facade result, surfacing the thrown JS value on failure.
fn ok<T>(result: Result<T, JsError>) -> T {
    result.map_err(JsValue::from).unwrap()
}

#[wasm_bindgen_test]
fn constructor_builds_views() {
    let scene = ok(HeroScene::new(4, 2, 1.0));
    assert_eq!(scene.point_count(), 4);
    assert_eq!(scene.edge_count(), 8);
    assert_eq!(scene.get_base_positions_view().length(), 12);
    assert_eq!(scene.get_line_segments_view().length(), 48);
    assert_eq!(scene.get_tiles_view().length(), 32);
}

#[wasm_bindgen_test]
fn constructor_rejects_negative_counts() {
    assert!(HeroScene::new(-1, 2, 1.0).is_err());
    assert!(HeroScene::new(10, -1, 1.0).is_err());
    assert!(HeroScene::new(10, 2, 0.0).is_err());
}

#[wasm_bindgen_test]
fn undefined_config_gives_defaults() {
    let scene = ok(HeroScene::from_config(JsValue::UNDEFINED));
    assert_eq!(scene.point_count(), 180);
    assert_eq!(scene.edge_count(), 540);
}

#[wasm_bindgen_test]
fn partial_config_object() {
    let scene = ok(HeroScene::from_config(config(&[
        ("pointCount", JsValue::from(32)),
        ("neighbors", JsValue::from(2)),
        ("neighborSearch", JsValue::from_str("spatialIndex")),
    ])));
    assert_eq!(scene.point_count(), 32);
    assert_eq!(scene.edge_count(), 64);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected_and_scene_kept() {
    let mut scene = ok(HeroScene::new(10, 2, 1.0));
    let bad = config(&[("pointCount", JsValue::from_str("many"))]);
    assert!(scene.rebuild(bad).is_err());
    assert_eq!(scene.point_count(), 10);

    let palette = js_sys::Array::of1(&JsValue::from_str("teal"));
    assert!(scene.rebuild(config(&[("palette", palette.into())])).is_err());
    assert_eq!(scene.point_count(), 10);

    ok(scene.rebuild(config(&[("pointCount", JsValue::from(20))])));
    assert_eq!(scene.point_count(), 20);
}

#[wasm_bindgen_test]
fn frame_updates_views() {
    let mut scene = ok(HeroScene::new(16, 3, 2.0));
    let before = scene.get_positions_view().to_vec();
    scene.frame(2.5, 0.5, -0.5);
    let after = scene.get_positions_view().to_vec();
    assert_ne!(before, after);
    assert_eq!(scene.time(), 2.5);
    assert!(scene.rotation_y() != 0.0);
    assert!(scene.tilt_x() != 0.0);
}

#[wasm_bindgen_test]
fn frame_state_is_an_object() {
    let scene = ok(HeroScene::new(3, 1, 1.0));
    let state = ok(scene.frame_state(1.0, 0.0, 0.0));
    let points = Reflect::get(&state, &JsValue::from_str("points")).unwrap();
    assert_eq!(js_sys::Array::from(&points).length(), 3);
}
