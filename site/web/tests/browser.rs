//! In-browser checks of the interactive behaviour.
//!
//! Run with `wasm-pack test --headless --firefox site/web`.

#![cfg(target_arch = "wasm32")]

use jm_site::LandingPage;
use jm_site::components::{Reveal, Trigger};
use jm_site::sections::Services;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn query(selector: &str) -> Element {
    document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
}

fn class_of(selector: &str) -> String {
    query(selector).get_attribute("class").unwrap_or_default()
}

fn click(selector: &str) {
    query(selector).dyn_into::<HtmlElement>().unwrap().click();
}

/// Let pending reactive updates reach the DOM.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

/// Wait for the next animation frame, then for pending updates.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    settle().await;
}

/// Let observers deliver: a few frames plus pending updates.
async fn observers_settle() {
    for _ in 0..3 {
        next_frame().await;
    }
}

fn style_of(selector: &str) -> String {
    query(selector).get_attribute("style").unwrap_or_default()
}

/// Empty the body and make it tall enough to scroll.
fn reset_body() {
    let body = document().body().unwrap();
    body.set_inner_html("");
    body.set_attribute("style", "min-height:5000px").unwrap();
}

fn scroll_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    window
        .dispatch_event(&web_sys::Event::new("scroll").unwrap())
        .unwrap();
}

#[wasm_bindgen_test]
async fn toggle_opens_menu_and_link_closes_it() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(LandingPage);
    settle().await;

    assert_eq!(class_of(".mobile-menu"), "mobile-menu");

    click(".nav-toggle");
    settle().await;
    assert_eq!(class_of(".mobile-menu"), "mobile-menu is-open");
    assert_eq!(
        query(".nav-toggle").get_attribute("aria-expanded").as_deref(),
        Some("true")
    );

    click(".mobile-menu-links a");
    settle().await;
    assert_eq!(class_of(".mobile-menu"), "mobile-menu");
}

#[wasm_bindgen_test]
async fn toggle_twice_returns_to_closed() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(LandingPage);
    settle().await;

    click(".nav-toggle");
    settle().await;
    click(".nav-toggle");
    settle().await;

    assert_eq!(class_of(".mobile-menu"), "mobile-menu");
}

#[wasm_bindgen_test]
async fn nav_elevates_after_scrolling() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(LandingPage);
    settle().await;

    scroll_to(0.0);
    settle().await;
    assert_eq!(class_of(".site-nav"), "site-nav is-transparent");

    scroll_to(400.0);
    settle().await;
    assert_eq!(class_of(".site-nav"), "site-nav is-elevated");

    scroll_to(0.0);
    settle().await;
    assert_eq!(class_of(".site-nav"), "site-nav is-transparent");
}

#[wasm_bindgen_test]
async fn hero_reveals_on_mount() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(LandingPage);
    next_frame().await;

    let style = query(".hero-content").get_attribute("style").unwrap_or_default();
    assert!(style.starts_with("opacity:1;transform:none"), "{style}");
}

#[wasm_bindgen_test]
async fn service_card_reveals_once_on_viewport_entry() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(|| {
        view! {
            <div style="height:3000px"></div>
            <Services />
        }
    });
    scroll_to(0.0);
    observers_settle().await;

    let before = style_of(".service-card");
    assert!(before.starts_with("opacity:0;"), "below the fold: {before}");

    query(".service-card").scroll_into_view();
    observers_settle().await;
    let entered = style_of(".service-card");
    assert!(entered.starts_with("opacity:1;transform:none"), "in view: {entered}");

    scroll_to(0.0);
    observers_settle().await;
    let after = style_of(".service-card");
    assert!(after.starts_with("opacity:1;transform:none"), "back at top: {after}");
}

#[wasm_bindgen_test]
async fn block_visible_at_mount_reveals_without_scrolling() {
    reset_body();
    scroll_to(0.0);
    let _mounted = leptos::mount::mount_to_body(|| {
        view! {
            <Reveal trigger=Trigger::in_view() class="visible-block">
                <p>"visible"</p>
            </Reveal>
        }
    });
    observers_settle().await;

    let style = style_of(".visible-block");
    assert!(style.starts_with("opacity:1;transform:none"), "{style}");
}

#[wasm_bindgen_test]
async fn block_that_never_intersects_stays_pending() {
    reset_body();
    let _mounted = leptos::mount::mount_to_body(|| {
        view! {
            <div style="display:none">
                <Reveal trigger=Trigger::in_view() class="collapsed-block">
                    <p>"collapsed"</p>
                </Reveal>
            </div>
        }
    });
    observers_settle().await;

    let style = style_of(".collapsed-block");
    assert!(style.starts_with("opacity:0;"), "{style}");
}
