#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use pfe_quest_web::dom;
use pfe_quest_web::pages::level4::{InterviewPage, InterviewPageProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlSelectElement};
use yew::Renderer;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(id: &str) -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id(id) {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

fn click(selector: &str) {
    let el: HtmlElement = dom::document()
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element");
    el.click();
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    pfe_quest_web::i18n::set_lang("fr");
    Renderer::<pfe_quest_web::app::App>::with_root(fresh_root("app")).render();
    settle().await;

    let doc = dom::document();
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    assert_eq!(skip.text_content().unwrap_or_default(), "Aller au contenu");
    let main = doc.get_element_by_id("main").expect("main landmark");
    assert_eq!(main.get_attribute("role").as_deref(), Some("main"));
}

#[wasm_bindgen_test]
async fn language_select_updates_html_lang() {
    Renderer::<pfe_quest_web::app::App>::with_root(fresh_root("app")).render();
    settle().await;

    let doc = dom::document();
    let select: HtmlSelectElement = doc
        .get_element_by_id("lang-select")
        .expect("lang select")
        .dyn_into()
        .expect("cast to select");
    select.set_value("en");
    select
        .dispatch_event(&Event::new("change").expect("change event"))
        .expect("dispatch change");
    settle().await;

    let html = doc.document_element().expect("document element");
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    pfe_quest_web::i18n::set_lang("fr");
}

#[wasm_bindgen_test]
async fn confirming_an_avatar_reveals_the_answer_then_the_pitch() {
    pfe_quest_web::i18n::set_lang("fr");
    Renderer::<InterviewPage>::with_root_and_props(
        fresh_root("level"),
        InterviewPageProps { seed: Some(4) },
    )
    .render();
    settle().await;

    click("#avatar-confirm");
    settle().await;
    let doc = dom::document();
    assert!(doc.query_selector(".answer-reveal").expect("query").is_none());

    click("[data-avatar='casual']");
    settle().await;
    click("#avatar-confirm");
    settle().await;
    assert!(doc.query_selector(".answer-reveal").expect("query").is_some());
    assert!(doc.query_selector(".border-destructive").expect("query").is_some());

    TimeoutFuture::new(1_600).await;
    assert_eq!(
        doc.query_selector_all(".pitch-block").expect("query").length(),
        4
    );
    assert!(doc.get_element_by_id("pitch-validate").is_some());
}
