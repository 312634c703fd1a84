//! Diagram rendering collaborators.
//!
//! Rendered note views may carry fenced diagram blocks; these helpers
//! hand the blocks to the page-loaded renderer libraries. Like the rich
//! editor library, the renderers are globals the host page may or may
//! not have loaded, so every entry point degrades to a no-op when its
//! library is absent.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mermaid, catch)]
    fn run(config: &JsValue) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = mermaid, catch)]
    fn init(config: &JsValue, nodes: &JsValue) -> Result<(), JsValue>;

    type Viz;

    #[wasm_bindgen(constructor)]
    fn new() -> Viz;

    #[wasm_bindgen(method, js_name = renderSVGElement)]
    fn render_svg_element(this: &Viz, source: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = GraphViewer, js_name = processElements, catch)]
    fn process_elements() -> Result<(), JsValue>;
}

fn library_present(name: &str) -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined())
        .unwrap_or(false)
}

/// Render every `.mermaid` block currently in the document.
///
/// Newer library versions expose `run`; older ones only `init`. Errors
/// stay inside the renderer, which leaves its own message in the block.
pub fn render_flow_diagrams() {
    if !library_present("mermaid") {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".mermaid") else {
        return;
    };

    let mermaid = match js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mermaid")) {
        Ok(m) => m,
        Err(_) => return,
    };
    let has_run = js_sys::Reflect::get(&mermaid, &JsValue::from_str("run"))
        .map(|v| v.is_function())
        .unwrap_or(false);

    if has_run {
        let config = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&config, &JsValue::from_str("nodes"), &nodes);
        match run(&config) {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    tracing::warn!(?err, "flow diagram rendering failed");
                }
            }),
            Err(err) => tracing::warn!(?err, "flow diagram rendering failed"),
        }
    } else if let Err(err) = init(&JsValue::UNDEFINED, &nodes) {
        tracing::warn!(?err, "flow diagram rendering failed");
    }
}

/// Render graphviz dot source into the element with `element_id`.
///
/// Asynchronous; on failure the element's text is replaced with the
/// renderer's error message so the reader sees why the diagram is gone.
pub fn render_graph_diagram(element_id: &str, dot_source: &str) {
    if !library_present("Viz") {
        return;
    }
    let element_id = element_id.to_string();
    let promise = Viz::new().render_svg_element(dot_source);

    spawn_local(async move {
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&element_id));
        let Some(container) = container else {
            return;
        };
        match JsFuture::from(promise).await {
            Ok(svg) => {
                container.set_inner_html("");
                if let Some(svg) = svg.dyn_ref::<Element>() {
                    let _ = container.append_child(svg);
                }
            }
            Err(err) => {
                tracing::warn!(element_id, ?err, "graph diagram rendering failed");
                if let Some(html) = container.dyn_ref::<web_sys::HtmlElement>() {
                    html.set_inner_text(&format!("Error rendering diagram: {err:?}"));
                }
            }
        }
    });
}

/// Hand embedded-diagram XML to the page's viewer library.
///
/// The viewer picks up elements by class and data attribute; this
/// rebuilds the container's child in that shape and asks the viewer to
/// process it.
pub fn render_embedded_diagram(element_id: &str, xml: &str) {
    if !library_present("GraphViewer") {
        return;
    }
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id));
    let Some(container) = container else {
        return;
    };
    let document = match container.owner_document() {
        Some(document) => document,
        None => return,
    };

    let config = js_sys::Object::new();
    let set = |key: &str, value: &JsValue| {
        let _ = js_sys::Reflect::set(&config, &JsValue::from_str(key), value);
    };
    set("xml", &JsValue::from_str(xml));
    set("resize", &JsValue::TRUE);
    set("center", &JsValue::TRUE);
    set("nav", &JsValue::TRUE);
    let Ok(data) = js_sys::JSON::stringify(&config) else {
        return;
    };

    container.set_inner_html("");
    let Ok(viewer) = document.create_element("div") else {
        return;
    };
    viewer.set_class_name("mxgraph-viewer");
    let _ = viewer.set_attribute("data-mxgraph", &String::from(data));
    let _ = container.append_child(&viewer);

    if let Err(err) = process_elements() {
        tracing::warn!(element_id, ?err, "embedded diagram rendering failed");
    }
}
