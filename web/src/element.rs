//! Custom element registration and per-instance DOM wiring.

use crate::controller::{ARIA_EXPANDED, Controller, RenderUpdate};
use crate::dom::{self, EventListener, WebTimer};
use navsearch_core::VERSION;
use navsearch_core::navigator::{Focus, KeyAction};
use navsearch_core::types::{InstanceId, NavSearchConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, HtmlInputElement, KeyboardEvent, Node};

/// Set on the host while an instance is mounted; holds its instance id.
const INSTANCE_ATTRIBUTE: &str = "data-nav-search-instance";

thread_local! {
    static CONFIG: RefCell<NavSearchConfig> = RefCell::new(NavSearchConfig::default());
    static INSTANCES: RefCell<HashMap<InstanceId, Rc<Instance>>> = RefCell::new(HashMap::new());
    static CLASS: RefCell<Option<js_sys::Function>> = const { RefCell::new(None) };
}

static LOGGING: Once = Once::new();

#[wasm_bindgen(inline_js = r#"
export function nav_search_class(connected, disconnected) {
  return class extends HTMLElement {
    connectedCallback() { connected(this); }
    disconnectedCallback() { disconnected(this); }
  };
}
"#)]
extern "C" {
    fn nav_search_class(
        connected: &js_sys::Function,
        disconnected: &js_sys::Function,
    ) -> js_sys::Function;
}

/// Registers the element under the configured tag name.
///
/// Returns `false` if the tag is already defined.
#[wasm_bindgen]
pub fn define() -> Result<bool, JsValue> {
    init_logging();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let registry = window.custom_elements();
    let tag = tag_name();

    if !registry.get(&tag).is_undefined() {
        tracing::debug!(tag, "custom element already defined");
        return Ok(false);
    }

    registry.define(&tag, &element_class())?;
    tracing::debug!(tag, version = VERSION, "custom element defined");
    Ok(true)
}

/// Like [`define`], with a TOML configuration. Invalid values fall back to defaults.
#[wasm_bindgen(js_name = defineWithConfig)]
pub fn define_with_config(config_toml: &str) -> Result<bool, JsValue> {
    init_logging();
    let config = NavSearchConfig::from_toml_str(config_toml)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    for problem in config.validate() {
        tracing::warn!(problem, "invalid nav-search config");
    }
    CONFIG.with(|c| *c.borrow_mut() = config.with_defaults_for_invalid());
    define()
}

/// `[tagName, class]`, for hosts that register elements themselves.
#[wasm_bindgen]
pub fn registration() -> js_sys::Array {
    js_sys::Array::of2(&JsValue::from_str(&tag_name()), &element_class())
}

#[wasm_bindgen(js_name = tagName)]
pub fn tag_name() -> String {
    CONFIG.with(|c| c.borrow().element.tag_name.clone())
}

#[wasm_bindgen]
pub fn version() -> String {
    VERSION.to_string()
}

fn init_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    });
}

fn element_class() -> js_sys::Function {
    CLASS.with(|class| {
        class
            .borrow_mut()
            .get_or_insert_with(|| {
                let connected = Closure::<dyn FnMut(HtmlElement)>::new(connected);
                let disconnected = Closure::<dyn FnMut(HtmlElement)>::new(disconnected);
                let class = nav_search_class(
                    connected.as_ref().unchecked_ref(),
                    disconnected.as_ref().unchecked_ref(),
                );
                // The class lives for the page; so do its callbacks.
                connected.forget();
                disconnected.forget();
                class
            })
            .clone()
    })
}

fn connected(host: HtmlElement) {
    if let Some(previous) = host.get_attribute(INSTANCE_ATTRIBUTE) {
        let previous = InstanceId::parse(&previous);
        if previous.is_some_and(|id| is_mounted_on(id, &host)) {
            return;
        }
        clear_copied_state(&host, previous);
    }
    if let Some(instance) = Instance::mount(&host) {
        INSTANCES.with(|instances| {
            instances
                .borrow_mut()
                .insert(instance.controller.borrow().instance_id(), instance.clone())
        });
    }
}

fn is_mounted_on(id: InstanceId, host: &HtmlElement) -> bool {
    let host: &Node = host.as_ref();
    INSTANCES.with(|instances| {
        instances
            .borrow()
            .get(&id)
            .is_some_and(|instance| instance.host.is_same_node(Some(host)))
    })
}

/// Strips what a cloned host carries over from the instance it was copied from.
fn clear_copied_state(host: &HtmlElement, previous: Option<InstanceId>) {
    tracing::debug!(?previous, "clearing copied nav-search state");
    if let Err(err) = host.remove_attribute(INSTANCE_ATTRIBUTE) {
        tracing::warn!(?err, "failed to remove instance attribute");
    }
    let Some(previous) = previous else {
        return;
    };
    if let Some(orphan) = dom::child_with_id(host, &previous.results_id(&tag_name())) {
        orphan.remove();
    }
}

fn disconnected(host: HtmlElement) {
    let Some(id) = host
        .get_attribute(INSTANCE_ATTRIBUTE)
        .and_then(|id| InstanceId::parse(&id))
    else {
        return;
    };
    let instance = INSTANCES.with(|instances| instances.borrow_mut().remove(&id));
    if let Some(instance) = instance {
        instance.unmount();
    }
}

/// One mounted element: its controller and the nodes it drives.
struct Instance {
    controller: RefCell<Controller<WebTimer>>,
    host: HtmlElement,
    input: HtmlInputElement,
    results: HtmlElement,
    listeners: RefCell<Vec<EventListener>>,
}

impl Instance {
    fn mount(host: &HtmlElement) -> Option<Rc<Self>> {
        let config = CONFIG.with(|c| c.borrow().clone());
        let window = web_sys::window()?;
        let document = window.document()?;

        let declared = dom::read_declared(host, &document, &config.element.old_list_attribute);
        let (controller, rewire) =
            match Controller::setup(&config, declared.request, WebTimer::new(window)) {
                Ok(setup) => setup,
                Err(err) => {
                    tracing::debug!(%err, "nav-search left inert");
                    return None;
                }
            };
        let input = declared.input?;

        let results = match document.create_element(&config.element.results_tag) {
            Ok(el) => el.dyn_into::<HtmlElement>().ok()?,
            Err(err) => {
                tracing::warn!(?err, "failed to create results container");
                return None;
            }
        };
        results.set_id(&rewire.controls);
        if let Err(err) = host.append_child(&results) {
            tracing::warn!(?err, "failed to append results container");
            return None;
        }

        if let Err(err) = input.remove_attribute(rewire.remove_attribute) {
            tracing::warn!(?err, "failed to remove list attribute");
        }
        for (name, value) in rewire.set_attributes() {
            dom::set_attribute(&input, name, &value);
        }
        dom::set_attribute(host, INSTANCE_ATTRIBUTE, &controller.instance_id().to_string());

        let instance = Rc::new(Self {
            controller: RefCell::new(controller),
            host: host.clone(),
            input,
            results,
            listeners: RefCell::new(Vec::new()),
        });
        instance.bind();
        Some(instance)
    }

    fn bind(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let on_timer = Closure::<dyn FnMut()>::new(move || {
            if let Some(instance) = weak.upgrade() {
                instance.on_timer();
            }
        });
        self.controller.borrow_mut().timer_mut().bind(on_timer);

        let weak = Rc::downgrade(self);
        let input = EventListener::attach(&self.input, "input", move |_: Event| {
            if let Some(instance) = weak.upgrade() {
                instance.on_input();
            }
        });

        let weak = Rc::downgrade(self);
        let keydown = EventListener::attach(&self.host, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(instance) = weak.upgrade() {
                instance.on_keydown(event);
            }
        });

        self.listeners
            .borrow_mut()
            .extend(input.into_iter().chain(keydown));
    }

    fn unmount(&self) {
        self.listeners.borrow_mut().clear();
        self.controller.borrow_mut().teardown();
        self.results.remove();
        if let Err(err) = self.host.remove_attribute(INSTANCE_ATTRIBUTE) {
            tracing::warn!(?err, "failed to remove instance attribute");
        }
    }

    fn on_input(&self) {
        let value = self.input.value();
        self.controller.borrow_mut().on_input(value);
    }

    fn on_timer(&self) {
        let update = self.controller.borrow_mut().on_timer();
        if let Some(update) = update {
            self.render(&update);
        }
    }

    fn render(&self, update: &RenderUpdate) {
        self.results.set_inner_html(&update.html);
        self.set_expanded(update.expanded);
    }

    fn set_expanded(&self, expanded: bool) {
        dom::set_attribute(
            &self.input,
            ARIA_EXPANDED,
            if expanded { "true" } else { "false" },
        );
    }

    fn on_keydown(&self, event: &KeyboardEvent) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let input_node: &Node = self.input.as_ref();
        let focus = if target.is_same_node(Some(input_node)) {
            Focus::Input
        } else if let Some(position) = dom::result_position(&self.results, &target) {
            Focus::Result(position)
        } else {
            return;
        };

        let count = dom::result_count(&self.results);
        let outcome = self
            .controller
            .borrow_mut()
            .on_key(focus, &event.key(), count);

        if outcome.prevent_default {
            event.prevent_default();
        }

        match outcome.action {
            Some(KeyAction::FocusResult(position)) => {
                if let Some(item) = dom::result_item(&self.results, position) {
                    let _ = item.focus();
                }
            }
            Some(KeyAction::Activate(position)) => {
                if let Some(item) = dom::result_item(&self.results, position) {
                    item.click();
                }
            }
            Some(KeyAction::Collapse {
                clear_input,
                refocus_input,
            }) => {
                self.set_expanded(false);
                self.results.set_inner_html("");
                if clear_input {
                    self.input.set_value("");
                }
                if refocus_input {
                    let _ = self.input.focus();
                }
            }
            None => {}
        }
    }
}
