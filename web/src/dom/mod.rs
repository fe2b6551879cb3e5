//! Reading the declarative markup and locating nodes.

mod listener;
mod timer;

pub(crate) use listener::EventListener;
pub(crate) use timer::WebTimer;

use crate::controller::{InputControl, SetupRequest, SourceList};
use navsearch_core::types::{DataSet, RawEntry};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, Node};

pub(crate) const INPUT_SELECTOR: &str = "input[type=search]";

/// What the host element declares, plus the live nodes the instance keeps.
pub(crate) struct Declared {
    pub input: Option<HtmlInputElement>,
    pub request: SetupRequest,
}

/// Collects the search input, the source list it names and the template.
///
/// The list is looked up by id in `document` here, once, and handed to the
/// controller as plain entries. `fallback_list_attr` covers re-attachment
/// after the `list` attribute was already moved aside.
pub(crate) fn read_declared(
    host: &HtmlElement,
    document: &Document,
    fallback_list_attr: &str,
) -> Declared {
    let input = host
        .query_selector(INPUT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    let Some(input_el) = input.as_ref() else {
        return Declared {
            input: None,
            request: SetupRequest::default(),
        };
    };

    let list = input_el
        .get_attribute("list")
        .or_else(|| input_el.get_attribute(fallback_list_attr))
        .filter(|name| !name.is_empty());

    let source = list
        .as_deref()
        .and_then(|name| find_datalist(document, name))
        .map(|datalist| read_source_list(&datalist));

    let template = host
        .query_selector("template")
        .ok()
        .flatten()
        .map(|el| el.inner_html());

    Declared {
        input,
        request: SetupRequest {
            input: Some(InputControl { list }),
            source,
            template,
        },
    }
}

/// First `datalist` with the given id; other elements sharing the id are skipped.
fn find_datalist(document: &Document, id: &str) -> Option<Element> {
    let lists = document.get_elements_by_tag_name("datalist");
    (0..lists.length())
        .filter_map(|i| lists.item(i))
        .find(|el| el.id() == id)
}

fn read_source_list(datalist: &Element) -> SourceList {
    let Ok(nodes) = datalist.query_selector_all("option") else {
        return SourceList::default();
    };

    let entries = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| read_entry(&option))
        .collect();

    SourceList { entries }
}

fn read_entry(option: &HtmlOptionElement) -> RawEntry {
    let names = option.get_attribute_names();
    let data = DataSet::from_attributes(names.iter().filter_map(|name| {
        let name = name.as_string()?;
        let value = option.get_attribute(&name)?;
        Some((name, value))
    }));

    RawEntry {
        value: option.value(),
        label: option.get_attribute("label"),
        text: option.text_content().unwrap_or_default(),
        data,
    }
}

pub(crate) fn set_attribute(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        tracing::warn!(name, ?err, "failed to set attribute");
    }
}

pub(crate) fn child_with_id(parent: &Element, id: &str) -> Option<Element> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|el| el.id() == id)
}

/// Position of the result item that contains `target`, if any.
///
/// A result item is a direct child of the results container; the event may
/// come from something nested inside one.
pub(crate) fn result_position(results: &Element, target: &Node) -> Option<usize> {
    let results_node: &Node = results.as_ref();
    let mut current = target.clone();
    loop {
        let parent = current.parent_node()?;
        if parent.is_same_node(Some(results_node)) {
            return child_index(results, &current);
        }
        current = parent;
    }
}

fn child_index(parent: &Element, child: &Node) -> Option<usize> {
    let children = parent.children();
    (0..children.length())
        .find(|&i| {
            children.item(i).is_some_and(|el| {
                let node: &Node = el.as_ref();
                child.is_same_node(Some(node))
            })
        })
        .map(|i| i as usize)
}

pub(crate) fn result_item(results: &Element, position: usize) -> Option<HtmlElement> {
    let position = u32::try_from(position).ok()?;
    results
        .children()
        .item(position)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub(crate) fn result_count(results: &Element) -> usize {
    results.child_element_count() as usize
}
