//! `nav-search` custom element.
//!
//! A searchable navigation list: the element's `input[type=search]` filters
//! the entries of the datalist it names, rendering matches into a results
//! container that can be walked with the arrow keys.
//!
//! ```html
//! <nav-search>
//!   <input type="search" list="pages">
//!   <template><a href="%value%">%label% <small>%data.section%</small></a></template>
//! </nav-search>
//! <datalist id="pages">
//!   <option value="/about" data-section="company">About us</option>
//! </datalist>
//! ```
//!
//! [`controller`] holds all behavior and builds on every target; the DOM
//! binding is compiled for `wasm32` only.

pub mod controller;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod element;

#[cfg(target_arch = "wasm32")]
pub use element::{define, define_with_config, registration, tag_name, version};

pub use controller::{
    Controller, InputControl, InputRewire, RenderUpdate, SetupRequest, SourceList,
};
