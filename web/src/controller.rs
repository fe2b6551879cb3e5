//! Host-agnostic `nav-search` component.
//!
//! The DOM layer gathers what the element declares into a [`SetupRequest`],
//! applies the returned [`InputRewire`], and afterwards forwards input, timer
//! and key events here. Every decision about what the results container and
//! the input should look like is made in this module.

use navsearch_core::SetupError;
use navsearch_core::debounce::{Debouncer, Timer};
use navsearch_core::navigator::{self, Focus, KeyAction, KeyOutcome, NavKey};
use navsearch_core::types::{InstanceId, NavSearchConfig, RawEntry};
use navsearch_search::{Index, SearchConfig, SearchEngine, SearchOutcome, SearchQuery, Template};

pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// The search input as found in the element's subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputControl {
    /// Value of the input's `list` attribute.
    pub list: Option<String>,
}

/// Entries of the resolved source list, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceList {
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct SetupRequest {
    pub input: Option<InputControl>,
    pub source: Option<SourceList>,
    /// Inner markup of the element's `<template>`, if any.
    pub template: Option<String>,
}

/// Attribute changes the host applies to the input once setup succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRewire {
    /// Always removed to suppress native suggestions.
    pub remove_attribute: &'static str,
    /// Recovery attribute and the original `list` value.
    pub old_list: Option<(String, String)>,
    pub controls: String,
    pub expanded: bool,
}

impl InputRewire {
    pub fn set_attributes(&self) -> Vec<(&str, String)> {
        let mut attributes = Vec::with_capacity(3);
        if let Some((name, value)) = &self.old_list {
            attributes.push((name.as_str(), value.clone()));
        }
        attributes.push((ARIA_CONTROLS, self.controls.clone()));
        attributes.push((ARIA_EXPANDED, self.expanded.to_string()));
        attributes
    }
}

/// New content for the results container plus the `expanded` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderUpdate {
    pub html: String,
    pub expanded: bool,
}

pub struct Controller<Tm: Timer> {
    instance_id: InstanceId,
    results_id: String,
    engine: SearchEngine,
    expanded: bool,
    debouncer: Debouncer<String, Tm>,
}

/// Create operations.
impl<Tm: Timer> Controller<Tm> {
    pub fn setup(
        config: &NavSearchConfig,
        request: SetupRequest,
        timer: Tm,
    ) -> Result<(Self, InputRewire), SetupError> {
        let input = request.input.ok_or(SetupError::MissingInput)?;
        let source = request.source.ok_or_else(|| SetupError::MissingSourceList {
            list: input.list.clone(),
        })?;

        let search_config = SearchConfig::from(&config.search);
        let index = Index::build(source.entries, &search_config.separator);
        let template = request.template.as_deref().and_then(Template::parse);

        let instance_id = InstanceId::new();
        let results_id = instance_id.results_id(&config.element.tag_name);

        tracing::debug!(
            instance = %instance_id,
            options = index.len(),
            template = template.is_some(),
            "nav-search ready"
        );

        let rewire = InputRewire {
            remove_attribute: "list",
            old_list: input
                .list
                .map(|list| (config.element.old_list_attribute.clone(), list)),
            controls: results_id.clone(),
            expanded: false,
        };

        let controller = Self {
            instance_id,
            results_id,
            engine: SearchEngine::new(index, template, search_config),
            expanded: false,
            debouncer: Debouncer::new(timer, config.debounce()),
        };

        Ok((controller, rewire))
    }
}

/// Event operations.
impl<Tm: Timer> Controller<Tm> {
    /// Restarts the quiet period with the latest input value.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.debouncer.schedule(value.into());
    }

    /// The debounce timer elapsed. `None` if nothing was pending.
    pub fn on_timer(&mut self) -> Option<RenderUpdate> {
        let value = self.debouncer.fire()?;
        Some(self.apply_query(&value))
    }

    /// Filters immediately, bypassing the debounce.
    pub fn apply_query(&mut self, input: &str) -> RenderUpdate {
        let outcome = self.engine.search(&SearchQuery::parse(input));
        match &outcome {
            SearchOutcome::Cleared => self.expanded = false,
            SearchOutcome::Rendered(_) => self.expanded = true,
            SearchOutcome::NoMatch => {
                if self.engine.config().collapse_on_no_match {
                    self.expanded = false;
                }
            }
        }
        RenderUpdate {
            html: outcome.html().to_string(),
            expanded: self.expanded,
        }
    }

    /// `key` is a `KeyboardEvent.key` value; `result_count` the number of
    /// rendered result items.
    pub fn on_key(&mut self, focus: Focus, key: &str, result_count: usize) -> KeyOutcome {
        let Some(key) = NavKey::from_key_value(key) else {
            return KeyOutcome::ignored();
        };
        let outcome = navigator::navigate(focus, key, result_count);
        if let Some(KeyAction::Collapse { .. }) = outcome.action {
            self.collapse();
        }
        tracing::trace!(instance = %self.instance_id, ?focus, ?key, ?outcome, "key");
        outcome
    }

    /// Marks the results collapsed and drops any pending input.
    pub fn collapse(&mut self) {
        self.expanded = false;
        self.debouncer.cancel();
    }

    /// Cancels the pending timer. Call before the host drops the instance.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
    }
}

/// Accessors.
impl<Tm: Timer> Controller<Tm> {
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    pub fn results_id(&self) -> &str {
        &self.results_id
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn option_count(&self) -> usize {
        self.engine.index().len()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn timer(&self) -> &Tm {
        self.debouncer.timer()
    }

    pub fn timer_mut(&mut self) -> &mut Tm {
        self.debouncer.timer_mut()
    }
}
