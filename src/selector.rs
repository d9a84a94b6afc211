use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("default panel {0:?} is not registered")]
    UnknownDefault(String),
    #[error("panel {0:?} is registered more than once")]
    DuplicateKey(String),
    #[error("panel keys must not be empty")]
    EmptyKey,
}

/// One selectable entry in a tabbed view.
///
/// `body` is already rendered markup and is passed through to the view as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub key: String,
    pub title: String,
    pub description: String,
    pub language: String,
    pub body: String,
    pub auxiliary_items: Vec<String>,
}

/// What a tab bar needs to draw one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSummary {
    pub key: String,
    pub title: String,
}

/// Panels in display order, keyed by [`Panel::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Panel>", into = "Vec<Panel>")]
pub struct Registry {
    panels: Vec<Panel>,
}

impl Registry {
    pub fn new(panels: Vec<Panel>) -> Result<Self, SelectorError> {
        for (i, panel) in panels.iter().enumerate() {
            if panel.key.is_empty() {
                return Err(SelectorError::EmptyKey);
            }
            if panels[..i].iter().any(|p| p.key == panel.key) {
                return Err(SelectorError::DuplicateKey(panel.key.clone()));
            }
        }
        Ok(Self { panels })
    }

    pub fn get(&self, key: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.panels.iter().position(|p| p.key == key)
    }
}

impl TryFrom<Vec<Panel>> for Registry {
    type Error = SelectorError;

    fn try_from(panels: Vec<Panel>) -> Result<Self, Self::Error> {
        Self::new(panels)
    }
}

impl From<Registry> for Vec<Panel> {
    fn from(registry: Registry) -> Self {
        registry.panels
    }
}

#[derive(Serialize, Deserialize)]
struct SelectorParts {
    registry: Registry,
    current: String,
}

/// A fixed [`Registry`] plus the one panel that is currently active.
///
/// The active key always names a registered panel: construction rejects an
/// unknown default and [`Selector::select`] ignores unknown keys. This also
/// holds for selectors that arrive through serde, so a hydrated client can
/// trust what the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectorParts", into = "SelectorParts")]
pub struct Selector {
    registry: Registry,
    current: usize,
}

impl Selector {
    pub fn new(registry: Registry, default_key: &str) -> Result<Self, SelectorError> {
        let current = registry
            .position(default_key)
            .ok_or_else(|| SelectorError::UnknownDefault(default_key.to_string()))?;
        Ok(Self { registry, current })
    }

    /// Makes `key` the active panel. Unknown keys leave the selection alone.
    ///
    /// Returns whether `key` is active afterwards.
    pub fn select(&mut self, key: &str) -> bool {
        match self.registry.position(key) {
            Some(i) => {
                self.current = i;
                true
            }
            None => {
                log::debug!("ignoring selection of unregistered panel {key:?}");
                false
            }
        }
    }

    pub fn current_panel(&self) -> &Panel {
        &self.registry.panels[self.current]
    }

    pub fn current_key(&self) -> &str {
        &self.current_panel().key
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.current_key() == key
    }

    pub fn list_panels(&self) -> Vec<PanelSummary> {
        self.registry
            .iter()
            .map(|p| PanelSummary {
                key: p.key.clone(),
                title: p.title.clone(),
            })
            .collect()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Always false: a selector cannot be built over an empty registry.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl TryFrom<SelectorParts> for Selector {
    type Error = SelectorError;

    fn try_from(parts: SelectorParts) -> Result<Self, Self::Error> {
        Self::new(parts.registry, &parts.current)
    }
}

impl From<Selector> for SelectorParts {
    fn from(selector: Selector) -> Self {
        let current = selector.current_key().to_string();
        Self {
            registry: selector.registry,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(key: &str, title: &str) -> Panel {
        Panel {
            key: key.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
            language: "typescript".to_string(),
            body: format!("<pre>{key}</pre>"),
            auxiliary_items: vec![format!("{key} one"), format!("{key} two")],
        }
    }

    fn demo_registry() -> Registry {
        Registry::new(vec![
            panel("signals", "Angular Signals"),
            panel("forms", "Reactive Forms"),
            panel("rxjs", "RxJS Patterns"),
            panel("architecture", "Architecture"),
        ])
        .expect("demo registry should be valid")
    }

    #[test]
    fn test_demo_scenario() {
        let mut selector = Selector::new(demo_registry(), "signals").unwrap();
        assert_eq!(selector.current_panel().title, "Angular Signals");

        assert!(selector.select("rxjs"));
        assert_eq!(selector.current_panel().title, "RxJS Patterns");

        assert!(!selector.select("nonexistent"));
        assert_eq!(selector.current_panel().title, "RxJS Patterns");
    }

    #[test]
    fn test_every_registered_default() {
        let registry = demo_registry();
        for panel in registry.iter() {
            let selector = Selector::new(registry.clone(), &panel.key).unwrap();
            assert_eq!(selector.current_panel(), panel);
            assert_eq!(selector.current_key(), panel.key);
        }
    }

    #[test]
    fn test_unknown_default() {
        for key in ["", "Signals", "signals ", "router"] {
            let err = Selector::new(demo_registry(), key).unwrap_err();
            assert_eq!(err, SelectorError::UnknownDefault(key.to_string()));
        }

        let empty = Registry::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(Selector::new(empty, "signals").is_err());
    }

    #[test]
    fn test_select_registered() {
        let registry = demo_registry();
        let mut selector = Selector::new(registry.clone(), "signals").unwrap();
        for panel in registry.iter().rev() {
            assert!(selector.select(&panel.key));
            assert_eq!(selector.current_panel(), registry.get(&panel.key).unwrap());
            assert!(selector.is_selected(&panel.key));
        }
        // reselecting is fine
        assert!(selector.select("signals"));
        assert!(selector.select("signals"));
        assert_eq!(selector.current_key(), "signals");
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut selector = Selector::new(demo_registry(), "forms").unwrap();
        let before = selector.clone();
        for key in ["", "FORMS", "nonexistent", "rxjs/"] {
            selector.select(key);
            assert_eq!(selector, before);
        }
    }

    #[test]
    fn test_list_panels() {
        let selector = Selector::new(demo_registry(), "architecture").unwrap();
        let first = selector.list_panels();
        let keys = first.iter().map(|s| s.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["signals", "forms", "rxjs", "architecture"]);
        assert_eq!(first.len(), selector.len());
        assert_eq!(first[1].title, "Reactive Forms");
        // selection doesn't affect tab order
        assert_eq!(selector.list_panels(), first);
    }

    #[test]
    fn test_registry_validation() {
        let dup = Registry::new(vec![
            panel("signals", "Angular Signals"),
            panel("forms", "Reactive Forms"),
            panel("signals", "Signals Again"),
        ]);
        assert_eq!(
            dup.unwrap_err(),
            SelectorError::DuplicateKey("signals".to_string())
        );

        let empty_key = Registry::new(vec![panel("", "Nameless")]);
        assert_eq!(empty_key.unwrap_err(), SelectorError::EmptyKey);
    }

    #[test]
    fn test_registry_iter_both_ends() {
        let registry = demo_registry();
        let iter = registry.iter();
        assert_eq!(iter.len(), 4);
        let reversed = registry.iter().rev().map(|p| p.key.as_str()).collect::<Vec<_>>();
        assert_eq!(reversed, vec!["architecture", "rxjs", "forms", "signals"]);
    }

    #[test]
    fn test_unknown_select_after_serde() {
        let selector = Selector::new(demo_registry(), "forms").unwrap();
        let json = serde_json::to_string(&selector).unwrap();
        let mut back: Selector = serde_json::from_str(&json).unwrap();
        assert_eq!(back.list_panels(), selector.list_panels());

        assert!(!back.select("nonexistent"));
        assert_eq!(back.current_key(), "forms");
    }

    #[test]
    fn test_serde_rejects_empty_key() {
        let mut panels = serde_json::to_value(demo_registry()).unwrap();
        panels[2]["key"] = serde_json::json!("");
        let payload = serde_json::json!({ "registry": panels, "current": "signals" });
        assert!(serde_json::from_value::<Selector>(payload).is_err());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = demo_registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("rxjs"));
        assert!(!registry.contains("ngrx"));
        assert_eq!(registry.get("forms").unwrap().title, "Reactive Forms");
        assert!(registry.get("ngrx").is_none());
    }

    #[test]
    fn test_serde_keeps_selection() {
        let mut selector = Selector::new(demo_registry(), "signals").unwrap();
        selector.select("architecture");
        let json = serde_json::to_string(&selector).unwrap();
        let back: Selector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selector);
        assert_eq!(back.current_panel().title, "Architecture");
    }

    #[test]
    fn test_serde_rejects_bad_payloads() {
        let registry = serde_json::to_value(demo_registry()).unwrap();

        let unknown = serde_json::json!({ "registry": registry, "current": "nonexistent" });
        assert!(serde_json::from_value::<Selector>(unknown).is_err());

        let mut panels = registry.as_array().unwrap().clone();
        panels.push(panels[0].clone());
        let dup = serde_json::json!({ "registry": panels, "current": "signals" });
        assert!(serde_json::from_value::<Selector>(dup).is_err());
    }
}
