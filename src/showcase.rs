use rust_embed::Embed;
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use serde::Deserialize;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
use crate::highlight::PulldownHighlighter;
#[cfg(feature = "ssr")]
use crate::selector::{Panel, Registry, Selector};
use crate::selector::SelectorError;

/// Tab shown when the expertise section first renders.
pub const DEFAULT_DEMO: &str = "signals";

/// Rendered panels and their front matter `order`, keyed by file name.
#[cfg(feature = "ssr")]
pub static GLOBAL_PANEL_CACHE: LazyLock<DashMap<String, (u32, Panel)>> =
    LazyLock::new(DashMap::new);
#[cfg(feature = "ssr")]
static HIGHLIGHTER: LazyLock<PulldownHighlighter> = LazyLock::new(PulldownHighlighter::new);

#[derive(Embed)]
#[folder = "showcase"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct ShowcaseAssets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    language: String,
    order: u32,
    benefits: Vec<String>,
}

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("showcase file {0:?} not found")]
    NotFound(String),
    #[error("couldn't parse showcase file {0:?}")]
    Parse(String),
    #[cfg(feature = "ssr")]
    #[error(transparent)]
    Highlight(#[from] crate::highlight::HighlightError),
    #[error(transparent)]
    Registry(#[from] SelectorError),
}

/// Panel key for an embedded file name: the file stem.
pub fn panel_key(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}

pub fn panel_files() -> Vec<String> {
    ShowcaseAssets::iter().map(|s| s.to_string()).collect()
}

#[cfg(feature = "ssr")]
fn render_panel(
    name: &str,
    highlighter: &PulldownHighlighter,
) -> Result<(u32, Panel), ShowcaseError> {
    let file = ShowcaseAssets::get(name).ok_or_else(|| ShowcaseError::NotFound(name.to_string()))?;
    let content = String::from_utf8(file.data.into_owned())
        .map_err(|_| ShowcaseError::Parse(name.to_string()))?;

    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(&content)
        .ok_or_else(|| ShowcaseError::Parse(name.to_string()))?;

    let parser = Parser::new_ext(&fm.content, Options::all());
    let events = highlighter.highlight(parser)?;

    let mut body = String::new();
    pulldown_cmark::html::push_html(&mut body, events.into_iter());

    let panel = Panel {
        key: panel_key(name).to_string(),
        title: fm.data.title,
        description: fm.data.description,
        language: fm.data.language,
        body,
        auxiliary_items: fm.data.benefits,
    };
    Ok((fm.data.order, panel))
}

#[cfg(feature = "ssr")]
fn cached_panel(name: &str) -> Result<(u32, Panel), ShowcaseError> {
    if let Some(entry) = GLOBAL_PANEL_CACHE.get(name) {
        return Ok(entry.clone());
    }
    let rendered = render_panel(name, &HIGHLIGHTER)?;
    GLOBAL_PANEL_CACHE.insert(name.to_string(), rendered.clone());
    Ok(rendered)
}

/// Loads a single embedded panel, rendering it on first use.
#[cfg(feature = "ssr")]
pub fn load_panel(name: &str) -> Result<Panel, ShowcaseError> {
    cached_panel(name).map(|(_, panel)| panel)
}

/// Builds the registry from every embedded file, ordered by front matter
/// `order` and then by key.
#[cfg(feature = "ssr")]
pub fn load_registry() -> Result<Registry, ShowcaseError> {
    let mut panels = panel_files()
        .iter()
        .map(|name| cached_panel(name))
        .collect::<Result<Vec<_>, ShowcaseError>>()?;
    panels.sort_by(|(a_order, a), (b_order, b)| a_order.cmp(b_order).then(a.key.cmp(&b.key)));

    log::debug!("loaded {} showcase panels", panels.len());
    Ok(Registry::new(panels.into_iter().map(|(_, p)| p).collect())?)
}

#[cfg(feature = "ssr")]
pub fn load_selector() -> Result<Selector, ShowcaseError> {
    Ok(Selector::new(load_registry()?, DEFAULT_DEMO)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_key() {
        assert_eq!(panel_key("signals.md"), "signals");
        assert_eq!(panel_key("architecture"), "architecture");
    }

    #[test]
    fn test_default_demo_is_embedded() {
        let files = panel_files();
        assert!(files.iter().all(|f| f.ends_with(".md")));
        assert!(files.iter().any(|f| panel_key(f) == DEFAULT_DEMO));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_registry_order() {
        let registry = load_registry().unwrap();
        let keys = registry.iter().map(|p| p.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["signals", "forms", "rxjs", "architecture"]);
        let titles = registry.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Angular Signals", "Reactive Forms", "RxJS Patterns", "Architecture"]
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_panel() {
        let panel = load_panel("rxjs.md").unwrap();
        assert_eq!(panel.key, "rxjs");
        assert_eq!(panel.language, "typescript");
        assert_eq!(panel.auxiliary_items.len(), 4);
        assert_eq!(panel.auxiliary_items[0], "switchMap for search/autocomplete");
        assert!(panel.body.contains("<pre"));
        assert!(!panel.body.contains("benefits:"));
        // second load comes from the cache
        assert_eq!(load_panel("rxjs.md").unwrap(), panel);

        assert!(matches!(
            load_panel("ngrx.md"),
            Err(ShowcaseError::NotFound(_))
        ));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_load_selector() {
        let mut selector = load_selector().unwrap();
        assert_eq!(selector.current_panel().title, "Angular Signals");
        selector.select("rxjs");
        assert_eq!(selector.current_panel().title, "RxJS Patterns");
    }
}
