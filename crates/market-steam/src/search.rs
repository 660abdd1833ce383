//! Market search helpers: markup stripping, icon URLs, and grouping of
//! search hits by base item.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use skinscan_comparison::{ItemIdentifier, WearTier};

use crate::types::SearchResult;

/// Steam CDN prefix for item icons.
pub const STEAM_IMAGE_PREFIX: &str = "https://community.cloudflare.steamstatic.com/economy/image/";

/// Default square icon size in pixels.
pub const DEFAULT_ICON_SIZE: u32 = 256;

/// Number of sample hits kept per group.
pub const MAX_GROUP_SAMPLES: usize = 3;

lazy_static! {
    static ref HTML_TAG_RE: Regex = Regex::new(r"<[^>]*>").expect("tag pattern compiles");
}

/// Removes `<...>` tags and trims the result.
///
/// A `<` without a closing `>` is kept as text.
#[must_use]
pub fn strip_html(s: &str) -> String {
    HTML_TAG_RE.replace_all(s, "").trim().to_string()
}

/// Builds the CDN URL for an icon path. Empty paths yield `None`.
#[must_use]
pub fn icon_image_url(icon_url: Option<&str>, size: u32) -> Option<String> {
    let icon = icon_url.filter(|s| !s.is_empty())?;
    Some(format!("{STEAM_IMAGE_PREFIX}{icon}/{size}fx{size}f"))
}

/// Search hits sharing a base name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchGroup {
    pub base_name: String,
    /// First non-empty icon seen in the group.
    pub icon_url: Option<String>,
    /// Wears seen, in tier order.
    pub seen_wears: Vec<WearTier>,
    pub seen_stattrak: bool,
    pub seen_nonstattrak: bool,
    pub samples: Vec<SearchResult>,
}

impl SearchGroup {
    fn new(base_name: String) -> Self {
        Self {
            base_name,
            icon_url: None,
            seen_wears: Vec::new(),
            seen_stattrak: false,
            seen_nonstattrak: false,
            samples: Vec::new(),
        }
    }

    /// Wear to preselect: the best seen wear, else Field-Tested.
    #[must_use]
    pub fn default_wear(&self) -> WearTier {
        self.seen_wears.first().copied().unwrap_or_default()
    }

    /// Market hash name for a wear and edition of this group.
    #[must_use]
    pub fn market_hash_name(&self, wear: WearTier, stattrak: bool) -> String {
        ItemIdentifier::compose(&self.base_name, wear, stattrak)
    }

    #[must_use]
    pub fn image_url(&self, size: u32) -> Option<String> {
        icon_image_url(self.icon_url.as_deref(), size)
    }
}

/// Groups search hits by base name.
///
/// Groups are returned sorted case-insensitively by base name. Hits with an
/// empty base name fall back to their market hash name.
#[must_use]
pub fn group_by_base(results: &[SearchResult]) -> Vec<SearchGroup> {
    let mut groups: HashMap<String, (SearchGroup, BTreeSet<WearTier>)> = HashMap::new();

    for result in results {
        let base = if result.base_name.is_empty() {
            &result.market_hash_name
        } else {
            &result.base_name
        };
        if base.is_empty() {
            continue;
        }

        let (group, wears) = groups
            .entry(base.clone())
            .or_insert_with(|| (SearchGroup::new(base.clone()), BTreeSet::new()));

        if let Some(wear) = result.wear {
            wears.insert(wear);
        }
        if result.is_stattrak {
            group.seen_stattrak = true;
        } else {
            group.seen_nonstattrak = true;
        }
        if group.samples.len() < MAX_GROUP_SAMPLES {
            group.samples.push(result.clone());
        }
        if group.icon_url.is_none() {
            group.icon_url.clone_from(&result.icon_url);
        }
    }

    let mut out: Vec<SearchGroup> = groups
        .into_values()
        .map(|(mut group, wears)| {
            group.seen_wears = wears.into_iter().collect();
            group
        })
        .collect();
    out.sort_by(|a, b| {
        a.base_name
            .to_lowercase()
            .cmp(&b.base_name.to_lowercase())
            .then_with(|| a.base_name.cmp(&b.base_name))
    });
    out
}
