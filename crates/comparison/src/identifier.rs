//! Market hash name parsing.
//!
//! A market hash name such as `StatTrak™ AK-47 | Redline (Field-Tested)` is
//! the canonical identifier of an item on the reference marketplace. This
//! module decomposes it into base name, wear tier, and edition flags, and
//! composes identifiers back from those parts.
//!
//! Parsing is purely lexical. Fuzzy comparison lives in [`crate::matcher`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::WearTier;

/// Prefix marking a StatTrak™ item.
pub const STATTRAK_PREFIX: &str = "StatTrak™ ";

/// Prefix marking a Souvenir item.
pub const SOUVENIR_PREFIX: &str = "Souvenir ";

lazy_static! {
    /// Whitespace, then one of the five tier names in parentheses, at the end.
    static ref WEAR_SUFFIX_RE: Regex = Regex::new(
        r"\s\((Factory New|Minimal Wear|Field-Tested|Well-Worn|Battle-Scarred)\)\s*$"
    )
    .expect("wear pattern compiles");
}

/// A parsed market hash name.
///
/// `raw` is the source of truth; the remaining fields are derived from it.
/// Both edition flags are detected independently even though the
/// marketplace never sets both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemIdentifier {
    pub raw: String,
    pub base_name: String,
    pub wear: Option<WearTier>,
    pub is_stattrak: bool,
    pub is_souvenir: bool,
}

impl ItemIdentifier {
    /// Parses a market hash name.
    ///
    /// The StatTrak™ prefix is stripped first, then the Souvenir prefix from
    /// what remains. A wear tier is recognized only as a whitespace-preceded
    /// `(<tier>)` suffix naming one of the five literal tiers.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        let (is_stattrak, rest) = match trimmed.strip_prefix(STATTRAK_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (is_souvenir, rest) = match rest.strip_prefix(SOUVENIR_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let (base_name, wear) = match split_wear_suffix(rest) {
            Some((base, wear)) => (base.trim().to_string(), Some(wear)),
            None => (rest.trim().to_string(), None),
        };

        Self {
            raw: raw.to_string(),
            base_name,
            wear,
            is_stattrak,
            is_souvenir,
        }
    }

    /// Composes a market hash name: `"{base} ({wear})"`, prefixed with
    /// `StatTrak™ ` when flagged.
    ///
    /// There is no Souvenir counterpart. [`ItemIdentifier::parse`] gives back
    /// the same base only if the base is non-empty, has no edge whitespace,
    /// does not start with an edition prefix, and does not itself end in a
    /// wear suffix.
    #[must_use]
    pub fn compose(base_name: &str, wear: WearTier, stattrak: bool) -> String {
        let name = format!("{} ({})", base_name.trim(), wear);
        if stattrak {
            format!("{STATTRAK_PREFIX}{name}")
        } else {
            name
        }
    }

    /// Rebuilds the identifier from its parts.
    ///
    /// Returns `None` when the parts cannot be composed: no wear tier, or a
    /// Souvenir item.
    #[must_use]
    pub fn recompose(&self) -> Option<String> {
        if self.is_souvenir {
            return None;
        }
        let wear = self.wear?;
        Some(Self::compose(&self.base_name, wear, self.is_stattrak))
    }

    /// Returns true if recomposing reproduces `raw` byte-for-byte.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.recompose().as_deref() == Some(self.raw.as_str())
    }

    /// Returns the identifier for another wear tier of the same item.
    #[must_use]
    pub fn with_wear(&self, wear: WearTier) -> String {
        Self::compose(&self.base_name, wear, self.is_stattrak)
    }
}

impl std::fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Splits `name` into (text before the wear suffix, wear) when it ends with
/// whitespace followed by `(<tier>)`, ignoring trailing whitespace.
fn split_wear_suffix(name: &str) -> Option<(&str, WearTier)> {
    let caps = WEAR_SUFFIX_RE.captures(name)?;
    let suffix = caps.get(0)?;
    let wear = caps.get(1)?.as_str().parse().ok()?;
    Some((&name[..suffix.start()], wear))
}
