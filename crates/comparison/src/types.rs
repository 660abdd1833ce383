//! Shared types for cross-marketplace price comparison.
//!
//! This module defines the vocabulary both marketplaces are normalized to:
//! wear tiers and the marketplaces the fee model knows about.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Wear Tiers
// =============================================================================

/// Cosmetic condition grade of an item.
///
/// Ordered from best to worst condition.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WearTier {
    #[serde(rename = "Factory New")]
    FactoryNew,
    #[serde(rename = "Minimal Wear")]
    MinimalWear,
    #[default]
    #[serde(rename = "Field-Tested")]
    FieldTested,
    #[serde(rename = "Well-Worn")]
    WellWorn,
    #[serde(rename = "Battle-Scarred")]
    BattleScarred,
}

impl WearTier {
    /// All tiers in display order.
    pub const ALL: [WearTier; 5] = [
        Self::FactoryNew,
        Self::MinimalWear,
        Self::FieldTested,
        Self::WellWorn,
        Self::BattleScarred,
    ];

    /// Returns the literal name used inside market hash names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FactoryNew => "Factory New",
            Self::MinimalWear => "Minimal Wear",
            Self::FieldTested => "Field-Tested",
            Self::WellWorn => "Well-Worn",
            Self::BattleScarred => "Battle-Scarred",
        }
    }

    /// Position in [`WearTier::ALL`].
    #[must_use]
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for WearTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WearTier {
    type Err = UnknownName;

    /// Parses one of the five literal tier names. Exact match only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

// =============================================================================
// Marketplaces
// =============================================================================

/// Marketplaces with known fee defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    /// Steam Community Market, the reference price source.
    Steam,
    /// Skinport, matched through its bulk catalog.
    Skinport,
    /// Skinbaron.
    Skinbaron,
}

impl Marketplace {
    /// Returns the key used in fee schedules.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steam => "steam",
            Self::Skinport => "skinport",
            Self::Skinbaron => "skinbaron",
        }
    }

    /// Returns true for the zero-buyer-fee reference source.
    #[must_use]
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Steam)
    }
}

impl std::fmt::Display for Marketplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Names must equal the fee schedule keys exactly; `"Steam"` is unknown.
impl FromStr for Marketplace {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steam" => Ok(Self::Steam),
            "skinport" => Ok(Self::Skinport),
            "skinbaron" => Ok(Self::Skinbaron),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// Returned when a name does not map to a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: {0}")]
pub struct UnknownName(pub String);
