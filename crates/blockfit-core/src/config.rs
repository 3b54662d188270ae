use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the rotated fit test relates to the placed geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationMode {
    /// A block is accepted if it fits either way round, but is always placed
    /// with its input width/height (clipped to the container) and never marked
    /// as rotated. A rotated-only fit can therefore overhang its free region.
    #[default]
    Faithful,
    /// Prefer the normal fit; when only the rotated fit passes, swap width and
    /// height and mark the placement as [`crate::model::Rotation::Quarter`].
    Apply,
    /// Only the normal fit test is used.
    Disabled,
}

impl FromStr for RotationMode {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "apply" => Ok(Self::Apply),
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            _ => Err(()),
        }
    }
}

/// Packing order. All orders are stable, so ties keep input order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    AreaDesc,
    MaxSideDesc,
    HeightDesc,
    WidthDesc,
    None,
}

impl FromStr for SortOrder {
    type Err = ();
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "area_desc" => Ok(Self::AreaDesc),
            "max_side_desc" => Ok(Self::MaxSideDesc),
            "height_desc" => Ok(Self::HeightDesc),
            "width_desc" => Ok(Self::WidthDesc),
            "none" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    #[serde(default)]
    pub rotation: RotationMode,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl PackerConfig {
    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn rotation(mut self, v: RotationMode) -> Self {
        self.cfg.rotation = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
