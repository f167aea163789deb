//! Display attributes per transport mode.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Mode;

use super::decompose::SegmentKind;

/// How a segment is drawn and labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayAttributes {
    /// CSS color for the segment's line and badge
    pub color: String,
    /// Short human label, e.g. "Train"
    pub label: String,
}

impl DisplayAttributes {
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }
}

/// Immutable mapping from segment kind to display attributes.
///
/// Modes without an explicit entry fall back to a neutral style carrying
/// the mode's own label.
#[derive(Debug, Clone)]
pub struct ModeStyles {
    by_mode: HashMap<Mode, DisplayAttributes>,
    transit_group: DisplayAttributes,
    fallback_color: String,
}

const FALLBACK_COLOR: &str = "#6b7280";

impl ModeStyles {
    /// Build a mapping from explicit entries.
    pub fn new(
        by_mode: impl IntoIterator<Item = (Mode, DisplayAttributes)>,
        transit_group: DisplayAttributes,
    ) -> Self {
        Self {
            by_mode: by_mode.into_iter().collect(),
            transit_group,
            fallback_color: FALLBACK_COLOR.to_string(),
        }
    }

    /// Attributes for a single mode.
    pub fn for_mode(&self, mode: Mode) -> DisplayAttributes {
        self.by_mode
            .get(&mode)
            .cloned()
            .unwrap_or_else(|| DisplayAttributes::new(&self.fallback_color, mode.label()))
    }

    /// Attributes for a segment kind.
    pub fn for_kind(&self, kind: SegmentKind) -> DisplayAttributes {
        match kind {
            SegmentKind::Mode(mode) => self.for_mode(mode),
            SegmentKind::TransitGroup => self.transit_group.clone(),
        }
    }
}

impl Default for ModeStyles {
    /// Skånetrafiken-like palette.
    fn default() -> Self {
        let palette = [
            (Mode::Walk, "#9ca3af"),
            (Mode::Bicycle, "#16a34a"),
            (Mode::Bus, "#15803d"),
            (Mode::Coach, "#166534"),
            (Mode::Rail, "#7c3aed"),
            (Mode::Tram, "#0891b2"),
            (Mode::Subway, "#1d4ed8"),
            (Mode::Ferry, "#0369a1"),
            (Mode::Taxi, "#ca8a04"),
            (Mode::Car, "#52525b"),
        ];

        Self::new(
            palette
                .into_iter()
                .map(|(mode, color)| (mode, DisplayAttributes::new(color, mode.label()))),
            DisplayAttributes::new("#dc2626", "Public transport"),
        )
    }
}
