//! Road-element palette and scenario backgrounds.

use serde::{Deserialize, Serialize};

/// Reference to an icon asset chosen from the palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl From<&RoadElement> for ImageSource {
    fn from(element: &RoadElement) -> Self {
        ImageSource::new(element.key)
    }
}

/// Palette grouping for road elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Regulatory,
    Warning,
    Information,
    Marking,
}

/// An entry in the road-element palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadElement {
    /// Asset key, stable across releases.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    pub category: ElementCategory,
}

impl RoadElement {
    const fn new(key: &'static str, name: &'static str, category: ElementCategory) -> Self {
        Self { key, name, category }
    }

    /// All palette entries in display order.
    pub fn all() -> &'static [RoadElement] {
        ROAD_ELEMENTS
    }

    /// Look up an entry by asset key.
    pub fn by_key(key: &str) -> Option<&'static RoadElement> {
        ROAD_ELEMENTS.iter().find(|e| e.key == key)
    }

    /// Entries of one category, in display order.
    pub fn in_category(category: ElementCategory) -> impl Iterator<Item = &'static RoadElement> {
        ROAD_ELEMENTS.iter().filter(move |e| e.category == category)
    }

    pub fn image(&self) -> ImageSource {
        ImageSource::from(self)
    }
}

use ElementCategory::*;

pub const ROAD_ELEMENTS: &[RoadElement] = &[
    RoadElement::new("stop", "Stop", Regulatory),
    RoadElement::new("give_way", "Give way", Regulatory),
    RoadElement::new("no_entry", "No entry", Regulatory),
    RoadElement::new("speed_limit_30", "Speed limit 30", Regulatory),
    RoadElement::new("speed_limit_50", "Speed limit 50", Regulatory),
    RoadElement::new("no_overtaking", "No overtaking", Regulatory),
    RoadElement::new("roundabout_ahead", "Roundabout ahead", Warning),
    RoadElement::new("pedestrian_crossing_ahead", "Pedestrian crossing ahead", Warning),
    RoadElement::new("traffic_signals_ahead", "Traffic signals ahead", Warning),
    RoadElement::new("merge_from_right", "Merging traffic", Warning),
    RoadElement::new("priority_road", "Priority road", Information),
    RoadElement::new("one_way", "One way", Information),
    RoadElement::new("motorway", "Motorway", Information),
    RoadElement::new("arrow_straight", "Lane arrow straight", Marking),
    RoadElement::new("arrow_left", "Lane arrow left", Marking),
    RoadElement::new("arrow_right", "Lane arrow right", Marking),
    RoadElement::new("zebra", "Zebra crossing", Marking),
    RoadElement::new("stop_line", "Stop line", Marking),
];

/// Road-layout background a sketch is drawn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Blank,
    Intersection,
    Roundabout,
    MotorwayMerge,
    PedestrianCrossing,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Blank,
        Scenario::Intersection,
        Scenario::Roundabout,
        Scenario::MotorwayMerge,
        Scenario::PedestrianCrossing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Scenario::Blank => "blank",
            Scenario::Intersection => "intersection",
            Scenario::Roundabout => "roundabout",
            Scenario::MotorwayMerge => "motorway_merge",
            Scenario::PedestrianCrossing => "pedestrian_crossing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}
