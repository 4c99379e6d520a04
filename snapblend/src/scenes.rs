//! Curated scene catalog.
//!
//! The picklist data the surrounding UI renders. `generate` itself only
//! requires a non-empty scene string; membership lookup is offered for
//! callers that want to enforce the catalog.

/// 场景类目：类目名 + 场景描述列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCategory {
    pub name: &'static str,
    pub descriptors: &'static [&'static str],
}

/// 固定类目表。
pub const CATALOG: &[SceneCategory] = &[
    SceneCategory {
        name: "Everyday",
        descriptors: &[
            "Café / Coffee shop",
            "Cozy living room",
            "Kitchen counter at home",
            "City sidewalk",
            "Home office desk",
        ],
    },
    SceneCategory {
        name: "Outdoors",
        descriptors: &[
            "Sunny park picnic",
            "Beach at golden hour",
            "Mountain trail overlook",
            "Rooftop terrace at sunset",
            "Botanical garden path",
        ],
    },
    SceneCategory {
        name: "Active",
        descriptors: &[
            "Gym workout session",
            "Morning run by the river",
            "Yoga studio",
            "Skate park afternoon",
        ],
    },
    SceneCategory {
        name: "Social",
        descriptors: &[
            "Brunch with friends",
            "House party",
            "Farmers market stroll",
            "Outdoor music festival",
        ],
    },
];

/// 类目名列表。
pub fn categories() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|category| category.name)
}

/// 全部场景描述（跨类目，按类目表顺序）。
pub fn descriptors() -> impl Iterator<Item = &'static str> {
    CATALOG
        .iter()
        .flat_map(|category| category.descriptors.iter().copied())
}

/// 场景是否在类目表内。
#[must_use]
pub fn contains(scene: &str) -> bool {
    descriptors().any(|descriptor| descriptor == scene)
}
