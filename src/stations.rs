//! senseBox registry for the hivebox temperature service.
//!
//! Defines the canonical list of openSenseMap boxes whose temperature
//! readings feed the `/temperature` average. This is the single source of
//! truth for box ids — configuration defaults and tests reference boxes
//! from here rather than hardcoding ids.

// ---------------------------------------------------------------------------
// Box metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitored senseBox.
pub struct SenseBox {
    /// 24-character openSenseMap box id (a MongoDB ObjectId).
    pub box_id: &'static str,
    /// Display name of the box.
    pub name: &'static str,
    /// Human-readable description of the box's role in the average.
    pub description: &'static str,
}

/// All senseBoxes monitored by this service.
///
/// Three independently operated boxes so that a single offline station or a
/// single misbehaving sensor cannot silence the `/temperature` endpoint on
/// its own.
pub static BOX_REGISTRY: &[SenseBox] = &[
    SenseBox {
        box_id: "5eba5fbad46fb8001b799786",
        name: "senseBox Stadtmitte",
        description: "Primary reference box. Outdoor mount in the city \
                      center, reports every few minutes under normal \
                      operation.",
    },
    SenseBox {
        box_id: "5c21ff8f919bf8001adf2488",
        name: "senseBox Westpark",
        description: "Second outdoor box a few kilometers west. Smooths out \
                      siting effects of the primary box and covers its \
                      outages.",
    },
    SenseBox {
        box_id: "5ade1acf223bd80019a1011c",
        name: "senseBox Hafen",
        description: "Oldest of the three boxes. Updates less frequently, \
                      so its readings are the most likely to fall outside \
                      the freshness window.",
    },
];

/// Returns the box ids of all monitored senseBoxes, suitable for seeding
/// `config::Config` defaults.
pub fn all_box_ids() -> Vec<&'static str> {
    BOX_REGISTRY.iter().map(|b| b.box_id).collect()
}

/// Looks up a box by id. Returns `None` if not found.
pub fn find_box(box_id: &str) -> Option<&'static SenseBox> {
    BOX_REGISTRY.iter().find(|b| b.box_id == box_id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
