//! About page content types

use serde::{Deserialize, Serialize};

/// Studio about-page content
///
/// Persisted as a single logical row; reads always return the same
/// record and updates merge into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    /// Studio story section
    pub story: String,

    /// Description of the studio space
    pub space: String,

    /// Studio philosophy section
    pub philosophy: String,

    /// Value cards rendered under the philosophy section
    pub value_cards: Vec<ValueCard>,

    /// Last modification timestamp (RFC 3339)
    pub updated_at: String,
}

/// A titled value card on the about page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCard {
    pub title: String,
    pub description: String,
}

/// Partial update of the about content; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAboutContent {
    pub story: Option<String>,
    pub space: Option<String>,
    pub philosophy: Option<String>,
    pub value_cards: Option<Vec<ValueCard>>,
}

impl AboutContent {
    /// The studio's launch copy, used to seed an empty store
    pub fn studio_default() -> Self {
        Self {
            story: "Playhouse is more than just a tattoo shop – it's a creative \
                    sanctuary where art meets skin, and stories come to life through ink."
                .to_string(),
            space: "Located in the heart of the city, our studio is designed to inspire \
                    creativity and provide a comfortable, luxurious environment for our \
                    clients and artists alike.\n\nEvery detail has been carefully \
                    considered to create an atmosphere that's both welcoming and \
                    professionally focused."
                .to_string(),
            philosophy: "At Playhouse, we believe that every tattoo tells a story. Our \
                         artists work closely with clients to bring their visions to \
                         life, creating unique pieces that stand the test of time."
                .to_string(),
            value_cards: vec![
                ValueCard {
                    title: "QUALITY".to_string(),
                    description: "Uncompromising attention to detail in every piece".to_string(),
                },
                ValueCard {
                    title: "SAFETY".to_string(),
                    description: "Strict sterilization and safety protocols".to_string(),
                },
                ValueCard {
                    title: "ARTISTRY".to_string(),
                    description: "Continuous evolution of craft and style".to_string(),
                },
            ],
            updated_at: super::now_rfc3339(),
        }
    }
}
