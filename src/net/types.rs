#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::format::date_only;

/// A generated room design summary from `GET /designs/{session}`.
///
/// The rendered image is deliberately absent here; it is fetched lazily by
/// id to keep the list payload small.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDesign {
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub metadata: Option<DesignMetadata>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Room type and style recorded when a design was generated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignMetadata {
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl RoomDesign {
    /// Picker label: `room_type - style (created date)`, with fallbacks
    /// when metadata is missing.
    pub fn label(&self) -> String {
        let (room_type, style) = self.metadata.as_ref().map_or(("Room", "Design"), |m| {
            (
                m.room_type.as_deref().unwrap_or("Room"),
                m.style.as_deref().unwrap_or("Design"),
            )
        });
        format!("{room_type} - {style} ({})", date_only(&self.created_at))
    }
}

/// A room photo previously uploaded by this session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedRoom {
    pub id: String,
    pub image: String,
}

/// A furniture library entry. Server-owned: created via upload, destroyed
/// via delete; the client only ever holds a refetched snapshot of the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryFurnitureItem {
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// One AI-generated shopping query for an item spotted in the photo.
/// Older backend revisions emit the key as `name` instead of `item_name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuery {
    #[serde(alias = "name")]
    pub item_name: String,
    pub query: String,
}

/// A matched shopping result, tagged with the item it was searched for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLink {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Body of `POST /place-furniture`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlacementResponse {
    pub image: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `POST /analyze-and-search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub generated_queries: Vec<GeneratedQuery>,
    #[serde(default)]
    pub product_links: Vec<ProductLink>,
}

#[derive(Debug, Deserialize)]
pub struct DesignsResponse {
    #[serde(default)]
    pub designs: Vec<RoomDesign>,
}

#[derive(Debug, Deserialize)]
pub struct RoomsResponse {
    #[serde(default)]
    pub rooms: Vec<UploadedRoom>,
}

#[derive(Debug, Deserialize)]
pub struct FurnitureListResponse {
    #[serde(default)]
    pub furnitures: Vec<LibraryFurnitureItem>,
}

#[derive(Debug, Deserialize)]
pub struct DesignImageResponse {
    pub image: String,
}
