#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::error::ApiError;
use crate::net::forms::{FurnitureRef, PlaceFurnitureRequest, RoomRef};

/// Where the room half of a composition comes from.
///
/// Exactly one variant can be active at a time; selecting a new source
/// replaces the previous one wholesale, so a remote-id pick and a local
/// file can never coexist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomSource {
    /// A generated design by id. Its image is fetched lazily.
    Generated { design_id: String },
    /// A previously uploaded room photo.
    Uploaded { room_id: String },
    /// A local file picked this session, not yet persisted server-side.
    /// Held while the immediate room upload is in flight.
    LocalFile { name: String, preview_url: String },
}

/// Where the furniture half comes from: the library, or a raw local
/// file submitted inline with the placement request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FurnitureSource {
    Library { id: String },
    LocalFile {
        name: String,
        mime: String,
        size: u64,
        preview_url: String,
    },
}

/// Current picks for the placement screen.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    pub room: Option<RoomSource>,
    /// Resolved preview for the selected room: a remote URL, data URL, or
    /// local object URL. Dropped on every re-selection so a stale image
    /// can never be shown against a new pick.
    pub room_image: Option<String>,
    pub furniture: Option<FurnitureSource>,
    pub description: String,
}

impl SelectionState {
    /// Select a room source, clearing the previous variant and any
    /// resolved preview. A local file carries its own preview.
    pub fn select_room(&mut self, source: RoomSource) {
        self.room_image = match &source {
            RoomSource::LocalFile { preview_url, .. } => Some(preview_url.clone()),
            RoomSource::Generated { .. } | RoomSource::Uploaded { .. } => None,
        };
        self.room = Some(source);
    }

    /// Attach a lazily fetched image to the current room selection.
    pub fn resolve_room_image(&mut self, url: String) {
        self.room_image = Some(url);
    }

    /// Select a furniture source, clearing the previous variant.
    pub fn select_furniture(&mut self, source: FurnitureSource) {
        self.furniture = Some(source);
    }

    /// Clear the room selection and its preview, used when an immediate
    /// room upload fails and the pick has to be abandoned.
    pub fn clear_room(&mut self) {
        self.room = None;
        self.room_image = None;
    }

    pub fn clear_furniture(&mut self) {
        self.furniture = None;
    }

    pub fn set_description(&mut self, text: String) {
        self.description = text;
    }

    /// Back to the initial empty state. The only path into a fresh
    /// selection cycle after a result has been shown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit is allowed once the room is server-resident and furniture
    /// is picked. A local room file still uploading does not qualify.
    pub fn can_submit(&self) -> bool {
        matches!(
            self.room,
            Some(RoomSource::Generated { .. } | RoomSource::Uploaded { .. })
        ) && self.furniture.is_some()
    }

    /// Clear the furniture selection if it references the given library
    /// item. Called after a library delete so the selection can never
    /// point at a destroyed entity.
    pub fn drop_library_item(&mut self, id: &str) {
        if matches!(&self.furniture, Some(FurnitureSource::Library { id: sel }) if sel == id) {
            self.furniture = None;
        }
    }

    /// Build the placement request, or report what is missing. Failures
    /// here are local validation and never reach the network.
    pub fn placement_request(&self) -> Result<PlaceFurnitureRequest, ApiError> {
        let room = match &self.room {
            Some(RoomSource::Generated { design_id }) => RoomRef::Design(design_id.clone()),
            Some(RoomSource::Uploaded { room_id }) => RoomRef::UploadedRoom(room_id.clone()),
            Some(RoomSource::LocalFile { .. }) => {
                return Err(ApiError::validation(
                    "Room photo is still uploading, try again in a moment",
                ));
            }
            None => return Err(ApiError::validation("Please select a room design")),
        };

        let furniture = match &self.furniture {
            Some(FurnitureSource::Library { id }) => FurnitureRef::Library(id.clone()),
            Some(FurnitureSource::LocalFile { name, .. }) => FurnitureRef::Upload {
                file_name: name.clone(),
            },
            None => return Err(ApiError::validation("Please upload a furniture image")),
        };

        Ok(PlaceFurnitureRequest {
            room,
            furniture,
            description: self.description.clone(),
        })
    }
}
