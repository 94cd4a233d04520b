#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{LibraryFurnitureItem, RoomDesign, UploadedRoom};

/// Server-owned lists backing the pickers.
///
/// Lists are replaced wholesale from refetches after every mutation; ids
/// and ordering are server-assigned, so there is no optimistic patching.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub designs: Vec<RoomDesign>,
    pub rooms: Vec<UploadedRoom>,
    pub furniture: Vec<LibraryFurnitureItem>,
    pub loading_designs: bool,
    pub loading_rooms: bool,
    pub loading_furniture: bool,
}

impl CatalogState {
    pub fn set_designs(&mut self, designs: Vec<RoomDesign>) {
        self.designs = designs;
        self.loading_designs = false;
    }

    pub fn set_rooms(&mut self, rooms: Vec<UploadedRoom>) {
        self.rooms = rooms;
        self.loading_rooms = false;
    }

    pub fn set_furniture(&mut self, furniture: Vec<LibraryFurnitureItem>) {
        self.furniture = furniture;
        self.loading_furniture = false;
    }

    pub fn design(&self, id: &str) -> Option<&RoomDesign> {
        self.designs.iter().find(|d| d.id == id)
    }

    /// Newest uploaded room, relying on the server's newest-first ordering.
    pub fn newest_room(&self) -> Option<&UploadedRoom> {
        self.rooms.first()
    }
}
