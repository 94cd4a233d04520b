#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Reference to the room half of a placement request. Both variants name
/// server-resident entities; a locally picked room photo is persisted via
/// the rooms upload before a placement can be submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoomRef {
    Design(String),
    UploadedRoom(String),
}

/// Reference to the furniture half: a library entry by id, or a raw file
/// picked this session and sent inline with the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FurnitureRef {
    Library(String),
    /// File name only; the actual browser file handle travels separately
    /// since it does not exist outside the browser.
    Upload { file_name: String },
}

/// Fully resolved placement request. Constructing one goes through
/// `SelectionState::placement_request`, which is where missing-selection
/// validation happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceFurnitureRequest {
    pub room: RoomRef,
    pub furniture: FurnitureRef,
    pub description: String,
}

/// A multipart field value: plain text, or a file payload identified by
/// its name. Kept data-only so the encoding is testable natively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { file_name: String },
}

/// Multipart field layout for `POST /place-furniture`.
///
/// The room reference becomes `design_id` or `user_room_id` (never both),
/// the furniture reference `furniture_ids` or `furniture_image`, and the
/// free-text description `furniture_descriptions`.
pub fn place_furniture_fields(
    session_id: &str,
    req: &PlaceFurnitureRequest,
) -> Vec<(&'static str, FormValue)> {
    let mut fields = vec![("session_id", FormValue::Text(session_id.to_owned()))];

    match &req.room {
        RoomRef::Design(id) => fields.push(("design_id", FormValue::Text(id.clone()))),
        RoomRef::UploadedRoom(id) => fields.push(("user_room_id", FormValue::Text(id.clone()))),
    }

    match &req.furniture {
        FurnitureRef::Library(id) => fields.push(("furniture_ids", FormValue::Text(id.clone()))),
        FurnitureRef::Upload { file_name } => fields.push((
            "furniture_image",
            FormValue::File {
                file_name: file_name.clone(),
            },
        )),
    }

    fields.push((
        "furniture_descriptions",
        FormValue::Text(req.description.clone()),
    ));
    fields
}
