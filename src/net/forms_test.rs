use super::*;

#[test]
fn design_and_library_selection_encodes_expected_fields() {
    let req = PlaceFurnitureRequest {
        room: RoomRef::Design("d1".to_owned()),
        furniture: FurnitureRef::Library("f3".to_owned()),
        description: "blue chair".to_owned(),
    };

    let fields = place_furniture_fields("s-9", &req);
    assert_eq!(
        fields,
        vec![
            ("session_id", FormValue::Text("s-9".to_owned())),
            ("design_id", FormValue::Text("d1".to_owned())),
            ("furniture_ids", FormValue::Text("f3".to_owned())),
            ("furniture_descriptions", FormValue::Text("blue chair".to_owned())),
        ]
    );
}

#[test]
fn uploaded_room_uses_user_room_id() {
    let req = PlaceFurnitureRequest {
        room: RoomRef::UploadedRoom("r7".to_owned()),
        furniture: FurnitureRef::Library("f1".to_owned()),
        description: String::new(),
    };

    let fields = place_furniture_fields("s-9", &req);
    assert!(fields.contains(&("user_room_id", FormValue::Text("r7".to_owned()))));
    assert!(!fields.iter().any(|(key, _)| *key == "design_id"));
}

#[test]
fn local_furniture_upload_becomes_a_file_field() {
    let req = PlaceFurnitureRequest {
        room: RoomRef::Design("d1".to_owned()),
        furniture: FurnitureRef::Upload {
            file_name: "sofa.png".to_owned(),
        },
        description: "gray sofa".to_owned(),
    };

    let fields = place_furniture_fields("s-9", &req);
    assert!(fields.contains(&(
        "furniture_image",
        FormValue::File {
            file_name: "sofa.png".to_owned()
        }
    )));
    assert!(!fields.iter().any(|(key, _)| *key == "furniture_ids"));
}

#[test]
fn exactly_one_room_and_one_furniture_field() {
    let req = PlaceFurnitureRequest {
        room: RoomRef::UploadedRoom("r2".to_owned()),
        furniture: FurnitureRef::Upload {
            file_name: "lamp.webp".to_owned(),
        },
        description: String::new(),
    };

    let fields = place_furniture_fields("s-1", &req);
    let room_fields = fields
        .iter()
        .filter(|(key, _)| *key == "design_id" || *key == "user_room_id")
        .count();
    let furniture_fields = fields
        .iter()
        .filter(|(key, _)| *key == "furniture_ids" || *key == "furniture_image")
        .count();
    assert_eq!(room_fields, 1);
    assert_eq!(furniture_fields, 1);
}
