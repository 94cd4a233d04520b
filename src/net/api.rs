//! REST gateway to the composition backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, multipart bodies
//! via `web_sys::FormData`. Server-side (SSR): list calls are stubbed with
//! `ApiError::Unavailable`; upload calls take browser file handles and so
//! only exist under the `hydrate` feature.
//!
//! ERROR HANDLING
//! ==============
//! One method per remote operation, each returning `Result<T, ApiError>`.
//! File constraints are checked here before any network activity and fail
//! with `ApiError::Validation`; transport failures map to `Network` and
//! non-success responses to `Server`. Nothing retries, batches, or caches.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{LibraryFurnitureItem, RoomDesign, UploadedRoom};
use crate::state::session::Session;

#[cfg(feature = "hydrate")]
use super::forms::{FormValue, PlaceFurnitureRequest, place_furniture_fields};
#[cfg(feature = "hydrate")]
use super::types::{PlacementResponse, SearchResponse};
#[cfg(feature = "hydrate")]
use crate::util::files::validate_image;

#[cfg(feature = "hydrate")]
fn net_err(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn new_form() -> Result<web_sys::FormData, ApiError> {
    web_sys::FormData::new().map_err(|_| ApiError::Network("could not build form data".to_owned()))
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn validate_blob(blob: &web_sys::Blob) -> Result<(), ApiError> {
    validate_image(&blob.type_(), blob.size() as u64)
        .map_err(|e| ApiError::Validation(e.to_string()))
}

/// Check the status and decode a JSON body.
#[cfg(feature = "hydrate")]
async fn json_body<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        log::warn!("backend responded with status {} for {}", resp.status(), resp.url());
        return Err(ApiError::Server {
            status: resp.status(),
        });
    }
    resp.json::<T>().await.map_err(net_err)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(net_err)?;
    json_body(resp).await
}

/// Fetch this session's generated room designs from `GET /designs/{session}`.
/// Design images are not included; fetch them lazily by id.
pub async fn list_designs(session: &Session) -> Result<Vec<RoomDesign>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session.url(&format!("/designs/{}", session.session_id));
        let body: super::types::DesignsResponse = get_json(&url).await?;
        Ok(body.designs)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single design's rendered image from `GET /design/{id}/image`.
pub async fn fetch_design_image(session: &Session, design_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session.url(&format!("/design/{design_id}/image"));
        let body: super::types::DesignImageResponse = get_json(&url).await?;
        Ok(body.image)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, design_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch this session's uploaded room photos from `GET /rooms/all`.
pub async fn list_rooms(session: &Session) -> Result<Vec<UploadedRoom>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session.url(&format!("/rooms/all?session_id={}", session.session_id));
        let body: super::types::RoomsResponse = get_json(&url).await?;
        Ok(body.rooms)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Fetch this session's furniture library from `GET /furniture/all`.
pub async fn list_furniture(session: &Session) -> Result<Vec<LibraryFurnitureItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session.url(&format!("/furniture/all?session_id={}", session.session_id));
        let body: super::types::FurnitureListResponse = get_json(&url).await?;
        Ok(body.furnitures)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Delete a furniture library entry via `DELETE /furniture/{id}`.
/// The caller refetches the list and clears a matching selection.
pub async fn delete_furniture(session: &Session, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = session.url(&format!("/furniture/{id}"));
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(net_err)?;
        if !resp.ok() {
            return Err(ApiError::Server {
                status: resp.status(),
            });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(ApiError::Unavailable)
    }
}

/// Upload a room photo via `POST /rooms/upload` (multipart: `session_id`,
/// `room_image`, optional `room_description`). Validates the blob type and
/// size before touching the network. The caller refetches the rooms list.
#[cfg(feature = "hydrate")]
pub async fn upload_room(
    session: &Session,
    image: &web_sys::Blob,
    file_name: &str,
    description: Option<&str>,
) -> Result<(), ApiError> {
    validate_blob(image)?;

    let form = new_form()?;
    let _ = form.append_with_str("session_id", &session.session_id);
    let _ = form.append_with_blob_and_filename("room_image", image, file_name);
    if let Some(description) = description {
        let _ = form.append_with_str("room_description", description);
    }

    let resp = gloo_net::http::Request::post(&session.url("/rooms/upload"))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    if !resp.ok() {
        return Err(ApiError::Server {
            status: resp.status(),
        });
    }
    Ok(())
}

/// Upload a furniture image into the library via `POST /furniture/upload`
/// (multipart: `session_id`, `name`, `furniture_image`). Validates type
/// and size first. The caller refetches the library list.
#[cfg(feature = "hydrate")]
pub async fn upload_furniture(
    session: &Session,
    file: &web_sys::File,
    name: &str,
) -> Result<(), ApiError> {
    validate_blob(file)?;

    let form = new_form()?;
    let _ = form.append_with_str("session_id", &session.session_id);
    let _ = form.append_with_str("name", name);
    let _ = form.append_with_blob_and_filename("furniture_image", file, &file.name());

    let resp = gloo_net::http::Request::post(&session.url("/furniture/upload"))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    if !resp.ok() {
        return Err(ApiError::Server {
            status: resp.status(),
        });
    }
    Ok(())
}

/// Submit the composite request via `POST /place-furniture`.
///
/// `upload` carries the raw file when the furniture half is a local pick;
/// it must be present for `FurnitureRef::Upload` requests and is validated
/// before the network call.
#[cfg(feature = "hydrate")]
pub async fn place_furniture(
    session: &Session,
    req: &PlaceFurnitureRequest,
    upload: Option<&web_sys::File>,
) -> Result<PlacementResponse, ApiError> {
    let form = new_form()?;
    for (key, value) in place_furniture_fields(&session.session_id, req) {
        match value {
            FormValue::Text(text) => {
                let _ = form.append_with_str(key, &text);
            }
            FormValue::File { file_name } => {
                let file = upload
                    .ok_or_else(|| ApiError::validation("Please upload a furniture image"))?;
                validate_blob(file)?;
                let _ = form.append_with_blob_and_filename(key, file, &file_name);
            }
        }
    }

    let resp = gloo_net::http::Request::post(&session.url("/place-furniture"))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    json_body(resp).await
}

/// Analyze a photo and search for matching products via
/// `POST /analyze-and-search` (multipart: `uploaded_image`). The full
/// product list comes back in one response; pagination is local.
#[cfg(feature = "hydrate")]
pub async fn analyze_and_search(
    session: &Session,
    file: &web_sys::File,
) -> Result<SearchResponse, ApiError> {
    validate_blob(file)?;

    let form = new_form()?;
    let _ = form.append_with_blob_and_filename("uploaded_image", file, &file.name());

    let resp = gloo_net::http::Request::post(&session.url("/analyze-and-search"))
        .body(form)
        .map_err(net_err)?
        .send()
        .await
        .map_err(net_err)?;
    json_body(resp).await
}
