use reqwest::StatusCode;
use serde_json::Value as JsonValue;

use crate::{endpoint, ApiError, ApiObject, ObjectsClient, RequestOptions, Result};

/// CRUD façade over the objects resource.
///
/// Every method dispatches one request, validates at the expected status, and
/// decodes the body; failures propagate to the caller untouched.
#[derive(Clone, Debug)]
pub struct ObjectsService {
    client: ObjectsClient,
}

impl ObjectsService {
    pub fn new(client: ObjectsClient) -> Self {
        Self { client }
    }

    /// The underlying client, for calls the façade does not cover.
    pub fn client(&self) -> &ObjectsClient {
        &self.client
    }

    /// Lists every object in the collection.
    pub async fn get_all_objects(&self) -> Result<Vec<ApiObject>> {
        let response = self
            .client
            .get(&endpoint::objects(), RequestOptions::new())
            .await?;
        response.validate_as(StatusCode::OK)
    }

    /// Creates an object and returns the stored record (with its new id).
    pub async fn create_object(&self, object: &ApiObject) -> Result<ApiObject> {
        let response = self
            .client
            .post(&endpoint::objects(), to_body(object)?, RequestOptions::new())
            .await?;
        response.validate_as(StatusCode::OK)
    }

    /// Fetches one object by id.
    pub async fn get_object_by_id(&self, id: &str) -> Result<ApiObject> {
        let response = self
            .client
            .get(&endpoint::object_by_id(id), RequestOptions::new())
            .await?;
        response.validate_as(StatusCode::OK)
    }

    /// Replaces an object and returns the stored record.
    pub async fn update_object(&self, id: &str, object: &ApiObject) -> Result<ApiObject> {
        let response = self
            .client
            .put(
                &endpoint::object_by_id(id),
                to_body(object)?,
                RequestOptions::new(),
            )
            .await?;
        response.validate_as(StatusCode::OK)
    }

    /// Partially updates an object with the given JSON patch body.
    pub async fn patch_object(&self, id: &str, patch: JsonValue) -> Result<ApiObject> {
        let response = self
            .client
            .patch(&endpoint::object_by_id(id), patch, RequestOptions::new())
            .await?;
        response.validate_as(StatusCode::OK)
    }

    /// Deletes an object; returns the server's confirmation body.
    pub async fn delete_object(&self, id: &str) -> Result<JsonValue> {
        let response = self
            .client
            .delete(&endpoint::object_by_id(id), RequestOptions::new())
            .await?;
        response.validate(StatusCode::OK)
    }

    /// Probes a deleted object and returns the bare status, skipping
    /// validation — callers assert on the 404 themselves.
    pub async fn verify_object_deleted(&self, id: &str) -> Result<StatusCode> {
        let response = self
            .client
            .get(&endpoint::object_by_id(id), RequestOptions::new())
            .await?;
        Ok(response.status())
    }
}

fn to_body(object: &ApiObject) -> Result<JsonValue> {
    serde_json::to_value(object)
        .map_err(|err| ApiError::Parse(format!("object payload did not serialize: {err}")))
}
