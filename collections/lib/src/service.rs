//! Requests against the dataset collection endpoints.
//!
//! [`DatasetCollections`] owns one [`ApiClient`] and the three endpoint
//! definitions. Every method is a single GET; errors come back exactly as the
//! client produced them.

use api::response::JsonFormat;
use api::{ApiClient, ApiError, Endpoint, RestMethod};
use tracing::{debug, instrument};

use crate::config::CollectionsConfig;
use crate::types::{CollectionEntry, DatasetCollectionAttributes, DceSummary, HdcaDetailed};

/// Offset used by [`DatasetCollections::fetch_elements_from_collection`] when none is given.
pub const DEFAULT_OFFSET: u64 = 0;

/// Page size used by [`DatasetCollections::fetch_elements_from_collection`] when none is given.
pub const DEFAULT_LIMIT: u64 = 50;

/// Every collection lookup is scoped to history-owned collections.
const INSTANCE_TYPE: &str = "history";

/// Parameters for a raw page of collection contents.
///
/// Unset `offset` and `limit` are not sent, leaving the server's defaults in
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionElementsParams {
    /// The top-level HDCA that ties the collection to its history.
    pub hdca_id: String,
    /// The collection to list: the HDCA's own collection or a nested one.
    pub collection_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl CollectionElementsParams {
    pub fn new(hdca_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            hdca_id: hdca_id.into(),
            collection_id: collection_id.into(),
            offset: None,
            limit: None,
        }
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}

/// Parameters for listing the elements of a [`CollectionEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementsFromCollectionParams {
    pub entry: CollectionEntry,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl ElementsFromCollectionParams {
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Picks the owning HDCA and target collection for the entry and fills
    /// in [`DEFAULT_OFFSET`] / [`DEFAULT_LIMIT`] for anything unset.
    pub fn resolve(&self) -> CollectionElementsParams {
        CollectionElementsParams {
            hdca_id: self.entry.owning_hdca_id().to_string(),
            collection_id: self.entry.target_collection_id().to_string(),
            offset: Some(self.offset.unwrap_or(DEFAULT_OFFSET)),
            limit: Some(self.limit.unwrap_or(DEFAULT_LIMIT)),
        }
    }
}

impl From<CollectionEntry> for ElementsFromCollectionParams {
    fn from(entry: CollectionEntry) -> Self {
        Self {
            entry,
            offset: None,
            limit: None,
        }
    }
}

/// Client for the dataset collection endpoints.
///
/// ## Examples
///
/// ```rust,ignore
/// use collections_lib::{CollectionEntry, CollectionsConfig, DatasetCollections};
///
/// let collections = DatasetCollections::from_config(&CollectionsConfig::from_env()?)?;
///
/// let details = collections.fetch_collection_details("f2db41e1fa331b3e").await?;
/// let page = collections
///     .fetch_elements_from_collection(CollectionEntry::from(&details).into())
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct DatasetCollections {
    client: ApiClient,
    details: Endpoint<JsonFormat<HdcaDetailed>>,
    contents: Endpoint<JsonFormat<Vec<DceSummary>>>,
    attributes: Endpoint<JsonFormat<DatasetCollectionAttributes>>,
}

impl DatasetCollections {
    /// Wraps an already configured client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            details: Endpoint::builder()
                .id("get_collection_details")
                .method(RestMethod::Get)
                .path("api/dataset_collections/{id}")
                .description("Full metadata for a history dataset collection")
                .build(),
            contents: Endpoint::builder()
                .id("get_collection_contents")
                .method(RestMethod::Get)
                .path("api/dataset_collections/{hdca_id}/contents/{parent_id}")
                .query("instance_type", INSTANCE_TYPE)
                .description("One page of a collection's elements")
                .build(),
            attributes: Endpoint::builder()
                .id("get_collection_attributes")
                .method(RestMethod::Get)
                .path("api/dataset_collections/{id}/attributes")
                .query("instance_type", INSTANCE_TYPE)
                .description("Display attributes of a collection")
                .build(),
        }
    }

    /// Builds the client described by `config`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &CollectionsConfig) -> Result<Self, ApiError> {
        Ok(Self::new(config.client()?))
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Fetches full metadata for the HDCA `hdca_id`.
    #[instrument(skip(self))]
    pub async fn fetch_collection_details(&self, hdca_id: &str) -> Result<HdcaDetailed, ApiError> {
        self.client
            .execute_with_params(&self.details, &[("id", hdca_id)])
            .await
    }

    /// Fetches one page of elements of `collection_id` under `hdca_id`.
    #[instrument(
        skip(self, params),
        fields(hdca_id = %params.hdca_id, collection_id = %params.collection_id)
    )]
    pub async fn fetch_collection_elements(
        &self,
        params: CollectionElementsParams,
    ) -> Result<Vec<DceSummary>, ApiError> {
        debug!(offset = ?params.offset, limit = ?params.limit, "fetching collection contents");
        let query = params.query();
        self.client
            .execute_with_query(
                &self.contents,
                &[
                    ("hdca_id", params.hdca_id.as_str()),
                    ("parent_id", params.collection_id.as_str()),
                ],
                &query,
            )
            .await
    }

    /// Fetches a page of elements of an HDCA or of a nested collection.
    ///
    /// For an HDCA the HDCA's own collection is listed; for a nested
    /// collection, that collection is listed under its owning HDCA. Offset
    /// defaults to [`DEFAULT_OFFSET`] and limit to [`DEFAULT_LIMIT`].
    pub async fn fetch_elements_from_collection(
        &self,
        params: ElementsFromCollectionParams,
    ) -> Result<Vec<DceSummary>, ApiError> {
        let resolved = params.resolve();
        debug!(
            is_hdca = params.entry.is_hdca(),
            hdca_id = %resolved.hdca_id,
            collection_id = %resolved.collection_id,
            "resolved collection entry"
        );
        self.fetch_collection_elements(resolved).await
    }

    /// Fetches the display attributes of the HDCA `hdca_id`.
    #[instrument(skip(self))]
    pub async fn fetch_collection_attributes(
        &self,
        hdca_id: &str,
    ) -> Result<DatasetCollectionAttributes, ApiError> {
        self.client
            .execute_with_params(&self.attributes, &[("id", hdca_id)])
            .await
    }
}
