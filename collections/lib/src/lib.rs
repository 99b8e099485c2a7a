//! Typed client for Galaxy dataset collection endpoints.
//!
//! Four reads are supported:
//!
//! - [`DatasetCollections::fetch_collection_details`] - `GET api/dataset_collections/{id}`
//! - [`DatasetCollections::fetch_collection_elements`] - one page of a collection's contents
//! - [`DatasetCollections::fetch_elements_from_collection`] - the same, starting from a
//!   [`CollectionEntry`] that is either an HDCA or a nested collection
//! - [`DatasetCollections::fetch_collection_attributes`] - a collection's display attributes
//!
//! Nothing is cached or retried. Failures are the transport's [`ApiError`],
//! passed through unchanged.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use collections_lib::{CollectionEntry, CollectionsConfig, DatasetCollections};
//!
//! let collections = DatasetCollections::from_config(&CollectionsConfig::from_env()?)?;
//!
//! let entry = CollectionEntry::sub_collection("f2db41e1fa331b3e", "5969b1f7201f12ae");
//! let page = collections
//!     .fetch_elements_from_collection(ElementsFromCollectionParams::from(entry).limit(10))
//!     .await?;
//! ```

pub mod config;
pub mod service;
pub mod types;

pub use api::ApiError;
pub use config::CollectionsConfig;
pub use service::{
    CollectionElementsParams, DEFAULT_LIMIT, DEFAULT_OFFSET, DatasetCollections,
    ElementsFromCollectionParams,
};
pub use types::{
    CollectionEntry, DatasetCollectionAttributes, DcObject, DceSummary, ElementObject, HdaObject,
    HdcaDetailed, HdcaSummary, SubCollection,
};
