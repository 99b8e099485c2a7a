//! Dataset collection payloads.
//!
//! These mirror the JSON the server returns. Fields the client does not use
//! are ignored on deserialization; nullable or version-dependent fields are
//! `Option`s.

use serde::{Deserialize, Serialize};

/// A collection a caller can list elements of.
///
/// Either a top-level HDCA or a collection nested inside one. The
/// `model_class` field is the discriminant, matching what the server puts on
/// each object. JSON without it does not deserialize; entries built by hand
/// from bare ids should use [`CollectionEntry::hdca`] or
/// [`CollectionEntry::sub_collection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model_class")]
pub enum CollectionEntry {
    /// A top-level collection bound to a history.
    #[serde(rename = "HistoryDatasetCollectionAssociation")]
    Hdca(HdcaSummary),
    /// A collection element that is itself a collection.
    #[serde(rename = "DatasetCollection")]
    SubCollection(SubCollection),
}

impl CollectionEntry {
    /// Shorthand for an HDCA entry with only its identifiers set.
    pub fn hdca(id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self::Hdca(HdcaSummary {
            id: id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        })
    }

    /// Shorthand for a nested collection entry with only its identifiers set.
    pub fn sub_collection(hdca_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::SubCollection(SubCollection {
            id: id.into(),
            hdca_id: hdca_id.into(),
            ..Default::default()
        })
    }

    /// Returns `true` for a top-level HDCA.
    pub fn is_hdca(&self) -> bool {
        matches!(self, Self::Hdca(_))
    }

    /// The HDCA that owns this entry's elements.
    pub fn owning_hdca_id(&self) -> &str {
        match self {
            Self::Hdca(hdca) => &hdca.id,
            Self::SubCollection(sub) => &sub.hdca_id,
        }
    }

    /// The collection whose elements should be listed.
    pub fn target_collection_id(&self) -> &str {
        match self {
            Self::Hdca(hdca) => &hdca.collection_id,
            Self::SubCollection(sub) => &sub.id,
        }
    }

    /// Display name, if the server supplied one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Hdca(hdca) => hdca.name.as_deref(),
            Self::SubCollection(sub) => sub.name.as_deref(),
        }
    }
}

impl From<&HdcaDetailed> for CollectionEntry {
    fn from(details: &HdcaDetailed) -> Self {
        Self::Hdca(HdcaSummary {
            id: details.id.clone(),
            collection_id: details.collection_id.clone(),
            name: details.name.clone(),
            hid: Some(details.hid),
            history_id: Some(details.history_id.clone()),
            collection_type: Some(details.collection_type.clone()),
            element_count: details.element_count,
            populated_state: Some(details.populated_state.clone()),
        })
    }
}

/// The identifying part of a history dataset collection association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdcaSummary {
    /// The HDCA id.
    pub id: String,
    /// The id of the dataset collection the HDCA wraps.
    pub collection_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// History item number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
    /// e.g. `list`, `paired`, `list:paired`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub populated_state: Option<String>,
}

/// A collection nested inside an HDCA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCollection {
    /// The nested dataset collection's id.
    pub id: String,
    /// The top-level HDCA this collection lives under.
    pub hdca_id: String,
    /// The element identifier this collection is listed under in its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub populated: Option<bool>,
}

/// Full metadata for a top-level collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdcaDetailed {
    pub id: String,
    pub collection_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub hid: u64,
    pub history_id: String,
    pub collection_type: String,
    /// `new`, `ok` or `failed`.
    pub populated_state: String,
    #[serde(default)]
    pub populated_state_message: Option<String>,
    #[serde(default)]
    pub element_count: Option<u64>,
    /// First page of elements, as embedded by the server.
    #[serde(default)]
    pub elements: Vec<DceSummary>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub contents_url: Option<String>,
}

/// One element of a collection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DceSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_class: Option<String>,
    /// Position within the parent collection.
    pub element_index: u64,
    /// The element's name within the parent (`forward`, `sample1`, ...).
    pub element_identifier: String,
    /// What the element holds, keyed by `element_type`.
    #[serde(flatten)]
    pub element: ElementObject,
}

impl DceSummary {
    /// Returns `true` if this element is a nested collection.
    pub fn is_collection(&self) -> bool {
        matches!(self.element, ElementObject::DatasetCollection(_))
    }

    /// Builds the entry for browsing into this element, if it is a collection.
    ///
    /// `hdca_id` is the top-level HDCA the page was fetched from.
    pub fn sub_collection_entry(&self, hdca_id: &str) -> Option<CollectionEntry> {
        let ElementObject::DatasetCollection(collection) = &self.element else {
            return None;
        };

        Some(CollectionEntry::SubCollection(SubCollection {
            id: collection.id.clone(),
            hdca_id: hdca_id.to_string(),
            name: Some(self.element_identifier.clone()),
            collection_type: Some(collection.collection_type.clone()),
            element_count: collection.element_count,
            populated: collection.populated,
        }))
    }
}

/// The payload of a collection element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element_type", content = "object", rename_all = "snake_case")]
pub enum ElementObject {
    /// A dataset in a history.
    Hda(HdaObject),
    /// A nested collection.
    DatasetCollection(DcObject),
}

/// A dataset element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdaObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_class: Option<String>,
    /// Job state of the dataset (`ok`, `queued`, `error`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hda_ldda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purged: Option<bool>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A nested collection element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_class: Option<String>,
    pub collection_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub populated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents_url: Option<String>,
    /// Present only when the server inlines the next level.
    #[serde(default)]
    pub elements: Vec<DceSummary>,
}

/// Display attributes of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetCollectionAttributes {
    /// Shared genome build, `?` when unset or mixed.
    pub dbkey: String,
    /// Shared datatype extension.
    pub extension: String,
    #[serde(default)]
    pub dbkeys: Option<Vec<String>>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Vec<String>,
}
