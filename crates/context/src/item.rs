//! Typed models for the item metadata files Docspell hands to an addon.
//!
//! Every field is optional or defaulted: Docspell may omit any of them
//! depending on the trigger, and a sparse file must not fail
//! deserialization. Structurally wrong JSON (e.g. an object where a list
//! is expected) is a hard failure, same as malformed JSON.

use serde::Deserialize;

/// Content of the `ITEM_DATA_JSON` file: the item being processed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Collective identifier; a number in older payloads, a string in newer ones.
    #[serde(default)]
    pub collective: Option<serde_json::Value>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub assumed_tags: Vec<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub assumed_corr_org: Option<EntityRef>,
    #[serde(default)]
    pub assumed_corr_person: Option<EntityRef>,
    #[serde(default)]
    pub assumed_conc_person: Option<EntityRef>,
    #[serde(default)]
    pub assumed_conc_equip: Option<EntityRef>,
}

/// An attachment entry inside the item data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    /// Extracted text, when text extraction already ran.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
}

/// Reference to an organization, person, or equipment record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the `ITEM_ORIGINAL_JSON` / `ITEM_PDF_JSON` file lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
}
