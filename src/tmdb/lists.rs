// ============================================================================
// LISTS - TMDB v4 list endpoints
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::{ApiResponse, ApiSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a list, as sent to the `/items` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub media_id: u64,
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ListItem {
    pub fn movie(media_id: u64) -> Self {
        Self {
            media_id,
            media_type: MediaType::Movie,
            comment: None,
        }
    }

    pub fn tv(media_id: u64) -> Self {
        Self {
            media_id,
            media_type: MediaType::Tv,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Key under which the list's `comments` map stores this item's comment.
    pub fn comment_key(&self) -> String {
        format!("{}:{}", self.media_type, self.media_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewList {
    pub name: String,
    pub iso_639_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

impl NewList {
    pub fn new(name: impl Into<String>, iso_639_1: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso_639_1: iso_639_1.into(),
            description: None,
            public: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedList {
    pub id: u64,
    pub success: bool,
}

#[derive(Serialize)]
struct ItemsBody<'a, T> {
    items: &'a [T],
}

/// List endpoints on top of a session.
///
/// Bodies are generic over `Serialize` so scenarios can also send raw
/// `serde_json::Value` payloads with deliberately wrong field types.
impl ApiSession {
    pub async fn create_list<B: Serialize + ?Sized>(
        &self,
        list: &B,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.post("/list", list).await
    }

    pub async fn get_list(&self, list_id: u64) -> Result<ApiResponse, reqwest::Error> {
        self.get(&format!("/list/{}", list_id)).await
    }

    pub async fn update_list<B: Serialize + ?Sized>(
        &self,
        list_id: u64,
        update: &B,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.put(&format!("/list/{}", list_id), update).await
    }

    pub async fn delete_list(&self, list_id: u64) -> Result<ApiResponse, reqwest::Error> {
        self.delete(&format!("/list/{}", list_id)).await
    }

    pub async fn add_items<T: Serialize>(
        &self,
        list_id: u64,
        items: &[T],
    ) -> Result<ApiResponse, reqwest::Error> {
        self.post(&format!("/list/{}/items", list_id), &ItemsBody { items })
            .await
    }

    pub async fn update_items<T: Serialize>(
        &self,
        list_id: u64,
        items: &[T],
    ) -> Result<ApiResponse, reqwest::Error> {
        self.put(&format!("/list/{}/items", list_id), &ItemsBody { items })
            .await
    }

    pub async fn remove_items<T: Serialize>(
        &self,
        list_id: u64,
        items: &[T],
    ) -> Result<ApiResponse, reqwest::Error> {
        self.delete_with(&format!("/list/{}/items", list_id), &ItemsBody { items })
            .await
    }

    pub async fn item_status(
        &self,
        list_id: u64,
        media_id: u64,
        media_type: MediaType,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.get(&format!(
            "/list/{}/item_status?media_id={}&media_type={}",
            list_id, media_id, media_type
        ))
        .await
    }

    pub async fn clear_list(&self, list_id: u64) -> Result<ApiResponse, reqwest::Error> {
        self.get(&format!("/list/{}/clear", list_id)).await
    }
}

impl ApiResponse {
    /// Decodes a create-list response; `None` if the body has no numeric id.
    pub fn created_list(&self) -> Option<CreatedList> {
        serde_json::from_value(self.json.clone()).ok()
    }
}
