// ============================================================================
// TEST FIXTURES MODULE
// Payloads, endpoints and expected status codes shared by the test binaries
// ============================================================================
#![allow(dead_code)]

use serde_json::{json, Value};
use tmdb_list_tests::{ListItem, ListUpdate, NewList};

pub const USERNAME: &str = "moviefan";
pub const PASSWORD: &str = "popcorn-and-soda";
pub const READ_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.read-fixture";

/// Lists used by the scenarios
pub struct TestLists;

impl TestLists {
    pub fn required_only() -> NewList {
        NewList::new("My Cool List", "en")
    }

    /// Every field has the wrong type
    pub fn invalid_types() -> Value {
        json!({
            "name": 1,
            "iso_639_1": 1,
            "description": 1,
            "public": 1
        })
    }

    pub fn update() -> ListUpdate {
        ListUpdate {
            name: Some("My Cool Updated List".to_string()),
            description: Some("Cool Description".to_string()),
            public: Some(true),
        }
    }
}

/// Items used by the item scenarios
pub struct TestItems;

impl TestItems {
    pub fn fight_club_and_lost() -> Vec<ListItem> {
        vec![ListItem::movie(652), ListItem::tv(60573)]
    }

    pub fn empty() -> Vec<Value> {
        vec![json!({})]
    }

    pub fn invalid() -> Vec<Value> {
        vec![json!({
            "media_type": "invalid_type",
            "media_id": "invalid_media_id"
        })]
    }

    pub fn unique_comment() -> String {
        format!(
            "Hello, this is cool. (unique: {})",
            chrono::Utc::now().timestamp_millis()
        )
    }
}

/// Expected HTTP status codes
pub struct ExpectedStatus;

impl ExpectedStatus {
    pub const SUCCESS: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const UNAUTHORIZED: u16 = 401;
    pub const NOT_FOUND: u16 = 404;
    pub const UNPROCESSABLE: u16 = 422;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}
