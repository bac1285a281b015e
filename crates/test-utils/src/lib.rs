//! Hackerspace test utilities.
//!
//! Helpers for integration testing: content block fixtures, record builders
//! and assertion utilities for rendered markup. Everything is produced as
//! JSON so fixtures look exactly like what the API serves.

use serde_json::{Value as JsonValue, json};

/// Content block fixtures in their wire shape.
pub mod blocks {
    use serde_json::{Value, json};

    pub fn heading(value: &str) -> Value {
        json!({ "type": "text", "sub_type": "heading", "value": value })
    }

    pub fn paragraph(value: &str) -> Value {
        json!({ "type": "text", "sub_type": "paragraph", "value": value })
    }

    /// A text block with no `sub_type`.
    pub fn bare_text(value: &str) -> Value {
        json!({ "type": "text", "value": value })
    }

    pub fn image(src: &str) -> Value {
        json!({ "type": "media", "sub_type": "image", "value": src })
    }

    pub fn video(src: &str) -> Value {
        json!({ "type": "media", "sub_type": "video", "value": src })
    }

    /// A block with a type no renderer knows.
    pub fn unknown(block_type: &str, value: &str) -> Value {
        json!({ "type": block_type, "value": value })
    }

    /// Serialize a block list the way legacy bodies and form fields hold it.
    pub fn serialized(blocks: &[Value]) -> String {
        Value::Array(blocks.to_vec()).to_string()
    }
}

/// Create a test project with default values.
pub fn test_project(id: i64, title: &str) -> TestProject {
    TestProject {
        id,
        title: title.to_string(),
        thumbnail: None,
        color: None,
        is_private: false,
        blocks: JsonValue::Array(Vec::new()),
    }
}

/// A test project builder.
#[derive(Debug, Clone)]
pub struct TestProject {
    pub id: i64,
    pub title: String,
    pub thumbnail: Option<String>,
    pub color: Option<String>,
    pub is_private: bool,
    pub blocks: JsonValue,
}

impl TestProject {
    pub fn with_thumbnail(mut self, thumbnail: &str) -> Self {
        self.thumbnail = Some(thumbnail.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Set as private (hidden from the public API).
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<JsonValue>) -> Self {
        self.blocks = JsonValue::Array(blocks);
        self
    }

    /// Store the blocks as a serialized string instead of an array.
    pub fn with_serialized_blocks(mut self, blocks: &str) -> Self {
        self.blocks = JsonValue::String(blocks.to_string());
        self
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "title": self.title,
            "thumbnail": self.thumbnail,
            "color": self.color,
            "is_private": self.is_private,
            "blocks": self.blocks,
        })
    }
}

/// Create a test article with default values.
pub fn test_article(id: i64, title: &str) -> TestArticle {
    TestArticle {
        id,
        title: title.to_string(),
        author: "WUSL Team".to_string(),
        date: "2024-01-01".to_string(),
        is_private: false,
        blocks: JsonValue::Array(Vec::new()),
    }
}

/// A test article builder.
#[derive(Debug, Clone)]
pub struct TestArticle {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub date: String,
    pub is_private: bool,
    pub blocks: JsonValue,
}

impl TestArticle {
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Set as private (hidden from the public API).
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<JsonValue>) -> Self {
        self.blocks = JsonValue::Array(blocks);
        self
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "title": self.title,
            "author": self.author,
            "date": self.date,
            "is_private": self.is_private,
            "blocks": self.blocks,
        })
    }
}

/// Site data builder producing the content store's JSON document.
#[derive(Debug, Clone, Default)]
pub struct TestSite {
    pub members: Vec<JsonValue>,
    pub projects: Vec<JsonValue>,
    pub articles: Vec<JsonValue>,
    pub reminders: Vec<JsonValue>,
}

impl TestSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(mut self, name: &str, role: &str, avatar: &str) -> Self {
        let id = self.members.len() + 1;
        self.members
            .push(json!({ "id": id, "name": name, "role": role, "avatar": avatar }));
        self
    }

    pub fn with_project(mut self, project: TestProject) -> Self {
        self.projects.push(project.to_json());
        self
    }

    pub fn with_article(mut self, article: TestArticle) -> Self {
        self.articles.push(article.to_json());
        self
    }

    pub fn with_reminder(mut self, text: &str) -> Self {
        let id = self.reminders.len() + 1;
        self.reminders.push(json!({ "id": id, "text": text }));
        self
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "members": self.members,
            "projects": self.projects,
            "articles": self.articles,
            "reminders": self.reminders,
        })
    }

    /// The document as JSON text, ready for `ContentStore::from_json`.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Assertion helpers for rendered markup.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `needles` occur in `haystack` in the given order.
    pub fn in_order(haystack: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match haystack[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("Expected '{needle}' after byte {from}\nActual: {haystack}"),
            }
        }
    }

    /// Assert that `needle` occurs exactly `expected` times.
    pub fn count(haystack: &str, needle: &str, expected: usize) {
        let actual = haystack.matches(needle).count();
        assert_eq!(
            actual, expected,
            "Expected '{needle}' {expected} times, found {actual}\nActual: {haystack}"
        );
    }
}
