//! src/api/protocol.rs
//! ============================================================================
//! # Wire Protocol: JSON Bodies Exchanged with the Search Server
//!
//! Field names follow the server contract, not Rust conventions: the search
//! endpoint expects snake_case keys like `file_types`, and result entries come
//! back with `filename`/`path` rather than display-name/parent-path. All the
//! renaming happens here so the rest of the crate works with honest names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /search/`. Optional filters are attached only while the
/// advanced panel is open; absent fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_regex: Option<bool>,
    /// `[from, to]`, either end open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    /// `[min_bytes, max_bytes]`, already normalized from the UI's unit fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_range: Option<(u64, u64)>,
}

impl SearchRequest {
    /// A bare listing/search request with no advanced filters attached.
    pub fn plain(query: impl Into<String>, paths: Vec<String>) -> Self {
        Self {
            query: query.into(),
            paths,
            file_types: None,
            case_sensitive: None,
            include_hidden: None,
            use_regex: None,
            date_range: None,
            size_range: None,
        }
    }
}

/// Response of `POST /search/`. The server also reports `count` and `time`,
/// which the client derives/ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultEntry>,
}

/// One search hit, as the server formats it. Read-only projection; rebuilt on
/// every successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub full_path: String,
    #[serde(rename = "filename")]
    pub display_name: String,
    /// Parent directory of the hit.
    #[serde(rename = "path")]
    pub parent_path: String,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub size_formatted: String,
    #[serde(rename = "modified_time_formatted", default)]
    pub modified_formatted: String,
    #[serde(default)]
    pub icon_class: Option<String>,
}

/// Tagged union over every mutating call. Created on user action, consumed by
/// exactly one outbound request, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOpRequest {
    Open { path: String },
    Copy { source: String, destination: String },
    Move { source: String, destination: String },
    Rename { path: String, new_name: String },
    Delete { path: String },
    CreateFolder { path: String },
    CreateFile { path: String },
}

impl FileOpRequest {
    pub fn endpoint(&self) -> &'static str {
        match self {
            FileOpRequest::Open { .. } => "/file/open",
            FileOpRequest::Copy { .. } => "/file/copy",
            FileOpRequest::Move { .. } => "/file/move",
            FileOpRequest::Rename { .. } => "/file/rename",
            FileOpRequest::Delete { .. } => "/file/delete",
            FileOpRequest::CreateFolder { .. } => "/file/create_folder",
            FileOpRequest::CreateFile { .. } => "/file/create_file",
        }
    }

    /// JSON body for the endpoint. Delete always requests trash semantics;
    /// create-file always sends an empty content body.
    pub fn body(&self) -> serde_json::Value {
        match self {
            FileOpRequest::Open { path } => serde_json::json!({ "path": path }),
            FileOpRequest::Copy {
                source,
                destination,
            }
            | FileOpRequest::Move {
                source,
                destination,
            } => serde_json::json!({ "source": source, "destination": destination }),
            FileOpRequest::Rename { path, new_name } => {
                serde_json::json!({ "path": path, "new_name": new_name })
            }
            FileOpRequest::Delete { path } => {
                serde_json::json!({ "path": path, "use_trash": true })
            }
            FileOpRequest::CreateFolder { path } => serde_json::json!({ "path": path }),
            FileOpRequest::CreateFile { path } => {
                serde_json::json!({ "path": path, "content": "" })
            }
        }
    }
}

/// Decoded outcome of a file-operation call. A response without a boolean
/// success indicator decodes with `success: false` and is treated as a
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpResponse {
    #[serde(default)]
    pub success: bool,
    /// Server-supplied human message. Some endpoints use `error` instead.
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_search_request_omits_unset_filters() {
        let req = SearchRequest::plain("reports", vec!["/home".into()]);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "query": "reports", "paths": ["/home"] })
        );
    }

    #[test]
    fn search_request_serializes_ranges_as_arrays() {
        let mut req = SearchRequest::plain("x", vec![]);
        req.size_range = Some((1_048_576, 5_242_880));
        req.date_range = Some((
            NaiveDate::from_ymd_opt(2024, 1, 1),
            None,
        ));

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["size_range"], serde_json::json!([1_048_576, 5_242_880]));
        assert_eq!(json["date_range"], serde_json::json!(["2024-01-01", null]));
    }

    #[test]
    fn result_entry_decodes_server_field_names() {
        let entry: ResultEntry = serde_json::from_value(serde_json::json!({
            "full_path": "/data/report.txt",
            "filename": "report.txt",
            "path": "/data",
            "is_directory": false,
            "size_formatted": "1.2 KB",
            "modified_time_formatted": "2024-03-01 10:00",
            "icon_class": "file-icon"
        }))
        .unwrap();

        assert_eq!(entry.display_name, "report.txt");
        assert_eq!(entry.parent_path, "/data");
        assert!(!entry.is_directory);
    }

    #[test]
    fn delete_always_requests_trash() {
        let req = FileOpRequest::Delete {
            path: "x.txt".into(),
        };
        assert_eq!(req.endpoint(), "/file/delete");
        assert_eq!(
            req.body(),
            serde_json::json!({ "path": "x.txt", "use_trash": true })
        );
    }

    #[test]
    fn create_file_sends_empty_content() {
        let req = FileOpRequest::CreateFile {
            path: "/tmp/New File.txt".into(),
        };
        assert_eq!(
            req.body(),
            serde_json::json!({ "path": "/tmp/New File.txt", "content": "" })
        );
    }

    #[test]
    fn op_response_without_success_flag_is_failure() {
        let resp: OpResponse = serde_json::from_str(r#"{"error": "no permission"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("no permission"));

        let resp: OpResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.message.is_none());
    }
}
