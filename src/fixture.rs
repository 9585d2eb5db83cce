//! Payload records posted to the test resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The record embedded by value in a [`ChildRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRecord {
    pub name: String,
    pub uuid: String,
    #[serde(rename = "stringList")]
    pub string_list: Vec<String>,
}

/// The record sent as the body of the create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRecord {
    pub name: String,
    pub uuid: String,
    #[serde(rename = "stringList")]
    pub string_list: Vec<String>,
    pub parent: ParentRecord,
}

impl ParentRecord {
    pub fn literal() -> ParentRecord {
        ParentRecord {
            name: "parentname".into(),
            uuid: "parentuuid".into(),
            string_list: vec!["string3".into(), "string4".into()],
        }
    }
}

impl ChildRecord {
    /// The fixed child record, with [`ParentRecord::literal`] embedded.
    pub fn literal() -> ChildRecord {
        ChildRecord {
            name: "now".into(),
            uuid: "thiswork".into(),
            string_list: vec!["string1".into(), "string2".into()],
            parent: ParentRecord::literal(),
        }
    }
}

impl fmt::Display for ChildRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
