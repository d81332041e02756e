//! JSON page fixtures.
//!
//! A fixture describes a page's elements as data so demos and tests can load
//! a page without constructing it element by element.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::dom::{Display, Dom, Element};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<ElementFixture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementFixture {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default)]
    pub display: Display,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl PageFixture {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        raw.parse()
    }

    /// Build the element collection in declaration order.
    pub fn into_dom(self) -> Dom {
        let mut dom = Dom::new();
        for el in self.elements {
            let mut element = Element::new(el.tag)
                .with_text(el.text)
                .with_display(el.display)
                .with_files(el.files);
            if let Some(id) = el.id {
                element = element.with_id(id);
            }
            for class in el.classes {
                element = element.with_class(class);
            }
            dom.push(element);
        }
        dom
    }
}

impl FromStr for PageFixture {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|source| Error::FixtureParse { source })
    }
}
