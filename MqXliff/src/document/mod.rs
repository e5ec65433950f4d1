//! memoQ bilingual XLIFF documents
//!
//! A `.mqxliff` file is XLIFF 1.2 with memoQ's `mq:` extensions. The units
//! ("rows") live under `xliff/file/body`; each has a `source` and usually a
//! `target` segment whose inline markup is handled by [`crate::rich`].

mod batch;
mod io;
mod status;
mod unit;

pub use batch::{BatchSummary, DocSummary, INVALID_STATUS, NO_STATUS, summarize_files};
pub use io::{MQXLIFF_EXTENSION, find_mqxliff_files, read_mqxliff, write_mqxliff};
pub use status::TuStatus;
pub use unit::{Segment, TransUnit, TransUnitMut};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::markup::{MarkupDocument, MarkupElement, parse_markup, serialize_markup};

/// Summary of a document, read from its `file` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocInfo {
    pub src_lang: Option<String>,
    pub trg_lang: Option<String>,
    pub doc_name: Option<String>,
    pub tu_count: usize,
}

/// An in-memory memoQ XLIFF document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XliffDocument {
    markup: MarkupDocument,
}

impl XliffDocument {
    /// Parse a document from XML text
    ///
    /// # Errors
    /// Returns an error if the XML is malformed or the document has no
    /// `file/body` element.
    pub fn parse(content: &str) -> Result<Self> {
        let doc = XliffDocument {
            markup: parse_markup(content)?,
        };
        // Fail early rather than on first unit access
        doc.body()?;
        Ok(doc)
    }

    /// Wrap an already parsed markup tree.
    ///
    /// # Errors
    /// Returns an error if the tree has no `file/body` element.
    pub fn from_markup(markup: MarkupDocument) -> Result<Self> {
        let doc = XliffDocument { markup };
        doc.body()?;
        Ok(doc)
    }

    #[must_use]
    pub fn markup(&self) -> &MarkupDocument {
        &self.markup
    }

    #[must_use]
    pub fn into_markup(self) -> MarkupDocument {
        self.markup
    }

    fn file(&self) -> Result<&MarkupElement> {
        self.markup.root.child("file").ok_or_else(|| missing("file"))
    }

    fn body(&self) -> Result<&MarkupElement> {
        self.file()?.child("body").ok_or_else(|| missing("body"))
    }

    fn body_mut(&mut self) -> Result<&mut MarkupElement> {
        self.markup
            .root
            .child_mut("file")
            .ok_or_else(|| missing("file"))?
            .child_mut("body")
            .ok_or_else(|| missing("body"))
    }

    /// Languages, document name and number of units.
    #[must_use]
    pub fn info(&self) -> DocInfo {
        let Ok(file) = self.file() else {
            return DocInfo::default();
        };
        let attr = |name: &str| file.attr(name).map(str::to_owned);

        DocInfo {
            src_lang: attr("source-language"),
            trg_lang: attr("target-language"),
            doc_name: attr("original"),
            tu_count: self.unit_count(),
        }
    }

    /// Number of translation units in the body.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.body().map_or(0, |body| body.elements().count())
    }

    /// Iterate over all translation units in document order.
    pub fn units(&self) -> impl Iterator<Item = TransUnit<'_>> {
        self.body()
            .into_iter()
            .flat_map(MarkupElement::elements)
            .map(TransUnit::new)
    }

    /// The translation unit at `index`
    ///
    /// # Errors
    /// Returns [`Error::UnitOutOfRange`] if there is no such unit.
    pub fn tu(&self, index: usize) -> Result<TransUnit<'_>> {
        let body = self.body()?;
        body.elements()
            .nth(index)
            .map(TransUnit::new)
            .ok_or_else(|| Error::UnitOutOfRange {
                index,
                count: body.elements().count(),
            })
    }

    /// Mutable access to the translation unit at `index`
    ///
    /// # Errors
    /// Returns [`Error::UnitOutOfRange`] if there is no such unit.
    pub fn tu_mut(&mut self, index: usize) -> Result<TransUnitMut<'_>> {
        let count = self.unit_count();
        self.body_mut()?
            .elements_mut()
            .nth(index)
            .map(TransUnitMut::new)
            .ok_or(Error::UnitOutOfRange { index, count })
    }

    /// Serialize back to XLIFF text
    ///
    /// # Errors
    /// Returns an error if XML serialization fails.
    pub fn write_xliff(&self) -> Result<String> {
        serialize_markup(&self.markup)
    }

    /// Serialize the node tree as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn write_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.markup)?)
    }
}

fn missing(name: &str) -> Error {
    Error::MissingElement {
        name: name.to_owned(),
    }
}
