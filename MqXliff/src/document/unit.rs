//! Translation unit ("row") accessors
//!
//! Getters return fresh values; changing a returned range list does not touch
//! the document. Setters replace the segment's children wholesale.

use super::batch::{INVALID_STATUS, NO_STATUS};
use super::status::TuStatus;
use crate::error::{Error, Result};
use crate::markup::{MarkupElement, MarkupNode};
use crate::rich::{
    Diagnostics, EncodeOptions, FormatRange, TracingDiagnostics, decode_runs_with,
    encode_runs_with,
};

const STATUS_ATTR: &str = "mq:status";
const PERCENT_ATTR: &str = "mq:percent";

/// Which segment of a unit to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Source,
    Target,
}

impl Segment {
    /// Element name of the segment inside a `trans-unit`.
    #[must_use]
    pub fn element_name(self) -> &'static str {
        match self {
            Segment::Source => "source",
            Segment::Target => "target",
        }
    }
}

/// Read-only view of one `trans-unit` element.
#[derive(Debug, Clone, Copy)]
pub struct TransUnit<'a> {
    element: &'a MarkupElement,
}

/// Mutable view of one `trans-unit` element.
#[derive(Debug)]
pub struct TransUnitMut<'a> {
    element: &'a mut MarkupElement,
}

impl<'a> TransUnit<'a> {
    pub(crate) fn new(element: &'a MarkupElement) -> Self {
        TransUnit { element }
    }

    /// The underlying `trans-unit` element.
    #[must_use]
    pub fn element(&self) -> &'a MarkupElement {
        self.element
    }

    /// The unit's `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.element.attr("id")
    }

    /// Row status from `mq:status`; `None` when the attribute is absent.
    ///
    /// # Errors
    /// Returns [`Error::InvalidStatus`] if the attribute holds an unknown value.
    pub fn status(&self) -> Result<Option<TuStatus>> {
        self.element
            .attr(STATUS_ATTR)
            .map(str::parse)
            .transpose()
    }

    /// Display label for the row status; never fails.
    ///
    /// Unknown values map to [`INVALID_STATUS`], a missing attribute to [`NO_STATUS`].
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        match self.status() {
            Ok(Some(status)) => status.as_str(),
            Ok(None) => NO_STATUS,
            Err(_) => INVALID_STATUS,
        }
    }

    /// Match rate of the last inserted match, between 0 and 102; 0 if unknown.
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        self.element
            .attr(PERCENT_ATTR)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0.0)
    }

    /// The segment element itself.
    ///
    /// # Errors
    /// Returns [`Error::SegmentNotFound`] if the unit lacks it.
    pub fn segment(&self, segment: Segment) -> Result<&'a MarkupElement> {
        self.element
            .child(segment.element_name())
            .ok_or(Error::SegmentNotFound {
                segment: segment.element_name(),
            })
    }

    /// Segment text without tags or formatting.
    pub fn plain(&self, segment: Segment) -> Result<String> {
        Ok(self.segment(segment)?.text())
    }

    /// Source segment as plain text.
    pub fn src_plain(&self) -> Result<String> {
        self.plain(Segment::Source)
    }

    /// Target segment as plain text.
    pub fn trg_plain(&self) -> Result<String> {
        self.plain(Segment::Target)
    }

    /// Segment in its rich representation, reporting markup oddities to `diagnostics`.
    pub fn rich_with(
        &self,
        segment: Segment,
        diagnostics: &dyn Diagnostics,
    ) -> Result<Vec<FormatRange>> {
        let element = self.segment(segment)?;
        let ranges = decode_runs_with(&element.children, diagnostics)?;
        tracing::debug!(
            unit = self.id().unwrap_or_default(),
            segment = segment.element_name(),
            ranges = ranges.len(),
            "Decoded segment"
        );
        Ok(ranges)
    }

    /// Segment in its rich representation.
    pub fn rich(&self, segment: Segment) -> Result<Vec<FormatRange>> {
        self.rich_with(segment, &TracingDiagnostics)
    }

    /// Source segment in its rich representation.
    ///
    /// Building the ranges involves work; cache them if you need them repeatedly.
    pub fn src_rich(&self) -> Result<Vec<FormatRange>> {
        self.rich(Segment::Source)
    }

    /// Target segment in its rich representation.
    pub fn trg_rich(&self) -> Result<Vec<FormatRange>> {
        self.rich(Segment::Target)
    }
}

impl<'a> TransUnitMut<'a> {
    pub(crate) fn new(element: &'a mut MarkupElement) -> Self {
        TransUnitMut { element }
    }

    /// Read-only view of the same unit.
    #[must_use]
    pub fn view(&self) -> TransUnit<'_> {
        TransUnit::new(self.element)
    }

    /// Overwrites `mq:status`.
    pub fn set_status(&mut self, status: TuStatus) {
        self.element.set_attr(STATUS_ATTR, status.as_str());
    }

    fn segment_mut(&mut self, segment: Segment) -> Result<&mut MarkupElement> {
        self.element
            .child_mut(segment.element_name())
            .ok_or(Error::SegmentNotFound {
                segment: segment.element_name(),
            })
    }

    /// Replaces the segment with a single text node.
    pub fn set_plain(&mut self, segment: Segment, text: &str) -> Result<()> {
        self.segment_mut(segment)?.children = vec![MarkupNode::text(text)];
        Ok(())
    }

    /// Overwrites the source segment with plain text.
    pub fn set_src_plain(&mut self, text: &str) -> Result<()> {
        self.set_plain(Segment::Source, text)
    }

    /// Overwrites the target segment with plain text.
    pub fn set_trg_plain(&mut self, text: &str) -> Result<()> {
        self.set_plain(Segment::Target, text)
    }

    /// Replaces the segment with the encoding of `ranges`.
    pub fn set_rich_with(
        &mut self,
        segment: Segment,
        ranges: &[FormatRange],
        options: EncodeOptions,
    ) -> Result<()> {
        let nodes = encode_runs_with(ranges, options);
        self.segment_mut(segment)?.children = nodes;
        Ok(())
    }

    /// Replaces the segment with the encoding of `ranges`, default options.
    pub fn set_rich(&mut self, segment: Segment, ranges: &[FormatRange]) -> Result<()> {
        self.set_rich_with(segment, ranges, EncodeOptions::default())
    }

    /// Overwrites the source segment from rich ranges.
    pub fn set_src_rich(&mut self, ranges: &[FormatRange]) -> Result<()> {
        self.set_rich(Segment::Source, ranges)
    }

    /// Overwrites the target segment from rich ranges.
    pub fn set_trg_rich(&mut self, ranges: &[FormatRange]) -> Result<()> {
        self.set_rich(Segment::Target, ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich::{ContentRun, FormatFlag};
    use pretty_assertions::assert_eq;

    fn unit() -> MarkupElement {
        MarkupElement::new("trans-unit")
            .with_attr("id", "4")
            .with_attr("mq:status", "PartiallyEdited")
            .with_attr("mq:percent", "95")
            .with_child(
                MarkupElement::new("source")
                    .with_text("Save ")
                    .with_child(
                        MarkupElement::new("bpt")
                            .with_attr("id", "1")
                            .with_attr("ctype", "bold")
                            .with_text("{}"),
                    )
                    .with_text("now")
                    .with_child(MarkupElement::new("ept").with_attr("id", "1").with_text("{}")),
            )
            .with_child(MarkupElement::new("target").with_text("Jetzt speichern"))
    }

    #[test]
    fn test_metadata() {
        let element = unit();
        let tu = TransUnit::new(&element);

        assert_eq!(tu.id(), Some("4"));
        assert_eq!(tu.status().unwrap(), Some(TuStatus::PartiallyEdited));
        assert!((tu.match_rate() - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let element = MarkupElement::new("trans-unit").with_attr("mq:percent", "n/a");
        let tu = TransUnit::new(&element);

        assert_eq!(tu.status().unwrap(), None);
        assert!(tu.match_rate().abs() < f64::EPSILON);
        assert!(matches!(
            tu.src_plain(),
            Err(Error::SegmentNotFound { segment: "source" })
        ));
    }

    #[test]
    fn test_status_label() {
        let known = unit();
        assert_eq!(TransUnit::new(&known).status_label(), "PartiallyEdited");

        let missing = MarkupElement::new("trans-unit");
        assert_eq!(TransUnit::new(&missing).status_label(), NO_STATUS);

        let unknown = MarkupElement::new("trans-unit").with_attr("mq:status", "Bogus");
        let tu = TransUnit::new(&unknown);
        assert!(matches!(tu.status(), Err(Error::InvalidStatus(_))));
        assert_eq!(tu.status_label(), INVALID_STATUS);
    }

    #[test]
    fn test_plain_text() {
        let element = unit();
        let tu = TransUnit::new(&element);

        assert_eq!(tu.src_plain().unwrap(), "Save now");
        assert_eq!(tu.trg_plain().unwrap(), "Jetzt speichern");
    }

    #[test]
    fn test_rich_source() {
        let element = unit();
        let ranges = TransUnit::new(&element).src_rich().unwrap();

        assert_eq!(
            ranges,
            vec![
                FormatRange::new().with_text("Save "),
                FormatRange::new().with_flag(FormatFlag::Bold).with_text("now"),
            ]
        );
    }

    #[test]
    fn test_set_rich_target_then_read_back() {
        let mut element = unit();
        let ranges = vec![
            FormatRange::new().with_text("Jetzt "),
            FormatRange::new()
                .with_flag(FormatFlag::Bold)
                .with_text("speichern")
                .with_run(ContentRun::StructuralTag),
        ];

        let mut tu = TransUnitMut::new(&mut element);
        tu.set_trg_rich(&ranges).unwrap();
        tu.set_status(TuStatus::ManuallyConfirmed);

        let view = tu.view();
        assert_eq!(view.trg_rich().unwrap(), ranges);
        assert_eq!(view.trg_plain().unwrap(), "Jetzt speichern");
        assert_eq!(view.status().unwrap(), Some(TuStatus::ManuallyConfirmed));
    }

    #[test]
    fn test_returned_ranges_are_detached() {
        let element = unit();
        let tu = TransUnit::new(&element);
        let mut ranges = tu.src_rich().unwrap();
        ranges.clear();

        assert_eq!(tu.src_rich().unwrap().len(), 2);
    }

    #[test]
    fn test_set_plain_replaces_markup() {
        let mut element = unit();
        let mut tu = TransUnitMut::new(&mut element);
        tu.set_src_plain("Save later").unwrap();

        let source = tu.view().segment(Segment::Source).unwrap();
        assert_eq!(source.children, vec![MarkupNode::text("Save later")]);
    }
}
