//! Wire-level scalar records.
//!
//! A [`RawScalar`] is the low-level record shape shared by both ends of an
//! event stream: the parser produces one per scalar it reads, and the emitter
//! consumes one per scalar it writes. The two traits in this module are the
//! seams to those collaborators — [`ScalarRecord`] is what a bound
//! [`ScalarEvent`](crate::ScalarEvent) requires of a parsed record, and
//! [`RecordInit`] is the emitter primitive that assembles a fresh record for
//! output.

use crate::ScalarStyle;

/// A wire-level scalar record.
///
/// Buffers are raw UTF-8 bytes; `anchor` and `tag` are `None` when the wire
/// carries no such buffer. A record assembled by [`MemoryInit`] owns freshly
/// allocated buffers, released when the record is dropped.
#[derive(Debug)]
pub struct RawScalar {
    /// Anchor name bytes, absent if the scalar carries no anchor.
    pub anchor: Option<Box<[u8]>>,
    /// Tag bytes, absent if the tag was resolved implicitly.
    pub tag: Option<Box<[u8]>>,
    /// The scalar's content bytes.
    pub value: Box<[u8]>,
    /// Length of the value as recorded on the wire; authoritative over
    /// whatever a consumer later decodes from `value`.
    pub length: usize,
    /// Presentation style.
    pub style: ScalarStyle,
    /// Whether the tag is inferable in plain context.
    pub plain_implicit: bool,
    /// Whether the tag is inferable even though the scalar is quoted.
    pub quoted_implicit: bool,
}

/// Read-side contract a parsed scalar record must satisfy.
///
/// All methods are cheap field reads; decoding into native strings is the
/// caller's concern.
pub trait ScalarRecord {
    /// Raw anchor bytes, or `None` when absent.
    fn anchor(&self) -> Option<&[u8]>;
    /// Raw tag bytes, or `None` when absent.
    fn tag(&self) -> Option<&[u8]>;
    /// Raw value bytes.
    fn value(&self) -> &[u8];
    /// The record's authoritative length field.
    fn length(&self) -> usize;
    /// The wire style code.
    fn style(&self) -> u32;
    /// The plain-implicit flag bit.
    fn plain_implicit(&self) -> bool;
    /// The quoted-implicit flag bit.
    fn quoted_implicit(&self) -> bool;
}

impl ScalarRecord for RawScalar {
    fn anchor(&self) -> Option<&[u8]> {
        self.anchor.as_deref()
    }

    fn tag(&self) -> Option<&[u8]> {
        self.tag.as_deref()
    }

    fn value(&self) -> &[u8] {
        &self.value
    }

    fn length(&self) -> usize {
        self.length
    }

    fn style(&self) -> u32 {
        self.style.code()
    }

    fn plain_implicit(&self) -> bool {
        self.plain_implicit
    }

    fn quoted_implicit(&self) -> bool {
        self.quoted_implicit
    }
}

/// Emitter primitive that assembles wire-level scalar records.
///
/// Returns `None` when the record cannot be constructed; the caller treats
/// that as a construction failure. The buffer arguments are transient — an
/// implementation that keeps their contents must copy them.
pub trait RecordInit {
    /// Assembles one scalar record from encoded buffers.
    #[allow(clippy::too_many_arguments)]
    fn scalar_record(
        &mut self,
        anchor: Option<&[u8]>,
        tag: Option<&[u8]>,
        value: Option<&[u8]>,
        length: usize,
        plain_implicit: bool,
        quoted_implicit: bool,
        style: ScalarStyle,
    ) -> Option<RawScalar>;
}

/// Default [`RecordInit`] that assembles records in process memory.
pub struct MemoryInit;

impl RecordInit for MemoryInit {
    fn scalar_record(
        &mut self,
        anchor: Option<&[u8]>,
        tag: Option<&[u8]>,
        value: Option<&[u8]>,
        length: usize,
        plain_implicit: bool,
        quoted_implicit: bool,
        style: ScalarStyle,
    ) -> Option<RawScalar> {
        Some(RawScalar {
            anchor: anchor.map(Box::from),
            tag: tag.map(Box::from),
            // An absent value buffer on the wire stands for the empty scalar.
            value: value.map(Box::from).unwrap_or_default(),
            length,
            style,
            plain_implicit,
            quoted_implicit,
        })
    }
}
