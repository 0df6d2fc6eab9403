//! The scalar event and its presentation style.

use crate::codec;
use crate::error::{self, Result};
use crate::wire::{RawScalar, RecordInit, ScalarRecord};
use once_cell::unsync::OnceCell;
use std::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation style of a scalar in the YAML text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalarStyle {
    /// Let the emitter choose.
    Any,
    /// Unquoted: `key: value`
    Plain,
    /// `'single quoted'`
    SingleQuoted,
    /// `"double quoted"`
    DoubleQuoted,
    /// Literal block scalar, introduced by `|`.
    Literal,
    /// Folded block scalar, introduced by `>`.
    Folded,
}

impl ScalarStyle {
    /// Maps a wire style code to a style. Codes outside the known range map
    /// to `Any`.
    pub fn from_code(code: u32) -> ScalarStyle {
        match code {
            1 => ScalarStyle::Plain,
            2 => ScalarStyle::SingleQuoted,
            3 => ScalarStyle::DoubleQuoted,
            4 => ScalarStyle::Literal,
            5 => ScalarStyle::Folded,
            _ => ScalarStyle::Any,
        }
    }

    /// The wire style code for this style.
    pub fn code(self) -> u32 {
        match self {
            ScalarStyle::Any => 0,
            ScalarStyle::Plain => 1,
            ScalarStyle::SingleQuoted => 2,
            ScalarStyle::DoubleQuoted => 3,
            ScalarStyle::Literal => 4,
            ScalarStyle::Folded => 5,
        }
    }
}

impl Display for ScalarStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// One scalar leaf value in a YAML event stream.
///
/// A `ScalarEvent` exists in exactly one of two provenances for its whole
/// lifetime:
///
/// - **Bound** — created by [`from_record`](ScalarEvent::from_record) over a
///   record the parser just produced. Anchor, tag, and value are decoded
///   from the record lazily, each at most once, on first access. The event
///   borrows the record and is meant to be read and discarded before the
///   parser moves on.
/// - **Detached** — created by the [`new`](ScalarEvent::new) constructor
///   family ahead of emission, with every field supplied up front. There is
///   no record to fall back to.
///
/// There are no setters; which provenance an event has is fixed at
/// construction.
///
/// ```
/// use yaml_events::{ScalarEvent, ScalarStyle};
///
/// let scalar = ScalarEvent::new("hello");
/// assert_eq!(scalar.value(), "hello");
/// assert_eq!(scalar.style(), ScalarStyle::Plain);
/// assert!(scalar.tag().is_none());
/// ```
pub struct ScalarEvent<'rec> {
    state: State<'rec>,
    style: ScalarStyle,
    plain_implicit: bool,
    quoted_implicit: bool,
}

enum State<'rec> {
    Bound {
        record: &'rec dyn ScalarRecord,
        anchor: OnceCell<Option<String>>,
        tag: OnceCell<Option<String>>,
        value: OnceCell<String>,
    },
    Detached {
        anchor: Option<String>,
        tag: Option<String>,
        value: String,
    },
}

impl<'rec> ScalarEvent<'rec> {
    /// Wraps a scalar record just produced by a parser.
    ///
    /// Style and the two implicit flags are captured now; anchor, tag, and
    /// value stay undecoded until first access.
    pub fn from_record(record: &'rec dyn ScalarRecord) -> ScalarEvent<'rec> {
        ScalarEvent {
            style: ScalarStyle::from_code(record.style()),
            plain_implicit: record.plain_implicit(),
            quoted_implicit: record.quoted_implicit(),
            state: State::Bound {
                record,
                anchor: OnceCell::new(),
                tag: OnceCell::new(),
                value: OnceCell::new(),
            },
        }
    }
}

impl ScalarEvent<'static> {
    /// Builds a detached scalar with no tag or anchor, plain style, and
    /// implicit tag resolution.
    ///
    /// This is the constructor most emission code wants: implicit resolution
    /// produces the shortest, most portable output. The rest of the
    /// constructor family ([`tagged`](ScalarEvent::tagged),
    /// [`anchored`](ScalarEvent::anchored), [`styled`](ScalarEvent::styled),
    /// [`explicit`](ScalarEvent::explicit)) adds control one field at a time.
    pub fn new(value: impl Into<String>) -> ScalarEvent<'static> {
        ScalarEvent::detached(value.into(), None, None, ScalarStyle::Plain, true, true)
    }

    /// Builds a detached scalar with an explicit tag.
    pub fn tagged(value: impl Into<String>, tag: impl Into<String>) -> ScalarEvent<'static> {
        ScalarEvent::detached(
            value.into(),
            Some(tag.into()),
            None,
            ScalarStyle::Plain,
            true,
            true,
        )
    }

    /// Builds a detached scalar with an explicit tag and anchor.
    pub fn anchored(
        value: impl Into<String>,
        tag: impl Into<String>,
        anchor: impl Into<String>,
    ) -> ScalarEvent<'static> {
        ScalarEvent::detached(
            value.into(),
            Some(tag.into()),
            Some(anchor.into()),
            ScalarStyle::Plain,
            true,
            true,
        )
    }

    /// Builds a detached scalar with a requested presentation style.
    ///
    /// Tag and anchor are optional at this arity.
    pub fn styled(
        value: impl Into<String>,
        tag: Option<&str>,
        anchor: Option<&str>,
        style: ScalarStyle,
    ) -> ScalarEvent<'static> {
        ScalarEvent::detached(
            value.into(),
            tag.map(str::to_owned),
            anchor.map(str::to_owned),
            style,
            true,
            true,
        )
    }

    /// Builds a detached scalar with every field under caller control.
    pub fn explicit(
        value: impl Into<String>,
        tag: Option<&str>,
        anchor: Option<&str>,
        style: ScalarStyle,
        plain_implicit: bool,
        quoted_implicit: bool,
    ) -> ScalarEvent<'static> {
        ScalarEvent::detached(
            value.into(),
            tag.map(str::to_owned),
            anchor.map(str::to_owned),
            style,
            plain_implicit,
            quoted_implicit,
        )
    }

    fn detached(
        value: String,
        tag: Option<String>,
        anchor: Option<String>,
        style: ScalarStyle,
        plain_implicit: bool,
        quoted_implicit: bool,
    ) -> ScalarEvent<'static> {
        ScalarEvent {
            state: State::Detached { anchor, tag, value },
            style,
            plain_implicit,
            quoted_implicit,
        }
    }
}

impl ScalarEvent<'_> {
    /// The anchor name, if any.
    ///
    /// On a bound event the record's anchor buffer is decoded on the first
    /// call and cached.
    pub fn anchor(&self) -> Option<&str> {
        match &self.state {
            State::Bound { record, anchor, .. } => anchor
                .get_or_init(|| record.anchor().map(codec::decode))
                .as_deref(),
            State::Detached { anchor, .. } => anchor.as_deref(),
        }
    }

    /// The explicit tag, if any; `None` means the tag resolves implicitly.
    pub fn tag(&self) -> Option<&str> {
        match &self.state {
            State::Bound { record, tag, .. } => {
                tag.get_or_init(|| record.tag().map(codec::decode)).as_deref()
            }
            State::Detached { tag, .. } => tag.as_deref(),
        }
    }

    /// The scalar's content.
    pub fn value(&self) -> &str {
        match &self.state {
            State::Bound { record, value, .. } => value.get_or_init(|| codec::decode(record.value())),
            State::Detached { value, .. } => value,
        }
    }

    /// The scalar's length.
    ///
    /// On a bound event this is the record's length field, re-read on every
    /// call — the record is authoritative and may disagree with the decoded
    /// character count. On a detached event it is the character count of the
    /// value.
    pub fn length(&self) -> usize {
        match &self.state {
            State::Bound { record, .. } => record.length(),
            State::Detached { value, .. } => value.chars().count(),
        }
    }

    /// The presentation style seen on parse, or requested for emission.
    pub fn style(&self) -> ScalarStyle {
        self.style
    }

    /// Whether the tag can be inferred from the plain (unquoted) form.
    pub fn plain_implicit(&self) -> bool {
        self.plain_implicit
    }

    /// Whether the tag can be inferred even though the scalar is quoted.
    pub fn quoted_implicit(&self) -> bool {
        self.quoted_implicit
    }

    /// Serializes this event into a wire-level scalar record.
    ///
    /// The anchor, tag, and value are encoded into transient wire buffers and
    /// handed to the initializer along with the value's character length, the
    /// implicit flags, and the requested style. The buffers are released when
    /// this call returns, on success and on failure alike.
    ///
    /// # Errors
    ///
    /// Fails with the construction error when the initializer rejects the
    /// record. No partial record is observable on failure.
    pub fn create_event(&self, init: &mut dyn RecordInit) -> Result<RawScalar> {
        let length = self.value().chars().count();
        let anchor = codec::encode(self.anchor());
        let tag = codec::encode(self.tag());
        let value = codec::encode(Some(self.value()));

        init.scalar_record(
            anchor.as_deref(),
            tag.as_deref(),
            value.as_deref(),
            length,
            self.plain_implicit,
            self.quoted_implicit,
            self.style,
        )
        .ok_or_else(error::construction)
    }
}

impl Display for ScalarEvent<'_> {
    /// Diagnostic rendering: type name, anchor, tag, value, length, one label
    /// per implicit flag, and the style. Absent anchor and tag render empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ScalarEvent {} {} {} {} {} {} {}",
            self.anchor().unwrap_or(""),
            self.tag().unwrap_or(""),
            self.value(),
            self.length(),
            if self.plain_implicit {
                "plain_implicit"
            } else {
                "plain_explicit"
            },
            if self.quoted_implicit {
                "quoted_implicit"
            } else {
                "quoted_explicit"
            },
            self.style,
        )
    }
}

impl Debug for ScalarEvent<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("ScalarEvent")
            .field("anchor", &self.anchor())
            .field("tag", &self.tag())
            .field("value", &self.value())
            .field("length", &self.length())
            .field("style", &self.style)
            .field("plain_implicit", &self.plain_implicit)
            .field("quoted_implicit", &self.quoted_implicit)
            .finish()
    }
}
