use std::cell::Cell;
use std::str;
use yaml_events::wire::{MemoryInit, RawScalar, RecordInit, ScalarRecord};
use yaml_events::{ScalarEvent, ScalarStyle};

/// A parsed-record stub that counts every raw-buffer read.
struct CountingRecord {
    anchor: Option<Vec<u8>>,
    tag: Option<Vec<u8>>,
    value: Vec<u8>,
    length: usize,
    style: u32,
    plain_implicit: bool,
    quoted_implicit: bool,
    anchor_reads: Cell<usize>,
    tag_reads: Cell<usize>,
    value_reads: Cell<usize>,
    length_reads: Cell<usize>,
}

impl CountingRecord {
    fn new(value: &[u8], length: usize) -> CountingRecord {
        CountingRecord {
            anchor: Some(b"a1".to_vec()),
            tag: Some(b"tag:yaml.org,2002:str".to_vec()),
            value: value.to_vec(),
            length,
            style: ScalarStyle::Plain.code(),
            plain_implicit: true,
            quoted_implicit: true,
            anchor_reads: Cell::new(0),
            tag_reads: Cell::new(0),
            value_reads: Cell::new(0),
            length_reads: Cell::new(0),
        }
    }
}

impl ScalarRecord for CountingRecord {
    fn anchor(&self) -> Option<&[u8]> {
        self.anchor_reads.set(self.anchor_reads.get() + 1);
        self.anchor.as_deref()
    }

    fn tag(&self) -> Option<&[u8]> {
        self.tag_reads.set(self.tag_reads.get() + 1);
        self.tag.as_deref()
    }

    fn value(&self) -> &[u8] {
        self.value_reads.set(self.value_reads.get() + 1);
        &self.value
    }

    fn length(&self) -> usize {
        self.length_reads.set(self.length_reads.get() + 1);
        self.length
    }

    fn style(&self) -> u32 {
        self.style
    }

    fn plain_implicit(&self) -> bool {
        self.plain_implicit
    }

    fn quoted_implicit(&self) -> bool {
        self.quoted_implicit
    }
}

/// An initializer stub whose record construction always fails.
struct FailingInit;

impl RecordInit for FailingInit {
    fn scalar_record(
        &mut self,
        _anchor: Option<&[u8]>,
        _tag: Option<&[u8]>,
        _value: Option<&[u8]>,
        _length: usize,
        _plain_implicit: bool,
        _quoted_implicit: bool,
        _style: ScalarStyle,
    ) -> Option<RawScalar> {
        None
    }
}

#[test]
fn test_lazy_decode_runs_once() {
    let record = CountingRecord::new(b"hello", 5);
    let event = ScalarEvent::from_record(&record);

    assert_eq!(event.value(), "hello");
    assert_eq!(event.value(), "hello");
    assert_eq!(record.value_reads.get(), 1);

    assert_eq!(event.anchor(), Some("a1"));
    assert_eq!(event.anchor(), Some("a1"));
    assert_eq!(record.anchor_reads.get(), 1);

    assert_eq!(event.tag(), Some("tag:yaml.org,2002:str"));
    assert_eq!(event.tag(), Some("tag:yaml.org,2002:str"));
    assert_eq!(record.tag_reads.get(), 1);
}

#[test]
fn test_bound_length_is_authoritative() {
    // "héllo" is 6 bytes but decodes to 5 characters; the record's length
    // field wins over the decoded character count.
    let record = CountingRecord::new(b"h\xC3\xA9llo", 6);
    let event = ScalarEvent::from_record(&record);

    assert_eq!(event.value(), "héllo");
    assert_eq!(event.value().chars().count(), 5);
    assert_eq!(event.length(), 6);
}

#[test]
fn test_bound_length_is_not_cached() {
    let record = CountingRecord::new(b"x", 1);
    let event = ScalarEvent::from_record(&record);

    assert_eq!(event.length(), 1);
    assert_eq!(event.length(), 1);
    assert_eq!(record.length_reads.get(), 2);
}

#[test]
fn test_detached_length_is_char_count() {
    let event = ScalarEvent::new("héllo");
    assert_eq!(event.length(), 5);
}

#[test]
fn test_value_only_constructor_defaults() {
    let event = ScalarEvent::new("x");
    assert_eq!(event.value(), "x");
    assert_eq!(event.tag(), None);
    assert_eq!(event.anchor(), None);
    assert_eq!(event.style(), ScalarStyle::Plain);
    assert!(event.plain_implicit());
    assert!(event.quoted_implicit());
}

#[test]
fn test_tagged_and_anchored_defaults() {
    let event = ScalarEvent::tagged("x", "tag:yaml.org,2002:int");
    assert_eq!(event.tag(), Some("tag:yaml.org,2002:int"));
    assert_eq!(event.anchor(), None);
    assert_eq!(event.style(), ScalarStyle::Plain);

    let event = ScalarEvent::anchored("x", "tag:yaml.org,2002:int", "a1");
    assert_eq!(event.anchor(), Some("a1"));
    assert!(event.plain_implicit());
    assert!(event.quoted_implicit());
}

#[test]
fn test_explicit_constructor_fidelity() {
    let event = ScalarEvent::explicit(
        "x",
        Some("tag:yaml.org,2002:str"),
        Some("a1"),
        ScalarStyle::DoubleQuoted,
        false,
        true,
    );
    assert_eq!(event.value(), "x");
    assert_eq!(event.tag(), Some("tag:yaml.org,2002:str"));
    assert_eq!(event.anchor(), Some("a1"));
    assert_eq!(event.style(), ScalarStyle::DoubleQuoted);
    assert!(!event.plain_implicit());
    assert!(event.quoted_implicit());
}

#[test]
fn test_styled_without_tag_or_anchor() {
    let event = ScalarEvent::styled("x", None, None, ScalarStyle::Literal);
    assert_eq!(event.tag(), None);
    assert_eq!(event.anchor(), None);
    assert_eq!(event.style(), ScalarStyle::Literal);
}

#[test]
fn test_display_labels() {
    let event = ScalarEvent::explicit(
        "x",
        Some("!t"),
        Some("a1"),
        ScalarStyle::DoubleQuoted,
        false,
        true,
    );
    assert_eq!(
        event.to_string(),
        "ScalarEvent a1 !t x 1 plain_explicit quoted_implicit DoubleQuoted"
    );
}

#[test]
fn test_display_absent_fields_render_empty() {
    let event = ScalarEvent::new("hi");
    assert_eq!(
        event.to_string(),
        "ScalarEvent   hi 2 plain_implicit quoted_implicit Plain"
    );
}

#[test]
fn test_failing_init_raises_construction_error() {
    let event = ScalarEvent::new("x");

    let err = event.create_event(&mut FailingInit).unwrap_err();
    assert_eq!(err.to_string(), "YAML construction failed");

    // The failure left nothing behind; the same event serializes fine
    // through a working initializer.
    let record = event.create_event(&mut MemoryInit).unwrap();
    assert_eq!(&*record.value, b"x");
}

#[test]
fn test_create_event_carries_style_and_flags() {
    let event = ScalarEvent::explicit(
        "x",
        None,
        None,
        ScalarStyle::SingleQuoted,
        false,
        false,
    );
    let record = event.create_event(&mut MemoryInit).unwrap();
    assert_eq!(record.style, ScalarStyle::SingleQuoted);
    assert!(!record.plain_implicit);
    assert!(!record.quoted_implicit);
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    let parsed = RawScalar {
        anchor: None,
        tag: Some(Box::from(&b"tag:yaml.org,2002:str"[..])),
        value: Box::from(&b"hello"[..]),
        length: 5,
        style: ScalarStyle::Plain,
        plain_implicit: true,
        quoted_implicit: false,
    };

    let event = ScalarEvent::from_record(&parsed);
    assert_eq!(event.value(), "hello");
    assert_eq!(event.length(), 5);
    assert!(event.plain_implicit());
    assert!(!event.quoted_implicit());
    assert_eq!(event.style(), ScalarStyle::Plain);

    let emitted = event.create_event(&mut MemoryInit)?;
    assert_eq!(str::from_utf8(&emitted.value)?, "hello");
    assert_eq!(emitted.tag.as_deref(), Some(&b"tag:yaml.org,2002:str"[..]));
    assert_eq!(emitted.anchor, None);
    assert_eq!(emitted.length, 5);
    assert_eq!(emitted.style, ScalarStyle::Plain);
    assert!(emitted.plain_implicit);
    assert!(!emitted.quoted_implicit);
    Ok(())
}
