use tracing::trace;
use crate::{Errors, Segment, model::AsKind};

/// Segment owning an arbitrary byte payload
///
/// The type identifier `K` is chosen by the caller: a label (`String`) or a
/// numeric [`SegmentType`](crate::model::SegmentType) are the usual picks.
///
/// # Examples
///
/// ```rust
/// use rdsegment::model::{RawSegment, Segment, SegmentType};
///
/// let mut segment = RawSegment::new(SegmentType::new(0x1001));
/// assert_eq!(segment.size(), 0);
/// assert!(segment.data().is_err());
///
/// segment.set_data(vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(segment.size(), 4);
/// assert_eq!(segment.kind().to_string(), "0x1001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSegment<K> {
    /// The segment's type
    kind: K,
    /// Length of the segment's payload
    size: usize,
    /// Segment's payload (if it is loaded)
    data: Option<Vec<u8>>,
}

impl<K> RawSegment<K> {
    /// Build an empty segment of the provided type
    pub fn new(kind: K) -> RawSegment<K> {
        RawSegment { kind, size: 0, data: None }
    }
    /// Build a segment with its payload already attached
    pub fn with_data(kind: K, data: Vec<u8>) -> RawSegment<K> {
        RawSegment { kind, size: data.len(), data: Some(data) }
    }
    /// Whether a payload is attached, even an empty one
    pub fn is_loaded(&self) -> bool { self.data.is_some() }
    /// Attach a payload to the segment, replacing any previous one
    pub fn set_data(&mut self, data: Vec<u8>) {
        trace!(previous = self.size, size = data.len(), "attaching segment payload");
        self.size = data.len();
        self.data = Some(data);
    }
    /// Remove the segment's payload, leaving it empty
    pub fn take_data(&mut self) -> Option<Vec<u8>> {
        trace!(size = self.size, "taking segment payload");
        self.size = 0;
        self.data.take()
    }
}

impl<K: AsKind> Segment for RawSegment<K> {
    type Data = [u8];
    type Kind = K::Target;
    #[inline]
    fn size(&self) -> usize { self.size }
    fn data(&self) -> Result<&[u8], Errors> {
        self.data.as_deref().ok_or(Errors::NoData)
    }
    #[inline]
    fn kind(&self) -> &K::Target { self.kind.as_kind() }
}

impl<K: std::fmt::Display> std::fmt::Display for RawSegment<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (size: {}, loaded: {})", self.kind, self.size, self.is_loaded())
    }
}
