/*!
The capability shared by every segment
*/

use tracing::debug;
use crate::error::Errors;

/// A sized unit of data tagged with a segment type
///
/// Holders of heterogeneous segments work through this trait only. Each
/// implementor chooses the shape of its payload ([`Data`]) and of its type
/// identifier ([`Kind`]), and defines when [`data`] fails.
///
/// A freshly built segment with no payload reports a size of 0.
///
/// The capability itself cannot be used as a segment: only implementors can.
///
/// ```compile_fail
/// use rdsegment::model::Segment;
///
/// fn segment_size(segment: &impl Segment) -> usize { segment.size() }
/// segment_size(&42u32);
/// ```
///
/// ```rust
/// use rdsegment::model::{FixedSegment, Segment};
///
/// fn segment_size(segment: &impl Segment) -> usize { segment.size() }
/// assert_eq!(segment_size(&FixedSegment::new("FIXED", b"\x01\x02\x03")), 3);
/// ```
///
/// # Examples
///
/// ```rust
/// use rdsegment::model::{FixedSegment, RawSegment, Segment};
///
/// let segments: Vec<Box<dyn Segment<Data = [u8], Kind = str>>> = vec![
///     Box::new(FixedSegment::new("FIXED", b"\x01\x02\x03")),
///     Box::new(RawSegment::with_data(String::from("RAW"), vec![0; 8])),
/// ];
/// let total: usize = segments.iter().map(|s| s.size()).sum();
/// assert_eq!(total, 11);
/// ```
///
/// [`Data`]: Segment::Data
/// [`Kind`]: Segment::Kind
/// [`data`]: Segment::data
pub trait Segment {
    /// Representation of the segment's payload
    type Data: ?Sized;
    /// Identifier of the segment's type
    type Kind: ?Sized + std::fmt::Display;
    /// Length in bytes of the segment's payload
    ///
    /// Expected to match the length of [`data`](Segment::data), which is not checked here.
    /// See [`verify_size`].
    fn size(&self) -> usize;
    /// Get the segment's payload
    fn data(&self) -> Result<&Self::Data, Errors>;
    /// Get the segment's type
    fn kind(&self) -> &Self::Kind;
    /// Whether the segment's payload is empty or missing
    #[inline]
    fn is_empty(&self) -> bool { self.size() == 0 }
}

/// Check that a byte segment's size matches the length of its payload
///
/// A segment that reports a size of 0 and has no payload yet is valid.
///
/// # Errors
///
/// [`Errors::SizeMismatch`] if the lengths differ, or the segment's own error
/// if its payload cannot be read.
///
/// # Examples
///
/// ```rust
/// use rdsegment::model::{verify_size, RawSegment};
///
/// let segment = RawSegment::with_data(String::from("RAW"), vec![1, 2, 3, 4]);
/// assert!(verify_size(&segment).is_ok());
/// assert!(verify_size(&RawSegment::new(String::from("RAW"))).is_ok());
/// ```
pub fn verify_size<S>(segment: &S) -> Result<(), Errors>
where
    S: Segment<Data = [u8]> + ?Sized,
{
    let actual = match segment.data() {
        Ok(data) => data.len(),
        Err(Errors::NoData) if segment.size() == 0 => return Ok(()),
        Err(e) => return Err(e),
    };
    if actual != segment.size() {
        debug!(kind = %segment.kind(), size = segment.size(), actual, "segment size mismatch");
        return Err(Errors::SizeMismatch { size: segment.size(), actual });
    }
    Ok(())
}
