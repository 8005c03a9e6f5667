use crate::{Errors, Segment};

/// Segment over a payload and label known at compile time
///
/// # Examples
///
/// ```rust
/// use rdsegment::model::{FixedSegment, Segment};
///
/// const FIXED: FixedSegment = FixedSegment::new("FIXED", b"\x01\x02\x03");
/// assert_eq!(FIXED.size(), 3);
/// assert_eq!(FIXED.data().unwrap(), b"\x01\x02\x03");
/// assert_eq!(FIXED.kind(), "FIXED");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSegment {
    label: &'static str,
    data: &'static [u8],
}

impl FixedSegment {
    /// Build a segment over a static payload
    pub const fn new(label: &'static str, data: &'static [u8]) -> FixedSegment {
        FixedSegment { label, data }
    }
    /// Build a segment with no payload
    pub const fn empty(label: &'static str) -> FixedSegment {
        FixedSegment { label, data: &[] }
    }
}

impl Segment for FixedSegment {
    type Data = [u8];
    type Kind = str;
    #[inline]
    fn size(&self) -> usize { self.data.len() }
    #[inline]
    fn data(&self) -> Result<&[u8], Errors> { Ok(self.data) }
    #[inline]
    fn kind(&self) -> &str { self.label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::verify_size;

    #[test]
    fn fixed_payload() {
        let segment = FixedSegment::new("FIXED", b"\x01\x02\x03");
        assert_eq!(segment.size(), 3);
        assert_eq!(segment.data().unwrap(), b"\x01\x02\x03");
        assert_eq!(segment.kind(), "FIXED");
        assert!(verify_size(&segment).is_ok());
    }

    #[test]
    fn empty_segment_has_no_size() {
        let segment = FixedSegment::empty("FIXED");
        assert_eq!(segment.size(), 0);
        assert!(segment.is_empty());
        assert_eq!(segment.data().unwrap().len(), 0);
    }
}
