/// Numeric identifier of a segment's type
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentType(u16);

impl SegmentType {
    /// Build a segment type from its raw ID
    pub const fn new(id: u16) -> SegmentType { SegmentType(id) }
    /// The raw type ID
    pub const fn id(&self) -> u16 { self.0 }
}

/// Wrap a raw type ID
impl From<u16> for SegmentType {
    fn from(id: u16) -> Self { SegmentType(id) }
}

impl std::fmt::Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// A type identifier stored by a segment, exposed in its borrowed form
///
/// Labels stored as `String` are exposed as `str`, so that segments holding
/// owned and static labels share the same [`Segment::Kind`](crate::Segment::Kind).
pub trait AsKind {
    /// The borrowed identifier
    type Target: ?Sized + std::fmt::Display;
    fn as_kind(&self) -> &Self::Target;
}

impl AsKind for String {
    type Target = str;
    #[inline]
    fn as_kind(&self) -> &str { self.as_str() }
}

impl AsKind for &'static str {
    type Target = str;
    #[inline]
    fn as_kind(&self) -> &str { self }
}

impl AsKind for SegmentType {
    type Target = SegmentType;
    #[inline]
    fn as_kind(&self) -> &SegmentType { self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_padded_hex() {
        assert_eq!(SegmentType::new(0x1).to_string(), "0x0001");
        assert_eq!(SegmentType::from(0xffff).to_string(), "0xffff");
        assert_eq!(SegmentType::new(0x1234).id(), 0x1234);
    }

    #[test]
    fn labels_borrow_as_str() {
        let owned = String::from("RAW");
        let label: &str = owned.as_kind();
        assert_eq!(label, "RAW");
        assert_eq!("FIXED".as_kind(), "FIXED");
        assert_eq!(SegmentType::new(3).as_kind(), &SegmentType::new(3));
    }
}
