use tracing::trace;
use crate::{Errors, Segment};

/// Segment whose payload is UTF-8 text
///
/// Its size is the byte length of the text, not its character count.
///
/// # Examples
///
/// ```rust
/// use rdsegment::model::{Segment, TextSegment};
///
/// let segment = TextSegment::from_bytes("NOTICE", "héllo".as_bytes().to_vec()).unwrap();
/// assert_eq!(segment.size(), 6);
/// assert_eq!(segment.data().unwrap(), "héllo");
///
/// assert!(TextSegment::from_bytes("NOTICE", vec![0xff, 0xfe]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSegment {
    /// The segment's type
    label: String,
    /// Length in bytes of the text
    size: usize,
    /// Segment's text (if it is loaded)
    text: Option<String>,
}

impl TextSegment {
    /// Build a segment with no text
    pub fn new(label: impl Into<String>) -> TextSegment {
        TextSegment { label: label.into(), size: 0, text: None }
    }
    /// Build a segment from a UTF-8 buffer
    ///
    /// # Errors
    ///
    /// [`Errors::InvalidBuffer`] if `data` is not valid UTF-8
    pub fn from_bytes(label: impl Into<String>, data: Vec<u8>) -> Result<TextSegment, Errors> {
        let text = String::from_utf8(data).map_err(|_| Errors::InvalidBuffer)?;
        let mut segment = TextSegment::new(label);
        segment.set_text(text);
        Ok(segment)
    }
    /// Attach text to the segment, replacing any previous one
    pub fn set_text(&mut self, text: String) {
        trace!(previous = self.size, size = text.len(), "attaching segment text");
        self.size = text.len();
        self.text = Some(text);
    }
}

impl Segment for TextSegment {
    type Data = str;
    type Kind = str;
    #[inline]
    fn size(&self) -> usize { self.size }
    fn data(&self) -> Result<&str, Errors> {
        self.text.as_deref().ok_or(Errors::NoData)
    }
    #[inline]
    fn kind(&self) -> &str { &self.label }
}
