//! A write position inside a caller-owned byte buffer.

/// Writes text into a borrowed buffer, always keeping the buffer's last byte free for a NUL
/// terminator.
///
/// `position() + remaining()` never changes over the lifetime of the cursor: writing only moves
/// the boundary between the written and the unwritten part.
///
/// ## Example
///
/// ```
/// let mut buf = [0u8; 16];
/// let mut cursor = dconv::OutputCursor::new(&mut buf);
/// dconv::format(&mut cursor, 1.5, &"%.2f".parse().unwrap()).unwrap();
/// assert_eq!(cursor.as_str(), "1.50");
/// assert_eq!(cursor.remaining(), 11);
/// ```
#[derive(Debug)]
pub struct OutputCursor<'a> {
    buffer: &'a mut [u8],
    position: usize,
    capacity: usize,
}

impl<'a> OutputCursor<'a> {
    /// A cursor at the start of `buffer`. One byte is reserved for the terminator, so an empty
    /// buffer has no capacity at all.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let capacity = buffer.len().saturating_sub(1);
        OutputCursor{ buffer, position: 0, capacity }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.position
    }

    /// Total number of bytes that can be written, i.e. `position() + remaining()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.position]
    }

    /// The text written so far. Everything this crate writes is ASCII.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Writes a NUL right after the text, into the reserved byte if the cursor is full. Does not
    /// move the cursor.
    pub fn terminate(&mut self) {
        if let Some(byte) = self.buffer.get_mut(self.position) {
            *byte = 0;
        }
    }

    /// Rewinds to the start of the buffer.
    pub fn clear(&mut self) {
        self.position = 0;
    }

    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(self.remaining() >= 1);
        self.buffer[self.position] = byte;
        self.position += 1;
    }

    #[inline]
    pub(crate) fn push_slice(&mut self, bytes: &[u8]) {
        debug_assert!(self.remaining() >= bytes.len());
        self.buffer[self.position .. self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
    }

    #[inline]
    pub(crate) fn fill(&mut self, byte: u8, count: usize) {
        debug_assert!(self.remaining() >= count);
        self.buffer[self.position .. self.position + count].fill(byte);
        self.position += count;
    }
}
