use crate::TERMINATOR;

/// Counters collected while a resource was being loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Number of fill attempts, including the final short one.
    pub fills: usize,
    /// Number of times the capacity was doubled.
    pub growths: usize,
    /// Logical capacity when the read finished, not counting the
    /// terminator slot.
    pub capacity: usize,
}

/// Bytes of a fully loaded resource.
///
/// The payload is followed by a single [`TERMINATOR`] byte which is not
/// part of [`len`](Self::len). It is there for callers that hand the bytes
/// to something expecting terminated text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceBuffer {
    // always `len + 1` bytes long, the last one being the terminator
    bytes: Vec<u8>,
    stats: ReadStats,
}

impl ResourceBuffer {
    /// Takes `bytes` holding exactly the populated region and appends the
    /// terminator.
    ///
    /// The caller has to make sure there is spare capacity for one more
    /// byte, otherwise pushing the terminator would reallocate.
    pub(crate) fn terminate(mut bytes: Vec<u8>, stats: ReadStats) -> Self {
        debug_assert!(bytes.capacity() > bytes.len());
        bytes.push(TERMINATOR);
        Self { bytes, stats }
    }

    /// Number of populated bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Populated bytes without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Populated bytes followed by the terminator.
    pub fn as_bytes_with_terminator(&self) -> &[u8] {
        &self.bytes
    }

    /// The byte stored right after the populated region.
    pub fn terminator(&self) -> u8 {
        self.bytes[self.len()]
    }

    /// Counters collected while loading.
    pub fn stats(&self) -> ReadStats {
        self.stats
    }

    /// Gives up ownership of the storage together with the populated
    /// length. The vector still ends with the terminator.
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        let len = self.len();
        (self.bytes, len)
    }

    /// Populated bytes only, terminator dropped.
    pub fn into_vec(self) -> Vec<u8> {
        let (mut bytes, len) = self.into_parts();
        bytes.truncate(len);
        bytes
    }
}

impl AsRef<[u8]> for ResourceBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(content: &[u8]) -> ResourceBuffer {
        let mut bytes = Vec::with_capacity(content.len() + 1);
        bytes.extend_from_slice(content);
        ResourceBuffer::terminate(bytes, ReadStats::default())
    }

    #[test]
    fn terminator_follows_payload() {
        let buf = buffer(b"void main() {}");
        assert_eq!(buf.len(), 14);
        assert_eq!(buf.as_bytes(), b"void main() {}");
        assert_eq!(buf.as_bytes_with_terminator(), b"void main() {}\0");
        assert_eq!(buf.terminator(), TERMINATOR);
    }

    #[test]
    fn empty_buffer_still_terminated() {
        let buf = buffer(b"");
        assert!(buf.is_empty());
        assert_eq!(buf.as_bytes_with_terminator(), &[TERMINATOR]);
    }

    #[test]
    fn parts_keep_terminator() {
        let (bytes, len) = buffer(b"abc").into_parts();
        assert_eq!(len, 3);
        assert_eq!(bytes, b"abc\0");
        assert_eq!(buffer(b"abc").into_vec(), b"abc");
    }

    #[test]
    fn payload_may_contain_terminator_value() {
        let buf = buffer(&[1, 0, 2]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.as_ref(), &[1, 0, 2]);
    }
}
