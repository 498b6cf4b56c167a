//! Field accumulation buffers

/// Minimal set of operations the decoder and encoder need from a text buffer
///
/// The state machine is generic over this trait, so the same code can fill a
/// `String`, a byte vector or a `Vec<char>`.
pub trait FieldBuffer: Default {
    /// Owned value produced for each completed field
    type Output;

    /// Append one character
    fn push_char(&mut self, ch: char);

    /// Append `count` copies of `ch`
    fn push_repeated(&mut self, ch: char, count: usize) {
        for _ in 0..count {
            self.push_char(ch);
        }
    }

    /// Whether nothing has been appended since the last reset
    fn is_empty(&self) -> bool;

    /// Move the accumulated content out, leaving the buffer empty
    fn take(&mut self) -> Self::Output;

    /// Drop the accumulated content
    fn clear(&mut self);
}

impl FieldBuffer for String {
    type Output = String;

    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn push_repeated(&mut self, ch: char, count: usize) {
        self.extend(std::iter::repeat(ch).take(count));
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    fn take(&mut self) -> String {
        std::mem::take(self)
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

/// UTF-8 encoded bytes
impl FieldBuffer for Vec<u8> {
    type Output = Vec<u8>;

    fn push_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    fn push_repeated(&mut self, ch: char, count: usize) {
        if ch.is_ascii() {
            self.resize(self.len() + count, ch as u8);
        } else {
            for _ in 0..count {
                self.push_char(ch);
            }
        }
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn take(&mut self) -> Vec<u8> {
        std::mem::take(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl FieldBuffer for Vec<char> {
    type Output = Vec<char>;

    fn push_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn push_repeated(&mut self, ch: char, count: usize) {
        self.resize(self.len() + count, ch);
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn take(&mut self) -> Vec<char> {
        std::mem::take(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}
