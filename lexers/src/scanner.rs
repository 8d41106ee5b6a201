#![deny(warnings)]

/// Buffered cursor over an iterator. Items consumed with `next` stay in the
/// buffer until `extract` (or `ignore`) drops them, which lets a tokenizer
/// accumulate a pending term and take it out in one piece.
pub(crate) struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub(crate) fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub(crate) fn curr(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // try to get enough elements in the buffer for self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            if let Some(tok) = self.src.next() {
                self.buf.push(tok);
            } else {
                break;
            }
        }
    }

    pub(crate) fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Everything consumed since the last `ignore`/`extract`.
    pub(crate) fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1) as usize;
        &self.buf[..n.min(self.buf.len())]
    }

    pub(crate) fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.buf = if self.buf.len() > n {
                self.buf[n..].to_vec()
            } else {
                Vec::new()
            }
        }
        self.pos = -1;
    }

    pub(crate) fn extract(&mut self) -> Vec<I::Item> {
        let tokens = self.view().to_vec();
        self.ignore();
        tokens
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    // Find an element in the 'any' set or EOF, return if the scanner advanced,
    // after until a call to self.curr() returns the last non-matching item
    pub(crate) fn until_any(&mut self, any: &[I::Item]) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(&next) { break; }
            self.next();
            advanced = true;
        }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub(crate) fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn extract_pending() {
        let mut s = Scanner::new("just a test buffer@".chars());
        for _ in 0..4 { assert!(s.next().is_some()); }
        assert_eq!(s.extract().iter().cloned().collect::<String>(), "just");
        assert_eq!(s.peek(), Some(' '));
        assert_eq!(s.next(), Some(' '));
        for _ in 0..6 { assert!(s.next().is_some()); }
        assert_eq!(s.extract_string(), " a test");
        assert_eq!(s.next(), Some(' '));
    }

    #[test]
    fn until_separator() {
        let mut s = Scanner::new("sqrt(4)".chars());
        assert!(s.until_any(&['(', ')']));
        assert!(!s.until_any(&['(', ')']));
        assert_eq!(s.curr(), Some('t'));
        assert_eq!(s.extract_string(), "sqrt");
        assert_eq!(s.next(), Some('('));
        s.ignore();
        assert!(s.until_any(&['(', ')']));
        assert_eq!(s.extract_string(), "4");
        assert_eq!(s.next(), Some(')'));
        assert_eq!(s.next(), None);
        assert_eq!(s.curr(), None);
        s.ignore();
        assert!(s.view().is_empty());
        assert_eq!(s.next(), None);
    }
}
