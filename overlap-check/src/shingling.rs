/// Iterator over word windows of a fixed width with stride 1.
///
/// A non-empty input shorter than the window yields the whole input once.
pub struct WordWindows<'a, T> {
    tokens: &'a [T],
    width: usize,
    position: usize,
}

impl<'a, T> WordWindows<'a, T> {
    pub fn new(tokens: &'a [T], width: usize) -> Self {
        debug_assert!(width >= 1);
        Self {
            tokens,
            width,
            position: 0,
        }
    }
}

impl<'a, T> Iterator for WordWindows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokens.is_empty() {
            return None;
        }
        if self.tokens.len() < self.width {
            if self.position != 0 {
                return None;
            }
            self.position = 1;
            return Some(self.tokens);
        }
        if self.tokens.len() < self.position + self.width {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.width];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.tokens.is_empty() {
            0
        } else if self.tokens.len() < self.width {
            1 - self.position.min(1)
        } else {
            (self.tokens.len() + 1).saturating_sub(self.position + self.width)
        };
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w1() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = WordWindows::new(&tokens, 1);
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next(), Some(&tokens[0..1]));
        assert_eq!(iter.next(), Some(&tokens[1..2]));
        assert_eq!(iter.next(), Some(&tokens[2..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_w2() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = WordWindows::new(&tokens, 2);
        assert_eq!(iter.next(), Some(&tokens[0..2]));
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(&tokens[1..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_w3() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = WordWindows::new(&tokens, 3);
        assert_eq!(iter.next(), Some(&tokens[0..3]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_shorter_than_window() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = WordWindows::new(&tokens, 4);
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(&tokens[..]));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty() {
        let tokens: Vec<&str> = vec![];
        let mut iter = WordWindows::new(&tokens, 2);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }
}
