//! Last-Loop Adapter
//!
//! Tags every element of an iterator with whether it is the final one.

use std::iter::FusedIterator;

/// Pairs each element of `iterable` with an `is_last` flag.
///
/// # Example
/// ```
/// use callcache::lastloop;
///
/// let tagged: Vec<_> = lastloop("abc".chars()).collect();
/// assert_eq!(tagged, vec![('a', false), ('b', false), ('c', true)]);
/// ```
pub fn lastloop<I>(iterable: I) -> LastLoop<I::IntoIter>
where
    I: IntoIterator,
{
    LastLoop::new(iterable.into_iter())
}

// == Last Loop ==
/// Iterator adapter returned by [`lastloop`].
///
/// Holds exactly one element of lookahead. The source is first polled on the
/// first call to `next`, and never again once it has reported exhaustion.
#[derive(Debug, Clone)]
pub struct LastLoop<I: Iterator> {
    iter: I,
    /// Element read ahead of the one being yielded
    pending: Option<I::Item>,
    primed: bool,
}

impl<I: Iterator> LastLoop<I> {
    /// Wraps `iter` without polling it.
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            pending: None,
            primed: false,
        }
    }
}

impl<I: Iterator> Iterator for LastLoop<I> {
    type Item = (I::Item, bool);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.primed = true;
            self.pending = self.iter.next();
        }

        let current = self.pending.take()?;
        match self.iter.next() {
            Some(upcoming) => {
                self.pending = Some(upcoming);
                Some((current, false))
            }
            None => Some((current, true)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.primed && self.pending.is_none() {
            return (0, Some(0));
        }

        let buffered = usize::from(self.pending.is_some());
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|u| u.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for LastLoop<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for LastLoop<I> {}

// == Extension Trait ==
/// Adds [`lastloop`](LastLoopExt::lastloop) to every iterator.
pub trait LastLoopExt: Iterator + Sized {
    /// Pairs each element with an `is_last` flag.
    fn lastloop(self) -> LastLoop<Self> {
        LastLoop::new(self)
    }
}

impl<I: Iterator> LastLoopExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_lastloop_empty() {
        let tagged: Vec<(i32, bool)> = lastloop(Vec::new()).collect();
        assert!(tagged.is_empty());
    }

    #[test]
    fn test_lastloop_single() {
        let tagged: Vec<_> = lastloop(["x"]).collect();
        assert_eq!(tagged, vec![("x", true)]);
    }

    #[test]
    fn test_lastloop_three() {
        let tagged: Vec<_> = lastloop(vec!['a', 'b', 'c']).collect();
        assert_eq!(tagged, vec![('a', false), ('b', false), ('c', true)]);
    }

    #[test]
    fn test_lastloop_ext_on_range() {
        let flags: Vec<bool> = (1..=4).lastloop().map(|(_, last)| last).collect();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_lastloop_is_fused() {
        let mut tagged = lastloop(vec![1]);
        assert_eq!(tagged.next(), Some((1, true)));
        assert_eq!(tagged.next(), None);
        assert_eq!(tagged.next(), None);
    }

    #[test]
    fn test_lastloop_is_lazy() {
        let polled = Cell::new(0);
        let source = (0..3).inspect(|_| polled.set(polled.get() + 1));

        let mut tagged = lastloop(source);
        assert_eq!(polled.get(), 0, "Source must not be polled before next()");

        assert_eq!(tagged.next(), Some((0, false)));
        assert_eq!(polled.get(), 2, "One element of lookahead");
    }

    #[test]
    fn test_lastloop_does_not_poll_after_exhaustion() {
        let polls = Cell::new(0);
        let source = std::iter::from_fn(|| {
            polls.set(polls.get() + 1);
            if polls.get() == 1 {
                Some("only")
            } else {
                None
            }
        });

        let tagged: Vec<_> = lastloop(source).collect();
        assert_eq!(tagged, vec![("only", true)]);
        assert_eq!(polls.get(), 2);
    }

    #[test]
    fn test_lastloop_size_hint() {
        let mut tagged = lastloop(vec![1, 2, 3]);
        assert_eq!(tagged.len(), 3);

        tagged.next();
        assert_eq!(tagged.len(), 2);

        tagged.next();
        tagged.next();
        assert_eq!(tagged.len(), 0);
    }
}
