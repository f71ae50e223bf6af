use rand::Rng;

use crate::question::Question;

/// Questions not yet asked this session
#[derive(Debug, Default, Clone)]
pub struct Pool {
    questions: Vec<Question>,
}

impl Pool {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Removes and returns a uniformly random question, `None` once drained.
    ///
    /// Uses `swap_remove`, so the remaining order is not preserved.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Question> {
        if self.questions.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.questions.len());
        Some(self.questions.swap_remove(idx))
    }
}

impl From<Vec<Question>> for Pool {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Answer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn numbered(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question::new(format!("q{i}"), vec![Answer::new("a", true)]))
            .collect()
    }

    #[test]
    fn draw_from_empty_pool() {
        let mut pool = Pool::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.draw_random(&mut rng).is_none());
    }

    #[test]
    fn draws_every_question_exactly_once() {
        let mut pool = Pool::new(numbered(25));
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        while let Some(q) = pool.draw_random(&mut rng) {
            assert!(seen.insert(q.text), "question drawn twice");
        }

        assert_eq!(seen.len(), 25);
        assert!(pool.is_empty());
    }

    #[test]
    fn each_draw_shrinks_the_pool() {
        let mut pool = Pool::from(numbered(3));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pool.len(), 3);
        pool.draw_random(&mut rng).unwrap();
        assert_eq!(pool.len(), 2);
        pool.draw_random(&mut rng).unwrap();
        pool.draw_random(&mut rng).unwrap();
        assert_eq!(pool.len(), 0);
        assert!(pool.draw_random(&mut rng).is_none());
    }

    #[test]
    fn same_seed_same_order() {
        let order = |seed| {
            let mut pool = Pool::new(numbered(10));
            let mut rng = StdRng::seed_from_u64(seed);
            std::iter::from_fn(|| pool.draw_random(&mut rng))
                .map(|q| q.text)
                .collect::<Vec<_>>()
        };
        assert_eq!(order(9), order(9));
    }

    #[test]
    fn first_draw_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<String, usize> = HashMap::new();

        for _ in 0..4000 {
            let mut pool = Pool::new(numbered(4));
            let q = pool.draw_random(&mut rng).unwrap();
            *counts.entry(q.text).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (text, count) in counts {
            assert!((800..1200).contains(&count), "{text} drawn {count} times");
        }
    }
}
