//! Suggestion Sampler
//!
//! Picks "related topics" for a detail page: up to [`RELATED_LIMIT`]
//! distinct siblings, never the current topic.
//!
//! Algorithm: partial Fisher–Yates. Build the pool without the excluded
//! slug, then repeatedly move a uniformly chosen element from the pool into
//! the result until the result holds `min(limit, pool.len())` elements.
//!
//! The random source is passed in, so callers choose between
//! `rand::thread_rng()` and a seeded `StdRng`.

use crate::catalog::Topic;
use rand::Rng;

/// Size of the related-topics block.
pub const RELATED_LIMIT: usize = 3;

/// Up to [`RELATED_LIMIT`] random topics from `topics`, excluding every
/// topic whose slug equals `exclude_slug`.
pub fn sample_related<'a, R>(topics: &'a [Topic], exclude_slug: &str, rng: &mut R) -> Vec<&'a Topic>
where
    R: Rng + ?Sized,
{
    sample_related_n(topics, exclude_slug, RELATED_LIMIT, rng)
}

/// Same as [`sample_related`] with a caller-chosen limit.
pub fn sample_related_n<'a, R>(
    topics: &'a [Topic],
    exclude_slug: &str,
    limit: usize,
    rng: &mut R,
) -> Vec<&'a Topic>
where
    R: Rng + ?Sized,
{
    // Filter by slug, not identity
    let mut pool: Vec<&'a Topic> = topics.iter().filter(|t| t.slug != exclude_slug).collect();

    let take = limit.min(pool.len());
    let mut picked = Vec::with_capacity(take);
    while picked.len() < take {
        let idx = rng.gen_range(0..pool.len());
        picked.push(pool.swap_remove(idx));
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const fn topic(slug: &'static str) -> Topic {
        Topic { slug, title: slug, image: "", summary: "", content: None }
    }

    static FIVE: [Topic; 5] = [topic("a"), topic("b"), topic("c"), topic("d"), topic("e")];

    fn slugs(picked: &[&Topic]) -> Vec<&'static str> {
        picked.iter().map(|t| t.slug).collect()
    }

    #[test]
    fn idadismo_related_block() {
        let area = Catalog::global()
            .find_area("discriminacao-preconceitos")
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let related = sample_related(area.topics, "idadismo", &mut rng);

        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|t| t.slug != "idadismo"));
        let distinct: HashSet<_> = related.iter().map(|t| t.slug).collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn size_is_min_of_limit_and_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 0..=FIVE.len() {
            let topics = &FIVE[..n];
            // Excluded slug present: pool is n - 1
            if n > 0 {
                let got = sample_related(topics, topics[0].slug, &mut rng);
                assert_eq!(got.len(), RELATED_LIMIT.min(n - 1), "n={}", n);
            }
            // Excluded slug absent: pool is n
            let got = sample_related(topics, "zzz", &mut rng);
            assert_eq!(got.len(), RELATED_LIMIT.min(n), "n={}", n);
        }
    }

    #[test]
    fn never_returns_excluded_and_never_repeats() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for excluded in &FIVE {
                let got = sample_related(&FIVE, excluded.slug, &mut rng);
                assert!(!slugs(&got).contains(&excluded.slug));
                let distinct: HashSet<_> = got.iter().map(|t| t.slug).collect();
                assert_eq!(distinct.len(), got.len());
            }
        }
    }

    #[test]
    fn duplicate_slugs_of_excluded_topic_are_all_removed() {
        let topics = [topic("a"), topic("x"), topic("b"), topic("x")];
        let mut rng = StdRng::seed_from_u64(3);
        let got = sample_related(&topics, "x", &mut rng);
        assert_eq!(got.len(), 2);
        assert!(!slugs(&got).contains(&"x"));
    }

    #[test]
    fn single_or_no_sibling_is_not_padded() {
        let mut rng = StdRng::seed_from_u64(0);
        let two = [topic("a"), topic("b")];
        assert_eq!(slugs(&sample_related(&two, "a", &mut rng)), vec!["b"]);

        let one = [topic("a")];
        assert!(sample_related(&one, "a", &mut rng).is_empty());
        assert!(sample_related(&[], "a", &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_output() {
        let first = sample_related(&FIVE, "c", &mut StdRng::seed_from_u64(42));
        let second = sample_related(&FIVE, "c", &mut StdRng::seed_from_u64(42));
        assert_eq!(slugs(&first), slugs(&second));
    }

    #[test]
    fn every_sibling_eventually_appears() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..100 {
            for t in sample_related(&FIVE, "a", &mut rng) {
                seen.insert(t.slug);
            }
        }
        assert_eq!(seen, HashSet::from(["b", "c", "d", "e"]));
    }

    #[test]
    fn custom_limit() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(sample_related_n(&FIVE, "a", 10, &mut rng).len(), 4);
        assert!(sample_related_n(&FIVE, "a", 0, &mut rng).is_empty());
    }
}
