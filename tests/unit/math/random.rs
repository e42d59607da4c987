//! Tests for the seeded random stream

#[cfg(test)]
mod tests {
    use artgrid::math::RandomStream;

    // Tests identical seeds produce identical sequences
    // Verified by seeding from entropy instead of the seed
    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomStream::new(42);
        let mut b = RandomStream::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
            assert_eq!(a.index(17), b.index(17));
        }
        assert_eq!(a.seed(), 42);
    }

    // Tests draws stay within their ranges
    // Verified by using an inclusive range in index
    #[test]
    fn test_draws_stay_in_range() {
        let mut stream = RandomStream::new(7);
        for _ in 0..1000 {
            let value = stream.next_f64();
            assert!((0.0..1.0).contains(&value));
            assert!(stream.index(5) < 5);
            assert!((8..=16).contains(&stream.range_inclusive(8, 16)));
        }
    }

    // Tests degenerate ranges return without panicking
    // Verified by removing the empty length guard
    #[test]
    fn test_degenerate_ranges() {
        let mut stream = RandomStream::new(1);
        assert_eq!(stream.index(0), 0);
        assert_eq!(stream.range_inclusive(9, 9), 9);
        assert_eq!(stream.range_inclusive(9, 3), 9);
        assert!(stream.pick::<u8>(&[]).is_none());
    }

    // Tests chance with certain probabilities
    // Verified by using <= in the comparison
    #[test]
    fn test_chance_extremes() {
        let mut stream = RandomStream::new(3);
        for _ in 0..200 {
            assert!(!stream.chance(0.0));
            assert!(stream.chance(1.0));
        }
    }

    // Tests pick returns an element of the slice
    // Verified by offsetting the picked index
    #[test]
    fn test_pick_returns_member() {
        let items = ['a', 'b', 'c'];
        let mut stream = RandomStream::new(11);
        for _ in 0..100 {
            let picked = stream.pick(&items).copied();
            assert!(picked.is_some_and(|c| items.contains(&c)));
        }
    }

    // Tests weighted choice only returns positive-weight indices
    // Verified by using <= 0.0 in the scan
    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut stream = RandomStream::new(5);
        for _ in 0..500 {
            assert_eq!(stream.weighted_choice(&[0.0, 2.0, 0.0]), 1);
        }
    }

    // Tests weighted choice consumes exactly one draw even when degenerate
    // Verified by returning early before drawing on zero totals
    #[test]
    fn test_weighted_choice_consumes_one_draw() {
        let mut a = RandomStream::new(99);
        let mut b = RandomStream::new(99);

        assert_eq!(a.weighted_choice(&[0.0, 0.0]), 0);
        assert_eq!(a.weighted_choice(&[]), 0);
        b.next_f64();
        b.next_f64();

        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }

    // Tests weighted choice roughly follows the weights
    // Verified by ignoring the weights and choosing uniformly
    #[test]
    fn test_weighted_choice_distribution() {
        let mut stream = RandomStream::new(2024);
        let mut counts = [0usize; 2];
        for _ in 0..4000 {
            if let Some(count) = counts.get_mut(stream.weighted_choice(&[1.0, 3.0])) {
                *count += 1;
            }
        }
        let share = counts[1] as f64 / 4000.0;
        assert!((0.7..0.8).contains(&share), "share was {share}");
    }

    // Tests fresh seeds vary between calls
    // Verified by returning a constant seed
    #[test]
    fn test_fresh_seed_varies() {
        let seeds: Vec<u64> = (0..4).map(|_| RandomStream::fresh_seed()).collect();
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
