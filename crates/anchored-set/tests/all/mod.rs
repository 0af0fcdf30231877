/// Generates tests which only use the `Set` interface, given an expression creating an empty
/// `Set<u32>`.
macro_rules! tests_for_all_sets {
    ($new_set:expr $(,)?) => {
        // ================================
        //  Empty Set
        // ================================

        #[test]
        fn empty_set() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            assert_eq!(set.len(), 0);
            assert!(set.is_empty());
            assert!(!set.contains(&0));
            assert!(!set.contains(&u32::MAX));
            assert_eq!(set.contains_each(&[0, 1]), [false, false]);
            assert!(set.to_sorted_vec().is_empty());

            // Neither of these are errors.
            set.discard(&[1, 2, 3]);
            assert!(!set.remove(&1));

            assert!(set.clear().is_empty());
            set.reset();
            assert!(set.is_empty());
        }

        // ================================
        //  Add and Discard
        // ================================

        #[test]
        fn add_then_discard_everything() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            let demo = [1, 2, 3, 4, 5, 6, 7, 8];

            set.add(&demo);
            assert_eq!(set.to_sorted_vec(), demo);

            set.discard(&demo);
            assert!(set.to_sorted_vec().is_empty());

            set.add(&demo);
            set.add(&demo);
            assert_eq!(set.len(), 8);

            assert_eq!(set.clear(), demo);
            assert_eq!(set.len(), 0);
            assert!(set.to_sorted_vec().is_empty());
        }

        #[test]
        fn add_sorts_and_deduplicates() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[9, 3, 9, 1, 3, 3]);
            assert_eq!(set.len(), 3);
            assert_eq!(set.to_sorted_vec(), [1, 3, 9]);

            // Re-adding present elements changes nothing.
            set.add(&[1, 9]);
            assert_eq!(set.len(), 3);
            assert_eq!(set.to_sorted_vec(), [1, 3, 9]);

            set.add(&[]);
            assert_eq!(set.to_sorted_vec(), [1, 3, 9]);
        }

        #[test]
        fn discard_absent_is_noop() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[4, 2]);
            set.discard(&[1, 3, 5]);
            assert_eq!(set.len(), 2);
            assert_eq!(set.to_sorted_vec(), [2, 4]);

            // Partially present.
            set.discard(&[2, 2, 7]);
            assert_eq!(set.to_sorted_vec(), [4]);
        }

        #[test]
        fn insert_and_remove_report_membership() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            assert!(set.insert(10));
            assert!(!set.insert(10));
            assert!(set.insert(0));
            assert_eq!(set.len(), 2);

            assert!(set.remove(&10));
            assert!(!set.remove(&10));
            assert!(!set.contains(&10));
            assert!(set.contains(&0));
        }

        #[test]
        fn contains_each_matches_contains() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[2, 4, 6]);

            let queries = [6, 5, 4, 4, 0, 2];
            let each = set.contains_each(&queries);
            assert_eq!(each, [true, false, true, true, false, true]);

            for (query, found) in queries.iter().zip(each) {
                assert_eq!(set.contains(query), found);
            }
            assert!(set.contains_each(&[]).is_empty());
        }

        // ================================
        //  Snapshots
        // ================================

        #[test]
        fn snapshots_are_independent() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[3, 1, 2]);
            let snapshot = set.to_sorted_vec();

            set.add(&[0, 4]);
            set.discard(&[1]);

            assert_eq!(snapshot, [1, 2, 3]);
            assert_eq!(set.to_sorted_vec(), [0, 2, 3, 4]);

            let cleared = set.clear();
            set.add(&[100]);
            assert_eq!(cleared, [0, 2, 3, 4]);
            assert_eq!(set.to_sorted_vec(), [100]);
        }

        #[test]
        fn reset_empties_the_set() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[5, 6, 7]);
            set.reset();
            assert_eq!(set.len(), 0);
            assert!(!set.contains(&5));

            // Still usable afterwards.
            set.add(&[7]);
            assert_eq!(set.to_sorted_vec(), [7]);
        }

        // ================================
        //  Reserving Space
        // ================================

        #[test]
        fn reserve_preserves_membership() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[50, 10, 30, 20, 40]);
            let before = set.to_sorted_vec();

            // Hints which cannot be allocated are ignored.
            for size_hint in [0, 1, 5, 1000, usize::MAX, 3, usize::MAX / 2] {
                set.reserve(size_hint);
                assert_eq!(set.len(), 5);
                assert_eq!(set.to_sorted_vec(), before);
                assert!(set.contains(&30));
                assert!(!set.contains(&35));
            }

            set.add(&(0..500).collect::<Vec<u32>>());
            assert_eq!(set.len(), 500);
        }

        #[test]
        fn try_reserve() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            set.add(&[1, 2, 3]);
            set.try_reserve(100).unwrap();
            assert_eq!(set.to_sorted_vec(), [1, 2, 3]);

            let err = set.try_reserve(usize::MAX).unwrap_err();
            assert_eq!(
                err,
                anchored_set::ReserveError::CapacityOverflow { requested: usize::MAX },
            );
            assert_eq!(err.requested(), usize::MAX);
            assert_eq!(set.to_sorted_vec(), [1, 2, 3]);

            let _check_that_display_works = format!("{err}");
        }

        // ================================
        //  Randomized
        // ================================

        #[test]
        fn random_operations_match_btreeset() {
            let mut owner = $new_set;
            let set: &mut dyn anchored_set::Set<u32> = &mut owner;

            let mut model = std::collections::BTreeSet::new();
            let mut prng = oorandom::Rand32::new(0x5e7);

            for _ in 0..2_000 {
                let batch: Vec<u32> = (0..prng.rand_range(0..6))
                    .map(|_| prng.rand_range(0..64))
                    .collect();

                match prng.rand_range(0..5) {
                    0 | 1 => {
                        set.add(&batch);
                        model.extend(batch.iter().copied());
                    }
                    2 => {
                        set.discard(&batch);
                        for element in &batch {
                            model.remove(element);
                        }
                    }
                    3 => {
                        let element = prng.rand_range(0..64);
                        assert_eq!(set.insert(element), model.insert(element));
                    }
                    _ => {
                        let element = prng.rand_range(0..64);
                        assert_eq!(set.remove(&element), model.remove(&element));
                    }
                }

                assert_eq!(set.len(), model.len());
                let probe = prng.rand_range(0..64);
                assert_eq!(set.contains(&probe), model.contains(&probe));
            }

            let sorted = set.to_sorted_vec();
            assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(sorted.iter().eq(model.iter()));

            assert!(set.clear().into_iter().eq(model.into_iter()));
            assert!(set.is_empty());
        }
    };
}

pub(crate) use tests_for_all_sets as tests_for_all_sets;
