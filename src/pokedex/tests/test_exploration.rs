#[cfg(test)]
mod tests {
    use crate::errors::PokedexError;
    use crate::pokedex::tests::common::*;
    use crate::pokedex::Pokedex;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn found_ids(pokedex: &Pokedex) -> Vec<u32> {
        pokedex
            .iter()
            .filter(|entry| entry.found)
            .map(|entry| entry.pokemon.id())
            .collect()
    }

    #[test]
    fn test_explore_small_range_finds_only_candidate() {
        let mut pokedex = create_test_pokedex(create_all());

        assert_ok(pokedex.explore(1, 2, 1));

        assert_eq!(found_ids(&pokedex), vec![1]);
        assert_eq!(pokedex.count_found(), 1);
    }

    #[rstest]
    #[case(1, 200, 4)]
    #[case(42, 111, 9)]
    #[case(7, 25, 3)]
    fn test_explore_is_reproducible(#[case] seed: u64, #[case] bound: u32, #[case] count: usize) {
        let mut first = create_test_pokedex(create_all());
        let mut second = create_test_pokedex(create_all());

        assert_ok(first.explore(seed, bound, count));
        assert_ok(second.explore(seed, bound, count));

        assert_eq!(found_ids(&first), found_ids(&second));
        assert_eq!(first.count_found(), count);
        assert!(found_ids(&first).iter().all(|&id| id < bound));
    }

    #[test]
    fn test_explore_skips_already_found_entries() {
        let mut pokedex = create_test_pokedex(create_all());
        pokedex.mark_current_found();

        assert_ok(pokedex.explore(3, 4, 2));

        assert_eq!(found_ids(&pokedex), vec![1, 2, 3]);
    }

    #[test]
    fn test_explore_rejects_insufficient_candidates_before_drawing() {
        let mut pokedex = create_test_pokedex(create_all());
        pokedex.mark_current_found();

        let result = pokedex.explore(1, 2, 1);

        assert_eq!(
            result,
            Err(PokedexError::InsufficientCandidates {
                available: 0,
                requested: 1
            })
        );
        assert_eq!(found_ids(&pokedex), vec![1]);
    }

    #[test]
    fn test_explore_empty_pokedex_fails() {
        let mut pokedex = Pokedex::new();
        assert_eq!(pokedex.explore(1, 10, 0), Err(PokedexError::EmptyCollection));
    }

    #[test]
    fn test_explore_zero_count_draws_nothing() {
        let mut pokedex = create_test_pokedex(create_all());
        assert_ok(pokedex.explore(1, 0, 0));
        assert_eq!(pokedex.count_found(), 0);
    }
}
