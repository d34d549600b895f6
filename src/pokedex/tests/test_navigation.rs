#[cfg(test)]
mod tests {
    use crate::errors::PokedexError;
    use crate::pokedex::tests::common::*;
    use crate::pokedex::Pokedex;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_advance_then_retreat_round_trip() {
        let mut pokedex =
            create_test_pokedex(vec![create_bulbasaur(), create_ivysaur(), create_venusaur()]);

        pokedex.advance();
        pokedex.advance();
        assert_eq!(assert_ok(pokedex.current()), &create_venusaur());

        pokedex.retreat();
        pokedex.retreat();
        assert_eq!(assert_ok(pokedex.current()), &create_bulbasaur());
    }

    #[test]
    fn test_advance_at_end_is_idempotent() {
        let mut pokedex = create_test_pokedex(vec![create_bulbasaur(), create_ivysaur()]);

        pokedex.advance();
        pokedex.advance();
        pokedex.advance();

        assert_eq!(selected_id(&pokedex), Some(2));
        assert_single_selection(&pokedex);
    }

    #[test]
    fn test_retreat_at_start_is_idempotent() {
        let mut pokedex = create_test_pokedex(vec![create_bulbasaur(), create_ivysaur()]);

        pokedex.retreat();
        pokedex.retreat();

        assert_eq!(selected_id(&pokedex), Some(1));
        assert_single_selection(&pokedex);
    }

    #[test]
    fn test_cursor_moves_are_noops_when_empty() {
        let mut pokedex = Pokedex::new();
        pokedex.advance();
        pokedex.retreat();
        pokedex.select_by_id(1);
        pokedex.mark_current_found();

        assert_eq!(pokedex.current(), Err(PokedexError::EmptyCollection));
        assert_eq!(pokedex.count_found(), 0);
    }

    #[test]
    fn test_select_by_id() {
        let mut pokedex = create_test_pokedex(create_all());

        pokedex.select_by_id(24);
        assert_eq!(selected_id(&pokedex), Some(24));

        pokedex.select_by_id(999);
        assert_eq!(selected_id(&pokedex), Some(24));

        pokedex.select_by_id(24);
        assert_eq!(selected_id(&pokedex), Some(24));
        assert_single_selection(&pokedex);
    }

    #[test]
    fn test_mark_current_found_only_touches_selection() {
        let mut pokedex = create_test_pokedex(create_all());
        pokedex.select_by_id(19);

        pokedex.mark_current_found();
        pokedex.mark_current_found();

        assert_eq!(pokedex.count_found(), 1);
        assert_eq!(pokedex.is_found(19), Some(true));
        assert_eq!(pokedex.is_found(20), Some(false));
        assert!(assert_ok(pokedex.current_entry()).found);
    }
}
