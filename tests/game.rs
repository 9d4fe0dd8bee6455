//! The game layer: deck mapping, tracked players, table inference, and simulated games.

use rand::{rngs::StdRng, SeedableRng};

use sleuth::game::{
    automate::{automate, run_script, Script},
    deck::{Category, Deck},
    player::Player,
    solution::{definite_solution, found_solution, likely_solution, sync_players},
};

mod deck {
    use super::*;

    #[test]
    fn standard_mapping() {
        let deck = Deck::default();

        assert_eq!(deck.size(), 21);
        assert_eq!(deck.suspect_count(), 6);
        assert_eq!(deck.weapon_count(), 6);
        assert_eq!(deck.room_count(), 9);

        assert_eq!(deck.name(0), Some("Colonel Mustard"));
        assert_eq!(deck.name(6), Some("lead pipe"));
        assert_eq!(deck.name(12), Some("hall"));
        assert_eq!(deck.name(20), Some("ball room"));
        assert_eq!(deck.name(21), None);

        assert_eq!(deck.category(5), Some(Category::Suspect));
        assert_eq!(deck.category(11), Some(Category::Weapon));
        assert_eq!(deck.category(12), Some(Category::Room));
        assert_eq!(deck.category(21), None);

        assert_eq!(deck.absolute(4, 4, 6), [4, 10, 18]);
        assert_eq!(deck.names(&[4, 10, 18, 99]).len(), 3);
    }
}

mod players {
    use super::*;

    #[test]
    fn cpu_hand_is_resolved() {
        let deck = Deck::default();
        let player = Player::cpu("Dow", &[0, 12, 19], &deck).unwrap();

        let held = player.hand.pos_elements();
        assert_eq!(held.into_iter().collect::<Vec<_>>(), vec![0, 12, 19]);

        // Everything else in the deck is settled as absent.
        assert_eq!(player.hand.neg_elements().len(), deck.size() - 3);
        assert!(player.possibles().is_empty());

        assert!(player.holds_any(&[0, 1, 2]));
        assert!(!player.holds_any(&[1, 2, 3]));
    }

    #[test]
    fn responses_update_the_tracker() {
        let mut player = Player::new("Tave", 4);

        player.passed(&[4, 10, 18]).unwrap();
        assert!(player.hand.neg_elements().contains(&4));

        player.showed_unknown(&[2, 8, 14]).unwrap();
        assert_eq!(player.possibles(), vec![vec![2], vec![8], vec![14]]);

        player.saw_card(8).unwrap();
        assert!(player.hand.pos_elements().contains(&8));
    }
}

mod table {
    use super::*;

    #[test]
    fn sync_propagates_definite_holdings() {
        let deck = Deck::default();
        let mut players = vec![
            Player::cpu("Dow", &[0, 12, 19], &deck).unwrap(),
            Player::new("Tave", 4),
        ];

        assert!(!players[1].hand.neg_elements().contains(&0));

        sync_players(&mut players).unwrap();

        let absent = players[1].hand.neg_elements();
        assert!(absent.contains(&0));
        assert!(absent.contains(&12));
        assert!(absent.contains(&19));
    }

    #[test]
    fn three_candidates_settle_the_solution() {
        let mut players = vec![Player::new("Ada", 9), Player::new("Ben", 9)];

        players[0].passed(&[4, 10, 18]).unwrap();
        players[1].passed(&[4, 10, 18]).unwrap();

        let ranked = likely_solution(&players);
        assert_eq!(ranked, vec![(4, 2), (10, 2), (18, 2)]);

        let deduced: Vec<_> = definite_solution(&players).into_iter().collect();
        assert_eq!(deduced, vec![4, 10, 18]);
        assert!(found_solution(&players));
    }

    #[test]
    fn held_cards_are_never_candidates() {
        let mut players = vec![Player::new("Ada", 9), Player::new("Ben", 9)];

        players[0].passed(&[4, 10, 18]).unwrap();
        players[1].saw_card(4).unwrap();

        let ranked = likely_solution(&players);
        assert_eq!(ranked, vec![(10, 1), (18, 1)]);
        assert!(!found_solution(&players));
    }
}

mod scripted {
    use super::*;

    fn table(deck: &Deck) -> Vec<Player> {
        vec![
            Player::cpu("Dow", &[0, 12, 19], deck).unwrap(),
            Player::new("Tave", 4),
            Player::new("Osanna", 3),
            Player::new("Lucinda", 4),
            Player::new("Nathan", 4),
        ]
    }

    fn hands() -> Vec<Vec<u32>> {
        vec![
            vec![0, 12, 19],
            vec![2, 6, 8, 20],
            vec![3, 11, 17],
            vec![1, 9, 13, 14],
            vec![5, 7, 15, 16],
        ]
    }

    #[test]
    fn short_game_finds_the_solution() {
        let deck = Deck::default();
        let mut players = table(&deck);

        let script = Script {
            true_hands: hands(),
            true_solution: [4, 4, 6],
            suggestions: vec![
                (0, [1, 1, 1]),
                (1, [2, 2, 2]),
                (2, [3, 4, 5]),
                (3, [3, 5, 2]),
                (4, [4, 4, 6]),
                (0, [4, 4, 6]),
            ],
        };

        let outcome = run_script(&mut players, &deck, &script).unwrap();

        assert!(found_solution(&players), "No solution found");
        assert_eq!(outcome.suggestions_used, 6);
        assert_eq!(outcome.true_solution, [4, 10, 18]);
        assert_eq!(
            outcome.deduced.into_iter().collect::<Vec<_>>(),
            vec![4, 10, 18]
        );
    }

    #[test]
    fn long_game_runs_to_completion() {
        let deck = Deck::default();
        let mut players = table(&deck);

        let script = Script {
            true_hands: hands(),
            true_solution: [4, 4, 6],
            suggestions: vec![
                (1, [5, 5, 8]),
                (2, [2, 4, 7]),
                (3, [5, 2, 3]),
                (4, [5, 4, 3]),
                (0, [3, 2, 2]),
                (1, [2, 5, 7]),
                (2, [5, 5, 5]),
                (3, [4, 1, 1]),
                (4, [4, 3, 4]),
                (0, [1, 4, 1]),
                (1, [1, 3, 6]),
                (2, [3, 3, 3]),
                (3, [4, 1, 4]),
                (4, [2, 1, 8]),
                (0, [5, 3, 7]),
                (1, [4, 3, 6]),
                (2, [3, 4, 3]),
                (3, [4, 3, 6]),
                (4, [4, 4, 8]),
                (0, [5, 4, 6]),
                (1, [4, 3, 6]),
                (2, [3, 4, 3]),
                (3, [4, 1, 6]),
                (4, [4, 4, 8]),
                (0, [4, 3, 7]),
                (1, [2, 4, 6]),
                (2, [4, 3, 6]),
                (3, [0, 4, 4]),
                (4, [4, 1, 6]),
                (0, [1, 4, 6]),
            ],
        };

        let outcome = run_script(&mut players, &deck, &script).unwrap();

        assert_eq!(outcome.true_solution, [4, 10, 18]);
        assert!(outcome.suggestions_used <= 30);

        // Negative knowledge comes only from truthful passes, so it is always sound: no
        // player is ever marked as lacking a card of their scripted hand.
        for (player, hand) in players.iter().zip(hands()) {
            let absent = player.hand.neg_elements();
            for card in hand {
                assert!(!absent.contains(&card));
            }
        }
    }
}

mod simulated {
    use super::*;

    #[test]
    fn seeded_games_are_deterministic() {
        let deck = Deck::default();

        let run = |seed: u64| {
            let mut players = vec![
                Player::new("Ada", 6),
                Player::new("Ben", 6),
                Player::new("Cy", 6),
            ];
            players[0].is_cpu = true;

            let mut rng = StdRng::seed_from_u64(seed);
            automate(&mut players, &deck, &mut rng, 100).unwrap()
        };

        let first = run(23);
        let second = run(23);

        assert_eq!(first.true_solution, second.true_solution);
        assert_eq!(first.deduced, second.deduced);
        assert_eq!(first.suggestions_used, second.suggestions_used);
    }

    #[test]
    fn every_card_is_dealt_or_hidden() {
        let deck = Deck::default();
        let mut players = vec![
            Player::new("Ada", 6),
            Player::new("Ben", 6),
            Player::new("Cy", 6),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        let outcome = automate(&mut players, &deck, &mut rng, 10).unwrap();

        let mut seen: Vec<u32> = outcome.true_solution.to_vec();
        for player in &players {
            let hand = player.true_hand.as_ref().unwrap();
            assert_eq!(hand.len(), player.card_count);
            seen.extend(hand);
        }

        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), deck.size());
    }
}
