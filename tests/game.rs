//! Game integration tests.

use pairfollow::{
    ActionError, Card, DECK_SIZE, Deck, DeckError, Difficulty, DiscardResult, DiscardSelector,
    DrawResult, Game, GameError, GameOptions, GameState, HandError, HandOrder, HandView,
    INITIAL_HAND_SIZE, MAX_HAND_SIZE, PlayerSpec, Pot, PotError, Rank, SetupError, StepResult,
    Suit, is_winning_hand,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Builds a full deck whose first cards are `draws`, followed by the rest of
/// the standard deck in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut order = draws.to_vec();
    order.extend(
        Deck::standard()
            .cards()
            .iter()
            .filter(|c| !draws.contains(c)),
    );
    Deck::from_cards(order).unwrap()
}

/// Deals ranks A 4 7 and 9 J K, pairwise non-adjacent. As long as each seat
/// discards the card it just drew, no seat can complete a winning hand.
fn no_win_deck() -> Deck {
    deck_from_draws(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Spades),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Jack, Suit::Spades),
        card(Rank::King, Suit::Spades),
    ])
}

fn two_humans() -> Vec<PlayerSpec> {
    vec![PlayerSpec::human("Ann"), PlayerSpec::human("Bo")]
}

fn total_cards(game: &Game) -> usize {
    let held: usize = game.players().iter().map(|p| p.hand().len()).sum();
    game.cards_remaining() + held + game.get_pot().len()
}

#[test]
fn standard_deck_has_52_distinct_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut cards = deck.cards().to_vec();
    cards.sort_by_key(|c| (c.rank, c.suit as u8));
    cards.dedup();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn deck_rejects_duplicates_and_foreign_cards() {
    let mut order = Deck::standard().cards().to_vec();
    order[51] = order[0];
    assert_eq!(
        Deck::from_cards(order).unwrap_err(),
        DeckError::DuplicateCard(card(Rank::Ace, Suit::Spades))
    );

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = Deck::standard();
    let undealt = card(Rank::King, Suit::Clubs);
    assert_eq!(
        deck.recycle(&[undealt], &mut rng).unwrap_err(),
        DeckError::NotDealt(undealt)
    );

    let drawn = deck.draw_top().unwrap().unwrap();
    assert_eq!(drawn, card(Rank::Ace, Suit::Spades));
    assert!(deck.is_dealt(&drawn));
    assert_eq!(
        deck.recycle(&[drawn, drawn], &mut rng).unwrap_err(),
        DeckError::DuplicateCard(drawn)
    );
    assert_eq!(deck.len(), DECK_SIZE - 1);

    deck.recycle(&[drawn], &mut rng).unwrap();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.is_dealt(&drawn));
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a.cards(), b.cards());
    assert_ne!(a.cards(), Deck::standard().cards());
}

#[test]
fn pot_recycles_all_but_the_top() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::standard();
    let mut pot = Pot::new();

    assert_eq!(
        pot.recycle_buried(&mut deck, &mut rng).unwrap_err(),
        PotError::NothingToRecycle
    );

    let c1 = deck.draw_top().unwrap().unwrap();
    let c2 = deck.draw_top().unwrap().unwrap();
    let c3 = deck.draw_top().unwrap().unwrap();
    pot.add(c1);
    assert_eq!(
        pot.recycle_buried(&mut deck, &mut rng).unwrap_err(),
        PotError::NothingToRecycle
    );
    pot.add(c2);
    pot.add(c3);
    assert_eq!(pot.top(), Some(c3));

    assert_eq!(pot.recycle_buried(&mut deck, &mut rng).unwrap(), 2);
    assert_eq!(pot.cards(), &[c3]);
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(deck.cards().contains(&c1));
    assert!(deck.cards().contains(&c2));
    assert!(!deck.cards().contains(&c3));
}

#[test]
fn pot_is_unchanged_when_the_deck_refuses_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::standard();
    let mut pot = Pot::new();
    pot.add(card(Rank::Two, Suit::Hearts));
    pot.add(card(Rank::Three, Suit::Hearts));

    assert_eq!(
        pot.recycle_buried(&mut deck, &mut rng).unwrap_err(),
        PotError::Deck(DeckError::NotDealt(card(Rank::Two, Suit::Hearts)))
    );
    assert_eq!(pot.len(), 2);
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn win_rule_examples() {
    let hand = |ranks: [Rank; 4]| {
        let suits = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];
        let mut cards = [card(Rank::Ace, Suit::Spades); 4];
        for (i, rank) in ranks.into_iter().enumerate() {
            cards[i] = card(rank, suits[i]);
        }
        cards
    };

    assert!(is_winning_hand(&hand([Rank::Five, Rank::Five, Rank::Six, Rank::Seven])));
    assert!(is_winning_hand(&hand([Rank::Ace, Rank::Ace, Rank::Two, Rank::Three])));
    assert!(is_winning_hand(&hand([Rank::King, Rank::King, Rank::Ace, Rank::Two])));
    assert!(is_winning_hand(&hand([Rank::King, Rank::Queen, Rank::Jack, Rank::Jack])));
    assert!(!is_winning_hand(&hand([Rank::Ten, Rank::Queen, Rank::Jack, Rank::Jack])));
    assert!(!is_winning_hand(&hand([Rank::Ace, Rank::Two, Rank::Three, Rank::Four])));
    assert!(!is_winning_hand(&hand([Rank::Ace, Rank::Ace, Rank::King, Rank::Two])));
    assert!(!is_winning_hand(&hand([Rank::Queen, Rank::Queen, Rank::King, Rank::Ace])));
    assert!(!is_winning_hand(&hand([Rank::Five, Rank::Five, Rank::Six, Rank::Six])));
    assert!(!is_winning_hand(&hand([Rank::Five, Rank::Five, Rank::Five, Rank::Six])));
    assert!(!is_winning_hand(&hand([Rank::Nine, Rank::Nine, Rank::Nine, Rank::Nine])));
    assert!(!is_winning_hand(&hand([Rank::Five, Rank::Five, Rank::Six, Rank::Eight])));

    let five_cards = [
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Eight, Suit::Spades),
    ];
    assert!(!is_winning_hand(&five_cards));
    assert!(!is_winning_hand(&five_cards[..3]));
}

#[test]
fn hand_rejects_a_fifth_card_and_bad_selectors() {
    let mut hand = pairfollow::Hand::new(HandOrder::Sorted);
    for rank in [Rank::King, Rank::Two, Rank::Seven, Rank::Two] {
        hand.add_card(card(rank, Suit::Hearts)).unwrap();
    }
    let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, [Rank::Two, Rank::Two, Rank::Seven, Rank::King]);

    assert_eq!(
        hand.add_card(card(Rank::Ace, Suit::Clubs)).unwrap_err(),
        HandError::Full
    );
    assert_eq!(
        hand.remove(DiscardSelector::Index(4)).unwrap_err(),
        HandError::IndexOutOfRange { index: 4, len: 4 }
    );
    assert_eq!(
        hand.remove(DiscardSelector::Rank(Rank::Queen)).unwrap_err(),
        HandError::RankNotHeld(Rank::Queen)
    );
    assert_eq!(hand.len(), 4);

    let removed = hand.remove(DiscardSelector::Rank(Rank::Seven)).unwrap();
    assert_eq!(removed.rank, Rank::Seven);
    assert_eq!(hand.len(), 3);
}

#[test]
fn insertion_order_keeps_draw_order() {
    let mut hand = pairfollow::Hand::new(HandOrder::Insertion);
    hand.add_card(card(Rank::King, Suit::Hearts)).unwrap();
    hand.add_card(card(Rank::Two, Suit::Hearts)).unwrap();
    hand.add_card(card(Rank::Seven, Suit::Hearts)).unwrap();
    let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, [Rank::King, Rank::Two, Rank::Seven]);
}

#[test]
fn setup_errors() {
    let game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.new_game(vec![PlayerSpec::human("Solo")]).unwrap_err(),
        SetupError::TooFewPlayers
    );
    let crowd = (0..5).map(|i| PlayerSpec::human(format!("P{i}"))).collect();
    assert_eq!(game.new_game(crowd).unwrap_err(), SetupError::TooManyPlayers);
    assert_eq!(game.rematch().unwrap_err(), SetupError::TooFewPlayers);
    assert_eq!(game.state(), GameState::WaitingForPlayers);

}

#[test]
fn initial_deal_always_leaves_room_to_draw() {
    let mut deck = Deck::standard();
    let mut a = pairfollow::Hand::new(HandOrder::Sorted);
    let mut b = pairfollow::Hand::new(HandOrder::Sorted);

    assert_eq!(
        deck.deal_initial([&mut a, &mut b], MAX_HAND_SIZE).unwrap_err(),
        SetupError::InvalidHandSize(MAX_HAND_SIZE)
    );
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(a.is_empty() && b.is_empty());

    deck.deal_initial([&mut a, &mut b], INITIAL_HAND_SIZE).unwrap();
    assert_eq!(a.len(), INITIAL_HAND_SIZE);
    assert_eq!(b.len(), INITIAL_HAND_SIZE);
    assert_eq!(deck.len(), DECK_SIZE - 2 * INITIAL_HAND_SIZE);

    assert_eq!(
        deck.deal_initial([&mut a], 1).unwrap_err(),
        SetupError::InvalidHandSize(1)
    );
    assert_eq!(a.len(), INITIAL_HAND_SIZE);
}

#[test]
fn every_cpu_can_draw_from_the_opening_deal() {
    for seed in 0..10 {
        let game = Game::new(GameOptions::default(), seed);
        game.new_game(vec![
            PlayerSpec::cpu("CPU 1", Difficulty::Hard),
            PlayerSpec::cpu("CPU 2", Difficulty::Hard),
        ])
        .unwrap();

        for player in game.players() {
            assert_eq!(player.hand().len(), INITIAL_HAND_SIZE);
        }
        assert!(matches!(game.step().unwrap(), StepResult::Draw(_)));
    }
}

#[test]
fn new_game_deals_three_cards_each() {
    let game = Game::new(GameOptions::default(), 5);
    game.new_game(vec![
        PlayerSpec::human("You"),
        PlayerSpec::cpu("CPU 1", Difficulty::Easy),
        PlayerSpec::cpu("CPU 2", Difficulty::Hard),
    ])
    .unwrap();

    assert_eq!(game.state(), GameState::AwaitingDraw(0));
    assert_eq!(game.cards_remaining(), DECK_SIZE - 9);
    for player in game.players() {
        assert_eq!(player.hand().len(), 3);
        assert_eq!(player.wins(), 0);
    }
    assert_eq!(game.pot_top(), None);
    assert_eq!(game.audit(), Ok(()));
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn win_on_second_draw() {
    let game = Game::new(GameOptions::default(), 7);
    let deck = deck_from_draws(&[
        card(Rank::Five, Suit::Spades),  // player 0
        card(Rank::Five, Suit::Hearts),  // player 0
        card(Rank::Nine, Suit::Clubs),   // player 0
        card(Rank::Two, Suit::Spades),   // player 1
        card(Rank::Seven, Suit::Diamonds), // player 1
        card(Rank::Jack, Suit::Clubs),   // player 1
        card(Rank::King, Suit::Diamonds), // player 0 draw
        card(Rank::Four, Suit::Clubs),   // player 1 draw
        card(Rank::Ten, Suit::Hearts),   // player 0 draw
    ]);
    game.new_game_with_deck(two_humans(), deck).unwrap();

    let drawn = game.submit_draw(0).unwrap();
    assert_eq!(
        drawn,
        DrawResult::Drawn {
            card: card(Rank::King, Suit::Diamonds),
            recycled: false,
        }
    );
    assert_eq!(game.state(), GameState::AwaitingDiscard(0));

    let discarded = game.submit_discard(0, Rank::King).unwrap();
    assert_eq!(
        discarded,
        DiscardResult::Discarded {
            card: card(Rank::King, Suit::Diamonds),
            next_player: 1,
        }
    );
    assert_eq!(game.pot_top(), Some(card(Rank::King, Suit::Diamonds)));

    game.submit_draw(1).unwrap();
    game.submit_discard(1, Rank::Jack).unwrap();
    assert_eq!(total_cards(&game), DECK_SIZE);

    let result = game.submit_draw(0).unwrap();
    let win = result.win().copied().unwrap();
    assert_eq!(win.player_index, 0);
    assert!(!win.used_pot_top);
    assert_eq!(win.combination.pair, Rank::Five);
    assert_eq!(win.combination.run, (Rank::Nine, Rank::Ten));
    assert_eq!(win.wins, 1);

    assert_eq!(game.state(), GameState::Won(0));
    assert_eq!(game.wins(), vec![1, 0]);
    assert!(game.players()[0].has_won());
    assert!(!game.players()[1].has_won());
}

#[test]
fn discard_can_complete_another_players_hand() {
    let game = Game::new(GameOptions::default(), 11);
    let deck = deck_from_draws(&[
        card(Rank::Five, Suit::Spades),    // player 0
        card(Rank::Five, Suit::Hearts),    // player 0
        card(Rank::Eight, Suit::Clubs),    // player 0
        card(Rank::Two, Suit::Spades),     // player 1
        card(Rank::Seven, Suit::Diamonds), // player 1
        card(Rank::Queen, Suit::Clubs),    // player 1
        card(Rank::King, Suit::Diamonds),  // player 0 draw
        card(Rank::Jack, Suit::Hearts),    // player 1 draw
    ]);
    game.new_game_with_deck(two_humans(), deck).unwrap();

    game.submit_draw(0).unwrap();
    game.submit_discard(0, Rank::King).unwrap();
    game.submit_draw(1).unwrap();

    let result = game.submit_discard(1, Rank::Seven).unwrap();
    let DiscardResult::Won(win) = result else {
        panic!("expected a win, got {result:?}");
    };
    assert_eq!(win.player_index, 0);
    assert!(win.used_pot_top);
    assert_eq!(win.cards[3], card(Rank::Seven, Suit::Diamonds));
    assert_eq!(game.state(), GameState::Won(0));
    assert_eq!(game.wins(), vec![1, 0]);

    // The winning pot card stays in the pot.
    assert_eq!(game.pot_top(), Some(card(Rank::Seven, Suit::Diamonds)));
    assert_eq!(game.get_hand(0).unwrap().len(), 3);
    assert_eq!(total_cards(&game), DECK_SIZE);
}

#[test]
fn command_errors_leave_state_unchanged() {
    let game = Game::new(GameOptions::default(), 13);
    game.new_game_with_deck(two_humans(), no_win_deck()).unwrap();

    assert_eq!(
        game.submit_discard(0, 0_usize).unwrap_err(),
        GameError::Action(ActionError::MustDrawFirst)
    );
    assert_eq!(
        game.submit_draw(1).unwrap_err(),
        GameError::Action(ActionError::NotYourTurn)
    );
    assert_eq!(
        game.submit_draw(9).unwrap_err(),
        GameError::Action(ActionError::PlayerNotFound)
    );
    assert_eq!(game.state(), GameState::AwaitingDraw(0));

    let DrawResult::Drawn { card: drawn, .. } = game.submit_draw(0).unwrap() else {
        panic!("unexpected win on the first draw");
    };
    let hand_before = game.get_hand(0).unwrap();
    let remaining = game.cards_remaining();

    assert_eq!(
        game.submit_draw(0).unwrap_err(),
        GameError::Action(ActionError::AlreadyDrawn)
    );
    assert_eq!(
        game.submit_discard(1, 0_usize).unwrap_err(),
        GameError::Action(ActionError::NotYourTurn)
    );
    assert_eq!(
        game.submit_discard(0, 4_usize).unwrap_err(),
        GameError::Action(ActionError::NoSuchCard)
    );
    let absent = Rank::ALL
        .into_iter()
        .find(|rank| !hand_before.cards().iter().any(|c| c.rank == *rank))
        .unwrap();
    assert_eq!(
        game.submit_discard(0, absent).unwrap_err(),
        GameError::Action(ActionError::NoSuchCard)
    );

    assert_eq!(game.state(), GameState::AwaitingDiscard(0));
    assert_eq!(game.get_hand(0).unwrap(), hand_before);
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.pot_top(), None);

    let result = game.submit_discard(0, drawn.rank).unwrap();
    assert!(result.win().is_none());
}

#[test]
fn discarded_card_is_only_in_the_pot() {
    let game = Game::new(GameOptions::default(), 17);
    game.new_game_with_deck(two_humans(), no_win_deck()).unwrap();

    let DrawResult::Drawn { card: drawn, .. } = game.submit_draw(0).unwrap() else {
        panic!("unexpected win on the first draw");
    };
    let DiscardResult::Discarded { card: thrown, .. } =
        game.submit_discard(0, DiscardSelector::Rank(drawn.rank)).unwrap()
    else {
        panic!("unexpected win on the first discard");
    };

    assert_eq!(thrown.rank, drawn.rank);
    assert_eq!(game.get_pot().cards(), &[thrown]);
    for player in game.players() {
        assert!(!player.hand().cards().contains(&thrown));
    }
    assert!(!game.get_pot().cards().is_empty());
    assert_eq!(game.audit(), Ok(()));
}

#[test]
fn empty_deck_recycles_the_buried_pot() {
    let game = Game::new(GameOptions::default(), 19);
    game.new_game_with_deck(two_humans(), no_win_deck()).unwrap();

    let mut recycled_once = false;
    for _ in 0..100 {
        let player = game.current_player().unwrap();
        match game.submit_draw(player).unwrap() {
            DrawResult::Drawn { card, recycled } => {
                if recycled {
                    assert_eq!(game.get_pot().len(), 1);
                    assert_eq!(game.cards_remaining(), DECK_SIZE - 6 - 1 - 1);
                    recycled_once = true;
                }
                game.submit_discard(player, card.rank).unwrap();
            }
            DrawResult::Won(win) => panic!("unexpected win: {win:?}"),
        }
        assert_eq!(game.audit(), Ok(()));
        if recycled_once {
            break;
        }
    }
    assert!(recycled_once);
}

#[test]
fn view_hides_other_hands_until_the_game_ends() {
    let game = Game::new(GameOptions::default(), 23);
    let deck = deck_from_draws(&[
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    game.new_game_with_deck(two_humans(), deck).unwrap();

    let view = game.view(Some(0));
    assert_eq!(view.state, GameState::AwaitingDraw(0));
    assert_eq!(view.current_player, Some(0));
    assert_eq!(view.deck_count, DECK_SIZE - 6);
    assert_eq!(view.pot_count, 0);
    assert!(matches!(view.players[0].hand, HandView::Visible(ref cards) if cards.len() == 3));
    assert_eq!(view.players[1].hand, HandView::Hidden(3));

    let spectator = game.view(None);
    assert!(spectator
        .players
        .iter()
        .all(|p| matches!(p.hand, HandView::Hidden(3))));

    let result = game.submit_draw(0).unwrap();
    assert!(result.win().is_some());

    let view = game.view(Some(0));
    assert_eq!(view.state, GameState::Won(0));
    assert_eq!(view.current_player, None);
    assert!(view.players[0].has_won);
    assert_eq!(view.players[0].wins, 1);
    assert!(matches!(view.players[1].hand, HandView::Visible(ref cards) if cards.len() == 3));
}

#[test]
fn finished_game_rejects_commands_and_rematch_keeps_wins() {
    let game = Game::new(GameOptions::default(), 29);
    let deck = deck_from_draws(&[
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Two, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    game.new_game_with_deck(two_humans(), deck).unwrap();
    game.submit_draw(0).unwrap();
    assert_eq!(game.state(), GameState::Won(0));

    assert_eq!(
        game.submit_draw(1).unwrap_err(),
        GameError::Action(ActionError::InvalidState)
    );
    assert_eq!(
        game.submit_discard(0, 0_usize).unwrap_err(),
        GameError::Action(ActionError::InvalidState)
    );

    game.rematch().unwrap();
    assert_eq!(game.state(), GameState::AwaitingDraw(0));
    assert_eq!(game.wins(), vec![1, 0]);
    assert!(!game.players()[0].has_won());
    assert_eq!(game.get_pot().len(), 0);
    assert_eq!(total_cards(&game), DECK_SIZE);

    game.new_game(two_humans()).unwrap();
    assert_eq!(game.wins(), vec![0, 0]);
}

#[test]
fn human_seat_cannot_move_for_a_cpu() {
    let game = Game::new(GameOptions::default(), 23);
    game.new_game_with_deck(
        vec![
            PlayerSpec::human("You"),
            PlayerSpec::cpu("CPU", Difficulty::Hard),
        ],
        no_win_deck(),
    )
    .unwrap();

    let DrawResult::Drawn { card: drawn, .. } = game.submit_draw(0).unwrap() else {
        panic!("seats in a stacked no-win deal cannot win");
    };
    game.submit_discard(0, drawn.rank).unwrap();
    assert_eq!(game.state(), GameState::AwaitingDraw(1));
    assert!(game.is_cpu_turn());

    let remaining = game.cards_remaining();
    assert_eq!(
        game.submit_draw(0).unwrap_err(),
        GameError::Action(ActionError::NotYourTurn)
    );
    assert_eq!(
        game.submit_discard(0, 0_usize).unwrap_err(),
        GameError::Action(ActionError::NotYourTurn)
    );
    assert_eq!(game.state(), GameState::AwaitingDraw(1));
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.get_hand(0).unwrap().len(), 3);
    assert_eq!(game.get_hand(1).unwrap().len(), 3);
}

#[test]
fn cpu_step_refuses_human_seats() {
    let game = Game::new(GameOptions::default(), 31);
    game.new_game(vec![
        PlayerSpec::human("You"),
        PlayerSpec::cpu("CPU 1", Difficulty::Hard),
    ])
    .unwrap();

    assert!(!game.is_cpu_turn());
    assert_eq!(
        game.step().unwrap_err(),
        GameError::Action(ActionError::NotCpuTurn)
    );

    let DrawResult::Drawn { card: drawn, .. } = game.submit_draw(0).unwrap() else {
        return;
    };
    if game.submit_discard(0, drawn.rank).unwrap().win().is_some() {
        return;
    }

    assert!(game.is_cpu_turn());
    let first = game.step().unwrap();
    assert!(matches!(first, StepResult::Draw(_)));
    if first.win().is_some() {
        return;
    }
    assert_eq!(game.state(), GameState::AwaitingDiscard(1));

    let second = game.step().unwrap();
    assert!(matches!(second, StepResult::Discard(_)));
    if second.win().is_none() {
        assert_eq!(game.state(), GameState::AwaitingDraw(0));
        assert_eq!(game.get_hand(1).unwrap().len(), 3);
    }
}

#[test]
fn cpu_games_run_to_a_win() {
    for seed in 0..20 {
        let options = GameOptions::default()
            .with_hand_order(HandOrder::Insertion)
            .with_random_first_player(true);
        let game = Game::new(options, seed);
        game.new_game(vec![
            PlayerSpec::cpu("CPU 1", Difficulty::Hard),
            PlayerSpec::cpu("CPU 2", Difficulty::Easy),
            PlayerSpec::cpu("CPU 3", Difficulty::Hard),
        ])
        .unwrap();

        let mut turns = 0;
        while !game.state().is_terminal() && turns < 10_000 {
            game.play_cpu_turn().unwrap();
            assert_eq!(game.audit(), Ok(()));
            turns += 1;
        }

        let winner = game.state().winner().unwrap();
        let wins = game.wins();
        assert_eq!(wins.iter().sum::<u32>(), 1);
        assert_eq!(wins[winner], 1);
    }
}
