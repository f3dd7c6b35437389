//! Game integration tests.

use std::collections::HashSet;
use std::io::Cursor;

use twentyone::{
    Card, Console, DECK_SIZE, DealError, Dealer, Deck, Game, GameOptions, Hand, HandStatus,
    MatchOutcome, MatchState, Player, PromptError, Rank, RoundWinner, Side, Suit, resolve, score,
};

use twentyone::Suit::{Clubs, Diamonds, Hearts, Spades};

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn console(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn game_with_draws(options: GameOptions, draws: &[Card], script: &str) -> Game<ScriptedConsole> {
    Game::with_deck(options, Deck::from_draws(draws, 7), console(script), "Bob")
}

fn output(game: &Game<ScriptedConsole>) -> String {
    String::from_utf8_lossy(game.ui().output()).into_owned()
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new(21);
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

#[test]
fn hand_totals_and_bust() {
    let numeric = hand_of(&[card(Rank::Four, Diamonds), card(Rank::Three, Diamonds)]);
    assert_eq!(numeric.total(), 7);

    let natural = hand_of(&[card(Rank::Ace, Hearts), card(Rank::King, Spades)]);
    assert_eq!(natural.total(), 21);
    assert!(!natural.is_bust());

    let two_aces = hand_of(&[
        card(Rank::Ace, Hearts),
        card(Rank::Ace, Clubs),
        card(Rank::Nine, Spades),
    ]);
    assert_eq!(two_aces.total(), 21);

    let bust = hand_of(&[
        card(Rank::King, Hearts),
        card(Rank::Queen, Clubs),
        card(Rank::Two, Spades),
    ]);
    assert_eq!(bust.total(), 22);
    assert!(bust.is_bust());
    assert_eq!(bust.status(), HandStatus::Bust);
}

#[test]
fn three_aces_follow_incremental_upgrade() {
    let cards = [
        card(Rank::Ace, Hearts),
        card(Rank::Ace, Clubs),
        card(Rank::Ace, Spades),
        card(Rank::Eight, Diamonds),
    ];
    // 1 + 1 + 1 + 8 = 11, first ace upgrades to 21, the rest stay low.
    assert_eq!(score(&cards, 21), 21);
}

#[test]
fn deck_reset_yields_every_card_once() {
    let mut deck = Deck::new(11);
    assert_eq!(deck.cards_remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for dealt in 1..=DECK_SIZE {
        assert!(seen.insert(deck.deal_card()));
        assert_eq!(deck.cards_remaining() + dealt, DECK_SIZE);
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.try_deal(), Err(DealError::EmptyDeck));

    deck.reset();
    assert_eq!(deck.cards_remaining(), DECK_SIZE);
}

#[test]
fn resets_produce_new_orders() {
    let mut deck = Deck::new(5);
    let first: Vec<Card> = (0..DECK_SIZE).map(|_| deck.deal_card()).collect();
    deck.reset();
    let second: Vec<Card> = (0..DECK_SIZE).map(|_| deck.deal_card()).collect();
    assert_ne!(first, second);
}

#[test]
#[should_panic(expected = "invariant violated")]
fn dealing_from_empty_deck_panics() {
    let mut deck = Deck::from_draws(&[], 1);
    let _ = deck.deal_card();
}

#[test]
fn dealer_stops_at_first_total_of_seventeen() {
    let options = GameOptions::default();
    for seed in 0..200 {
        let mut deck = Deck::new(seed);
        let mut ui = console("");
        let mut dealer = Dealer::dealer(&options);
        dealer.receive(&mut deck);
        dealer.receive(&mut deck);

        let status = dealer.take_turn(&mut deck, &mut ui).unwrap();
        let cards = dealer.hand().cards();

        match status {
            HandStatus::Stayed => assert!(dealer.total() >= 17),
            HandStatus::Bust => assert!(dealer.total() > 21),
            HandStatus::AwaitingDecision => panic!("turn ended without a decision"),
        }
        if cards.len() > 2 {
            assert!(score(&cards[..cards.len() - 1], 21) < 17);
        }
    }
}

#[test]
fn dealer_does_not_hit_on_seventeen() {
    let options = GameOptions::default();
    let mut deck = Deck::from_draws(
        &[
            card(Rank::Ten, Hearts),
            card(Rank::Seven, Clubs),
            card(Rank::Two, Spades),
        ],
        1,
    );
    let mut ui = console("");
    let mut dealer = Dealer::dealer(&options);
    dealer.receive(&mut deck);
    dealer.receive(&mut deck);

    assert_eq!(dealer.take_turn(&mut deck, &mut ui).unwrap(), HandStatus::Stayed);
    assert_eq!(dealer.hand().len(), 2);
    assert_eq!(deck.cards_remaining(), 1);
}

#[test]
fn initial_deal_alternates_player_first() {
    let draws = [
        card(Rank::Two, Hearts),
        card(Rank::Three, Hearts),
        card(Rank::Four, Hearts),
        card(Rank::Five, Hearts),
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "");
    game.initial_deal();

    assert_eq!(game.player().hand().cards(), &[draws[0], draws[2]]);
    assert_eq!(game.dealer().hand().cards(), &[draws[1], draws[3]]);
    assert!(game.deck().is_empty());
}

#[test]
fn resolve_orders_bust_checks() {
    let bust = hand_of(&[
        card(Rank::King, Hearts),
        card(Rank::Queen, Hearts),
        card(Rank::Five, Hearts),
    ]);
    let eighteen = hand_of(&[card(Rank::King, Clubs), card(Rank::Eight, Clubs)]);
    let also_eighteen = hand_of(&[card(Rank::Nine, Spades), card(Rank::Nine, Diamonds)]);
    let twenty = hand_of(&[card(Rank::Jack, Spades), card(Rank::Queen, Diamonds)]);

    assert_eq!(resolve(&bust, &eighteen), RoundWinner::Dealer);
    assert_eq!(resolve(&eighteen, &bust), RoundWinner::Player);
    assert_eq!(resolve(&eighteen, &also_eighteen), RoundWinner::Tie);
    assert_eq!(resolve(&twenty, &eighteen), RoundWinner::Player);
    assert_eq!(resolve(&eighteen, &twenty), RoundWinner::Dealer);
}

#[test]
fn scripted_round_matches_hand_computed_result() {
    let draws = [
        card(Rank::Four, Diamonds), // player
        card(Rank::Nine, Clubs),    // dealer up
        card(Rank::Three, Diamonds), // player
        card(Rank::Seven, Spades),  // dealer hidden
        card(Rank::King, Clubs),    // player hit
        card(Rank::Five, Hearts),   // dealer draw
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "h\ns\n");

    let result = game.play_round().unwrap();
    assert_eq!(result.winner, RoundWinner::Dealer);
    assert_eq!(result.player_total, 17);
    assert_eq!(result.dealer_total, 21);
    assert!(!result.player_bust);
    assert!(!result.dealer_bust);
    assert_eq!(game.player().score(), 0);
    assert_eq!(game.dealer().score(), 1);
    assert_eq!(game.state(), MatchState::InProgress);
    assert_eq!(game.deck().cards_remaining(), DECK_SIZE);

    let text = output(&game);
    assert!(text.contains("Alice has 9\u{2663} and an unknown card."));
    assert!(text.contains("Bob has 4\u{2666} and 3\u{2666} (total 7)."));
    assert!(text.contains("Bob hits and draws King\u{2663}."));
    assert!(text.contains("Bob chose to stay."));
    assert!(text.contains("Alice chose to stay."));
    assert!(text.contains("Alice won!"));
    assert!(text.contains("Alice has 1 point."));
    assert!(text.contains("Bob has 0 points."));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Nine, Clubs),
        card(Rank::Six, Spades),
        card(Rank::Two, Clubs),
        card(Rank::Queen, Hearts),
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "hit\n");

    let result = game.play_round().unwrap();
    assert_eq!(result.winner, RoundWinner::Dealer);
    assert!(result.player_bust);
    assert_eq!(game.player().hand().status(), HandStatus::Bust);
    assert_eq!(game.dealer().hand().len(), 2);
    assert_eq!(game.dealer().hand().status(), HandStatus::AwaitingDecision);
    assert!(output(&game).contains("Bob busted!"));
}

#[test]
fn equal_totals_tie_without_score_change() {
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Ten, Clubs),
        card(Rank::Seven, Spades),
        card(Rank::Seven, Clubs),
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "S\n");

    let result = game.play_round().unwrap();
    assert_eq!(result.winner, RoundWinner::Tie);
    assert_eq!(game.player().score(), 0);
    assert_eq!(game.dealer().score(), 0);
    assert!(output(&game).contains("It's a tie!"));
}

#[test]
fn invalid_choice_is_reprompted() {
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Ten, Clubs),
        card(Rank::Nine, Spades),
        card(Rank::Seven, Clubs),
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "x\n\nstay\n");

    let result = game.play_round().unwrap();
    assert_eq!(result.winner, RoundWinner::Player);
    assert_eq!(output(&game).matches("Sorry, invalid choice.").count(), 2);
}

#[test]
fn champion_ends_match_until_rematch() {
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Ten, Clubs),
        card(Rank::Nine, Spades),
        card(Rank::Seven, Clubs),
    ];
    let options = GameOptions::default().with_win_limit(1);
    let mut game = game_with_draws(options, &draws, "s\n");

    assert_eq!(game.play_match().unwrap(), MatchOutcome::Champion(Side::Player));
    assert_eq!(game.champion(), Some(Side::Player));
    assert_eq!(game.player().score(), 1);
    assert!(!output(&game).contains("Press enter to continue"));

    // Input is exhausted; a decided match must not start another round.
    assert_eq!(game.play_match().unwrap(), MatchOutcome::Champion(Side::Player));

    // Leave the deck part-dealt so the reset below has something to restore.
    game.set_deck(Deck::from_draws(&draws, 4));
    assert_eq!(game.deck().cards_remaining(), draws.len());

    game.reset_match();
    assert_eq!(game.state(), MatchState::InProgress);
    assert_eq!(game.champion(), None);
    assert_eq!(game.player().score(), 0);
    assert_eq!(game.dealer().score(), 0);
    assert!(game.player().hand().is_empty());
    assert_eq!(game.deck().cards_remaining(), DECK_SIZE);
}

#[test]
fn quitting_between_rounds_abandons_match() {
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Ten, Clubs),
        card(Rank::Seven, Spades),
        card(Rank::Seven, Clubs),
    ];
    let mut game = game_with_draws(GameOptions::default(), &draws, "s\nQ\n");

    assert_eq!(game.play_match().unwrap(), MatchOutcome::Abandoned);
    assert_eq!(game.state(), MatchState::Abandoned);
    assert_eq!(game.champion(), None);
}

#[test]
fn full_session_from_name_to_goodbye() {
    let options = GameOptions::default().with_win_limit(1);
    let script = "\nAlice\nBob\ns\nmaybe\nn\n";
    let mut game = Game::new(options, 3, console(script)).unwrap();
    assert_eq!(game.player().name(), "Bob");

    game.set_deck(Deck::from_draws(
        &[
            card(Rank::Ten, Spades),
            card(Rank::Ten, Clubs),
            card(Rank::Nine, Spades),
            card(Rank::Seven, Clubs),
        ],
        3,
    ));
    game.run().unwrap();

    let text = output(&game);
    assert_eq!(
        text.matches("Sorry, must enter a value (it can't be 'Alice'!).")
            .count(),
        2
    );
    assert!(text.contains("Hi Bob. Welcome to Twenty-One!"));
    assert!(text.contains("Bob won 1 games and is the CHAMPION!"));
    assert!(text.contains("Sorry, must be y or n."));
    assert!(text.ends_with("Thank you for playing Twenty-One! Goodbye!\n\n"));
}

#[test]
fn closed_input_stops_the_game() {
    let err = Game::new(GameOptions::default(), 1, console("")).unwrap_err();
    assert!(matches!(err, PromptError::Closed));
}

#[test]
fn rematch_starts_fresh_match() {
    let options = GameOptions::default().with_win_limit(1);
    // The second match runs on a shuffled deck. A decided round goes straight
    // to the rematch question ("q" is rejected, then "n"); a tie hits the
    // continue prompt ("q" quits, then "n").
    let script = "s\ny\ns\nq\nn\n";
    let draws = [
        card(Rank::Ten, Spades),
        card(Rank::Ten, Clubs),
        card(Rank::Nine, Spades),
        card(Rank::Seven, Clubs),
    ];
    let mut game = game_with_draws(options, &draws, script);
    game.run().unwrap();

    let text = output(&game);
    assert!(text.contains("Bob won 1 games and is the CHAMPION!"));
    assert!(text.contains("Hi Bob. Welcome back to Twenty-One!"));
    assert!(text.contains("Remember, the first to win 1 games is the Champion!"));
    // A second round was dealt, so the decided first match was reset.
    assert_eq!(text.matches("Bob chose to stay.").count(), 2);
    assert!(game.player().score() + game.dealer().score() <= 1);
    assert!(text.ends_with("Thank you for playing Twenty-One! Goodbye!\n\n"));
}

#[test]
fn custom_rules_reach_participants_and_prompts() {
    let options = GameOptions::default()
        .with_dealer_name("Carol")
        .with_bust_value(25);
    let game = Game::new(options, 2, console("Carol\nBob\n")).unwrap();
    assert_eq!(game.options().dealer_name, "Carol");
    assert_eq!(game.options().bust_value, 25);
    assert_eq!(game.dealer().name(), "Carol");
    assert_eq!(game.player().name(), "Bob");

    let mut deck = Deck::from_draws(
        &[
            card(Rank::King, Spades),
            card(Rank::Queen, Hearts),
            card(Rank::Three, Clubs),
        ],
        2,
    );
    let mut player = Player::player("Bob", game.options());
    for _ in 0..3 {
        player.receive(&mut deck);
    }
    assert_eq!(player.total(), 23);
    assert!(!player.is_bust());

    let (rest, written) = game.into_ui().into_inner();
    assert_eq!(rest.position() as usize, rest.get_ref().len());
    let text = String::from_utf8_lossy(&written).into_owned();
    assert!(text.contains("Sorry, must enter a value (it can't be 'Carol'!)."));
}
