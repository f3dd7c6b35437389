//! Text formatting helpers shared by the round and match controllers.

use core::fmt::Display;

use crate::hand::Hand;

/// Joins items into an English list: `a`, `a and b`, `a, b, and c`.
#[must_use]
pub fn joinor<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [init @ .., last] => {
            let mut parts: Vec<String> = init.iter().map(ToString::to_string).collect();
            parts.push(format!("{word} {last}"));
            parts.join(delimiter)
        }
    }
}

/// Describes a fully visible hand with its total.
#[must_use]
pub fn hand_line(name: &str, hand: &Hand) -> String {
    format!(
        "{name} has {} (total {}).",
        joinor(hand.cards(), ", ", "and"),
        hand.total()
    )
}

/// Describes a hand with every card but the first hidden.
#[must_use]
pub fn hidden_hand_line(name: &str, hand: &Hand) -> String {
    match hand.up_card() {
        Some(card) if hand.len() > 1 => format!("{name} has {card} and an unknown card."),
        Some(card) => format!("{name} has {card}."),
        None => format!("{name} has no cards."),
    }
}

/// Returns `point` or `points` to suit `count`.
#[must_use]
pub const fn point_word(count: u32) -> &'static str {
    if count == 1 { "point" } else { "points" }
}
