use crate::card::Card;
use thiserror::Error;

/// Errors raised by the blackjack engine.
///
/// Out of range values handed over by a `Decider` are reported instead of being clamped,
/// the console front end validates its input before it ever reaches the table.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    #[error("a table seats between 1 and {max} players, {requested} requested")]
    InvalidSeatCount { requested: usize, max: usize },

    #[error("bet of {bet} is not between 0 and the player's wealth of {wealth}")]
    InvalidBet { bet: u32, wealth: u32 },

    #[error("double down increment of {increment} is invalid for a bet of {bet} with wealth {wealth}")]
    InvalidDoubleDown { increment: u32, bet: u32, wealth: u32 },

    #[error("card {0} appears more than once in a stacked deck")]
    DuplicateCard(Card),

    #[error("no player is seated at seat {0}")]
    UnknownSeat(usize),

    #[error("input error: {0}")]
    Input(String),
}
