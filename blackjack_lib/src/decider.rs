//! The boundary between the table and whoever sits at it.
//! A `Decider` answers the table's questions, a `TableObserver` is told what happened.

use crate::card::Card;
use crate::hand::Hand;
use crate::settlement::SettlementRecord;
use crate::BlackjackGameError;

/// Everything a decider needs to know about one hand when it is asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct TableState<'a> {
    pub seat: usize,
    pub hand_index: usize,
    pub hand: &'a Hand,
    pub bet: u32,
    pub wealth: u32,
    pub dealers_up_card: Card,
}

impl<'a> TableState<'a> {
    pub fn new(
        seat: usize,
        hand_index: usize,
        hand: &'a Hand,
        bet: u32,
        wealth: u32,
        dealers_up_card: Card,
    ) -> TableState<'a> {
        TableState {
            seat,
            hand_index,
            hand,
            bet,
            wealth,
            dealers_up_card,
        }
    }
}

/// Something that happened at the table, reported for display only.
#[derive(Debug, Clone, Copy)]
pub enum TableEvent<'a> {
    RoundStarted {
        round: u32,
        seats: usize,
    },
    Dealt {
        seat: usize,
        hand: &'a Hand,
        dealers_up_card: Card,
    },
    SplitGranted {
        seat: usize,
        hands: &'a [Hand],
        bet: u32,
    },
    SplitDenied {
        seat: usize,
        bet: u32,
        wealth: u32,
    },
    DoubledDown {
        seat: usize,
        hand: &'a Hand,
        bet: u32,
    },
    Hit {
        seat: usize,
        hand_index: usize,
        hand: &'a Hand,
    },
    Busted {
        seat: usize,
        hand_index: usize,
        value: u32,
    },
    TwentyOne {
        seat: usize,
        hand_index: usize,
    },
    DealerPlayed {
        hand: &'a Hand,
        drawn: &'a [Card],
    },
    Settled(&'a SettlementRecord),
}

/// Output collaborator. Every method has a default that ignores the event.
pub trait TableObserver {
    fn notify(&mut self, _event: &TableEvent<'_>) {}
}

/// Input collaborator, supplies every decision a player makes during a round.
/// Implementers are expected to hand back values within the documented bounds,
/// the table rejects anything else with an error instead of asking again.
pub trait Decider: TableObserver {
    /// The opening wager for `seat`, between 0 and `wealth`.
    fn bet(&mut self, seat: usize, wealth: u32) -> Result<u32, BlackjackGameError>;

    /// Whether to split a pair. Only asked when the two opening cards share a rank.
    fn split(&mut self, state: TableState<'_>) -> Result<bool, BlackjackGameError>;

    /// Whether to double down. Only asked when the opening cards differ in rank.
    fn double_down(&mut self, state: TableState<'_>) -> Result<bool, BlackjackGameError>;

    /// How much to add to the bet when doubling down, at most the bet and never more than the wealth covers.
    fn double_down_increment(&mut self, state: TableState<'_>) -> Result<u32, BlackjackGameError>;

    /// True to take another card, false to stand.
    fn hit(&mut self, state: TableState<'_>) -> Result<bool, BlackjackGameError>;
}
