use crate::card::Card;
use crate::hand::Hand;
use crate::player::Player;
use serde::Serialize;
use tracing::info;

/// How a single hand fared against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Player and dealer both hold a blackjack.
    BlackjackPush,
    /// Player holds a blackjack, the dealer does not.
    Blackjack,
    /// Player busted, the dealer did not.
    PlayerBust,
    /// Dealer busted, the player did not.
    DealerBust,
    /// Both busted, which the player loses.
    DoubleBust,
    /// Equal values.
    Push,
    DealerHigher,
    PlayerHigher,
}

/// Wealth change produced by an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Payout {
    Win(u32),
    Loss(u32),
    Push,
}

impl Outcome {
    /// Compares a finished player hand against the dealer's finished hand.
    /// Blackjacks are decided first, then busts, then values.
    pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
        if player.is_blackjack() {
            return if dealer.is_blackjack() {
                Outcome::BlackjackPush
            } else {
                Outcome::Blackjack
            };
        }
        match (player.busted(), dealer.busted()) {
            (true, false) => Outcome::PlayerBust,
            (false, true) => Outcome::DealerBust,
            (true, true) => Outcome::DoubleBust,
            (false, false) => match dealer.value().cmp(&player.value()) {
                std::cmp::Ordering::Equal => Outcome::Push,
                std::cmp::Ordering::Greater => Outcome::DealerHigher,
                std::cmp::Ordering::Less => Outcome::PlayerHigher,
            },
        }
    }

    /// The payout for this outcome given the per hand wager.
    /// A blackjack pays one and a half times the wager, truncated.
    pub fn payout(&self, effective_bet: u32) -> Payout {
        match self {
            Outcome::BlackjackPush | Outcome::Push => Payout::Push,
            Outcome::Blackjack => {
                Payout::Win(u32::try_from(u64::from(effective_bet) * 3 / 2).unwrap_or(u32::MAX))
            }
            Outcome::DealerBust | Outcome::PlayerHigher => Payout::Win(effective_bet),
            Outcome::PlayerBust | Outcome::DoubleBust | Outcome::DealerHigher => {
                Payout::Loss(effective_bet)
            }
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Outcome::BlackjackPush => "both you and the dealer had blackjack",
            Outcome::Blackjack => "blackjack",
            Outcome::PlayerBust => "you busted",
            Outcome::DealerBust => "dealer busted",
            Outcome::DoubleBust => "both you and the dealer busted",
            Outcome::Push => "you and the dealer had the same final value",
            Outcome::DealerHigher => "dealer had a higher final value",
            Outcome::PlayerHigher => "you had a higher final value",
        }
    }
}

/// The settlement of one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementRecord {
    pub seat: usize,
    pub hand_index: usize,
    pub outcome: Outcome,
    pub payout: Payout,
    pub player_value: u32,
    pub dealer_value: u32,
    pub wealth_after: u32,
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub dealer_cards: Vec<Card>,
    pub dealer_value: u32,
    pub dealer_busted: bool,
    pub records: Vec<SettlementRecord>,
}

/// Settles every hand `player` holds against `dealer`, adjusting the player's wealth hand by hand.
pub fn settle_player(player: &mut Player, dealer: &Hand) -> Vec<SettlementRecord> {
    let effective_bet = player.effective_bet();
    let mut records = Vec::with_capacity(player.hand_count());
    for hand_index in 0..player.hand_count() {
        let hand = &player.hands()[hand_index];
        let outcome = Outcome::resolve(hand, dealer);
        let player_value = hand.value();
        let payout = outcome.payout(effective_bet);
        match payout {
            Payout::Win(amount) => player.collect(amount),
            Payout::Loss(amount) => player.pay(amount),
            Payout::Push => {}
        }
        info!(
            seat = player.seat(),
            hand = hand_index,
            outcome = ?outcome,
            payout = ?payout,
            wealth = player.wealth(),
            "hand settled"
        );
        records.push(SettlementRecord {
            seat: player.seat(),
            hand_index,
            outcome,
            payout,
            player_value,
            dealer_value: dealer.value(),
            wealth_after: player.wealth(),
        });
    }
    records
}

/// Settles every seated player in seating order.
pub fn settle(players: &mut [Player], dealer: &Hand) -> Vec<SettlementRecord> {
    players
        .iter_mut()
        .flat_map(|player| settle_player(player, dealer))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(
            ranks
                .iter()
                .zip(Suit::ALL.iter().cycle())
                .map(|(rank, suit)| Card::new(*rank, *suit)),
        )
    }

    fn busted(ranks: &[Rank]) -> Hand {
        let mut h = hand(ranks);
        h.mark_busted();
        h
    }

    #[test]
    fn test_blackjack_beats_three_card_twenty_one() {
        let player = hand(&[Rank::Ace, Rank::Jack]);
        let dealer = hand(&[Rank::Nine, Rank::Nine, Rank::Three]);
        let outcome = Outcome::resolve(&player, &dealer);
        assert_eq!(outcome, Outcome::Blackjack);
        assert_eq!(outcome.payout(100), Payout::Win(150));
        assert_eq!(outcome.payout(25), Payout::Win(37));
    }

    #[test]
    fn test_blackjack_push() {
        let player = hand(&[Rank::Ace, Rank::Jack]);
        let dealer = hand(&[Rank::King, Rank::Ace]);
        assert_eq!(Outcome::resolve(&player, &dealer), Outcome::BlackjackPush);
    }

    #[test]
    fn test_busts() {
        let player_bust = busted(&[Rank::King, Rank::Four, Rank::Queen]);
        let dealer_bust = busted(&[Rank::King, Rank::Two, Rank::Queen]);
        let player_ok = hand(&[Rank::Ten, Rank::Two]);
        let dealer_ok = hand(&[Rank::Ten, Rank::Eight]);
        assert_eq!(Outcome::resolve(&player_bust, &dealer_ok), Outcome::PlayerBust);
        assert_eq!(Outcome::resolve(&player_ok, &dealer_bust), Outcome::DealerBust);
        let double = Outcome::resolve(&player_bust, &dealer_bust);
        assert_eq!(double, Outcome::DoubleBust);
        assert_eq!(double.payout(40), Payout::Loss(40));
    }

    #[test]
    fn test_value_comparison() {
        let eighteen = hand(&[Rank::Ten, Rank::Eight]);
        let nineteen = hand(&[Rank::Ten, Rank::Nine]);
        assert_eq!(Outcome::resolve(&eighteen, &eighteen.clone()), Outcome::Push);
        assert_eq!(Outcome::resolve(&eighteen, &nineteen), Outcome::DealerHigher);
        assert_eq!(Outcome::resolve(&nineteen, &eighteen), Outcome::PlayerHigher);
    }

    #[test]
    fn test_repeated_push_leaves_wealth_unchanged() {
        let dealer = hand(&[Rank::Ten, Rank::Nine]);
        let mut player = Player::new(0, 1000);
        player.place_bet(333);
        player.hands_mut()[0] = hand(&[Rank::King, Rank::Nine]);
        for _ in 0..1000 {
            let records = settle_player(&mut player, &dealer);
            assert_eq!(records[0].outcome, Outcome::Push);
        }
        assert_eq!(player.wealth(), 1000);
    }

    #[test]
    fn test_settle_split_hands_use_effective_bet() {
        let dealer = hand(&[Rank::Ten, Rank::Eight]);
        let mut player = Player::new(3, 500);
        let mut deck = crate::deck::Deck::stacked(
            &[
                Card::new(Rank::Nine, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Hearts),
                Card::new(Rank::King, Suit::Clubs),
                Card::new(Rank::Eight, Suit::Spades),
            ],
            4,
        )
        .expect("distinct cards");
        player.place_bet(100);
        player.hands_mut()[0].hit(&mut deck);
        player.hands_mut()[0].hit(&mut deck);
        assert!(player.split(&mut deck));

        let records = settle_player(&mut player, &dealer);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, Outcome::PlayerHigher);
        assert_eq!(records[0].payout, Payout::Win(100));
        assert_eq!(records[0].wealth_after, 600);
        assert_eq!(records[1].outcome, Outcome::DealerHigher);
        assert_eq!(records[1].payout, Payout::Loss(100));
        assert_eq!(records[1].wealth_after, 500);
        assert_eq!(player.wealth(), 500);
    }
}
