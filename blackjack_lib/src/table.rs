use crate::card::Card;
use crate::config::TableConfig;
use crate::dealer::Dealer;
use crate::decider::{Decider, TableEvent, TableState};
use crate::deck::Deck;
use crate::hand::BLACKJACK;
use crate::player::Player;
use crate::settlement::{settle, RoundReport};
use crate::BlackjackGameError;
use tracing::{debug, info, warn};

/// Most players a table can seat.
pub const MAX_SEATS: usize = 7;

/// Struct for a blackjack table, one dealer and up to seven players sharing a single deck.
/// The table drives every round: the opening deal, each player's decisions, the dealer's draw and the settlement.
#[derive(Debug)]
pub struct BlackjackTable {
    config: TableConfig,
    deck: Deck,
    dealer: Dealer,
    players: Vec<Player>,
    rounds_played: u32,
}

impl BlackjackTable {
    /// Associated function to seat `seats` players at a new table.
    /// The deck is seeded from the config when it carries a seed.
    pub fn new(config: TableConfig, seats: usize) -> Result<BlackjackTable, BlackjackGameError> {
        let deck = match config.seed {
            Some(seed) => Deck::with_seed(seed),
            None => Deck::new(),
        };
        BlackjackTable::with_deck(config, seats, deck)
    }

    /// Associated function to seat `seats` players at a new table dealing from `deck`.
    pub fn with_deck(
        config: TableConfig,
        seats: usize,
        deck: Deck,
    ) -> Result<BlackjackTable, BlackjackGameError> {
        if seats == 0 || seats > MAX_SEATS {
            return Err(BlackjackGameError::InvalidSeatCount {
                requested: seats,
                max: MAX_SEATS,
            });
        }
        let players = (0..seats)
            .map(|seat| Player::new(seat, config.starting_wealth))
            .collect();
        Ok(BlackjackTable {
            config,
            deck,
            dealer: Dealer::new(),
            players,
            rounds_played: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Getter for the player sitting at `seat`.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.iter().find(|player| player.seat() == seat)
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Removes the player sitting at `seat` from the table and hands them back.
    pub fn remove_player(&mut self, seat: usize) -> Result<Player, BlackjackGameError> {
        let idx = self
            .players
            .iter()
            .position(|player| player.seat() == seat)
            .ok_or(BlackjackGameError::UnknownSeat(seat))?;
        info!(seat, wealth = self.players[idx].wealth(), "player left the table");
        Ok(self.players.remove(idx))
    }

    /// Method that plays one full round with every seated player.
    ///
    /// The dealer is dealt first, then each player in seating order bets, receives two cards and plays their hand(s).
    /// Once everyone is done the dealer draws to 17 and every hand is settled.
    /// Every round after the first starts from a freshly shuffled deck unless the config says otherwise.
    pub fn play_round<D: Decider + ?Sized>(
        &mut self,
        decider: &mut D,
    ) -> Result<RoundReport, BlackjackGameError> {
        let round = self.rounds_played + 1;
        if self.rounds_played > 0 && self.config.shuffle_each_round {
            self.deck.shuffle();
        }
        for player in self.players.iter_mut() {
            player.clear_hands();
        }
        self.dealer.reset();
        let up_card = self.dealer.deal_opening(&mut self.deck);

        info!(round, seats = self.players.len(), %up_card, "round started");
        decider.notify(&TableEvent::RoundStarted {
            round,
            seats: self.players.len(),
        });

        for player in self.players.iter_mut() {
            play_turn(&mut self.deck, player, up_card, decider)?;
        }

        let drawn = self.dealer.play(&mut self.deck);
        debug!(
            value = self.dealer.hand().value(),
            drawn = drawn.len(),
            busted = self.dealer.hand().busted(),
            "dealer finished"
        );
        decider.notify(&TableEvent::DealerPlayed {
            hand: self.dealer.hand(),
            drawn: &drawn,
        });

        let records = settle(&mut self.players, self.dealer.hand());
        for record in records.iter() {
            decider.notify(&TableEvent::Settled(record));
        }

        self.rounds_played = round;
        Ok(RoundReport {
            round,
            dealer_cards: self.dealer.hand().cards().to_vec(),
            dealer_value: self.dealer.hand().value(),
            dealer_busted: self.dealer.hand().busted(),
            records,
        })
    }
}

/// Plays one player's turn: bet, opening cards, split or double down, then hit or stand on each hand.
fn play_turn<D: Decider + ?Sized>(
    deck: &mut Deck,
    player: &mut Player,
    up_card: Card,
    decider: &mut D,
) -> Result<(), BlackjackGameError> {
    let seat = player.seat();
    let wealth = player.wealth();

    let bet = decider.bet(seat, wealth)?;
    if bet > wealth {
        warn!(seat, bet, wealth, "bet exceeds wealth");
        return Err(BlackjackGameError::InvalidBet { bet, wealth });
    }
    player.place_bet(bet);

    let opening = &mut player.hands_mut()[0];
    opening.hit(deck);
    opening.hit(deck);
    debug!(seat, bet, value = opening.value(), "opening hand dealt");
    decider.notify(&TableEvent::Dealt {
        seat,
        hand: &player.hands()[0],
        dealers_up_card: up_card,
    });

    if player.hands()[0].is_pair() {
        let state = TableState::new(seat, 0, &player.hands()[0], bet, wealth, up_card);
        if decider.split(state)? {
            if player.split(deck) {
                info!(seat, bet = player.bet(), "split");
                decider.notify(&TableEvent::SplitGranted {
                    seat,
                    hands: player.hands(),
                    bet: player.bet(),
                });
            } else {
                info!(seat, bet, wealth, "split denied, insufficient funds");
                decider.notify(&TableEvent::SplitDenied { seat, bet, wealth });
            }
        }
    } else {
        let state = TableState::new(seat, 0, &player.hands()[0], bet, wealth, up_card);
        if decider.double_down(state)? {
            let increment = decider.double_down_increment(state)?;
            if increment > bet || bet as u64 + increment as u64 > wealth as u64 {
                warn!(seat, increment, bet, wealth, "invalid double down increment");
                return Err(BlackjackGameError::InvalidDoubleDown {
                    increment,
                    bet,
                    wealth,
                });
            }
            player.raise_bet(increment);

            // exactly one card, then the turn is over
            let hand = &mut player.hands_mut()[0];
            hand.hit(deck);
            let value = hand.value();
            if value > BLACKJACK {
                hand.mark_busted();
            }
            info!(seat, bet = player.bet(), value, "doubled down");
            decider.notify(&TableEvent::DoubledDown {
                seat,
                hand: &player.hands()[0],
                bet: player.bet(),
            });
            if player.hands()[0].busted() {
                decider.notify(&TableEvent::Busted {
                    seat,
                    hand_index: 0,
                    value,
                });
            }
            return Ok(());
        }
    }

    for hand_index in 0..player.hand_count() {
        play_hand(deck, player, hand_index, up_card, decider)?;
    }
    Ok(())
}

/// Offers hit or stand on one hand until the player stands or busts. A hand already worth 21 is skipped.
fn play_hand<D: Decider + ?Sized>(
    deck: &mut Deck,
    player: &mut Player,
    hand_index: usize,
    up_card: Card,
    decider: &mut D,
) -> Result<(), BlackjackGameError> {
    let seat = player.seat();
    if player.hands()[hand_index].value() == BLACKJACK {
        debug!(seat, hand = hand_index, "hand already at 21");
        decider.notify(&TableEvent::TwentyOne { seat, hand_index });
        return Ok(());
    }

    loop {
        let state = TableState::new(
            seat,
            hand_index,
            &player.hands()[hand_index],
            player.bet(),
            player.wealth(),
            up_card,
        );
        if !decider.hit(state)? {
            debug!(seat, hand = hand_index, value = player.hands()[hand_index].value(), "stand");
            break;
        }

        let hand = &mut player.hands_mut()[hand_index];
        hand.hit(deck);
        let value = hand.value();
        if value > BLACKJACK {
            hand.mark_busted();
        }
        debug!(seat, hand = hand_index, value, "hit");
        decider.notify(&TableEvent::Hit {
            seat,
            hand_index,
            hand: &player.hands()[hand_index],
        });

        if value > BLACKJACK {
            info!(seat, hand = hand_index, value, "busted");
            decider.notify(&TableEvent::Busted {
                seat,
                hand_index,
                value,
            });
            break;
        }
    }
    Ok(())
}
