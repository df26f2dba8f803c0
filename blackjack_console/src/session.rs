//! The outer loop around the table: seating, rounds, and asking everyone whether to play again.

use crate::SessionError;
use blackjack_lib::{BlackjackGameError, BlackjackTable, Decider, TableConfig};
use serde::Serialize;
use tracing::info;

/// Session level announcements, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Welcome,
    PlayAgain,
    Broke { seat: usize },
    Left { seat: usize, wealth: u32 },
    Reseating { seats: usize },
    Goodbye,
}

/// Input collaborator for a whole session, the round decisions plus seating and play again choices.
pub trait SessionInput: Decider {
    /// How many players sit down, between 1 and 7.
    fn seat_count(&mut self) -> Result<usize, BlackjackGameError>;

    /// Whether the player at `seat` stays for another round.
    fn play_again(&mut self, seat: usize, wealth: u32) -> Result<bool, BlackjackGameError>;

    fn session_event(&mut self, _event: &SessionEvent) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureReason {
    OutOfMoney,
    Declined,
}

/// A player leaving the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Departure {
    pub seat: usize,
    pub round: u32,
    pub final_wealth: u32,
    pub reason: DepartureReason,
}

/// Record of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub departures: Vec<Departure>,
}

/// Struct that runs a session of rounds until every player has left.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    config: TableConfig,
    seats: Option<usize>,
}

impl Session {
    /// Associated function to create a new `Session`. When `seats` is `None` the seat count is asked for.
    pub fn new(config: TableConfig, seats: Option<usize>) -> Session {
        Session { config, seats }
    }

    /// Method that seats the players and plays rounds until nobody wants to, or can afford to, continue.
    pub fn run<I: SessionInput + ?Sized>(&self, input: &mut I) -> Result<SessionSummary, SessionError> {
        input.session_event(&SessionEvent::Welcome);
        let seats = match self.seats {
            Some(seats) => seats,
            None => input.seat_count()?,
        };
        let table = BlackjackTable::new(self.config, seats)?;
        info!(seats, seed = ?self.config.seed, "session started");
        play_session(table, input)
    }
}

/// Plays rounds at `table` until it is empty.
/// After every round broke players are removed, then each remaining player is asked whether to stay.
pub fn play_session<I: SessionInput + ?Sized>(
    mut table: BlackjackTable,
    input: &mut I,
) -> Result<SessionSummary, SessionError> {
    let mut summary = SessionSummary::default();
    loop {
        let report = table.play_round(input)?;
        summary.rounds_played = report.round;

        input.session_event(&SessionEvent::PlayAgain);
        let seated: Vec<(usize, u32)> = table
            .players()
            .iter()
            .map(|player| (player.seat(), player.wealth()))
            .collect();
        for (seat, wealth) in seated {
            let reason = if wealth == 0 {
                input.session_event(&SessionEvent::Broke { seat });
                DepartureReason::OutOfMoney
            } else if input.play_again(seat, wealth)? {
                continue;
            } else {
                input.session_event(&SessionEvent::Left { seat, wealth });
                DepartureReason::Declined
            };
            table.remove_player(seat)?;
            summary.departures.push(Departure {
                seat,
                round: report.round,
                final_wealth: wealth,
                reason,
            });
        }

        if table.is_empty() {
            break;
        }
        input.session_event(&SessionEvent::Reseating {
            seats: table.players().len(),
        });
    }
    info!(rounds = summary.rounds_played, "session finished");
    input.session_event(&SessionEvent::Goodbye);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_lib::{TableObserver, TableState};
    use std::collections::VecDeque;

    /// Bets nothing, always stands and answers play again from a script.
    struct Stander {
        seats: usize,
        again: VecDeque<bool>,
        asked: Vec<usize>,
        events: Vec<SessionEvent>,
    }

    impl Stander {
        fn new(seats: usize, again: &[bool]) -> Self {
            Stander {
                seats,
                again: again.iter().copied().collect(),
                asked: Vec::new(),
                events: Vec::new(),
            }
        }
    }

    impl TableObserver for Stander {}

    impl Decider for Stander {
        fn bet(&mut self, _seat: usize, _wealth: u32) -> Result<u32, BlackjackGameError> {
            Ok(0)
        }

        fn split(&mut self, _state: TableState<'_>) -> Result<bool, BlackjackGameError> {
            Ok(false)
        }

        fn double_down(&mut self, _state: TableState<'_>) -> Result<bool, BlackjackGameError> {
            Ok(false)
        }

        fn double_down_increment(&mut self, _state: TableState<'_>) -> Result<u32, BlackjackGameError> {
            Ok(0)
        }

        fn hit(&mut self, _state: TableState<'_>) -> Result<bool, BlackjackGameError> {
            Ok(false)
        }
    }

    impl SessionInput for Stander {
        fn seat_count(&mut self) -> Result<usize, BlackjackGameError> {
            Ok(self.seats)
        }

        fn play_again(&mut self, seat: usize, _wealth: u32) -> Result<bool, BlackjackGameError> {
            self.asked.push(seat);
            self.again
                .pop_front()
                .ok_or_else(|| BlackjackGameError::Input("no answer scripted".to_string()))
        }

        fn session_event(&mut self, event: &SessionEvent) {
            self.events.push(*event);
        }
    }

    #[test]
    fn test_session_ends_when_everyone_declines() {
        let session = Session::new(TableConfig::new().seed(3).build(), None);
        // round 1: seat 0 leaves, seat 1 stays; round 2: seat 1 leaves
        let mut input = Stander::new(2, &[false, true, false]);
        let summary = session.run(&mut input).expect("session plays");

        assert_eq!(summary.rounds_played, 2);
        assert_eq!(input.asked, vec![0, 1, 1]);
        assert_eq!(
            summary.departures,
            vec![
                Departure {
                    seat: 0,
                    round: 1,
                    final_wealth: 1000,
                    reason: DepartureReason::Declined
                },
                Departure {
                    seat: 1,
                    round: 2,
                    final_wealth: 1000,
                    reason: DepartureReason::Declined
                },
            ]
        );
        assert_eq!(input.events.first(), Some(&SessionEvent::Welcome));
        assert_eq!(input.events.last(), Some(&SessionEvent::Goodbye));
        assert!(input.events.contains(&SessionEvent::Reseating { seats: 1 }));
    }

    #[test]
    fn test_broke_players_are_not_asked() {
        let config = TableConfig::new().seed(8).starting_wealth(0).build();
        let session = Session::new(config, Some(3));
        let mut input = Stander::new(0, &[]);
        let summary = session.run(&mut input).expect("session plays");

        assert_eq!(summary.rounds_played, 1);
        assert!(input.asked.is_empty());
        assert_eq!(summary.departures.len(), 3);
        assert!(summary
            .departures
            .iter()
            .all(|d| d.reason == DepartureReason::OutOfMoney && d.final_wealth == 0));
    }

    #[test]
    fn test_invalid_seat_count() {
        let session = Session::new(TableConfig::default(), Some(8));
        let mut input = Stander::new(0, &[]);
        assert!(matches!(
            session.run(&mut input),
            Err(SessionError::Game(BlackjackGameError::InvalidSeatCount { .. }))
        ));
    }

    #[test]
    fn test_summary_serializes() {
        let summary = SessionSummary {
            rounds_played: 4,
            departures: vec![Departure {
                seat: 2,
                round: 4,
                final_wealth: 1350,
                reason: DepartureReason::Declined,
            }],
        };
        let json = serde_json::to_value(&summary).expect("serializable");
        assert_eq!(json["rounds_played"], 4);
        assert_eq!(json["departures"][0]["reason"], "declined");
        assert_eq!(json["departures"][0]["final_wealth"], 1350);
    }
}
