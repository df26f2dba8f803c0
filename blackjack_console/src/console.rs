//! Console collaborators: prompts players for their decisions and prints what happens at the table.

use crate::session::{SessionEvent, SessionInput};
use blackjack_lib::table::MAX_SEATS;
use blackjack_lib::{
    BlackjackGameError, Decider, Outcome, Payout, TableEvent, TableObserver, TableState,
};
use std::io::{BufRead, Write};

const BANNER_WIDTH: usize = 26;

/// Struct that plays every seat from a text console.
/// Each question is asked until a valid answer is typed, so the table only ever sees values within bounds.
pub struct ConsoleDecider<R, W> {
    reader: R,
    writer: W,
    failure: Option<BlackjackGameError>,
}

impl<R: BufRead, W: Write> ConsoleDecider<R, W> {
    /// Associated function to create a new `ConsoleDecider` reading answers from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> ConsoleDecider<R, W> {
        ConsoleDecider {
            reader,
            writer,
            failure: None,
        }
    }

    /// Consumes the decider, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn say(&mut self, text: &str) -> Result<(), BlackjackGameError> {
        writeln!(self.writer, "{}", text)
            .and_then(|_| self.writer.flush())
            .map_err(|e| BlackjackGameError::Input(format!("unable to write to the console: {e}")))
    }

    fn read_line(&mut self) -> Result<String, BlackjackGameError> {
        // a write that failed while displaying an event is reported at the next prompt
        if let Some(failure) = self.failure.take() {
            return Err(failure);
        }
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| BlackjackGameError::Input(format!("unable to read from the console: {e}")))?;
        if read == 0 {
            return Err(BlackjackGameError::Input("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Writes `prompt`, then reads lines until `parse` accepts one, writing `retry` after every rejected line.
    fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        mut parse: impl FnMut(&str) -> Option<T>,
    ) -> Result<T, BlackjackGameError> {
        self.say(prompt)?;
        loop {
            let line = self.read_line()?;
            if let Some(answer) = parse(&line) {
                return Ok(answer);
            }
            self.say(retry)?;
        }
    }

    /// Asks a question with exactly two accepted answers, returns true for `yes`.
    fn ask_choice(&mut self, prompt: &str, yes: &str, no: &str) -> Result<bool, BlackjackGameError> {
        let retry = format!("Please respond '{}' or '{}'", yes, no);
        self.ask(prompt, &retry, |line| {
            if line == yes {
                Some(true)
            } else if line == no {
                Some(false)
            } else {
                None
            }
        })
    }
}

fn banner(text: &str) -> String {
    let rule = format!("*{}*", "-".repeat(BANNER_WIDTH - 2));
    format!("{rule}\n*{:^width$}*\n{rule}", text, width = BANNER_WIDTH - 2)
}

fn player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

/// Text shown for a table event.
pub fn describe_event(event: &TableEvent<'_>) -> String {
    match event {
        TableEvent::RoundStarted { round, seats } => format!(
            "{}\nRound {} with {} player(s)",
            banner("Let's Play"),
            round,
            seats
        ),
        TableEvent::Dealt {
            seat,
            hand,
            dealers_up_card,
        } => format!(
            "{}, your cards are: {}\nYour total is {}\nDealer is showing {}",
            player_name(*seat),
            hand,
            hand.value(),
            dealers_up_card
        ),
        TableEvent::SplitGranted { hands, bet, .. } => {
            let mut text = format!(
                "Split. Your bet is now {}, make decisions for each of your hands separately",
                bet
            );
            for (i, hand) in hands.iter().enumerate() {
                text.push_str(&format!("\nHand {}: {} ({})", i + 1, hand, hand.value()));
            }
            text
        }
        TableEvent::SplitDenied { bet, wealth, .. } => format!(
            "No option to split for you, you can't afford it! A split needs {} and your wealth is {}",
            *bet as u64 * 2,
            wealth
        ),
        TableEvent::DoubledDown { hand, bet, .. } => format!(
            "Doubled down, your bet is now {}\nYou've hit: {}\nYour total is now {}",
            bet,
            hand,
            hand.value()
        ),
        TableEvent::Hit { hand, .. } => {
            format!("You've hit: {}\nYour total is now {}", hand, hand.value())
        }
        TableEvent::Busted { value, .. } => format!("You busted with {}!", value),
        TableEvent::TwentyOne { hand_index, .. } => format!(
            "Hand {} is already at 21, there are no decisions to make",
            hand_index + 1
        ),
        TableEvent::DealerPlayed { hand, drawn } => {
            let mut text = format!("{}\nDealer's cards are {}", banner("Results Below"), hand);
            if !drawn.is_empty() {
                text.push_str(&format!("\nThe dealer drew {} card(s)", drawn.len()));
            }
            if hand.busted() {
                text.push_str(&format!("\nDealer busted with {}", hand.value()));
            } else {
                text.push_str(&format!("\nDealer's total is {}", hand.value()));
            }
            text
        }
        TableEvent::Settled(record) => {
            let headline = match (record.outcome, record.payout) {
                (Outcome::Blackjack, Payout::Win(amount)) => {
                    format!("*** BLACKJACK. You win {}. ***", amount)
                }
                (_, Payout::Win(amount)) => {
                    format!("*** YOU WIN. You win {}. {}! ***", amount, capitalize(record.outcome.reason()))
                }
                (_, Payout::Loss(amount)) => format!(
                    "*** DEALER WINS. You lose your bet of {}. {}! ***",
                    amount,
                    capitalize(record.outcome.reason())
                ),
                (_, Payout::Push) => {
                    format!("*** PUSH. You win 0. {}. ***", capitalize(record.outcome.reason()))
                }
            };
            format!(
                "{}, hand {} ({} against {}): {}\nWealth is now {}",
                player_name(record.seat),
                record.hand_index + 1,
                record.player_value,
                record.dealer_value,
                headline,
                record.wealth_after
            )
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Text shown for a session event.
pub fn describe_session_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Welcome => banner("WELCOME TO BLACKJACK"),
        SessionEvent::PlayAgain => format!(
            "{}\nAll players must decide if they want to play again.",
            banner("Play Again?")
        ),
        SessionEvent::Broke { seat } => {
            format!("{}, you can't afford to play.", player_name(*seat))
        }
        SessionEvent::Left { seat, wealth } => format!(
            " *** Thanks for coming today {}, your final wealth is {} *** ",
            player_name(*seat),
            wealth
        ),
        SessionEvent::Reseating { seats } => format!(
            "Everyone will be reseated before the next round, {} player(s) remain\n{}",
            seats,
            "-".repeat(35)
        ),
        SessionEvent::Goodbye => banner("THANKS FOR PLAYING"),
    }
}

impl<R: BufRead, W: Write> TableObserver for ConsoleDecider<R, W> {
    fn notify(&mut self, event: &TableEvent<'_>) {
        let text = describe_event(event);
        if let Err(e) = self.say(&text) {
            self.failure.get_or_insert(e);
        }
    }
}

impl<R: BufRead, W: Write> Decider for ConsoleDecider<R, W> {
    fn bet(&mut self, seat: usize, wealth: u32) -> Result<u32, BlackjackGameError> {
        let prompt = format!(
            "Hello, {} your wealth is {}\n>>> How much would you like to bet? Enter the amount below <<<",
            player_name(seat),
            wealth
        );
        self.ask(
            &prompt,
            "Please enter a valid size (0 to your wealth)",
            |line| line.parse::<u32>().ok().filter(|bet| *bet <= wealth),
        )
    }

    fn split(&mut self, _state: TableState<'_>) -> Result<bool, BlackjackGameError> {
        self.ask_choice(
            ">>> Would you like to split? Enter 'split' if so, 'no' if not <<<",
            "split",
            "no",
        )
    }

    fn double_down(&mut self, _state: TableState<'_>) -> Result<bool, BlackjackGameError> {
        self.ask_choice(
            ">>> Would you like to double down? Enter 'double down' if so, 'no' if not <<<",
            "double down",
            "no",
        )
    }

    fn double_down_increment(&mut self, state: TableState<'_>) -> Result<u32, BlackjackGameError> {
        let (bet, wealth) = (state.bet, state.wealth);
        self.ask(
            ">>> By how much would you like to increase your bet? <<<",
            "Please enter a valid size (0 to your bet size), assuming you can afford it",
            |line| {
                line.parse::<u32>()
                    .ok()
                    .filter(|increment| *increment <= bet && bet as u64 + *increment as u64 <= wealth as u64)
            },
        )
    }

    fn hit(&mut self, state: TableState<'_>) -> Result<bool, BlackjackGameError> {
        let prompt = format!(
            "{}, hand {}: {}\nYour total is {}\nDealer is showing {}\n>>> Hit (hit) or stand (stand)? <<<",
            player_name(state.seat),
            state.hand_index + 1,
            state.hand,
            state.hand.value(),
            state.dealers_up_card
        );
        self.ask_choice(&prompt, "hit", "stand")
    }
}

impl<R: BufRead, W: Write> SessionInput for ConsoleDecider<R, W> {
    fn seat_count(&mut self) -> Result<usize, BlackjackGameError> {
        self.ask(
            ">>> How many people would like to be seated at the blackjack table? <<<",
            "Please enter a valid amount. The house only has up to seven seats",
            |line| {
                line.parse::<usize>()
                    .ok()
                    .filter(|seats| (1..=MAX_SEATS).contains(seats))
            },
        )
    }

    fn play_again(&mut self, seat: usize, wealth: u32) -> Result<bool, BlackjackGameError> {
        let prompt = format!(
            "{}, your wealth is {}\n>>> Would you like to play again? Type yes if so, no otherwise <<<",
            player_name(seat),
            wealth
        );
        self.ask_choice(&prompt, "yes", "no")
    }

    fn session_event(&mut self, event: &SessionEvent) {
        let text = describe_session_event(event);
        if let Err(e) = self.say(&text) {
            self.failure.get_or_insert(e);
        }
    }
}
