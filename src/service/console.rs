use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time;
use tracing::debug;

use crate::models::{
    error::TriviaError,
    quiz_session::{QuizSession, SessionView},
};

/// Terminal front-end for a quiz session. Owns the session outright, so the
/// single-writer rule holds by construction: every mutation goes through this
/// loop, driven either by a timer tick or a line of input.
pub struct ConsoleRunner {
    session: QuizSession,
}

impl ConsoleRunner {
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    pub async fn run(mut self) -> Result<(), TriviaError> {
        let mut input = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match self.session.view() {
                SessionView::Loading => {
                    // the caller only hands over a started session
                    println!("Loading Wrapped Data...");
                    return Ok(());
                }
                SessionView::Active { .. } => {
                    if !self.run_question(&mut input).await? {
                        return Ok(());
                    }
                }
                SessionView::GameOver { score, total } => {
                    println!();
                    println!("Game Over!");
                    println!("Your Score: {} / {}", score, total);
                    println!("[r] restart  [q] back to home");

                    match input.next_line().await? {
                        Some(line) if line.trim() == "r" => self.session.restart(),
                        _ => return Ok(()),
                    }
                }
            }
        }
    }

    /// Drives one question to completion. The countdown interval is created
    /// here and dropped on every way out, so each question gets a fresh timer
    /// and a stale one can never decrement the next question's clock.
    /// Returns false when the player quits.
    async fn run_question(&mut self, input: &mut Lines<BufReader<Stdin>>) -> Result<bool, TriviaError> {
        let SessionView::Active {
            question_number, ..
        } = self.session.view()
        else {
            return Ok(true);
        };

        let mut countdown = time::interval(Duration::from_secs(1));
        countdown.tick().await; // first tick resolves immediately

        self.render();

        loop {
            tokio::select! {
                _ = countdown.tick() => {
                    self.session.tick();
                }
                line = input.next_line() => {
                    let Some(line) = line? else {
                        return Ok(false);
                    };

                    match line.trim() {
                        "q" => return Ok(false),
                        "r" => {
                            self.session.restart();
                            return Ok(true);
                        }
                        "s" => {
                            if matches!(self.session.view(), SessionView::Active { can_submit: true, .. }) {
                                self.session.submit();
                            } else {
                                println!("Pick an option before submitting.");
                            }
                        }
                        other => self.select_option(other),
                    }
                }
            }

            match self.session.view() {
                SessionView::Active {
                    question_number: current,
                    ..
                } if current == question_number => self.render(),
                _ => return Ok(true),
            }
        }
    }

    fn select_option(&mut self, raw: &str) {
        let Ok(number) = raw.parse::<usize>() else {
            debug!("Ignoring input: {}", raw);
            return;
        };

        if let SessionView::Active { options, .. } = self.session.view() {
            match number.checked_sub(1).and_then(|i| options.get(i)) {
                Some(option) => self.session.select(option.clone()),
                None => println!("No such option: {}", number),
            }
        }
    }

    fn render(&self) {
        let SessionView::Active {
            prompt,
            options,
            selected,
            remaining,
            score,
            question_number,
            total,
            ..
        } = self.session.view()
        else {
            return;
        };

        println!();
        println!("Question {} of {}", question_number, total);
        println!("{}", prompt);
        for (i, option) in options.iter().enumerate() {
            let marker = if selected.as_deref() == Some(option) {
                ">"
            } else {
                " "
            };
            println!("{} [{}] {}", marker, i + 1, option);
        }
        println!("Time: {}s  Score: {}", remaining, score);
        println!("(number = select, s = submit, r = restart, q = quit)");
    }
}
