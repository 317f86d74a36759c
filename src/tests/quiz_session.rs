#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::models::{
        question::{Question, generate_questions},
        quiz_session::{QuizSession, SessionView},
        wrapped::{WrappedArtist, WrappedEntry},
    };

    fn wrapped_history(names: &[&str]) -> Vec<WrappedEntry> {
        vec![WrappedEntry {
            artists: names
                .iter()
                .map(|name| WrappedArtist {
                    name: (*name).to_owned(),
                })
                .collect(),
            created_at: None,
        }]
    }

    fn single_question_session() -> QuizSession {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let history = wrapped_history(&["Artist A", "Artist B", "Artist C", "Artist D"]);
        QuizSession::new(generate_questions(&history, 4, &mut rng), 10)
    }

    fn question(correct: &str, options: &[&str]) -> Question {
        Question {
            prompt: "Who was your top artist of the year?".into(),
            correct_answer: correct.into(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
        }
    }

    #[test]
    fn correct_answer_scores_and_ends_single_question_game() {
        let mut session = single_question_session();

        session.select("Artist A");
        session.submit();

        assert!(session.is_over());
        assert_eq!(session.score(), 1);
        assert_eq!(session.view(), SessionView::GameOver { score: 1, total: 1 });
    }

    #[test]
    fn submit_without_selection_never_scores() {
        let mut session = single_question_session();

        session.submit();

        assert!(session.is_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn answer_comparison_is_case_sensitive() {
        let mut session = single_question_session();

        session.select("artist a");
        session.submit();

        assert_eq!(session.score(), 0);
    }

    #[test]
    fn countdown_expiry_behaves_like_submit_with_no_selection() {
        let mut session = single_question_session();

        for _ in 0..10 {
            session.tick();
        }

        assert!(session.is_over());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn countdown_expiry_scores_a_standing_selection() {
        let mut session = single_question_session();

        session.select("Artist A");
        for _ in 0..10 {
            session.tick();
        }

        assert!(session.is_over());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn ticks_decrement_one_second_at_a_time() {
        let mut session = single_question_session();

        session.tick();
        session.tick();
        session.tick();

        match session.view() {
            SessionView::Active { remaining, .. } => assert_eq!(remaining, 7),
            view => panic!("expected active session, got {:?}", view),
        }
    }

    #[test]
    fn operations_after_game_over_are_ignored() {
        let mut session = single_question_session();
        session.submit();
        assert!(session.is_over());

        session.select("Artist A");
        session.tick();
        session.submit();

        assert_eq!(session.view(), SessionView::GameOver { score: 0, total: 1 });
    }

    #[test]
    fn advancing_resets_countdown_and_selection() {
        let questions = vec![
            question("Artist A", &["Artist B", "Artist A"]),
            question("Artist C", &["Artist C", "Artist D"]),
        ];
        let mut session = QuizSession::new(questions, 10);

        session.tick();
        session.select("Artist A");
        session.submit();

        match session.view() {
            SessionView::Active {
                question_number,
                score,
                remaining,
                selected,
                can_submit,
                ..
            } => {
                assert_eq!(question_number, 2);
                assert_eq!(score, 1);
                assert_eq!(remaining, 10);
                assert_eq!(selected, None);
                assert!(!can_submit);
            }
            view => panic!("expected active session, got {:?}", view),
        }
    }

    #[test]
    fn score_never_exceeds_answered_questions() {
        let questions = vec![
            question("Artist A", &["Artist B", "Artist A"]),
            question("Artist C", &["Artist C", "Artist D"]),
        ];
        let mut session = QuizSession::new(questions, 10);

        session.select("Artist A");
        session.submit();
        assert!(session.score() <= 1);

        session.select("Artist C");
        session.submit();
        assert!(session.is_over());
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn restart_resets_state_but_keeps_question_order() {
        let mut session = single_question_session();
        let options_before = match session.view() {
            SessionView::Active { options, .. } => options,
            view => panic!("expected active session, got {:?}", view),
        };

        session.tick();
        session.select("Artist B");
        session.submit();
        assert!(session.is_over());

        session.restart();

        match session.view() {
            SessionView::Active {
                question_number,
                score,
                remaining,
                selected,
                options,
                ..
            } => {
                assert_eq!(question_number, 1);
                assert_eq!(score, 0);
                assert_eq!(remaining, 10);
                assert_eq!(selected, None);
                assert_eq!(options, options_before, "option order must persist");
            }
            view => panic!("expected active session, got {:?}", view),
        }
    }

    #[test]
    fn restart_works_mid_question() {
        let mut session = single_question_session();

        session.tick();
        session.select("Artist A");
        session.restart();

        match session.view() {
            SessionView::Active {
                remaining, selected, ..
            } => {
                assert_eq!(remaining, 10);
                assert_eq!(selected, None);
            }
            view => panic!("expected active session, got {:?}", view),
        }
    }

    #[test]
    fn empty_question_list_is_immediate_game_over() {
        let mut session = QuizSession::new(Vec::new(), 10);

        assert_eq!(session.view(), SessionView::GameOver { score: 0, total: 0 });

        session.restart();
        assert_eq!(session.view(), SessionView::GameOver { score: 0, total: 0 });
    }

    #[test]
    fn loading_session_ignores_operations_until_begun() {
        let mut session = QuizSession::loading(10);

        session.select("Artist A");
        session.tick();
        session.submit();
        session.restart();
        assert_eq!(session.view(), SessionView::Loading);
        assert!(session.current_question().is_none());

        session.begin(vec![question("Artist A", &["Artist A", "Artist B"])]);
        match session.view() {
            SessionView::Active { remaining, .. } => assert_eq!(remaining, 10),
            view => panic!("expected active session, got {:?}", view),
        }
        assert!(session.current_question().is_some());
    }

    #[test]
    fn full_round_matches_wrapped_scenario() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let history = wrapped_history(&["Artist A", "Artist B", "Artist C", "Artist D"]);
        let questions = generate_questions(&history, 4, &mut rng);
        let mut session = QuizSession::new(questions, 10);

        let options_before = match session.view() {
            SessionView::Active { options, .. } => options,
            view => panic!("expected active session, got {:?}", view),
        };
        assert_eq!(options_before.len(), 4);

        session.select("Artist A");
        session.submit();
        assert!(session.is_over());
        assert_eq!(session.score(), 1);

        session.restart();
        match session.view() {
            SessionView::Active { options, score, .. } => {
                assert_eq!(score, 0);
                assert_eq!(options, options_before);
            }
            view => panic!("expected active session, got {:?}", view),
        }
    }
}
