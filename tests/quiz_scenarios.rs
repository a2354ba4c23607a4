//! End-to-end quiz behaviour over an in-memory store

use verbquiz::models::{Question, QuestionBank, Score};
use verbquiz::quiz::{Phase, QuizController, SubmitOutcome};
use verbquiz::store::{MemoryStore, ProgressStore, INDEX_KEY, SCORE_KEY};

fn run_lari() -> QuizController<MemoryStore> {
    QuizController::new(
        QuestionBank::new(vec![Question::new("run", "lari")]),
        MemoryStore::new(),
    )
}

#[test]
fn test_matching_answer_completes_single_question_quiz() {
    let mut quiz = run_lari();

    assert_eq!(quiz.submit_answer("LARI "), SubmitOutcome::Correct);
    assert_eq!(quiz.score(), Score::new(1, 0));
    assert_eq!(quiz.index(), 1);
    assert_eq!(quiz.phase(), Phase::Complete);
}

#[test]
fn test_surrender_then_answer_does_not_count() {
    let mut quiz = run_lari();

    quiz.surrender();
    assert!(quiz.is_revealed());
    assert_eq!(quiz.score().surrendered, 1);

    quiz.submit_answer("lari");
    assert_eq!(quiz.index(), 1);
    assert_eq!(quiz.score().correct, 0);
}

#[test]
fn test_every_builtin_answer_accepted_with_varied_case() {
    let bank = QuestionBank::builtin();
    let answers: Vec<String> = bank.iter().map(|q| q.answer.clone()).collect();
    let mut quiz = QuizController::new(bank, MemoryStore::new());

    for (i, answer) in answers.iter().enumerate() {
        let varied = format!("  {}\t", answer.to_uppercase());
        assert_eq!(quiz.submit_answer(varied), SubmitOutcome::Correct);
        assert_eq!(quiz.index(), i + 1);
        assert_eq!(quiz.score().correct as usize, i + 1);
    }
    assert!(quiz.is_complete());
}

#[test]
fn test_go_back_from_first_question_stays_put() {
    let mut quiz = run_lari();
    quiz.go_back();
    quiz.go_back();
    assert_eq!(quiz.index(), 0);
}

#[test]
fn test_confirmed_reset_clears_state_and_store() {
    let bank = QuestionBank::new(vec![
        Question::new("run", "lari"),
        Question::new("eat", "makan"),
        Question::new("drink", "minum"),
    ]);
    let mut quiz = QuizController::new(bank, MemoryStore::new());
    quiz.submit_answer("lari");
    quiz.surrender();
    quiz.submit_answer("makan");
    assert_eq!(quiz.store().get(INDEX_KEY).unwrap().as_deref(), Some("2"));

    let mut asked = false;
    assert!(quiz.reset(|| {
        asked = true;
        true
    }));
    assert!(asked);

    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.score(), Score::default());
    assert_eq!(quiz.store().get(INDEX_KEY).unwrap(), None);
    assert_eq!(quiz.store().get(SCORE_KEY).unwrap(), None);
}
