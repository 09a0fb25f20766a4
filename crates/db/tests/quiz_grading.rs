//! Quiz repository tests: nested creation, the answer key, and attempt
//! recording driven through the grading functions.

use std::collections::HashMap;

use sqlx::PgPool;

use smarttutor_core::grading;
use smarttutor_db::models::quiz::{CreateAnswer, CreateQuestion, CreateQuiz, Quiz};
use smarttutor_db::repositories::{AttemptRepo, QuizRepo};

const ALICE: i64 = 401;
const BOB: i64 = 402;

fn question(text: &str, correct_index: usize) -> CreateQuestion {
    CreateQuestion {
        text: text.to_string(),
        answers: (0..4)
            .map(|i| CreateAnswer {
                text: format!("Option {i}"),
                is_correct: i == correct_index,
                explanation: String::new(),
            })
            .collect(),
    }
}

async fn seed_quiz(pool: &PgPool) -> Quiz {
    QuizRepo::create(
        pool,
        ALICE,
        &CreateQuiz {
            title: "Ownership basics".to_string(),
            topic: "ownership".to_string(),
            lesson_id: None,
            questions: vec![
                question("What does move do?", 0),
                question("What is a borrow?", 1),
                question("When does drop run?", 2),
            ],
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn create_persists_nested_questions_in_order(pool: PgPool) {
    let quiz = seed_quiz(&pool).await;

    let detail = QuizRepo::detail(&pool, quiz.id).await.unwrap().unwrap();
    assert_eq!(detail.questions.len(), 3);
    assert_eq!(detail.questions[0].question.text, "What does move do?");
    assert_eq!(detail.questions[2].question.text, "When does drop run?");
    assert!(detail
        .questions
        .iter()
        .all(|q| q.answers.len() == 4));
}

#[sqlx::test(migrations = "./migrations")]
async fn answer_key_matches_the_stored_flags(pool: PgPool) {
    let quiz = seed_quiz(&pool).await;

    let key = QuizRepo::answer_key(&pool, quiz.id).await.unwrap();
    assert_eq!(key.len(), 3);

    for (n, question) in key.iter().enumerate() {
        assert_eq!(question.answers.len(), 4);
        let correct: Vec<bool> = question.answers.iter().map(|a| a.is_correct).collect();
        assert_eq!(correct.iter().filter(|c| **c).count(), 1);
        assert!(correct[n], "question {n} marks option {n} correct");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn grading_a_submission_records_an_attempt(pool: PgPool) {
    let quiz = seed_quiz(&pool).await;
    let key = QuizRepo::answer_key(&pool, quiz.id).await.unwrap();

    // Answer the first two questions correctly, skip the third.
    let submitted: HashMap<i64, i64> = key
        .iter()
        .take(2)
        .map(|q| {
            let correct = q.answers.iter().find(|a| a.is_correct).unwrap();
            (q.id, correct.id)
        })
        .collect();

    let grade = grading::grade(&key, &submitted);
    assert_eq!(grade.summary.score, 2);
    assert_eq!(grade.summary.total, 3);

    let attempt = AttemptRepo::record(&pool, BOB, quiz.id, &grade).await.unwrap();
    assert_eq!(attempt.score, 2);
    assert_eq!(attempt.total, 3);

    let responses = AttemptRepo::responses(&pool, attempt.id).await.unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses.iter().filter(|r| r.correct).count(), 2);
    assert!(responses
        .iter()
        .any(|r| r.selected_answer_id.is_none() && !r.correct));
}

#[sqlx::test(migrations = "./migrations")]
async fn each_submission_appends_a_new_attempt(pool: PgPool) {
    let quiz = seed_quiz(&pool).await;
    let key = QuizRepo::answer_key(&pool, quiz.id).await.unwrap();

    let empty = grading::grade(&key, &HashMap::new());
    AttemptRepo::record(&pool, BOB, quiz.id, &empty).await.unwrap();
    AttemptRepo::record(&pool, BOB, quiz.id, &empty).await.unwrap();

    let attempts = AttemptRepo::list_for_quiz(&pool, BOB, quiz.id).await.unwrap();
    assert_eq!(attempts.len(), 2);

    // Attempts are private to the submitting user.
    let alices = AttemptRepo::list_for_quiz(&pool, ALICE, quiz.id).await.unwrap();
    assert!(alices.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn answerless_questions_still_count_in_the_key(pool: PgPool) {
    let quiz = QuizRepo::create(
        &pool,
        ALICE,
        &CreateQuiz {
            title: "Half-written quiz".to_string(),
            topic: String::new(),
            lesson_id: None,
            questions: vec![
                question("Complete question", 0),
                CreateQuestion {
                    text: "Question without options".to_string(),
                    answers: Vec::new(),
                },
            ],
        },
    )
    .await
    .unwrap();

    let key = QuizRepo::answer_key(&pool, quiz.id).await.unwrap();
    assert_eq!(key.len(), 2);
    assert!(key[1].answers.is_empty());

    let grade = grading::grade(&key, &HashMap::new());
    assert_eq!(grade.summary.total, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_owned_is_scoped_to_the_creator(pool: PgPool) {
    let quiz = seed_quiz(&pool).await;

    assert!(!QuizRepo::delete_owned(&pool, quiz.id, BOB).await.unwrap());
    assert!(QuizRepo::find_by_id(&pool, quiz.id).await.unwrap().is_some());

    assert!(QuizRepo::delete_owned(&pool, quiz.id, ALICE).await.unwrap());
    assert!(QuizRepo::find_by_id(&pool, quiz.id).await.unwrap().is_none());
}
