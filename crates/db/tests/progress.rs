//! Lesson progress repository tests: upsert semantics and the sticky
//! completed flag.

use sqlx::PgPool;

use smarttutor_db::models::course::CreateCourse;
use smarttutor_db::models::lesson::{CreateLesson, Lesson};
use smarttutor_db::repositories::{CourseRepo, LessonRepo, ProgressRepo};

const ALICE: i64 = 201;
const BOB: i64 = 202;

async fn seed_lesson(pool: &PgPool) -> Lesson {
    let course = CourseRepo::create(
        pool,
        ALICE,
        &CreateCourse {
            title: "Ownership".to_string(),
            description: String::new(),
            difficulty: None,
        },
    )
    .await
    .unwrap();

    LessonRepo::create(
        pool,
        course.id,
        &CreateLesson {
            title: "Borrowing".to_string(),
            content: "References never outlive their referent.".to_string(),
            position: 0,
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn recording_a_score_creates_one_row(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;

    let progress = ProgressRepo::record_score(&pool, ALICE, lesson.id, 50.0, false)
        .await
        .unwrap();
    assert_eq!(progress.score, 50.0);
    assert!(!progress.completed);

    assert_eq!(ProgressRepo::count(&pool, ALICE, lesson.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn repeated_scores_upsert_into_a_single_row(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;

    ProgressRepo::record_score(&pool, ALICE, lesson.id, 40.0, false)
        .await
        .unwrap();
    let updated = ProgressRepo::record_score(&pool, ALICE, lesson.id, 90.0, true)
        .await
        .unwrap();

    assert_eq!(updated.score, 90.0);
    assert!(updated.completed);
    assert_eq!(ProgressRepo::count(&pool, ALICE, lesson.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn completed_flag_survives_a_later_failing_score(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;

    ProgressRepo::record_score(&pool, ALICE, lesson.id, 80.0, true)
        .await
        .unwrap();
    let after_fail = ProgressRepo::record_score(&pool, ALICE, lesson.id, 30.0, false)
        .await
        .unwrap();

    assert_eq!(after_fail.score, 30.0, "score always reflects the latest attempt");
    assert!(after_fail.completed, "completion is never revoked by a lower score");
}

#[sqlx::test(migrations = "./migrations")]
async fn manual_completion_does_not_touch_the_score(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;

    ProgressRepo::record_score(&pool, ALICE, lesson.id, 55.0, false)
        .await
        .unwrap();
    let marked = ProgressRepo::mark_complete(&pool, ALICE, lesson.id)
        .await
        .unwrap();

    assert!(marked.completed);
    assert_eq!(marked.score, 55.0);
    assert_eq!(ProgressRepo::count(&pool, ALICE, lesson.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn progress_rows_are_per_user(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;

    ProgressRepo::record_score(&pool, ALICE, lesson.id, 100.0, true)
        .await
        .unwrap();

    assert!(ProgressRepo::find(&pool, BOB, lesson.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn course_progress_includes_untouched_lessons(pool: PgPool) {
    let lesson = seed_lesson(&pool).await;
    let second = LessonRepo::create(
        &pool,
        lesson.course_id,
        &CreateLesson {
            title: "Lifetimes".to_string(),
            content: String::new(),
            position: 1,
        },
    )
    .await
    .unwrap();

    ProgressRepo::record_score(&pool, ALICE, lesson.id, 75.0, true)
        .await
        .unwrap();

    let rows = ProgressRepo::list_for_course(&pool, ALICE, lesson.course_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].lesson_id, lesson.id);
    assert!(rows[0].completed);
    assert_eq!(rows[0].score, 75.0);

    // The second lesson has no progress row but still appears.
    assert_eq!(rows[1].lesson_id, second.id);
    assert!(!rows[1].completed);
    assert_eq!(rows[1].score, 0.0);
}
