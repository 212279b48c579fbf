//! Integration tests for pose version pinning.
//!
//! - Entries pin the version that was current at insert time
//! - Explicit version numbers resolve (or fail distinctly)
//! - Publishing content bumps version numbers monotonically
//! - A pose cannot be deleted while an entry references one of its versions

use assert_matches::assert_matches;
use sqlx::PgPool;
use uuid::Uuid;
use yogaflow_core::error::CoreError;
use yogaflow_db::error::RepoError;
use yogaflow_db::models::pose::PoseContent;
use yogaflow_db::models::sequence::CreateSequence;
use yogaflow_db::models::sequence_pose::CreateSequencePose;
use yogaflow_db::repositories::{PoseRepo, PoseVersionRepo, SequencePoseRepo, SequenceRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn content(name: &str, description: &str) -> PoseContent {
    PoseContent {
        name: name.to_string(),
        sanskrit_name: None,
        description: description.to_string(),
        difficulty: "beginner".to_string(),
        category: "standing".to_string(),
        image_url: None,
    }
}

async fn setup_sequence(pool: &PgPool) -> (Uuid, i64) {
    let user_id = Uuid::new_v4();
    let sequence = SequenceRepo::create(
        pool,
        user_id,
        &CreateSequence {
            name: "Evening Flow".to_string(),
            visibility: None,
        },
    )
    .await
    .unwrap();
    (user_id, sequence.id)
}

// ---------------------------------------------------------------------------
// Test: version pinning round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_version_pinning_survives_content_edit(pool: PgPool) {
    let (user_id, seq_id) = setup_sequence(&pool).await;

    let pose = PoseRepo::create(&pool, &content("Warrior I", "Original cue"))
        .await
        .unwrap();
    let v1_id = pose.current_version_id.unwrap();

    let entry = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: pose.id,
            pose_version: None,
            position: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(entry.pose_version_id, v1_id);
    assert_eq!(entry.pose_version, 1);

    // Publish new canonical content; current version moves to v2.
    let updated = PoseRepo::update_content(&pool, pose.id, &content("Warrior I", "Revised cue"))
        .await
        .unwrap()
        .unwrap();
    assert_ne!(updated.current_version_id.unwrap(), v1_id);
    assert_eq!(updated.description, "Revised cue");

    // The already-inserted entry still references v1 and displays its content.
    let entries = SequencePoseRepo::list_detail(&pool, seq_id, user_id)
        .await
        .unwrap();
    assert_eq!(entries[0].pose_version_id, v1_id);
    assert_eq!(entries[0].pose_version, 1);

    // A fresh insert pins the new current version.
    let entry2 = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: pose.id,
            pose_version: None,
            position: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(entry2.pose_version_id, updated.current_version_id.unwrap());
    assert_eq!(entry2.pose_version, 2);
}

// ---------------------------------------------------------------------------
// Test: explicit version resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_with_explicit_version(pool: PgPool) {
    let (user_id, seq_id) = setup_sequence(&pool).await;

    let pose = PoseRepo::create(&pool, &content("Tree", "v1")).await.unwrap();
    PoseRepo::update_content(&pool, pose.id, &content("Tree", "v2"))
        .await
        .unwrap()
        .unwrap();

    // Pin the older version explicitly even though v2 is current.
    let entry = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: pose.id,
            pose_version: Some(1),
            position: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(entry.pose_version, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_version_fails_distinctly(pool: PgPool) {
    let (user_id, seq_id) = setup_sequence(&pool).await;
    let pose = PoseRepo::create(&pool, &content("Tree", "v1")).await.unwrap();

    let err = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: pose.id,
            pose_version: Some(7),
            position: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        err,
        RepoError::Core(CoreError::PoseVersionNotFound { version: 7, .. })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_pose_fails(pool: PgPool) {
    let (user_id, seq_id) = setup_sequence(&pool).await;

    let err = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: 999_999,
            pose_version: None,
            position: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::PoseNotFound { id: 999_999 }));
}

// ---------------------------------------------------------------------------
// Test: version numbers are monotonic per pose
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_version_numbers_are_monotonic(pool: PgPool) {
    let pose = PoseRepo::create(&pool, &content("Crow", "v1")).await.unwrap();
    PoseRepo::update_content(&pool, pose.id, &content("Crow", "v2"))
        .await
        .unwrap()
        .unwrap();
    PoseRepo::update_content(&pool, pose.id, &content("Crow", "v3"))
        .await
        .unwrap()
        .unwrap();

    let versions = PoseVersionRepo::list_by_pose(&pool, pose.id).await.unwrap();
    let numbers: Vec<i32> = versions.iter().map(|v| v.version).collect();
    assert_eq!(numbers, vec![3, 2, 1], "newest first, no gaps or repeats");

    // Snapshots are immutable: v1 still carries its original content.
    let v1 = PoseVersionRepo::find_by_pose_and_version(&pool, pose.id, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(v1.description, "v1");
}

// ---------------------------------------------------------------------------
// Test: referenced versions cannot be orphaned
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pose_delete_blocked_while_referenced(pool: PgPool) {
    let (user_id, seq_id) = setup_sequence(&pool).await;
    let pose = PoseRepo::create(&pool, &content("Pigeon", "v1")).await.unwrap();

    let entry = SequencePoseRepo::insert(
        &pool,
        seq_id,
        user_id,
        &CreateSequencePose {
            pose_id: pose.id,
            pose_version: None,
            position: None,
        },
    )
    .await
    .unwrap();

    // The entry's FK (RESTRICT) blocks deleting the pose.
    let err = PoseRepo::delete(&pool, pose.id).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    // Once the entry is gone the pose (and its versions, via cascade) can go.
    SequencePoseRepo::remove(&pool, seq_id, user_id, entry.id)
        .await
        .unwrap();
    assert!(PoseRepo::delete(&pool, pose.id).await.unwrap());
    assert!(PoseVersionRepo::list_by_pose(&pool, pose.id)
        .await
        .unwrap()
        .is_empty());
}
