//! Sequence position manager: repository for the `sequence_poses` table.
//!
//! Owns the dense-position invariant — for a sequence with N entries the
//! positions are exactly `1..=N` at every commit point. Each operation is a
//! single transaction that first locks the parent sequence row
//! (`SELECT ... FOR UPDATE`), which both proves ownership and serializes
//! concurrent reorders of the same sequence while leaving other sequences
//! untouched. Shifts are set-based updates; the deferrable unique constraint
//! on `(sequence_id, "position")` tolerates transient duplicates until commit.
//!
//! All domain validation (ownership, version resolution, position range)
//! happens before the first write, so a failed operation leaves no trace.
//! The position arithmetic itself lives in `yogaflow_core::sequencing`.

use sqlx::{PgPool, Postgres, Transaction};
use yogaflow_core::error::CoreError;
use yogaflow_core::sequencing::{self, MovePlan};
use yogaflow_core::types::{DbId, UserId};

use crate::error::RepoError;
use crate::models::sequence_pose::{CreateSequencePose, SequencePoseDetail};

/// Column list for entry-with-version-metadata queries (aliased `sp`/`pv`).
const DETAIL_COLUMNS: &str = "sp.id, sp.sequence_id, sp.pose_id, sp.pose_version_id, \
    sp.\"position\", sp.added_at, \
    pv.version AS pose_version, pv.name AS pose_name, \
    pv.sanskrit_name AS pose_sanskrit_name, pv.difficulty AS pose_difficulty, \
    pv.category AS pose_category, pv.image_url AS pose_image_url";

/// Manages the ordered entry list of a sequence.
pub struct SequencePoseRepo;

impl SequencePoseRepo {
    /// Insert a pose into a sequence.
    ///
    /// Resolves the version to pin (explicit `pose_version`, or the pose's
    /// current one), validates the target position against `1..=count + 1`,
    /// shifts the tail up by one, and creates the entry — one transaction.
    pub async fn insert(
        pool: &PgPool,
        sequence_id: DbId,
        user_id: UserId,
        input: &CreateSequencePose,
    ) -> Result<SequencePoseDetail, RepoError> {
        let mut tx = pool.begin().await?;
        lock_sequence(&mut tx, sequence_id, user_id).await?;

        let pose_version_id =
            resolve_version(&mut tx, input.pose_id, input.pose_version).await?;

        let count = entry_count(&mut tx, sequence_id).await?;
        let position = sequencing::resolve_insert_position(input.position, count)?;

        if let Some((start, end)) = sequencing::insert_shift_range(position, count) {
            sqlx::query(
                "UPDATE sequence_poses SET \"position\" = \"position\" + 1
                 WHERE sequence_id = $1 AND \"position\" BETWEEN $2 AND $3",
            )
            .bind(sequence_id)
            .bind(start)
            .bind(end)
            .execute(&mut *tx)
            .await?;
        }

        let entry_id: (DbId,) = sqlx::query_as(
            "INSERT INTO sequence_poses (sequence_id, pose_id, pose_version_id, \"position\")
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(sequence_id)
        .bind(input.pose_id)
        .bind(pose_version_id)
        .bind(position)
        .fetch_one(&mut *tx)
        .await?;

        let detail = fetch_detail(&mut tx, entry_id.0).await?;
        tx.commit().await?;
        Ok(detail)
    }

    /// Move an entry to a new position within its sequence.
    ///
    /// Valid targets are `1..=count` — one slot narrower than insert, since
    /// the entry already occupies one. Equal old and new positions are a
    /// successful no-op.
    pub async fn move_entry(
        pool: &PgPool,
        sequence_id: DbId,
        user_id: UserId,
        entry_id: DbId,
        new_position: i32,
    ) -> Result<SequencePoseDetail, RepoError> {
        let mut tx = pool.begin().await?;
        lock_sequence(&mut tx, sequence_id, user_id).await?;

        let old_position = find_entry_position(&mut tx, sequence_id, entry_id).await?;
        let count = entry_count(&mut tx, sequence_id).await?;

        match sequencing::plan_move(old_position, new_position, count)? {
            MovePlan::NoOp => {}
            MovePlan::Later { shift_start, shift_end } => {
                sqlx::query(
                    "UPDATE sequence_poses SET \"position\" = \"position\" - 1
                     WHERE sequence_id = $1 AND \"position\" BETWEEN $2 AND $3",
                )
                .bind(sequence_id)
                .bind(shift_start)
                .bind(shift_end)
                .execute(&mut *tx)
                .await?;
                set_position(&mut tx, entry_id, new_position).await?;
            }
            MovePlan::Earlier { shift_start, shift_end } => {
                sqlx::query(
                    "UPDATE sequence_poses SET \"position\" = \"position\" + 1
                     WHERE sequence_id = $1 AND \"position\" BETWEEN $2 AND $3",
                )
                .bind(sequence_id)
                .bind(shift_start)
                .bind(shift_end)
                .execute(&mut *tx)
                .await?;
                set_position(&mut tx, entry_id, new_position).await?;
            }
        }

        let detail = fetch_detail(&mut tx, entry_id).await?;
        tx.commit().await?;
        Ok(detail)
    }

    /// Remove an entry and collapse the gap so positions stay dense.
    pub async fn remove(
        pool: &PgPool,
        sequence_id: DbId,
        user_id: UserId,
        entry_id: DbId,
    ) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;
        lock_sequence(&mut tx, sequence_id, user_id).await?;

        let deleted: Option<(i32,)> = sqlx::query_as(
            "DELETE FROM sequence_poses
             WHERE id = $1 AND sequence_id = $2
             RETURNING \"position\"",
        )
        .bind(entry_id)
        .bind(sequence_id)
        .fetch_optional(&mut *tx)
        .await?;

        let deleted_position = deleted
            .ok_or(CoreError::SequencePoseNotFound { id: entry_id })?
            .0;

        sqlx::query(
            "UPDATE sequence_poses SET \"position\" = \"position\" - 1
             WHERE sequence_id = $1 AND \"position\" > $2",
        )
        .bind(sequence_id)
        .bind(deleted_position)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// List a sequence's entries in position order, with the display
    /// metadata of each entry's pinned version.
    pub async fn list_detail(
        pool: &PgPool,
        sequence_id: DbId,
        user_id: UserId,
    ) -> Result<Vec<SequencePoseDetail>, RepoError> {
        let owned: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM sequences WHERE id = $1 AND user_id = $2")
                .bind(sequence_id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        if owned.is_none() {
            return Err(CoreError::SequenceNotFound { id: sequence_id }.into());
        }

        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM sequence_poses sp
             JOIN pose_versions pv ON pv.id = sp.pose_version_id
             WHERE sp.sequence_id = $1
             ORDER BY sp.\"position\" ASC"
        );
        let entries = sqlx::query_as::<_, SequencePoseDetail>(&query)
            .bind(sequence_id)
            .fetch_all(pool)
            .await?;
        Ok(entries)
    }
}

/// Lock the sequence row, proving ownership and serializing reorders.
///
/// A sequence that exists but belongs to another user fails exactly like a
/// missing one (anti-enumeration).
async fn lock_sequence(
    tx: &mut Transaction<'_, Postgres>,
    sequence_id: DbId,
    user_id: UserId,
) -> Result<(), RepoError> {
    let row: Option<(DbId,)> =
        sqlx::query_as("SELECT id FROM sequences WHERE id = $1 AND user_id = $2 FOR UPDATE")
            .bind(sequence_id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await?;

    match row {
        Some(_) => Ok(()),
        None => Err(CoreError::SequenceNotFound { id: sequence_id }.into()),
    }
}

/// Resolve the pose version an insert should pin.
///
/// An explicit version number must exist for that pose; otherwise the pose's
/// current version is used. A pose without a current version does not exist
/// from the caller's point of view.
async fn resolve_version(
    tx: &mut Transaction<'_, Postgres>,
    pose_id: DbId,
    version: Option<i32>,
) -> Result<DbId, RepoError> {
    match version {
        Some(v) => {
            let row: Option<(DbId,)> =
                sqlx::query_as("SELECT id FROM pose_versions WHERE pose_id = $1 AND version = $2")
                    .bind(pose_id)
                    .bind(v)
                    .fetch_optional(&mut **tx)
                    .await?;
            row.map(|r| r.0)
                .ok_or_else(|| CoreError::PoseVersionNotFound { pose_id, version: v }.into())
        }
        None => {
            let row: Option<(Option<DbId>,)> =
                sqlx::query_as("SELECT current_version_id FROM poses WHERE id = $1")
                    .bind(pose_id)
                    .fetch_optional(&mut **tx)
                    .await?;
            row.and_then(|r| r.0)
                .ok_or_else(|| CoreError::PoseNotFound { id: pose_id }.into())
        }
    }
}

/// Count the entries of a sequence.
async fn entry_count(
    tx: &mut Transaction<'_, Postgres>,
    sequence_id: DbId,
) -> Result<i32, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sequence_poses WHERE sequence_id = $1")
        .bind(sequence_id)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row.0 as i32)
}

/// Find an entry's current position, failing if it isn't part of the sequence.
async fn find_entry_position(
    tx: &mut Transaction<'_, Postgres>,
    sequence_id: DbId,
    entry_id: DbId,
) -> Result<i32, RepoError> {
    let row: Option<(i32,)> = sqlx::query_as(
        "SELECT \"position\" FROM sequence_poses WHERE id = $1 AND sequence_id = $2",
    )
    .bind(entry_id)
    .bind(sequence_id)
    .fetch_optional(&mut **tx)
    .await?;

    row.map(|r| r.0)
        .ok_or_else(|| CoreError::SequencePoseNotFound { id: entry_id }.into())
}

/// Write the moved entry's final position.
async fn set_position(
    tx: &mut Transaction<'_, Postgres>,
    entry_id: DbId,
    position: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE sequence_poses SET \"position\" = $2 WHERE id = $1")
        .bind(entry_id)
        .bind(position)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Fetch an entry joined with its pinned version's display metadata.
async fn fetch_detail(
    tx: &mut Transaction<'_, Postgres>,
    entry_id: DbId,
) -> Result<SequencePoseDetail, sqlx::Error> {
    let query = format!(
        "SELECT {DETAIL_COLUMNS}
         FROM sequence_poses sp
         JOIN pose_versions pv ON pv.id = sp.pose_version_id
         WHERE sp.id = $1"
    );
    sqlx::query_as::<_, SequencePoseDetail>(&query)
        .bind(entry_id)
        .fetch_one(&mut **tx)
        .await
}
