use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::invite_repo;

/// Outcome of recording an invite against a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteOutcome {
    Recorded,
    AlreadyInvited,
    DeviceRegistered,
}

// An invite is only worth recording when the device is not already known:
// a registered device means the invitee is already a user. Repeat invites
// for the same (user, device) pair are collapsed.
pub async fn record_invite(
    pool: &SqlitePool,
    user_id: i64,
    device_id: &str,
) -> sqlx::Result<InviteOutcome> {
    let device_id = Uuid::parse_str(device_id.trim())
        .map_err(|_| sqlx::Error::Protocol("invalid device id".into()))?
        .to_string();

    if invite_repo::device_is_registered(pool, &device_id).await? {
        return Ok(InviteOutcome::DeviceRegistered);
    }

    let inserted = invite_repo::insert_invite(pool, user_id, &device_id).await?;
    Ok(if inserted {
        InviteOutcome::Recorded
    } else {
        InviteOutcome::AlreadyInvited
    })
}
