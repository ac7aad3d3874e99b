//! Audit notifications for moderators.

use serenity::all::UserId;
use serenity::async_trait;

use crate::model::registration::PendingRegistration;

/// Who invited a newly verified member and how many of their invitees have verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InviteAttribution {
    pub inviter: UserId,
    pub verified_invites: u64,
}

/// Fire-and-forget audit trail.
///
/// Implementations report their own failures; callers never see them.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// A member confirmed a registration and is waiting for their auth code.
    async fn registered(&self, user: UserId, registration: &PendingRegistration);

    /// A member redeemed their auth code.
    async fn verified(&self, user: UserId, nickname: &str, invite: Option<InviteAttribution>);

    /// A previously verified member rejoined and had verification re-applied.
    async fn rejoined(&self, user: UserId, nickname: &str);
}
