// src/policy.rs
// Client-side void authorization. This is a UX hint deciding whether the
// void control is shown at all; the server re-checks the same rule when
// the void request is actually submitted and stays authoritative.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Role, Transaction, TransactionStatus};

/// How long after creation a role may still void a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoidWindow {
    /// No time limit.
    Always,
    Within(Duration),
    Never,
}

/// Single source for the role -> window table so the policy cannot drift
/// from whatever the UI wants to display about it.
pub fn void_window(role: Role) -> VoidWindow {
    match role {
        Role::Owner => VoidWindow::Always,
        Role::Manager => VoidWindow::Within(Duration::hours(24)),
        Role::Cashier => VoidWindow::Within(Duration::minutes(5)),
        Role::Unknown => VoidWindow::Never,
    }
}

/// Whether `role` may request a void of `transaction` as of `now`.
///
/// Already-voided transactions are terminal for every role. Everything
/// else is a pure age check against the role's window.
pub fn can_void_at(transaction: &Transaction, role: Role, now: DateTime<Utc>) -> bool {
    if transaction.status == TransactionStatus::Voided {
        return false;
    }

    match void_window(role) {
        VoidWindow::Always => true,
        VoidWindow::Never => false,
        VoidWindow::Within(window) => now - transaction.created_at <= window,
    }
}

/// [`can_void_at`] against the wall clock, read at call time. The same
/// transaction can flip from voidable to non-voidable between two calls
/// purely because the clock advanced.
pub fn can_void(transaction: &Transaction, role: Role) -> bool {
    can_void_at(transaction, role, Utc::now())
}
