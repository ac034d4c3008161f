use crate::types::{
    CleanEntry, HighestPayer, MemberLookup, ReconState, Reconciliation, Rejection,
    TransactionRecord,
};
use crate::utils::PushImmut;
use log::{debug, info};

/// Literal case-folded comparison, no whitespace or accent leniency.
fn names_match(registered: &str, claimed: &str) -> bool {
    registered.to_uppercase() == claimed.to_uppercase()
}

fn check_member<'m>(members: &'m MemberLookup, tx: &TransactionRecord) -> Result<&'m str, Rejection> {
    match members.get(&tx.id) {
        None => Err(Rejection::UnknownId),
        Some(registered) if !names_match(registered, &tx.name) => Err(Rejection::NameMismatch),
        Some(registered) => Ok(registered.as_str()),
    }
}

fn update_highest(highest: &HighestPayer, entry: &CleanEntry) -> HighestPayer {
    // strictly greater, so the earliest of equal maxima stays
    if entry.amount > highest.amount {
        HighestPayer {
            name: Some(entry.name.clone()),
            id: Some(entry.id.clone()),
            amount: entry.amount,
        }
    } else {
        highest.clone()
    }
}

fn accept(state: ReconState, entry: CleanEntry) -> ReconState {
    state
        .map_total(|t| t + entry.amount)
        .map_highest(|h| update_highest(h, &entry))
        .map_entries(|e| e.push(entry.clone()))
}

fn resolve_transaction(members: &MemberLookup, tx: TransactionRecord, state: ReconState) -> ReconState {
    match check_member(members, &tx) {
        Ok(registered) => accept(
            state,
            CleanEntry {
                id: tx.id,
                name: registered.to_string(),
                amount: tx.amount,
            },
        ),
        Err(rejection) => {
            debug!("rejecting payment for id {} ({:?}): {:?}", tx.id, tx.name, rejection);
            state.map_rejected(|r| r.record(rejection))
        }
    }
}

// Used for testing
fn reconcile_with_init(
    init_state: ReconState,
    members: &MemberLookup,
    transactions: Box<dyn Iterator<Item = TransactionRecord> + '_>,
) -> Reconciliation {
    let state = transactions.fold(init_state, |acc, tx| resolve_transaction(members, tx, acc));
    info!(
        "accepted {} payments, rejected {} unknown ids and {} name mismatches",
        state.entries.len(),
        state.rejected.unknown_id,
        state.rejected.name_mismatch
    );
    Reconciliation::from_state(state)
}

// public interface
pub fn reconcile(
    members: &MemberLookup,
    transactions: Box<dyn Iterator<Item = TransactionRecord> + '_>,
) -> Reconciliation {
    reconcile_with_init(ReconState::default(), members, transactions)
}
