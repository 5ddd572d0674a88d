//! Ordered edit-permission rules.
//!
//! Rules are evaluated top to bottom and the first one that denies decides the
//! outcome. The owner rule and the global rule are configured independently;
//! their relative order is part of the contract.

use waystones_core::WaystoneEditPermission;

use super::flags::PolicyFlags;

/// What the rules know about the actor and the waystone.
#[derive(Debug, Clone, Copy)]
pub struct EditFacts {
    pub elevated: bool,
    pub is_owner: bool,
    pub global: bool,
}

/// One (predicate, outcome) row.
pub struct EditRule {
    pub outcome: WaystoneEditPermission,
    pub denies: fn(&PolicyFlags, &EditFacts) -> bool,
}

fn not_creative(flags: &PolicyFlags, facts: &EditFacts) -> bool {
    flags.creative_mode_only && !facts.elevated
}

fn not_the_owner(flags: &PolicyFlags, facts: &EditFacts) -> bool {
    flags.restrict_rename_to_owner && !facts.is_owner
}

fn global_needs_creative(flags: &PolicyFlags, facts: &EditFacts) -> bool {
    facts.global && !facts.elevated && !flags.allow_everyone_global
}

pub const EDIT_RULES: [EditRule; 3] = [
    EditRule {
        outcome: WaystoneEditPermission::NotCreative,
        denies: not_creative,
    },
    EditRule {
        outcome: WaystoneEditPermission::NotTheOwner,
        denies: not_the_owner,
    },
    EditRule {
        outcome: WaystoneEditPermission::GetCreative,
        denies: global_needs_creative,
    },
];

/// First denying rule wins; `Allow` if none deny.
pub fn evaluate(flags: &PolicyFlags, facts: &EditFacts) -> WaystoneEditPermission {
    EDIT_RULES
        .iter()
        .find(|rule| (rule.denies)(flags, facts))
        .map(|rule| rule.outcome)
        .unwrap_or(WaystoneEditPermission::Allow)
}
