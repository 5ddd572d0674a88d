use std::sync::Arc;

use waystones_core::error::{Result, WaystonesError};
use waystones_core::{
    BlockPos, CooldownKind, Hand, PlayerId, WarpMode, Waystone, WaystoneEditPermission,
};

use crate::context::{ExecutionContext, Side};
use crate::obs::WaystoneMetrics;
use crate::store::{PlayerWaystoneStore, WaystoneStores};
use crate::world::{
    Actor, Clock, EventSink, Notice, WaystoneActivatedEvent, WaystoneDirectory,
};

use super::edit_rules::{self, EditFacts};
use super::flags::PolicyFlags;
use super::outcome::{TeleportDenial, TeleportOutcome};

/// Collaborators shared by every engine a runtime hands out.
#[derive(Clone)]
pub struct PolicyServices {
    pub directory: Arc<dyn WaystoneDirectory>,
    pub stores: WaystoneStores,
    pub events: Arc<dyn EventSink>,
    pub clock: Arc<dyn Clock>,
    pub metrics: Arc<WaystoneMetrics>,
}

/// Side-bound policy engine.
/// Construct per side (cheap: all fields are shared handles).
#[derive(Clone)]
pub struct TeleportPolicy {
    ctx: ExecutionContext,
    flags: Arc<PolicyFlags>,
    directory: Arc<dyn WaystoneDirectory>,
    store: Arc<dyn PlayerWaystoneStore>,
    events: Arc<dyn EventSink>,
    clock: Arc<dyn Clock>,
    metrics: Arc<WaystoneMetrics>,
}

impl TeleportPolicy {
    pub fn new(ctx: ExecutionContext, flags: Arc<PolicyFlags>, services: &PolicyServices) -> Self {
        Self {
            ctx,
            flags,
            directory: Arc::clone(&services.directory),
            store: services.stores.for_side(ctx.side()),
            events: Arc::clone(&services.events),
            clock: Arc::clone(&services.clock),
            metrics: Arc::clone(&services.metrics),
        }
    }

    pub fn side(&self) -> Side {
        self.ctx.side()
    }
    pub fn flags(&self) -> &PolicyFlags {
        &self.flags
    }

    // ---- place / break / edit -------------------------------------------

    /// Whether `actor` may break the waystone at `pos`.
    ///
    /// Errors with `InvalidState` when no waystone exists at `pos`: callers
    /// only ask this for waystone blocks.
    pub fn may_break_waystone<A: Actor + ?Sized>(&self, actor: &A, pos: BlockPos) -> Result<bool> {
        let elevated = actor.has_elevated_privilege();
        if self.flags.creative_mode_only && !elevated {
            return Ok(false);
        }

        let waystone = self.directory.waystone_at(pos).ok_or_else(|| {
            WaystonesError::InvalidState(format!("no waystone at {pos}"))
        })?;

        if elevated {
            return Ok(true);
        }
        if waystone.was_generated() && self.flags.disallow_breaking_generated {
            return Ok(false);
        }
        Ok(!waystone.is_global() || self.flags.allow_everyone_global)
    }

    /// `None` covers placement by non-player sources (e.g. dispensers).
    pub fn may_place_waystone<A: Actor + ?Sized>(&self, actor: Option<&A>) -> bool {
        !self.flags.creative_mode_only
            || actor.map(|a| a.has_elevated_privilege()).unwrap_or(false)
    }

    pub fn may_edit_waystone<A: Actor + ?Sized>(
        &self,
        actor: &A,
        waystone: &Waystone,
    ) -> WaystoneEditPermission {
        let facts = EditFacts {
            elevated: actor.has_elevated_privilege(),
            is_owner: waystone.is_owner(actor.id()),
            global: waystone.is_global(),
        };
        edit_rules::evaluate(&self.flags, &facts)
    }

    /// Extension point for per-destination teleport restrictions. Always true today.
    pub fn may_teleport_to_waystone<A: Actor + ?Sized>(&self, _actor: &A, _waystone: &Waystone) -> bool {
        true
    }

    // ---- discovery --------------------------------------------------------

    /// Add `waystone` to the actor's discovered set.
    ///
    /// On the authoritative side a first activation also notifies the player
    /// and publishes `WaystoneActivatedEvent`. The speculative side only
    /// records it locally.
    pub fn activate_waystone<A: Actor + ?Sized>(&self, actor: &A, waystone: &Arc<Waystone>) {
        if !waystone.is_valid() {
            tracing::debug!(player = %actor.id(), waystone = %waystone.id(), "skip activation of removed waystone");
            return;
        }

        if !self.store.activate(actor.id(), waystone.id()) {
            return;
        }
        self.metrics
            .activations
            .inc(&[("side", self.side().as_str())]);

        if self.side().is_speculative() {
            return;
        }

        tracing::info!(player = %actor.id(), waystone = %waystone.id(), name = %waystone.name(), "waystone activated");
        self.events.notify(
            actor.id(),
            Notice::WaystoneActivated {
                name: waystone.name().to_string(),
            },
        );
        self.events.publish(WaystoneActivatedEvent {
            player: actor.id().clone(),
            waystone: Arc::clone(waystone),
        });
    }

    pub fn deactivate_waystone<A: Actor + ?Sized>(&self, actor: &A, waystone: &Waystone) {
        self.store.deactivate(actor.id(), waystone.id());
    }

    pub fn is_waystone_activated<A: Actor + ?Sized>(&self, actor: &A, waystone: &Waystone) -> bool {
        self.store.is_activated(actor.id(), waystone.id())
    }

    /// Discovered waystones in store order. Ids the directory no longer knows are skipped.
    pub fn waystones<A: Actor + ?Sized>(&self, actor: &A) -> Vec<Arc<Waystone>> {
        self.store
            .waystones(actor.id())
            .into_iter()
            .filter_map(|id| self.directory.resolve(id))
            .collect()
    }

    /// Closest discovered waystone by squared distance to its block centre.
    /// Ties keep the earliest in store order.
    pub fn nearest_waystone<A: Actor + ?Sized>(&self, actor: &A) -> Option<Arc<Waystone>> {
        let here = actor.position();
        self.waystones(actor).into_iter().min_by(|a, b| {
            here.distance_sq(a.pos().center())
                .total_cmp(&here.distance_sq(b.pos().center()))
        })
    }

    // ---- cost & cooldowns -------------------------------------------------

    pub fn experience_level_cost<A: Actor + ?Sized>(
        &self,
        actor: &A,
        waystone: &Waystone,
        mode: WarpMode,
    ) -> i32 {
        let mut enabled = mode.has_xp_cost() && !actor.has_elevated_privilege();
        if waystone.is_global() && !self.flags.global_waystones_cost_xp {
            enabled = false;
        }
        if !enabled || self.flags.blocks_per_xp_level <= 0 {
            return 0;
        }

        // Truncation is the floor here: distance is never negative.
        let dist = actor.position().distance(waystone.pos().as_vec3()) as i32;
        (dist / self.flags.blocks_per_xp_level).clamp(0, self.flags.maximum_xp_cost.max(0))
    }

    pub fn should_trigger_cooldown(&self, waystone: &Waystone) -> bool {
        !waystone.is_global() || !self.flags.global_no_cooldown
    }

    fn cooldown_millis(&self, kind: CooldownKind) -> i64 {
        match kind {
            CooldownKind::InventoryButton => self.flags.teleport_button_cooldown_millis,
            CooldownKind::WarpStone => self.flags.warp_stone_cooldown_millis,
        }
    }

    fn cooldown_elapsed(&self, player: &PlayerId, kind: CooldownKind) -> bool {
        let elapsed = self.clock.now_millis().saturating_sub(self.store.last_warp(player, kind));
        elapsed > self.cooldown_millis(kind)
    }

    pub fn can_use_inventory_button<A: Actor + ?Sized>(&self, actor: &A) -> bool {
        self.cooldown_elapsed(actor.id(), CooldownKind::InventoryButton)
    }

    pub fn can_use_warp_stone<A: Actor + ?Sized>(&self, actor: &A) -> bool {
        self.cooldown_elapsed(actor.id(), CooldownKind::WarpStone)
    }

    /// Milliseconds left on a cooldown, for display. 0 once the window has passed.
    pub fn cooldown_remaining_millis<A: Actor + ?Sized>(&self, actor: &A, kind: CooldownKind) -> i64 {
        let elapsed = self
            .clock
            .now_millis()
            .saturating_sub(self.store.last_warp(actor.id(), kind));
        self.cooldown_millis(kind).saturating_sub(elapsed).max(0)
    }

    pub fn last_warp<A: Actor + ?Sized>(&self, actor: &A, kind: CooldownKind) -> i64 {
        self.store.last_warp(actor.id(), kind)
    }

    pub fn set_last_warp<A: Actor + ?Sized>(&self, actor: &A, kind: CooldownKind, millis: i64) {
        self.store.set_last_warp(actor.id(), kind, millis);
    }

    // ---- teleport ---------------------------------------------------------

    /// Boolean view of [`attempt_teleport`](Self::attempt_teleport).
    /// Always false on the speculative side.
    pub fn try_teleport_to_waystone<A: Actor + ?Sized>(
        &self,
        actor: &mut A,
        target: &Waystone,
        mode: WarpMode,
        origin: Option<&Waystone>,
    ) -> bool {
        self.attempt_teleport(actor, target, mode, origin).is_teleported()
    }

    /// Check every gate, then commit item use, level cost, and the move.
    ///
    /// Nothing is mutated unless all checks pass. The cooldown stamp is
    /// claimed under the player's store lock during the checks and handed
    /// back if a later check fails; at most one request per window passes.
    ///
    /// Always denied with `SpeculativeSide` on the speculative side: that
    /// side's state is a local mirror and cannot authorize a move, so its
    /// cooldown stamps are only ever written through `set_last_warp`.
    pub fn attempt_teleport<A: Actor + ?Sized>(
        &self,
        actor: &mut A,
        target: &Waystone,
        mode: WarpMode,
        origin: Option<&Waystone>,
    ) -> TeleportOutcome {
        let outcome = match self.check_teleport(&*actor, target, mode, origin) {
            Ok(plan) => {
                self.commit_teleport(actor, target, mode, plan);
                TeleportOutcome::Teleported { cost: plan.cost }
            }
            Err(denial) => {
                tracing::debug!(
                    player = %actor.id(),
                    waystone = %target.id(),
                    mode = %mode,
                    reason = denial.as_str(),
                    "teleport denied: {denial}"
                );
                TeleportOutcome::Denied(denial)
            }
        };

        self.metrics
            .teleports
            .inc(&[("mode", mode.as_str()), ("result", outcome.label())]);
        outcome
    }

    fn check_teleport<A: Actor + ?Sized>(
        &self,
        actor: &A,
        target: &Waystone,
        mode: WarpMode,
        origin: Option<&Waystone>,
    ) -> std::result::Result<TeleportPlan, TeleportDenial> {
        if self.side().is_speculative() {
            return Err(TeleportDenial::SpeculativeSide);
        }
        if !target.is_valid() {
            return Err(TeleportDenial::InvalidTarget);
        }

        let item_hand = self.find_warp_item(actor, mode)?;
        self.check_origin(mode, origin)?;
        let claim = self.claim_cooldown(actor.id(), target, mode)?;

        let cost = self.experience_level_cost(actor, target, mode);
        let available = actor.experience_level();
        if available < cost {
            if let Some(claim) = claim {
                self.store
                    .release_cooldown(actor.id(), claim.kind, claim.claimed_at, claim.previous);
            }
            return Err(TeleportDenial::InsufficientLevels {
                required: cost,
                available,
            });
        }

        Ok(TeleportPlan { item_hand, cost })
    }

    /// Hand holding the item `mode` needs; `Ok(None)` if it needs none.
    fn find_warp_item<A: Actor + ?Sized>(
        &self,
        actor: &A,
        mode: WarpMode,
    ) -> std::result::Result<Option<Hand>, TeleportDenial> {
        let Some(item) = mode.required_item() else {
            return Ok(None);
        };
        Hand::SEARCH_ORDER
            .into_iter()
            .find(|hand| actor.held_item(*hand) == Some(item))
            .map(Some)
            .ok_or(TeleportDenial::MissingItem)
    }

    fn check_origin(
        &self,
        mode: WarpMode,
        origin: Option<&Waystone>,
    ) -> std::result::Result<(), TeleportDenial> {
        if mode.rules().requires_origin && !origin.map(Waystone::is_valid).unwrap_or(false) {
            return Err(TeleportDenial::InvalidOrigin);
        }
        Ok(())
    }

    /// Enforce the mode's cooldown. When the target triggers cooldowns the
    /// stamp is taken here, under the player's store lock.
    fn claim_cooldown(
        &self,
        player: &PlayerId,
        target: &Waystone,
        mode: WarpMode,
    ) -> std::result::Result<Option<CooldownClaim>, TeleportDenial> {
        let Some(kind) = mode.cooldown() else {
            return Ok(None);
        };

        if !self.should_trigger_cooldown(target) {
            return if self.cooldown_elapsed(player, kind) {
                Ok(None)
            } else {
                Err(TeleportDenial::CooldownActive { kind })
            };
        }

        let now = self.clock.now_millis();
        self.store
            .try_claim_cooldown(player, kind, now, self.cooldown_millis(kind))
            .map(|previous| {
                Some(CooldownClaim {
                    kind,
                    claimed_at: now,
                    previous,
                })
            })
            .ok_or(TeleportDenial::CooldownActive { kind })
    }

    fn commit_teleport<A: Actor + ?Sized>(
        &self,
        actor: &mut A,
        target: &Waystone,
        mode: WarpMode,
        plan: TeleportPlan,
    ) {
        if let (true, Some(hand)) = (mode.rules().consumes_item, plan.item_hand) {
            actor.consume_one(hand);
        }

        if plan.cost > 0 {
            actor.add_experience_levels(-plan.cost);
        }

        let pos = target.pos();
        actor.set_position(pos.center());
        self.events.trigger_visual_effect(pos);

        tracing::info!(
            player = %actor.id(),
            waystone = %target.id(),
            mode = %mode,
            cost = plan.cost,
            "teleported"
        );
    }
}

/// Cooldown stamp taken during checks; `previous` restores it on a late denial.
#[derive(Debug, Clone, Copy)]
struct CooldownClaim {
    kind: CooldownKind,
    claimed_at: i64,
    previous: i64,
}

/// Result of the check phase, carried into commit.
#[derive(Debug, Clone, Copy)]
struct TeleportPlan {
    item_hand: Option<Hand>,
    cost: i32,
}
