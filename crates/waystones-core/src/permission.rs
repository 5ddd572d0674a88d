/// Outcome of an edit-authorization query.
///
/// Variants are listed in precedence order: the first failing check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaystoneEditPermission {
    Allow,
    /// Server restricts waystones to creative/elevated actors.
    NotCreative,
    /// Renaming is restricted to the owner and the actor is not it.
    NotTheOwner,
    /// Global waystones can only be edited with elevated privilege.
    GetCreative,
}

impl WaystoneEditPermission {
    /// Translation-style key for the denial message shown to the player.
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            WaystoneEditPermission::Allow => None,
            WaystoneEditPermission::NotCreative => Some("waystones.edit.not_creative"),
            WaystoneEditPermission::NotTheOwner => Some("waystones.edit.not_the_owner"),
            WaystoneEditPermission::GetCreative => Some("waystones.edit.get_creative"),
        }
    }
}
