use serenity::all::{Permissions, RoleId};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum Permission {
    #[strum(serialize = "giveaway.create")]
    GiveawayCreate,
    #[strum(serialize = "giveaway.entries")]
    GiveawayEntries,
}

impl Permission {
    /// Guild owners, server managers and configured admin roles get everything; everyone else nothing.
    pub fn resolve(
        is_owner: bool,
        member_permissions: Option<Permissions>,
        member_roles: &[RoleId],
        admin_roles: &[RoleId],
    ) -> Vec<Permission> {
        let is_manager = member_permissions
            .is_some_and(|permissions| permissions.administrator() || permissions.manage_guild());
        let has_admin_role = member_roles.iter().any(|role| admin_roles.contains(role));

        if is_owner || is_manager || has_admin_role {
            Permission::iter().collect()
        } else {
            vec![]
        }
    }
}
