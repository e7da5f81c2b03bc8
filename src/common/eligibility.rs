use serenity::all::RoleId;

/// Role allow-list deciding who may enter a giveaway.
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    roles: Vec<RoleId>,
}

impl Eligibility {
    pub fn new(roles: Vec<RoleId>) -> Self {
        Eligibility { roles }
    }

    pub fn is_restricted(&self) -> bool {
        !self.roles.is_empty()
    }

    // Nothing configured means everyone may enter.
    pub fn is_eligible(&self, member_roles: &[RoleId]) -> bool {
        if !self.is_restricted() {
            return true;
        }

        member_roles.iter().any(|role| self.roles.contains(role))
    }
}
