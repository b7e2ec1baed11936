use kudos_types::models::User;

pub const DEFAULT_ADMIN_ID: &str = "u0";

const BUILTIN_USERS: &[(&str, &str, &str)] = &[
    ("u0", "Alex Morgan", "Product Manager"),
    ("u1", "Jordan Lee", "Software Engineer"),
    ("u2", "Priya Desai", "UX Designer"),
    ("u3", "Chris Johnson", "DevOps Engineer"),
    ("u4", "Samira Khan", "QA Analyst"),
    ("u5", "Miguel Alvarez", "Customer Success Manager"),
];

/// Read-only user lookup. The admin is whoever holds `admin_id`.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    admin_id: String,
}

impl UserDirectory {
    pub fn new(users: Vec<User>, admin_id: impl Into<String>) -> Self {
        Self {
            users,
            admin_id: admin_id.into(),
        }
    }

    /// The fixed staff list the board ships with.
    pub fn builtin() -> Self {
        let users = BUILTIN_USERS
            .iter()
            .map(|(id, name, title)| User {
                id: id.to_string(),
                name: name.to_string(),
                title: title.to_string(),
            })
            .collect();
        Self::new(users, DEFAULT_ADMIN_ID)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn is_admin(&self, id: &str) -> bool {
        id == self.admin_id
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Everyone except `id`, in directory order.
    pub fn colleagues_of(&self, id: &str) -> Vec<User> {
        self.users.iter().filter(|u| u.id != id).cloned().collect()
    }
}
