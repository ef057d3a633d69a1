/// Which portal a page belongs to. Stylesheets and scripts scope their
/// behaviour on the CSS class the layout puts around the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Agent,
}

impl Role {
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::Buyer => "role-buyer",
            Role::Agent => "role-agent",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer Portal",
            Role::Agent => "Agent Portal",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RoleLayout {
    role: Role,
}

impl RoleLayout {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Wrap already-rendered markup. Children are inserted verbatim.
    pub fn render(&self, children: &str) -> String {
        format!(r#"<div class="{}">{}</div>"#, self.role.css_class(), children)
    }
}
