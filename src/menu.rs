//! Overflow menu item schema so rendering and activation read from one list.

use crate::messages::MessageCatalog;

pub const OFFICE_DEV_PROGRAM_URL: &str = "https://developer.microsoft.com/en-us/office/dev-program";

/// Zero-argument command run when a menu item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleThemeDialog,
    TogglePermissionsPanel,
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: String,
    pub href: Option<&'static str>,
    pub icon: &'static str,
    pub action: Option<MenuAction>,
}

impl MenuItem {
    fn from_catalog(
        messages: &MessageCatalog,
        key: &'static str,
        message_key: &str,
        icon: &'static str,
        action: Option<MenuAction>,
    ) -> Self {
        Self {
            key,
            label: messages.lookup(message_key).to_string(),
            href: None,
            icon,
            action,
        }
    }
}

/// Items every user sees: the external link and the theme switcher.
pub fn base_menu_items(messages: &MessageCatalog) -> Vec<MenuItem> {
    let mut dev_program = MenuItem::from_catalog(
        messages,
        "office-dev-program",
        "Office Dev Program",
        "CommandPrompt",
        None,
    );
    dev_program.href = Some(OFFICE_DEV_PROGRAM_URL);
    vec![
        dev_program,
        MenuItem::from_catalog(
            messages,
            "change-theme",
            "Change theme",
            "Color",
            Some(MenuAction::ToggleThemeDialog),
        ),
    ]
}

/// Items appended after the base set for signed-in users, in display order.
pub fn authenticated_menu_items(messages: &MessageCatalog) -> Vec<MenuItem> {
    vec![
        MenuItem::from_catalog(
            messages,
            "view-all-permissions",
            "view all permissions",
            "AzureKeyVault",
            Some(MenuAction::TogglePermissionsPanel),
        ),
        MenuItem::from_catalog(
            messages,
            "sign-out",
            "sign out",
            "SignOut",
            Some(MenuAction::SignOut),
        ),
    ]
}

/// Render-time menu: a copy of `base`, extended when `authenticated`.
pub fn compose_menu(
    base: &[MenuItem],
    authenticated: bool,
    messages: &MessageCatalog,
) -> Vec<MenuItem> {
    let mut items = base.to_vec();
    if authenticated && !base.is_empty() {
        items.extend(authenticated_menu_items(messages));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.key).collect()
    }

    #[test]
    fn base_menu_has_link_and_theme_items() {
        let items = base_menu_items(&MessageCatalog::english());
        assert_eq!(keys(&items), vec!["office-dev-program", "change-theme"]);
        assert_eq!(items[0].href, Some(OFFICE_DEV_PROGRAM_URL));
        assert_eq!(items[0].action, None);
        assert_eq!(items[1].action, Some(MenuAction::ToggleThemeDialog));
        assert_eq!(items[1].label, "Change theme");
    }

    #[test]
    fn compose_menu_appends_permissions_then_sign_out() {
        let messages = MessageCatalog::english();
        let base = base_menu_items(&messages);
        assert_eq!(compose_menu(&base, false, &messages).len(), 2);

        let items = compose_menu(&base, true, &messages);
        assert_eq!(
            keys(&items),
            vec![
                "office-dev-program",
                "change-theme",
                "view-all-permissions",
                "sign-out"
            ]
        );
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn compose_menu_is_empty_before_base_exists() {
        let messages = MessageCatalog::english();
        assert!(compose_menu(&[], true, &messages).is_empty());
    }

    #[test]
    fn missing_messages_leave_labels_empty() {
        let items = base_menu_items(&MessageCatalog::new());
        assert!(items.iter().all(|item| item.label.is_empty()));
    }
}
