use std::collections::BTreeSet;
use std::str::FromStr;

use semantic_ui::{DrawerState, SelectionValue};
use serde::{Deserialize, Serialize};

use crate::ShowcaseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Stateful widgets on the showcase page, one drawer each.
pub enum DrawerId {
    /// File menu dropdown.
    Menu,
    /// Inline sort-order select.
    Sort,
    /// Single flavor selection.
    Flavor,
    /// Multiple toppings selection.
    Toppings,
    /// Confirmation modal.
    Modal,
}

impl DrawerId {
    /// Every drawer, in page order.
    pub const ALL: [DrawerId; 5] = [
        Self::Menu,
        Self::Sort,
        Self::Flavor,
        Self::Toppings,
        Self::Modal,
    ];

    /// Command-line token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Sort => "sort",
            Self::Flavor => "flavor",
            Self::Toppings => "toppings",
            Self::Modal => "modal",
        }
    }
}

impl FromStr for DrawerId {
    type Err = ShowcaseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.token() == input.trim())
            .ok_or_else(|| ShowcaseError::usage(format!("unknown drawer `{input}`")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// File menu entries.
pub enum MenuAction {
    /// New document.
    New,
    /// Open document.
    Open,
    /// Save document.
    Save,
}

impl MenuAction {
    /// Every entry, in menu order.
    pub const ALL: [MenuAction; 3] = [Self::New, Self::Open, Self::Save];

    /// Menu text.
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open",
            Self::Save => "Save",
        }
    }

    /// Icon name shown next to the entry.
    pub fn icon(self) -> &'static str {
        match self {
            Self::New => "file",
            Self::Open => "folder open",
            Self::Save => "save",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Sort orders offered by the inline select.
pub enum SortOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Most popular first.
    Popular,
}

impl SortOrder {
    /// Every order, in menu order.
    pub const ALL: [SortOrder; 3] = [Self::Newest, Self::Oldest, Self::Popular];

    /// Menu text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "most popular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Flavor options.
pub enum Flavor {
    /// Vanilla.
    Vanilla,
    /// Chocolate.
    Chocolate,
    /// Strawberry.
    Strawberry,
}

impl Flavor {
    /// Every flavor, in menu order.
    pub const ALL: [Flavor; 3] = [Self::Vanilla, Self::Chocolate, Self::Strawberry];

    /// Menu text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vanilla => "Vanilla",
            Self::Chocolate => "Chocolate",
            Self::Strawberry => "Strawberry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Topping options.
pub enum Topping {
    /// Sprinkles.
    Sprinkles,
    /// Nuts.
    Nuts,
    /// Fudge.
    Fudge,
    /// Cherries.
    Cherries,
}

impl Topping {
    /// Every topping, in menu order.
    pub const ALL: [Topping; 4] = [Self::Sprinkles, Self::Nuts, Self::Fudge, Self::Cherries];

    /// Menu text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sprinkles => "Sprinkles",
            Self::Nuts => "Nuts",
            Self::Fudge => "Fudge",
            Self::Cherries => "Cherries",
        }
    }

    /// Form token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sprinkles => "sprinkles",
            Self::Nuts => "nuts",
            Self::Fudge => "fudge",
            Self::Cherries => "cherries",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Everything the showcase page renders from. The page owns no state of its
/// own; [`update`] is the only writer.
pub struct ShowcaseState {
    /// File menu drawer.
    pub menu: DrawerState,
    /// Sort select drawer.
    pub sort_drawer: DrawerState,
    /// Flavor selection drawer.
    pub flavor_drawer: DrawerState,
    /// Toppings selection drawer.
    pub toppings_drawer: DrawerState,
    /// Confirmation modal lifecycle.
    pub modal: DrawerState,
    /// Last file menu entry picked.
    pub last_action: Option<MenuAction>,
    /// Current sort order.
    pub sort: SortOrder,
    /// Chosen flavor.
    pub flavor: Option<Flavor>,
    /// Chosen toppings.
    pub toppings: BTreeSet<Topping>,
    /// Number of confirmed dialogs.
    pub confirmations: u32,
}

impl ShowcaseState {
    /// Lifecycle state of `drawer`.
    pub fn drawer(&self, drawer: DrawerId) -> DrawerState {
        match drawer {
            DrawerId::Menu => self.menu,
            DrawerId::Sort => self.sort_drawer,
            DrawerId::Flavor => self.flavor_drawer,
            DrawerId::Toppings => self.toppings_drawer,
            DrawerId::Modal => self.modal,
        }
    }

    /// Puts `drawer` straight into the open resting state, skipping the
    /// opening animation.
    pub fn open(&mut self, drawer: DrawerId) {
        *self.drawer_mut(drawer) = DrawerState::Opened;
    }

    fn drawer_mut(&mut self, drawer: DrawerId) -> &mut DrawerState {
        match drawer {
            DrawerId::Menu => &mut self.menu,
            DrawerId::Sort => &mut self.sort_drawer,
            DrawerId::Flavor => &mut self.flavor_drawer,
            DrawerId::Toppings => &mut self.toppings_drawer,
            DrawerId::Modal => &mut self.modal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Messages produced by the showcase widgets.
pub enum ShowcaseMsg {
    /// A widget reported the next lifecycle state of its drawer.
    Drawer(DrawerId, DrawerState),
    /// A file menu entry was picked.
    Menu(MenuAction),
    /// A sort order was picked.
    Sort(SortOrder),
    /// A flavor was picked.
    Flavor(Flavor),
    /// A topping was picked or its label removed.
    Topping(Topping),
    /// The dialog button was pressed.
    OpenModal,
    /// The dialog was confirmed.
    Confirm,
}

/// Applies `msg` to `state`.
pub fn update(state: &mut ShowcaseState, msg: ShowcaseMsg) {
    match msg {
        ShowcaseMsg::Drawer(drawer, next) => *state.drawer_mut(drawer) = next,
        ShowcaseMsg::Menu(action) => state.last_action = Some(action),
        ShowcaseMsg::Sort(order) => state.sort = order,
        ShowcaseMsg::Flavor(flavor) => state.flavor = state.flavor.with_selected(flavor),
        ShowcaseMsg::Topping(topping) => {
            state.toppings = std::mem::take(&mut state.toppings).with_selected(topping);
        }
        ShowcaseMsg::OpenModal => state.modal = state.modal.toggle(true),
        ShowcaseMsg::Confirm => {
            state.confirmations += 1;
            state.modal = state.modal.toggle(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drawer_messages_replace_the_named_drawer_only() {
        let mut state = ShowcaseState::default();
        update(&mut state, ShowcaseMsg::Drawer(DrawerId::Flavor, DrawerState::Opening));
        assert_eq!(state.drawer(DrawerId::Flavor), DrawerState::Opening);
        for other in DrawerId::ALL.into_iter().filter(|id| *id != DrawerId::Flavor) {
            assert_eq!(state.drawer(other), DrawerState::Closed);
        }
    }

    #[test]
    fn toppings_toggle_membership() {
        let mut state = ShowcaseState::default();
        update(&mut state, ShowcaseMsg::Topping(Topping::Nuts));
        update(&mut state, ShowcaseMsg::Topping(Topping::Sprinkles));
        update(&mut state, ShowcaseMsg::Topping(Topping::Nuts));
        assert_eq!(state.toppings, BTreeSet::from([Topping::Sprinkles]));
    }

    #[test]
    fn confirm_counts_and_closes_modal() {
        let mut state = ShowcaseState::default();
        update(&mut state, ShowcaseMsg::OpenModal);
        assert_eq!(state.modal, DrawerState::Opening);
        update(&mut state, ShowcaseMsg::Drawer(DrawerId::Modal, DrawerState::Opened));
        update(&mut state, ShowcaseMsg::Confirm);
        assert_eq!(state.modal, DrawerState::Closing);
        assert_eq!(state.confirmations, 1);
    }

    #[test]
    fn state_snapshot_uses_stable_tokens() {
        let state = ShowcaseState {
            menu: DrawerState::Opened,
            flavor: Some(Flavor::Chocolate),
            ..ShowcaseState::default()
        };
        let json = serde_json::to_value(&state).expect("encode");
        assert_eq!(json["menu"], "opened");
        assert_eq!(json["flavor"], "chocolate");
        let partial: ShowcaseState =
            serde_json::from_str(r#"{"sort":"popular"}"#).expect("decode partial snapshot");
        assert_eq!(partial.sort, SortOrder::Popular);
        assert_eq!(partial.menu, DrawerState::Closed);
    }

    #[test]
    fn drawer_tokens_parse() {
        assert_eq!("toppings".parse::<DrawerId>().ok(), Some(DrawerId::Toppings));
        assert!("sidebar".parse::<DrawerId>().is_err());
    }
}
