//! Block settings menu
//!
//! One button per tune, plus a nested wrapper for host-supplied actions.

use crate::block::{BlockState, Tune, TuneKind};
use crate::config::ExtraSetting;
use crate::host::{HostApi, TooltipOptions};

use super::node::{EventKind, NodeId, NodeTree};

pub const SETTINGS_WRAPPER: &str = "tc-settings";
pub const EXTRA_SETTINGS_WRAPPER: &str = "tc-settings-extra";

#[derive(Debug, Clone)]
pub struct SettingsMenu {
    tree: NodeTree,
    root: NodeId,
    buttons: Vec<(NodeId, TuneKind)>,
}

impl SettingsMenu {
    /// Build the menu and register tooltips with the host
    ///
    /// Tune titles arrive translated; extra setting titles are translated here.
    pub fn render(tunes: &[Tune], extras: &[ExtraSetting], api: &mut HostApi) -> Self {
        let mut tree = NodeTree::new();
        let root = tree.make("div", &[SETTINGS_WRAPPER]);
        let mut buttons = Vec::new();

        for tune in tunes {
            let button = tree.make("div", &[api.styles.settings_button.as_str()]);
            tree.set_attr(button, "x-tune-name", tune.name);
            if tune.is_active {
                tree.add_class(button, &api.styles.settings_button_active);
            }
            tree.set_markup(button, tune.icon);
            tree.listen(button, EventKind::Click);
            api.tooltip
                .on_hover(button, &tune.title, TooltipOptions::default());

            tree.append(root, button);
            buttons.push((button, tune.kind));
        }

        if !extras.is_empty() {
            let extra_wrapper = tree.make("div", &[EXTRA_SETTINGS_WRAPPER]);
            for (index, setting) in extras.iter().enumerate() {
                let button = tree.make("div", &[api.styles.settings_button.as_str()]);
                tree.set_markup(button, &setting.icon);
                tree.listen(button, EventKind::Click);
                let title = api.i18n.t(&setting.title);
                api.tooltip
                    .on_hover(button, &title, TooltipOptions::default());

                tree.append(extra_wrapper, button);
                buttons.push((button, TuneKind::Extra(index)));
            }
            tree.append(root, extra_wrapper);
        }

        Self {
            tree,
            root,
            buttons,
        }
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Tune triggered by clicking `node`
    pub fn action_for(&self, node: NodeId) -> Option<TuneKind> {
        self.buttons
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, kind)| *kind)
    }

    /// Button node for a tune
    pub fn button_for(&self, kind: TuneKind) -> Option<NodeId> {
        self.buttons
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(id, _)| *id)
    }

    /// Re-derive the active class of every built-in tune button
    pub fn sync_active(&mut self, state: BlockState, active_class: &str) {
        for kind in TuneKind::BUILTIN {
            let Some(button) = self.tree.query_attr(self.root, "x-tune-name", kind.name()) else {
                continue;
            };
            self.tree
                .toggle_class(button, active_class, kind.is_active(state));
        }
    }
}
