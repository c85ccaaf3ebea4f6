//! One mounted table: state plus its view
//!
//! Events from the host are translated by the view, run through `update`,
//! and the resulting command is applied back to the view in the same call.

use crate::commands::Cmd;
use crate::config::TableConfig;
use crate::messages::TableMsg;
use crate::model::{CellPosition, GridModel, TableState};
use crate::update::update;
use crate::view::{GridView, NodeId, ViewEvent, ViewHandle};

#[derive(Debug, Clone)]
pub struct Table {
    state: TableState,
    view: GridView,
}

impl Table {
    /// Build a table from saved content, or from the configured size when
    /// `content` is empty
    pub fn new(
        content: &[Vec<String>],
        config: &TableConfig,
        read_only: bool,
        with_headings: bool,
    ) -> Self {
        let grid = GridModel::new(config.initial_rows(), config.initial_cols(), Some(content));
        let state = TableState::new(grid, read_only).with_limits(config.max_rows, config.max_cols);
        let mut view = GridView::mount(&state, read_only);
        view.set_headings_mode(with_headings);
        Self { state, view }
    }

    pub fn handle(&self) -> Option<ViewHandle> {
        self.view.handle()
    }

    pub fn view(&self) -> &GridView {
        &self.view
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn is_read_only(&self) -> bool {
        self.state.read_only
    }

    /// Snapshot of the cell text, row by row
    pub fn get_data(&self) -> Vec<Vec<String>> {
        self.state.grid.to_rows()
    }

    pub fn set_headings_setting(&mut self, enabled: bool) {
        self.view.set_headings_mode(enabled);
    }

    /// Run a message through `update` and patch the view with the result
    ///
    /// Returns whether the message produced a command.
    pub fn dispatch(&mut self, msg: TableMsg) -> bool {
        if !self.view.is_mounted() {
            return false;
        }
        match update(&mut self.state, msg) {
            Some(cmd) => {
                self.apply(&cmd);
                true
            }
            None => false,
        }
    }

    /// Deliver a host event on `node`
    ///
    /// Events on a destroyed table and repeats of an already handled
    /// gesture are dropped.
    pub fn handle_event(&mut self, node: NodeId, event: ViewEvent) -> bool {
        if !self.view.is_mounted() {
            tracing::debug!("Ignoring {:?} on {}: table destroyed", event.kind(), node);
            return false;
        }
        let gesture = event.gesture();
        let Some(msg) = self.view.translate(node, event, &self.state) else {
            return false;
        };
        if let Some(g) = gesture {
            if !self.state.gestures.admit(g) {
                tracing::debug!("Dropping repeated gesture {}", g);
                return false;
            }
        }
        self.dispatch(msg)
    }

    /// Cell the host should focus after the last event, if any
    pub fn take_focus_request(&mut self) -> Option<CellPosition> {
        self.view.take_focus_request()
    }

    pub fn destroy(&mut self) {
        self.view.destroy();
    }

    fn apply(&mut self, cmd: &Cmd) {
        self.view.apply(cmd, &self.state);
    }
}
