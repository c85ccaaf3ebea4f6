//! Table grid view
//!
//! Mirrors a `GridModel` as a node tree and keeps it in sync by applying
//! the damage returned from update functions, so unaffected rows keep their
//! nodes (and with them focus and caret position in the host).
//!
//! ```text
//! wrapper (.tc-wrap)
//! ├── table (.tc-table)
//! │   └── row (.tc-row) × N
//! │       └── cell (.tc-cell) × M
//! ├── row toolbox      ┐
//! ├── column toolbox   │ editable variant only
//! ├── add row / column │
//! └── resizers         ┘
//! ```

use crate::commands::{Cmd, Damage, DamageArea};
use crate::messages::{Key, TableMsg};
use crate::model::{CellPosition, GestureId, GridModel, TableState};

use super::node::{EventKind, NodeId, NodeTree};

/// CSS classes applied to table nodes
pub mod css {
    pub const WRAPPER: &str = "tc-wrap";
    pub const WRAPPER_READ_ONLY: &str = "tc-wrap--readonly";
    pub const TABLE: &str = "tc-table";
    pub const TABLE_WITH_HEADINGS: &str = "tc-table--heading";
    pub const ROW: &str = "tc-row";
    pub const ROW_HEADING: &str = "tc-row--heading";
    pub const CELL: &str = "tc-cell";
    pub const TOOLBOX: &str = "tc-toolbox";
    pub const TOOLBOX_ROW: &str = "tc-toolbox--row";
    pub const TOOLBOX_COLUMN: &str = "tc-toolbox--column";
    pub const TOOLBOX_HIDDEN: &str = "tc-toolbox--hidden";
    pub const TOOLBOX_ACTION: &str = "tc-toolbox__action";
    pub const ADD_ROW: &str = "tc-add-row";
    pub const ADD_COLUMN: &str = "tc-add-column";
    pub const ADD_DISABLED: &str = "tc-add--disabled";
    pub const RESIZERS: &str = "tc-resizers";
    pub const RESIZER: &str = "tc-resizer";
}

/// Input delivered by the host to a node of the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Cell text after an input event
    Input(String),
    Focus,
    Blur,
    KeyDown(Key),
    Click { gesture: GestureId },
    PointerEnter,
    PointerLeave,
    /// Resize handle dragged horizontally
    Drag { gesture: GestureId, delta_px: i32 },
    /// Move grip dropped over row/column `index`
    Drop { gesture: GestureId, index: usize },
}

impl ViewEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ViewEvent::Input(_) => EventKind::Input,
            ViewEvent::Focus => EventKind::Focus,
            ViewEvent::Blur => EventKind::Blur,
            ViewEvent::KeyDown(_) => EventKind::KeyDown,
            ViewEvent::Click { .. } => EventKind::Click,
            ViewEvent::PointerEnter => EventKind::PointerEnter,
            ViewEvent::PointerLeave => EventKind::PointerLeave,
            ViewEvent::Drag { .. } => EventKind::Drag,
            ViewEvent::Drop { .. } => EventKind::Drop,
        }
    }

    /// Pointer gesture this event belongs to, if any
    pub fn gesture(&self) -> Option<GestureId> {
        match self {
            ViewEvent::Click { gesture }
            | ViewEvent::Drag { gesture, .. }
            | ViewEvent::Drop { gesture, .. } => Some(*gesture),
            _ => None,
        }
    }
}

/// Buttons in the row and column toolboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    AddRowAbove,
    AddRowBelow,
    DeleteRow,
    MoveRow,
    AddColumnLeft,
    AddColumnRight,
    DeleteColumn,
    MoveColumn,
}

impl ToolbarAction {
    const ROW: [ToolbarAction; 4] = [
        ToolbarAction::AddRowAbove,
        ToolbarAction::AddRowBelow,
        ToolbarAction::DeleteRow,
        ToolbarAction::MoveRow,
    ];
    const COLUMN: [ToolbarAction; 4] = [
        ToolbarAction::AddColumnLeft,
        ToolbarAction::AddColumnRight,
        ToolbarAction::DeleteColumn,
        ToolbarAction::MoveColumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolbarAction::AddRowAbove => "add-row-above",
            ToolbarAction::AddRowBelow => "add-row-below",
            ToolbarAction::DeleteRow => "delete-row",
            ToolbarAction::MoveRow => "move-row",
            ToolbarAction::AddColumnLeft => "add-column-left",
            ToolbarAction::AddColumnRight => "add-column-right",
            ToolbarAction::DeleteColumn => "delete-column",
            ToolbarAction::MoveColumn => "move-column",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        Self::ROW
            .iter()
            .chain(Self::COLUMN.iter())
            .copied()
            .find(|a| a.as_str() == s)
    }

    fn is_grip(self) -> bool {
        matches!(self, ToolbarAction::MoveRow | ToolbarAction::MoveColumn)
    }
}

/// Root node exposed for embedding into the block container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewHandle {
    pub root: NodeId,
}

/// Counters used to verify that patches stay targeted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub full_renders: usize,
    pub rows_created: usize,
    pub cells_written: usize,
}

#[derive(Debug, Clone)]
struct RowNodes {
    row: NodeId,
    cells: Vec<NodeId>,
}

/// Nodes that only exist in the editable variant
#[derive(Debug, Clone)]
struct Affordances {
    row_toolbox: NodeId,
    column_toolbox: NodeId,
    add_row: NodeId,
    add_column: NodeId,
    resizers: NodeId,
    resizer_nodes: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct GridView {
    tree: NodeTree,
    handle: Option<ViewHandle>,
    table: NodeId,
    rows: Vec<RowNodes>,
    affordances: Option<Affordances>,
    read_only: bool,
    headings: bool,
    focus_request: Option<CellPosition>,
    stats: RenderStats,
}

impl GridView {
    /// Build the node tree for `state`
    ///
    /// A read-only view is a different variant: it has no toolboxes,
    /// add buttons or resize handles, only static cells.
    pub fn mount(state: &TableState, read_only: bool) -> Self {
        let mut tree = NodeTree::new();
        let wrapper = tree.make("div", &[css::WRAPPER]);
        let table = tree.make("div", &[css::TABLE]);
        tree.append(wrapper, table);

        let mut view = Self {
            tree,
            handle: Some(ViewHandle { root: wrapper }),
            table,
            rows: Vec::new(),
            affordances: None,
            read_only,
            headings: false,
            focus_request: None,
            stats: RenderStats::default(),
        };

        if read_only {
            view.tree.add_class(wrapper, css::WRAPPER_READ_ONLY);
        } else {
            view.tree.listen(wrapper, EventKind::PointerLeave);
            view.affordances = Some(view.build_affordances(wrapper));
        }

        view.render_body(state);
        view.render_toolbars(state);
        tracing::debug!(
            "Mounted {}x{} table view (read_only={})",
            state.grid.row_count(),
            state.grid.column_count(),
            read_only
        );
        view
    }

    pub fn handle(&self) -> Option<ViewHandle> {
        self.handle
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn headings(&self) -> bool {
        self.headings
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Node of the cell at `row`, `col`
    pub fn cell_node(&self, row: usize, col: usize) -> Option<NodeId> {
        self.rows.get(row)?.cells.get(col).copied()
    }

    pub fn row_node(&self, row: usize) -> Option<NodeId> {
        self.rows.get(row).map(|r| r.row)
    }

    /// Toolbox button or grip for `action`
    pub fn action_node(&self, action: ToolbarAction) -> Option<NodeId> {
        let aff = self.affordances.as_ref()?;
        let toolbox = if ToolbarAction::ROW.contains(&action) {
            aff.row_toolbox
        } else {
            aff.column_toolbox
        };
        self.tree.query_attr(toolbox, "data-action", action.as_str())
    }

    pub fn add_row_node(&self) -> Option<NodeId> {
        self.affordances.as_ref().map(|a| a.add_row)
    }

    pub fn add_column_node(&self) -> Option<NodeId> {
        self.affordances.as_ref().map(|a| a.add_column)
    }

    pub fn row_toolbox(&self) -> Option<NodeId> {
        self.affordances.as_ref().map(|a| a.row_toolbox)
    }

    pub fn column_toolbox(&self) -> Option<NodeId> {
        self.affordances.as_ref().map(|a| a.column_toolbox)
    }

    pub fn resizer_node(&self, col: usize) -> Option<NodeId> {
        self.affordances.as_ref()?.resizer_nodes.get(col).copied()
    }

    /// Cell the host should move keyboard focus to, consumed on read
    pub fn take_focus_request(&mut self) -> Option<CellPosition> {
        self.focus_request.take()
    }

    /// Toggle cell editability without touching content
    pub fn set_read_only(&mut self, read_only: bool) {
        if !self.is_mounted() || self.read_only == read_only {
            return;
        }
        self.read_only = read_only;
        if let Some(handle) = self.handle {
            self.tree
                .toggle_class(handle.root, css::WRAPPER_READ_ONLY, read_only);
        }
        let cells: Vec<NodeId> = self.rows.iter().flat_map(|r| r.cells.clone()).collect();
        for cell in cells {
            self.style_cell_editability(cell);
        }
    }

    /// Style row 0 as a heading row; data stays where it is
    pub fn set_headings_mode(&mut self, enabled: bool) {
        if !self.is_mounted() {
            return;
        }
        self.headings = enabled;
        self.tree
            .toggle_class(self.table, css::TABLE_WITH_HEADINGS, enabled);
        self.restyle_headings();
    }

    /// Detach listeners and drop the tree; safe to call repeatedly
    pub fn destroy(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.tree.remove(handle.root);
        self.tree = NodeTree::new();
        self.rows.clear();
        self.affordances = None;
        self.focus_request = None;
        tracing::debug!("Destroyed table view");
    }

    // ========================================================================
    // Event translation (view → message)
    // ========================================================================

    /// Turn a host event on `node` into a table message
    ///
    /// Cell input also updates the cell node immediately, the same way an
    /// editable element already holds the typed text.
    pub fn translate(&mut self, node: NodeId, event: ViewEvent, state: &TableState) -> Option<TableMsg> {
        let target = self.tree.get(node)?;
        if !target.listens(event.kind()) {
            return None;
        }

        if let Some(pos) = self.cell_position(node) {
            let (row, col) = (pos.row, pos.col);
            return match event {
                ViewEvent::Input(text) => {
                    self.tree.set_text(node, &text);
                    Some(TableMsg::CellInput { row, col, text })
                }
                ViewEvent::Focus => Some(TableMsg::FocusCell { row, col }),
                ViewEvent::Blur => Some(TableMsg::ClearFocus),
                ViewEvent::KeyDown(key) => Some(TableMsg::KeyDown(key)),
                ViewEvent::PointerEnter => Some(TableMsg::HoverCell { row, col }),
                _ => None,
            };
        }

        if Some(node) == self.handle.map(|h| h.root) {
            return matches!(event, ViewEvent::PointerLeave).then_some(TableMsg::PointerLeave);
        }

        let aff = self.affordances.as_ref()?;
        if node == aff.add_row {
            return Some(TableMsg::AddRow {
                at: state.grid.row_count(),
            });
        }
        if node == aff.add_column {
            return Some(TableMsg::AddColumn {
                at: state.grid.column_count(),
            });
        }
        if let Some(col) = aff.resizer_nodes.iter().position(|n| *n == node) {
            if let ViewEvent::Drag { delta_px, .. } = event {
                return Some(TableMsg::ResizeColumn { col, delta_px });
            }
            return None;
        }

        let action = ToolbarAction::from_str(self.tree.attr(node, "data-action")?)?;
        self.toolbar_msg(action, event, state)
    }

    fn toolbar_msg(&self, action: ToolbarAction, event: ViewEvent, state: &TableState) -> Option<TableMsg> {
        let row = state.selection.active_row;
        let col = state.selection.active_col;
        match (action, event) {
            (ToolbarAction::AddRowAbove, ViewEvent::Click { .. }) => Some(TableMsg::AddRow { at: row? }),
            (ToolbarAction::AddRowBelow, ViewEvent::Click { .. }) => {
                Some(TableMsg::AddRow { at: row? + 1 })
            }
            (ToolbarAction::DeleteRow, ViewEvent::Click { .. }) => Some(TableMsg::DeleteRow(row?)),
            (ToolbarAction::MoveRow, ViewEvent::Drop { index, .. }) => Some(TableMsg::MoveRow {
                from: row?,
                to: index,
            }),
            (ToolbarAction::AddColumnLeft, ViewEvent::Click { .. }) => {
                Some(TableMsg::AddColumn { at: col? })
            }
            (ToolbarAction::AddColumnRight, ViewEvent::Click { .. }) => {
                Some(TableMsg::AddColumn { at: col? + 1 })
            }
            (ToolbarAction::DeleteColumn, ViewEvent::Click { .. }) => {
                Some(TableMsg::DeleteColumn(col?))
            }
            (ToolbarAction::MoveColumn, ViewEvent::Drop { index, .. }) => {
                Some(TableMsg::MoveColumn {
                    from: col?,
                    to: index,
                })
            }
            _ => None,
        }
    }

    fn cell_position(&self, node: NodeId) -> Option<CellPosition> {
        self.rows.iter().enumerate().find_map(|(r, nodes)| {
            nodes
                .cells
                .iter()
                .position(|c| *c == node)
                .map(|c| CellPosition::new(r, c))
        })
    }

    // ========================================================================
    // Rendering (message result → nodes)
    // ========================================================================

    /// Apply the damage and focus request carried by `cmd`
    pub fn apply(&mut self, cmd: &Cmd, state: &TableState) {
        if !self.is_mounted() {
            return;
        }
        match cmd.damage() {
            Damage::None => {}
            Damage::Full => {
                self.render_body(state);
                self.render_toolbars(state);
            }
            Damage::Areas(areas) => {
                for area in &areas {
                    self.apply_area(area, state);
                }
                if self.rows.len() != state.grid.row_count()
                    || self
                        .rows
                        .iter()
                        .any(|r| r.cells.len() != state.grid.column_count())
                {
                    tracing::warn!("Table view out of sync with model, re-rendering");
                    self.render_body(state);
                    self.render_toolbars(state);
                }
            }
        }
        if let Some(pos) = cmd.focus_target() {
            self.focus_request = Some(pos);
        }
    }

    fn apply_area(&mut self, area: &DamageArea, state: &TableState) {
        let grid = &state.grid;
        match area {
            DamageArea::RowInserted(at) => {
                let nodes = self.build_row(grid, *at, state);
                self.tree.insert_child(self.table, *at, nodes.row);
                let at = (*at).min(self.rows.len());
                self.rows.insert(at, nodes);
            }
            DamageArea::RowRemoved(at) => {
                if *at < self.rows.len() {
                    let nodes = self.rows.remove(*at);
                    self.tree.remove(nodes.row);
                }
            }
            DamageArea::ColumnInserted(at) => {
                for r in 0..self.rows.len() {
                    let cell = self.build_cell(grid, r, *at, state);
                    let row = self.rows[r].row;
                    self.tree.insert_child(row, *at, cell);
                    let idx = (*at).min(self.rows[r].cells.len());
                    self.rows[r].cells.insert(idx, cell);
                }
                if let Some(aff) = &mut self.affordances {
                    let resizer = make_resizer(&mut self.tree);
                    self.tree.insert_child(aff.resizers, *at, resizer);
                    let idx = (*at).min(aff.resizer_nodes.len());
                    aff.resizer_nodes.insert(idx, resizer);
                }
            }
            DamageArea::ColumnRemoved(at) => {
                for r in 0..self.rows.len() {
                    if *at < self.rows[r].cells.len() {
                        let cell = self.rows[r].cells.remove(*at);
                        self.tree.remove(cell);
                    }
                }
                if let Some(aff) = &mut self.affordances {
                    if *at < aff.resizer_nodes.len() {
                        let resizer = aff.resizer_nodes.remove(*at);
                        self.tree.remove(resizer);
                    }
                }
            }
            DamageArea::Rows(range) => {
                for r in range.clone() {
                    for c in 0..grid.column_count() {
                        self.refresh_cell(grid, r, c);
                    }
                }
            }
            DamageArea::Columns(range) => {
                for c in range.clone() {
                    for r in 0..grid.row_count() {
                        self.refresh_cell(grid, r, c);
                    }
                    self.apply_width(c, state);
                }
            }
            DamageArea::Cell(pos) => self.refresh_cell(grid, pos.row, pos.col),
            DamageArea::ColumnWidth(c) => self.apply_width(*c, state),
            DamageArea::Toolbars => self.render_toolbars(state),
            DamageArea::Headings => self.restyle_headings(),
        }
    }

    fn refresh_cell(&mut self, grid: &GridModel, row: usize, col: usize) {
        let (Some(node), Ok(text)) = (self.cell_node(row, col), grid.cell_text(row, col)) else {
            return;
        };
        if self.tree.set_text(node, text) {
            self.stats.cells_written += 1;
        }
    }

    /// Rebuild every row and cell node
    fn render_body(&mut self, state: &TableState) {
        self.stats.full_renders += 1;
        self.tree.clear_children(self.table);
        self.rows.clear();
        for r in 0..state.grid.row_count() {
            let nodes = self.build_row(&state.grid, r, state);
            self.tree.append(self.table, nodes.row);
            self.rows.push(nodes);
        }
        if let Some(aff) = &mut self.affordances {
            self.tree.clear_children(aff.resizers);
            aff.resizer_nodes.clear();
            for _ in 0..state.grid.column_count() {
                let resizer = make_resizer(&mut self.tree);
                self.tree.append(aff.resizers, resizer);
                aff.resizer_nodes.push(resizer);
            }
        }
        self.restyle_headings();
    }

    fn build_row(&mut self, grid: &GridModel, r: usize, state: &TableState) -> RowNodes {
        self.stats.rows_created += 1;
        let row = self.tree.make("div", &[css::ROW]);
        let cells = (0..grid.column_count())
            .map(|c| {
                let cell = self.build_cell(grid, r, c, state);
                self.tree.append(row, cell);
                cell
            })
            .collect();
        RowNodes { row, cells }
    }

    fn build_cell(&mut self, grid: &GridModel, r: usize, c: usize, state: &TableState) -> NodeId {
        let cell = self.tree.make("div", &[css::CELL]);
        if let Ok(text) = grid.cell_text(r, c) {
            self.tree.set_text(cell, text);
            self.stats.cells_written += 1;
        }
        if let Some(Some(width)) = state.column_widths.get(c) {
            self.tree.set_attr(cell, "style", format!("width: {}px", width));
        }
        self.style_cell_editability(cell);
        cell
    }

    fn style_cell_editability(&mut self, cell: NodeId) {
        self.tree
            .set_attr(cell, "contenteditable", (!self.read_only).to_string());
        self.tree.unlisten_all(cell);
        if !self.read_only {
            for kind in [
                EventKind::Input,
                EventKind::Focus,
                EventKind::Blur,
                EventKind::KeyDown,
                EventKind::PointerEnter,
            ] {
                self.tree.listen(cell, kind);
            }
        }
    }

    fn apply_width(&mut self, col: usize, state: &TableState) {
        let width = state.column_widths.get(col).copied().flatten();
        for r in 0..self.rows.len() {
            let Some(cell) = self.cell_node(r, col) else {
                continue;
            };
            match width {
                Some(w) => self.tree.set_attr(cell, "style", format!("width: {}px", w)),
                None => self.tree.remove_attr(cell, "style"),
            }
        }
    }

    fn restyle_headings(&mut self) {
        for (idx, nodes) in self.rows.iter().enumerate() {
            self.tree
                .toggle_class(nodes.row, css::ROW_HEADING, self.headings && idx == 0);
        }
    }

    /// Resize handles are filled in by `render_body`
    fn build_affordances(&mut self, wrapper: NodeId) -> Affordances {
        let row_toolbox = self.build_toolbox(css::TOOLBOX_ROW, &ToolbarAction::ROW);
        let column_toolbox = self.build_toolbox(css::TOOLBOX_COLUMN, &ToolbarAction::COLUMN);

        let add_row = self.tree.make("div", &[css::ADD_ROW]);
        self.tree.listen(add_row, EventKind::Click);
        let add_column = self.tree.make("div", &[css::ADD_COLUMN]);
        self.tree.listen(add_column, EventKind::Click);

        let resizers = self.tree.make("div", &[css::RESIZERS]);

        for node in [row_toolbox, column_toolbox, add_row, add_column, resizers] {
            self.tree.append(wrapper, node);
        }

        Affordances {
            row_toolbox,
            column_toolbox,
            add_row,
            add_column,
            resizers,
            resizer_nodes: Vec::new(),
        }
    }

    fn build_toolbox(&mut self, variant: &str, actions: &[ToolbarAction]) -> NodeId {
        let toolbox = self
            .tree
            .make("div", &[css::TOOLBOX, variant, css::TOOLBOX_HIDDEN]);
        for action in actions {
            let button = self.tree.make("div", &[css::TOOLBOX_ACTION]);
            self.tree.set_attr(button, "data-action", action.as_str());
            let kind = if action.is_grip() {
                EventKind::Drop
            } else {
                EventKind::Click
            };
            self.tree.listen(button, kind);
            self.tree.append(toolbox, button);
        }
        toolbox
    }

    fn render_toolbars(&mut self, state: &TableState) {
        let Some(aff) = self.affordances.clone() else {
            return;
        };
        let sel = &state.selection;

        self.tree
            .toggle_class(aff.row_toolbox, css::TOOLBOX_HIDDEN, sel.active_row.is_none());
        match sel.active_row {
            Some(r) => self.tree.set_attr(aff.row_toolbox, "data-row", r.to_string()),
            None => self.tree.remove_attr(aff.row_toolbox, "data-row"),
        }

        self.tree.toggle_class(
            aff.column_toolbox,
            css::TOOLBOX_HIDDEN,
            sel.active_col.is_none(),
        );
        match sel.active_col {
            Some(c) => self
                .tree
                .set_attr(aff.column_toolbox, "data-column", c.to_string()),
            None => self.tree.remove_attr(aff.column_toolbox, "data-column"),
        }

        self.tree
            .toggle_class(aff.add_row, css::ADD_DISABLED, !state.can_add_row());
        self.tree
            .toggle_class(aff.add_column, css::ADD_DISABLED, !state.can_add_col());
    }
}

fn make_resizer(tree: &mut NodeTree) -> NodeId {
    let resizer = tree.make("div", &[css::RESIZER]);
    tree.listen(resizer, EventKind::Drag);
    resizer
}
