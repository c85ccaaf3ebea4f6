//! Update functions for the Elm-style architecture
//!
//! All table state transformations flow through these functions.

mod selection;
mod table;

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::TableState;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use selection::update_selection;
pub use table::update_structure;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(state: &mut TableState, msg: TableMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(state, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(state, msg)
    }
}

fn update_inner(state: &mut TableState, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::FocusCell { .. }
        | TableMsg::HoverCell { .. }
        | TableMsg::PointerLeave
        | TableMsg::ClearFocus
        | TableMsg::KeyDown(_) => selection::update_selection(state, msg),
        _ => {
            if state.read_only && msg.is_mutation() {
                tracing::debug!("Ignoring {:?} on read-only table", msg);
                return None;
            }
            table::update_structure(state, msg)
        }
    }
}

#[cfg(debug_assertions)]
fn update_traced(state: &mut TableState, msg: TableMsg) -> Option<Cmd> {
    // Hover fires on every pointer move
    let is_noisy = matches!(msg, TableMsg::HoverCell { .. });

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_state(state);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(state, msg);

    if let Some(diff) = before.diff(&SelectionSnapshot::from_state(state)) {
        debug!(target: "selection", %diff, "state changed");
    }

    state.grid.assert_invariants_with_context(&msg_name);
    debug_assert_eq!(state.column_widths.len(), state.grid.column_count());

    result
}
