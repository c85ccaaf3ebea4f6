//! Tunes: the toggle buttons of the block settings menu
//!
//! Each toggle is a `TuneKind` fed to [`transition`], which returns the next
//! block state together with the effect the adapter must run.

/// Icon markup for the toolbox and the settings menu
pub mod icons {
    pub const TABLE: &str = r#"<svg width="18" height="14" viewBox="0 0 18 14"><path d="M2 0h14a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H2a2 2 0 0 1-2-2V2a2 2 0 0 1 2-2zm0 2v4h6V2H2zm8 0v4h6V2h-6zM2 8v4h6V8H2zm8 0v4h6V8h-6z"/></svg>"#;
    pub const WITH_HEADINGS: &str = r#"<svg width="16" height="14" viewBox="0 0 16 14"><path d="M0 0h16v4H0zm0 6h7v3H0zm9 0h7v3H9zm-9 5h7v3H0zm9 0h7v3H9z"/></svg>"#;
    pub const WITHOUT_HEADINGS: &str = r#"<svg width="16" height="14" viewBox="0 0 16 14"><path d="M0 0h7v3H0zm9 0h7v3H9zM0 5h7v3H0zm9 0h7v3H9zm-9 6h7v3H0zm9 0h7v3H9z"/></svg>"#;
    pub const EDITABLE: &str = r#"<svg width="14" height="14" viewBox="0 0 14 14"><path d="M10 0l4 4-8 8H2V8z"/></svg>"#;
    pub const READ_ONLY: &str = r#"<svg width="14" height="14" viewBox="0 0 14 14"><path d="M3 6V4a4 4 0 1 1 8 0v2h1v8H2V6zm2 0h4V4a2 2 0 1 0-4 0z"/></svg>"#;
}

/// Mutually exclusive tune groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuneGroup {
    Headings,
    Editing,
}

/// Every action the settings menu can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuneKind {
    HeadingsOn,
    HeadingsOff,
    Editable,
    ReadOnly,
    /// Host-supplied action, by index into the config's settings
    Extra(usize),
}

impl TuneKind {
    /// Built-in tunes in menu order
    pub const BUILTIN: [TuneKind; 4] = [
        TuneKind::HeadingsOn,
        TuneKind::HeadingsOff,
        TuneKind::Editable,
        TuneKind::ReadOnly,
    ];

    pub fn group(self) -> Option<TuneGroup> {
        match self {
            TuneKind::HeadingsOn | TuneKind::HeadingsOff => Some(TuneGroup::Headings),
            TuneKind::Editable | TuneKind::ReadOnly => Some(TuneGroup::Editing),
            TuneKind::Extra(_) => None,
        }
    }

    /// Value of the `x-tune-name` attribute
    pub fn name(self) -> &'static str {
        match self {
            TuneKind::HeadingsOn => "with-headings",
            TuneKind::HeadingsOff => "wo-headings",
            TuneKind::Editable => "editable",
            TuneKind::ReadOnly => "readonly",
            TuneKind::Extra(_) => "extra",
        }
    }

    /// Untranslated tooltip title
    pub fn title(self) -> &'static str {
        match self {
            TuneKind::HeadingsOn => "With headings",
            TuneKind::HeadingsOff => "Without headings",
            TuneKind::Editable => "Editable",
            TuneKind::ReadOnly => "Readonly",
            TuneKind::Extra(_) => "",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TuneKind::HeadingsOn => icons::WITH_HEADINGS,
            TuneKind::HeadingsOff => icons::WITHOUT_HEADINGS,
            TuneKind::Editable => icons::EDITABLE,
            TuneKind::ReadOnly => icons::READ_ONLY,
            TuneKind::Extra(_) => "",
        }
    }

    /// Whether this tune is the active one of its group in `state`
    pub fn is_active(self, state: BlockState) -> bool {
        match self {
            TuneKind::HeadingsOn => state.with_headings,
            TuneKind::HeadingsOff => !state.with_headings,
            TuneKind::Editable => !state.read_only,
            TuneKind::ReadOnly => state.read_only,
            TuneKind::Extra(_) => false,
        }
    }
}

/// Adapter state driven by the tunes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub with_headings: bool,
    pub read_only: bool,
}

/// Side effect the adapter performs after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneEffect {
    /// Editable and read-only tables are different view variants, so an
    /// editing toggle snapshots content and builds a new table
    RebuildOnEditabilityChange,
    /// Re-style row 0 on the existing view
    RestyleHeadings,
    /// Run the host callback at this index
    RunExtra(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: BlockState,
    pub effect: TuneEffect,
}

/// A tune as rendered in the settings menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tune {
    pub kind: TuneKind,
    pub name: &'static str,
    pub title: String,
    pub icon: &'static str,
    pub group: TuneGroup,
    pub is_active: bool,
}

/// Derive the built-in tunes for `state`; titles go through `translate`
pub fn tunes_for(state: BlockState, translate: impl Fn(&str) -> String) -> Vec<Tune> {
    TuneKind::BUILTIN
        .iter()
        .filter_map(|&kind| {
            Some(Tune {
                kind,
                name: kind.name(),
                title: translate(kind.title()),
                icon: kind.icon(),
                group: kind.group()?,
                is_active: kind.is_active(state),
            })
        })
        .collect()
}

/// The single tune transition function
///
/// `host_read_only` is the read-only flag the host constructed the block
/// with. The editable tune falls back to it, so a block in a read-only host
/// stays read-only. The read-only tune always sets `read_only`.
pub fn transition(state: BlockState, kind: TuneKind, host_read_only: bool) -> Transition {
    let (state, effect) = match kind {
        TuneKind::HeadingsOn => (
            BlockState {
                with_headings: true,
                ..state
            },
            TuneEffect::RestyleHeadings,
        ),
        TuneKind::HeadingsOff => (
            BlockState {
                with_headings: false,
                ..state
            },
            TuneEffect::RestyleHeadings,
        ),
        TuneKind::Editable => (
            BlockState {
                read_only: host_read_only,
                ..state
            },
            TuneEffect::RebuildOnEditabilityChange,
        ),
        TuneKind::ReadOnly => (
            BlockState {
                read_only: true,
                ..state
            },
            TuneEffect::RebuildOnEditabilityChange,
        ),
        TuneKind::Extra(index) => (state, TuneEffect::RunExtra(index)),
    };
    Transition { state, effect }
}
