//! Decomposition of the LCS computation into a replayable step timeline.
//!
//! [`generate_steps`] re-runs the DP fill and emits one immutable
//! [`AnimationStep`] per executed pseudocode line: three parameter-binding
//! steps, a loop-entry step per row and per cell, a compare step and an
//! assign step per cell, and a terminal return step. Every step carries a
//! deep-copy snapshot of the table as it stood immediately after that
//! step's effect, so the timeline can be scrubbed in either direction
//! without recomputation.
//!
//! The live table is confined to a private accumulator; it only ever
//! leaves as a cloned snapshot, never by reference.

use crate::cell::{evaluate, Transition};
use crate::table::{DpTable, Position};
use crate::utils::step_count;

/// Coarse execution phase of a step, one variant per traced pseudocode
/// line of the textbook LCS routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// `let m = s1.len()`
    InitM,
    /// `let n = s2.len()`
    InitN,
    /// allocation of the zeroed (m+1) × (n+1) table
    InitTable,
    /// outer `for i in 1..=m` entry
    LoopRow,
    /// inner `for j in 1..=n` entry
    LoopCol,
    /// the character comparison `s1[i-1] == s2[j-1]`
    Compare,
    /// `table[i][j] = table[i-1][j-1] + 1`
    MatchAssign,
    /// `table[i][j] = max(table[i-1][j], table[i][j-1])`
    MismatchAssign,
    /// `return table[m][n]`
    Return,
}

impl Phase {
    /// Line of the displayed pseudocode the UI highlights while this
    /// phase is active.
    pub fn highlight_line(self) -> u32 {
        match self {
            Phase::InitM => 3,
            Phase::InitN => 4,
            Phase::InitTable => 5,
            Phase::LoopRow => 7,
            Phase::LoopCol => 8,
            Phase::Compare => 9,
            Phase::MatchAssign => 10,
            Phase::MismatchAssign => 12,
            Phase::Return => 16,
        }
    }
}

/// Named variable bindings live at the moment a step executed.
///
/// Each field is populated from the phase it first becomes meaningful:
/// `m` from [`Phase::InitM`] on, loop indices while their loop runs,
/// candidate values only on the assign step that inspected them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarState {
    pub m: Option<usize>,
    pub n: Option<usize>,
    pub i: Option<usize>,
    pub j: Option<usize>,
    pub char1: Option<char>,
    pub char2: Option<char>,
    /// Value just written to (or returned from) the table.
    pub dp_value: Option<u32>,
    /// Mismatch candidate `table[i-1][j]`.
    pub top_value: Option<u32>,
    /// Mismatch candidate `table[i][j-1]`.
    pub left_value: Option<u32>,
    /// Match source `table[i-1][j-1]`.
    pub diag_value: Option<u32>,
}

/// One discrete moment of the traced computation.
///
/// Created once by the sequencer and never mutated afterward. The
/// external animation controller owns navigation over the sequence, not
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    /// Target cell; `None` for the pre-loop and loop-entry steps that
    /// have no cell in focus yet.
    pub cell: Option<Position>,
    /// Value written at this step; 0 when the step is not an assignment.
    pub value: u32,
    /// Transition that produced the value; `None` until an assign step.
    pub transition: Option<Transition>,
    /// Character of `s1` under inspection, when the step has a row.
    pub char1: Option<char>,
    /// Character of `s2` under inspection, when the step has a column.
    pub char2: Option<char>,
    /// Cells consulted by this step, for source highlighting.
    pub source_cells: Vec<Position>,
    /// Deep copy of the table immediately after this step's effect.
    pub snapshot: DpTable,
    pub phase: Phase,
    pub vars: VarState,
}

impl AnimationStep {
    /// Pseudocode line the UI highlights for this step.
    #[inline]
    pub fn highlight_line(&self) -> u32 {
        self.phase.highlight_line()
    }

    /// True when this step wrote a cell.
    #[inline]
    pub fn is_assign(&self) -> bool {
        matches!(self.phase, Phase::MatchAssign | Phase::MismatchAssign)
    }
}

/// Generate the full step timeline for `s1` and `s2`.
///
/// Deterministic pure function of its inputs. The emitted sequence has
/// exactly [`step_count`]`(m, n)` entries; the terminal step's value is
/// the LCS length, `table[m][n]`.
pub fn generate_steps(s1: &str, s2: &str) -> Vec<AnimationStep> {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("generate_steps", m = s1.len(), n = s2.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut seq = Sequencer::new(&s1, &s2);
    seq.run();
    seq.steps
}

/// Accumulator owning the live table while the timeline is built.
///
/// The table never escapes by reference; [`Sequencer::emit`] clones it
/// into each step.
struct Sequencer<'a> {
    s1: &'a [char],
    s2: &'a [char],
    table: DpTable,
    steps: Vec<AnimationStep>,
}

impl<'a> Sequencer<'a> {
    fn new(s1: &'a [char], s2: &'a [char]) -> Self {
        let (m, n) = (s1.len(), s2.len());
        Self {
            s1,
            s2,
            table: DpTable::new(m, n),
            steps: Vec::with_capacity(step_count(m, n)),
        }
    }

    fn run(&mut self) {
        let (m, n) = (self.s1.len(), self.s2.len());

        self.emit(
            Phase::InitM,
            None,
            0,
            None,
            Vec::new(),
            VarState {
                m: Some(m),
                ..VarState::default()
            },
        );
        self.emit(
            Phase::InitN,
            None,
            0,
            None,
            Vec::new(),
            VarState {
                m: Some(m),
                n: Some(n),
                ..VarState::default()
            },
        );
        self.emit(
            Phase::InitTable,
            None,
            0,
            None,
            Vec::new(),
            VarState {
                m: Some(m),
                n: Some(n),
                ..VarState::default()
            },
        );

        for i in 1..=m {
            self.emit(
                Phase::LoopRow,
                None,
                0,
                None,
                Vec::new(),
                VarState {
                    m: Some(m),
                    n: Some(n),
                    i: Some(i),
                    ..VarState::default()
                },
            );

            for j in 1..=n {
                self.emit(
                    Phase::LoopCol,
                    None,
                    0,
                    None,
                    Vec::new(),
                    VarState {
                        m: Some(m),
                        n: Some(n),
                        i: Some(i),
                        j: Some(j),
                        ..VarState::default()
                    },
                );

                let cell = Position::new(i, j);
                let char1 = self.s1[i - 1];
                let char2 = self.s2[j - 1];
                self.emit(
                    Phase::Compare,
                    Some(cell),
                    0,
                    None,
                    Vec::new(),
                    VarState {
                        m: Some(m),
                        n: Some(n),
                        i: Some(i),
                        j: Some(j),
                        char1: Some(char1),
                        char2: Some(char2),
                        ..VarState::default()
                    },
                );

                let computed = evaluate(self.s1, self.s2, &self.table, i, j);
                self.table.set(i, j, computed.value);

                let mut vars = VarState {
                    m: Some(m),
                    n: Some(n),
                    i: Some(i),
                    j: Some(j),
                    char1: Some(char1),
                    char2: Some(char2),
                    dp_value: Some(computed.value),
                    ..VarState::default()
                };
                let phase = match &computed.transition {
                    Transition::Match => {
                        vars.diag_value = Some(self.table.get(i - 1, j - 1));
                        Phase::MatchAssign
                    }
                    Transition::FromTop(info) | Transition::FromLeft(info) => {
                        vars.top_value = Some(info.top_value);
                        vars.left_value = Some(info.left_value);
                        Phase::MismatchAssign
                    }
                };
                self.emit(
                    phase,
                    Some(cell),
                    computed.value,
                    Some(computed.transition),
                    computed.source_cells,
                    vars,
                );
            }
        }

        let final_value = self.table.corner();
        self.emit(
            Phase::Return,
            Some(Position::new(m, n)),
            final_value,
            None,
            Vec::new(),
            VarState {
                m: Some(m),
                n: Some(n),
                dp_value: Some(final_value),
                ..VarState::default()
            },
        );

        debug_assert_eq!(self.steps.len(), step_count(m, n));
    }

    fn emit(
        &mut self,
        phase: Phase,
        cell: Option<Position>,
        value: u32,
        transition: Option<Transition>,
        source_cells: Vec<Position>,
        vars: VarState,
    ) {
        let char1 = cell.filter(|p| p.row >= 1).map(|p| self.s1[p.row - 1]);
        let char2 = cell.filter(|p| p.col >= 1).map(|p| self.s2[p.col - 1]);
        self.steps.push(AnimationStep {
            cell,
            value,
            transition,
            char1,
            char2,
            source_cells,
            snapshot: self.table.clone(),
            phase,
            vars,
        });
    }
}
