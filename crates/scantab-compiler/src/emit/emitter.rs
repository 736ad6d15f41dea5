//! Core emitter struct and the emission pipeline.

use indexmap::IndexMap;
use scantab_core::{ActionId, Automaton, CharClasses, IntervalSet, StateId, TransitionMatrix};

use crate::group::{TransitionGroup, group_transitions};
use crate::pack::{Codec, HiLowCodec, Packed, PackedArray, RunLengthCodec};
use crate::reduce::{Reduction, compact, reduce_columns, reduce_rows};
use crate::syntax::{TargetSyntax, Type};

use super::{Config, EmitError, Mode};

/// Attribute bit: the state accepts.
pub const FINAL: i32 = 1;

/// Attribute bit: the state has no outgoing transitions.
pub const NO_LOOKAHEAD: i32 = 8;

/// Values per line of the unpacked transition table.
const TRANS_PER_LINE: usize = 10;

/// Values per line of the unpacked character map.
const CMAP_PER_LINE: usize = 16;

/// Generated source for one table, or for the transition switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// Constant name (`ZZ_TRANS`), or `switch` for the dispatch code.
    pub name: String,
    pub text: String,
    /// Raw packed form, when the table was packed.
    pub packed: Option<Packed>,
}

impl Fragment {
    pub fn chunk_count(&self) -> usize {
        self.packed.as_ref().map_or(0, Packed::chunk_count)
    }
}

/// Collapse `(count, value)` items into runs of equal consecutive values.
fn runs(items: impl IntoIterator<Item = (usize, i32)>) -> Vec<(usize, i32)> {
    let mut out: Vec<(usize, i32)> = Vec::new();
    for (count, value) in items {
        if count == 0 {
            continue;
        }
        match out.last_mut() {
            Some((total, last)) if *last == value => *total += count,
            _ => out.push((count, value)),
        }
    }
    out
}

fn doc_comment(text: &str) -> String {
    format!("\n  /**\n   * {text}\n   */")
}

/// Table emitter for one automaton.
pub struct Emitter<'a> {
    automaton: &'a Automaton,
    classes: &'a CharClasses,
    syntax: &'a dyn TargetSyntax,
    config: Config,
    columns: Reduction,
}

impl<'a> Emitter<'a> {
    /// Reduces the matrix columns up front; everything else reads `columns`.
    pub fn new(
        automaton: &'a Automaton,
        classes: &'a CharClasses,
        syntax: &'a dyn TargetSyntax,
        config: Config,
    ) -> Self {
        Self {
            automaton,
            classes,
            syntax,
            config,
            columns: reduce_columns(automaton.matrix()),
        }
    }

    pub fn columns(&self) -> &Reduction {
        &self.columns
    }

    fn matrix(&self) -> &'a TransitionMatrix {
        self.automaton.matrix()
    }

    /// Emit every fragment in declaration order.
    pub fn emit(&self) -> Result<Vec<Fragment>, EmitError> {
        self.check_classes()?;

        let mut fragments = vec![self.char_map()?, self.action_table()?];
        match self.config.mode {
            Mode::RowMap => {
                let rows = reduce_rows(self.matrix(), &self.columns);
                fragments.push(self.row_map(&rows)?);
                fragments.push(self.transition_table(&rows)?);
                fragments.push(self.attributes()?);
            }
            Mode::Switch => fragments.push(self.transition_switch()),
        }
        Ok(fragments)
    }

    fn check_classes(&self) -> Result<(), EmitError> {
        let num_classes = self.matrix().num_classes();
        if self.classes.num_classes() > num_classes {
            return Err(EmitError::ClassOutOfRange {
                class: num_classes as u32,
                num_classes,
            });
        }
        Ok(())
    }

    fn pack<C: Codec>(
        &self,
        name: &str,
        doc: &str,
        codec: C,
        items: impl IntoIterator<Item = C::Item>,
    ) -> Result<Fragment, EmitError> {
        let mut array = PackedArray::new(name, codec, self.syntax, self.config.pack)
            .visibility(self.config.visibility);
        for item in items {
            array.push(item).map_err(|source| EmitError::Pack {
                array: crate::pack::const_name(name),
                source,
            })?;
        }
        let packed = array.finish();
        Ok(Fragment {
            name: packed.const_name(),
            text: format!("{}{}", doc_comment(doc), packed.text),
            packed: Some(packed),
        })
    }

    fn plain_array(
        &self,
        name: &str,
        element: Type,
        values: &[String],
        per_line: usize,
    ) -> String {
        let s = self.syntax;
        let mut out = String::from("  ");
        out.push_str(&s.field(
            self.config.visibility,
            true,
            false,
            &Type::array_of(element.clone()),
            name,
            &s.array_literal_start(&element),
        ));
        out.push('\n');
        if !values.is_empty() {
            let lines: Vec<String> = values
                .chunks(per_line)
                .map(|line| format!("    {}", line.join(", ")))
                .collect();
            out.push_str(&lines.join(",\n"));
            out.push('\n');
        }
        out.push_str("  ");
        out.push_str(&s.statement(&s.array_literal_stop()));
        out.push('\n');
        out
    }

    /// `ZZ_CMAP`: character code to reduced class.
    fn char_map(&self) -> Result<Fragment, EmitError> {
        const DOC: &str = "Translates characters to character classes";
        let intervals = self.classes.intervals();
        let column = |class: u32| self.columns.map[class as usize] as i32;

        if self.classes.max_char() < 256 {
            let values: Vec<String> = intervals
                .iter()
                .flat_map(|ci| std::iter::repeat_n(column(ci.class), ci.size() as usize))
                .map(|v| format!("{v:>2}"))
                .collect();
            let text = format!(
                "{}\n{}",
                doc_comment(DOC),
                self.plain_array("ZZ_CMAP", Type::Char, &values, CMAP_PER_LINE)
            );
            return Ok(Fragment {
                name: "ZZ_CMAP".to_string(),
                text,
                packed: None,
            });
        }

        let items = runs(
            intervals
                .iter()
                .map(|ci| (ci.size() as usize, column(ci.class))),
        );
        self.pack("CMap", DOC, RunLengthCodec::new(), items)
    }

    /// `ZZ_ACTION`: state to action number, numbered by first appearance from 1.
    fn action_table(&self) -> Result<Fragment, EmitError> {
        let mut numbers: IndexMap<ActionId, i32> = IndexMap::new();
        let mut values = Vec::with_capacity(self.automaton.num_states());
        for state in 0..self.automaton.num_states() {
            let value = match self.automaton.action(state) {
                Some(action) if self.automaton.is_final(state) => {
                    let next = numbers.len() as i32 + 1;
                    *numbers.entry(action).or_insert(next)
                }
                _ => 0,
            };
            values.push((1, value));
        }
        log::debug!("{} distinct actions", numbers.len());

        self.pack(
            "Action",
            "Translates DFA states to action switch labels.",
            RunLengthCodec::new(),
            runs(values),
        )
    }

    /// `ZZ_ROWMAP`: state to the offset of its row in `ZZ_TRANS`.
    fn row_map(&self, rows: &Reduction) -> Result<Fragment, EmitError> {
        let offsets = rows
            .map
            .iter()
            .enumerate()
            .map(|(state, &row)| {
                let offset = row * self.columns.len;
                u32::try_from(offset).map_err(|_| EmitError::RowOffsetOverflow { state, offset })
            })
            .collect::<Result<Vec<u32>, EmitError>>()?;

        self.pack(
            "RowMap",
            "Translates a state to a row index in the transition table",
            HiLowCodec,
            offsets,
        )
    }

    /// `ZZ_TRANS`: surviving rows by surviving columns, `-1` for no transition.
    fn transition_table(&self, rows: &Reduction) -> Result<Fragment, EmitError> {
        const DOC: &str = "The transition table of the DFA";
        let reduced = compact(self.matrix(), rows, &self.columns);
        let cells = (0..reduced.num_states())
            .flat_map(|s| (0..reduced.num_classes()).map(move |c| (s, c)))
            .map(|(s, c)| reduced.get_flat(s, c));

        if !self.config.packed {
            let values: Vec<String> = cells.map(|v| v.to_string()).collect();
            return Ok(Fragment {
                name: "ZZ_TRANS".to_string(),
                text: format!(
                    "{}\n{}",
                    doc_comment(DOC),
                    self.plain_array("ZZ_TRANS", Type::Int, &values, TRANS_PER_LINE)
                ),
                packed: None,
            });
        }

        let items = runs(cells.map(|v| (1, v)));
        self.pack("Trans", DOC, RunLengthCodec::with_translation(1), items)
    }

    /// `ZZ_ATTRIBUTE`: `FINAL` and `NO_LOOKAHEAD` bits per state.
    fn attributes(&self) -> Result<Fragment, EmitError> {
        let values = (0..self.automaton.num_states()).map(|state| {
            let mut attribute = 0;
            if self.automaton.is_final(state) {
                attribute |= FINAL;
            }
            if !self.matrix().has_outgoing(state) {
                attribute |= NO_LOOKAHEAD;
            }
            (1, attribute)
        });

        self.pack(
            "Attribute",
            "ZZ_ATTRIBUTE[aState] contains the attributes of state aState",
            RunLengthCodec::new(),
            runs(values),
        )
    }

    /// Labels for a set of reduced classes, one per class unless the syntax
    /// can express a range.
    fn case_values(&self, set: &IntervalSet) -> Vec<String> {
        let mut values = Vec::new();
        for interval in set {
            let (lo, hi) = (interval.start(), interval.end());
            match self.syntax.case_range(lo, hi) {
                Some(range) if lo < hi => values.push(range),
                _ => values.extend((lo..=hi).map(|c| c.to_string())),
            }
        }
        values
    }

    fn case_head(&self, values: &[String]) -> String {
        let mut head = String::new();
        for (i, value) in values.iter().enumerate() {
            if i == 0 {
                head.push_str(&self.syntax.start_case(value));
            } else {
                head.push_str(&self.syntax.add_case(value));
            }
        }
        head.push_str(&self.syntax.start_case_body());
        head
    }

    /// Body of a branch from `state` to `target`.
    fn branch(&self, state: usize, target: Option<StateId>) -> String {
        let s = self.syntax;
        let Some(next) = target else {
            return format!("{};", s.break_block("zzForAction"));
        };

        let mut body = String::new();
        if self.automaton.is_final(next as usize) {
            body.push_str("zzIsFinal = true; ");
        }
        if !self.matrix().has_outgoing(next as usize) {
            body.push_str("zzNoLookAhead = true; ");
        }
        if next as usize != state {
            body.push_str(&format!("zzState = {next}; "));
        }
        body.push_str(&s.break_block("zzForNext"));
        body.push(';');
        body
    }

    /// Dispatch on `zzState`, then on the reduced input class `zzInput`.
    fn transition_switch(&self) -> Fragment {
        let s = self.syntax;
        let mut out = Lines(String::from("\n"));

        out.line(10, &s.statement(&s.local(true, &Type::Boolean, "zzIsFinal", "false")));
        out.line(10, &s.statement(&s.local(true, &Type::Boolean, "zzNoLookAhead", "false")));
        out.line(0, "");
        out.line(
            10,
            &format!(
                "{}{}{{",
                s.start_label_block("zzForNext"),
                s.switch_header("zzState")
            ),
        );

        for group in group_transitions(self.matrix(), &self.columns) {
            self.emit_state(&mut out, &group);
        }

        out.case(
            s,
            12,
            &format!("{}{}", s.gen_default(), s.start_case_body()),
            &s.statement("zzScanError(ZZ_UNKNOWN_ERROR)"),
        );
        out.line(10, &format!("}} {}", s.end_label_block("zzForNext")));

        Fragment {
            name: "switch".to_string(),
            text: out.0,
            packed: None,
        }
    }

    fn emit_state(&self, out: &mut Lines, group: &TransitionGroup) {
        let s = self.syntax;
        let state = group.state();

        out.head(12, &self.case_head(&[state.to_string()]));
        out.line(14, &format!("{}{{", s.switch_header("zzInput")));

        for (target, set) in group.explicit() {
            let head = self.case_head(&self.case_values(set));
            out.case(s, 16, &head, &self.branch(state, target));
        }
        out.case(
            s,
            16,
            &format!("{}{}", s.gen_default(), s.start_case_body()),
            &self.branch(state, group.default_target()),
        );

        out.line(14, &format!("}} {}", s.end_case_body()));
        out.line(0, "");
    }
}

/// Indented line sink for the switch fragment.
struct Lines(String);

impl Lines {
    fn line(&mut self, indent: usize, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            self.0.push_str(&" ".repeat(indent));
            self.0.push_str(text);
        }
        self.0.push('\n');
    }

    /// Case labels may span several lines (one label per line in Java).
    fn head(&mut self, indent: usize, head: &str) {
        for part in head.lines() {
            self.line(indent, part);
        }
    }

    fn case(&mut self, syntax: &dyn TargetSyntax, indent: usize, head: &str, body: &str) {
        self.head(indent, head);
        self.line(indent + 2, body);
        let end = syntax.end_case_body();
        if !end.is_empty() {
            self.line(indent, &end);
        }
    }
}

/// Emit all fragments and concatenate them.
pub fn emit(
    automaton: &Automaton,
    classes: &CharClasses,
    syntax: &dyn TargetSyntax,
    config: &Config,
) -> Result<String, EmitError> {
    let fragments = Emitter::new(automaton, classes, syntax, *config).emit()?;
    Ok(fragments.into_iter().map(|f| f.text).collect())
}
