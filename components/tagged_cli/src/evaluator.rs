//! Statement evaluation over tagged numbers
//!
//! Statements are whitespace-separated tokens in one of these forms:
//!
//! - `OPERAND`
//! - `UNOP OPERAND` (`~`, `!`, `-`)
//! - `OPERAND BINOP OPERAND`
//! - `NAME = EXPR`
//! - `NAME OP= OPERAND`
//! - `NAME++`, `NAME--`, `++NAME`, `--NAME`
//!
//! An operand is a literal, a bound variable name, or anything else, which
//! evaluates to the Invalid value.

use crate::error::{CliError, CliResult};
use std::collections::BTreeMap;
use tagged_number::{BinaryOp, TaggedNumber, UnaryOp, INVALID_NUMBER};

/// Evaluates statements and keeps variable bindings between them
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Whether formatted results carry the kind name
    show_kind: bool,
    /// Variable bindings, sorted by name
    variables: BTreeMap<String, TaggedNumber>,
}

impl Evaluator {
    /// Create an evaluator with no bindings
    ///
    /// # Example
    /// ```
    /// use tagged_cli::Evaluator;
    ///
    /// let evaluator = Evaluator::new();
    /// assert!(evaluator.variables().is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the kind name to formatted results
    pub fn with_show_kind(mut self, enabled: bool) -> Self {
        self.show_kind = enabled;
        self
    }

    /// Check if kind names are shown
    pub fn is_show_kind_enabled(&self) -> bool {
        self.show_kind
    }

    /// Look up a bound variable
    pub fn variable(&self, name: &str) -> Option<TaggedNumber> {
        self.variables.get(name).copied()
    }

    /// All bindings, sorted by name
    pub fn variables(&self) -> &BTreeMap<String, TaggedNumber> {
        &self.variables
    }

    /// Format a result for display
    pub fn format_value(&self, value: &TaggedNumber) -> String {
        if self.show_kind {
            format!("{} : {}", value, value.kind())
        } else {
            value.to_string()
        }
    }

    /// Execute a file of statements
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or a statement fails
    pub fn execute_file(&mut self, path: &str) -> CliResult<Vec<TaggedNumber>> {
        let source = std::fs::read_to_string(path)?;
        self.execute_source(&source)
    }

    /// Execute statements separated by `;` or newlines
    ///
    /// Blank statements and lines starting with `#` are skipped. Returns the
    /// value of every executed statement, stopping at the first error.
    ///
    /// # Example
    /// ```
    /// use tagged_cli::Evaluator;
    /// use tagged_number::TaggedNumber;
    ///
    /// let mut evaluator = Evaluator::new();
    /// let results = evaluator.execute_source("x = 3.5 ; x * 2").unwrap();
    /// assert_eq!(results.last(), Some(&TaggedNumber::Float(7.0)));
    /// ```
    pub fn execute_source(&mut self, source: &str) -> CliResult<Vec<TaggedNumber>> {
        let mut results = Vec::new();
        for line in source.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            for statement in line.split(';') {
                if statement.trim().is_empty() {
                    continue;
                }
                results.push(self.execute_statement(statement)?);
            }
        }
        Ok(results)
    }

    /// Execute a single statement
    ///
    /// # Errors
    /// Returns `CliError` for statements that match no supported form,
    /// reads of unbound variables, assignments to non-names and integer
    /// division or remainder by zero. A failed statement leaves every
    /// binding unchanged.
    pub fn execute_statement(&mut self, statement: &str) -> CliResult<TaggedNumber> {
        let tokens: Vec<&str> = statement.split_whitespace().collect();
        let value = match tokens.as_slice() {
            [] => return Err(CliError::Parse("empty statement".to_string())),
            [single] => match step_target(single) {
                Some((name, step)) => self.step(name, step)?,
                None => self.operand(single)?,
            },
            [target, "=", expression @ ..] => {
                let value = self.expression(expression)?;
                self.assign(target, value)?
            }
            [target, symbol, operand] => match BinaryOp::from_compound_symbol(symbol) {
                Some(op) => {
                    let current = self.bound(target)?;
                    let rhs = self.operand(operand)?;
                    let value = binary(op, current, rhs, statement)?;
                    self.assign(target, value)?
                }
                None => self.expression(&tokens)?,
            },
            expression => self.expression(expression)?,
        };
        tracing::debug!(statement = statement.trim(), result = %value, kind = %value.kind(), "evaluated");
        Ok(value)
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    fn expression(&self, tokens: &[&str]) -> CliResult<TaggedNumber> {
        match tokens {
            [operand] => self.operand(operand),
            [symbol, operand] => {
                let op = UnaryOp::from_symbol(symbol)
                    .ok_or_else(|| CliError::Parse(format!("unknown prefix operator {:?}", symbol)))?;
                Ok(op.apply(self.operand(operand)?))
            }
            [lhs, symbol, rhs] => {
                let op = BinaryOp::from_symbol(symbol)
                    .ok_or_else(|| CliError::Parse(format!("unknown operator {:?}", symbol)))?;
                binary(op, self.operand(lhs)?, self.operand(rhs)?, &tokens.join(" "))
            }
            _ => Err(CliError::Parse(format!(
                "expected OPERAND, UNOP OPERAND or OPERAND BINOP OPERAND, got {} tokens",
                tokens.len()
            ))),
        }
    }

    fn operand(&self, token: &str) -> CliResult<TaggedNumber> {
        let literal = TaggedNumber::from_text(token);
        if literal.is_valid() {
            return Ok(literal);
        }
        if is_identifier(token) {
            return self.bound(token);
        }
        Ok(INVALID_NUMBER)
    }

    fn bound(&self, name: &str) -> CliResult<TaggedNumber> {
        if !is_identifier(name) {
            return Err(CliError::NotAssignable(name.to_string()));
        }
        self.variable(name)
            .ok_or_else(|| CliError::UndefinedVariable(name.to_string()))
    }

    fn assign(&mut self, name: &str, value: TaggedNumber) -> CliResult<TaggedNumber> {
        if !is_identifier(name) || TaggedNumber::from_text(name).is_valid() {
            return Err(CliError::NotAssignable(name.to_string()));
        }
        self.variables.insert(name.to_string(), value);
        Ok(value)
    }

    fn step(&mut self, name: &str, step: Step) -> CliResult<TaggedNumber> {
        let mut value = self.bound(name)?;
        match step {
            Step::Increment => value.increment(),
            Step::Decrement => value.decrement(),
        }
        self.assign(name, value)
    }
}

/// Apply `op`, reporting an integer zero divisor instead of trapping.
fn binary(
    op: BinaryOp,
    lhs: TaggedNumber,
    rhs: TaggedNumber,
    statement: &str,
) -> CliResult<TaggedNumber> {
    op.checked_apply(lhs, rhs)
        .ok_or_else(|| CliError::DivisionByZero(statement.trim().to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Increment,
    Decrement,
}

/// Split `x++`, `++x`, `x--` and `--x` into the name and the step.
fn step_target(token: &str) -> Option<(&str, Step)> {
    let (name, step) = if let Some(name) = token.strip_suffix("++") {
        (name, Step::Increment)
    } else if let Some(name) = token.strip_suffix("--") {
        (name, Step::Decrement)
    } else if let Some(name) = token.strip_prefix("++") {
        (name, Step::Increment)
    } else if let Some(name) = token.strip_prefix("--") {
        (name, Step::Decrement)
    } else {
        return None;
    };
    is_identifier(name).then_some((name, step))
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
