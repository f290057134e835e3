//! Runtime values and per-statement results.

use std::fmt;


/// A runtime value.
///
/// Programs only ever bind integers. `Bool` comes from `is`, and `Absent`
/// is what a `de` statement reports for a name that was never declared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Absent,
}

impl Value {
    /// Truthiness used by `if`.
    #[inline]
    pub fn is_truthy(self) -> bool {
        match self {
            Value::Int(n) => n != 0,
            Value::Bool(b) => b,
            Value::Absent => false,
        }
    }

}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Absent => f.write_str("Undefined"),
        }
    }
}

/// Result of evaluating one statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// Declarations yield the bound value; `de` yields what it printed.
    Value(Value),
    /// A taken `if`: one outcome per body statement.
    Branch(Vec<Outcome>),
    /// An `if` whose condition was false.
    Skipped,
}

// Branches nest as deep as the `if` tree that produced them.
impl Drop for Outcome {
    fn drop(&mut self) {
        let Outcome::Branch(outcomes) = self else {
            return;
        };
        let mut pending = std::mem::take(outcomes);
        while let Some(mut outcome) = pending.pop() {
            if let Outcome::Branch(outcomes) = &mut outcome {
                pending.append(outcomes);
            }
        }
    }
}
