//! Abstract syntax tree for ye programs.
//!
//! The tree is built once by the parser and never mutated afterwards.
//! Statement and expression positions are separate types, so a statement can
//! never appear where an expression is expected.

use std::fmt;


/// Binary operators. `Is` is the equality comparison used by `if`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Is,
}

impl BinaryOp {
    /// Operators allowed between the operands of an expression.
    pub const ARITHMETIC: [BinaryOp; 4] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Is => "is",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "is" => Some(BinaryOp::Is),
            _ => None,
        }
    }

    #[inline]
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, BinaryOp::Is)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Root of a parsed program.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }
}

/// A statement. Bare `;` statements are dropped by the parser and have no node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Stmt {
    /// `ye name = value;`
    VariableDeclaration { name: String, value: Expr },
    /// `de name;`
    Debug { name: String },
    /// `if left is right { consequent }`
    ///
    /// `condition` is always an [`Expr::Binary`] with [`BinaryOp::Is`] when
    /// produced by the parser. There is no `else` branch.
    If { condition: Expr, consequent: Vec<Stmt> },
}

impl Stmt {
    pub fn declare(name: impl Into<String>, value: Expr) -> Self {
        Stmt::VariableDeclaration {
            name: name.into(),
            value,
        }
    }

    pub fn debug(name: impl Into<String>) -> Self {
        Stmt::Debug { name: name.into() }
    }

    /// `if left is right { consequent }`.
    pub fn if_is(left: Expr, right: Expr, consequent: Vec<Stmt>) -> Self {
        Stmt::If {
            condition: Expr::binary(BinaryOp::Is, left, right),
            consequent,
        }
    }
}

// Nested `if` bodies are unbounded, so dropping them must not recurse.
impl Drop for Stmt {
    fn drop(&mut self) {
        let Stmt::If { consequent, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(consequent);
        while let Some(mut stmt) = pending.pop() {
            if let Stmt::If { consequent, .. } = &mut stmt {
                pending.append(consequent);
            }
        }
    }
}

/// An expression: a literal, a variable reference, or one binary operation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expr {
    Literal(i64),
    Identifier(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
