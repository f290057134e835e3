//! Canonical source formatter for ye.
//!
//! Rebuilds source text from a [`Program`]: one statement per line, four
//! spaces per nesting level, single spaces around operators. Formatting any
//! tree the parser produced and parsing the result gives the same tree back.
//!
//! Trees built by hand can hold things source text cannot spell, such as
//! negative literals or an `if` condition that is not an `is` comparison.
//! Those are printed as-is and will not parse.

use ye_ir::{Expr, Keyword, Program, Stmt};

#[cfg(test)]
mod tests;

const INDENT: &str = "    ";

/// Format a whole program.
pub fn format_program(program: &Program) -> String {
    let mut formatter = Formatter::new();
    formatter.statements(&program.statements);
    formatter.finish()
}

/// Format one expression with no trailing newline.
pub fn format_expr(expr: &Expr) -> String {
    let mut formatter = Formatter::new();
    formatter.expr(expr);
    formatter.finish()
}

struct Formatter {
    out: String,
    depth: usize,
}

impl Formatter {
    fn new() -> Self {
        Formatter {
            out: String::new(),
            depth: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    fn statements(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.indent();
            self.stmt(stmt);
            self.out.push('\n');
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VariableDeclaration { name, value } => {
                self.out.push_str(Keyword::Ye.as_str());
                self.out.push(' ');
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.expr(value);
                self.out.push(';');
            }
            Stmt::Debug { name } => {
                self.out.push_str(Keyword::De.as_str());
                self.out.push(' ');
                self.out.push_str(name);
                self.out.push(';');
            }
            Stmt::If {
                condition,
                consequent,
            } => {
                self.out.push_str(Keyword::If.as_str());
                self.out.push(' ');
                self.expr(condition);
                if consequent.is_empty() {
                    self.out.push_str(" {}");
                    return;
                }
                self.out.push_str(" {\n");
                self.depth += 1;
                ye_stack::ensure_sufficient_stack(|| self.statements(consequent));
                self.depth -= 1;
                self.indent();
                self.out.push('}');
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(n) => self.out.push_str(&n.to_string()),
            Expr::Identifier(name) => self.out.push_str(name),
            Expr::Binary { op, left, right } => {
                ye_stack::ensure_sufficient_stack(|| self.expr(left));
                self.out.push(' ');
                self.out.push_str(op.symbol());
                self.out.push(' ');
                ye_stack::ensure_sufficient_stack(|| self.expr(right));
            }
        }
    }
}

