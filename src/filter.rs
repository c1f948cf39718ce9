//! Filter expression parser using chumsky.
//!
//! Parses record predicates over the raw text columns, like:
//! - `FILTER startswith "PASS"`
//! - `!(INFO contains "BND")`
//! - `!(SAMPLE contains "./.") && !(SAMPLE contains "1|1")`
//! - `ID == "Sniffles2.DEL.1" || CHROM != "chrM"`

use chumsky::prelude::*;

use crate::row::Column;

/// Binary operators for comparisons and logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Comparison
    Eq,         // ==
    NotEq,      // !=
    Contains,   // contains (substring)
    StartsWith, // startswith (prefix)

    // Logical
    And, // &&
    Or,  // ||
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not, // !
}

/// A filter expression AST node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A string literal.
    String(String),
    /// A boolean literal.
    Bool(bool),
    /// The text of a record column.
    Column(Column),
    /// A binary operation.
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// A unary operation.
    Unary(UnaryOp, Box<Expr>),
}

/// The named record filters of the statistics pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Keep records whose FILTER starts with PASS.
    PassOnly,
    /// Drop records with a single supporting read (`RE=1`).
    RemoveRe,
    /// Drop breakend records.
    RemoveBnd,
    /// Drop records with a missing genotype (`./.`).
    RemoveUnphased,
    /// Drop missing genotypes and homozygous phased `1|1` genotypes.
    KeepHaploidOnly,
}

impl Preset {
    /// The filter expression implementing this preset.
    pub fn expression(&self) -> &'static str {
        match self {
            Preset::PassOnly => r#"FILTER startswith "PASS""#,
            Preset::RemoveRe => r#"!(INFO contains "RE=1")"#,
            Preset::RemoveBnd => r#"!(INFO contains "BND")"#,
            Preset::RemoveUnphased => r#"!(SAMPLE contains "./.")"#,
            Preset::KeepHaploidOnly => {
                r#"!(SAMPLE contains "./.") && !(SAMPLE contains "1|1")"#
            }
        }
    }
}

/// Create the filter expression parser.
pub fn parser() -> impl Parser<char, Expr, Error = Simple<char>> {
    recursive(|full_expr| {
        // String literal (double-quoted)
        let string = just('"')
            .ignore_then(filter(|c| *c != '"').repeated())
            .then_ignore(just('"'))
            .collect::<String>()
            .map(Expr::String)
            .padded();

        // Boolean literal
        let boolean = choice((
            text::keyword("true").to(Expr::Bool(true)),
            text::keyword("false").to(Expr::Bool(false)),
        ))
        .padded();

        // Column name
        let column = text::ident()
            .try_map(|name: String, span| {
                name.parse::<Column>()
                    .map(Expr::Column)
                    .map_err(|msg| Simple::custom(span, msg))
            })
            .padded();

        // Parenthesized expression (uses full_expr recursively)
        let paren_expr = just('(')
            .padded()
            .ignore_then(full_expr)
            .then_ignore(just(')').padded());

        // Atoms: literals, columns, or parenthesized expressions
        let atom = choice((boolean, string, paren_expr, column));

        // Unary operators (!)
        let unary = just('!')
            .padded()
            .repeated()
            .then(atom)
            .foldr(|_op, expr| Expr::Unary(UnaryOp::Not, Box::new(expr)));

        // Comparison operators
        let cmp_op = choice((
            just("==").to(BinaryOp::Eq),
            just("!=").to(BinaryOp::NotEq),
            text::keyword("contains").to(BinaryOp::Contains),
            text::keyword("startswith").to(BinaryOp::StartsWith),
        ))
        .padded();

        // Comparison expressions
        let comparison = unary
            .clone()
            .then(cmp_op.then(unary).repeated())
            .foldl(|left, (op, right)| Expr::Binary(Box::new(left), op, Box::new(right)));

        // Logical AND (&&)
        let and_op = just("&&").padded().to(BinaryOp::And);
        let and_expr = comparison
            .clone()
            .then(and_op.then(comparison).repeated())
            .foldl(|left, (op, right)| Expr::Binary(Box::new(left), op, Box::new(right)));

        // Logical OR (||)
        let or_op = just("||").padded().to(BinaryOp::Or);
        and_expr
            .clone()
            .then(or_op.then(and_expr).repeated())
            .foldl(|left, (op, right)| Expr::Binary(Box::new(left), op, Box::new(right)))
    })
    .then_ignore(end())
}

/// Parse a filter expression string into an AST.
pub fn parse_filter(filter: &str) -> Result<Expr, Vec<Simple<char>>> {
    parser().parse(filter)
}
