use std::fmt::Display;

use crate::Span;

/// An operator name recognised by the scanner.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Mul,
    Do,
    Dont,
}

impl Operator {
    /// Number of integer operands the operator takes between its parentheses.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Mul => 2,
            Operator::Do | Operator::Dont => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Mul => "mul",
            Operator::Do => "do",
            Operator::Dont => "don't",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The two operands of a matched `mul(<int>,<int>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorCall {
    pub left: i64,
    pub right: i64,
    pub span: Span,
}

impl OperatorCall {
    pub fn pair(&self) -> (i64, i64) {
        (self.left, self.right)
    }

    pub fn product(&self) -> i128 {
        self.left as i128 * self.right as i128
    }
}

impl Display for OperatorCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mul({},{})", self.left, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Mul(OperatorCall),
    Do(Span),
    Dont(Span),
}

impl Instruction {
    pub fn operator(&self) -> Operator {
        match self {
            Instruction::Mul(_) => Operator::Mul,
            Instruction::Do(_) => Operator::Do,
            Instruction::Dont(_) => Operator::Dont,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Instruction::Mul(call) => call.span,
            Instruction::Do(span) | Instruction::Dont(span) => *span,
        }
    }

    pub fn as_call(&self) -> Option<&OperatorCall> {
        match self {
            Instruction::Mul(call) => Some(call),
            _ => None,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Mul(call) => write!(f, "{}", call),
            Instruction::Do(_) | Instruction::Dont(_) => write!(f, "{}()", self.operator()),
        }
    }
}
