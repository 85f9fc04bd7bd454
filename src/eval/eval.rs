use crate::ast::ast::{Instruction, OperatorCall};

/// Running state while executing a sequence of instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    total: i128,
    enabled: bool,
    /// When set, toggles are recorded but every `mul` still counts
    freeze_enabled: bool,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            total: 0,
            enabled: true,
            freeze_enabled: true,
        }
    }
}

impl Context {
    /// A context in which `do()` and `don't()` have no effect on the total.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context in which `don't()` suspends `mul` until the next `do()`.
    pub fn new_gated() -> Self {
        Context {
            freeze_enabled: false,
            ..Default::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.freeze_enabled || self.enabled
    }

    pub fn total(&self) -> i128 {
        self.total
    }

    pub fn execute(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::Mul(call) => {
                if self.is_enabled() {
                    self.total = self.total.saturating_add(call.product());
                }
            }
            Instruction::Do(_) => self.enabled = true,
            Instruction::Dont(_) => self.enabled = false,
        }
    }
}

/// Sum of `left * right` over every call.
pub fn sum_of_products(calls: &[OperatorCall]) -> i128 {
    calls
        .iter()
        .fold(0i128, |total, call| total.saturating_add(call.product()))
}

/// Executes `instructions` in order against `context` and returns the final total.
pub fn sum_of_program(instructions: &[Instruction], mut context: Context) -> i128 {
    for instruction in instructions {
        context.execute(instruction);
    }

    context.total()
}
