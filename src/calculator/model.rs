use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(f64);

impl Operand {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// A fully validated calculation.
///
/// Only the command layer builds these, and only after every gate has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    operation: Operation,
    operand1: Operand,
    operand2: Operand,
}

impl CalculationRequest {
    pub(crate) fn new(operation: Operation, operand1: Operand, operand2: Operand) -> Self {
        Self {
            operation,
            operand1,
            operand2,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operand1(&self) -> Operand {
        self.operand1
    }

    pub fn operand2(&self) -> Operand {
        self.operand2
    }
}
