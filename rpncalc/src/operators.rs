#![deny(warnings)]

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
}

/// An entry in the operator table. Lower `precedence` binds tighter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Operator {
    pub symbol: &'static str,
    pub precedence: u8,
    pub assoc: Assoc,
}

impl Operator {
    const fn new(symbol: &'static str, precedence: u8) -> Self {
        Operator{symbol, precedence, assoc: Assoc::Left}
    }

    /// `self` is applied before `other` when they compete for an operand.
    pub fn tighter_than(&self, other: &Operator) -> bool {
        self.precedence < other.precedence
    }

    pub fn equal_precedence(&self, other: &Operator) -> bool {
        self.precedence == other.precedence
    }

    pub fn is_left_associative(&self) -> bool {
        self.assoc == Assoc::Left
    }

    pub fn is_oparen(&self) -> bool { self.symbol == "(" }
    pub fn is_cparen(&self) -> bool { self.symbol == ")" }
}

const MUL_TIER: u8 = 3;
const ADD_TIER: u8 = 4;
// parens only delimit scope, they never get compared arithmetically
const PAREN_TIER: u8 = 9;

static STANDARD: [Operator; 7] = [
    Operator::new("+", ADD_TIER),
    Operator::new("-", ADD_TIER),
    Operator::new("*", MUL_TIER),
    Operator::new("/", MUL_TIER),
    Operator::new("%", MUL_TIER),
    Operator::new("(", PAREN_TIER),
    Operator::new(")", PAREN_TIER),
];

/// Read-only symbol table consulted by the converter.
#[derive(Debug)]
pub struct OperatorTable {
    ops: &'static [Operator],
}

static STANDARD_TABLE: OperatorTable = OperatorTable{ops: &STANDARD};

impl OperatorTable {
    /// The fixed arithmetic table: `+ -` < `* / %`, parens as markers.
    pub fn standard() -> &'static OperatorTable {
        &STANDARD_TABLE
    }

    pub fn lookup(&self, symbol: &str) -> Option<Operator> {
        self.ops.iter().find(|op| op.symbol == symbol).copied()
    }
}

///////////////////////////////////////////////////////////////////////////////
