/// A binary infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Looks up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// The symbol of the operator as it appears in input and RPN output.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// The binding strength of the operator. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Whether equal-precedence chains of the operator group right-to-left.
    /// Only `^` does; all other operators are left-associative.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

/// A recognized function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `max(a, b)`
    Max,
    /// `min(a, b)`
    Min,
}

impl Function {
    /// Looks up a function by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "max" => Some(Self::Max),
            "min" => Some(Self::Min),
            _ => None,
        }
    }

    /// The name of the function as it appears in input and RPN output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    /// How many operands the function consumes.
    pub const fn arity(self) -> u8 {
        match self {
            Self::Sin | Self::Cos | Self::Tan => 1,
            Self::Max | Self::Min => 2,
        }
    }
}

/// Looks up the value of a named constant.
pub fn constant_value(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        _ => None,
    }
}

/// Whether the supplied name is a recognized constant.
pub fn is_constant(name: &str) -> bool {
    constant_value(name).is_some()
}
