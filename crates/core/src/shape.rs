//! Callable shape enumeration
//!
//! Every checked callable and every bridge has exactly one shape: its arity
//! plus the kind of result it produces.
//!
//! ## The Nine Shapes
//!
//! | Shape | Arity | Result |
//! |-------|-------|--------|
//! | Runnable | 0 | none |
//! | Consumer | 1 | none |
//! | BiConsumer | 2 | none |
//! | Supplier | 0 | value |
//! | Function | 1 | value |
//! | BiFunction | 2 | value |
//! | Condition | 0 | bool |
//! | Predicate | 1 | bool |
//! | BiPredicate | 2 | bool |

/// What a shape's entry point hands back on success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// No result (`()`)
    Unit,
    /// A caller-chosen result type
    Value,
    /// A boolean verdict
    Bool,
}

/// The nine callable shapes
///
/// ## Invariant
///
/// This set is closed. The checked traits, the bridge signatures and this
/// enum always list the same nine shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Zero arguments, no result
    Runnable,
    /// One argument, no result
    Consumer,
    /// Two arguments, no result
    BiConsumer,
    /// Zero arguments, produces a value
    Supplier,
    /// One argument, produces a value
    Function,
    /// Two arguments, produces a value
    BiFunction,
    /// Zero arguments, produces a boolean
    Condition,
    /// One argument, produces a boolean
    Predicate,
    /// Two arguments, produces a boolean
    BiPredicate,
}

impl Shape {
    /// All shapes (for iteration)
    pub const ALL: [Shape; 9] = [
        Shape::Runnable,
        Shape::Consumer,
        Shape::BiConsumer,
        Shape::Supplier,
        Shape::Function,
        Shape::BiFunction,
        Shape::Condition,
        Shape::Predicate,
        Shape::BiPredicate,
    ];

    /// Get all shapes as a slice
    pub fn all() -> &'static [Shape] {
        &Self::ALL
    }

    /// Short lowercase name (used in logs and `Display`)
    pub const fn name(&self) -> &'static str {
        match self {
            Shape::Runnable => "runnable",
            Shape::Consumer => "consumer",
            Shape::BiConsumer => "bi-consumer",
            Shape::Supplier => "supplier",
            Shape::Function => "function",
            Shape::BiFunction => "bi-function",
            Shape::Condition => "condition",
            Shape::Predicate => "predicate",
            Shape::BiPredicate => "bi-predicate",
        }
    }

    /// Parse from short name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "runnable" => Some(Shape::Runnable),
            "consumer" => Some(Shape::Consumer),
            "bi-consumer" => Some(Shape::BiConsumer),
            "supplier" => Some(Shape::Supplier),
            "function" => Some(Shape::Function),
            "bi-function" => Some(Shape::BiFunction),
            "condition" => Some(Shape::Condition),
            "predicate" => Some(Shape::Predicate),
            "bi-predicate" => Some(Shape::BiPredicate),
            _ => None,
        }
    }

    /// Number of arguments the entry point takes
    pub const fn arity(&self) -> usize {
        match self {
            Shape::Runnable | Shape::Supplier | Shape::Condition => 0,
            Shape::Consumer | Shape::Function | Shape::Predicate => 1,
            Shape::BiConsumer | Shape::BiFunction | Shape::BiPredicate => 2,
        }
    }

    /// What the entry point returns on success
    pub const fn result_kind(&self) -> ResultKind {
        match self {
            Shape::Runnable | Shape::Consumer | Shape::BiConsumer => ResultKind::Unit,
            Shape::Supplier | Shape::Function | Shape::BiFunction => ResultKind::Value,
            Shape::Condition | Shape::Predicate | Shape::BiPredicate => ResultKind::Bool,
        }
    }

    /// Check if this shape produces a boolean verdict
    pub const fn is_boolean(&self) -> bool {
        matches!(self.result_kind(), ResultKind::Bool)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
